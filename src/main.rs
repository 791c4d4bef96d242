mod analyze;
mod catalog;
mod cli;
mod config;
mod error;
mod logging;
mod narrative;
mod ranking;
mod report;
mod rules;
mod scoring;
mod store;
mod text;
mod types;

use crate::error::{MatchError, Result};
use crate::narrative::TextGenerator;
use crate::scoring::ScoringInput;
use crate::store::fs::FsStore;
use crate::store::{CatalogProvider, ProfileStore, RecommendationStore, StaticCatalog};
use crate::types::config::MatchConfig;
use crate::types::major::Major;
use crate::types::profile::Assessment;
use clap::Parser;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PRECONDITION: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn read_assessment(path: &Path) -> Result<Assessment> {
    if !path.exists() {
        return Err(MatchError::PathNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Relative paths from config are anchored at the config directory.
fn resolve_path(root: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Command-line catalog first, then `store.catalog`, then the bundled seed.
fn load_majors(root: &Path, cfg: &MatchConfig, flag: Option<&Path>) -> Result<Vec<Major>> {
    if let Some(path) = flag {
        return catalog::load_catalog(path);
    }
    match cfg.catalog_path() {
        Some(configured) => catalog::load_catalog(&resolve_path(root, configured)),
        None => catalog::seed_catalog(),
    }
}

fn open_store(root: &Path, cfg: &MatchConfig) -> FsStore {
    FsStore::new(resolve_path(root, cfg.data_dir()))
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let quiet = cli.quiet;

    let root = cli.config.as_path();
    if !root.exists() {
        return Err(MatchError::PathNotFound(root.display().to_string()));
    }
    let cfg = config::load_config(root)?;

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let assessment = read_assessment(&cmd.input)?;
            let dna = analyze::analyze(&assessment);
            println!("{}", report::render_profile(&dna, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Submit(cmd) => {
            store::validate_user_id(&cmd.user)?;
            let assessment = read_assessment(&cmd.input)?;
            let dna = analyze::analyze(&assessment);
            open_store(root, &cfg).save_dna_profile(&cmd.user, &dna, &assessment.answers)?;
            if !quiet {
                println!("profile saved for {}", cmd.user);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Match(cmd) => {
            let assessment = read_assessment(&cmd.input)?;
            let dna = analyze::analyze(&assessment);
            let majors = load_majors(root, &cfg, cmd.catalog.as_deref())?;
            let strategy =
                scoring::strategy_for(cmd.strategy.unwrap_or(cfg.strategy()), cfg.weights());
            let input = ScoringInput {
                assessment: &assessment,
                dna: &dna,
            };
            let ranked = ranking::rank(
                strategy.as_ref(),
                &input,
                &majors,
                ranking::RankingOptions::from_config(&cfg),
            );
            println!("{}", report::render_ranked(&ranked, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Recommend(cmd) => {
            let data = open_store(root, &cfg);
            let (assessment, dna) = store::load_complete_profile(&data, &cmd.user)?;
            let majors = load_majors(root, &cfg, None)?;
            let kind = cmd.strategy.unwrap_or(cfg.strategy());
            let strategy = scoring::strategy_for(kind, cfg.weights());
            let input = ScoringInput {
                assessment: &assessment,
                dna: &dna,
            };
            let ranked = ranking::rank(
                strategy.as_ref(),
                &input,
                &majors,
                ranking::RankingOptions::from_config(&cfg),
            );
            let record = store::new_record(&cmd.user, kind, &ranked.results)?;
            data.append_recommendation(&record)?;
            println!(
                "{}",
                report::render_recommendation(&record, &ranked, output_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let records = open_store(root, &cfg).list_recommendations(&cmd.user)?;
            println!("{}", report::render_history(&records, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Explain(cmd) => {
            let data = open_store(root, &cfg);
            let (assessment, dna) = store::load_complete_profile(&data, &cmd.user)?;
            let catalog = StaticCatalog::new(load_majors(root, &cfg, None)?);
            let strategy =
                scoring::strategy_for(cmd.strategy.unwrap_or(cfg.strategy()), cfg.weights());
            let input = ScoringInput {
                assessment: &assessment,
                dna: &dna,
            };
            let ranked = ranking::rank(
                strategy.as_ref(),
                &input,
                &catalog.list_majors()?,
                ranking::RankingOptions::from_config(&cfg),
            );

            let generator: Box<dyn TextGenerator> = match &cmd.ai_output {
                Some(path) => {
                    if !path.exists() {
                        return Err(MatchError::PathNotFound(path.display().to_string()));
                    }
                    Box::new(narrative::Canned(std::fs::read_to_string(path)?))
                }
                None => Box::new(narrative::Unavailable),
            };
            let highlighted = ranked.highlight();
            let explanations = narrative::explain_matches(generator.as_ref(), &dna, highlighted);
            let mut plans = Vec::with_capacity(highlighted.len());
            for result in highlighted {
                let major = catalog
                    .get_major(&result.major_id)?
                    .ok_or_else(|| MatchError::MajorNotFound(result.major_id.clone()))?;
                plans.push(narrative::learning_plan(&major));
            }
            println!(
                "{}",
                report::render_explanations(&explanations, &plans, output_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Majors(cmd) => {
            let majors = load_majors(root, &cfg, None)?;
            println!("{}", report::render_majors(&majors, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) if e.is_precondition() => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::PRECONDITION);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
