pub mod config;
pub mod major;
pub mod profile;
pub mod report;
pub mod scoring;
