/// Case-insensitive substring check against a list of lower-case keywords.
/// Empty text never matches.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}

/// Splits a comma-separated catalog field into trimmed lower-case keywords.
pub fn keyword_list(csv: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in csv.split(',').map(|k| k.trim().to_lowercase()) {
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}

/// Splits free text on whitespace and commas into lower-case tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Counts tokens that contain, or are contained by, any keyword.
pub fn overlap_count(tokens: &[String], keywords: &[String]) -> usize {
    tokens
        .iter()
        .filter(|token| {
            keywords
                .iter()
                .any(|keyword| token.contains(keyword.as_str()) || keyword.contains(token.as_str()))
        })
        .count()
}
