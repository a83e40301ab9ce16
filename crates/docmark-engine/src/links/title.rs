use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static FRONTMATTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---").expect("frontmatter regex"));

static FRONTMATTER_TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^title:\s*["']?(.+?)["']?\s*$"#).expect("frontmatter title regex")
});

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+?)\s*$").expect("h1 regex"));

/// Title of a document: frontmatter `title:`, else the first `# ` heading,
/// else the file stem of `fallback_path` in title case.
pub fn extract_title(markup: &str, fallback_path: &str) -> String {
    if let Some(front) = FRONTMATTER_REGEX.captures(markup)
        && let Some(title) = FRONTMATTER_TITLE_REGEX.captures(&front[1])
    {
        return title[1].trim().to_string();
    }

    if let Some(h1) = H1_REGEX.captures(markup) {
        return h1[1].trim().to_string();
    }

    title_from_path(fallback_path)
}

/// `notes/order-entry_tips.md` -> `Order Entry Tips`
pub fn title_from_path(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
