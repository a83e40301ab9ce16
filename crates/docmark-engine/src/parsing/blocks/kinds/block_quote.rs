/// Blockquote block type with owned delimiter constant.
///
/// Callouts share the same line prefix, so both use these helpers.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one level of quoting: `> ` or a bare `>`.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix("> ")
            .or_else(|| line.strip_prefix(Self::PREFIX))
            .unwrap_or(line)
    }

    /// Prefixes every line of `body` with `> `; empty lines become a bare `>`.
    pub fn prefix_lines(body: &str) -> String {
        body.lines()
            .map(|line| {
                if line.is_empty() {
                    Self::PREFIX.to_string()
                } else {
                    format!("{} {line}", Self::PREFIX)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
