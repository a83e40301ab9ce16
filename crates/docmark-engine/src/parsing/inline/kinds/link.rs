/// Inline link `[text](href)`.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: char = ']';
    pub const HREF_OPEN: char = '(';
    pub const HREF_CLOSE: char = ')';
}
