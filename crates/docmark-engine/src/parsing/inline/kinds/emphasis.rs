/// `**bold**`
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

/// `*italic*`
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: u8 = b'*';
}
