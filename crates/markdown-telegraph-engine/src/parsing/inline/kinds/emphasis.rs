/// Bold text delimited by a double asterisk on each side.
pub struct Strong;

impl Strong {
    pub const STARS: &'static [u8; 2] = b"**";
}

/// Italic text, delimited by a single asterisk or a single underscore.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: &'static [u8; 1] = b"*";
    pub const UNDERSCORE: &'static [u8; 1] = b"_";
}
