/// Inline link `[text](target)`.
///
/// Text is one or more characters other than `]`; the target is one or more
/// characters other than `)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
}
