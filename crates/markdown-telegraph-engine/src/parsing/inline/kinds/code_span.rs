/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": their content is emitted verbatim.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static [u8; 1] = b"`";
}
