//! Terminal escape-sequence stripping for the file sink.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// CSI (`ESC [ params final`), OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`),
/// nF (`ESC`, intermediates 0x20-0x2F, final byte, e.g. `ESC ( B`) and the
/// remaining two-byte `ESC` + Fe escapes, in that order of preference.
static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\x1b(?:\[[0-?]*[ -/]*[@-~]|\][^\x07\x1b]*(?:\x07|\x1b\\)|[ -/]+[0-~]|[@-_])",
    )
    .expect("escape-sequence pattern is valid")
});

/// Remove terminal formatting escape sequences from `content`.
///
/// Every other character, including bare carriage returns and tabs, is kept.
/// Borrows when there is nothing to strip.
pub fn colorless(content: &str) -> Cow<'_, str> {
    if !content.contains('\x1b') {
        return Cow::Borrowed(content);
    }
    ESCAPE_RE.replace_all(content, "")
}
