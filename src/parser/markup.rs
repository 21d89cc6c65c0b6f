use std::sync::LazyLock;

use regex::Regex;

static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));

static EM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));

/// Converts `**bold**` and `*em*` spans into `<strong>` and `<em>` markup.
///
/// The double-asterisk form is rewritten over the whole line before the
/// single form is tried, so `**x**` never turns into nested `<em>` tags.
pub fn render_emphasis(line: &str) -> String {
    let strong = STRONG_RE.replace_all(line, "<strong>${1}</strong>");
    EM_RE.replace_all(&strong, "<em>${1}</em>").into_owned()
}
