use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read script '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read script from stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Reads a script file, or stdin when `path` is `-`.
pub fn read_script(path: &Path) -> Result<String, InputError> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut content)
            .map_err(InputError::Stdin)?;
        return Ok(content);
    }

    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Removes a surrounding fenced code block, as generated scripts often
/// arrive wrapped in one.
///
/// The opening fence line (with any info string such as `json` or `text`)
/// and a trailing fence are dropped independently. Unfenced text is
/// returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.split_once('\n') {
            Some((_info, inner)) => inner,
            None => rest,
        };
    }

    if let Some(inner) = body.strip_suffix("```") {
        body = inner;
    }

    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_unfenced() {
        assert_eq!(strip_code_fence("  plain text \n"), "plain text");
    }

    #[test]
    fn test_strip_fence_with_info_string() {
        let input = "```text\nHello\n---\nWorld\n```";
        assert_eq!(strip_code_fence(input), "Hello\n---\nWorld");
    }

    #[test]
    fn test_strip_bare_fence() {
        assert_eq!(strip_code_fence("\n```\n[action: go]\n```\n"), "[action: go]");
    }

    #[test]
    fn test_strip_only_closing_fence() {
        assert_eq!(strip_code_fence("line\n```"), "line");
    }

    #[test]
    fn test_strip_empty_fence() {
        assert_eq!(strip_code_fence("```"), "");
        assert_eq!(strip_code_fence("```\n```"), "");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_script(Path::new("does/not/exist.ngs")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.ngs"));
    }
}
