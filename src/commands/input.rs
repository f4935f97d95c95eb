//! Reading answer text and JSON input from flags, files or stdin

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use anscore_core::error::{AnscoreError, Result};

/// Read a file, naming it in the error
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        AnscoreError::Io(io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

/// Read all of stdin
pub fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    debug!(content_len = content.len(), "read_stdin");
    Ok(content)
}

/// Text given inline or in a file; `None` when neither is given.
///
/// File content loses its trailing line break; inline text is taken verbatim.
pub fn read_text(inline: Option<&str>, file: Option<&Path>) -> Result<Option<String>> {
    match (inline, file) {
        (Some(text), _) => Ok(Some(text.to_string())),
        (None, Some(path)) => Ok(Some(trim_line_end(read_file(path)?))),
        (None, None) => Ok(None),
    }
}

/// Content of `path`, or of stdin when no path is given
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_file(path),
        None => read_stdin(),
    }
}

/// Drop trailing line breaks, keep everything else
pub fn trim_line_end(mut text: String) -> String {
    let trimmed = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed);
    text
}
