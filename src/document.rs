//! Loading, rendering and writing JSON documents

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{Error, Result};

/// Indentation used when nothing else is configured.
pub const DEFAULT_INDENT: usize = 4;

/// Read and parse a JSON document.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &content)
}

/// Parse JSON text, attributing failures to `path`.
pub fn parse_document(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print a document with `indent` spaces and a trailing newline.
pub fn render_document(name: &str, document: &Value, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut ser)
        .map_err(|source| Error::Serialize {
            document: name.to_string(),
            source,
        })?;

    // serde_json only emits valid UTF-8
    let mut rendered = String::from_utf8_lossy(&buf).into_owned();
    rendered.push('\n');
    Ok(rendered)
}

/// Overwrite `path` with `content`.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
