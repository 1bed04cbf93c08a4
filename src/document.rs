pub mod normalize;
pub mod sanitize;

use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

pub use normalize::normalize;
pub use sanitize::{sanitize, SanitizeStats};

/// Read a YAML (or JSON) document into an untyped tree, resolving `<<` merge keys.
pub fn read_document(path: &str) -> Result<Value> {
    let data = fs::read_to_string(path).with_context(|| format!("read input spec {}", path))?;
    let mut doc: Value =
        serde_yaml::from_str(&data).with_context(|| format!("parse yaml {}", path))?;
    doc.apply_merge()
        .with_context(|| format!("parse yaml {}", path))?;
    debug!(path, "Read document");
    Ok(doc)
}

/// Serialize the tree as YAML, creating or truncating `path`.
pub fn write_document(path: &str, doc: &Value) -> Result<()> {
    let s = serde_yaml::to_string(doc).context("encode yaml")?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options
        .open(path)
        .with_context(|| format!("write sanitized spec {}", path))?;
    file.write_all(s.as_bytes())
        .with_context(|| format!("write sanitized spec {}", path))?;
    debug!(path, "Wrote document");
    Ok(())
}
