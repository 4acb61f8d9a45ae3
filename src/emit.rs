//! Output staging for samples and reports.
//!
//! File output is staged in the destination directory and renamed into
//! place, so a failed write never leaves a truncated fixture behind.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Join rendered lines into the exact byte sequence a sample emits.
pub fn render_text(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Write text to stdout.
pub fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("write stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

/// Stage text next to `dest` and rename it into place.
pub fn write_text_atomic(dest: &Path, text: &str) -> Result<()> {
    let parent = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    let mut staged = NamedTempFile::new_in(parent)
        .with_context(|| format!("stage in {}", parent.display()))?;
    staged
        .write_all(text.as_bytes())
        .with_context(|| format!("write {}", dest.display()))?;
    staged
        .persist(dest)
        .with_context(|| format!("publish {}", dest.display()))?;
    Ok(())
}
