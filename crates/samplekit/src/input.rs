//! Plain-text sample loading.
//!
//! Sample files are whitespace/newline-separated decimal numbers. Blank
//! lines and `#` comment lines are skipped.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub(crate) fn read_sample(path: Option<&Path>) -> Result<Vec<f64>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sample from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read sample from stdin")?;
            buf
        }
    };
    parse_sample(&raw)
}

pub(crate) fn parse_sample(raw: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let value: f64 = token
                .parse()
                .with_context(|| format!("line {}: invalid number {token:?}", index + 1))?;
            values.push(value);
        }
    }
    Ok(values)
}
