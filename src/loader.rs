use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use thiserror::Error;

use crate::data::Trace;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("input file contains no valid two-column numeric rows")]
    Empty,
}

/// Load a two-column (x, y) trace from a text or csv file.
///
/// `.csv` inputs get their delimiter sniffed from the first data line
/// (comma, semicolon, or tab); anything else is treated as whitespace-
/// separated columns. Rows whose first two fields do not parse as numbers
/// (headers, comments, units lines) are skipped rather than rejected.
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<Trace> {
    let path_ref = path.as_ref();
    let raw = fs::read(path_ref).with_context(|| format!("failed to open {:?}", path_ref))?;
    let text = decode_text(&raw);

    let source_name = path_ref
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path_ref.display().to_string());

    let is_csv = path_ref
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let trace = if is_csv {
        let delimiter = sniff_delimiter(&text);
        parse_delimited(&text, delimiter, &source_name)?
    } else {
        parse_whitespace(&text, &source_name)?
    };
    Ok(trace)
}

/// Strip a UTF-8 BOM and replace undecodable bytes instead of failing on
/// instrument exports with stray encodings.
fn decode_text(raw: &[u8]) -> String {
    let raw = raw.strip_prefix(b"\xef\xbb\xbf").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

fn sniff_delimiter(text: &str) -> u8 {
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.contains(';') {
            return b';';
        }
        if trimmed.contains('\t') {
            return b'\t';
        }
        return b',';
    }
    b','
}

fn parse_delimited(text: &str, delimiter: u8, source_name: &str) -> Result<Trace> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields: Vec<&str> = record
            .iter()
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect();
        if let Some((xv, yv)) = parse_pair(&fields) {
            x.push(xv);
            y.push(yv);
        }
    }

    finalize_trace(x, y, source_name)
}

fn parse_whitespace(text: &str, source_name: &str) -> Result<Trace> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if let Some((xv, yv)) = parse_pair(&fields) {
            x.push(xv);
            y.push(yv);
        }
    }

    finalize_trace(x, y, source_name)
}

/// First two fields as finite numbers, or None to skip the row.
fn parse_pair(fields: &[&str]) -> Option<(f64, f64)> {
    if fields.len() < 2 {
        return None;
    }
    let xv = fields[0].parse::<f64>().ok()?;
    let yv = fields[1].parse::<f64>().ok()?;
    if !xv.is_finite() || !yv.is_finite() {
        return None;
    }
    Some((xv, yv))
}

fn finalize_trace(x: Vec<f64>, y: Vec<f64>, source_name: &str) -> Result<Trace> {
    if x.is_empty() {
        return Err(LoaderError::Empty.into());
    }
    Ok(Trace {
        x,
        y,
        source_name: source_name.to_string(),
    })
}

pub fn validate_trace(trace: &Trace) -> Result<()> {
    if trace.len() < 3 {
        return Err(anyhow!(
            "not enough samples for peak extraction (need at least 3, got {})",
            trace.len()
        ));
    }
    Ok(())
}
