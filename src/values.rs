use std::io::BufRead;

use anyhow::{anyhow, Context, Result};

use crate::SortError;

/// Parses whitespace-separated decimal integers.
///
/// `-0` is read as `0`. Other negative values fail with
/// [`SortError::InvalidInput`]; any other token that is not an integer fails
/// with a message naming it.
pub fn parse_values(text: &str) -> Result<Vec<u64>> {
    let mut vals = vec![];
    for (i, token) in text.split_whitespace().enumerate() {
        vals.push(parse_value(token).with_context(|| format!("token {}", i + 1))?);
    }
    Ok(vals)
}

fn parse_value(token: &str) -> Result<u64> {
    if let Ok(val) = token.parse::<u64>() {
        return Ok(val);
    }
    if let Some(abs) = token.strip_prefix('-').filter(|abs| !abs.starts_with('+')) {
        match abs.parse::<u64>() {
            Ok(0) => return Ok(0),
            Ok(_) => return Err(SortError::InvalidInput(token.to_string()).into()),
            Err(_) => {}
        }
    }
    Err(anyhow!("invalid integer: {:?}", token))
}

/// Reads whitespace-separated integers line by line.
pub fn read_values<R: BufRead>(reader: R) -> Result<Vec<u64>> {
    let mut vals = vec![];
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let parsed = parse_values(&line).with_context(|| format!("line {}", lineno + 1))?;
        vals.extend(parsed);
    }
    Ok(vals)
}

/// Renders values as a single space-separated line, without a trailing newline.
pub fn format_values(vals: &[u64]) -> String {
    vals.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
