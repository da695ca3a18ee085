//! INI-style parser for nami configuration files.
//!
//! The grammar matches the configparser format the original files use:
//! `[section]` headers, `key = value` or `key: value` pairs, full-line `#`
//! and `;` comments, blank lines. Inline comments are not stripped. A file
//! may not repeat a section header or a key within a section, and a pair
//! before the first header is an error. All errors carry the file path and
//! the 1-based line number.

use std::path::Path;

use crate::error::ConfigError;

/// Parsed pairs of one file, section order and pair order preserved.
pub(super) type ParsedSections = Vec<(String, Vec<(String, String)>)>;

/// Parses one file's worth of configuration text.
///
/// Section and key names are normalized to lowercase; values are kept
/// verbatim (whitespace-trimmed). `path` is only used for error reporting.
pub(super) fn parse(text: &str, path: &Path) -> Result<ParsedSections, ConfigError> {
    let mut sections: ParsedSections = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            let name = section_name(line)
                .ok_or_else(|| parse_err(path, idx, "invalid section header"))?;
            if sections.iter().any(|(s, _)| *s == name) {
                return Err(parse_err(path, idx, &format!("duplicate section '{name}'")));
            }
            sections.push((name, Vec::new()));
            current = Some(sections.len() - 1);
            continue;
        }

        let (key, value) = split_pair(line)
            .ok_or_else(|| parse_err(path, idx, "expected 'key = value' or '[section]'"))?;
        let Some(sec) = current else {
            return Err(parse_err(path, idx, "key/value pair before any section header"));
        };
        if sections[sec].1.iter().any(|(k, _)| *k == key) {
            let section = &sections[sec].0;
            return Err(parse_err(
                path,
                idx,
                &format!("duplicate key '{key}' in section '{section}'"),
            ));
        }
        sections[sec].1.push((key, value));
    }

    Ok(sections)
}

/// Extracts and normalizes the name from a `[section]` line.
fn section_name(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    let name = inner.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_lowercase())
}

/// Splits a `key = value` / `key: value` line at its first delimiter.
fn split_pair(line: &str) -> Option<(String, String)> {
    let pos = line.find(['=', ':'])?;
    let key = line[..pos].trim();
    if key.is_empty() {
        return None;
    }
    let value = line[pos + 1..].trim();
    Some((key.to_lowercase(), value.to_string()))
}

fn parse_err(path: &Path, line_idx: usize, message: &str) -> ConfigError {
    ConfigError::Parse {
        path: path.to_path_buf(),
        line: line_idx + 1,
        message: message.to_string(),
    }
}
