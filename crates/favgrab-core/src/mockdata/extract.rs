//! Locate the assignment marker, slice the balanced object literal, and
//! parse it. The literal is a JS object literal rather than strict JSON
//! (bare keys, single quotes, trailing commas), so it is normalized before
//! handing it to serde_json.

use std::path::{Path, PathBuf};

use super::model::MockData;

/// Assignment marker the input file must contain.
pub const MARKER: &str = "export const mockData";

/// Why extraction failed. `Missing` is the fatal-setup case callers report
/// without treating the process as failed.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("input file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no `export const mockData` assignment in {}", .0.display())]
    MarkerNotFound(PathBuf),
    #[error("unbalanced object literal in {}", .0.display())]
    Unbalanced(PathBuf),
    #[error("mock data is not valid structured data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads `path` and parses the embedded mock-data literal.
///
/// All-or-nothing: any failure aborts extraction, there is no partial result.
pub fn extract_mock_data(path: &Path) -> Result<MockData, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::Missing(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let literal = object_literal(&content, path)?;
    let json = normalize_to_json(literal);
    Ok(serde_json::from_str(&json)?)
}

/// Returns the balanced `{ ... }` slice following the assignment marker.
///
/// The scan is string- and comment-aware so braces inside values or comments
/// do not throw off the depth count.
fn object_literal<'a>(content: &'a str, path: &Path) -> Result<&'a str, ExtractError> {
    let at = content
        .find(MARKER)
        .ok_or_else(|| ExtractError::MarkerNotFound(path.to_path_buf()))?;
    let rest = &content[at + MARKER.len()..];
    let open = rest
        .find('{')
        .ok_or_else(|| ExtractError::MarkerNotFound(path.to_path_buf()))?;
    let body = &rest[open..];

    // Structural characters are all ASCII, so a byte scan is safe even with
    // multi-byte text inside string values.
    let b = body.as_bytes();
    let mut depth = 0usize;
    let mut string: Option<u8> = None;
    let mut i = 0;
    while i < b.len() {
        let c = b[i];
        if let Some(quote) = string {
            if c == b'\\' {
                i += 2;
                continue;
            }
            if c == quote {
                string = None;
            }
            i += 1;
            continue;
        }
        match c {
            b'"' | b'\'' | b'`' => string = Some(c),
            b'/' if b.get(i + 1) == Some(&b'/') => {
                while i < b.len() && b[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if b.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < b.len() && !(b[i] == b'*' && b[i + 1] == b'/') {
                    i += 1;
                }
                i += 1;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&body[..=i]);
                }
            }
            _ => {}
        }
        i += 1;
    }
    Err(ExtractError::Unbalanced(path.to_path_buf()))
}

/// Rewrites a JS object literal into strict JSON: quotes bare identifier
/// keys, converts single-quoted strings, drops comments and trailing commas.
/// Bare words not followed by `:` (true, false, null, numbers) pass through.
pub(super) fn normalize_to_json(literal: &str) -> String {
    // Comments go first so the trailing-comma lookahead below only ever has
    // to skip whitespace.
    let stripped = strip_comments(literal);
    let chars: Vec<char> = stripped.chars().collect();
    let mut out = String::with_capacity(stripped.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '"' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    out.push(c);
                    i += 1;
                    if c == '\\' {
                        if i < chars.len() {
                            out.push(chars[i]);
                            i += 1;
                        }
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                out.push('"');
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    i += 1;
                    if c == '\\' {
                        if i < chars.len() {
                            let next = chars[i];
                            i += 1;
                            if next == '\'' {
                                // \' is not a valid JSON escape.
                                out.push('\'');
                            } else {
                                out.push('\\');
                                out.push(next);
                            }
                        }
                    } else if c == '\'' {
                        out.push('"');
                        break;
                    } else if c == '"' {
                        out.push_str("\\\"");
                    } else {
                        out.push(c);
                    }
                }
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if !matches!(chars.get(j), Some(&'}') | Some(&']')) {
                    out.push(',');
                }
                i += 1;
            }
            c if c.is_alphabetic() || c == '_' || c == '$' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '$')
                {
                    i += 1;
                }
                let mut j = i;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if chars.get(j) == Some(&':') {
                    out.push('"');
                    out.push_str(&word);
                    out.push('"');
                } else {
                    out.push_str(&word);
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Removes `//` and `/* */` comments, leaving string contents untouched.
fn strip_comments(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::with_capacity(src.len());
    let mut string: Option<char> = None;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if let Some(quote) = string {
            out.push(c);
            i += 1;
            if c == '\\' {
                if let Some(&next) = chars.get(i) {
                    out.push(next);
                    i += 1;
                }
            } else if c == quote {
                string = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => {
                string = Some(c);
                out.push(c);
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i + 1 < chars.len() && !(chars[i] == '*' && chars[i + 1] == '/') {
                    i += 1;
                }
                i = (i + 2).min(chars.len());
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}
