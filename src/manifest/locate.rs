//! Finds a key's bracketed array inside the raw manifest text.
//!
//! The document is never parsed into a tree here: lookups are anchored on
//! the literal `"key":` spelling and the first brackets that follow it.

/// Key path of an array in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPath<'a> {
    /// `"key": [...]` anywhere in the document.
    Top(&'a str),
    /// `"parent": { ... "child": [...] ... }`.
    Nested(&'a str, &'a str),
}

impl std::fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyPath::Top(key) => write!(f, "{}", key),
            KeyPath::Nested(parent, child) => write!(f, "{}.{}", parent, child),
        }
    }
}

/// An array's text and its byte span (`start..end`, brackets included)
/// in the owning document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedArray {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl LocatedArray {
    /// Replaces the located span with `replacement`.
    pub fn splice(&self, document: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(document.len() + replacement.len());
        out.push_str(&document[..self.start]);
        out.push_str(replacement);
        out.push_str(&document[self.end..]);
        out
    }
}

pub fn locate(document: &str, path: KeyPath<'_>) -> Option<LocatedArray> {
    match path {
        KeyPath::Top(key) => locate_top(document, key, 0),
        KeyPath::Nested(parent, child) => {
            let (body_start, body_end) = object_span(document, parent)?;
            locate_top(&document[body_start..body_end], child, body_start)
        }
    }
}

fn locate_top(document: &str, key: &str, offset: usize) -> Option<LocatedArray> {
    let anchor = format!("\"{}\":", key);
    let key_pos = document.find(&anchor)?;
    let after_key = key_pos + anchor.len();
    let open = after_key + document[after_key..].find('[')?;
    let close = open + document[open..].find(']')?;
    Some(LocatedArray {
        text: document[open..=close].to_string(),
        start: offset + open,
        end: offset + close + 1,
    })
}

/// Span of the object value of `"parent":`, braces included.
fn object_span(document: &str, parent: &str) -> Option<(usize, usize)> {
    let anchor = format!("\"{}\":", parent);
    let key_pos = document.find(&anchor)?;
    let after_key = key_pos + anchor.len();
    let open = after_key + document[after_key..].find('{')?;

    let mut depth = 0usize;
    for (i, c) in document[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((open, open + i + 1));
                }
            }
            _ => {}
        }
    }
    None
}
