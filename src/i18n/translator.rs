//! Key path lookup over a fetched translation document
//!
//! A [`Translator`] owns one parsed document together with a memo of every
//! key it has been asked for. Keys are split into path segments and walked
//! down through nested objects, so `"#front/greeting"` and `"#front.greeting"`
//! both address `{"#front": {"greeting": ...}}`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use regex::Regex;
use serde_json::Value;
use tracing::trace;

/// How a key is split into path segments
#[derive(Debug, Clone, Default)]
pub enum Separator {
    /// Either `/` or `.`
    #[default]
    Default,
    /// Verbatim split point
    Literal(String),
    /// Custom pattern
    Pattern(Regex),
}

impl Separator {
    fn split<'k>(&self, key: &'k str) -> Vec<&'k str> {
        match self {
            Separator::Default => key.split(['/', '.']).collect(),
            // An empty split point yields one segment per character
            Separator::Literal(sep) if sep.is_empty() => key
                .char_indices()
                .map(|(i, c)| &key[i..i + c.len_utf8()])
                .collect(),
            Separator::Literal(sep) => key.split(sep.as_str()).collect(),
            Separator::Pattern(re) => split_pattern(re, key),
        }
    }
}

/// Split on every match of `re`.
///
/// An empty match at the end of the key, or right where the previous
/// segment ended, does not split. So `""` splits `"ab"` into `a`, `b`.
fn split_pattern<'k>(re: &Regex, key: &'k str) -> Vec<&'k str> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(key) {
        if m.start() == m.end() && (m.start() == last || m.start() == key.len()) {
            continue;
        }
        segments.push(&key[last..m.start()]);
        last = m.end();
    }
    segments.push(&key[last..]);
    segments
}

impl From<&str> for Separator {
    fn from(sep: &str) -> Self {
        Separator::Literal(sep.to_string())
    }
}

impl From<String> for Separator {
    fn from(sep: String) -> Self {
        Separator::Literal(sep)
    }
}

impl From<char> for Separator {
    fn from(sep: char) -> Self {
        Separator::Literal(sep.to_string())
    }
}

impl From<Regex> for Separator {
    fn from(re: Regex) -> Self {
        Separator::Pattern(re)
    }
}

/// Memoizing lookup function over one translation document
#[derive(Debug)]
pub struct Translator {
    document: Value,
    /// Resolved values by the exact key string, `None` marks a miss
    cache: Mutex<HashMap<String, Option<Value>>>,
}

impl Translator {
    /// Create a translator over a parsed document
    pub fn new(document: Value) -> Self {
        Self {
            document,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a key using the default `/` or `.` separator
    pub fn get(&self, key: &str) -> Option<Value> {
        self.get_with(key, &Separator::Default)
    }

    /// Look up a key split by a custom separator
    ///
    /// Results are memoized by the key string alone. Asking for the same key
    /// again with a different separator returns the first answer.
    pub fn get_with(&self, key: &str, separator: &Separator) -> Option<Value> {
        if !self.document.is_object() {
            return None;
        }

        let mut cache = self.cache();
        if let Some(cached) = cache.get(key) {
            trace!(key = key, hit = cached.is_some(), "Translation cache hit");
            return cached.clone();
        }

        let value = if key.is_empty() {
            Some(self.document.clone())
        } else {
            walk(&self.document, &separator.split(key)).cloned()
        };

        cache.insert(key.to_string(), value.clone());
        value
    }

    /// Look up a key and return it only if it resolves to a string
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// The document this translator was built from
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Number of memoized keys, hits and misses alike
    pub fn cached_keys(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<String, Option<Value>>> {
        // A poisoned memo is still a valid memo
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Walk `segments` down from `root`.
///
/// Objects are indexed by key and arrays by position. Reaching a leaf or
/// null before every segment is consumed is a miss.
fn walk<'d>(root: &'d Value, segments: &[&str]) -> Option<&'d Value> {
    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(*segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
