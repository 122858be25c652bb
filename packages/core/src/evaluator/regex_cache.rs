//! Compiled regex cache for `match()` and `search()`
//!
//! Patterns are I-Regexp (RFC 9485). They are translated to the `regex` crate's syntax
//! once and cached by translated source, up to a fixed number of entries.

use std::sync::RwLock;

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of compiled patterns kept
const REGEX_CACHE_CAPACITY: usize = 128;

pub(super) static REGEX_CACHE: Lazy<RegexCache> =
    Lazy::new(|| RegexCache::with_capacity(REGEX_CACHE_CAPACITY));

pub(super) struct RegexCache {
    entries: RwLock<HashMap<String, Regex>>,
    capacity: usize,
}

impl RegexCache {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            capacity,
        }
    }

    /// Compiled form of `pattern`, anchored at both ends when `full`
    ///
    /// Returns `None` when the pattern does not compile.
    pub(super) fn get(&self, pattern: &str, full: bool) -> Option<Regex> {
        let source = translate(pattern, full);

        if let Ok(entries) = self.entries.read() {
            if let Some(regex) = entries.get(&source) {
                return Some(regex.clone());
            }
        }

        let regex = match Regex::new(&source) {
            Ok(regex) => regex,
            Err(error) => {
                log::debug!("invalid regular expression {pattern:?}: {error}");
                return None;
            }
        };

        if let Ok(mut entries) = self.entries.write() {
            if entries.len() < self.capacity {
                log::trace!("caching compiled regular expression {source:?}");
                entries.insert(source, regex.clone());
            }
        }
        Some(regex)
    }
}

/// Translate I-Regexp into `regex` syntax
///
/// An unescaped `.` outside a character class excludes line terminators, as I-Regexp
/// requires.
fn translate(pattern: &str, full: bool) -> String {
    let mut source = String::with_capacity(pattern.len() + 16);
    if full {
        source.push_str("^(?:");
    }

    let mut escaped = false;
    let mut in_class = false;
    for ch in pattern.chars() {
        if escaped {
            source.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => {
                source.push(ch);
                escaped = true;
            }
            '[' if !in_class => {
                in_class = true;
                source.push(ch);
            }
            ']' if in_class => {
                in_class = false;
                source.push(ch);
            }
            '.' if !in_class => source.push_str("[^\\n\\r]"),
            _ => source.push(ch),
        }
    }

    if full {
        source.push_str(")$");
    }
    source
}
