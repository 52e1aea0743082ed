//! Category names and the configured category set
//!
//! Categories are compared case- and accent-insensitively. Every category is
//! stored in its canonical form: trimmed, lowercased, with diacritics removed
//! ("Alimentação" becomes "alimentacao").

use crate::types::LedgerError;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a raw category name
///
/// Lowercases, decomposes to NFD and drops combining marks.
pub fn normalize_category(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// The finite set of allowed categories, in configuration order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Build a set from raw names; names are canonicalized and deduplicated
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical: Vec<String> = Vec::new();
        for name in names {
            let name = normalize_category(name.as_ref());
            if !name.is_empty() && !canonical.contains(&name) {
                canonical.push(name);
            }
        }
        CategorySet { names: canonical }
    }

    /// Resolve raw user input to its canonical configured name
    ///
    /// # Errors
    ///
    /// Returns `InvalidCategory` when the canonical form is not configured.
    pub fn resolve(&self, raw: &str) -> Result<String, LedgerError> {
        let canonical = normalize_category(raw);
        if self.contains(&canonical) {
            Ok(canonical)
        } else {
            Err(LedgerError::invalid_category(raw))
        }
    }

    /// Check membership of an already-canonical name
    pub fn contains(&self, canonical: &str) -> bool {
        self.names.iter().any(|name| name == canonical)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
