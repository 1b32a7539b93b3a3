//! Message catalog and lookup.
//!
//! A catalog maps message keys (like "property.missing") to templates with
//! positional placeholders `%0%`, `%1%`, ... The built-in English catalog is
//! embedded from `messages.json`; other languages load their own JSON and fall
//! back to the built-in one for keys they do not translate.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Built-in English catalog, parsed on first use.
///
/// # Panics
///
/// Panics if the embedded JSON is invalid. This can only happen if someone
/// edits `messages.json` incorrectly, and the catalog tests catch it.
static BUILTIN: Lazy<MessageCatalog> = Lazy::new(|| {
    let json_data = include_str!("../messages.json");
    MessageCatalog::from_json_str(json_data).expect("Invalid built-in message catalog JSON")
});

/// Key to template lookup table.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
    fallback_to_builtin: bool,
}

impl MessageCatalog {
    /// The embedded English catalog.
    pub fn builtin() -> &'static MessageCatalog {
        &BUILTIN
    }

    /// Load a catalog from a flat JSON object of key/template pairs.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            messages: serde_json::from_str(json)?,
            fallback_to_builtin: false,
        })
    }

    /// Consult the built-in catalog for keys missing from this one.
    pub fn with_builtin_fallback(mut self) -> Self {
        self.fallback_to_builtin = true;
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    /// The raw template for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.messages.get(key) {
            Some(template) => Some(template.as_str()),
            None if self.fallback_to_builtin => BUILTIN.messages.get(key).map(String::as_str),
            None => None,
        }
    }

    /// Render `key` with positional arguments.
    ///
    /// An unknown key renders as the key itself so a missing translation is
    /// visible rather than silent. Arguments are inserted verbatim; a
    /// placeholder inside an argument is never expanded. A placeholder with
    /// no matching argument is kept as written.
    pub fn localize(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.get(key) else {
            return key.to_string();
        };

        let mut text = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find('%') {
            text.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let placeholder = after.find('%').and_then(|end| {
                let index: usize = after[..end].parse().ok()?;
                Some((args.get(index)?, end))
            });
            match placeholder {
                Some((arg, end)) => {
                    text.push_str(arg);
                    rest = &after[end + 1..];
                }
                None => {
                    text.push('%');
                    rest = after;
                }
            }
        }
        text.push_str(rest);
        text
    }

    /// Join items as "a, b or c" using the catalog's conjunctions.
    pub fn join_or<S: AsRef<str>>(&self, items: &[S]) -> String {
        let separator = self.get("conjunction.separator").unwrap_or(", ");
        let or = self.get("conjunction.or").unwrap_or(" or ");
        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [init @ .., last] => {
                let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
                format!("{}{}{}", head.join(separator), or, last.as_ref())
            }
        }
    }
}

/// Quote a user-provided value for inclusion in a message.
pub fn quote(value: &str) -> String {
    format!("\"{value}\"")
}
