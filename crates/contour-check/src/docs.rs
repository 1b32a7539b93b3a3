//! Documentation lookup for hovers.

use std::collections::HashMap;
use std::hash::BuildHasher;

use contour_diagnostics::MessageCatalog;

/// Maps a dotted documentation path (`loot_table.pools.rolls`) to text.
pub trait Documentation {
    fn lookup(&self, path: &str) -> Option<String>;
}

/// No documentation at all. Hovers show only the signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocumentation;

impl Documentation for NoDocumentation {
    fn lookup(&self, _path: &str) -> Option<String> {
        None
    }
}

impl<S: BuildHasher> Documentation for HashMap<String, String, S> {
    fn lookup(&self, path: &str) -> Option<String> {
        self.get(path).cloned()
    }
}

impl<F> Documentation for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, path: &str) -> Option<String> {
        self(path)
    }
}

/// Documentation stored in a message catalog under `prefix + path`.
#[derive(Debug, Clone)]
pub struct CatalogDocumentation {
    catalog: MessageCatalog,
    prefix: String,
}

impl CatalogDocumentation {
    pub fn new(catalog: MessageCatalog, prefix: impl Into<String>) -> Self {
        Self {
            catalog,
            prefix: prefix.into(),
        }
    }
}

impl Documentation for CatalogDocumentation {
    fn lookup(&self, path: &str) -> Option<String> {
        self.catalog
            .get(&format!("{}{}", self.prefix, path))
            .map(str::to_string)
    }
}
