//! Property specs and property records.
//!
//! A [`PropertySpec`] pairs a checker with the bookkeeping flags an object
//! checker needs: whether the key may be absent and whether using it is
//! deprecated. [`Properties`] is the ordered record of specs for one object
//! schema.

use indexmap::IndexMap;

use crate::checker::Checker;
use crate::error::SchemaError;

/// How one property of an object schema is checked.
#[derive(Debug, Clone)]
pub enum PropertySpec {
    /// A required property with no annotations.
    Bare(Checker),
    Flagged(FlaggedProperty),
}

/// A property carrying optionality, deprecation or a documentation path
/// override.
#[derive(Debug, Clone)]
pub struct FlaggedProperty {
    pub checker: Checker,
    pub optional: bool,
    pub deprecated: bool,
    /// Segment inserted before the key when building the documentation path.
    pub doc_path: Option<String>,
}

impl PropertySpec {
    pub fn checker(&self) -> &Checker {
        match self {
            PropertySpec::Bare(checker) => checker,
            PropertySpec::Flagged(flagged) => &flagged.checker,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, PropertySpec::Flagged(f) if f.optional)
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, PropertySpec::Flagged(f) if f.deprecated)
    }

    /// Whether an absent key goes unreported. Deprecated keys are never
    /// required.
    pub fn may_be_absent(&self) -> bool {
        self.is_optional() || self.is_deprecated()
    }

    pub fn doc_path(&self) -> Option<&str> {
        match self {
            PropertySpec::Bare(_) => None,
            PropertySpec::Flagged(flagged) => flagged.doc_path.as_deref(),
        }
    }

    pub fn with_doc_path(self, path: impl Into<String>) -> Self {
        let mut flagged = self.into_flagged();
        flagged.doc_path = Some(path.into());
        PropertySpec::Flagged(flagged)
    }

    fn into_flagged(self) -> FlaggedProperty {
        match self {
            PropertySpec::Bare(checker) => FlaggedProperty {
                checker,
                optional: false,
                deprecated: false,
                doc_path: None,
            },
            PropertySpec::Flagged(flagged) => flagged,
        }
    }
}

impl From<Checker> for PropertySpec {
    fn from(checker: Checker) -> Self {
        PropertySpec::Bare(checker)
    }
}

/// Mark a property as optional.
pub fn opt(spec: impl Into<PropertySpec>) -> PropertySpec {
    let mut flagged = spec.into().into_flagged();
    flagged.optional = true;
    PropertySpec::Flagged(flagged)
}

/// Mark a property as deprecated. Deprecated properties are also never
/// reported as missing.
pub fn deprecated(spec: impl Into<PropertySpec>) -> PropertySpec {
    let mut flagged = spec.into().into_flagged();
    flagged.deprecated = true;
    PropertySpec::Flagged(flagged)
}

/// Ordered map from key to property spec for one object schema.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: IndexMap<String, PropertySpec>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form. A key declared twice keeps its first position and
    /// takes the later spec.
    pub fn with(mut self, key: impl Into<String>, spec: impl Into<PropertySpec>) -> Self {
        self.entries.insert(key.into(), spec.into());
        self
    }

    /// Add a property, rejecting a key that is already declared.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        spec: impl Into<PropertySpec>,
    ) -> Result<(), SchemaError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(SchemaError::DuplicateProperty(key));
        }
        self.entries.insert(key, spec.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&PropertySpec> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combine two records. Keys of `other` come after ours and win on
    /// conflict.
    pub fn merge(mut self, other: Properties) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Apply `f` to every spec, keeping keys and order.
    pub fn map_specs(self, mut f: impl FnMut(PropertySpec) -> PropertySpec) -> Self {
        Self {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, PropertySpec)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, PropertySpec)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Properties {
    type Item = (String, PropertySpec);
    type IntoIter = indexmap::map::IntoIter<String, PropertySpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
