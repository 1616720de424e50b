//! Conversion of Graphene C type names into introspection identifiers.
//!
//! `graphene_point3d_t` becomes `GraphenePoint3D`; anything outside the
//! Graphene naming family is passed through untouched.

mod segment;

use tracing::debug;

pub use segment::title_case_segment;

/// Prefix shared by every public Graphene symbol.
pub const GRAPHENE_PREFIX: &str = "graphene_";

/// Suffix marking a C type alias.
pub const TYPE_SUFFIX: &str = "_t";

/// Identifier filter for one `prefix_..._suffix` naming family.
///
/// Prefix and suffix are never empty: an empty marker would match every
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentFilter {
    /// Leading marker, `graphene_` by default.
    prefix: String,
    /// Trailing marker, `_t` by default.
    suffix: String,
}

impl Default for IdentFilter {
    fn default() -> Self {
        Self {
            prefix: GRAPHENE_PREFIX.to_string(),
            suffix: TYPE_SUFFIX.to_string(),
        }
    }
}

impl IdentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix. An empty `prefix` leaves the current one in place.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        if !prefix.is_empty() {
            self.prefix = prefix.to_string();
        }
        self
    }

    /// Sets the suffix. An empty `suffix` leaves the current one in place.
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        if !suffix.is_empty() {
            self.suffix = suffix.to_string();
        }
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether `text` belongs to the naming family.
    ///
    /// Either condition is enough: a bare `graphene_foo` is eligible even
    /// though it carries no type suffix.
    pub fn is_eligible(&self, text: &str) -> bool {
        text.starts_with(&self.prefix) || text.ends_with(&self.suffix)
    }

    /// Converts `text` into PascalCase, or returns it unchanged if it is
    /// not part of the naming family.
    ///
    /// The trailing suffix-length characters are always dropped from an
    /// eligible input, whether or not they actually hold the suffix.
    pub fn convert(&self, text: &str) -> String {
        if !self.is_eligible(text) {
            return text.to_string();
        }

        let stem = strip_last_chars(text, self.suffix.chars().count());
        let converted: String = stem.split('_').map(title_case_segment).collect();

        debug!("converted identifier {text:?} -> {converted:?}");
        converted
    }
}

/// Converts a Graphene C type name such as `graphene_point3d_t` into
/// `GraphenePoint3D`.
pub fn to_camel_case(text: &str) -> String {
    IdentFilter::default().convert(text)
}

fn strip_last_chars(text: &str, count: usize) -> &str {
    let keep = text.chars().count().saturating_sub(count);
    match text.char_indices().nth(keep) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
