//! Symbol extraction from GObject-Introspection XML.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::IntrospectionError;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(
        r"<(/?)(namespace|record|class|interface|union|enumeration|bitfield|alias|callback|constant|function|constructor|method)(\s[^>]*)?>"
    )
    .unwrap();
    static ref NAME_ATTR_RE: Regex = Regex::new(r#"(?:^|\s)name="([^"]*)""#).unwrap();
    static ref VERSION_ATTR_RE: Regex = Regex::new(r#"(?:^|\s)version="([^"]*)""#).unwrap();
    static ref COMMENT_RE: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
}

/// Public surface of one introspection namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GirNamespace {
    name: String,
    version: String,
    constants: BTreeSet<String>,
    functions: BTreeSet<String>,
    // type name -> constructors, functions and methods declared on it
    types: BTreeMap<String, BTreeSet<String>>,
}

impl GirNamespace {
    /// Scans a `.gir` document.
    ///
    /// This is a tag scanner, not an XML parser: it relies on the generator
    /// escaping `<` and `>` inside attribute values and text. Comments are
    /// removed before scanning.
    pub fn parse(xml: &str) -> Result<Self, IntrospectionError> {
        let mut ns: Option<Self> = None;
        let mut open: Vec<String> = Vec::new();

        let xml = COMMENT_RE.replace_all(xml, "");
        for caps in TAG_RE.captures_iter(&xml) {
            let closing = &caps[1] == "/";
            let kind = &caps[2];
            let attrs = caps.get(3).map_or("", |m| m.as_str());
            let self_closing = attrs.trim_end().ends_with('/');
            let name = attr(&NAME_ATTR_RE, attrs);

            if kind == "namespace" {
                if !closing && ns.is_none() {
                    ns = Some(Self {
                        name: name.unwrap_or_default(),
                        version: attr(&VERSION_ATTR_RE, attrs).unwrap_or_default(),
                        ..Default::default()
                    });
                }
                continue;
            }

            let Some(ns) = ns.as_mut() else {
                continue;
            };

            match kind {
                "record" | "class" | "interface" | "union" | "enumeration" | "bitfield" => {
                    if closing {
                        open.pop();
                        continue;
                    }
                    let name = name.unwrap_or_default();
                    if open.is_empty() {
                        ns.types.entry(name.clone()).or_default();
                    }
                    if !self_closing {
                        open.push(name);
                    }
                },
                "alias" | "callback" if !closing && open.is_empty() => {
                    if let Some(name) = name {
                        ns.types.entry(name).or_default();
                    }
                },
                "constant" if !closing && open.is_empty() => {
                    if let Some(name) = name {
                        ns.constants.insert(name);
                    }
                },
                "function" | "constructor" | "method" if !closing => {
                    let Some(name) = name else { continue };
                    match open.last() {
                        Some(owner) => {
                            ns.types.entry(owner.clone()).or_default().insert(name);
                        },
                        None if kind == "function" => {
                            ns.functions.insert(name);
                        },
                        None => {},
                    }
                },
                _ => {},
            }
        }

        let ns = ns.ok_or(IntrospectionError::MissingNamespace)?;
        debug!(
            "scanned namespace {}-{}: {} types, {} functions, {} constants",
            ns.name,
            ns.version,
            ns.types.len(),
            ns.functions.len(),
            ns.constants.len()
        );
        Ok(ns)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IntrospectionError> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|source| IntrospectionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&xml)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Whether `name` resolves to anything at namespace level.
    pub fn has_symbol(&self, name: &str) -> bool {
        self.has_constant(name) || self.has_function(name) || self.has_type(name)
    }

    /// Whether `type_name` declares a constructor, function or method called
    /// `callable`.
    pub fn type_has_callable(&self, type_name: &str, callable: &str) -> bool {
        self.types
            .get(type_name)
            .is_some_and(|callables| callables.contains(callable))
    }
}

fn attr(re: &Regex, attrs: &str) -> Option<String> {
    re.captures(attrs).map(|caps| caps[1].to_string())
}
