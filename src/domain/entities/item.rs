//! Item entity - one collected, executable test
//!
//! An item is identified by its node id and carries the ancestry chain the
//! collection source reported for it (root first, the item itself last).

use std::path::PathBuf;

use crate::domain::value_objects::{param_components, sanitize_param_id, split_param_suffix};
use crate::error::{PicktestError, PicktestResult};

/// Kind of one ancestry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AncestorKind {
    /// The collection session (root)
    Session,
    /// A directory-level grouping
    Package,
    /// A test module (file)
    Module,
    /// A test class
    Class,
    /// Class instance wrapper; carries no test semantics
    Instance,
    /// The test function itself (always last)
    Function,
}

impl AncestorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AncestorKind::Session => "session",
            AncestorKind::Package => "package",
            AncestorKind::Module => "module",
            AncestorKind::Class => "class",
            AncestorKind::Instance => "instance",
            AncestorKind::Function => "function",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "session" | "root" => Some(AncestorKind::Session),
            "package" | "dir" | "directory" => Some(AncestorKind::Package),
            "module" | "file" => Some(AncestorKind::Module),
            "class" => Some(AncestorKind::Class),
            "instance" => Some(AncestorKind::Instance),
            "function" | "item" => Some(AncestorKind::Function),
            _ => None,
        }
    }
}

/// One entry of an item's ancestry chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub kind: AncestorKind,
    pub name: String,
    /// Filesystem location (packages and modules)
    pub location: Option<PathBuf>,
}

impl Ancestor {
    pub fn new(kind: AncestorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            location: None,
        }
    }

    pub fn session() -> Self {
        Self::new(AncestorKind::Session, "")
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A collected test item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    node_id: String,
    ancestry: Vec<Ancestor>,
    /// Explicit parametrization components, if the source reported them
    params: Option<Vec<String>>,
}

impl Item {
    pub fn new(node_id: impl Into<String>, ancestry: Vec<Ancestor>) -> Self {
        Self {
            node_id: node_id.into(),
            ancestry,
            params: None,
        }
    }

    /// Attach explicit parametrization components (e.g. `["a", "dog"]`)
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = Some(params.into_iter().map(Into::into).collect());
        self
    }

    /// Derive an item (and its ancestry) from a pytest-style node id.
    ///
    /// `pkg/sub/mod_a.py::TestCls::test_x[1]` becomes
    /// session → package `pkg` → package `sub` → module `mod_a` →
    /// class `TestCls` → function `test_x[1]`. A `()` part is an instance
    /// wrapper. Dots inside a directory or file name become `_`
    /// (`test.v2.py` is module `test_v2`) so they are not read as nesting.
    pub fn from_node_id(node_id: &str) -> PicktestResult<Self> {
        let malformed = |reason: &str| PicktestError::MalformedAncestry {
            node_id: node_id.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = node_id.split("::");
        let file = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();
        if file.is_empty() {
            return Err(malformed("missing module path"));
        }
        if rest.last().map_or(true, |leaf| leaf.is_empty()) {
            return Err(malformed("missing test function"));
        }

        let mut ancestry = vec![Ancestor::session()];
        let components: Vec<&str> = file.split('/').filter(|c| !c.is_empty()).collect();
        let mut location = PathBuf::new();
        for (i, component) in components.iter().enumerate() {
            location.push(component);
            if i + 1 < components.len() {
                ancestry.push(
                    Ancestor::new(AncestorKind::Package, undotted(component))
                        .with_location(&location),
                );
            } else {
                let stem = component.strip_suffix(".py").unwrap_or(component);
                ancestry.push(
                    Ancestor::new(AncestorKind::Module, undotted(stem)).with_location(&location),
                );
            }
        }

        let (leaf, classes) = rest.split_last().ok_or_else(|| malformed("missing test function"))?;
        for class in classes {
            let kind = if *class == "()" {
                AncestorKind::Instance
            } else {
                AncestorKind::Class
            };
            ancestry.push(Ancestor::new(kind, *class));
        }
        ancestry.push(Ancestor::new(AncestorKind::Function, *leaf));

        Ok(Self::new(node_id, ancestry))
    }

    /// Globally unique identifier
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Ancestry chain, root first
    pub fn ancestry(&self) -> &[Ancestor] {
        &self.ancestry
    }

    /// Rendered leaf name (e.g. `test_x[1]`)
    pub fn name(&self) -> &str {
        self.ancestry
            .last()
            .map(|a| a.name.as_str())
            .unwrap_or(self.node_id.as_str())
    }

    /// Raw parametrization id from the bracket suffix, if any
    pub fn param_id(&self) -> Option<&str> {
        split_param_suffix(self.name()).1
    }

    /// Whether this item is one instance of a parametrized function
    pub fn is_parametrized(&self) -> bool {
        self.param_id().is_some()
    }

    /// Sanitized parametrization identifiers this item carries
    pub fn param_idents(&self) -> Vec<String> {
        match &self.params {
            Some(explicit) => explicit.iter().map(|p| sanitize_param_id(p)).collect(),
            None => self.param_id().map(param_components).unwrap_or_default(),
        }
    }

    /// Whether the item carries `ident` (compared after sanitizing).
    ///
    /// The whole instance id counts as well as its components, so both `a`
    /// and `a-dog` match `test_m[a-dog]`.
    pub fn has_param(&self, ident: &str) -> bool {
        let ident = sanitize_param_id(ident);
        self.param_idents().iter().any(|p| *p == ident)
            || self
                .param_id()
                .is_some_and(|id| sanitize_param_id(id) == ident)
    }
}

fn undotted(name: &str) -> String {
    name.replace('.', "_")
}
