//! Node entity - what lives at a given path of the tree

use std::path::{Path, PathBuf};

use super::param_group::ParameterizedGroup;

/// Discriminant of [`Node`], used for display and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Package,
    Module,
    Class,
    ParameterizedGroup,
    Item,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Package => "package",
            NodeKind::Module => "module",
            NodeKind::Class => "class",
            NodeKind::ParameterizedGroup => "params",
            NodeKind::Item => "test",
        }
    }
}

/// The named entity registered for one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root,
    Package {
        name: String,
        location: Option<PathBuf>,
    },
    Module {
        name: String,
        location: Option<PathBuf>,
    },
    Class {
        name: String,
    },
    ParameterizedGroup(ParameterizedGroup),
    /// A leaf; `item` indexes the tree's item list
    Item {
        name: String,
        item: usize,
    },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root => NodeKind::Root,
            Node::Package { .. } => NodeKind::Package,
            Node::Module { .. } => NodeKind::Module,
            Node::Class { .. } => NodeKind::Class,
            Node::ParameterizedGroup(_) => NodeKind::ParameterizedGroup,
            Node::Item { .. } => NodeKind::Item,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Root => "",
            Node::Package { name, .. }
            | Node::Module { name, .. }
            | Node::Class { name }
            | Node::Item { name, .. } => name,
            Node::ParameterizedGroup(group) => group.name(),
        }
    }

    pub fn location(&self) -> Option<&Path> {
        match self {
            Node::Package { location, .. } | Node::Module { location, .. } => {
                location.as_deref()
            }
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&ParameterizedGroup> {
        match self {
            Node::ParameterizedGroup(group) => Some(group),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Item { .. })
    }
}
