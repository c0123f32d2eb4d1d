//! Path resolver
//!
//! Turns one item's ancestry chain into its ordered list of tree segments:
//!
//! - the session becomes the root marker
//! - dotted package/module names expand to one segment per level, each
//!   package level getting the module location with the remaining levels
//!   stripped
//! - instance wrappers are skipped
//! - a `base[id]` leaf becomes a group segment `base` plus an instance
//!   segment `sanitize(id)`
//!
//! Anything else that cannot be named is a malformed chain and aborts.

use std::path::{Path, PathBuf};

use crate::domain::entities::{AncestorKind, Item};
use crate::domain::value_objects::{sanitize_param_id, split_param_suffix, TestPath};
use crate::error::{PicktestError, PicktestResult};

/// Separator between levels of a dotted package/module name
pub const PACKAGE_SEPARATOR: char = '.';

/// What a resolved segment stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Root,
    Package { location: Option<PathBuf> },
    Module { location: Option<PathBuf> },
    Class,
    /// A non-parametrized test function (leaf)
    Function,
    /// Base name shared by parametrized instances
    ParamGroup,
    /// One parametrized instance (leaf)
    Instance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn new(name: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The segments of one item, root first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    segments: Vec<Segment>,
}

impl ResolvedPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Full path of the item
    pub fn path(&self) -> TestPath {
        TestPath::from_segments(self.segments[1..].iter().map(|s| s.name.clone()))
    }

    /// Rename the trailing instance segment (used when sanitized ids collide)
    pub(crate) fn rename_leaf(&mut self, name: String) {
        if let Some(last) = self.segments.last_mut() {
            last.name = name;
        }
    }

    /// Whether the leaf is a parametrized instance
    pub fn is_parametrized(&self) -> bool {
        self.segments
            .last()
            .is_some_and(|s| s.kind == SegmentKind::Instance)
    }
}

/// Derives tree paths from ancestry chains
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, item: &Item) -> PicktestResult<ResolvedPath> {
        let malformed = |reason: String| PicktestError::MalformedAncestry {
            node_id: item.node_id().to_string(),
            reason,
        };

        let chain = item.ancestry();
        let (first, rest) = chain
            .split_first()
            .ok_or_else(|| malformed("empty ancestry chain".to_string()))?;
        if first.kind != AncestorKind::Session {
            return Err(malformed(format!(
                "chain starts with a {} instead of the session",
                first.kind.as_str()
            )));
        }
        let (leaf, middle) = rest
            .split_last()
            .ok_or_else(|| malformed("chain has no test function".to_string()))?;
        if leaf.kind != AncestorKind::Function {
            return Err(malformed(format!(
                "chain ends with a {} instead of a test function",
                leaf.kind.as_str()
            )));
        }

        let mut segments = vec![Segment::new(TestPath::ROOT_SEGMENT, SegmentKind::Root)];

        for (position, ancestor) in middle.iter().enumerate() {
            let position = position + 1;
            match ancestor.kind {
                AncestorKind::Instance => continue,
                AncestorKind::Session | AncestorKind::Function => {
                    return Err(malformed(format!(
                        "unexpected {} at position {}",
                        ancestor.kind.as_str(),
                        position
                    )));
                }
                _ if ancestor.name.trim().is_empty() => {
                    return Err(malformed(format!(
                        "{} at position {} has no name",
                        ancestor.kind.as_str(),
                        position
                    )));
                }
                AncestorKind::Class => {
                    segments.push(Segment::new(&ancestor.name, SegmentKind::Class));
                }
                AncestorKind::Package | AncestorKind::Module => {
                    let is_module = ancestor.kind == AncestorKind::Module;
                    let name = if is_module {
                        ancestor.name.strip_suffix(".py").unwrap_or(&ancestor.name)
                    } else {
                        ancestor.name.as_str()
                    };
                    expand_dotted(
                        name,
                        ancestor.location.as_deref(),
                        is_module,
                        &mut segments,
                    );
                }
            }
        }

        if leaf.name.trim().is_empty() {
            return Err(malformed("test function has no name".to_string()));
        }
        match split_param_suffix(&leaf.name) {
            (base, Some(id)) => {
                segments.push(Segment::new(base, SegmentKind::ParamGroup));
                segments.push(Segment::new(sanitize_param_id(id), SegmentKind::Instance));
            }
            (name, None) => segments.push(Segment::new(name, SegmentKind::Function)),
        }

        Ok(ResolvedPath { segments })
    }
}

/// Expand `pkg.sub.mod` into one segment per level.
///
/// Leading levels are packages located at `location` with the remaining
/// levels stripped; the last level keeps `location` and is a module when
/// `last_is_module` is set.
fn expand_dotted(
    name: &str,
    location: Option<&Path>,
    last_is_module: bool,
    segments: &mut Vec<Segment>,
) {
    let parts: Vec<&str> = name
        .split(PACKAGE_SEPARATOR)
        .filter(|p| !p.is_empty())
        .collect();
    let n = parts.len();

    for (i, part) in parts.iter().enumerate() {
        let strip = n - 1 - i;
        let level_location = location
            .and_then(|loc| loc.ancestors().nth(strip))
            .map(Path::to_path_buf);

        let kind = if i + 1 == n && last_is_module {
            SegmentKind::Module {
                location: level_location,
            }
        } else {
            SegmentKind::Package {
                location: level_location,
            }
        };
        segments.push(Segment::new(*part, kind));
    }
}
