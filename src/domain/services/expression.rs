//! Selection expressions
//!
//! A compact textual form for naming a [`TestSet`]:
//!
//! ```text
//! expr  := ["."] step*
//! step  := name ("." name)*  |  "[" index-or-slice "]"  |  "@" param
//! ```
//!
//! `mod_a.test_x[0:2]` is the first two instances of `test_x` in `mod_a`,
//! `TestBoth.test_m@a@dog` the instances carrying both `a` and `dog`. An
//! empty expression (or a lone `.`) is the root.

use std::fmt;
use std::str::FromStr;

use super::test_set::TestSet;
use crate::domain::value_objects::IndexSpec;
use crate::error::{PicktestError, PicktestResult};

const NAME_DELIMITERS: &[char] = &['.', '[', ']', '@'];

/// One navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Child(String),
    Index(IndexSpec),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    text: String,
    steps: Vec<Step>,
}

impl Expression {
    pub fn parse(text: &str) -> PicktestResult<Self> {
        let invalid = |reason: String| PicktestError::InvalidExpression {
            expr: text.to_string(),
            reason,
        };

        let body = text.trim();
        let body = body.strip_prefix('.').unwrap_or(body);
        let mut steps = Vec::new();
        // a name may start the expression or follow a '.'
        let mut name_allowed = true;
        let mut rest = body;

        while let Some(c) = rest.chars().next() {
            match c {
                '[' => {
                    let close = rest
                        .find(']')
                        .ok_or_else(|| invalid("unclosed '['".to_string()))?;
                    let spec = IndexSpec::parse(&rest[1..close])
                        .map_err(|e| invalid(e.to_string()))?;
                    steps.push(Step::Index(spec));
                    rest = &rest[close + 1..];
                    name_allowed = false;
                }
                '@' => {
                    let (ident, tail) = split_name(&rest[1..]);
                    if ident.is_empty() {
                        return Err(invalid("empty parameter after '@'".to_string()));
                    }
                    steps.push(Step::Param(ident.to_string()));
                    rest = tail;
                    name_allowed = false;
                }
                '.' => {
                    let (name, tail) = split_name(&rest[1..]);
                    if name.is_empty() {
                        return Err(invalid("empty name after '.'".to_string()));
                    }
                    steps.push(Step::Child(name.to_string()));
                    rest = tail;
                    name_allowed = false;
                }
                ']' => return Err(invalid("unmatched ']'".to_string())),
                _ if c.is_whitespace() => {
                    return Err(invalid("unexpected whitespace".to_string()));
                }
                _ if name_allowed => {
                    let (name, tail) = split_name(rest);
                    steps.push(Step::Child(name.to_string()));
                    rest = tail;
                    name_allowed = false;
                }
                _ => {
                    let (name, _) = split_name(rest);
                    return Err(invalid(format!("expected '.' before '{}'", name)));
                }
            }
        }

        Ok(Self {
            text: text.trim().to_string(),
            steps,
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether this names the root without restrictions
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Walk the steps starting at `start`
    pub fn resolve<'t>(&self, start: &TestSet<'t>) -> PicktestResult<TestSet<'t>> {
        let mut current = start.clone();
        for step in &self.steps {
            current = match step {
                Step::Child(name) => current.child(name)?,
                Step::Index(spec) => current.by_spec(*spec)?,
                Step::Param(ident) => current.by_param(ident)?,
            };
        }
        Ok(current)
    }
}

impl FromStr for Expression {
    type Err = PicktestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Split off a leading name, stopping at a delimiter or whitespace
fn split_name(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| NAME_DELIMITERS.contains(&c) || c.is_whitespace())
        .unwrap_or(s.len());
    s.split_at(end)
}
