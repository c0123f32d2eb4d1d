//! Index / slice value object
//!
//! Python-style indexing over an ordered item list. Supports negative indices,
//! open bounds and negative steps, and the two textual forms used by the
//! selection commands: `a:b:c` inside expressions and `a,b,c` for removal.

use std::fmt;

use crate::error::{PicktestError, PicktestResult};

/// Slice bounds; `None` means "open" exactly as in `items[a:b:c]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    /// The no-op slice `[:]`
    pub fn full() -> Self {
        Self::default()
    }

    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Positions selected from a sequence of `len` elements, in slice order.
    pub fn indices(&self, len: usize) -> PicktestResult<Vec<usize>> {
        let step = self.step.unwrap_or(1) as i64;
        if step == 0 {
            return Err(PicktestError::InvalidSlice {
                reason: "slice step cannot be zero".to_string(),
            });
        }

        let len = len as i64;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |bound: Option<isize>, default: i64| -> i64 {
            match bound {
                None => default,
                Some(b) => {
                    let b = b as i64;
                    if b < 0 {
                        (b + len).max(lower)
                    } else {
                        b.min(upper)
                    }
                }
            }
        };

        let start = clamp(self.start, if step > 0 { lower } else { upper });
        let stop = clamp(self.stop, if step > 0 { upper } else { lower });

        let mut out = Vec::new();
        let mut next = Some(start);
        while let Some(i) = next {
            let in_range = if step > 0 { i < stop } else { i > stop };
            if !in_range {
                break;
            }
            out.push(i as usize);
            // a step past the end of i64 also runs past the list
            next = i.checked_add(step);
        }
        Ok(out)
    }
}

/// A single index or a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSpec {
    Index(isize),
    Slice(SliceSpec),
}

impl IndexSpec {
    /// Normalize an integer index to the equivalent one-element slice.
    ///
    /// `-1` becomes `[-1:]` since `[-1:0]` would be empty.
    pub fn index_as_slice(index: isize) -> SliceSpec {
        let stop = if index == -1 { None } else { index.checked_add(1) };
        SliceSpec::new(Some(index), stop, None)
    }

    /// Positions selected from a sequence of `len` elements.
    ///
    /// Integer indices must be in range; slices never fail on bounds.
    pub fn apply(&self, len: usize) -> PicktestResult<Vec<usize>> {
        match *self {
            IndexSpec::Index(index) => {
                let resolved = if index < 0 {
                    index + len as isize
                } else {
                    index
                };
                if resolved < 0 || resolved as usize >= len {
                    return Err(PicktestError::IndexOutOfRange { index, len });
                }
                Ok(vec![resolved as usize])
            }
            IndexSpec::Slice(slice) => slice.indices(len),
        }
    }

    /// Parse `3`, `-1`, `1:3`, `::-1`, `:` ...
    pub fn parse(text: &str) -> PicktestResult<Self> {
        Self::parse_with(text, ':')
    }

    /// Parse the comma form used for removal: `-1`, `1,` (= `[1:]`),
    /// `,,-3` (= `[::-3]`).
    pub fn parse_delimited(text: &str, delim: char) -> PicktestResult<Self> {
        Self::parse_with(text, delim)
    }

    fn parse_with(text: &str, delim: char) -> PicktestResult<Self> {
        let text = text.trim();
        let invalid = |reason: &str| PicktestError::InvalidSlice {
            reason: format!("'{}' {}", text, reason),
        };

        if !text.contains(delim) {
            return text
                .parse::<isize>()
                .map(IndexSpec::Index)
                .map_err(|_| invalid("is not an index or slice"));
        }

        let parts: Vec<&str> = text.split(delim).map(str::trim).collect();
        if parts.len() > 3 {
            return Err(invalid("has too many slice components"));
        }

        let mut bounds = [None; 3];
        for (slot, part) in bounds.iter_mut().zip(&parts) {
            if part.is_empty() {
                continue;
            }
            *slot = Some(
                part.parse::<isize>()
                    .map_err(|_| invalid("is not an index or slice"))?,
            );
        }

        Ok(IndexSpec::Slice(SliceSpec::new(bounds[0], bounds[1], bounds[2])))
    }
}

impl From<SliceSpec> for IndexSpec {
    fn from(slice: SliceSpec) -> Self {
        IndexSpec::Slice(slice)
    }
}

impl fmt::Display for IndexSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bound(b: Option<isize>) -> String {
            b.map(|v| v.to_string()).unwrap_or_default()
        }

        match self {
            IndexSpec::Index(i) => write!(f, "[{}]", i),
            IndexSpec::Slice(s) => match s.step {
                Some(step) => write!(f, "[{}:{}:{}]", bound(s.start), bound(s.stop), step),
                None => write!(f, "[{}:{}]", bound(s.start), bound(s.stop)),
            },
        }
    }
}
