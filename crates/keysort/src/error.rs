use std::fmt;

use thiserror::Error;

/// Which argument of a merge failed the sortedness check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergeInput {
    Left,
    Right,
    /// Index into the list-of-lists passed to a k-way merge.
    List(usize),
}

impl fmt::Display for MergeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left input"),
            Self::Right => f.write_str("right input"),
            Self::List(index) => write!(f, "list {index}"),
        }
    }
}

/// Caller contract violations. None of these are transient.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("operation requires at least one element")]
    EmptyInput,
    #[error("{input} is not sorted by key")]
    NotSorted { input: MergeInput },
    #[error("rank {rank} is out of range for {len} elements")]
    RankOutOfRange { rank: usize, len: usize },
    #[error("range {start}..{end} is invalid for {len} elements")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
