use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::{CodeEntry, MockupEntry};

/// Identifier joining one mockup entry to its code entry.
///
/// Issued by [`crate::PairRegistry`], strictly increasing within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairId(u64);

impl PairId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PairId {
    type Err = std::num::ParseIntError;

    /// Parses the value of a `data-pair-id` attribute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PairId)
    }
}

/// Anything that lives in a container and is tagged with a pair id
pub trait Entry {
    fn pair_id(&self) -> PairId;
}

/// One selected component instance, seen through both of its entries.
#[derive(Debug, Clone, Copy)]
pub struct Pair<'a> {
    pub id: PairId,
    pub mockup: &'a MockupEntry,
    pub code: &'a CodeEntry,
}

impl<'a> Pair<'a> {
    /// Snippet text captured from the palette entry when the pair was created
    pub fn source_content(&self) -> &'a str {
        &self.code.source_content
    }
}
