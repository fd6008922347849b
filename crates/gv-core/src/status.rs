//! Node status and the tally categories derived from it.
//!
//! A node carries one of five [`Status`] values.  Reconciliation works on the
//! four coarser [`Category`] buckets the epidemic model publishes: both
//! infected statuses fold into [`Category::Infected`].

use std::fmt;

// ── Status ────────────────────────────────────────────────────────────────────

/// Disease status of one grid node.
///
/// The discriminants are the rank used by the sorted presentation view:
/// higher values sort first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(u8)]
pub enum Status {
    #[default]
    Healthy = 0,
    InfectedUnknown = 1,
    InfectedKnown = 2,
    Recovered = 3,
    Dead = 4,
}

impl Status {
    /// Numeric rank (0–4).
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The tally bucket this status is counted in.
    #[inline]
    pub fn category(self) -> Category {
        match self {
            Status::Healthy => Category::Healthy,
            Status::InfectedUnknown | Status::InfectedKnown => Category::Infected,
            Status::Recovered => Category::Recovered,
            Status::Dead => Category::Dead,
        }
    }

    /// Parse a numeric rank back into a status.
    pub fn from_rank(rank: u8) -> Option<Status> {
        match rank {
            0 => Some(Status::Healthy),
            1 => Some(Status::InfectedUnknown),
            2 => Some(Status::InfectedKnown),
            3 => Some(Status::Recovered),
            4 => Some(Status::Dead),
            _ => None,
        }
    }
}

// ── Category ──────────────────────────────────────────────────────────────────

/// One of the four population buckets the epidemic model reports on.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Category {
    Healthy = 0,
    Infected = 1,
    Recovered = 2,
    Dead = 3,
}

impl Category {
    /// Tally order: the order categories are evaluated and their surplus
    /// appended to the pool.
    pub const ALL: [Category; 4] = [
        Category::Healthy,
        Category::Infected,
        Category::Recovered,
        Category::Dead,
    ];

    /// Order in which deficits absorb pooled nodes.  Severe outcomes first.
    pub const PRIORITY: [Category; 4] = [
        Category::Dead,
        Category::Recovered,
        Category::Infected,
        Category::Healthy,
    ];

    /// Position in [`Category::ALL`]; use to index fixed-size per-category arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The status a node is given when it is converted into this category.
    #[inline]
    pub fn entry_status(self) -> Status {
        match self {
            Category::Healthy => Status::Healthy,
            Category::Infected => Status::InfectedUnknown,
            Category::Recovered => Status::Recovered,
            Category::Dead => Status::Dead,
        }
    }

    /// Lower-case name used in logs and exports.
    pub fn name(self) -> &'static str {
        match self {
            Category::Healthy => "healthy",
            Category::Infected => "infected",
            Category::Recovered => "recovered",
            Category::Dead => "dead",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
