//! Per-rank tallies

use serde::{Deserialize, Serialize};

use crate::rank::Rank;

/// Number of tickets that landed in each rank
///
/// All counts start at zero. Only the ranking pass adds to them; once a result
/// is handed back it is never modified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankResult {
    #[serde(rename = "1st")]
    first: u64,
    #[serde(rename = "2nd")]
    second: u64,
    #[serde(rename = "3rd")]
    third: u64,
    #[serde(rename = "4th")]
    fourth: u64,
    #[serde(rename = "5th")]
    fifth: u64,
}

impl RankResult {
    /// Create an all-zero result
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for one rank
    pub fn get(&self, rank: Rank) -> u64 {
        match rank {
            Rank::First => self.first,
            Rank::Second => self.second,
            Rank::Third => self.third,
            Rank::Fourth => self.fourth,
            Rank::Fifth => self.fifth,
        }
    }

    /// Tickets that won anything
    pub fn total(&self) -> u64 {
        Rank::ALL.iter().map(|&rank| self.get(rank)).sum()
    }

    /// `(rank, count)` pairs from 1st to 5th
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u64)> + '_ {
        Rank::ALL.into_iter().map(move |rank| (rank, self.get(rank)))
    }

    /// Combine two partial tallies
    pub fn merge(self, other: RankResult) -> RankResult {
        RankResult {
            first: self.first + other.first,
            second: self.second + other.second,
            third: self.third + other.third,
            fourth: self.fourth + other.fourth,
            fifth: self.fifth + other.fifth,
        }
    }

    pub(crate) fn record(&mut self, rank: Rank) {
        let slot = match rank {
            Rank::First => &mut self.first,
            Rank::Second => &mut self.second,
            Rank::Third => &mut self.third,
            Rank::Fourth => &mut self.fourth,
            Rank::Fifth => &mut self.fifth,
        };
        *slot += 1;
    }
}
