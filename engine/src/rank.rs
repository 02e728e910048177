//! Prize ranks and the rule table that assigns them
//!
//! A ticket earns at most one rank. Rules are scanned in declaration order
//! (1st to 5th) and the first one that fits wins; no two rules can fit the
//! same ticket, so the order never changes the outcome.

use std::fmt;
use std::str::FromStr;

use crate::draw::Ticket;
use crate::error::DrawError;

/// Prize tier, from the jackpot down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// All six winning numbers
    First,
    /// Five winning numbers plus the bonus number
    Second,
    /// Five winning numbers without the bonus number
    Third,
    /// Four winning numbers
    Fourth,
    /// Three winning numbers
    Fifth,
}

impl Rank {
    /// Every rank in declaration order
    pub const ALL: [Rank; 5] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
    ];

    /// Short label used in results ("1st" .. "5th")
    pub fn label(self) -> &'static str {
        match self {
            Rank::First => "1st",
            Rank::Second => "2nd",
            Rank::Third => "3rd",
            Rank::Fourth => "4th",
            Rank::Fifth => "5th",
        }
    }

    /// Human-readable winning condition
    pub fn description(self) -> &'static str {
        match self {
            Rank::First => "6 numbers matched",
            Rank::Second => "5 numbers matched + bonus",
            Rank::Third => "5 numbers matched",
            Rank::Fourth => "4 numbers matched",
            Rank::Fifth => "3 numbers matched",
        }
    }

    /// Position in declaration order (0 for 1st)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The rule this rank is awarded under
    pub fn rule(self) -> &'static RankRule {
        &RANK_RULES[self.index()]
    }

    /// Resolve a rank from a ticket's match count and bonus inclusion.
    ///
    /// Both the match count and the bonus inclusion must equal a rule's.
    /// Returns `None` when no rule fits (fewer than three matches, or a
    /// bonus number on a ticket whose rule does not call for one).
    pub fn determine(match_count: usize, has_bonus: bool) -> Option<Rank> {
        RANK_RULES
            .iter()
            .find(|rule| rule.matches(match_count, has_bonus))
            .map(|rule| rule.rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or_else(|| DrawError::UnknownRank {
                label: s.to_string(),
            })
    }
}

/// Winning condition for one rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankRule {
    pub rank: Rank,
    /// Winning numbers the ticket must contain
    pub match_count: usize,
    /// Whether the ticket must contain the bonus number (compared exactly)
    pub has_bonus: bool,
}

impl RankRule {
    /// Whether a ticket with this match count and bonus inclusion fits the rule
    pub fn matches(&self, match_count: usize, has_bonus: bool) -> bool {
        self.match_count == match_count && self.has_bonus == has_bonus
    }
}

/// Rule table, in declaration order.
///
/// Only 2nd requires the bonus number. Every other rule requires its absence,
/// so a 4- or 3-match ticket that also holds the bonus number wins nothing.
pub const RANK_RULES: [RankRule; 5] = [
    RankRule {
        rank: Rank::First,
        match_count: 6,
        has_bonus: false,
    },
    RankRule {
        rank: Rank::Second,
        match_count: 5,
        has_bonus: true,
    },
    RankRule {
        rank: Rank::Third,
        match_count: 5,
        has_bonus: false,
    },
    RankRule {
        rank: Rank::Fourth,
        match_count: 4,
        has_bonus: false,
    },
    RankRule {
        rank: Rank::Fifth,
        match_count: 3,
        has_bonus: false,
    },
];

/// Rank evaluator trait
///
/// Implemented by anything that can place a single ticket into a prize tier.
/// The tally in [`crate::calculator`] is written against this seam.
pub trait RankEvaluator {
    /// Rank one ticket, or `None` if it wins nothing
    fn evaluate(&self, ticket: &Ticket) -> Option<Rank>;
}
