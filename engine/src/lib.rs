//! lotto Engine - Prize rank calculation
//!
//! This crate contains the draw types, the rank rule table and the calculator
//! that tallies how many played tickets landed in each prize rank.
//!
//! The engine is pure computation and has zero I/O dependencies.

pub mod calculator;
pub mod draw;
pub mod error;
pub mod rank;
pub mod result;

pub use calculator::{calculate_ranks, WinningRank};
pub use draw::{DrawDetail, Ticket};
pub use error::DrawError;
pub use rank::{Rank, RankEvaluator, RankRule, RANK_RULES};
pub use result::RankResult;
