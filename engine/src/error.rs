//! Error types for draw validation and rank parsing

use thiserror::Error;

/// Errors raised when a draw does not describe a well-formed lotto game.
///
/// The calculator itself never returns these; they come from the optional
/// validation entry points on [`crate::draw::DrawDetail`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("number {number} is outside the valid range {min}-{max}", min = crate::draw::MIN_NUMBER, max = crate::draw::MAX_NUMBER)]
    NumberOutOfRange { number: u8 },
    #[error("number {number} appears more than once")]
    DuplicateNumber { number: u8 },
    #[error("bonus number {number} is outside the valid range {min}-{max}", min = crate::draw::MIN_NUMBER, max = crate::draw::MAX_NUMBER)]
    BonusOutOfRange { number: u8 },
    #[error("bonus number {number} is already one of the winning numbers")]
    BonusInWinningNumbers { number: u8 },
    #[error("played ticket #{index} is invalid: {source}")]
    InvalidTicket {
        index: usize,
        #[source]
        source: Box<DrawError>,
    },
    #[error("unknown rank label {label:?} (expected 1st-5th)")]
    UnknownRank { label: String },
}
