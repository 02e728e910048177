//! Draw definitions
//!
//! A draw is the official result (six winning numbers plus a bonus number)
//! together with every ticket played against it. Draws are immutable once
//! constructed; the calculator only ever reads them.

use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// Numbers on a single ticket
pub const TICKET_SIZE: usize = 6;

/// Smallest number that can be drawn
pub const MIN_NUMBER: u8 = 1;

/// Largest number that can be drawn
pub const MAX_NUMBER: u8 = 45;

/// One played combination of six numbers.
///
/// Also used for the winning numbers, which share the same shape.
pub type Ticket = [u8; TICKET_SIZE];

/// Draw context: winning numbers, bonus number and the played tickets
///
/// Field names on the wire follow the external record
/// (`winningNumber`, `bonusNumber`, `lottoNumbers`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawDetail {
    #[serde(rename = "winningNumber")]
    winning_numbers: Ticket,
    #[serde(rename = "bonusNumber")]
    bonus_number: u8,
    #[serde(rename = "lottoNumbers", default)]
    lotto_numbers: Vec<Ticket>,
}

impl DrawDetail {
    /// Create a draw without checking it.
    ///
    /// Ranges and distinctness are the caller's responsibility here. A
    /// malformed draw still produces a result, just not a meaningful one.
    /// Use [`DrawDetail::try_new`] when the input has not been checked yet.
    pub fn new(winning_numbers: Ticket, bonus_number: u8, lotto_numbers: Vec<Ticket>) -> Self {
        DrawDetail {
            winning_numbers,
            bonus_number,
            lotto_numbers,
        }
    }

    /// Create a draw, rejecting anything that is not a legal lotto game
    pub fn try_new(
        winning_numbers: Ticket,
        bonus_number: u8,
        lotto_numbers: Vec<Ticket>,
    ) -> Result<Self, DrawError> {
        let detail = Self::new(winning_numbers, bonus_number, lotto_numbers);
        detail.validate()?;
        Ok(detail)
    }

    /// Check the draw against the game rules.
    ///
    /// Winning numbers are checked first, then the bonus number, then each
    /// played ticket in order. The first problem found is returned.
    pub fn validate(&self) -> Result<(), DrawError> {
        validate_ticket(&self.winning_numbers)?;

        if !in_range(self.bonus_number) {
            return Err(DrawError::BonusOutOfRange {
                number: self.bonus_number,
            });
        }
        if self.winning_numbers.contains(&self.bonus_number) {
            return Err(DrawError::BonusInWinningNumbers {
                number: self.bonus_number,
            });
        }

        for (index, ticket) in self.lotto_numbers.iter().enumerate() {
            validate_ticket(ticket).map_err(|source| DrawError::InvalidTicket {
                index,
                source: Box::new(source),
            })?;
        }
        Ok(())
    }

    /// The six drawn numbers
    pub fn winning_numbers(&self) -> &Ticket {
        &self.winning_numbers
    }

    pub fn bonus_number(&self) -> u8 {
        self.bonus_number
    }

    /// Played tickets, in the order they were submitted
    pub fn lotto_numbers(&self) -> &[Ticket] {
        &self.lotto_numbers
    }
}

/// Check a single combination: every number in range, no repeats
pub fn validate_ticket(ticket: &Ticket) -> Result<(), DrawError> {
    // Bit i set once number i has been seen; 45 numbers fit in a u64.
    let mut seen = 0u64;
    for &number in ticket {
        if !in_range(number) {
            return Err(DrawError::NumberOutOfRange { number });
        }
        let bit = 1u64 << number;
        if seen & bit != 0 {
            return Err(DrawError::DuplicateNumber { number });
        }
        seen |= bit;
    }
    Ok(())
}

fn in_range(number: u8) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&number)
}
