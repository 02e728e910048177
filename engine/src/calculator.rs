//! Rank calculator
//!
//! Compares every played ticket against the winning numbers and bonus number
//! and tallies how many tickets landed in each prize rank:
//! - matches are counted against a bitmask of the winning numbers
//! - the rank comes from the rule table in [`crate::rank`]
//!
//! The calculator holds no state beyond its draw; each call builds a fresh
//! result, so one calculator can be shared freely across threads.

use rayon::prelude::*;

use crate::draw::{DrawDetail, Ticket, MAX_NUMBER, MIN_NUMBER, TICKET_SIZE};
use crate::rank::{Rank, RankEvaluator};
use crate::result::RankResult;

/// Tickets handed to each rayon task in the batch tally
const BATCH_CHUNK: usize = 4096;

/// Rank calculator for one draw
#[derive(Debug, Clone)]
pub struct WinningRank {
    detail: DrawDetail,
    /// Bit n set when n is a winning number
    winning_mask: u64,
}

impl WinningRank {
    /// Create a calculator for the given draw
    pub fn new(detail: DrawDetail) -> Self {
        let winning_mask = number_mask(detail.winning_numbers());
        WinningRank {
            detail,
            winning_mask,
        }
    }

    /// The draw this calculator ranks against
    pub fn detail(&self) -> &DrawDetail {
        &self.detail
    }

    /// Tally ranks over every played ticket in a single pass
    pub fn calculate_rank(&self) -> RankResult {
        self.detail
            .lotto_numbers()
            .iter()
            .fold(RankResult::new(), |mut result, ticket| {
                if let Some(rank) = self.determine_rank(ticket) {
                    result.record(rank);
                }
                result
            })
    }

    /// Tally ranks using the rayon pool
    ///
    /// Gives the same result as [`WinningRank::calculate_rank`]; worth it only
    /// for large ticket sets.
    pub fn calculate_rank_batch(&self) -> RankResult {
        self.detail
            .lotto_numbers()
            .par_chunks(BATCH_CHUNK)
            .map(|chunk| {
                let mut result = RankResult::new();
                for rank in chunk.iter().filter_map(|ticket| self.determine_rank(ticket)) {
                    result.record(rank);
                }
                result
            })
            .reduce(RankResult::new, RankResult::merge)
    }

    /// Rank a single ticket, `None` if it wins nothing
    pub fn determine_rank(&self, ticket: &Ticket) -> Option<Rank> {
        Rank::determine(
            self.count_matching_numbers(ticket),
            self.includes_bonus_number(ticket),
        )
    }

    /// How many of the ticket's numbers are winning numbers
    pub fn count_matching_numbers(&self, ticket: &Ticket) -> usize {
        ticket
            .iter()
            .filter(|&&number| self.winning_mask & bit(number) != 0)
            .count()
    }

    /// Whether the ticket contains the bonus number
    pub fn includes_bonus_number(&self, ticket: &Ticket) -> bool {
        ticket.contains(&self.detail.bonus_number())
    }
}

impl RankEvaluator for WinningRank {
    fn evaluate(&self, ticket: &Ticket) -> Option<Rank> {
        self.determine_rank(ticket)
    }
}

/// Rank every ticket in `context` and return the per-rank counts
pub fn calculate_ranks(context: DrawDetail) -> RankResult {
    WinningRank::new(context).calculate_rank()
}

fn number_mask(numbers: &Ticket) -> u64 {
    numbers.iter().fold(0u64, |mask, &number| mask | bit(number))
}

// Out-of-range numbers map to no bit, so they never count as a match.
fn bit(number: u8) -> u64 {
    1u64.checked_shl(u32::from(number)).unwrap_or(0)
}

/// Benchmark helper for CLI
///
/// Ranks `sample_size` generated tickets with the batch tally and returns
/// (tickets_per_sec, duration_ms)
pub fn benchmark_throughput(sample_size: usize) -> (f64, u64) {
    use std::time::Instant;

    let calculator = WinningRank::new(DrawDetail::new(
        [1, 2, 3, 4, 5, 6],
        7,
        generate_tickets(sample_size, 12345),
    ));

    // Warm-up
    for ticket in calculator.detail().lotto_numbers().iter().take(10_000) {
        let _ = calculator.evaluate(ticket);
    }

    let start = Instant::now();
    let _result = calculator.calculate_rank_batch();
    let duration = start.elapsed();

    let tickets_per_sec = sample_size as f64 / duration.as_secs_f64();
    let duration_ms = duration.as_millis() as u64;

    (tickets_per_sec, duration_ms)
}

/// Deterministic pseudo-random tickets (LCG), each with six distinct numbers.
///
/// Benchmark tooling only; feeds `benchmark_throughput` and the criterion bench.
#[doc(hidden)]
pub fn generate_tickets(count: usize, seed: u64) -> Vec<Ticket> {
    let span = u64::from(MAX_NUMBER - MIN_NUMBER) + 1;
    let mut state = seed;
    let mut next_number = || {
        state = state.wrapping_mul(1103515245).wrapping_add(12345) & 0x7fffffff;
        // High bits: the low bits of this LCG cycle with a short period
        MIN_NUMBER + ((state >> 16) % span) as u8
    };

    let mut tickets = Vec::with_capacity(count);
    for _ in 0..count {
        let mut ticket = [0u8; TICKET_SIZE];
        let mut filled = 0;
        while filled < TICKET_SIZE {
            let number = next_number();
            if !ticket[..filled].contains(&number) {
                ticket[filled] = number;
                filled += 1;
            }
        }
        tickets.push(ticket);
    }
    tickets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::validate_ticket;

    const WINNING: Ticket = [1, 2, 3, 4, 5, 6];
    const BONUS: u8 = 7;

    fn calculator(tickets: Vec<Ticket>) -> WinningRank {
        WinningRank::new(DrawDetail::new(WINNING, BONUS, tickets))
    }

    #[test]
    fn test_worked_example() {
        let result = calculate_ranks(DrawDetail::new(
            WINNING,
            BONUS,
            vec![
                [1, 2, 3, 4, 5, 6],
                [1, 2, 3, 4, 5, 7],
                [1, 2, 3, 4, 5, 8],
                [1, 2, 3, 4, 9, 10],
                [1, 2, 3, 9, 10, 11],
                [1, 2, 9, 10, 11, 12],
            ],
        ));

        for rank in Rank::ALL {
            assert_eq!(result.get(rank), 1, "{} should be hit exactly once", rank);
        }
        assert_eq!(result.total(), 5, "The 2-match ticket should not be ranked");
    }

    #[test]
    fn test_empty_tickets() {
        assert_eq!(calculator(vec![]).calculate_rank(), RankResult::new());
        assert_eq!(calculator(vec![]).calculate_rank_batch(), RankResult::new());
    }

    #[test]
    fn test_match_counting() {
        let calc = calculator(vec![]);
        assert_eq!(calc.count_matching_numbers(&[6, 5, 4, 3, 2, 1]), 6);
        assert_eq!(calc.count_matching_numbers(&[1, 2, 40, 41, 42, 43]), 2);
        assert_eq!(calc.count_matching_numbers(&[40, 41, 42, 43, 44, 45]), 0);
        assert!(calc.includes_bonus_number(&[7, 8, 9, 10, 11, 12]));
        assert!(!calc.includes_bonus_number(&[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_single_ticket_ranks() {
        let calc = calculator(vec![]);
        assert_eq!(calc.evaluate(&[1, 2, 3, 4, 5, 6]), Some(Rank::First));
        assert_eq!(calc.evaluate(&[1, 2, 3, 4, 5, 7]), Some(Rank::Second));
        assert_eq!(calc.evaluate(&[1, 2, 3, 4, 5, 45]), Some(Rank::Third));
        assert_eq!(calc.evaluate(&[1, 2, 3, 4, 44, 45]), Some(Rank::Fourth));
        assert_eq!(calc.evaluate(&[1, 2, 3, 4, 7, 45]), None);
        assert_eq!(calc.evaluate(&[1, 2, 3, 43, 44, 45]), Some(Rank::Fifth));
        assert_eq!(calc.evaluate(&[1, 2, 3, 7, 44, 45]), None);
        assert_eq!(calc.evaluate(&[1, 2, 7, 43, 44, 45]), None);
        assert_eq!(calc.evaluate(&[7, 40, 41, 42, 43, 44]), None);
    }

    #[test]
    fn test_bonus_on_lower_ranks_is_not_counted() {
        let result = calculate_ranks(DrawDetail::new(
            WINNING,
            BONUS,
            vec![[1, 2, 3, 4, 7, 45], [1, 2, 3, 7, 44, 45]],
        ));
        assert_eq!(result.get(Rank::Fourth), 0, "4 matches + bonus should not rank");
        assert_eq!(result.get(Rank::Fifth), 0, "3 matches + bonus should not rank");
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let calc = calculator(vec![[1, 2, 3, 4, 5, 6], [1, 2, 3, 10, 11, 12]]);
        let first = calc.calculate_rank();
        let second = calc.calculate_rank();
        assert_eq!(first, second, "Results must not accumulate across calls");
        assert_eq!(first.total(), 2);
    }

    #[test]
    fn test_malformed_ticket_does_not_panic() {
        // Out-of-range and repeated numbers give a meaningless count, not a crash
        let calc = calculator(vec![[0, 200, 255, 1, 1, 1]]);
        let result = calc.calculate_rank();
        assert!(result.total() <= 1);
    }

    #[test]
    fn test_generated_tickets_are_valid() {
        let tickets = generate_tickets(1000, 99);
        assert_eq!(tickets.len(), 1000);
        for ticket in &tickets {
            assert!(validate_ticket(ticket).is_ok(), "Generated ticket {:?} is invalid", ticket);
        }
    }

    #[test]
    fn test_large_sample_batch_matches_sequential() {
        let tickets = generate_tickets(50_000, 12345);
        let played = tickets.len() as u64;
        let calc = calculator(tickets);

        let sequential = calc.calculate_rank();
        let batch = calc.calculate_rank_batch();

        assert_eq!(sequential, batch, "Batch tally should equal the sequential pass");
        assert!(
            sequential.total() <= played,
            "Ranked tickets {} should not exceed played tickets {}",
            sequential.total(),
            played
        );

        // Recount independently with plain set membership
        let mut expected = RankResult::new();
        for ticket in calc.detail().lotto_numbers() {
            let matches = ticket.iter().filter(|&n| WINNING.contains(n)).count();
            let has_bonus = ticket.contains(&BONUS);
            let rank = match (matches, has_bonus) {
                (6, false) => Some(Rank::First),
                (5, true) => Some(Rank::Second),
                (5, false) => Some(Rank::Third),
                (4, false) => Some(Rank::Fourth),
                (3, false) => Some(Rank::Fifth),
                _ => None,
            };
            if let Some(rank) = rank {
                expected.record(rank);
            }
        }
        assert_eq!(sequential, expected);
    }
}
