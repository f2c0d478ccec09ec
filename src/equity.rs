//! Exhaustive equity enumeration over every completion of the board.
//!
//! For each completion every player's best category is evaluated, the
//! players holding the strongest category are found, and a sole holder is
//! credited with a win while every member of a shared top is credited with a
//! draw. Categories are the only comparison; see [`crate::hand`].

use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::card::Card;
use crate::error::AnalysisError;
use crate::hand::{Combination, best_of_seven_cards};
use crate::player::{Player, RoundStats};
use crate::subsets::{Subsets, binomial};
#[cfg(feature = "parallel")]
use crate::subsets::FIVE_OF_SEVEN;
#[cfg(feature = "parallel")]
use crate::sync::Lazy;

/// Number of community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// Running totals for one round, plus the scratch space to evaluate a
/// scenario without allocating.
struct Tally {
    /// Seven-card set per player; slots from `known` on are refilled per scenario.
    hands: Vec<[Card; 7]>,
    /// Cards fixed for the round (hole plus board).
    known: usize,
    results: Vec<Combination>,
    stats: Vec<RoundStats>,
}

impl Tally {
    fn new(players: &[Player], board: &[Card]) -> Self {
        let hands = players
            .iter()
            .map(|player| {
                let [first, second] = player.hole();
                // unknown slots are placeholders until `deal`
                let mut hand = [first; 7];
                hand[1] = second;
                hand[2..2 + board.len()].copy_from_slice(board);
                hand
            })
            .collect();

        Self {
            hands,
            known: 2 + board.len(),
            results: vec![Combination::HighCard; players.len()],
            stats: vec![RoundStats::default(); players.len()],
        }
    }

    /// Completes every player's hand with the deck cards at `drawn` (1-based).
    fn deal(&mut self, drawn: &[usize], deck: &[Card]) {
        let known = self.known;
        for hand in &mut self.hands {
            for (slot, &index) in hand[known..].iter_mut().zip(drawn) {
                *slot = deck[index - 1];
            }
        }
    }

    /// Evaluates the current scenario and credits its winner or draw set.
    fn settle(&mut self) {
        for ((hand, result), stats) in self
            .hands
            .iter()
            .zip(&mut self.results)
            .zip(&mut self.stats)
        {
            *result = best_of_seven_cards(hand);
            stats.possibilities += 1;
            stats.categories.record(*result);
        }

        let Some(&top) = self.results.iter().max() else {
            return;
        };
        let shared = self.results.iter().filter(|&&result| result == top).count() > 1;

        for (result, stats) in self.results.iter().zip(&mut self.stats) {
            if *result != top {
                continue;
            }
            if shared {
                stats.draws += 1;
            } else {
                stats.wins += 1;
            }
        }
    }
}

/// Checks the inputs and returns how many cards the board is missing.
fn validate(players: &[Player], board: &[Card], deck: &[Card]) -> Result<usize, AnalysisError> {
    if players.is_empty() {
        return Err(AnalysisError::NoPlayers);
    }
    if board.len() > BOARD_SIZE {
        return Err(AnalysisError::BoardTooLarge(board.len()));
    }

    let mut seen: u64 = 0;
    let cards = players
        .iter()
        .flat_map(Player::hole)
        .chain(board.iter().copied())
        .chain(deck.iter().copied());
    for card in cards {
        if seen & card.mask() != 0 {
            return Err(AnalysisError::DuplicateCard(card));
        }
        seen |= card.mask();
    }

    let needed = BOARD_SIZE - board.len();
    if deck.len() < needed {
        return Err(AnalysisError::DeckTooSmall {
            needed,
            available: deck.len(),
        });
    }
    Ok(needed)
}

fn completions(deck: &[Card], needed: usize) -> Result<Subsets, AnalysisError> {
    Subsets::new(deck.len(), needed).map_err(|_| AnalysisError::DeckTooSmall {
        needed,
        available: deck.len(),
    })
}

fn commit(players: &mut [Player], stats: Vec<RoundStats>) {
    for (player, stats) in players.iter_mut().zip(stats) {
        log::debug!(
            "player {}: {} wins, {} draws of {}",
            player.id(),
            stats.wins,
            stats.draws,
            stats.possibilities
        );
        player.set_stats(stats);
    }
}

/// Analyzes one street by enumerating every completion of the board.
///
/// `deck` holds the unseen cards; burned cards must already be excluded.
/// With a complete board there is a single scenario. Otherwise every
/// combination of the missing cards out of `deck` is a scenario.
///
/// On success each player's statistics are replaced by the street's
/// totals. On error no player is modified.
///
/// # Errors
///
/// Returns an error if there are no players, the board holds more than five
/// cards, a card appears twice across hole cards, board and deck, or the
/// deck cannot complete the board.
///
/// # Example
///
/// ```
/// use eqrs::{Card, Player, analyze_round};
///
/// let card = |id| Card::from_id(id).unwrap();
/// let mut players = vec![
///     Player::new(0, "1", [card(1), card(14)]),
///     Player::new(1, "2", [card(2), card(16)]),
/// ];
/// let board = [card(27), card(29), card(44), card(9)];
/// let deck: Vec<Card> = eqrs::full_deck()
///     .into_iter()
///     .filter(|c| ![1, 14, 2, 16, 27, 29, 44, 9].contains(&c.id()))
///     .collect();
///
/// analyze_round(&mut players, &board, &deck).unwrap();
/// assert_eq!(players[0].stats().possibilities, 44);
/// ```
pub fn analyze_round(
    players: &mut [Player],
    board: &[Card],
    deck: &[Card],
) -> Result<(), AnalysisError> {
    let needed = validate(players, board, deck)?;
    log::debug!(
        "analyzing {} players, board {}, {} scenarios",
        players.len(),
        board.len(),
        binomial(deck.len(), needed)
    );

    let mut tally = Tally::new(players, board);
    if needed == 0 {
        tally.settle();
    } else {
        let mut completions = completions(deck, needed)?;
        while let Some(drawn) = completions.next_subset() {
            tally.deal(drawn, deck);
            tally.settle();
        }
    }

    commit(players, tally.stats);
    Ok(())
}

/// Scenarios handed to one rayon task.
#[cfg(feature = "parallel")]
const CHUNK: u64 = 64;

/// Same as [`analyze_round`], with scenarios split across the rayon pool.
///
/// The lexicographic index range of the completions is cut into chunks;
/// each task starts its own generator at its chunk's first rank and keeps
/// its own tally. The tallies are summed once every scenario has been
/// evaluated.
///
/// # Errors
///
/// Same as [`analyze_round`].
#[cfg(feature = "parallel")]
pub fn analyze_round_parallel(
    players: &mut [Player],
    board: &[Card],
    deck: &[Card],
) -> Result<(), AnalysisError> {
    let needed = validate(players, board, deck)?;
    if needed == 0 {
        return analyze_round(players, board, deck);
    }
    let scenarios = binomial(deck.len(), needed);
    log::debug!(
        "analyzing {} players, board {}, {} scenarios in parallel",
        players.len(),
        board.len(),
        scenarios
    );

    Lazy::force(&FIVE_OF_SEVEN);
    // fails here rather than inside a worker
    completions(deck, needed)?;

    let shared: &[Player] = players;
    let zero = || vec![RoundStats::default(); shared.len()];
    let stats = (0..scenarios.div_ceil(CHUNK))
        .into_par_iter()
        .map(|chunk| {
            let mut tally = Tally::new(shared, board);
            let Ok(mut completions) = Subsets::from_rank(deck.len(), needed, chunk * CHUNK) else {
                return tally.stats;
            };
            for _ in 0..CHUNK {
                let Some(drawn) = completions.next_subset() else {
                    break;
                };
                tally.deal(drawn, deck);
                tally.settle();
            }
            tally.stats
        })
        .reduce(zero, |mut left, right| {
            for (sum, part) in left.iter_mut().zip(right) {
                *sum += part;
            }
            left
        });

    commit(players, stats);
    Ok(())
}
