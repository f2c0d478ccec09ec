//! Error types for enumeration, evaluation, and table operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while generating index subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubsetError {
    /// More elements requested than the range holds.
    #[error("cannot choose {k} elements out of {n}")]
    TooLarge {
        /// Size of the index range.
        n: usize,
        /// Requested subset size.
        k: usize,
    },
}

/// Errors that can occur while evaluating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not have the required number of cards.
    #[error("expected {expected} cards, got {actual}")]
    WrongCardCount {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },
}

/// Errors that can occur while analyzing a round.
///
/// No player statistics are modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No players to analyze.
    #[error("no players to analyze")]
    NoPlayers,
    /// The board holds more than five cards.
    #[error("board has {0} cards, at most 5 allowed")]
    BoardTooLarge(usize),
    /// A card appears more than once across hole cards, board, and deck.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The remaining deck cannot complete the board.
    #[error("deck has {available} cards, {needed} needed to complete the board")]
    DeckTooSmall {
        /// Cards missing from the board.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// Errors that can occur while dealing or analyzing at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid table state for this operation.
    #[error("invalid table state for this operation")]
    InvalidState,
    /// No players at the table.
    #[error("no players at the table")]
    NoPlayers,
    /// More players than the deck can serve.
    #[error("too many players")]
    TooManyPlayers,
    /// No player IDs left to assign.
    #[error("player ids exhausted")]
    IdsExhausted,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// Round analysis failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
