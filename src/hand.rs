//! Hand categories and five- and seven-card evaluation.
//!
//! Hands are compared by [`Combination`] alone. Two hands in the same
//! category tie regardless of pair ranks, kickers, or flush suits, and the
//! Ace only plays low (there is no straight running past the King).

use core::fmt;

use crate::card::Card;
use crate::error::HandError;
use crate::subsets::FIVE_OF_SEVEN;

/// Poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Combination {
    /// No other category applies.
    HighCard = 1,
    /// Two cards of one rank.
    OnePair,
    /// Two distinct pairs.
    TwoPairs,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks of one suit.
    StraightFlush,
}

impl Combination {
    /// All categories from weakest to strongest.
    pub const ALL: [Self; 9] = [
        Self::HighCard,
        Self::OnePair,
        Self::TwoPairs,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
    ];

    /// Returns the ordering value (`HighCard` = 1 .. `StraightFlush` = 9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based position in [`Combination::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HighCard => "high card",
            Self::OnePair => "one pair",
            Self::TwoPairs => "two pairs",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        })
    }
}

/// Category from same-rank groups only.
fn rank_groups(cards: &[Card; 5]) -> Combination {
    let mut per_rank = [0u8; 13];
    for card in cards {
        per_rank[card.rank.value() as usize] += 1;
    }

    // groups[c] = number of ranks held exactly c times
    let mut groups = [0u8; 6];
    for &count in &per_rank {
        groups[count as usize] += 1;
    }

    match (groups[4], groups[3], groups[2]) {
        (1.., _, _) => Combination::FourOfAKind,
        (_, 1.., 1..) => Combination::FullHouse,
        (_, 1.., _) => Combination::ThreeOfAKind,
        (_, _, 2) => Combination::TwoPairs,
        (_, _, 1) => Combination::OnePair,
        _ => Combination::HighCard,
    }
}

/// Category from suit and sequence only.
fn straight_or_flush(cards: &[Card; 5]) -> Combination {
    let flush = cards.iter().all(|card| card.suit == cards[0].suit);

    let mut ranks = cards.map(|card| card.rank.value());
    ranks.sort_unstable();
    let straight = ranks
        .iter()
        .zip(ranks[0]..)
        .all(|(&rank, expected)| rank == expected);

    match (straight, flush) {
        (true, true) => Combination::StraightFlush,
        (false, true) => Combination::Flush,
        (true, false) => Combination::Straight,
        (false, false) => Combination::HighCard,
    }
}

pub(crate) fn classify_five(cards: &[Card; 5]) -> Combination {
    rank_groups(cards).max(straight_or_flush(cards))
}

pub(crate) fn best_of_seven_cards(cards: &[Card; 7]) -> Combination {
    FIVE_OF_SEVEN
        .iter()
        .map(|indices| classify_five(&indices.map(|i| cards[i - 1])))
        .max()
        .unwrap_or(Combination::HighCard)
}

/// Classifies a five-card hand.
///
/// Same-rank groups and straight/flush are detected independently and the
/// stronger of the two categories is returned.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly five cards.
///
/// # Example
///
/// ```
/// use eqrs::{Card, Combination, classify};
///
/// let hand: Vec<Card> = [1, 14, 27, 40, 7].into_iter().filter_map(Card::from_id).collect();
/// assert_eq!(classify(&hand), Ok(Combination::FourOfAKind));
/// ```
pub fn classify(cards: &[Card]) -> Result<Combination, HandError> {
    let cards: &[Card; 5] = cards.try_into().map_err(|_| HandError::WrongCardCount {
        expected: 5,
        actual: cards.len(),
    })?;
    Ok(classify_five(cards))
}

/// Returns the best category among the 21 five-card subsets of seven cards.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly seven cards.
pub fn best_of_seven(cards: &[Card]) -> Result<Combination, HandError> {
    let cards: &[Card; 7] = cards.try_into().map_err(|_| HandError::WrongCardCount {
        expected: 7,
        actual: cards.len(),
    })?;
    Ok(best_of_seven_cards(cards))
}
