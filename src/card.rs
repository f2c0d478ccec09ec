//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in identifier order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Spades => '♠',
            Self::Clubs => '♣',
        }
    }
}

/// Card rank.
///
/// The discriminant is the ordering value: Ace is the lowest rank (0) and
/// King the highest (12). There is no wrap-around above the King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 0,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the ordering value (Ace = 0 .. King = 12).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from its identifier in `1..=52`.
    ///
    /// The suit is `(id - 1) / 13` and the rank is `(id - 1) % 13`, so ids
    /// 1 to 13 are the hearts from Ace to King.
    ///
    /// Returns `None` for identifiers outside `1..=52`.
    ///
    /// # Example
    ///
    /// ```
    /// use eqrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_id(1), Some(Card::new(Rank::Ace, Suit::Hearts)));
    /// assert_eq!(Card::from_id(52), Some(Card::new(Rank::King, Suit::Clubs)));
    /// assert_eq!(Card::from_id(0), None);
    /// ```
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if id == 0 || id as usize > DECK_SIZE {
            return None;
        }
        let index = id - 1;
        Some(Self {
            rank: Rank::ALL[(index % 13) as usize],
            suit: Suit::ALL[(index / 13) as usize],
        })
    }

    /// Returns the identifier of the card in `1..=52`.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.suit as u8 * 13 + self.rank.value() + 1
    }

    /// Single-bit mask of this card within a 52-bit set.
    pub(crate) const fn mask(self) -> u64 {
        1 << (self.id() - 1)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the 52 cards of a deck ordered by identifier.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    (1..=DECK_SIZE as u8).filter_map(Card::from_id).collect()
}
