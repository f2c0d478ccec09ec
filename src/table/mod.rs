//! Dealing session and per-street analysis.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::string::ToString;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, full_deck};
use crate::equity;
use crate::error::{AnalysisError, DealError};
use crate::options::{MAX_PLAYERS, TableOptions};
use crate::player::{Player, PlayerId};
use crate::result::{PlayerEquity, StreetReport};

pub mod state;

pub use state::Street;

/// A hold'em table that deals one hand and analyzes each street.
///
/// The table owns the deck, the board, the burned cards, and the players.
/// Use [`TableOptions`] to configure the number of players and burning.
pub struct Table {
    /// Undealt cards; the next card is drawn from the end.
    pub deck: Mutex<Vec<Card>>,
    /// Table options.
    pub options: TableOptions,
    /// Current street, or `None` before the hole cards are dealt.
    pub street: Mutex<Option<Street>>,
    /// Next player ID to assign.
    next_id: AtomicU32,
    /// Seated players in dealing order.
    pub players: Mutex<Vec<Player>>,
    /// Community cards.
    pub board: Mutex<Vec<Card>>,
    /// Burned cards.
    pub burned: Mutex<Vec<Card>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a table with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use eqrs::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::shuffled_deck(&mut rng);
        Self::build(options, deck, rng)
    }

    /// Creates a table with a fixed deck, drawing from its end.
    ///
    /// Useful for replaying a known hand.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Vec<Card>) -> Self {
        Self::build(options, deck, ChaCha8Rng::seed_from_u64(0))
    }

    fn build(options: TableOptions, deck: Vec<Card>, rng: ChaCha8Rng) -> Self {
        Self {
            deck: Mutex::new(deck),
            options,
            street: Mutex::new(None),
            next_id: AtomicU32::new(0),
            players: Mutex::new(Vec::new()),
            board: Mutex::new(Vec::new()),
            burned: Mutex::new(Vec::new()),
            rng: Mutex::new(rng),
        }
    }

    fn shuffled_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = full_deck();
        cards.shuffle(rng);
        cards
    }

    /// Gathers every card, reshuffles, and removes the players.
    ///
    /// Player IDs keep increasing across hands; once they are used up,
    /// [`Table::deal_hole_cards`] fails with [`DealError::IdsExhausted`].
    pub fn clear_hand(&self) {
        let mut rng = self.rng.lock();
        *self.deck.lock() = Self::shuffled_deck(&mut rng);
        self.players.lock().clear();
        self.board.lock().clear();
        self.burned.lock().clear();
        *self.street.lock() = None;
    }

    /// Draws `count` cards from the deck, or none if it holds fewer.
    fn draw(&self, count: usize) -> Option<Vec<Card>> {
        let mut deck = self.deck.lock();
        let split = deck.len().checked_sub(count)?;
        let mut cards = deck.split_off(split);
        cards.reverse();
        Some(cards)
    }

    /// Deals two hole cards to every player.
    ///
    /// Cards go out one at a time around the table, twice. Players are named
    /// by their seat number starting from 1.
    ///
    /// Returns the assigned player IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the hole cards were already dealt, the table is
    /// empty or over [`MAX_PLAYERS`], the player IDs are used up, or the
    /// deck runs short.
    pub fn deal_hole_cards(&self) -> Result<Vec<PlayerId>, DealError> {
        if self.street.lock().is_some() {
            return Err(DealError::InvalidState);
        }

        let count = usize::from(self.options.players);
        if count == 0 {
            return Err(DealError::NoPlayers);
        }
        if self.options.players > MAX_PLAYERS {
            return Err(DealError::TooManyPlayers);
        }

        if self.cards_remaining() < count * 2 {
            return Err(DealError::NotEnoughCards);
        }
        let first_id = self.reserve_ids(self.options.players)?;
        let cards = self.draw(count * 2).ok_or(DealError::NotEnoughCards)?;
        let (first, second) = cards.split_at(count);

        let mut players = self.players.lock();
        for (seat, (&a, &b)) in first.iter().zip(second).enumerate() {
            let id = first_id + seat as PlayerId;
            log::trace!("player {id} dealt {a} {b}");
            players.push(Player::new(id, (seat + 1).to_string(), [a, b]));
        }
        let ids = players.iter().map(Player::id).collect();
        drop(players);

        *self.street.lock() = Some(Street::Preflop);
        Ok(ids)
    }

    /// Claims `count` consecutive player IDs, returning the first.
    fn reserve_ids(&self, count: u8) -> Result<PlayerId, DealError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| {
                next.checked_add(u32::from(count))
            })
            .map_err(|_| DealError::IdsExhausted)
    }

    /// Burns a card (if enabled) and deals the board cards of the next street.
    ///
    /// Returns the new board cards.
    ///
    /// # Errors
    ///
    /// Returns an error before the hole cards are dealt, after the river, or
    /// if the deck runs short.
    pub fn advance(&self) -> Result<Vec<Card>, DealError> {
        let current = (*self.street.lock()).ok_or(DealError::InvalidState)?;
        let next = current.next().ok_or(DealError::InvalidState)?;

        let burn = usize::from(self.options.burn_cards);
        let count = next.board_len() - current.board_len();
        let mut cards = self.draw(burn + count).ok_or(DealError::NotEnoughCards)?;

        let dealt = cards.split_off(burn);
        if let Some(&burned) = cards.first() {
            log::trace!("burned {burned}");
            self.burned.lock().push(burned);
        }
        self.board.lock().extend_from_slice(&dealt);
        log::trace!("{next:?} dealt, {} cards left", self.cards_remaining());

        *self.street.lock() = Some(next);
        Ok(dealt)
    }

    /// Analyzes the current street over every completion of the board.
    ///
    /// Player statistics are reset first, then replaced by the street's
    /// totals. If the analysis fails the players are left reset.
    ///
    /// # Errors
    ///
    /// Returns an error before the flop (five unseen board cards are not
    /// analyzed) or if the table's cards are inconsistent.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn analyze(&self) -> Result<StreetReport, DealError> {
        let street = match *self.street.lock() {
            Some(street) if street != Street::Preflop => street,
            _ => return Err(DealError::InvalidState),
        };

        let mut players = self.players.lock();
        let board = self.board.lock();
        let deck = self.deck.lock();

        players.iter_mut().for_each(Player::reset);
        self.run(&mut players, &board, &deck)?;

        Ok(StreetReport {
            street,
            board: board.clone(),
            burned: self.burned.lock().clone(),
            players: players.iter().map(PlayerEquity::from).collect(),
        })
    }

    #[cfg(feature = "parallel")]
    fn run(&self, players: &mut [Player], board: &[Card], deck: &[Card]) -> Result<(), AnalysisError> {
        if self.options.parallel {
            equity::analyze_round_parallel(players, board, deck)
        } else {
            equity::analyze_round(players, board, deck)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run(&self, players: &mut [Player], board: &[Card], deck: &[Card]) -> Result<(), AnalysisError> {
        equity::analyze_round(players, board, deck)
    }

    /// Resets every player's statistics.
    pub fn clear_stats(&self) {
        self.players.lock().iter_mut().for_each(Player::reset);
    }

    /// Returns a snapshot of the players.
    pub fn players(&self) -> Vec<Player> {
        self.players.lock().clone()
    }

    /// Returns the player with the given ID.
    pub fn get_player(&self, player_id: PlayerId) -> Option<Player> {
        self.players
            .lock()
            .iter()
            .find(|player| player.id() == player_id)
            .cloned()
    }

    /// Returns the community cards.
    pub fn board(&self) -> Vec<Card> {
        self.board.lock().clone()
    }

    /// Returns the burned cards.
    pub fn burned(&self) -> Vec<Card> {
        self.burned.lock().clone()
    }

    /// Returns the number of undealt cards.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the current street.
    pub fn street(&self) -> Option<Street> {
        *self.street.lock()
    }
}
