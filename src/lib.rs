//! Exact Texas hold'em equity enumeration with optional `no_std` support.
//!
//! Given each player's hole cards, a partial board, and the unseen cards,
//! [`analyze_round`] walks every completion of the board, finds each
//! player's best [`Combination`] out of seven cards, and counts wins, draws,
//! and categories per player. Hands are compared by category only.
//!
//! [`Table`] wraps the engine in a seeded dealing session that burns and
//! deals the flop, turn, and river and analyzes each street.
//!
//! # Example
//!
//! ```no_run
//! use eqrs::{Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! table.deal_hole_cards().unwrap();
//! table.advance().unwrap();
//! let report = table.analyze().unwrap();
//! println!("{report}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod equity;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod subsets;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, full_deck};
#[cfg(feature = "parallel")]
pub use equity::analyze_round_parallel;
pub use equity::{BOARD_SIZE, analyze_round};
pub use error::{AnalysisError, DealError, HandError, SubsetError};
pub use hand::{Combination, best_of_seven, classify};
pub use options::{MAX_PLAYERS, TableOptions};
pub use player::{CategoryCounts, Player, PlayerId, RoundStats};
pub use result::{Favorite, PlayerEquity, StreetReport};
pub use subsets::{FIVE_OF_SEVEN, Subsets, binomial, generate};
pub use table::{Street, Table};
