//! Per-street summaries for presentation code.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::Combination;
use crate::player::{Player, PlayerId, RoundStats};
use crate::table::Street;

/// Equity of a single player on one street.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEquity {
    /// The player ID.
    pub player_id: PlayerId,
    /// The player name.
    pub name: String,
    /// The player's hole cards.
    pub hole: [Card; 2],
    /// Raw scenario counts.
    pub stats: RoundStats,
    /// Fraction of scenarios won outright.
    pub win: f64,
    /// Fraction of scenarios drawn.
    pub draw: f64,
    /// Strongest category reached in any scenario.
    pub best: Option<Combination>,
    /// Category reached in the most scenarios.
    pub most_likely: Option<Combination>,
}

impl From<&Player> for PlayerEquity {
    fn from(player: &Player) -> Self {
        let stats = *player.stats();
        Self {
            player_id: player.id(),
            name: String::from(player.name()),
            hole: player.hole(),
            stats,
            win: stats.win_ratio(),
            draw: stats.draw_ratio(),
            best: stats.categories.best(),
            most_likely: stats.categories.most_frequent(),
        }
    }
}

/// Who is ahead on a street.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Favorite {
    /// The player with the most outright wins.
    Winner(PlayerId),
    /// Nobody wins outright; these players share the most draws.
    Draw(Vec<PlayerId>),
}

/// Result of analyzing one street.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetReport {
    /// The analyzed street.
    pub street: Street,
    /// Community cards.
    pub board: Vec<Card>,
    /// Burned cards so far.
    pub burned: Vec<Card>,
    /// Equity for each player, in seating order.
    pub players: Vec<PlayerEquity>,
}

impl StreetReport {
    /// Returns the player ahead on this street.
    ///
    /// The first player with the most wins if anyone wins a scenario,
    /// otherwise every player tied on the most draws.
    #[must_use]
    pub fn favorite(&self) -> Option<Favorite> {
        let most_wins = self.players.iter().map(|p| p.stats.wins).max()?;
        if most_wins > 0 {
            return self
                .players
                .iter()
                .find(|p| p.stats.wins == most_wins)
                .map(|p| Favorite::Winner(p.player_id));
        }

        let most_draws = self.players.iter().map(|p| p.stats.draws).max()?;
        Some(Favorite::Draw(
            self.players
                .iter()
                .filter(|p| p.stats.draws == most_draws)
                .map(|p| p.player_id)
                .collect(),
        ))
    }
}

struct Cards<'a>(&'a [Card]);

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for StreetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:?}: {} players, board {}, burned {}",
            self.street,
            self.players.len(),
            Cards(&self.board),
            Cards(&self.burned)
        )?;
        for player in &self.players {
            write!(
                f,
                "  {} {}  W: {:.1}%  D: {:.1}%  ({}/{}/{})",
                player.name,
                Cards(&player.hole),
                player.win * 100.0,
                player.draw * 100.0,
                player.stats.wins,
                player.stats.draws,
                player.stats.possibilities
            )?;
            if let Some(best) = player.best {
                write!(f, "  best: {best}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
