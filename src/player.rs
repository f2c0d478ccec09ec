//! Players and their per-street statistics.

use alloc::string::String;
use core::ops::{AddAssign, Index};

use crate::card::Card;
use crate::hand::Combination;

/// Stable player identifier, assigned once per session.
pub type PlayerId = u32;

/// Per-category scenario counts, indexed by [`Combination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts([u64; 9]);

impl CategoryCounts {
    /// Records one scenario ending in `combination`.
    pub const fn record(&mut self, combination: Combination) {
        self.0[combination.index()] += 1;
    }

    /// Returns the count for `combination`.
    #[must_use]
    pub const fn get(&self, combination: Combination) -> u64 {
        self.0[combination.index()]
    }

    /// Returns the sum over all categories.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Iterates `(category, count)` pairs from weakest to strongest.
    pub fn iter(&self) -> impl Iterator<Item = (Combination, u64)> + '_ {
        Combination::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Returns the strongest category reached in at least one scenario.
    #[must_use]
    pub fn best(&self) -> Option<Combination> {
        Combination::ALL
            .into_iter()
            .rev()
            .find(|&combination| self.get(combination) > 0)
    }

    /// Returns the category reached most often.
    ///
    /// Ties go to the stronger category.
    #[must_use]
    pub fn most_frequent(&self) -> Option<Combination> {
        self.iter()
            .filter(|&(_, count)| count > 0)
            .max_by_key(|&(_, count)| count)
            .map(|(combination, _)| combination)
    }
}

impl Index<Combination> for CategoryCounts {
    type Output = u64;

    fn index(&self, combination: Combination) -> &u64 {
        &self.0[combination.index()]
    }
}

impl AddAssign for CategoryCounts {
    fn add_assign(&mut self, other: Self) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0) {
            *mine += theirs;
        }
    }
}

/// Outcome statistics for one player over one street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundStats {
    /// Number of scenarios evaluated.
    pub possibilities: u64,
    /// Scenarios where this player alone held the best category.
    pub wins: u64,
    /// Scenarios where this player shared the best category.
    pub draws: u64,
    /// Best category reached per scenario.
    pub categories: CategoryCounts,
}

impl RoundStats {
    /// Returns whether these statistics hold an analysis.
    #[must_use]
    pub const fn is_analyzed(&self) -> bool {
        self.possibilities > 0
    }

    /// Fraction of scenarios won outright, or 0 before analysis.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for scenario counts"
    )]
    pub fn win_ratio(&self) -> f64 {
        if self.possibilities == 0 {
            return 0.0;
        }
        self.wins as f64 / self.possibilities as f64
    }

    /// Fraction of scenarios drawn, or 0 before analysis.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for scenario counts"
    )]
    pub fn draw_ratio(&self) -> f64 {
        if self.possibilities == 0 {
            return 0.0;
        }
        self.draws as f64 / self.possibilities as f64
    }
}

impl AddAssign for RoundStats {
    fn add_assign(&mut self, other: Self) {
        self.possibilities += other.possibilities;
        self.wins += other.wins;
        self.draws += other.draws;
        self.categories += other.categories;
    }
}

/// A player holding two hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hole: [Card; 2],
    stats: RoundStats,
}

impl Player {
    /// Creates a player with empty statistics.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, hole: [Card; 2]) -> Self {
        Self {
            id,
            name: name.into(),
            hole,
            stats: RoundStats::default(),
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hole cards.
    #[must_use]
    pub const fn hole(&self) -> [Card; 2] {
        self.hole
    }

    /// Returns the statistics of the last analyzed street.
    #[must_use]
    pub const fn stats(&self) -> &RoundStats {
        &self.stats
    }

    /// Replaces the statistics with a finished analysis.
    pub(crate) const fn set_stats(&mut self, stats: RoundStats) {
        self.stats = stats;
    }

    /// Clears the statistics before the next street.
    pub fn reset(&mut self) {
        self.stats = RoundStats::default();
    }
}
