mod stats;

pub use stats::{Combination, FaceCounts, JackpotTable};

use std::cell::OnceCell;

use tracing::debug;

use crate::die::Face;
use crate::error::Result;
use crate::game::{Game, PlayTable};

/// Computes statistics over the most recent play of a [Game].
///
/// The analyzer keeps its own copy of the play and of the first die's faces,
/// playing the game again afterwards does not change its results. Each
/// statistic is computed the first time it is asked for and cached.
#[derive(Debug, Clone)]
pub struct Analyzer<T> {
    plays: PlayTable<T>,
    faces: Vec<T>,
    jackpots: OnceCell<JackpotTable>,
    combinations: OnceCell<Vec<Combination<T>>>,
    face_counts: OnceCell<FaceCounts<T>>,
}

impl<T: Face> Analyzer<T> {
    pub fn new(game: &Game<T>) -> Result<Self> {
        let plays = game.plays()?.clone();
        // `Game::new` rejects an empty list of dice, so there is always a first die.
        let faces = game.dice()[0].faces().to_vec();

        Ok(Self {
            plays,
            faces,
            jackpots: OnceCell::new(),
            combinations: OnceCell::new(),
            face_counts: OnceCell::new(),
        })
    }

    pub fn plays(&self) -> &PlayTable<T> {
        &self.plays
    }

    /// Faces of the first die, used as the face counts columns.
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    /// Number of rolls where every die showed the same face.
    pub fn jackpot(&self) -> usize {
        let jackpots = self.jackpots.get_or_init(|| {
            let jackpots = JackpotTable::new(&self.plays);
            debug!(jackpots = jackpots.count(), "computed jackpots");
            jackpots
        });
        jackpots.count()
    }

    /// Per roll jackpot flags, available once `jackpot()` has been called.
    pub fn jackpot_flags(&self) -> Option<&JackpotTable> {
        self.jackpots.get()
    }

    /// Distinct combinations of faces with their counts, most frequent first.
    pub fn combo(&self) -> &[Combination<T>] {
        self.combinations.get_or_init(|| {
            let combinations = stats::count_combinations(&self.plays);
            debug!(distinct = combinations.len(), "counted combinations");
            combinations
        })
    }

    /// How many times each face of the first die appears in each roll.
    pub fn face_counts_per_roll(&self) -> &FaceCounts<T> {
        self.face_counts
            .get_or_init(|| FaceCounts::new(&self.faces, &self.plays))
    }
}
