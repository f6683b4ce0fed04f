mod table;

pub use table::{NarrowRow, NarrowTable, PlayTable, PlayView, TableForm};

use rand::{thread_rng, Rng};
use tracing::{debug, warn};

use crate::die::{Die, Face};
use crate::error::{Error, Result};

/// Rolls one or more dice of the same kind together.
///
/// Dice "of the same kind" have the same faces, each die may still carry its
/// own weights. This is not enforced, dice with different faces only log a
/// warning when the game is created.
#[derive(Debug, Clone)]
pub struct Game<T> {
    dice: Vec<Die<T>>,
    plays: Option<PlayTable<T>>,
}

impl<T: Face> Game<T> {
    pub fn new(dice: Vec<Die<T>>) -> Result<Self> {
        let Some(first) = dice.first() else {
            return Err(Error::InvalidInput(
                "a game needs at least one die".to_string(),
            ));
        };

        for (i, die) in dice.iter().enumerate().skip(1) {
            if die.faces() != first.faces() {
                warn!(die = i + 1, "die faces differ from the first die");
            }
        }

        Ok(Self { dice, plays: None })
    }

    pub fn dice(&self) -> &[Die<T>] {
        &self.dice
    }

    /// Mutable access to a die (1-based), e.g. to change its weights.
    /// Only affects plays made after the change.
    pub fn die_mut(&mut self, die: usize) -> Option<&mut Die<T>> {
        self.dice.get_mut(die.checked_sub(1)?)
    }

    fn play_amount(&mut self, num_rolls: usize, rng: &mut impl Rng) -> Result<()> {
        if num_rolls == 0 {
            return Err(Error::InvalidArgument(
                "a game must be played at least once".to_string(),
            ));
        }

        let columns = self
            .dice
            .iter()
            .map(|die| die.roll_with(num_rolls, rng))
            .collect::<Result<Vec<_>>>()?;

        debug!(num_rolls, num_dice = self.dice.len(), "played game");
        self.plays = Some(PlayTable::from_columns(columns));
        Ok(())
    }

    /// Rolls every die `num_rolls` times, replacing the results of any previous play.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `play_with()`
    pub fn play(&mut self, num_rolls: usize) -> Result<()> {
        self.play_amount(num_rolls, &mut thread_rng())
    }

    pub fn play_with(&mut self, num_rolls: usize, rng: &mut impl Rng) -> Result<()> {
        self.play_amount(num_rolls, rng)
    }

    /// Results of the most recent play.
    pub fn plays(&self) -> Result<&PlayTable<T>> {
        self.plays.as_ref().ok_or(Error::NoPlay)
    }

    pub fn has_played(&self) -> bool {
        self.plays.is_some()
    }

    /// Copy of the most recent play in the requested form.
    pub fn show(&self, form: TableForm) -> Result<PlayView<T>> {
        let plays = self.plays()?;
        Ok(match form {
            TableForm::Wide => PlayView::Wide(plays.clone()),
            TableForm::Narrow => PlayView::Narrow(plays.narrow()),
        })
    }

    /// Same as `show()` but takes the form as `"wide"` or `"narrow"`.
    pub fn show_str(&self, form: &str) -> Result<PlayView<T>> {
        self.show(form.parse()?)
    }
}
