//! Roll weighted dice repeatedly and analyse the outcomes.
//!
//! ```rust
//! # use montecarlo::{Analyzer, Die, Game, TableForm};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), montecarlo::Error> {
//! // A six sided die where 6 is five times as likely as any other face.
//! let mut loaded = Die::parse("d6")?;
//! loaded.set_weight(&6, 5.0)?;
//! println!("{loaded}");
//!
//! // Roll a fair and a loaded die together 1000 times.
//! let mut game = Game::new(vec![Die::parse("d6")?, loaded])?;
//! let mut rng = StdRng::seed_from_u64(1);
//! game.play_with(1000, &mut rng)?;
//! println!("{}", game.show(TableForm::Narrow)?);
//!
//! let analyzer = Analyzer::new(&game)?;
//! println!("jackpots: {}", analyzer.jackpot());
//! for combination in analyzer.combo().iter().take(3) {
//!     println!("{combination}");
//! }
//! println!("{}", analyzer.face_counts_per_roll());
//! # Ok(())
//! # }
//! ```

mod analyzer;
mod die;
mod error;
mod format;
mod game;
mod parse;
mod sampling;

pub use analyzer::{Analyzer, Combination, FaceCounts, JackpotTable};
pub use die::{Die, Face};
pub use error::{Error, Result};
pub use game::{Game, NarrowRow, NarrowTable, PlayTable, PlayView, TableForm};
pub use parse::{parse_faces, parse_text_faces, parse_weight, MAX_SIDES};
