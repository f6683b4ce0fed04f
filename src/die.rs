use std::collections::HashSet;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use rand::{thread_rng, Rng};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::format::new_table;
use crate::parse::{parse_faces, parse_text_faces, parse_weight, validate_weight};
use crate::sampling::CumulativeWeights;

/// A value that can be written on the face of a die.
///
/// Implemented for every type that is cloneable, hashable, comparable for
/// equality and printable, so both numbers and strings can be used as faces.
pub trait Face: Clone + Eq + Hash + Debug + Display {}

impl<T> Face for T where T: Clone + Eq + Hash + Debug + Display {}

/// A die with a fixed set of distinct faces, each carrying a mutable weight.
///
/// Every face starts with a weight of `1.0`. Rolling picks a face with
/// probability `weight / sum(weights)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Die<T> {
    faces: Vec<T>,
    weights: Vec<f64>,
}

impl<T: Face> Die<T> {
    /// Creates a new die with uniform weights.
    /// Fails if there are no faces or if a face appears more than once.
    pub fn new(faces: impl IntoIterator<Item = T>) -> Result<Self> {
        let faces: Vec<T> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(Error::InvalidInput(
                "a die needs at least one face".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(faces.len());
        if let Some(face) = faces.iter().find(|face| !seen.insert(*face)) {
            return Err(Error::InvalidInput(format!("duplicate face {face}")));
        }

        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    pub fn faces(&self) -> &[T] {
        &self.faces
    }
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
    pub fn sides(&self) -> usize {
        self.faces.len()
    }

    fn position(&self, face: &T) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }

    pub fn weight(&self, face: &T) -> Option<f64> {
        self.position(face).map(|i| self.weights[i])
    }

    /// Chance of rolling `face` with the current weights.
    /// Returns `None` for faces that are not on the die.
    pub fn probability(&self, face: &T) -> Option<f64> {
        let total: f64 = self.weights.iter().sum();
        let weight = self.weight(face)?;
        if total > 0.0 {
            Some(weight / total)
        } else {
            Some(0.0)
        }
    }

    /// Changes the weight of a single face.
    ///
    /// The weight is validated before the face is looked up, so an invalid
    /// weight is reported even for an unknown face. On error the weights are
    /// left untouched.
    pub fn set_weight(&mut self, face: &T, weight: f64) -> Result<()> {
        let weight = validate_weight(weight)?;
        let index = self
            .position(face)
            .ok_or_else(|| Error::UnknownFace(face.to_string()))?;

        trace!(%face, weight, "changing face weight");
        self.weights[index] = weight;
        Ok(())
    }

    /// Same as `set_weight()` but parses the weight from text first.
    pub fn set_weight_str(&mut self, face: &T, weight: &str) -> Result<()> {
        let weight = parse_weight(weight)?;
        self.set_weight(face, weight)
    }

    fn roll_amount(&self, times: usize, rng: &mut impl Rng) -> Result<Vec<T>> {
        if times == 0 {
            return Err(Error::InvalidArgument(
                "the die must be rolled at least once".to_string(),
            ));
        }

        let cumulative = CumulativeWeights::new(&self.weights)?;
        let rolls: Vec<T> = (0..times)
            .map(|_| self.faces[cumulative.sample(rng)].clone())
            .collect();

        debug!(times, sides = self.sides(), "rolled die");
        Ok(rolls)
    }

    /// Rolls the die `times` times.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_with()`
    pub fn roll(&self, times: usize) -> Result<Vec<T>> {
        self.roll_amount(times, &mut thread_rng())
    }

    /// Rolls the die `times` times with the rng specified.
    pub fn roll_with(&self, times: usize, rng: &mut impl Rng) -> Result<Vec<T>> {
        self.roll_amount(times, rng)
    }

    /// Roll the die only once.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_once_with()`
    pub fn roll_once(&self) -> Result<T> {
        self.roll_once_with(&mut thread_rng())
    }

    pub fn roll_once_with(&self, rng: &mut impl Rng) -> Result<T> {
        let cumulative = CumulativeWeights::new(&self.weights)?;
        Ok(self.faces[cumulative.sample(rng)].clone())
    }

    /// Current faces and weights, in face order.
    pub fn show(&self) -> Vec<(T, f64)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }
}

impl Die<i64> {
    /// Creates a die from notation like `d6` or `[1, 2, 3]`.
    pub fn parse(notation: &str) -> Result<Self> {
        Self::new(parse_faces(notation)?)
    }
}

impl Die<String> {
    /// Creates a die from a list of words like `[heads, tails]`.
    pub fn parse_text(notation: &str) -> Result<Self> {
        Self::new(parse_text_faces(notation)?)
    }
}

impl<T: Face> Display for Die<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(["faces", "weights"]);
        for (face, weight) in self.faces.iter().zip(&self.weights) {
            table.add_row(vec![face.to_string(), weight.to_string()]);
        }
        write!(f, "{table}")
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::format::rendered_rows;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn d6() -> Die<i64> {
        Die::new(1..=6).unwrap()
    }

    #[test]
    fn test_new_uniform_weights() {
        let die = d6();
        assert_eq!(die.faces(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(die.weights(), [1.0; 6]);
        assert_eq!(die.sides(), 6);
    }

    #[test]
    fn test_new_empty() {
        let faces: Vec<i64> = Vec::new();
        assert!(matches!(Die::new(faces), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_new_duplicates() {
        assert_eq!(
            Die::new([1, 1, 1]),
            Err(Error::InvalidInput("duplicate face 1".to_string()))
        );
    }

    #[test]
    fn test_new_reports_first_repeated_face() {
        assert_eq!(
            Die::new(["a", "b", "c", "b", "a"]),
            Err(Error::InvalidInput("duplicate face b".to_string()))
        );
    }

    #[test]
    fn test_new_many_faces() {
        let die = Die::new(0..200_000_i64).unwrap();
        assert_eq!(die.sides(), 200_000);

        let mut faces: Vec<i64> = (0..200_000).collect();
        faces.push(199_999);
        assert!(matches!(Die::new(faces), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_new_text_faces() {
        let die = Die::new(["H", "T"]).unwrap();
        assert_eq!(die.faces(), ["H", "T"]);
    }

    #[test]
    fn test_set_weight() {
        let mut die = d6();
        die.set_weight(&1, 5.0).unwrap();

        assert_eq!(die.weights(), [5.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(die.weight(&1), Some(5.0));
        assert_eq!(die.probability(&1), Some(0.5));
    }

    #[test]
    fn test_set_weight_unknown_face() {
        let mut die = d6();
        assert_eq!(
            die.set_weight(&7, 2.0),
            Err(Error::UnknownFace("7".to_string()))
        );
        assert_eq!(die.weights(), [1.0; 6]);
    }

    #[test]
    fn test_set_weight_negative() {
        let mut die = d6();
        assert!(matches!(
            die.set_weight(&1, -1.0),
            Err(Error::InvalidWeight(_))
        ));
        assert_eq!(die.weights(), [1.0; 6]);
    }

    #[test]
    fn test_set_weight_str() {
        let mut die = d6();
        die.set_weight_str(&2, "2.5").unwrap();
        assert_eq!(die.weight(&2), Some(2.5));
    }

    #[test]
    fn test_set_weight_str_not_a_number() {
        let mut die = d6();
        assert!(matches!(
            die.set_weight_str(&1, "hi"),
            Err(Error::InvalidWeight(_))
        ));
        assert_eq!(die.weights(), [1.0; 6]);
    }

    #[test]
    fn test_roll_length_and_domain() {
        let die = d6();
        let rolls = die.roll_with(100, &mut test_rng()).unwrap();

        assert_eq!(rolls.len(), 100);
        assert!(rolls.iter().all(|r| die.faces().contains(r)));
    }

    #[test]
    fn test_roll_zero_times() {
        assert!(matches!(
            d6().roll_with(0, &mut test_rng()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_roll_is_deterministic_with_seed() {
        let die = d6();
        let first = die.roll_with(20, &mut test_rng()).unwrap();
        let second = die.roll_with(20, &mut test_rng()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_roll_zero_weight_never_rolled() {
        let mut die = d6();
        die.set_weight(&6, 0.0).unwrap();

        let rolls = die.roll_with(2000, &mut test_rng()).unwrap();
        assert!(!rolls.contains(&6));
    }

    #[test]
    fn test_roll_single_positive_weight() {
        let mut die = d6();
        for face in 1..=5 {
            die.set_weight(&face, 0.0).unwrap();
        }

        let rolls = die.roll_with(50, &mut test_rng()).unwrap();
        assert!(rolls.iter().all(|&r| r == 6));
        assert_eq!(die.roll_once_with(&mut test_rng()), Ok(6));
    }

    #[test]
    fn test_roll_all_zero_weights() {
        let mut die = Die::new(["a", "b"]).unwrap();
        die.set_weight(&"a", 0.0).unwrap();
        die.set_weight(&"b", 0.0).unwrap();

        assert!(matches!(die.roll(1), Err(Error::InvalidWeight(_))));
        assert_eq!(die.probability(&"a"), Some(0.0));
    }

    #[test]
    fn test_roll_follows_weights() {
        let mut die = Die::new(["heavy", "light"]).unwrap();
        die.set_weight(&"heavy", 9.0).unwrap();

        let rolls = die.roll_with(10_000, &mut test_rng()).unwrap();
        let heavy = rolls.iter().filter(|&&r| r == "heavy").count();

        // expected 9000, the margin is far beyond any plausible deviation
        assert!((8500..=9500).contains(&heavy), "{heavy}");
    }

    #[test]
    fn test_show() {
        let mut die = Die::new(["a", "b"]).unwrap();
        die.set_weight(&"b", 3.0).unwrap();
        assert_eq!(die.show(), [("a", 1.0), ("b", 3.0)]);
    }

    #[test]
    fn test_parse() {
        let die = Die::parse("d4").unwrap();
        assert_eq!(die.faces(), [1, 2, 3, 4]);

        assert!(matches!(Die::parse("[1, 1]"), Err(Error::InvalidInput(_))));
        assert!(matches!(
            Die::parse("d4294967295"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_text() {
        let die = Die::parse_text("[heads, tails]").unwrap();
        assert_eq!(die.faces(), ["heads", "tails"]);
    }

    #[test]
    fn test_display() {
        let mut die = Die::new([1, 2]).unwrap();
        die.set_weight(&2, 0.5).unwrap();
        let rows = rendered_rows(&die.to_string());

        assert_eq!(rows.len(), 3);
        assert!(rows[0][0].contains("faces"));
        assert!(rows[0][1].contains("weights"));
        assert_eq!(rows[1..], [vec!["1", "1"], vec!["2", "0.5"]]);
    }
}
