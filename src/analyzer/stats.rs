use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::die::Face;
use crate::format::{new_table, to_cells, to_notations};
use crate::game::PlayTable;

/// Whether each roll was a jackpot, in roll order.
#[derive(Debug, Clone, PartialEq)]
pub struct JackpotTable {
    flags: Vec<bool>,
}

impl JackpotTable {
    pub(crate) fn new<T: Face>(table: &PlayTable<T>) -> Self {
        let flags = table
            .rows()
            .iter()
            .map(|row| row.iter().all(|value| *value == row[0]))
            .collect();
        Self { flags }
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Whether the given roll (1-based) was a jackpot.
    pub fn is_jackpot(&self, roll: usize) -> Option<bool> {
        self.flags.get(roll.checked_sub(1)?).copied()
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&jackpot| jackpot).count()
    }
}

impl Display for JackpotTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(["Roll Number", "Jackpot or Not"]);
        for (r, flag) in self.flags.iter().enumerate() {
            table.add_row(vec![(r + 1).to_string(), flag.to_string()]);
        }
        write!(f, "{table}")
    }
}

/// A distinct row of a play together with how many rolls produced it.
/// The faces keep the dice order, so `(1, 2)` and `(2, 1)` are different combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<T> {
    pub faces: Vec<T>,
    pub count: usize,
}

/// Counts every distinct row, most frequent first.
/// Equal counts keep the order in which the combinations first appeared.
pub(crate) fn count_combinations<T: Face>(table: &PlayTable<T>) -> Vec<Combination<T>> {
    let mut counts: HashMap<&[T], (usize, usize)> = HashMap::new();
    for (i, row) in table.rows().iter().enumerate() {
        counts.entry(row.as_slice()).or_insert((0, i)).0 += 1;
    }

    let mut combinations: Vec<(usize, Combination<T>)> = counts
        .into_iter()
        .map(|(faces, (count, first_seen))| {
            let combination = Combination {
                faces: faces.to_vec(),
                count,
            };
            (first_seen, combination)
        })
        .collect();
    combinations.sort_by(|(seen_a, a), (seen_b, b)| b.count.cmp(&a.count).then(seen_a.cmp(seen_b)));

    combinations.into_iter().map(|(_, c)| c).collect()
}

impl<T: Face> Display for Combination<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", to_notations(&self.faces), self.count)
    }
}

/// How many times each face of the first die shows up in every roll.
/// Columns follow the first die's face order.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceCounts<T> {
    faces: Vec<T>,
    counts: Vec<Vec<usize>>,
}

impl<T: Face> FaceCounts<T> {
    pub(crate) fn new(faces: &[T], table: &PlayTable<T>) -> Self {
        let counts = table
            .rows()
            .iter()
            .map(|row| {
                faces
                    .iter()
                    .map(|face| row.iter().filter(|value| *value == face).count())
                    .collect()
            })
            .collect();

        Self {
            faces: faces.to_vec(),
            counts,
        }
    }

    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.counts
    }

    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        roll.checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .map(Vec::as_slice)
    }

    pub fn count(&self, roll: usize, face: &T) -> Option<usize> {
        let column = self.faces.iter().position(|f| f == face)?;
        self.row(roll)?.get(column).copied()
    }

    /// Sum of each row, equal to the number of dice when every die shares
    /// the first die's faces.
    pub fn row_sums(&self) -> Vec<usize> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }
}

impl<T: Face> Display for FaceCounts<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = std::iter::once("Roll Number".to_string()).chain(to_cells(&self.faces));
        let mut table = new_table(headers);
        for (r, row) in self.counts.iter().enumerate() {
            let mut cells = vec![(r + 1).to_string()];
            cells.extend(to_cells(row));
            table.add_row(cells);
        }
        write!(f, "{table}")
    }
}
