use std::fmt::{self, Display};
use std::str::FromStr;

use crate::die::Face;
use crate::error::Error;
use crate::format::{new_table, to_cells};

/// Layout used when showing the results of a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableForm {
    /// One row per roll, one column per die.
    #[default]
    Wide,
    /// One row per (roll, die) pair with a single `Value` column.
    Narrow,
}

impl FromStr for TableForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wide" => Ok(TableForm::Wide),
            "narrow" => Ok(TableForm::Narrow),
            other => Err(Error::InvalidArgument(format!(
                "choose between 'wide' and 'narrow' for the table form, got '{other}'"
            ))),
        }
    }
}

/// Outcomes of a single play, rows are rolls and columns are dice.
/// Roll and die numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayTable<T> {
    rows: Vec<Vec<T>>,
    num_dice: usize,
}

/// One cell of a [PlayTable] in long format.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrowRow<T> {
    pub roll: usize,
    pub die: usize,
    pub value: T,
}

impl<T: Face> PlayTable<T> {
    /// Builds the table from each die's rolls (one `Vec` per die, all the same length).
    pub(crate) fn from_columns(columns: Vec<Vec<T>>) -> Self {
        let num_dice = columns.len();
        let num_rolls = columns.first().map_or(0, Vec::len);

        let mut rows: Vec<Vec<T>> = (0..num_rolls)
            .map(|_| Vec::with_capacity(num_dice))
            .collect();
        for column in columns {
            for (row, value) in rows.iter_mut().zip(column) {
                row.push(value);
            }
        }

        Self { rows, num_dice }
    }

    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }
    pub fn num_dice(&self) -> usize {
        self.num_dice
    }
    /// `(rolls, dice)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rolls(), self.num_dice)
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn row(&self, roll: usize) -> Option<&[T]> {
        roll.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    pub fn get(&self, roll: usize, die: usize) -> Option<&T> {
        self.row(roll)?.get(die.checked_sub(1)?)
    }

    /// Every cell as its own row, ordered by roll and then by die.
    pub fn narrow(&self) -> NarrowTable<T> {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter().enumerate().map(move |(d, value)| NarrowRow {
                    roll: r + 1,
                    die: d + 1,
                    value: value.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

impl<T: Face> Display for PlayTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = std::iter::once("Roll Number".to_string())
            .chain((1..=self.num_dice).map(|d| d.to_string()));
        let mut table = new_table(headers);
        for (r, row) in self.rows.iter().enumerate() {
            let mut cells = vec![(r + 1).to_string()];
            cells.extend(to_cells(row));
            table.add_row(cells);
        }
        write!(f, "{table}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NarrowTable<T> {
    rows: Vec<NarrowRow<T>>,
}

impl<T> NarrowTable<T> {
    pub fn rows(&self) -> &[NarrowRow<T>] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Face> Display for NarrowTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(["Roll Number", "Die", "Value"]);
        for row in &self.rows {
            table.add_row(vec![
                row.roll.to_string(),
                row.die.to_string(),
                row.value.to_string(),
            ]);
        }
        write!(f, "{table}")
    }
}

/// What [Game::show](crate::Game::show) returns, depending on the requested form.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayView<T> {
    Wide(PlayTable<T>),
    Narrow(NarrowTable<T>),
}

impl<T> PlayView<T> {
    /// Number of rows in the view.
    pub fn len(&self) -> usize {
        match self {
            PlayView::Wide(table) => table.rows.len(),
            PlayView::Narrow(table) => table.rows.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Face> Display for PlayView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayView::Wide(table) => write!(f, "{table}"),
            PlayView::Narrow(table) => write!(f, "{table}"),
        }
    }
}
