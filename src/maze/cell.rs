use std::fmt;

use serde::Serialize;

use crate::maze::walls::Side;

/// Orientation d'une cellule triangulaire.
///
/// Elle alterne en damier et se déduit uniquement de la parité de
/// `ligne + colonne`, elle n'est jamais stockée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// ▼ : le troisième bord est en haut.
    Down,
    /// ▲ : le troisième bord est en bas.
    Up,
}

impl Orientation {
    /// Orientation de la cellule `(row, col)` (indices à partir de 1).
    pub fn of(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            Orientation::Down
        } else {
            Orientation::Up
        }
    }

    /// Décalage `(dr, dc)` vers la cellule qui partage le côté `side`.
    pub fn delta(self, side: Side) -> (isize, isize) {
        match (self, side) {
            (_, Side::Left) => (0, -1),
            (_, Side::Right) => (0, 1),
            (Orientation::Down, Side::Third) => (-1, 0),
            (Orientation::Up, Side::Third) => (1, 0),
        }
    }
}

/// Position d'une cellule, indices à partir de 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn orientation(self) -> Orientation {
        Orientation::of(self.row, self.col)
    }

    /// Applique un décalage ; `None` si on passe sous la ligne/colonne 1.
    pub fn offset(self, (dr, dc): (isize, isize)) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row == 0 || col == 0 {
            return None;
        }
        Some(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
