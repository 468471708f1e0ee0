use std::fmt;

use serde::Serialize;

use crate::error::{MazeError, MazeResult};
use crate::MAX_SYMBOL;

/// Un des trois côtés d'une cellule triangulaire.
///
/// `Third` est le bord horizontal : en haut pour une cellule ▼,
/// en bas pour une cellule ▲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Third,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Left, Side::Right, Side::Third];

    /// Position du bit de ce côté dans l'encodage sur 3 bits.
    pub fn bit(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Third => 2,
        }
    }

    /// Côté par lequel on arrive dans la cellule voisine quand on sort par `self`.
    pub fn arrival(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Third => Side::Third,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Third => "third",
        };
        f.write_str(name)
    }
}

/// Les 3 murs d'une cellule, empaquetés sur 3 bits
/// (bit 0 : gauche, bit 1 : droite, bit 2 : troisième bord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Walls(u8);

impl Walls {
    pub const CLOSED: Walls = Walls(0b111);

    /// Construit les murs depuis leur encodage. `row` et `col` ne servent
    /// qu'au message d'erreur.
    pub fn from_bits(bits: u8, row: usize, col: usize) -> MazeResult<Self> {
        if bits > MAX_SYMBOL {
            return Err(MazeError::InvalidSymbol {
                row,
                col,
                symbol: char::from_digit(u32::from(bits), 36).unwrap_or('?'),
            });
        }
        Ok(Walls(bits))
    }

    pub fn is_walled(self, side: Side) -> bool {
        (self.0 >> side.bit()) & 1 == 1
    }
}
