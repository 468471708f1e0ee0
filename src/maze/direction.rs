use std::fmt;

use serde::Serialize;

use crate::maze::cell::Orientation;
use crate::maze::walls::Side;

/// Main gardée contre le mur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Right,
    Left,
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::Right => f.write_str("right"),
            Hand::Left => f.write_str("left"),
        }
    }
}

/// Les deux côtés à essayer, dans l'ordre, quand on est entré dans une
/// cellule `orientation` par `entered_from`.
///
/// On tourne d'abord vers la main choisie, puis on tente l'autre côté.
/// Le côté d'entrée n'est jamais candidat.
pub fn candidate_sides(orientation: Orientation, entered_from: Side, hand: Hand) -> [Side; 2] {
    use Hand::{Left as LH, Right as RH};
    use Orientation::{Down, Up};
    use Side::{Left, Right, Third};

    match (orientation, entered_from, hand) {
        // ▼ : le troisième bord est en haut
        (Down, Left, RH) => [Right, Third],
        (Down, Right, RH) => [Third, Left],
        (Down, Third, RH) => [Left, Right],
        (Down, Left, LH) => [Third, Right],
        (Down, Right, LH) => [Left, Third],
        (Down, Third, LH) => [Right, Left],

        // ▲ : le troisième bord est en bas
        (Up, Left, RH) => [Third, Right],
        (Up, Right, RH) => [Left, Third],
        (Up, Third, RH) => [Right, Left],
        (Up, Left, LH) => [Right, Third],
        (Up, Right, LH) => [Third, Left],
        (Up, Third, LH) => [Left, Right],
    }
}
