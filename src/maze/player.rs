use log::debug;

use crate::error::MazeResult;
use crate::maze::cell::Position;
use crate::maze::direction::{candidate_sides, Hand};
use crate::maze::map::MazeMap;
use crate::maze::walls::Side;

/// Résultat d'un pas du marcheur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Le marcheur est passé dans une cellule voisine.
    Moved(Position),
    /// Le marcheur est sorti du labyrinthe par ce côté.
    Exited(Side),
    /// Cul-de-sac : aucun côté praticable.
    Stalled,
}

/// État du marcheur : sa cellule, le côté par lequel il y est entré et
/// la main qu'il garde contre le mur.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Position,
    pub entered_from: Side,
    pub hand: Hand,
    /// Cellules visitées dans l'ordre, la cellule de départ en tête.
    pub path: Vec<Position>,
}

impl Player {
    pub fn new(position: Position, entered_from: Side, hand: Hand) -> Self {
        Self {
            position,
            entered_from,
            hand,
            path: vec![position],
        }
    }

    /// Premier côté ouvert parmi les candidats ; si `turn_back` est vrai,
    /// un cul-de-sac renvoie le marcheur par où il est venu.
    fn next_side(&self, map: &MazeMap, turn_back: bool) -> MazeResult<Option<Side>> {
        let walls = map.walls_at(self.position)?;
        let candidates = candidate_sides(self.position.orientation(), self.entered_from, self.hand);

        if let Some(side) = candidates.into_iter().find(|&s| !walls.is_walled(s)) {
            return Ok(Some(side));
        }
        if turn_back && !walls.is_walled(self.entered_from) {
            return Ok(Some(self.entered_from));
        }
        Ok(None)
    }

    /// Avance d'une cellule en suivant le mur.
    pub fn step(&mut self, map: &MazeMap, turn_back: bool) -> MazeResult<Move> {
        let Some(side) = self.next_side(map, turn_back)? else {
            debug!("{} stalled at {}", self.hand, self.position);
            return Ok(Move::Stalled);
        };

        match map.neighbor(self.position, side)? {
            Some(next) => {
                debug!("{} -> {} through {}", self.position, next, side);
                self.position = next;
                self.entered_from = side.arrival();
                self.path.push(next);
                Ok(Move::Moved(next))
            }
            None => {
                debug!("{} exits through {}", self.position, side);
                Ok(Move::Exited(side))
            }
        }
    }
}
