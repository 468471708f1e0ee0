//! Parcours du labyrinthe en gardant une main contre le mur.
//!
//! Le marcheur part d'une cellule du bord, entre par un côté ouvert vers
//! l'extérieur et applique la table de [`candidate_sides`] jusqu'à sortir
//! ou se bloquer dans un cul-de-sac.
//!
//! Sur un labyrinthe qui contient une boucle intérieure, le suivi de mur
//! peut tourner indéfiniment ; `FollowerConfig` fournit donc une limite de
//! pas et une détection de cycle.
//!
//! [`candidate_sides`]: crate::maze::direction::candidate_sides

use std::collections::HashSet;

use log::{info, warn};
use serde::Serialize;

use crate::error::MazeResult;
use crate::maze::cell::Position;
use crate::maze::direction::Hand;
use crate::maze::map::MazeMap;
use crate::maze::player::{Move, Player};
use crate::maze::validator::entry_side;
use crate::maze::walls::Side;
use crate::DEFAULT_DETECT_CYCLES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowerConfig {
    /// Nombre maximal de déplacements, `None` pour aucune limite.
    pub max_steps: Option<usize>,
    /// Arrête le parcours dès qu'un état (cellule, côté d'entrée) se répète.
    pub detect_cycles: bool,
    /// Dans un cul-de-sac, repartir par le côté d'entrée au lieu de s'arrêter.
    pub turn_back_at_dead_end: bool,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            detect_cycles: DEFAULT_DETECT_CYCLES,
            turn_back_at_dead_end: false,
        }
    }
}

impl FollowerConfig {
    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_cycle_detection(mut self, detect_cycles: bool) -> Self {
        self.detect_cycles = detect_cycles;
        self
    }

    pub fn with_turn_back(mut self, turn_back: bool) -> Self {
        self.turn_back_at_dead_end = turn_back;
        self
    }
}

/// Fin du parcours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Sortie du labyrinthe par le côté `through` de la dernière cellule.
    Exited { through: Side },
    /// Cul-de-sac, le marcheur ne bouge plus.
    Stalled,
    StepLimitReached { limit: usize },
    /// L'état (cellule, côté d'entrée) `at` a déjà été visité.
    CycleDetected { at: Position },
}

impl Outcome {
    /// Vrai si le parcours s'est terminé de lui-même (sortie ou cul-de-sac).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Exited { .. } | Outcome::Stalled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    pub hand: Hand,
    pub start: Position,
    /// Côté du bord par lequel le marcheur est entré.
    pub entry: Side,
    pub path: Vec<Position>,
    pub outcome: Outcome,
}

pub struct WallFollower<'a> {
    map: &'a MazeMap,
    start: Position,
    hand: Hand,
    config: FollowerConfig,
}

impl<'a> WallFollower<'a> {
    pub fn new(map: &'a MazeMap, start: Position, hand: Hand) -> Self {
        Self {
            map,
            start,
            hand,
            config: FollowerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FollowerConfig) -> Self {
        self.config = config;
        self
    }

    /// Parcourt le labyrinthe depuis `start`.
    ///
    /// Échoue avec `NoBoundaryOpening` si on ne peut pas entrer par cette
    /// cellule, auquel cas aucun chemin n'est produit.
    pub fn traverse(&self) -> MazeResult<Traversal> {
        let entry = entry_side(self.map, self.start)?;
        info!(
            "Starting {}-hand walk at {} through its {} side",
            self.hand, self.start, entry
        );

        let mut player = Player::new(self.start, entry, self.hand);
        let mut seen = HashSet::new();
        if self.config.detect_cycles {
            seen.insert((player.position, player.entered_from));
        }

        let mut steps = 0;
        let outcome = loop {
            if let Some(limit) = self.config.max_steps {
                if steps >= limit {
                    warn!("Step limit of {limit} reached at {}", player.position);
                    break Outcome::StepLimitReached { limit };
                }
            }

            match player.step(self.map, self.config.turn_back_at_dead_end)? {
                Move::Moved(next) => {
                    steps += 1;
                    if self.config.detect_cycles && !seen.insert((next, player.entered_from)) {
                        warn!("Walk loops forever from {next}");
                        break Outcome::CycleDetected { at: next };
                    }
                }
                Move::Exited(through) => break Outcome::Exited { through },
                Move::Stalled => break Outcome::Stalled,
            }
        };

        info!("Walk finished after {} cells: {:?}", player.path.len(), outcome);
        Ok(Traversal {
            hand: self.hand,
            start: self.start,
            entry,
            path: player.path,
            outcome,
        })
    }
}
