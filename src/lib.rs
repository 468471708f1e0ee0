use std::path::Path;

use log::info;

pub mod error;
pub mod maze;

pub use error::{MazeError, MazeResult};
pub use maze::cell::{Orientation, Position};
pub use maze::direction::Hand;
pub use maze::follower::{FollowerConfig, Outcome, Traversal, WallFollower};
pub use maze::map::MazeMap;
pub use maze::validator::{check_shared_borders, entry_possible, entry_side, test_map, Validity};
pub use maze::walls::{Side, Walls};

/// Plus grande valeur d'une cellule (3 bits).
pub const MAX_SYMBOL: u8 = 7;

/// Détection de cycle active par défaut pendant un parcours.
pub const DEFAULT_DETECT_CYCLES: bool = true;

// -----------------------------------------------------------------------------
// Solve
// -----------------------------------------------------------------------------

/// Charge `path`, vérifie le labyrinthe puis le parcourt depuis `start`.
///
/// Un labyrinthe invalide ou une entrée impossible arrêtent l'opération
/// avant le premier pas.
pub fn solve(
    path: impl AsRef<Path>,
    start: Position,
    hand: Hand,
    config: FollowerConfig,
) -> MazeResult<Traversal> {
    let path = path.as_ref();
    let map = maze::validator::validate_file(path)?;
    info!(
        "Solving {} ({}x{}) from {} with the {} hand",
        path.display(),
        map.rows(),
        map.cols(),
        start,
        hand
    );
    WallFollower::new(&map, start, hand)
        .with_config(config)
        .traverse()
}

/// Comme [`solve`], sur le contenu texte d'un labyrinthe.
pub fn solve_str(
    text: &str,
    start: Position,
    hand: Hand,
    config: FollowerConfig,
) -> MazeResult<Traversal> {
    let map = maze::validator::validate_str(text)?;
    WallFollower::new(&map, start, hand)
        .with_config(config)
        .traverse()
}

// -----------------------------------------------------------------------------
// TEST
// -----------------------------------------------------------------------------
#[test]
fn test_solve_str_rejects_inconsistent_maze() {
    let err = solve_str(
        "1 2\n4 7\n",
        Position::new(1, 1),
        Hand::Right,
        FollowerConfig::default(),
    )
    .unwrap_err();
    assert!(err.is_invalid_maze());
}

#[test]
fn test_solve_str_both_hands() {
    let text = "2 2\n4 2\n7 1\n";
    let start = Position::new(1, 1);
    let right = solve_str(text, start, Hand::Right, FollowerConfig::default()).unwrap();
    let left = solve_str(text, start, Hand::Left, FollowerConfig::default()).unwrap();
    assert_eq!(right.path, left.path);
    assert!(right.outcome.is_terminal());
}
