//! Validation d'un labyrinthe : cohérence des murs partagés et possibilité
//! d'entrer depuis le bord.

use std::path::Path;

use log::{debug, info};

use crate::error::{MazeError, MazeResult};
use crate::maze::cell::{Orientation, Position};
use crate::maze::loader::{load_map, parse_map};
use crate::maze::map::MazeMap;
use crate::maze::walls::Side;

/// Verdict de `--test`.
#[derive(Debug)]
pub enum Validity {
    Valid,
    Invalid(MazeError),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Vérifie que deux cellules voisines décrivent de la même façon le mur
/// qu'elles partagent. Renvoie la première incohérence trouvée.
pub fn check_shared_borders(map: &MazeMap) -> MazeResult<()> {
    for pos in map.positions() {
        let walls = map.walls_at(pos)?;

        if let Some(right) = map.neighbor(pos, Side::Right)? {
            if walls.is_walled(Side::Right) != map.is_walled(right, Side::Left)? {
                return Err(MazeError::StructuralInconsistency {
                    first: pos,
                    second: right,
                    side: Side::Right,
                });
            }
        }

        // Chaque paire verticale ▲/▼ n'est comparée qu'une fois, depuis le ▲.
        if pos.orientation() == Orientation::Up {
            if let Some(below) = map.neighbor(pos, Side::Third)? {
                if walls.is_walled(Side::Third) != map.is_walled(below, Side::Third)? {
                    return Err(MazeError::StructuralInconsistency {
                        first: pos,
                        second: below,
                        side: Side::Third,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Charge puis valide complètement le texte d'un labyrinthe.
pub fn validate_str(text: &str) -> MazeResult<MazeMap> {
    let map = parse_map(text)?;
    check_shared_borders(&map)?;
    Ok(map)
}

/// Charge puis valide complètement le fichier `path`.
pub fn validate_file(path: impl AsRef<Path>) -> MazeResult<MazeMap> {
    let map = load_map(path)?;
    check_shared_borders(&map)?;
    Ok(map)
}

/// Teste un fichier. Seules les erreurs de lecture sont renvoyées en `Err`,
/// un labyrinthe mal formé donne `Validity::Invalid`.
pub fn test_map(path: impl AsRef<Path>) -> MazeResult<Validity> {
    into_validity(validate_file(path))
}

pub fn test_map_str(text: &str) -> MazeResult<Validity> {
    into_validity(validate_str(text))
}

fn into_validity(result: MazeResult<MazeMap>) -> MazeResult<Validity> {
    match result {
        Ok(_) => Ok(Validity::Valid),
        Err(e) if e.is_invalid_maze() => {
            info!("Maze rejected: {e}");
            Ok(Validity::Invalid(e))
        }
        Err(e) => Err(e),
    }
}

/// Côté par lequel le marcheur entre dans `start` depuis l'extérieur.
///
/// Seuls les bords qui donnent réellement sur l'extérieur comptent ; le
/// premier ouvert, dans l'ordre gauche, droite, troisième bord, est choisi.
pub fn entry_side(map: &MazeMap, start: Position) -> MazeResult<Side> {
    let walls = map.walls_at(start)?;
    let boundary = map.boundary_sides(start)?;
    debug!("Boundary sides of {start}: {boundary:?}");

    boundary
        .into_iter()
        .find(|&side| !walls.is_walled(side))
        .ok_or(MazeError::NoBoundaryOpening { position: start })
}

pub fn entry_possible(map: &MazeMap, start: Position) -> bool {
    entry_side(map, start).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_maze() {
        let map = parse_map("2 2\n4 2\n7 1\n").unwrap();
        assert!(check_shared_borders(&map).is_ok());
    }

    #[test]
    fn test_horizontal_mismatch() {
        // (1,1) ouvre sa droite, (1,2) ferme sa gauche
        let map = parse_map("1 2\n4 7\n").unwrap();
        assert!(matches!(
            check_shared_borders(&map),
            Err(MazeError::StructuralInconsistency {
                side: Side::Right,
                ..
            })
        ));
    }

    #[test]
    fn test_vertical_mismatch() {
        // (1,2) est un ▲ ouvert en bas, (2,2) un ▼ fermé en haut
        let map = parse_map("2 2\n4 2\n7 5\n").unwrap();
        let err = check_shared_borders(&map).unwrap_err();
        match err {
            MazeError::StructuralInconsistency {
                first,
                second,
                side,
            } => {
                assert_eq!(first, Position::new(1, 2));
                assert_eq!(second, Position::new(2, 2));
                assert_eq!(side, Side::Third);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_outer_edges_are_free() {
        // Les bords extérieurs n'ont pas de voisin à qui se comparer.
        let map = parse_map("2 2\n0 0\n0 0\n").unwrap();
        assert!(check_shared_borders(&map).is_ok());
    }

    #[test]
    fn test_map_str_verdicts() {
        assert!(test_map_str("2 2\n4 2\n7 1\n").unwrap().is_valid());
        assert!(!test_map_str("3 3\n777\n777\n").unwrap().is_valid());
        assert!(!test_map_str("1 2\n4 7\n").unwrap().is_valid());
        assert!(!test_map_str("1 2\n7 9\n").unwrap().is_valid());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            test_map("no/such/maze.txt"),
            Err(MazeError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_entry_side() {
        let map = parse_map("2 2\n4 2\n7 1\n").unwrap();
        assert_eq!(entry_side(&map, Position::new(1, 1)).unwrap(), Side::Left);
        assert_eq!(entry_side(&map, Position::new(2, 2)).unwrap(), Side::Right);
        assert!(!entry_possible(&map, Position::new(2, 1)));
        // (1,2) est un ▲ : sa gauche donne sur (1,1), son bord du bas sur (2,2)
        // mais sa droite est fermée
        assert!(!entry_possible(&map, Position::new(1, 2)));
    }

    #[test]
    fn test_entry_through_third_edge() {
        // (1,1) ▼ fermé à gauche mais ouvert en haut
        let map = parse_map("1 2\n3 7\n").unwrap();
        assert_eq!(entry_side(&map, Position::new(1, 1)).unwrap(), Side::Third);
    }

    #[test]
    fn test_interior_start_rejected() {
        let map = parse_map("3 3\n000\n000\n000\n").unwrap();
        assert!(matches!(
            entry_side(&map, Position::new(2, 2)),
            Err(MazeError::NoBoundaryOpening { .. })
        ));
    }

    #[test]
    fn test_entry_out_of_bounds() {
        let map = parse_map("2 2\n4 2\n7 1\n").unwrap();
        assert!(matches!(
            entry_side(&map, Position::new(5, 1)),
            Err(MazeError::OutOfBounds { .. })
        ));
    }
}
