//! Erreurs du labyrinthe triangulaire.

use std::path::PathBuf;
use thiserror::Error;

use crate::maze::cell::Position;
use crate::maze::walls::Side;

/// Toutes les erreurs que peuvent remonter le chargement, la validation
/// et le parcours d'un labyrinthe.
#[derive(Debug, Error)]
pub enum MazeError {
    /// Le fichier demandé n'existe pas.
    #[error("Error opening file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Toute autre erreur d'entrée/sortie.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Première ligne absente ou qui ne contient pas exactement deux entiers positifs.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Header declares {expected} rows but {found} were found")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("Row {row} has {found} cells, header declares {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Symbole hors de `0..=7` (ou qui n'est pas un chiffre).
    #[error("Invalid symbol {symbol:?} at {row},{col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },

    /// Deux cellules voisines ne sont pas d'accord sur le mur qu'elles partagent.
    #[error("Cells {first} and {second} disagree on their shared {side} border")]
    StructuralInconsistency {
        first: Position,
        second: Position,
        side: Side,
    },

    #[error("Not possible to enter maze at {position}")]
    NoBoundaryOpening { position: Position },

    #[error("Position {row},{col} is outside the {rows}x{cols} maze")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl MazeError {
    /// Vrai pour les erreurs qui rendent la définition du labyrinthe invalide
    /// (syntaxe, forme ou murs partagés incohérents).
    pub fn is_invalid_maze(&self) -> bool {
        matches!(
            self,
            MazeError::MalformedHeader(_)
                | MazeError::RowCountMismatch { .. }
                | MazeError::ColumnCountMismatch { .. }
                | MazeError::InvalidSymbol { .. }
                | MazeError::StructuralInconsistency { .. }
        )
    }
}

/// Résultat des opérations sur le labyrinthe.
pub type MazeResult<T> = std::result::Result<T, MazeError>;
