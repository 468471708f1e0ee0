//! Lecture du format texte d'un labyrinthe.
//!
//! ```text
//! 2 2
//! 4 2
//! 7 1
//! ```
//!
//! La première ligne donne le nombre de lignes et de colonnes, chaque ligne
//! suivante contient un chiffre de `0` à `7` par cellule (espaces facultatifs).

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::{MazeError, MazeResult};
use crate::maze::map::MazeMap;
use crate::MAX_SYMBOL;

/// Charge et analyse le fichier `path`.
pub fn load_map(path: impl AsRef<Path>) -> MazeResult<MazeMap> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MazeError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => MazeError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!("Loaded {} bytes from {}", text.len(), path.display());
    parse_map(&text)
}

/// Analyse le contenu texte d'un labyrinthe.
///
/// Les lignes vides sont ignorées, donc un retour à la ligne final ne
/// compte pas comme une ligne du labyrinthe.
pub fn parse_map(text: &str) -> MazeResult<MazeMap> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| MazeError::MalformedHeader("missing header line".to_string()))?;
    let (rows, cols) = parse_header(header)?;

    let mut raw = Vec::with_capacity(rows.saturating_mul(cols).min(1 << 20));
    let mut found_rows = 0;
    for line in lines {
        found_rows += 1;
        if found_rows > rows {
            continue;
        }
        let mut found_cols = 0;
        for symbol in line.chars().filter(|c| !c.is_whitespace()) {
            found_cols += 1;
            raw.push(parse_symbol(symbol, found_rows, found_cols)?);
        }
        if found_cols != cols {
            return Err(MazeError::ColumnCountMismatch {
                row: found_rows,
                expected: cols,
                found: found_cols,
            });
        }
    }
    if found_rows != rows {
        return Err(MazeError::RowCountMismatch {
            expected: rows,
            found: found_rows,
        });
    }

    MazeMap::new(rows, cols, &raw)
}

fn parse_header(line: &str) -> MazeResult<(usize, usize)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols] = tokens.as_slice() else {
        return Err(MazeError::MalformedHeader(format!(
            "expected `rows cols`, got {line:?}"
        )));
    };
    let rows = parse_dimension(rows)?;
    let cols = parse_dimension(cols)?;
    Ok((rows, cols))
}

fn parse_dimension(token: &str) -> MazeResult<usize> {
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(MazeError::MalformedHeader(format!(
            "{token:?} is not a positive integer"
        ))),
    }
}

fn parse_symbol(symbol: char, row: usize, col: usize) -> MazeResult<u8> {
    match symbol.to_digit(10) {
        Some(d) if d <= u32::from(MAX_SYMBOL) => Ok(d as u8),
        _ => Err(MazeError::InvalidSymbol { row, col, symbol }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::cell::Position;
    use crate::maze::walls::Side;

    #[test]
    fn test_parse_spaced_and_packed_rows() {
        let spaced = parse_map("2 2\n4 2\n7 1\n").unwrap();
        let packed = parse_map("2 2\n42\n71").unwrap();
        assert_eq!(spaced, packed);
        assert!(!spaced.is_walled(Position::new(2, 2), Side::Right).unwrap());
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let map = parse_map("1 2\n4 6\n\n\n").unwrap();
        assert_eq!((map.rows(), map.cols()), (1, 2));
    }

    #[test]
    fn test_missing_row() {
        let err = parse_map("3 3\n777\n777\n").unwrap_err();
        assert!(matches!(
            err,
            MazeError::RowCountMismatch {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_extra_row() {
        let err = parse_map("1 3\n777\n777\n").unwrap_err();
        assert!(matches!(
            err,
            MazeError::RowCountMismatch {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn test_short_row() {
        let err = parse_map("2 3\n7 7 7\n7 7\n").unwrap_err();
        assert!(matches!(
            err,
            MazeError::ColumnCountMismatch {
                row: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_invalid_symbols() {
        assert!(matches!(
            parse_map("1 2\n7 8\n").unwrap_err(),
            MazeError::InvalidSymbol { symbol: '8', col: 2, .. }
        ));
        assert!(matches!(
            parse_map("1 2\n7 x\n").unwrap_err(),
            MazeError::InvalidSymbol { symbol: 'x', .. }
        ));
    }

    #[test]
    fn test_bad_headers() {
        for text in ["", "\n\n", "3\n777", "3 3 3\n", "0 2\n", "a b\n", "-1 2\n"] {
            assert!(
                matches!(parse_map(text), Err(MazeError::MalformedHeader(_))),
                "header of {text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_map("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, MazeError::FileNotFound { .. }));
    }
}
