use crate::error::{MazeError, MazeResult};
use crate::maze::cell::{Orientation, Position};
use crate::maze::walls::{Side, Walls};

/// Carte du labyrinthe : `rows x cols` cellules triangulaires.
///
/// L'API publique est indexée à partir de 1, le stockage (ligne par ligne)
/// à partir de 0. La carte n'est plus modifiée après sa construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeMap {
    rows: usize,
    cols: usize,
    cells: Vec<Walls>,
}

impl MazeMap {
    /// Construit la carte à partir des valeurs brutes, lues ligne par ligne.
    pub fn new(rows: usize, cols: usize, raw: &[u8]) -> MazeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::MalformedHeader(format!(
                "dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            MazeError::MalformedHeader(format!("dimensions {rows}x{cols} are too large"))
        })?;
        if raw.len() != len {
            let found = raw.len() / cols;
            if found != rows {
                return Err(MazeError::RowCountMismatch {
                    expected: rows,
                    found,
                });
            }
            return Err(MazeError::ColumnCountMismatch {
                row: found + 1,
                expected: cols,
                found: raw.len() % cols,
            });
        }

        let cells = raw
            .iter()
            .enumerate()
            .map(|(i, &bits)| Walls::from_bits(bits, i / cols + 1, i % cols + 1))
            .collect::<MazeResult<Vec<_>>>()?;

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        (1..=self.rows).contains(&pos.row) && (1..=self.cols).contains(&pos.col)
    }

    fn index(&self, pos: Position) -> MazeResult<usize> {
        if !self.contains(pos) {
            return Err(MazeError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((pos.row - 1) * self.cols + (pos.col - 1))
    }

    pub fn walls_at(&self, pos: Position) -> MazeResult<Walls> {
        let index = self.index(pos)?;
        Ok(self.cells[index])
    }

    pub fn is_walled(&self, pos: Position, side: Side) -> MazeResult<bool> {
        Ok(self.walls_at(pos)?.is_walled(side))
    }

    pub fn orientation(&self, pos: Position) -> MazeResult<Orientation> {
        self.index(pos)?;
        Ok(pos.orientation())
    }

    /// Cellule de l'autre côté de `side`, ou `None` si ce côté donne sur
    /// l'extérieur du labyrinthe.
    pub fn neighbor(&self, pos: Position, side: Side) -> MazeResult<Option<Position>> {
        let orientation = self.orientation(pos)?;
        Ok(pos
            .offset(orientation.delta(side))
            .filter(|&next| self.contains(next)))
    }

    /// Côtés de la cellule qui donnent sur l'extérieur, dans l'ordre
    /// gauche, droite, troisième bord.
    pub fn boundary_sides(&self, pos: Position) -> MazeResult<Vec<Side>> {
        let mut sides = Vec::with_capacity(3);
        for side in Side::ALL {
            if self.neighbor(pos, side)?.is_none() {
                sides.push(side);
            }
        }
        Ok(sides)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (1..=self.rows).flat_map(move |row| (1..=self.cols).map(move |col| Position::new(row, col)))
    }
}
