use ndarray::Array2;

/// Two-dimensional cell coordinates `(row, col)`, zero-based.
pub type Coord2 = (usize, usize);

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.dim())
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (drow, dcol) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(drow)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dcol)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up-to-8 in-bounds neighbors of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: usize,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_counts_depend_on_position() {
        let grid: Array2<u8> = Array2::default((3, 3));

        assert_eq!(grid.iter_neighbors((1, 1)).count(), 8);
        assert_eq!(grid.iter_neighbors((0, 0)).count(), 3);
        assert_eq!(grid.iter_neighbors((0, 1)).count(), 5);
        assert_eq!(grid.iter_neighbors((2, 2)).count(), 3);
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid: Array2<u8> = Array2::default((2, 4));

        for pos in grid.iter_neighbors((0, 3)) {
            assert!(pos.0 < 2 && pos.1 < 4);
        }
    }
}
