//! Computer move selection.

use crate::board::Board;
use crate::cell::Cell;
use rand::Rng;

/// Picks a cell uniformly at random from the empty cells.
///
/// Sampling from the explicit empty-cell set rather than rejecting
/// occupied draws guarantees termination and a uniform distribution over
/// legal moves. Returns `None` iff the board is full.
pub fn random_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.random_range(0..empty.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_only_empty_cells_selected() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);

        // Occupy all but one cell; the sampler must find the last one.
        for cell in &Cell::ALL[..8] {
            board.place(*cell, Side::Player).expect("empty cell");
        }
        for _ in 0..50 {
            assert_eq!(random_cell(&board, &mut rng), Some(Cell::BottomRight));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);
        for cell in Cell::ALL {
            board.place(cell, Side::Computer).expect("empty cell");
        }
        assert_eq!(random_cell(&board, &mut rng), None);
    }

    #[test]
    fn test_every_empty_cell_is_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_cell(&board, &mut rng).expect("board not full"));
        }
        assert_eq!(seen.len(), 9);
    }
}
