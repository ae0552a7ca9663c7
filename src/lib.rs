// vim: set ai et ts=4 sw=4 sts=4:
//! Nonogram solving and generation for turning bitmaps (QR codes) into
//! puzzles with a unique, derivable solution.

pub mod util;
pub mod grid;
pub mod row;
pub mod puzzle;
pub mod generate;

pub use grid::{Grid, SquareStatus, StatusCounts, Error};
pub use puzzle::{Puzzle, extract_clues};
pub use puzzle::solver::{Solver, MAX_ROUNDS};
pub use row::permute::PermutationCache;
pub use generate::{GeneratedPuzzle, generate_from_bitmap};

// builds a fresh all-unknown board from the clues and propagates to a fixed
// point. a board that still has unknown squares afterwards is a normal
// result: those squares are simply not forced by the clues.
pub fn solve(row_clues: &[Vec<usize>], col_clues: &[Vec<usize>]) -> Result<Puzzle, Error> {
    let puzzle = Puzzle::new(row_clues, col_clues)?;
    let mut solver = Solver::new(puzzle);
    solver.solve()?;
    Ok(solver.puzzle)
}
