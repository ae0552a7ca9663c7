// vim: set ai et ts=4 sts=4 sw=4:
use std::rc::Rc;
use std::cell::RefCell;
use log::{debug, info};

use super::Puzzle;
use super::super::grid::{Grid, Error, SquareStatus::Unknown};
use super::super::util::Direction::*;
use super::super::row::permute::PermutationCache;

// hard cap on propagation rounds; hitting it is a normal (partial) result
pub const MAX_ROUNDS: usize = 100;

#[derive(Debug)]
pub struct Solver {
    pub puzzle:     Puzzle,
    pub cache:      Rc<RefCell<PermutationCache>>,
    pub iterations: usize,
    row_dirty:      Vec<bool>,
    col_dirty:      Vec<bool>,
}

impl Solver {
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_cache(puzzle, Rc::new(RefCell::new(PermutationCache::new())))
    }
    // callers that solve repeatedly (the generation pipeline) share one cache
    // across all of their solve calls
    pub fn with_cache(puzzle: Puzzle, cache: Rc<RefCell<PermutationCache>>) -> Self {
        let num_rows = puzzle.height();
        let num_cols = puzzle.width();
        Solver {
            puzzle:     puzzle,
            cache:      cache,
            iterations: 0,
            row_dirty:  vec![true; num_rows],
            col_dirty:  vec![true; num_cols],
        }
    }

    // runs rounds of row and column passes until a fixed point is reached or
    // the round cap fires. each round works on a fresh copy of the grid that
    // is committed at a round boundary; a contradiction abandons the round,
    // leaving the grid as it was before it.
    pub fn solve(&mut self) -> Result<(), Error> {
        for _ in 0..MAX_ROUNDS {
            let mut next = self.puzzle.grid.clone();
            self.iterations += 1;

            self.row_pass(&mut next)?;
            if !self.col_dirty.iter().any(|&dirty| dirty) {
                self.puzzle.grid = next;
                break;
            }

            self.col_pass(&mut next)?;
            let rows_pending = self.row_dirty.iter().any(|&dirty| dirty);
            self.puzzle.grid = next;
            if !rows_pending {
                break;
            }
        }

        match self.puzzle.grid.num_unknown() {
            0 => info!("solved in {} round(s)", self.iterations),
            n => info!("stopped after {} round(s) with {} square(s) still unknown",
                       self.iterations, n),
        }
        Ok(())
    }

    fn row_pass(&mut self, next: &mut Grid) -> Result<(), Error> {
        let cache = Rc::clone(&self.cache);
        let mut cache = cache.borrow_mut();
        for y in 0..self.puzzle.rows.len() {
            if !self.row_dirty[y] {
                continue;
            }
            let known = next.line_values(Horizontal, y);
            if !known.contains(&Unknown) {
                self.puzzle.rows[y].completed = true;
                continue;
            }
            let solved = self.puzzle.rows[y].solve_line(&known, &mut *cache)?;
            let changed = next.write_line(Horizontal, y, &solved);
            if !changed.is_empty() {
                debug!("row {}: {} square(s) newly determined", y, changed.len());
            }
            for &x in &changed {
                self.col_dirty[x] = true;
            }
            if !solved.contains(&Unknown) {
                self.puzzle.rows[y].completed = true;
            }
        }
        for dirty in self.row_dirty.iter_mut() {
            *dirty = false;
        }
        Ok(())
    }

    fn col_pass(&mut self, next: &mut Grid) -> Result<(), Error> {
        let cache = Rc::clone(&self.cache);
        let mut cache = cache.borrow_mut();
        for x in 0..self.puzzle.cols.len() {
            if !self.col_dirty[x] {
                continue;
            }
            let known = next.line_values(Vertical, x);
            if !known.contains(&Unknown) {
                self.puzzle.cols[x].completed = true;
                continue;
            }
            let solved = self.puzzle.cols[x].solve_line(&known, &mut *cache)?;
            let changed = next.write_line(Vertical, x, &solved);
            if !changed.is_empty() {
                debug!("col {}: {} square(s) newly determined", x, changed.len());
            }
            for &y in &changed {
                self.row_dirty[y] = true;
            }
            if !solved.contains(&Unknown) {
                self.puzzle.cols[x].completed = true;
            }
        }
        for dirty in self.col_dirty.iter_mut() {
            *dirty = false;
        }
        Ok(())
    }
}
