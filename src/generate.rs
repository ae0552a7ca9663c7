// vim: set ai et ts=4 sw=4 sts=4:
use std::rc::Rc;
use std::cell::RefCell;
use log::info;
use yaml_rust::Yaml;

use super::grid::{Grid, Error, SquareStatus::{FilledIn, Unknown}};
use super::puzzle::{Puzzle, extract_clues};
use super::puzzle::solver::Solver;
use super::row::permute::PermutationCache;

// how often to flip the remaining unknown squares to filled and retry
pub const MAX_ADJUSTMENTS: usize = 5;
// reject once the adjusted solution drifts this far from the source bitmap
pub const ERROR_TOLERANCE: f64 = 0.25;

#[derive(Debug)]
pub struct GeneratedPuzzle {
    // clues plus their unique solution, ready for display or re-parsing
    pub puzzle: Puzzle,
}

// fraction of squares where the candidate either is still unknown or
// disagrees with the target about being filled
pub fn error_proportion(target: &Grid, candidate: &Grid) -> f64 {
    let mut mismatched: usize = 0;
    for y in 0..target.height() {
        for x in 0..target.width() {
            let wanted = target.get_status(x, y) == FilledIn;
            match candidate.get_status(x, y) {
                Unknown => mismatched += 1,
                status  => if (status == FilledIn) != wanted {
                    mismatched += 1;
                },
            }
        }
    }
    mismatched as f64 / (target.width() * target.height()) as f64
}

fn fill_unknown(grid: &Grid) -> Grid {
    let mut filled = grid.clone();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if filled.get_status(x, y) == Unknown {
                filled.set_status(x, y, FilledIn);
            }
        }
    }
    filled
}

fn solve_clues(rows: &[Vec<usize>],
               cols: &[Vec<usize>],
               cache: &Rc<RefCell<PermutationCache>>) -> Result<Puzzle, Error>
{
    let puzzle = Puzzle::new(rows, cols)?;
    let mut solver = Solver::with_cache(puzzle, Rc::clone(cache));
    solver.solve()?;
    Ok(solver.puzzle)
}

// turns an externally produced bitmap into a puzzle with a unique, derivable
// solution. if the bitmap's own clues leave squares undetermined, the
// undetermined squares are assumed filled and the puzzle is rebuilt from the
// result, up to MAX_ADJUSTMENTS times; each attempt must stay within
// ERROR_TOLERANCE of the source bitmap or the bitmap is rejected.
pub fn generate_from_bitmap(bitmap: &Grid) -> Result<Option<GeneratedPuzzle>, Error> {
    let cache = Rc::new(RefCell::new(PermutationCache::new()));

    let (rows, cols) = extract_clues(bitmap)?;
    let mut solved = solve_clues(&rows, &cols, &cache)?;
    if solved.is_solved() {
        return Ok(Some(GeneratedPuzzle { puzzle: solved }));
    }

    for attempt in 1..=MAX_ADJUSTMENTS {
        let adjusted = fill_unknown(&solved.grid);
        let (rows, cols) = extract_clues(&adjusted)?;
        solved = solve_clues(&rows, &cols, &cache)?;

        let error = error_proportion(bitmap, &solved.grid);
        info!("adjustment {}: {} square(s) unknown, error proportion {:.3}",
              attempt, solved.grid.num_unknown(), error);
        if error >= ERROR_TOLERANCE {
            break;
        }
        if solved.is_solved() {
            return Ok(Some(GeneratedPuzzle { puzzle: solved }));
        }
    }
    Ok(None)
}

// reads the `bitmap:` document format: a list of equal-length strings, one
// per board row, with '#' for filled squares and '.' for empty ones
pub fn bitmap_from_yaml(doc: &Yaml) -> Result<Grid, Error> {
    let list: &Vec<Yaml> = doc["bitmap"].as_vec()
        .ok_or_else(|| Error::Parse("expected a 'bitmap:' list of strings".to_string()))?;

    let mut bitmap = Vec::<Vec<bool>>::new();
    for item in list {
        let line = item.as_str()
            .ok_or_else(|| Error::Parse(format!("unexpected bitmap row: {:?}", item)))?;
        let row = line.chars()
                      .map(|c| match c {
                          '#' | 'X' | '1' => Ok(true),
                          '.' | ' ' | '0' => Ok(false),
                          other => Err(Error::Parse(format!("unexpected bitmap character '{}'", other))),
                      })
                      .collect::<Result<Vec<_>, _>>()?;
        bitmap.push(row);
    }
    if bitmap.is_empty() || bitmap[0].is_empty() {
        return Err(Error::Parse("bitmap must have at least one row and one column".to_string()));
    }
    if bitmap.iter().any(|row| row.len() != bitmap[0].len()) {
        return Err(Error::Parse("bitmap rows must all have the same length".to_string()));
    }
    Ok(Grid::from_bitmap(&bitmap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;
    use super::super::grid::SquareStatus::CrossedOut;

    fn bitmap(rows: &[&str]) -> Grid {
        Grid::from_bitmap(&rows.iter()
                               .map(|line| line.chars().map(|c| c == '#').collect())
                               .collect::<Vec<_>>())
    }

    #[test]
    fn test_error_proportion_counts_unknowns() {
        let target = bitmap(&["##", ".."]);
        let mut candidate = target.clone();
        assert_eq!(error_proportion(&target, &candidate), 0.0);
        candidate.set_status(0, 0, Unknown);
        assert_eq!(error_proportion(&target, &candidate), 0.25);
        candidate.set_status(0, 1, FilledIn);
        assert_eq!(error_proportion(&target, &candidate), 0.5);
    }

    #[test]
    fn test_fill_unknown() {
        let mut grid = Grid::new(2, 1);
        grid.set_status(1, 0, CrossedOut);
        let filled = fill_unknown(&grid);
        assert_eq!(filled.get_status(0, 0), FilledIn);
        assert_eq!(filled.get_status(1, 0), CrossedOut);
    }

    #[test]
    fn test_unique_bitmap_is_accepted_unchanged() {
        let source = bitmap(&[
            "#####",
            "#...#",
            "#...#",
            "#...#",
            "#####",
        ]);
        let generated = generate_from_bitmap(&source).unwrap().unwrap();
        assert!(generated.puzzle.is_solved());
        assert_eq!(error_proportion(&source, &generated.puzzle.grid), 0.0);
    }

    #[test]
    fn test_drifting_bitmap_is_rejected() {
        // the checkerboard's clues are ambiguous, and assuming the unknown
        // squares filled drifts half the board away from the source
        let source = bitmap(&["#.", ".#"]);
        assert!(generate_from_bitmap(&source).unwrap().is_none());
    }

    #[test]
    fn test_bitmap_from_yaml() {
        let docs = YamlLoader::load_from_str("
bitmap:
    - '#.'
    - '.#'
").unwrap();
        let grid = bitmap_from_yaml(&docs[0]).unwrap();
        assert_eq!(grid.get_status(0, 0), FilledIn);
        assert_eq!(grid.get_status(1, 0), CrossedOut);
        assert_eq!(grid.get_status(1, 1), FilledIn);
    }

    #[test]
    fn test_bitmap_from_yaml_rejects_ragged_rows() {
        let docs = YamlLoader::load_from_str("
bitmap:
    - '#.'
    - '#'
").unwrap();
        match bitmap_from_yaml(&docs[0]).unwrap_err() {
            Error::Parse(msg) => assert!(msg.contains("same length"), "unexpected message: {}", msg),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }
}
