// vim: set ai et ts=4 sw=4 sts=4:
pub mod permute;
mod solver;

use ansi_term::{Colour, Style, ANSIString};

use super::util::Direction;
use super::grid::{Error, SquareStatus, SquareStatus::FilledIn};

#[derive(Debug, Clone)]
pub struct Row {
    pub direction:  Direction,
    pub index:      usize,
    pub length:     usize,
    pub runs:       Vec<usize>,
    pub completed:  bool,
}

impl Row {
    pub fn new(direction: Direction,
               index: usize,
               length: usize,
               run_lengths: &[usize]) -> Result<Self, Error>
    {
        // a clue of "0" is the conventional way of writing an empty line
        let runs = run_lengths.iter()
                              .cloned()
                              .filter(|&len| len > 0)
                              .collect::<Vec<_>>();
        if Self::min_length_of(&runs) > length {
            return Err(Error::InfeasibleClue { runs, length });
        }
        Ok(Row {
            direction: direction,
            index:     index,
            length:    length,
            runs:      runs,
            completed: false,
        })
    }

    fn min_length_of(runs: &[usize]) -> usize {
        // the runs laid end to end with a single separating space between each pair
        runs.iter().sum::<usize>() + runs.len().saturating_sub(1)
    }
    pub fn min_length(&self) -> usize {
        Self::min_length_of(&self.runs)
    }
    pub fn is_trivially_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn clue_strings(&self) -> Vec<ANSIString<'static>> {
        let style = match self.completed {
            true  => Style::new().fg(Colour::Fixed(241)),
            false => Style::default(),
        };
        self.runs.iter()
                 .map(|len| style.paint(len.to_string()))
                 .collect()
    }
}

// scans a fully-determined line and returns the lengths of its maximal
// filled-in runs, in order. the inverse of solving a line.
pub fn runs_in_line(values: &[SquareStatus]) -> Vec<usize> {
    let mut runs = Vec::<usize>::new();
    let mut current: usize = 0;
    for &value in values {
        if value == FilledIn {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::util::Direction::*;
    use super::super::grid::SquareStatus::*;

    #[test]
    fn test_new_normalizes_zero_runs() {
        let row = Row::new(Horizontal, 0, 5, &[0]).unwrap();
        assert!(row.is_trivially_empty());
        assert_eq!(row.runs, Vec::<usize>::new());
    }

    #[test]
    fn test_new_rejects_infeasible_clue() {
        // 3 + 1 + 3 = 7 > 5
        let err = Row::new(Horizontal, 0, 5, &[3, 3]).unwrap_err();
        assert_eq!(err, Error::InfeasibleClue { runs: vec![3, 3], length: 5 });
    }

    #[test]
    fn test_min_length() {
        let row = Row::new(Vertical, 2, 10, &[2, 3, 1]).unwrap();
        assert_eq!(row.min_length(), 8);
    }

    #[test]
    fn test_runs_in_line() {
        assert_eq!(runs_in_line(&[FilledIn, FilledIn, CrossedOut, FilledIn, CrossedOut]),
                   vec![2, 1]);
        assert_eq!(runs_in_line(&[CrossedOut; 4]), Vec::<usize>::new());
        assert_eq!(runs_in_line(&[FilledIn; 3]), vec![3]);
    }
}
