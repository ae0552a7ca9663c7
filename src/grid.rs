// vim: set ai et ts=4 sts=4:
use std::fmt;
use super::util::{Direction, Direction::*};

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum SquareStatus {
    FilledIn,
    CrossedOut,
    Unknown,
}
impl SquareStatus {
    pub fn fmt_visual(&self) -> &str {
        match self {
            SquareStatus::CrossedOut => " ",
            SquareStatus::FilledIn   => "\u{25A0}",
            SquareStatus::Unknown    => ".",
        }
    }
}
impl fmt::Display for SquareStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            SquareStatus::FilledIn   => "FilledIn",
            SquareStatus::CrossedOut => "CrossedOut",
            SquareStatus::Unknown    => "Unknown",
        })
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug)]
pub enum Error {
    InfeasibleClue { runs: Vec<usize>, length: usize },
    Contradiction  { direction: Direction, index: usize },
    IncompleteBoard { row: usize, col: usize },
    Parse(String),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InfeasibleClue { runs, length } =>
                write!(f, "infeasible clue: runs {:?} need at least {} squares, but the line has only {}",
                    runs,
                    runs.iter().sum::<usize>() + runs.len().saturating_sub(1),
                    length),
            Error::Contradiction { direction, index } =>
                write!(f, "contradiction in {} {}: no placement of its runs is consistent with the known squares",
                    match direction {
                        Horizontal => "row",
                        Vertical   => "col",
                    },
                    index),
            Error::IncompleteBoard { row, col } =>
                write!(f, "board is incomplete: square (col={}, row={}) is still unknown", col, row),
            Error::Parse(msg) =>
                write!(f, "parse error: {}", msg),
        }
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct StatusCounts {
    pub filled:      usize,
    pub crossed_out: usize,
    pub unknown:     usize,
}

#[derive(PartialEq, Clone)]
pub struct Grid {
    squares: Vec<Vec<SquareStatus>>, // indexed [y][x]
}
impl Grid {
    pub fn new(width: usize, height: usize)
        -> Self
    {
        Grid {
            squares: (0..height).map(|_| vec![SquareStatus::Unknown; width])
                                .collect(),
        }
    }
    pub fn from_bitmap(bitmap: &[Vec<bool>]) -> Self {
        Grid {
            squares: bitmap.iter()
                           .map(|row| row.iter()
                                         .map(|&b| match b {
                                             true  => SquareStatus::FilledIn,
                                             false => SquareStatus::CrossedOut,
                                         })
                                         .collect::<Vec<_>>())
                           .collect(),
        }
    }

    pub fn width(&self) -> usize { self.squares[0].len() }
    pub fn height(&self) -> usize { self.squares.len() }

    pub fn get_status(&self, x: usize, y: usize) -> SquareStatus {
        self.squares[y][x]
    }
    pub fn set_status(&mut self, x: usize, y: usize, status: SquareStatus) {
        self.squares[y][x] = status;
    }

    pub fn line_values(&self, direction: Direction, index: usize) -> Vec<SquareStatus> {
        match direction {
            Horizontal => self.squares[index].clone(),
            Vertical   => self.squares.iter().map(|row| row[index]).collect(),
        }
    }
    // writes a full line of values back into the grid; returns the positions
    // along the line whose status actually changed.
    pub fn write_line(&mut self, direction: Direction, index: usize, values: &[SquareStatus])
        -> Vec<usize>
    {
        let mut changed = Vec::<usize>::new();
        for (at, &value) in values.iter().enumerate() {
            let (x, y) = match direction {
                Horizontal => (at, index),
                Vertical   => (index, at),
            };
            if self.squares[y][x] != value {
                self.squares[y][x] = value;
                changed.push(at);
            }
        }
        changed
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts { filled: 0, crossed_out: 0, unknown: 0 };
        for row in &self.squares {
            for status in row {
                match status {
                    SquareStatus::FilledIn   => counts.filled += 1,
                    SquareStatus::CrossedOut => counts.crossed_out += 1,
                    SquareStatus::Unknown    => counts.unknown += 1,
                }
            }
        }
        counts
    }
    pub fn num_unknown(&self) -> usize {
        self.status_counts().unknown
    }
    pub fn first_unknown(&self) -> Option<(usize, usize)> {
        for (y, row) in self.squares.iter().enumerate() {
            for (x, status) in row.iter().enumerate() {
                if *status == SquareStatus::Unknown {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(w={}, h={})", self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::SquareStatus::*;

    #[test]
    fn test_line_values_both_directions() {
        let mut grid = Grid::new(3, 2);
        grid.set_status(0, 0, FilledIn);
        grid.set_status(2, 1, CrossedOut);
        assert_eq!(grid.line_values(Horizontal, 0), vec![FilledIn, Unknown, Unknown]);
        assert_eq!(grid.line_values(Vertical, 2),   vec![Unknown, CrossedOut]);
    }

    #[test]
    fn test_write_line_reports_changes() {
        let mut grid = Grid::new(3, 3);
        let changed = grid.write_line(Vertical, 1, &[FilledIn, Unknown, CrossedOut]);
        assert_eq!(changed, vec![0, 2]);
        assert_eq!(grid.get_status(1, 0), FilledIn);
        assert_eq!(grid.get_status(1, 2), CrossedOut);
        // writing the same values again is a no-op
        let changed = grid.write_line(Vertical, 1, &[FilledIn, Unknown, CrossedOut]);
        assert!(changed.is_empty());
    }

    #[test]
    fn test_status_counts() {
        let grid = Grid::from_bitmap(&[vec![true, false], vec![false, false]]);
        let counts = grid.status_counts();
        assert_eq!(counts, StatusCounts { filled: 1, crossed_out: 3, unknown: 0 });
        assert_eq!(grid.num_unknown(), 0);
        assert_eq!(grid.first_unknown(), None);
    }
}
