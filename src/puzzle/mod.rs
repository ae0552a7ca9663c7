// vim: set ai et ts=4 sw=4 sts=4:
pub mod solver;

use std::fmt;
use std::convert::TryFrom;
use yaml_rust::Yaml;

use super::grid::{Grid, Error};
use super::util::{ralign, ralign_joined_coloreds, Direction::*};
use super::row::{Row, runs_in_line};

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub rows: Vec<Row>,
    pub cols: Vec<Row>,
    pub grid: Grid,
}

impl Puzzle {
    pub fn new(row_run_lengths: &[Vec<usize>],
               col_run_lengths: &[Vec<usize>]) -> Result<Self, Error>
    {
        let width  = col_run_lengths.len();
        let height = row_run_lengths.len();
        if width == 0 || height == 0 {
            return Err(Error::Parse("puzzle must have at least one row and one column".to_string()));
        }
        let rows = row_run_lengths.iter()
                                  .enumerate()
                                  .map(|(y, lengths)| Row::new(Horizontal, y, width, lengths))
                                  .collect::<Result<Vec<_>, _>>()?;
        let cols = col_run_lengths.iter()
                                  .enumerate()
                                  .map(|(x, lengths)| Row::new(Vertical, x, height, lengths))
                                  .collect::<Result<Vec<_>, _>>()?;
        Ok(Puzzle {
            rows: rows,
            cols: cols,
            grid: Grid::new(width, height),
        })
    }
    pub fn width(&self) -> usize { self.cols.len() }
    pub fn height(&self) -> usize { self.rows.len() }
    pub fn is_solved(&self) -> bool { self.grid.num_unknown() == 0 }

    pub fn from_yaml(doc: &Yaml) -> Result<Puzzle, Error>
    {
        let row_run_lengths = Self::parse_clue_list(&doc["rows"], "rows")?;
        let col_run_lengths = Self::parse_clue_list(&doc["cols"], "cols")?;
        Puzzle::new(&row_run_lengths, &col_run_lengths)
    }

    fn parse_clue_list(input: &Yaml, section: &str) -> Result<Vec<Vec<usize>>, Error> {
        let list: &Vec<Yaml> = input.as_vec()
            .ok_or_else(|| Error::Parse(format!("expected a '{}:' list of clues", section)))?;
        list.iter()
            .map(|yaml_val| Self::parse_clue(yaml_val))
            .collect()
    }

    fn parse_clue(input: &Yaml) -> Result<Vec<usize>, Error> {
        match input {
            Yaml::String(s)  => s.split_whitespace()
                                 .map(|tok| tok.parse::<usize>()
                                               .map_err(|_| Error::Parse(format!("invalid run length '{}'", tok))))
                                 .collect(),
            Yaml::Integer(i) => usize::try_from(*i)
                                    .map(|value| vec![value])
                                    .map_err(|_| Error::Parse(format!("invalid run length '{}'", i))),
            Yaml::Null       => Ok(vec![]),
            _ => Err(Error::Parse(format!("unexpected clue value: {:?}", input))),
        }
    }

    // the clues in the same document format that from_yaml accepts, so a
    // generated puzzle can be fed straight back into the solver
    pub fn fmt_clues_yaml(&self) -> String {
        fn fmt_clue(runs: &[usize]) -> String {
            match runs.is_empty() {
                true  => String::from("0"),
                false => runs.iter()
                             .map(|len| len.to_string())
                             .collect::<Vec<_>>()
                             .join(" "),
            }
        }
        let mut out = String::from("rows:\n");
        for row in &self.rows {
            out.push_str(&format!("    - {}\n", fmt_clue(&row.runs)));
        }
        out.push_str("cols:\n");
        for col in &self.cols {
            out.push_str(&format!("    - {}\n", fmt_clue(&col.runs)));
        }
        out
    }
}

// derives the row and column clues of a fully-determined grid; the inverse
// of solving. a grid with unknown squares has no well-defined clues.
pub fn extract_clues(grid: &Grid) -> Result<(Vec<Vec<usize>>, Vec<Vec<usize>>), Error> {
    if let Some((x, y)) = grid.first_unknown() {
        return Err(Error::IncompleteBoard { row: y, col: x });
    }
    let rows = (0..grid.height()).map(|y| runs_in_line(&grid.line_values(Horizontal, y)))
                                 .collect::<Vec<_>>();
    let cols = (0..grid.width()).map(|x| runs_in_line(&grid.line_values(Vertical, x)))
                                .collect::<Vec<_>>();
    Ok((rows, cols))
}

impl Puzzle {
    // helper functions for the board layout
    fn fmt_line(prefix: &str,
                left_delim: &str,
                right_delim: &str,
                columnwise_separator: &str,
                content_parts: &[String]) -> String
    {
        let mut line = format!("{} {}", prefix, left_delim);
        for (idx, part) in content_parts.iter().enumerate() {
            line.push_str(part);
            if ((idx+1) % 5 == 0) && (idx < content_parts.len()-1) {
                line.push_str(columnwise_separator);
            }
        }
        line.push_str(right_delim);
        line.push('\n');
        line
    }

    fn fmt_header(&self, line_idx: usize, prefix_len: usize) -> String {
        let mut content_parts = Vec::<String>::new();
        for col in &self.cols {
            let part: String;

            if line_idx < col.runs.len() {
                part = col.runs[col.runs.len()-1-line_idx].to_string();
            } else {
                part = String::from("");
            }

            content_parts.push(format!(" {:-2}", part));
        }

        Self::fmt_line(&ralign("", prefix_len), " ", " ", " ", &content_parts)
    }

    pub fn fmt_board(&self, emit_color: bool) -> String {
        let mut out = String::new();

        let row_prefixes = self.rows.iter()
                                    .map(|row| row.clue_strings())
                                    .collect::<Vec<_>>();
        let prefix_len = row_prefixes.iter()
                                     .map(|strs| strs.iter().map(|s| s.len()).sum::<usize>()
                                                 + strs.len().saturating_sub(1))
                                     .max()
                                     .unwrap_or(0);
        let max_col_runs = self.cols.iter()
                                    .map(|col| col.runs.len())
                                    .max()
                                    .unwrap_or(0);

        for i in (0..max_col_runs).rev() {
            out.push_str(&self.fmt_header(i, prefix_len));
        }

        // top board line
        out.push_str(&Self::fmt_line(
            &ralign("", prefix_len),
            "\u{2554}",
            "\u{2557}",
            "\u{2564}",
            &(0..self.width()).map(|_| String::from("\u{2550}\u{2550}\u{2550}"))
                              .collect::<Vec<_>>()
        ));

        for y in 0..self.height() {
            // board content line
            out.push_str(&Self::fmt_line(
                &ralign_joined_coloreds(&row_prefixes[y], prefix_len, emit_color),
                "\u{2551}",
                "\u{2551}",
                "\u{2502}",
                &self.grid.line_values(Horizontal, y)
                          .iter()
                          .map(|s| format!(" {:1} ", s.fmt_visual()))
                          .collect::<Vec<_>>()
            ));

            // horizontal board separator line
            if ((y+1) % 5 == 0) && (y != self.height()-1) {
                out.push_str(&Self::fmt_line(
                    &ralign("", prefix_len),
                    "\u{255F}",
                    "\u{2562}",
                    "\u{253C}",
                    &(0..self.width()).map(|_| String::from("\u{2500}\u{2500}\u{2500}"))
                                      .collect::<Vec<_>>()
                ));
            }
        }
        // bottom board line
        out.push_str(&Self::fmt_line(
            &ralign("", prefix_len),
            "\u{255A}",
            "\u{255D}",
            "\u{2567}",
            &(0..self.width()).map(|_| String::from("\u{2550}\u{2550}\u{2550}"))
                              .collect::<Vec<_>>()
        ));

        out
    }
}
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fmt_board(false))
    }
}
