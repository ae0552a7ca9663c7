// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::HashMap;
use std::rc::Rc;
use log::debug;

use super::super::grid::{Error, SquareStatus, SquareStatus::{CrossedOut, FilledIn}};

// one fully-determined assignment of a line that satisfies its runs exactly
pub type Permutation = Vec<SquareStatus>;

// enumerates every legal placement of the given runs on a line of the given
// length. the runs keep their order; what varies is how the leftover empty
// squares are distributed over the gaps before, between and after the runs.
pub fn enumerate_placements(runs: &[usize], length: usize) -> Vec<Permutation> {
    let min_length = runs.iter().sum::<usize>() + runs.len().saturating_sub(1);
    assert!(min_length <= length);
    let slack = length - min_length;

    let mut accumulator = Vec::<Permutation>::new();
    let mut prefix = Vec::<SquareStatus>::with_capacity(length);
    expand_into(runs, slack, &mut prefix, &mut accumulator);
    accumulator
}

fn expand_into(runs: &[usize],
               slack: usize,
               prefix: &mut Vec<SquareStatus>,
               accumulator: &mut Vec<Permutation>)
{
    if runs.is_empty() {
        // all runs placed; the trailing gap absorbs whatever slack is left
        let mut placement = prefix.clone();
        placement.resize(placement.len() + slack, CrossedOut);
        accumulator.push(placement);
        return;
    }
    // give the gap in front of this run each possible share of the slack,
    // then place the run itself plus its mandatory separator
    for lead in 0..=slack {
        let mark = prefix.len();
        prefix.resize(mark + lead, CrossedOut);
        prefix.resize(prefix.len() + runs[0], FilledIn);
        if runs.len() > 1 {
            prefix.push(CrossedOut);
        }
        expand_into(&runs[1..], slack - lead, prefix, accumulator);
        prefix.truncate(mark);
    }
}

// memoizes enumerated placements per (runs, length) key. placements depend
// only on that pair, never on a particular board, so one cache can be shared
// across every row, column and solve call of a session. entries are
// append-only and handed out behind an Rc.
#[derive(Debug)]
pub struct PermutationCache {
    entries: HashMap<(Vec<usize>, usize), Rc<Vec<Permutation>>>,
}

impl PermutationCache {
    pub fn new() -> Self {
        PermutationCache {
            entries: HashMap::new(),
        }
    }

    pub fn placements_for(&mut self, runs: &[usize], length: usize)
        -> Result<Rc<Vec<Permutation>>, Error>
    {
        let min_length = runs.iter().sum::<usize>() + runs.len().saturating_sub(1);
        if min_length > length {
            return Err(Error::InfeasibleClue { runs: runs.to_vec(), length });
        }

        let key = (runs.to_vec(), length);
        if let Some(entry) = self.entries.get(&key) {
            return Ok(Rc::clone(entry));
        }

        let placements = Rc::new(enumerate_placements(runs, length));
        debug!("enumerated {} placements for runs {:?} on a line of length {}",
               placements.len(), runs, length);
        self.entries.insert(key, Rc::clone(&placements));
        Ok(placements)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt_placement(placement: &Permutation) -> String {
        placement.iter()
                 .map(|status| match status {
                     FilledIn   => '#',
                     CrossedOut => '.',
                     _          => '?',
                 })
                 .collect()
    }

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_full_line_single_placement() {
        let placements = enumerate_placements(&[5], 5);
        assert_eq!(placements.len(), 1);
        assert_eq!(fmt_placement(&placements[0]), "#####");
    }

    #[test]
    fn test_empty_clue_single_placement() {
        let placements = enumerate_placements(&[], 5);
        assert_eq!(placements.len(), 1);
        assert_eq!(fmt_placement(&placements[0]), ".....");
    }

    #[test]
    fn test_zero_length_line() {
        let placements = enumerate_placements(&[], 0);
        assert_eq!(placements.len(), 1);
        assert!(placements[0].is_empty());
    }

    #[test]
    fn test_small_enumeration() {
        let placements = enumerate_placements(&[1, 2], 5);
        let mut strings = placements.iter().map(fmt_placement).collect::<Vec<_>>();
        strings.sort();
        assert_eq!(strings, vec!["#.##.", "#..##", ".#.##"]);
    }

    #[test]
    fn test_count_matches_binomial() {
        // count of placements is C(slack + k, k)
        for &(runs, length) in &[(&[1usize, 2, 3][..], 15usize),
                                 (&[2, 2][..], 10),
                                 (&[1][..], 8),
                                 (&[4, 1, 1][..], 12)] {
            let k = runs.len();
            let slack = length - runs.iter().sum::<usize>() - (k - 1);
            let placements = enumerate_placements(runs, length);
            assert_eq!(placements.len(), binomial(slack + k, k),
                       "count mismatch for runs {:?} on length {}", runs, length);
        }
    }

    #[test]
    fn test_placements_satisfy_their_clue() {
        use super::super::runs_in_line;
        for placement in enumerate_placements(&[2, 1, 3], 11) {
            assert_eq!(runs_in_line(&placement), vec![2, 1, 3]);
        }
    }

    #[test]
    fn test_cache_returns_shared_entry() {
        let mut cache = PermutationCache::new();
        let first  = cache.placements_for(&[1, 2], 5).unwrap();
        let second = cache.placements_for(&[1, 2], 5).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        // a different length is a different key
        let third = cache.placements_for(&[1, 2], 6).unwrap();
        assert!(!Rc::ptr_eq(&first, &third));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_rejects_infeasible_clue() {
        let mut cache = PermutationCache::new();
        let err = cache.placements_for(&[4, 4], 8).unwrap_err();
        assert_eq!(err, Error::InfeasibleClue { runs: vec![4, 4], length: 8 });
    }
}
