// vim: set ai et ts=4 sts=4 sw=4:
use super::Row;
use super::permute::{Permutation, PermutationCache};
use super::super::grid::{Error, SquareStatus, SquareStatus::Unknown};

impl Row {
    // intersects every placement of this row's runs that is consistent with
    // the partial knowledge in `known`: squares on which all surviving
    // placements agree become that value, all others stay unknown. the result
    // never regresses a known square, since inconsistent placements were
    // filtered out first.
    pub fn solve_line(&self, known: &[SquareStatus], cache: &mut PermutationCache)
        -> Result<Vec<SquareStatus>, Error>
    {
        assert!(known.len() == self.length);
        let placements = cache.placements_for(&self.runs, self.length)?;

        let mut survivors = placements.iter()
                                      .filter(|p| Self::is_consistent(p, known));
        // an empty survivor set means the known squares cannot be satisfied by
        // any legal placement; that must surface as an error here, not as an
        // indexing panic further down
        let first = survivors.next()
                             .ok_or(Error::Contradiction {
                                 direction: self.direction,
                                 index:     self.index,
                             })?;

        let mut certain = first.clone();
        for placement in survivors {
            for (at, &value) in placement.iter().enumerate() {
                if certain[at] != value {
                    certain[at] = Unknown;
                }
            }
        }
        Ok(certain)
    }

    fn is_consistent(placement: &Permutation, known: &[SquareStatus]) -> bool {
        known.iter()
             .zip(placement.iter())
             .all(|(&k, &p)| k == Unknown || k == p)
    }
}
