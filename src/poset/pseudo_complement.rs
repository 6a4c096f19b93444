use tracing::debug;

use super::Poset;
use crate::relation::Relation;
use crate::table::OperationTable;

impl<R: Relation> Poset<R> {
  /// Relative pseudo-complements: the cell `(i, j)` holds the greatest `k` whose infimum
  /// with `i` is below `j`.
  ///
  /// Needs every infimum; when one is missing the whole table is `None`.
  pub fn pseudo_complements(&self) -> Option<&OperationTable> {
    self.cache.pseudo_complements.get_or_init(|| {
      let infimums = self.infimums();
      if !infimums.is_total() {
        debug!("skipping pseudo-complements: infimums are partial");
        return None;
      }
      let relation = &self.relation;
      let len = self.len();
      let table = OperationTable::build(len, |i, j| {
        (0..len).find(|&k| {
          (0..len).all(|l| {
            let below = infimums.get(i, l).is_some_and(|meet| relation.has_relation(meet, j));
            below == relation.has_relation(l, k)
          })
        })
      });
      debug!("pseudo-complement table: {} of {} pairs undefined", table.missing().count(), len * len);
      Some(table)
    }).as_ref()
  }

  pub fn pseudo_complement(&self, left: usize, right: usize) -> Option<usize> {
    self.pseudo_complements()?.get(left, right)
  }

  /// Pseudo-complement relative to the least element.
  pub fn negate(&self, index: usize) -> Option<usize> {
    self.pseudo_complement(index, self.least_element()?)
  }
}
