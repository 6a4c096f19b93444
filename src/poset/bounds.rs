use tracing::debug;

use super::Poset;
use crate::relation::Relation;
use crate::table::OperationTable;

impl<R: Relation> Poset<R> {
  /// Least upper bounds of every ordered pair.
  ///
  /// `k` is the supremum of `(i, j)` when the elements above `k` are exactly the common
  /// upper bounds of `i` and `j`.
  pub fn supremums(&self) -> &OperationTable {
    self.cache.supremums.get_or_init(|| {
      let relation = &self.relation;
      let len = self.len();
      let table = OperationTable::build(len, |i, j| {
        (0..len).find(|&k| {
          (0..len).all(|l| {
            (relation.has_relation(i, l) && relation.has_relation(j, l)) == relation.has_relation(k, l)
          })
        })
      });
      debug!("supremum table: {} of {} pairs undefined", table.missing().count(), len * len);
      table
    })
  }

  /// Greatest lower bounds of every ordered pair, dual to [`Poset::supremums`].
  pub fn infimums(&self) -> &OperationTable {
    self.cache.infimums.get_or_init(|| {
      let relation = &self.relation;
      let len = self.len();
      let table = OperationTable::build(len, |i, j| {
        (0..len).find(|&k| {
          (0..len).all(|l| {
            (relation.has_relation(l, i) && relation.has_relation(l, j)) == relation.has_relation(l, k)
          })
        })
      });
      debug!("infimum table: {} of {} pairs undefined", table.missing().count(), len * len);
      table
    })
  }

  pub fn supremum(&self, left: usize, right: usize) -> Option<usize> {
    self.supremums().get(left, right)
  }

  pub fn infimum(&self, left: usize, right: usize) -> Option<usize> {
    self.infimums().get(left, right)
  }
}

#[cfg(test)]
mod tests {
  use crate::poset::fixtures::*;

  #[test]
  fn chain_bounds() {
    let poset = chain();
    assert_eq!(poset.supremum(0, 2), Some(2));
    assert_eq!(poset.infimum(0, 2), Some(0));
    assert_eq!(poset.supremum(1, 1), Some(1));
    assert!(poset.supremums().is_total());
    assert!(poset.infimums().is_total());
  }

  #[test]
  fn diamond_bounds() {
    let poset = diamond();
    assert_eq!(poset.supremum(1, 2), Some(3));
    assert_eq!(poset.supremum(2, 1), Some(3));
    assert_eq!(poset.infimum(1, 2), Some(0));
    assert_eq!(poset.infimum(3, 1), Some(1));
  }

  #[test]
  fn antichain_bounds_are_missing() {
    let poset = antichain();
    assert_eq!(poset.supremum(0, 1), None);
    assert_eq!(poset.infimum(0, 1), None);
    assert_eq!(poset.supremum(0, 0), Some(0));
    assert_eq!(poset.supremums().missing().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
  }

  #[test]
  fn an_upper_bound_is_not_enough() {
    // c and d are both above a and b but incomparable, so a and b have no least one.
    let poset: crate::Poset = poset(&["a", "b", "c", "d"], &[(0, 2), (1, 2), (0, 3), (1, 3)]);
    assert_eq!(poset.supremum(0, 1), None);
    assert_eq!(poset.infimum(2, 3), None);
    assert_eq!(poset.supremum(0, 2), Some(2));
  }

  #[test]
  fn out_of_range_pairs_are_absent() {
    let poset = chain();
    assert_eq!(poset.supremum(0, 3), None);
    assert_eq!(poset.infimum(9, 0), None);
  }
}
