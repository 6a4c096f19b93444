use tracing::debug;

use super::Poset;
use crate::relation::Relation;
use crate::table::OperationTable;

impl<R: Relation> Poset<R> {
  /// Every pair has both a supremum and an infimum.
  pub fn is_lattice(&self) -> bool {
    *self.cache.is_lattice.get_or_init(|| self.supremums().is_total() && self.infimums().is_total())
  }

  /// A lattice with a least element and a total pseudo-complement table.
  pub fn is_heyting_algebra(&self) -> bool {
    *self.cache.is_heyting_algebra.get_or_init(|| {
      self.is_lattice()
        && self.least_element().is_some()
        && self.pseudo_complements().is_some_and(OperationTable::is_total)
    })
  }

  /// A Heyting algebra whose negation is an involution.
  pub fn is_boolean_algebra(&self) -> bool {
    *self.cache.is_boolean_algebra.get_or_init(|| {
      if !self.is_heyting_algebra() {
        return false;
      }
      let involutive = (0..self.len()).all(|i| self.negate(i).and_then(|n| self.negate(n)) == Some(i));
      debug!("negation is involutive: {}", involutive);
      involutive
    })
  }
}
