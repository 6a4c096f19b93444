use super::Poset;
use crate::relation::Relation;

impl<R: Relation> Poset<R> {
  /// The element every other element is below, if there is one.
  pub fn greatest_element(&self) -> Option<usize> {
    *self.cache.greatest_element.get_or_init(|| {
      let len = self.len();
      (0..len).find(|&i| (0..len).all(|j| self.relation.has_relation(j, i)))
    })
  }

  /// The element below every other element, if there is one.
  pub fn least_element(&self) -> Option<usize> {
    *self.cache.least_element.get_or_init(|| {
      let len = self.len();
      (0..len).find(|&i| (0..len).all(|j| self.relation.has_relation(i, j)))
    })
  }
}
