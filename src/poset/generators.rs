use itertools::iproduct;
use tracing::debug;

use super::Poset;
use crate::relation::Relation;

impl<R: Relation> Poset<R> {
  /// The covering pairs `(lower, upper)` in row-major order.
  ///
  /// A pair is kept when no third element lies strictly between its ends, so these are
  /// exactly the edges of the Hasse diagram and their closure is the whole relation.
  pub fn generators(&self) -> &[(usize, usize)] {
    self.cache.generators.get_or_init(|| {
      let relation = &self.relation;
      let len = self.len();
      let generators: Vec<_> = iproduct!(0..len, 0..len)
        .filter(|&(i, j)| i != j && relation.has_relation(i, j))
        .filter(|&(i, j)| {
          !(0..len).any(|k| k != i && k != j && relation.has_relation(i, k) && relation.has_relation(k, j))
        })
        .collect();
      debug!("found {} generators", generators.len());
      generators
    })
  }
}
