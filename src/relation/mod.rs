mod bitvec;
pub use bitvec::*;
mod matrix;
pub use matrix::*;

use rayon::prelude::*;

/// Storage for a closed order relation over the indices `0..len()`.
///
/// `has_relation(left, right)` means "left is below or equal to right".
pub trait Relation: Sized + Send + Sync + std::fmt::Debug {
  fn from_matrix(matrix: Vec<Vec<bool>>) -> Self;
  fn len(&self) -> usize;
  fn has_relation(&self, left: usize, right: usize) -> bool;
  fn report(&self);

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn is_partial_order(&self) -> bool {
    let len = self.len();
    (0..len).into_par_iter()
      .all(|i| {
        (0..len).all(|j| {
          if i == j {
            return self.has_relation(i, j);
          }
          if self.has_relation(i, j) {
            !self.has_relation(j, i)
          } else {
            (0..len).all(|k| !self.has_relation(i, k) || !self.has_relation(k, j))
          }
        })
      })
  }
}
