use rayon::prelude::*;
use serde::Serialize;

/// A binary operation on element indices that may be undefined for some pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationTable {
  len: usize,
  cells: Vec<Option<usize>>,
}

impl OperationTable {
  /// Fills every cell in parallel. Cells are stored row-major.
  pub(crate) fn build(len: usize, cell: impl Fn(usize, usize) -> Option<usize> + Sync + Send) -> Self {
    let cells = (0..len * len)
      .into_par_iter()
      .map(|index| cell(index / len, index % len))
      .collect();
    Self { len, cells }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn get(&self, left: usize, right: usize) -> Option<usize> {
    if left >= self.len || right >= self.len {
      return None;
    }
    self.cells[left * self.len + right]
  }

  pub fn is_total(&self) -> bool {
    self.cells.iter().all(Option::is_some)
  }

  /// Pairs with no value, in row-major order.
  pub fn missing(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self.cells.iter()
      .enumerate()
      .filter(|(_, cell)| cell.is_none())
      .map(|(index, _)| (index / self.len, index % self.len))
  }

  pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
    self.cells.chunks(self.len.max(1))
  }
}
