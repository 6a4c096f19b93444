/// Failures while building a poset. Queries on a constructed poset never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PosetError {
  #[error("index out of bounds: {index} for {len}")]
  IndexOutOfBounds { index: usize, len: usize },

  #[error("poset must be antisymmetric: {left_label} and {right_label} are below each other")]
  AntisymmetryViolation {
    left: usize,
    right: usize,
    left_label: String,
    right_label: String,
  },

  #[error("empty label on line {line}")]
  EmptyLabel { line: usize },
}
