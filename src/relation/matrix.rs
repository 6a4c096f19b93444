use tracing::info;

use super::Relation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRelation {
  edges: Vec<Vec<bool>>,
}

impl Relation for MatrixRelation {
  fn from_matrix(edges: Vec<Vec<bool>>) -> Self {
    Self { edges }
  }
  fn report(&self) {
    info!("matrix relation over {} elements", self.len());
  }
  fn len(&self) -> usize {
    self.edges.len()
  }
  fn has_relation(&self, left: usize, right: usize) -> bool {
    self.edges[left][right]
  }
}
