use sucds::bit_vectors::{BitVector, prelude::*};
use tracing::info;

use super::Relation;

/// One packed row per element.
#[derive(Debug, Clone)]
pub struct BitVectorRelation {
  edges: Vec<BitVector>,
}

impl Relation for BitVectorRelation {
  fn from_matrix(edges: Vec<Vec<bool>>) -> Self {
    Self {
      edges: edges.into_iter().map(BitVector::from_bits).collect(),
    }
  }
  fn report(&self) {
    info!("bit vector relation over {} elements", self.len());
  }
  fn len(&self) -> usize {
    self.edges.len()
  }
  fn has_relation(&self, left: usize, right: usize) -> bool {
    self.edges[left].access(right).unwrap()
  }
}
