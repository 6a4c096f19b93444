//! The partial order engine.
//!
//! A [`Poset`] is built once from labels and declared edges. Construction takes the
//! reflexive-transitive closure and rejects cycles; every other structure is derived
//! lazily from the closed relation and cached for the lifetime of the value.

mod algebra;
mod bounds;
mod closure;
mod extremal;
mod generators;
mod pseudo_complement;

use std::sync::OnceLock;

use tracing::info;

use crate::error::PosetError;
use crate::relation::{MatrixRelation, Relation};
use crate::table::OperationTable;

#[derive(Debug, Default)]
struct Cache {
  generators: OnceLock<Vec<(usize, usize)>>,
  greatest_element: OnceLock<Option<usize>>,
  least_element: OnceLock<Option<usize>>,
  supremums: OnceLock<OperationTable>,
  infimums: OnceLock<OperationTable>,
  pseudo_complements: OnceLock<Option<OperationTable>>,
  is_lattice: OnceLock<bool>,
  is_heyting_algebra: OnceLock<bool>,
  is_boolean_algebra: OnceLock<bool>,
}

#[derive(Debug)]
pub struct Poset<R: Relation = MatrixRelation> {
  elements: Vec<String>,
  relation: R,
  cache: Cache,
}

impl<R: Relation> Poset<R> {
  /// Closes `edges` under reflexivity and transitivity.
  ///
  /// Fails if an edge names an index outside `elements`, or if the closure relates two
  /// distinct elements in both directions.
  pub fn new(elements: Vec<String>, edges: &[(usize, usize)]) -> Result<Self, PosetError> {
    let matrix = closure::close(&elements, edges)?;
    let relation = R::from_matrix(matrix);
    debug_assert!(relation.is_partial_order());
    relation.report();
    info!("constructed poset with {} elements from {} edges", elements.len(), edges.len());
    Ok(Self {
      elements,
      relation,
      cache: Cache::default(),
    })
  }

  pub fn elements(&self) -> &[String] {
    &self.elements
  }

  pub fn label(&self, index: usize) -> Option<&str> {
    self.elements.get(index).map(String::as_str)
  }

  /// First index carrying `label`.
  pub fn index_of(&self, label: &str) -> Option<usize> {
    self.elements.iter().position(|element| element == label)
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Whether `left` is below or equal to `right`.
  pub fn le(&self, left: usize, right: usize) -> bool {
    left < self.len() && right < self.len() && self.relation.has_relation(left, right)
  }

  pub fn relation(&self) -> &R {
    &self.relation
  }
}


#[cfg(test)]
mod tests {
  use super::fixtures::*;
  use super::*;
  use crate::relation::BitVectorRelation;

  #[test]
  fn accessors() {
    let poset = chain();
    assert_eq!(poset.len(), 3);
    assert!(!poset.is_empty());
    assert_eq!(poset.elements(), ["a", "b", "c"]);
    assert_eq!(poset.label(2), Some("c"));
    assert_eq!(poset.label(3), None);
    assert_eq!(poset.index_of("b"), Some(1));
    assert_eq!(poset.index_of("z"), None);
    assert!(poset.le(0, 2));
    assert!(!poset.le(2, 0));
    assert!(!poset.le(0, 3));
  }

  #[test]
  fn closure_is_reflexive_and_transitive() {
    let poset = chain();
    for i in 0..3 {
      assert!(poset.le(i, i));
    }
    assert!(poset.le(0, 2));
    assert!(poset.relation().is_partial_order());
  }

  #[test]
  fn duplicate_edges_are_idempotent() {
    let once: Poset = poset(&["a", "b"], &[(0, 1)]);
    let twice: Poset = poset(&["a", "b"], &[(0, 1), (0, 1), (1, 1)]);
    assert_eq!(once.relation(), twice.relation());
  }

  #[test]
  fn rejects_out_of_bounds_edges() {
    let elements = vec!["a".to_string(), "b".to_string()];
    let err = Poset::<MatrixRelation>::new(elements.clone(), &[(0, 2)]).unwrap_err();
    assert_eq!(err, PosetError::IndexOutOfBounds { index: 2, len: 2 });
    let err = Poset::<MatrixRelation>::new(elements, &[(5, 0)]).unwrap_err();
    assert_eq!(err, PosetError::IndexOutOfBounds { index: 5, len: 2 });
  }

  #[test]
  fn rejects_two_cycles() {
    let elements = vec!["a".to_string(), "b".to_string()];
    let err = Poset::<MatrixRelation>::new(elements, &[(0, 1), (1, 0)]).unwrap_err();
    assert!(matches!(err, PosetError::AntisymmetryViolation { left: 0, right: 1, .. }));
  }

  #[test]
  fn rejects_transitive_cycles() {
    let elements = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let err = Poset::<BitVectorRelation>::new(elements, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap_err();
    match err {
      PosetError::AntisymmetryViolation { left, right, left_label, right_label } => {
        assert_eq!((left, right), (0, 1));
        assert_eq!((left_label.as_str(), right_label.as_str()), ("a", "b"));
      }
      other => panic!("unexpected error {other}"),
    }
  }

  #[test]
  fn empty_poset() {
    let poset = Poset::<MatrixRelation>::new(vec![], &[]).unwrap();
    assert!(poset.is_empty());
    assert_eq!(poset.greatest_element(), None);
    assert_eq!(poset.least_element(), None);
    assert!(poset.generators().is_empty());
    assert!(poset.is_lattice());
    assert!(!poset.is_heyting_algebra());
    assert!(!poset.is_boolean_algebra());
  }

  #[test]
  fn poset_is_shareable_across_threads() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<Poset<MatrixRelation>>();
    assert_sync::<Poset<BitVectorRelation>>();
  }
}
