use std::fmt;

use serde::Serialize;

use crate::poset::Poset;
use crate::relation::Relation;

/// What the engine found out about a poset.
///
/// Follow-up questions are only asked when their precondition holds, so the optional
/// fields stay `None` otherwise: pseudo-complements need every infimum, the Heyting
/// check needs a lattice, the Boolean check needs a Heyting algebra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
  pub elements: usize,
  pub greatest_element: Option<String>,
  pub least_element: Option<String>,
  pub all_supremums: bool,
  pub all_infimums: bool,
  pub all_pseudo_complements: Option<bool>,
  pub is_lattice: bool,
  pub is_heyting_algebra: Option<bool>,
  pub is_boolean_algebra: Option<bool>,
}

impl Report {
  pub fn of<R: Relation>(poset: &Poset<R>) -> Self {
    let label = |index: Option<usize>| index.and_then(|i| poset.label(i)).map(str::to_string);
    let all_infimums = poset.infimums().is_total();
    let is_lattice = poset.is_lattice();
    let is_heyting_algebra = is_lattice.then(|| poset.is_heyting_algebra());
    Self {
      elements: poset.len(),
      greatest_element: label(poset.greatest_element()),
      least_element: label(poset.least_element()),
      all_supremums: poset.supremums().is_total(),
      all_infimums,
      all_pseudo_complements: all_infimums
        .then(|| poset.pseudo_complements().is_some_and(|table| table.is_total())),
      is_lattice,
      is_heyting_algebra,
      is_boolean_algebra: (is_heyting_algebra == Some(true)).then(|| poset.is_boolean_algebra()),
    }
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.elements == 0 {
      return writeln!(f, "- no elements");
    }
    writeln!(f, "- the greatest element: {}", self.greatest_element.as_deref().unwrap_or("none"))?;
    writeln!(f, "- the least element: {}", self.least_element.as_deref().unwrap_or("none"))?;
    writeln!(f, "- all supremums exist: {}", self.all_supremums)?;
    writeln!(f, "- all infimums exist: {}", self.all_infimums)?;
    if let Some(exist) = self.all_pseudo_complements {
      writeln!(f, "- all pseudo-complements exist: {}", exist)?;
    }
    writeln!(f, "- is lattice: {}", self.is_lattice)?;
    if let Some(heyting) = self.is_heyting_algebra {
      writeln!(f, "- is Heyting algebra: {}", heyting)?;
    }
    if let Some(boolean) = self.is_boolean_algebra {
      writeln!(f, "- is Boolean algebra: {}", boolean)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::poset::fixtures::*;
  use crate::relation::MatrixRelation;

  #[test]
  fn chain_report() {
    let report = Report::of(&chain());
    assert_eq!(report.greatest_element.as_deref(), Some("c"));
    assert_eq!(report.least_element.as_deref(), Some("a"));
    assert_eq!(report.is_heyting_algebra, Some(true));
    assert_eq!(report.is_boolean_algebra, Some(false));
    assert_eq!(
      report.to_string(),
      "- the greatest element: c\n\
       - the least element: a\n\
       - all supremums exist: true\n\
       - all infimums exist: true\n\
       - all pseudo-complements exist: true\n\
       - is lattice: true\n\
       - is Heyting algebra: true\n\
       - is Boolean algebra: false\n"
    );
  }

  #[test]
  fn antichain_report_skips_follow_ups() {
    let report = Report::of(&antichain());
    assert_eq!(report.greatest_element, None);
    assert_eq!(report.all_pseudo_complements, None);
    assert_eq!(report.is_heyting_algebra, None);
    assert_eq!(report.is_boolean_algebra, None);
    assert_eq!(
      report.to_string(),
      "- the greatest element: none\n\
       - the least element: none\n\
       - all supremums exist: false\n\
       - all infimums exist: false\n\
       - is lattice: false\n"
    );
  }

  #[test]
  fn empty_report() {
    let poset = Poset::<MatrixRelation>::new(vec![], &[]).unwrap();
    assert_eq!(Report::of(&poset).to_string(), "- no elements\n");
  }

  #[test]
  fn serializes_to_json() {
    let json = serde_json::to_value(Report::of(&m3())).unwrap();
    assert_eq!(json["is_lattice"], true);
    assert_eq!(json["is_heyting_algebra"], false);
    assert_eq!(json["is_boolean_algebra"], serde_json::Value::Null);
    assert_eq!(json["least_element"], "0");
  }
}
