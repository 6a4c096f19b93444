//! The edge-list text format: each line is a path `a -> b -> c` declaring `a <= b <= c`.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::trace;

use crate::error::PosetError;
use crate::poset::Poset;
use crate::relation::Relation;

/// Labels in order of first appearance, and the declared edges between their indices.
pub fn parse_dot_snippet(snippet: &str) -> Result<(Vec<String>, Vec<(usize, usize)>), PosetError> {
  let mut elements = Vec::new();
  let mut indices: HashMap<String, usize> = HashMap::new();
  let mut edges = Vec::new();
  for (line_number, line) in snippet.lines().enumerate() {
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    let mut previous = None;
    for word in line.split("->").map(str::trim) {
      if word.is_empty() {
        return Err(PosetError::EmptyLabel { line: line_number + 1 });
      }
      let index = match indices.get(word) {
        Some(&index) => index,
        None => {
          elements.push(word.to_string());
          indices.insert(word.to_string(), elements.len() - 1);
          elements.len() - 1
        }
      };
      if let Some(previous) = previous {
        edges.push((previous, index));
      }
      previous = Some(index);
    }
    trace!("line {}: {}", line_number + 1, line);
  }
  Ok((elements, edges))
}

impl<R: Relation> Poset<R> {
  pub fn parse(snippet: &str) -> Result<Self, PosetError> {
    let (elements, edges) = parse_dot_snippet(snippet)?;
    Self::new(elements, &edges)
  }
}

impl<R: Relation> FromStr for Poset<R> {
  type Err = PosetError;
  fn from_str(snippet: &str) -> Result<Self, Self::Err> {
    Self::parse(snippet)
  }
}
