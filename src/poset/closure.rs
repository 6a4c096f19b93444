use crate::error::PosetError;

/// Builds the reflexive-transitive closure of `edges` over `elements` and checks antisymmetry.
pub(super) fn close(elements: &[String], edges: &[(usize, usize)]) -> Result<Vec<Vec<bool>>, PosetError> {
  let len = elements.len();
  let mut matrix = vec![vec![false; len]; len];
  for (i, row) in matrix.iter_mut().enumerate() {
    row[i] = true;
  }
  for &(left, right) in edges {
    for index in [left, right] {
      if index >= len {
        return Err(PosetError::IndexOutOfBounds { index, len });
      }
    }
    matrix[left][right] = true;
  }

  // Warshall-Floyd: every pair is relaxed through `k` before `k + 1` is tried.
  for k in 0..len {
    let through = matrix[k].clone();
    for row in matrix.iter_mut() {
      if row[k] {
        row.iter_mut()
          .zip(through.iter())
          .for_each(|(cell, &reachable)| *cell |= reachable);
      }
    }
  }

  for left in 0..len {
    for right in left + 1..len {
      if matrix[left][right] && matrix[right][left] {
        return Err(PosetError::AntisymmetryViolation {
          left,
          right,
          left_label: elements[left].clone(),
          right_label: elements[right].clone(),
        });
      }
    }
  }
  Ok(matrix)
}
