use crate::EmbeddingError;

/// Compute cosine similarity between two embedding vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction.
/// A zero-magnitude vector has no direction and scores 0.0 against anything.
///
/// # Errors
///
/// Returns [`EmbeddingError::DimensionMismatch`] when the vectors differ in
/// length; `reference` supplies the expected dimension.
pub fn cosine_similarity(reference: &[f32], candidate: &[f32]) -> Result<f64, EmbeddingError> {
  if reference.len() != candidate.len() {
    return Err(EmbeddingError::DimensionMismatch {
      expected: reference.len(),
      actual: candidate.len(),
    });
  }

  let mut dot = 0.0_f64;
  let mut norm_a = 0.0_f64;
  let mut norm_b = 0.0_f64;

  for (&x, &y) in reference.iter().zip(candidate.iter()) {
    let x = f64::from(x);
    let y = f64::from(y);
    dot = x.mul_add(y, dot);
    norm_a = x.mul_add(x, norm_a);
    norm_b = y.mul_add(y, norm_b);
  }

  // f64 sums of squared f32 values cannot underflow, so only a true zero is zero
  if norm_a == 0.0 || norm_b == 0.0 {
    return Ok(0.0);
  }

  Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPS: f64 = 1e-9;

  #[test]
  fn identical_vectors_score_one() {
    let v = [0.3_f32, -1.2, 4.5, 0.0, 2.25];
    let sim = cosine_similarity(&v, &v).unwrap();
    assert!((sim - 1.0).abs() < EPS, "got {sim}");
  }

  #[test]
  fn scaled_vector_scores_one() {
    let a = [1.0_f32, 2.0, 3.0];
    let b = [2.0_f32, 4.0, 6.0];
    let sim = cosine_similarity(&a, &b).unwrap();
    assert!((sim - 1.0).abs() < EPS, "got {sim}");
  }

  #[test]
  fn is_symmetric() {
    let a = [0.5_f32, -0.25, 1.0, 3.0];
    let b = [-2.0_f32, 0.75, 0.1, 1.5];
    let ab = cosine_similarity(&a, &b).unwrap();
    let ba = cosine_similarity(&b, &a).unwrap();
    assert!((ab - ba).abs() < EPS);
  }

  #[test]
  fn negated_vector_scores_minus_one() {
    let a = [0.5_f32, -0.25, 1.0, 3.0];
    let neg: Vec<f32> = a.iter().map(|x| -x).collect();
    let sim = cosine_similarity(&a, &neg).unwrap();
    assert!((sim + 1.0).abs() < EPS, "got {sim}");
  }

  #[test]
  fn orthogonal_vectors_score_zero() {
    let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    assert!(sim.abs() < EPS);

    let sim = cosine_similarity(&[1.0, 1.0, 0.0], &[1.0, -1.0, 5.0]).unwrap();
    assert!(sim.abs() < EPS);
  }

  #[test]
  fn tiny_vectors_keep_their_direction() {
    let v = [1e-7_f32, 1e-7];
    let sim = cosine_similarity(&v, &v).unwrap();
    assert!((sim - 1.0).abs() < EPS, "got {sim}");

    let sim = cosine_similarity(&[1e-20_f32, 0.0], &[0.0, 1e-20]).unwrap();
    assert!(sim.abs() < EPS, "got {sim}");

    let sim = cosine_similarity(&[1e-30_f32, 0.0], &[-3.0, 0.0]).unwrap();
    assert!((sim + 1.0).abs() < EPS, "got {sim}");
  }

  #[test]
  fn zero_magnitude_scores_zero() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), Ok(0.0));
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), Ok(0.0));
  }

  #[test]
  fn mismatched_dimensions_fail() {
    assert_eq!(
      cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]),
      Err(EmbeddingError::DimensionMismatch {
        expected: 3,
        actual: 2
      })
    );
  }
}
