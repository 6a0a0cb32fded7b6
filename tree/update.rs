use crate::error::{PartitionError, Result};
use serde::Serialize;

/**
An `UpdateSink` receives the result of growing a tree: for the dimension being boosted, the ascending bin indexes where the tree splits, and for every leaf, one score per class.

Any error returned from these methods is propagated to the caller of `grow` immediately.
*/
pub trait UpdateSink {
	/// Resize the splits of `dimension_index` to hold `count` values.
	fn set_split_count(&mut self, dimension_index: usize, count: usize) -> Result<()>;
	/// Resize the scores to hold `n_values` values.
	fn set_score_count(&mut self, n_values: usize) -> Result<()>;
	/// Borrow the splits of `dimension_index` and the scores at the same time.
	fn output_mut(&mut self, dimension_index: usize) -> (&mut [usize], &mut [f64]);
}

/// A vector backed `UpdateSink`.
#[derive(Clone, Debug, Serialize)]
pub struct TermUpdate {
	n_scores: usize,
	splits: Vec<Vec<usize>>,
	scores: Vec<f64>,
	#[serde(skip)]
	max_values: Option<usize>,
}

impl TermUpdate {
	/// Create an update for a term with `n_dimensions` dimensions. It starts out as a single leaf with zero scores.
	pub fn new(n_dimensions: usize, n_scores: usize) -> TermUpdate {
		TermUpdate {
			n_scores,
			splits: vec![Vec::new(); n_dimensions],
			scores: vec![0.0; n_scores],
			max_values: None,
		}
	}

	/// Limit the number of split or score values this update will hold.
	pub fn with_max_values(mut self, max_values: usize) -> TermUpdate {
		self.max_values = Some(max_values);
		self
	}

	pub fn n_scores(&self) -> usize {
		self.n_scores
	}

	pub fn splits(&self, dimension_index: usize) -> &[usize] {
		&self.splits[dimension_index]
	}

	/// The number of leaves implied by the splits of `dimension_index`.
	pub fn n_leaves(&self, dimension_index: usize) -> usize {
		self.splits[dimension_index].len() + 1
	}

	pub fn scores(&self) -> &[f64] {
		&self.scores
	}

	/// The scores of the leaf at `leaf_index` in bin order.
	pub fn leaf_scores(&self, leaf_index: usize) -> &[f64] {
		let start = leaf_index * self.n_scores;
		&self.scores[start..start + self.n_scores]
	}

	fn check_capacity(&self, requested: usize) -> Result<()> {
		match self.max_values {
			Some(limit) if requested > limit => {
				Err(PartitionError::UpdateCapacity { requested, limit })
			}
			_ => Ok(()),
		}
	}
}

impl UpdateSink for TermUpdate {
	fn set_split_count(&mut self, dimension_index: usize, count: usize) -> Result<()> {
		self.check_capacity(count)?;
		self.splits[dimension_index].resize(count, 0);
		Ok(())
	}

	fn set_score_count(&mut self, n_values: usize) -> Result<()> {
		self.check_capacity(n_values)?;
		self.scores.resize(n_values, 0.0);
		Ok(())
	}

	fn output_mut(&mut self, dimension_index: usize) -> (&mut [usize], &mut [f64]) {
		(&mut self.splits[dimension_index], &mut self.scores)
	}
}
