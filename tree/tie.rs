use crate::bin::Bin;

/// A split position together with the sum of the bins to its left.
#[derive(Clone, Debug)]
pub struct SplitCandidate {
	pub split_index: usize,
	pub left: Bin,
}

/**
The `TieSet` holds every split position that achieves the best gain seen so far in a scan. Gains are compared by exact floating point equality. Ties are common when bins hold zero samples, because adding an empty bin to the left side does not change any sum.

Candidates are never freed. Clearing the set only resets its length, so the bins allocated for the snapshots are reused by later scans.
*/
#[derive(Clone, Debug, Default)]
pub struct TieSet {
	candidates: Vec<SplitCandidate>,
	len: usize,
}

impl TieSet {
	pub fn new() -> TieSet {
		TieSet::default()
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn clear(&mut self) {
		self.len = 0;
	}

	/// Record a candidate after clearing the set, for a gain strictly better than all previous ones.
	pub fn reset_to(&mut self, split_index: usize, left: &Bin) {
		self.clear();
		self.push(split_index, left);
	}

	/// Record a candidate whose gain equals the current best.
	pub fn push(&mut self, split_index: usize, left: &Bin) {
		if self.len < self.candidates.len() {
			let candidate = &mut self.candidates[self.len];
			candidate.split_index = split_index;
			if candidate.left.n_scores() == left.n_scores() {
				candidate.left.copy_from(left);
			} else {
				candidate.left = left.clone();
			}
		} else {
			self.candidates.push(SplitCandidate {
				split_index,
				left: left.clone(),
			});
		}
		self.len += 1;
	}

	pub fn get(&self, index: usize) -> &SplitCandidate {
		&self.as_slice()[index]
	}

	pub fn as_slice(&self) -> &[SplitCandidate] {
		&self.candidates[..self.len]
	}
}
