/*!
This crate grows the small trees that explainable boosting machines add to one term at a time. Each call to `grow` takes a histogram of the gradients over the bins of one feature, finds the partition of the bins into at most `max_leaves` contiguous ranges that most reduces the loss, and writes the split positions and per-leaf score updates to an `UpdateSink`.

For an example, see `main.rs`, which grows a tree from a histogram stored as JSON.
*/

#![allow(clippy::tabs_in_doc_comments)]

use serde::{Deserialize, Serialize};

mod bin;
mod error;
mod flatten;
mod grow;
mod loss;
mod node;
mod random;
mod split;
mod tie;
#[cfg(feature = "timing")]
mod timing;
mod update;

pub use self::bin::{Bin, GradientPair, Histogram};
pub use self::error::{PartitionError, Result};
pub use self::flatten::{flatten, write_leaf_scores};
pub use self::grow::{grow, GrowBuffers, GrowSummary};
pub use self::loss::{LogLossClassification, Loss, MseRegressionLoss};
pub use self::node::{NodeArena, NodeState, SplitDecision, TreeNode};
pub use self::random::DrawBelow;
pub use self::split::{find_best_split, SplitOutcome};
pub use self::tie::{SplitCandidate, TieSet};
#[cfg(feature = "timing")]
pub use self::timing::{Timing, TimingDuration};
pub use self::update::{TermUpdate, UpdateSink};

/// These are the options passed to `grow`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowOptions {
	/// The number of leaves in a single tree will never exceed this value. It must be at least 2.
	pub max_leaves: usize,
	/// A split will only be considered valid if each side of it contains at least this many samples.
	pub min_samples_leaf: usize,
	/// A node will only be split if the net gain of its best split is greater than this value.
	pub min_gain_to_split: f64,
	/// Net gains in `[-negative_gain_tolerance, 0)` are rounding noise and are treated as zero. Anything lower is logged and the node is not split.
	pub negative_gain_tolerance: f64,
	/// If true and there is more than one score per leaf, the first score of every leaf is shifted to zero.
	pub zero_first_logit: bool,
}

impl Default for GrowOptions {
	fn default() -> GrowOptions {
		GrowOptions {
			max_leaves: 3,
			min_samples_leaf: 2,
			min_gain_to_split: 0.0,
			negative_gain_tolerance: 1e-7,
			zero_first_logit: false,
		}
	}
}
