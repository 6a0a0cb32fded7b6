use crate::{
	bin::{Bin, Histogram},
	loss::Loss,
	node::{NodeArena, NodeState, SplitDecision},
	random::DrawBelow,
	tie::TieSet,
	GrowOptions,
};

/// The result of searching a node for its best split.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SplitOutcome {
	/// The node is now `Evaluated` and its children have been claimed from the arena.
	Split,
	/// No split satisfies the constraints. This is a normal outcome.
	Unsplittable,
	/// A gain was `NaN` or infinite. The node was left untouched.
	Overflow,
}

/**
Find the best split of the node at `node_index` by scanning its bins left to right, moving one bin at a time from the right side to the left side.

The two scratch slots of the arena are used as the running left and right sums. If a split is accepted they become the node's children, with the left sum restored from the snapshot of the winning position and the right sum recomputed as the parent minus the left so that the children always add up to the parent.

When several positions tie for the best gain, one of them is drawn uniformly with `rng`.
*/
pub fn find_best_split<L, R>(
	arena: &mut NodeArena,
	node_index: usize,
	histogram: &Histogram,
	loss: &L,
	rng: &mut R,
	ties: &mut TieSet,
	options: &GrowOptions,
) -> SplitOutcome
where
	L: Loss + ?Sized,
	R: DrawBelow + ?Sized,
{
	let hessians_tracked = histogram.hessians_tracked;
	let min_samples_leaf = options.min_samples_leaf;
	debug_assert!(min_samples_leaf > 0);
	let children = arena.scratch_index();
	ties.clear();

	// Gains below zero are never candidates.
	let mut best_gain = 0.0;
	let parent_gain = {
		let (node, left, right) = arena.node_and_children_mut(node_index, children);
		log::trace!(
			"entered find_best_split: node_index={}, bin_range={:?}",
			node_index,
			node.bin_range,
		);
		debug_assert_eq!(node.state, NodeState::BeforeSplit);
		debug_assert!(node.is_splittable());
		left.bin.zero();
		right.bin.copy_from(&node.bin);
		let bin_range = node.bin_range.clone();
		for bin_index in bin_range.start..bin_range.end - 1 {
			let bin = &histogram.bins[bin_index];
			right.bin.subtract(bin);
			left.bin.add(bin);
			// The right side only shrinks from here on.
			if right.bin.n_samples < min_samples_leaf {
				break;
			}
			if left.bin.n_samples < min_samples_leaf {
				continue;
			}
			let gain = compute_partial_gain(loss, &left.bin, hessians_tracked)
				+ compute_partial_gain(loss, &right.bin, hessians_tracked);
			if gain.is_nan() {
				log::debug!(
					"gain is NaN at split_index={} of node_index={}",
					bin_index + 1,
					node_index
				);
				return SplitOutcome::Overflow;
			}
			if gain > best_gain {
				best_gain = gain;
				ties.reset_to(bin_index + 1, &left.bin);
			} else if gain == best_gain {
				ties.push(bin_index + 1, &left.bin);
			}
		}
		compute_partial_gain(loss, &node.bin, hessians_tracked)
	};

	if ties.is_empty() {
		return SplitOutcome::Unsplittable;
	}
	if !best_gain.is_finite() {
		log::debug!("gain overflowed for node_index={}", node_index);
		return SplitOutcome::Overflow;
	}

	// The parent's partial gain can overflow on its own, leaving the net gain NaN or -inf.
	let mut gain = best_gain - parent_gain;
	if gain.is_nan() || gain == f64::NEG_INFINITY {
		log::debug!("net gain overflowed for node_index={}", node_index);
		return SplitOutcome::Overflow;
	}
	if gain < -options.negative_gain_tolerance {
		log::warn!(
			"net gain {} for node_index={} is below the negative gain tolerance",
			gain,
			node_index
		);
		return SplitOutcome::Unsplittable;
	}
	if gain < 0.0 {
		gain = 0.0;
	}
	if gain <= options.min_gain_to_split {
		return SplitOutcome::Unsplittable;
	}

	let chosen = if ties.len() > 1 {
		rng.draw_below(ties.len())
	} else {
		0
	};
	let candidate = ties.get(chosen);
	let split_index = candidate.split_index;
	{
		let (node, left, right) = arena.node_and_children_mut(node_index, children);
		left.bin_range = node.bin_range.start..split_index;
		left.bin.copy_from(&candidate.left);
		right.bin_range = split_index..node.bin_range.end;
		right.bin.copy_from(&node.bin);
		right.bin.subtract(&candidate.left);
		node.state = NodeState::Evaluated(SplitDecision {
			children,
			split_index,
			gain,
		});
	}
	arena.claim_children();
	log::trace!(
		"exited find_best_split: split_index={}, gain={}",
		split_index,
		gain
	);
	SplitOutcome::Split
}

/// Sum the loss's partial gain over every score of `bin`.
#[inline(always)]
fn compute_partial_gain<L>(loss: &L, bin: &Bin, hessians_tracked: bool) -> f64
where
	L: Loss + ?Sized,
{
	bin.gradient_pairs
		.iter()
		.enumerate()
		.map(|(score_index, pair)| {
			loss.partial_gain(
				pair.sum_gradients,
				bin.hessian_or_weight(score_index, hessians_tracked),
			)
		})
		.sum()
}
