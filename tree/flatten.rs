use crate::{
	bin::Bin,
	error::{PartitionError, Result},
	loss::Loss,
	node::{NodeArena, NodeState},
};
use itertools::izip;

/**
Walk the finished tree in order, writing the split index of every branch to `splits` and the scores of every leaf to `scores`. Branches appear in `splits` in ascending bin order and leaves appear in `scores` left to right.

The walk uses an explicit stack, so deep trees cannot exhaust the call stack. `splits` and `scores` must have exactly the sizes implied by the number of leaves in the tree. Returns the number of leaves written.
*/
pub fn flatten<L>(
	arena: &NodeArena,
	root: usize,
	loss: &L,
	hessians_tracked: bool,
	zero_first_logit: bool,
	splits: &mut [usize],
	scores: &mut [f64],
) -> Result<usize>
where
	L: Loss + ?Sized,
{
	log::trace!("entered flatten");
	let n_scores = arena.get(root).bin.n_scores();
	let mut stack: Vec<usize> = Vec::new();
	stack.try_reserve(splits.len())?;
	let mut n_splits = 0;
	let mut n_leaves = 0;
	let mut current = Some(root);
	loop {
		// Descend to the leftmost leaf, remembering the branches along the way.
		while let Some(node_index) = current {
			let node = arena.get(node_index);
			match node.state {
				NodeState::Branch(split) => {
					stack.push(node_index);
					current = Some(split.left_child_index());
				}
				_ => {
					let start = n_leaves * n_scores;
					let leaf_scores = scores.get_mut(start..start + n_scores).ok_or_else(|| {
						PartitionError::unexpected("the tree has more leaves than expected")
					})?;
					write_leaf_scores(
						loss,
						&node.bin,
						hessians_tracked,
						zero_first_logit,
						leaf_scores,
					);
					n_leaves += 1;
					current = None;
				}
			}
		}
		let node_index = match stack.pop() {
			Some(node_index) => node_index,
			None => break,
		};
		let split = match arena.get(node_index).state {
			NodeState::Branch(split) => split,
			_ => {
				return Err(PartitionError::unexpected(
					"a non-branch node was on the stack",
				))
			}
		};
		let split_slot = splits.get_mut(n_splits).ok_or_else(|| {
			PartitionError::unexpected("the tree has more splits than expected")
		})?;
		*split_slot = split.split_index;
		n_splits += 1;
		current = Some(split.right_child_index());
	}
	if n_splits != splits.len() || n_leaves * n_scores != scores.len() {
		return Err(PartitionError::unexpected(
			"the tree has fewer leaves than expected",
		));
	}
	log::trace!("exited flatten: n_leaves={}", n_leaves);
	Ok(n_leaves)
}

/**
Compute the scores of a leaf from its aggregate bin. If `zero_first_logit` is set and there is more than one score, the first score's update is subtracted from every score, so the first score of every leaf is zero. Softmax outputs are unchanged by this shift.
*/
pub fn write_leaf_scores<L>(
	loss: &L,
	bin: &Bin,
	hessians_tracked: bool,
	zero_first_logit: bool,
	scores: &mut [f64],
) where
	L: Loss + ?Sized,
{
	debug_assert_eq!(bin.n_scores(), scores.len());
	let normalize = zero_first_logit && bin.n_scores() >= 2;
	let mut zero_logit = 0.0;
	for (score_index, (pair, score)) in
		izip!(bin.gradient_pairs.iter(), scores.iter_mut()).enumerate()
	{
		let mut update = loss.single_partition_update(
			pair.sum_gradients,
			bin.hessian_or_weight(score_index, hessians_tracked),
		);
		if normalize {
			if score_index == 0 {
				zero_logit = update;
			}
			update -= zero_logit;
		}
		*score = update;
	}
}
