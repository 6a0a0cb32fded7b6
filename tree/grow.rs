use crate::{
	bin::Histogram,
	error::{PartitionError, Result},
	flatten::{flatten, write_leaf_scores},
	loss::Loss,
	node::{NodeArena, NodeState, SplitDecision},
	random::DrawBelow,
	split::{find_best_split, SplitOutcome},
	tie::TieSet,
	update::UpdateSink,
	GrowOptions,
};
use ebm_finite::Finite;
use std::{cmp::Ordering, collections::BinaryHeap};

/// The working memory for `grow`. Create it once per boosting run and pass it to every call, so that nodes and split candidates are allocated only once.
#[derive(Debug)]
pub struct GrowBuffers {
	arena: NodeArena,
	ties: TieSet,
	queue: BinaryHeap<QueueItem>,
	#[cfg(feature = "timing")]
	timing: crate::timing::Timing,
}

impl GrowBuffers {
	/// Allocate buffers for trees with at most `max_leaves` leaves and `n_scores` scores per leaf. A tree never has more leaves than its histogram has bins, so `max_leaves` can be capped at the number of bins.
	pub fn new(max_leaves: usize, n_scores: usize) -> Result<GrowBuffers> {
		Ok(GrowBuffers {
			arena: NodeArena::new(max_leaves, n_scores)?,
			ties: TieSet::new(),
			queue: BinaryHeap::new(),
			#[cfg(feature = "timing")]
			timing: crate::timing::Timing::new(),
		})
	}

	/// The nodes of the most recently grown tree. The root is at index 0.
	pub fn arena(&self) -> &NodeArena {
		&self.arena
	}

	#[cfg(feature = "timing")]
	pub fn timing(&self) -> &crate::timing::Timing {
		&self.timing
	}
}

/// What `grow` reports besides the update itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowSummary {
	/// The sum of the net gains of every committed split. It is 0.0 when the tree is a single leaf and positive infinity when the gain overflowed at the root, in which case the caller should discard the update.
	pub total_gain: f64,
	pub n_leaves: usize,
}

/// Nodes waiting to be split, ordered by the gain of their best split. The gain is `Finite`, so a `NaN` can never reach the queue's comparisons.
#[derive(Debug)]
struct QueueItem {
	gain: Finite<f64>,
	node_index: usize,
}

impl PartialEq for QueueItem {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for QueueItem {
	fn cmp(&self, other: &Self) -> Ordering {
		// Among equal gains the node created first is split first.
		self.gain
			.cmp(&other.gain)
			.then_with(|| other.node_index.cmp(&self.node_index))
	}
}

/**
Grow a tree over the bins of `histogram` and write it to `update` for `dimension_index`.

The tree is grown best first: the node whose best split has the highest gain is split next, until the tree has `options.max_leaves` leaves or no node can be split. A node is only split if both children get at least `options.min_samples_leaf` samples.

The children of the split that reaches `options.max_leaves` are not searched, since they could never be split. Those searches would not change the tree, but they would draw from `rng` when they hit ties, so `rng` advances by fewer draws than it would if every child were searched.

# Panics

The histogram must contain at least one sample and two bins, `options.max_leaves` must be at least 2, `options.min_samples_leaf` must be positive, and `buffers` must have been allocated with the histogram's number of scores for at least `options.max_leaves` leaves, or for as many leaves as the histogram has bins if that is fewer.
*/
#[allow(clippy::too_many_arguments)]
pub fn grow<L, R, U>(
	histogram: &Histogram,
	loss: &L,
	rng: &mut R,
	options: &GrowOptions,
	buffers: &mut GrowBuffers,
	update: &mut U,
	dimension_index: usize,
) -> Result<GrowSummary>
where
	L: Loss + ?Sized,
	R: DrawBelow + ?Sized,
	U: UpdateSink + ?Sized,
{
	log::trace!(
		"entered grow: n_bins={}, dimension_index={}, min_samples_leaf={}, max_leaves={}",
		histogram.n_bins(),
		dimension_index,
		options.min_samples_leaf,
		options.max_leaves,
	);
	#[cfg(feature = "timing")]
	let start_total = std::time::Instant::now();

	let n_bins = histogram.n_bins();
	let n_scores = histogram.n_scores();
	assert!(
		histogram.total().n_samples >= 1,
		"the histogram has no samples"
	);
	assert!(n_bins >= 2, "the histogram needs at least two bins");
	assert!(options.max_leaves >= 2, "max_leaves must be at least 2");
	assert!(
		options.min_samples_leaf > 0,
		"min_samples_leaf must be positive"
	);
	assert!(n_scores >= 1, "the histogram has no scores");
	// Every leaf holds at least one bin.
	let max_leaves = options.max_leaves.min(n_bins);
	assert!(
		buffers.arena.fits(max_leaves, n_scores),
		"the buffers were allocated for smaller trees"
	);

	let arena = &mut buffers.arena;
	let ties = &mut buffers.ties;
	let queue = &mut buffers.queue;
	#[cfg(feature = "timing")]
	let timing = &buffers.timing;

	let root = arena.reset(0..n_bins, histogram.total());
	#[cfg(feature = "timing")]
	let start = std::time::Instant::now();
	let root_outcome = find_best_split(arena, root, histogram, loss, rng, ties, options);
	#[cfg(feature = "timing")]
	timing.find_best_split.inc(start.elapsed());

	// If the root cannot be split, the update is a single leaf.
	let root_split = match root_outcome {
		SplitOutcome::Split => evaluated_split(arena, root)?,
		SplitOutcome::Unsplittable | SplitOutcome::Overflow => {
			let total_gain = if root_outcome == SplitOutcome::Overflow {
				log::warn!("the gain overflowed at the root, the update should be discarded");
				f64::INFINITY
			} else {
				0.0
			};
			update.set_split_count(dimension_index, 0)?;
			update.set_score_count(n_scores)?;
			let (_, scores) = update.output_mut(dimension_index);
			write_leaf_scores(
				loss,
				&arena.get(root).bin,
				histogram.hessians_tracked,
				options.zero_first_logit,
				&mut scores[..n_scores],
			);
			return Ok(GrowSummary {
				total_gain,
				n_leaves: 1,
			});
		}
	};

	// With two leaves allowed or only two bins, the root's split is the whole tree.
	if max_leaves == 2 {
		arena.get_mut(root).commit();
		update.set_split_count(dimension_index, 1)?;
		update.set_score_count(2 * n_scores)?;
		let (splits, scores) = update.output_mut(dimension_index);
		splits[0] = root_split.split_index;
		let (left_scores, right_scores) = scores.split_at_mut(n_scores);
		write_leaf_scores(
			loss,
			&arena.get(root_split.left_child_index()).bin,
			histogram.hessians_tracked,
			options.zero_first_logit,
			left_scores,
		);
		write_leaf_scores(
			loss,
			&arena.get(root_split.right_child_index()).bin,
			histogram.hessians_tracked,
			options.zero_first_logit,
			&mut right_scores[..n_scores],
		);
		return Ok(GrowSummary {
			total_gain: root_split.gain,
			n_leaves: 2,
		});
	}

	#[cfg(feature = "timing")]
	let start = std::time::Instant::now();
	queue.clear();
	queue.try_reserve(2 * max_leaves)?;
	let mut n_leaves = 1;
	let mut total_gain = Finite::zero();
	let mut node_index = root;
	loop {
		// A node is only part of the tree once it comes off the queue.
		let split = arena
			.get_mut(node_index)
			.commit()
			.ok_or_else(|| PartitionError::unexpected("a queued node had not been evaluated"))?;
		n_leaves += 1;
		let gain = Finite::new(split.gain)
			.map_err(|_| PartitionError::unexpected("a queued gain is not finite"))?;
		total_gain = total_gain
			.checked_add(gain)
			.map_err(|_| PartitionError::unexpected("the total gain overflowed"))?;
		// The children of the last split could never be split themselves.
		if n_leaves == max_leaves {
			break;
		}
		for &child_index in &[split.left_child_index(), split.right_child_index()] {
			if !arena.get(child_index).is_splittable() {
				arena.get_mut(child_index).reject();
				continue;
			}
			#[cfg(feature = "timing")]
			let start = std::time::Instant::now();
			let outcome = find_best_split(arena, child_index, histogram, loss, rng, ties, options);
			#[cfg(feature = "timing")]
			timing.find_best_split.inc(start.elapsed());
			match outcome {
				SplitOutcome::Split => {
					let child_split = evaluated_split(arena, child_index)?;
					let gain = Finite::new(child_split.gain).map_err(|_| {
						PartitionError::unexpected("an evaluated gain is not finite")
					})?;
					queue.push(QueueItem {
						gain,
						node_index: child_index,
					});
				}
				SplitOutcome::Unsplittable => {
					arena.get_mut(child_index).reject();
				}
				SplitOutcome::Overflow => {
					// Keep the tree grown so far and stop growing this branch.
					log::debug!(
						"the gain overflowed at node_index={}, treating it as a leaf",
						child_index
					);
					arena.get_mut(child_index).reject();
				}
			}
		}
		node_index = match queue.pop() {
			Some(item) => item.node_index,
			None => break,
		};
	}
	queue.clear();
	#[cfg(feature = "timing")]
	timing.grow_queue.inc(start.elapsed());

	update.set_split_count(dimension_index, n_leaves - 1)?;
	let n_values = n_scores
		.checked_mul(n_leaves)
		.ok_or(PartitionError::OutOfMemory)?;
	update.set_score_count(n_values)?;
	let (splits, scores) = update.output_mut(dimension_index);
	#[cfg(feature = "timing")]
	let start = std::time::Instant::now();
	let n_leaves_written = flatten(
		arena,
		root,
		loss,
		histogram.hessians_tracked,
		options.zero_first_logit,
		&mut splits[..n_leaves - 1],
		&mut scores[..n_values],
	)?;
	#[cfg(feature = "timing")]
	timing.flatten.inc(start.elapsed());
	debug_assert_eq!(n_leaves_written, n_leaves);

	#[cfg(feature = "timing")]
	timing.total.inc(start_total.elapsed());
	log::trace!(
		"exited grow: n_leaves={}, total_gain={}",
		n_leaves,
		total_gain
	);
	Ok(GrowSummary {
		total_gain: total_gain.get(),
		n_leaves,
	})
}

fn evaluated_split(arena: &NodeArena, node_index: usize) -> Result<SplitDecision> {
	match arena.get(node_index).state {
		NodeState::Evaluated(split) => Ok(split),
		_ => Err(PartitionError::unexpected(
			"a split node was not marked evaluated",
		)),
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		bin::{Bin, GradientPair},
		loss::{LogLossClassification, MseRegressionLoss},
		update::TermUpdate,
	};
	use rand::{Rng, SeedableRng};
	use rand_xoshiro::Xoshiro256Plus;

	#[test]
	fn test_queue_order() {
		let item = |gain: f64, node_index| QueueItem {
			gain: Finite::new(gain).unwrap(),
			node_index,
		};
		let mut queue = BinaryHeap::new();
		queue.push(item(1.0, 1));
		queue.push(item(3.0, 5));
		queue.push(item(3.0, 3));
		queue.push(item(2.0, 7));
		let order: Vec<usize> = std::iter::from_fn(|| queue.pop())
			.map(|item| item.node_index)
			.collect();
		assert_eq!(order, vec![3, 5, 7, 1]);
	}

	fn regression_histogram(bins: &[(usize, f64)]) -> Histogram {
		let bins = bins
			.iter()
			.map(|&(n_samples, sum_gradients)| Bin {
				n_samples,
				weight: n_samples as f64,
				gradient_pairs: vec![GradientPair {
					sum_gradients,
					sum_hessians: 0.0,
				}],
			})
			.collect();
		Histogram::new(bins, false)
	}

	fn grow_with<L: Loss>(
		histogram: &Histogram,
		loss: &L,
		options: &GrowOptions,
		seed: u64,
	) -> (GrowSummary, TermUpdate) {
		let mut rng = Xoshiro256Plus::seed_from_u64(seed);
		let mut buffers = GrowBuffers::new(options.max_leaves, histogram.n_scores()).unwrap();
		let mut update = TermUpdate::new(1, histogram.n_scores());
		let summary = grow(
			histogram,
			loss,
			&mut rng,
			options,
			&mut buffers,
			&mut update,
			0,
		)
		.unwrap();
		(summary, update)
	}

	fn options(max_leaves: usize, min_samples_leaf: usize) -> GrowOptions {
		GrowOptions {
			max_leaves,
			min_samples_leaf,
			..Default::default()
		}
	}

	fn symmetric_histogram() -> Histogram {
		regression_histogram(&[(10, -4.0), (10, -2.0), (10, 2.0), (10, 4.0)])
	}

	#[test]
	fn test_symmetric_single_split() {
		let (summary, update) = grow_with(
			&symmetric_histogram(),
			&MseRegressionLoss,
			&options(2, 5),
			0,
		);
		assert_eq!(summary.n_leaves, 2);
		assert!(summary.total_gain.is_finite() && summary.total_gain > 0.0);
		assert!((summary.total_gain - 3.6).abs() < 1e-12);
		assert_eq!(update.splits(0), &[2]);
		let left = update.leaf_scores(0)[0];
		let right = update.leaf_scores(1)[0];
		assert!(left > 0.0 && right < 0.0);
		assert!((left - 0.3).abs() < 1e-12);
		assert!((right + 0.3).abs() < 1e-12);
	}

	#[test]
	fn test_best_first_order() {
		// Both children of the root have the same gain, so the left one is split first.
		let (summary, update) = grow_with(
			&symmetric_histogram(),
			&MseRegressionLoss,
			&options(3, 5),
			0,
		);
		assert_eq!(summary.n_leaves, 3);
		assert_eq!(update.splits(0), &[1, 2]);
		assert!((summary.total_gain - 3.8).abs() < 1e-9);
		let scores = update.scores();
		assert!((scores[0] - 0.4).abs() < 1e-12);
		assert!((scores[1] - 0.2).abs() < 1e-12);
		assert!((scores[2] + 0.3).abs() < 1e-12);

		let (summary, update) = grow_with(
			&symmetric_histogram(),
			&MseRegressionLoss,
			&options(4, 5),
			0,
		);
		assert_eq!(summary.n_leaves, 4);
		assert_eq!(update.splits(0), &[1, 2, 3]);
		assert!((summary.total_gain - 4.0).abs() < 1e-9);
		let expected = [0.4, 0.2, -0.2, -0.4];
		for (score, expected) in update.scores().iter().zip(expected.iter()) {
			assert!((score - expected).abs() < 1e-12);
		}
	}

	#[test]
	fn test_two_bins_fast_path() {
		let histogram = regression_histogram(&[(5, -5.0), (5, 5.0)]);
		for max_leaves in 2..6 {
			let (summary, update) =
				grow_with(&histogram, &MseRegressionLoss, &options(max_leaves, 1), 0);
			assert_eq!(summary.n_leaves, 2);
			assert_eq!(summary.total_gain, 10.0);
			assert_eq!(update.splits(0), &[1]);
			assert_eq!(update.scores(), &[1.0, -1.0]);
		}
	}

	#[test]
	fn test_min_samples_leaf_above_half() {
		let (summary, update) = grow_with(
			&symmetric_histogram(),
			&MseRegressionLoss,
			&options(3, 21),
			0,
		);
		assert_eq!(summary.total_gain, 0.0);
		assert_eq!(summary.n_leaves, 1);
		assert!(update.splits(0).is_empty());
		assert_eq!(update.scores(), &[0.0]);
	}

	#[test]
	fn test_zero_gradients() {
		let histogram = regression_histogram(&[(3, 0.0), (0, 0.0), (4, 0.0), (2, 0.0), (6, 0.0)]);
		let (summary, update) = grow_with(&histogram, &MseRegressionLoss, &options(4, 1), 0);
		assert_eq!(summary.total_gain, 0.0);
		assert_eq!(summary.n_leaves, 1);
		assert!(update.splits(0).is_empty());
		assert_eq!(update.scores(), &[0.0]);
	}

	#[test]
	fn test_nan_at_root_reports_infinite_gain() {
		let histogram = regression_histogram(&[(5, 1.0), (5, f64::NAN), (5, -1.0)]);
		let (summary, update) = grow_with(&histogram, &MseRegressionLoss, &options(3, 1), 0);
		assert_eq!(summary.total_gain, f64::INFINITY);
		assert_eq!(summary.n_leaves, 1);
		assert!(update.splits(0).is_empty());
	}

	#[test]
	fn test_overflow_below_root_keeps_tree() {
		// The third bin's tiny weight only overflows the gain once it is alone on one side, which never happens at the root.
		let bin = |sum_gradients: f64, weight: f64| Bin {
			n_samples: 5,
			weight,
			gradient_pairs: vec![GradientPair {
				sum_gradients,
				sum_hessians: 0.0,
			}],
		};
		let histogram = Histogram::new(
			vec![
				bin(-1.0, 5.0),
				bin(1.0, 5.0),
				bin(1e150, 1e-10),
				bin(-1e150, 5.0),
			],
			false,
		);
		let options = options(4, 1);
		let mut rng = Xoshiro256Plus::seed_from_u64(0);
		let mut buffers = GrowBuffers::new(options.max_leaves, 1).unwrap();
		let mut update = TermUpdate::new(1, 1);
		let summary = grow(
			&histogram,
			&MseRegressionLoss,
			&mut rng,
			&options,
			&mut buffers,
			&mut update,
			0,
		)
		.unwrap();
		assert_eq!(summary.n_leaves, 2);
		assert!(summary.total_gain.is_finite() && summary.total_gain > 0.0);
		assert_eq!(update.splits(0), &[3]);
		assert!(update.scores().iter().all(|score| score.is_finite()));
		let root_split = match buffers.arena().get(0).state {
			NodeState::Branch(split) => split,
			state => panic!("unexpected state {:?}", state),
		};
		assert_eq!(
			buffers.arena().get(root_split.left_child_index()).state,
			NodeState::RejectedLeaf
		);
	}

	#[test]
	fn test_update_capacity_is_propagated() {
		let histogram = symmetric_histogram();
		let options = options(3, 5);
		let mut rng = Xoshiro256Plus::seed_from_u64(0);
		let mut buffers = GrowBuffers::new(options.max_leaves, 1).unwrap();
		let mut update = TermUpdate::new(1, 1).with_max_values(1);
		let result = grow(
			&histogram,
			&MseRegressionLoss,
			&mut rng,
			&options,
			&mut buffers,
			&mut update,
			0,
		);
		assert_eq!(
			result,
			Err(PartitionError::UpdateCapacity {
				requested: 2,
				limit: 1
			})
		);
	}

	#[test]
	fn test_ties_are_seeded_and_uniform() {
		let histogram = regression_histogram(&[(5, -5.0), (0, 0.0), (0, 0.0), (5, 5.0)]);
		let options = options(2, 1);
		let split = |seed| {
			let (summary, update) = grow_with(&histogram, &MseRegressionLoss, &options, seed);
			assert_eq!(summary.n_leaves, 2);
			update.splits(0)[0]
		};
		for seed in 0..16 {
			assert_eq!(split(seed), split(seed));
		}
		let mut counts = [0usize; 4];
		for seed in 0..600 {
			counts[split(seed)] += 1;
		}
		assert_eq!(counts[0], 0);
		for &count in &counts[1..] {
			assert!(count > 150, "{:?}", counts);
		}
	}

	#[test]
	fn test_zero_first_logit() {
		let class_gradients = [
			[-1.0, 1.0, 0.5],
			[-0.5, 0.75, -0.25],
			[1.0, -1.0, 0.5],
			[0.75, -0.5, -0.25],
		];
		let bins = class_gradients
			.iter()
			.map(|gradients| Bin {
				n_samples: 4,
				weight: 4.0,
				gradient_pairs: gradients
					.iter()
					.map(|&sum_gradients| GradientPair {
						sum_gradients,
						sum_hessians: 0.5,
					})
					.collect(),
			})
			.collect();
		let histogram = Histogram::new(bins, true);
		let raw_options = options(3, 1);
		let zeroed_options = GrowOptions {
			zero_first_logit: true,
			..raw_options.clone()
		};
		let (raw_summary, raw) = grow_with(&histogram, &LogLossClassification, &raw_options, 3);
		let (zeroed_summary, zeroed) =
			grow_with(&histogram, &LogLossClassification, &zeroed_options, 3);
		assert_eq!(raw_summary, zeroed_summary);
		assert_eq!(raw.splits(0), zeroed.splits(0));
		for leaf_index in 0..raw_summary.n_leaves {
			let raw = raw.leaf_scores(leaf_index);
			let zeroed = zeroed.leaf_scores(leaf_index);
			assert_eq!(zeroed[0], 0.0);
			for (raw_score, zeroed_score) in raw.iter().zip(zeroed.iter()) {
				assert!((raw_score - raw[0] - zeroed_score).abs() < 1e-12);
			}
		}
	}

	#[test]
	fn test_random_histograms() {
		let mut rng = Xoshiro256Plus::seed_from_u64(42);
		let mut buffers = GrowBuffers::new(8, 1).unwrap();
		for _ in 0..500 {
			let n_bins = rng.gen_range(2, 13);
			let bins: Vec<(usize, f64)> = (0..n_bins)
				.map(|bin_index| {
					let n_samples = if bin_index == 0 {
						rng.gen_range(1, 6)
					} else {
						rng.gen_range(0, 6)
					};
					let sum_gradients = if n_samples == 0 {
						0.0
					} else {
						rng.gen_range(-1.0, 1.0) * n_samples as f64
					};
					(n_samples, sum_gradients)
				})
				.collect();
			let histogram = regression_histogram(&bins);
			let options = options(rng.gen_range(2, 9), rng.gen_range(1, 5));
			let mut update = TermUpdate::new(1, 1);
			let summary = grow(
				&histogram,
				&MseRegressionLoss,
				&mut rng,
				&options,
				&mut buffers,
				&mut update,
				0,
			)
			.unwrap();

			// The shape of the update.
			assert!(summary.n_leaves >= 1 && summary.n_leaves <= options.max_leaves);
			let splits = update.splits(0);
			assert_eq!(splits.len(), summary.n_leaves - 1);
			assert_eq!(update.scores().len(), summary.n_leaves);
			assert!(splits.windows(2).all(|pair| pair[0] < pair[1]));
			assert!(splits.iter().all(|&split| split > 0 && split < n_bins));

			// Every leaf of a split tree has enough samples.
			if summary.n_leaves > 1 {
				let mut boundaries = vec![0];
				boundaries.extend_from_slice(splits);
				boundaries.push(n_bins);
				for range in boundaries.windows(2) {
					let n_samples: usize = bins[range[0]..range[1]].iter().map(|bin| bin.0).sum();
					assert!(n_samples >= options.min_samples_leaf);
				}
			}

			// The gain is the sum of the committed splits, and children add up to their parent.
			assert!(summary.total_gain.is_finite() && summary.total_gain >= 0.0);
			let arena = buffers.arena();
			assert!(arena.len() <= NodeArena::capacity_for(options.max_leaves).unwrap());
			let mut committed_gain = 0.0;
			let mut n_branches = 0;
			for node_index in 0..arena.len() {
				let node = arena.get(node_index);
				if let NodeState::Branch(split) = node.state {
					n_branches += 1;
					committed_gain += split.gain;
					let left = &arena.get(split.left_child_index()).bin;
					let right = &arena.get(split.right_child_index()).bin;
					assert_eq!(left.n_samples + right.n_samples, node.bin.n_samples);
					let sum_gradients = left.gradient_pairs[0].sum_gradients
						+ right.gradient_pairs[0].sum_gradients;
					assert!((sum_gradients - node.bin.gradient_pairs[0].sum_gradients).abs() < 1e-9);
				}
			}
			assert_eq!(n_branches, summary.n_leaves - 1);
			assert!((committed_gain - summary.total_gain).abs() <= 1e-9 * (1.0 + committed_gain));
		}
	}

	#[test]
	fn test_max_leaves_above_bin_count() {
		// Buffers sized for the number of bins are enough however large max_leaves is.
		let histogram = symmetric_histogram();
		let options = options(usize::MAX, 5);
		let mut rng = Xoshiro256Plus::seed_from_u64(0);
		let mut buffers = GrowBuffers::new(histogram.n_bins(), 1).unwrap();
		let mut update = TermUpdate::new(1, 1);
		let summary = grow(
			&histogram,
			&MseRegressionLoss,
			&mut rng,
			&options,
			&mut buffers,
			&mut update,
			0,
		)
		.unwrap();
		assert_eq!(summary.n_leaves, 4);
		assert_eq!(update.splits(0), &[1, 2, 3]);
		assert!(buffers.arena().len() <= NodeArena::capacity_for(4).unwrap());
		assert!(matches!(
			GrowBuffers::new(usize::MAX, 1),
			Err(PartitionError::OutOfMemory)
		));
	}
}
