use itertools::izip;
use serde::{Deserialize, Serialize};

/// The gradient statistics for one score of a bin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GradientPair {
	pub sum_gradients: f64,
	/// This is zero when the histogram does not track hessians. In that case the bin's weight stands in for the hessian.
	#[serde(default)]
	pub sum_hessians: f64,
}

/// A `Bin` holds the sufficient statistics of all the training examples whose feature value falls into it. The same type is used for running accumulators, which are only ever modified a whole bin at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bin {
	pub n_samples: usize,
	pub weight: f64,
	/// One entry per score. Regression and binary classification have one score, multiclass classification has one per class.
	pub gradient_pairs: Vec<GradientPair>,
}

impl Bin {
	/// Create an empty bin with `n_scores` gradient pairs.
	pub fn new(n_scores: usize) -> Bin {
		Bin {
			n_samples: 0,
			weight: 0.0,
			gradient_pairs: vec![GradientPair::default(); n_scores],
		}
	}

	pub fn n_scores(&self) -> usize {
		self.gradient_pairs.len()
	}

	pub fn zero(&mut self) {
		self.n_samples = 0;
		self.weight = 0.0;
		for pair in self.gradient_pairs.iter_mut() {
			*pair = GradientPair::default();
		}
	}

	/// Overwrite this bin with `other` without reallocating.
	pub fn copy_from(&mut self, other: &Bin) {
		debug_assert_eq!(self.n_scores(), other.n_scores());
		self.n_samples = other.n_samples;
		self.weight = other.weight;
		self.gradient_pairs.copy_from_slice(&other.gradient_pairs);
	}

	pub fn add(&mut self, other: &Bin) {
		debug_assert_eq!(self.n_scores(), other.n_scores());
		self.n_samples += other.n_samples;
		self.weight += other.weight;
		for (pair, other) in izip!(self.gradient_pairs.iter_mut(), other.gradient_pairs.iter()) {
			pair.sum_gradients += other.sum_gradients;
			pair.sum_hessians += other.sum_hessians;
		}
	}

	/// Subtract `other` from this bin. The floating point fields may end up slightly negative when they should be zero.
	pub fn subtract(&mut self, other: &Bin) {
		debug_assert_eq!(self.n_scores(), other.n_scores());
		debug_assert!(self.n_samples >= other.n_samples);
		self.n_samples -= other.n_samples;
		self.weight -= other.weight;
		for (pair, other) in izip!(self.gradient_pairs.iter_mut(), other.gradient_pairs.iter()) {
			pair.sum_gradients -= other.sum_gradients;
			pair.sum_hessians -= other.sum_hessians;
		}
	}

	/// The value passed to the loss as the sum of hessians for `score_index`.
	#[inline(always)]
	pub fn hessian_or_weight(&self, score_index: usize, hessians_tracked: bool) -> f64 {
		if hessians_tracked {
			self.gradient_pairs[score_index].sum_hessians
		} else {
			self.weight
		}
	}
}

/// The read-only input to tree growth: the bins of one feature in bin index order, together with their sum.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Histogram {
	pub bins: Vec<Bin>,
	/// Is `sum_hessians` populated? If not, each bin's weight is used as its hessian.
	pub hessians_tracked: bool,
	#[serde(skip)]
	total: Bin,
}

impl Histogram {
	/// Build a histogram, computing the total over all bins.
	pub fn new(bins: Vec<Bin>, hessians_tracked: bool) -> Histogram {
		let mut histogram = Histogram {
			bins,
			hessians_tracked,
			total: Bin::default(),
		};
		histogram.compute_total();
		histogram
	}

	/// Recompute the total. Call this after deserializing a histogram.
	pub fn compute_total(&mut self) {
		let n_scores = self.bins.first().map(Bin::n_scores).unwrap_or(0);
		let mut total = Bin::new(n_scores);
		for bin in self.bins.iter() {
			total.add(bin);
		}
		self.total = total;
	}

	pub fn total(&self) -> &Bin {
		&self.total
	}

	pub fn n_bins(&self) -> usize {
		self.bins.len()
	}

	pub fn n_scores(&self) -> usize {
		self.total.n_scores()
	}
}
