/**
A `Loss` supplies the two formulas tree growth needs from the objective being boosted. Both take the summed gradients of a partition and its summed hessians, or its summed weight when hessians are not tracked.

`NaN` inputs must produce `NaN` outputs so that overflow can be detected by the caller.
*/
pub trait Loss {
	/// The contribution of one partition to the gain of a split. It is non-negative for valid inputs.
	fn partial_gain(&self, sum_gradients: f64, sum_hessians: f64) -> f64;
	/// The raw score update for a leaf, before any learning rate is applied.
	fn single_partition_update(&self, sum_gradients: f64, sum_hessians: f64) -> f64;
}

/// Mean squared error regression. The hessian of the squared error is constant, so the weight of the partition is used in its place.
#[derive(Clone, Copy, Debug, Default)]
pub struct MseRegressionLoss;

impl Loss for MseRegressionLoss {
	#[inline(always)]
	fn partial_gain(&self, sum_gradients: f64, sum_weight: f64) -> f64 {
		if sum_weight == 0.0 {
			return 0.0;
		}
		sum_gradients * sum_gradients / sum_weight
	}

	#[inline(always)]
	fn single_partition_update(&self, sum_gradients: f64, sum_weight: f64) -> f64 {
		if sum_weight == 0.0 {
			return 0.0;
		}
		-sum_gradients / sum_weight
	}
}

/// Log loss for binary and multiclass classification, taking one Newton step per score.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogLossClassification;

impl Loss for LogLossClassification {
	#[inline(always)]
	fn partial_gain(&self, sum_gradients: f64, sum_hessians: f64) -> f64 {
		// Subtraction noise can leave an empty partition with a tiny or negative hessian.
		if sum_hessians < f64::MIN_POSITIVE {
			return 0.0;
		}
		sum_gradients * sum_gradients / sum_hessians
	}

	#[inline(always)]
	fn single_partition_update(&self, sum_gradients: f64, sum_hessians: f64) -> f64 {
		if sum_hessians < f64::MIN_POSITIVE {
			return 0.0;
		}
		-sum_gradients / sum_hessians
	}
}
