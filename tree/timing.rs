use num_traits::ToPrimitive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Cumulative time spent in each phase of `grow`, across every call that used the same buffers.
#[derive(Debug, Default)]
pub struct Timing {
	pub find_best_split: TimingDuration,
	pub grow_queue: TimingDuration,
	pub flatten: TimingDuration,
	pub total: TimingDuration,
}

#[derive(Default)]
pub struct TimingDuration(AtomicU64);

impl Timing {
	pub fn new() -> Timing {
		Timing::default()
	}
}

impl TimingDuration {
	pub fn new() -> Self {
		Self(AtomicU64::new(0))
	}
	pub fn get(&self) -> Duration {
		Duration::from_nanos(self.0.load(Ordering::Relaxed))
	}
	pub fn inc(&self, value: Duration) -> u64 {
		self.0.fetch_add(
			value.as_nanos().to_u64().unwrap_or(u64::MAX),
			Ordering::Relaxed,
		)
	}
}

impl std::fmt::Debug for TimingDuration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.get())
	}
}
