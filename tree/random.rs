/// The source of randomness used to break ties between equally good splits. Implementations must be deterministic given their seed so that training runs can be reproduced.
pub trait DrawBelow {
	/// Return an index drawn uniformly from `0..bound`. `bound` is always at least 1.
	fn draw_below(&mut self, bound: usize) -> usize;
}

impl<R> DrawBelow for R
where
	R: rand::Rng,
{
	fn draw_below(&mut self, bound: usize) -> usize {
		debug_assert!(bound > 0);
		self.gen_range(0, bound)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rand::SeedableRng;
	use rand_xoshiro::Xoshiro256Plus;

	#[test]
	fn test_same_seed_same_draws() {
		let mut a = Xoshiro256Plus::seed_from_u64(42);
		let mut b = Xoshiro256Plus::seed_from_u64(42);
		let a: Vec<usize> = (0..32).map(|_| a.draw_below(7)).collect();
		let b: Vec<usize> = (0..32).map(|_| b.draw_below(7)).collect();
		assert_eq!(a, b);
		assert!(a.iter().all(|&i| i < 7));
	}
}
