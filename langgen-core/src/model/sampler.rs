use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of every random decision taken by a language.
///
/// The generator never touches a global RNG: all draws go through the
/// `Sampler` it owns, so a fixed seed replays the exact same sequence of
/// syllables, words and names.
#[derive(Clone, Debug)]
pub struct Sampler {
	rng: StdRng,
}

impl Sampler {
	/// Creates a deterministic sampler.
	pub fn from_seed(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Creates a sampler seeded from the thread-local RNG.
	pub fn from_entropy() -> Self {
		Self { rng: StdRng::from_rng(&mut rand::rng()) }
	}

	/// Draws an index in `[0, len)` skewed by `exponent`.
	///
	/// A uniform `u` in `[0, 1)` is raised to `exponent` before scaling,
	/// so `exponent == 1.0` is uniform and larger exponents favour the
	/// front of the sequence.
	///
	/// `len` must be non-zero.
	pub fn choose_index(&mut self, len: usize, exponent: f64) -> usize {
		let u: f64 = self.rng.random();
		let index = (u.powf(exponent) * len as f64).floor() as usize;
		// Guards against rounding up to `len` on the last ulp
		index.min(len.saturating_sub(1))
	}

	/// Picks an element with `choose_index`.
	///
	/// Returns `None` if `items` is empty.
	pub fn choose_weighted<'a, T>(&mut self, items: &'a [T], exponent: f64) -> Option<&'a T> {
		if items.is_empty() {
			return None;
		}
		let index = self.choose_index(items.len(), exponent);
		items.get(index)
	}

	/// Uniform integer in `[lo, hi)`.
	///
	/// A degenerate range (`hi <= lo`) yields `lo`.
	pub fn random_range(&mut self, lo: usize, hi: usize) -> usize {
		if hi <= lo {
			return lo;
		}
		self.rng.random_range(lo..hi)
	}

	/// Uniform integer in `[0, hi)`; `below(0)` is `0`.
	pub fn below(&mut self, hi: usize) -> usize {
		self.random_range(0, hi)
	}

	/// Returns `true` with probability `p`.
	pub fn chance(&mut self, p: f64) -> bool {
		self.rng.random::<f64>() < p
	}

	/// Shuffles `items` in place.
	pub fn shuffle<T>(&mut self, items: &mut [T]) {
		items.shuffle(&mut self.rng);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TRIALS: usize = 20_000;

	fn histogram(sampler: &mut Sampler, len: usize, exponent: f64) -> Vec<usize> {
		let mut counts = vec![0; len];
		for _ in 0..TRIALS {
			counts[sampler.choose_index(len, exponent)] += 1;
		}
		counts
	}

	#[test]
	fn exponent_one_is_roughly_uniform() {
		let mut sampler = Sampler::from_seed(7);
		let counts = histogram(&mut sampler, 4, 1.0);
		let expected = TRIALS / 4;
		for count in counts {
			assert!(count.abs_diff(expected) < expected / 10, "count {count} too far from {expected}");
		}
	}

	#[test]
	fn larger_exponent_favours_low_indices() {
		let mut sampler = Sampler::from_seed(11);
		let counts = histogram(&mut sampler, 5, 2.0);
		for pair in counts.windows(2) {
			assert!(pair[0] > pair[1], "{counts:?} is not decreasing");
		}
	}

	#[test]
	fn below_stays_in_bounds() {
		let mut sampler = Sampler::from_seed(3);
		let mut seen = [false; 5];
		for _ in 0..1_000 {
			let n = sampler.below(5);
			assert!(n < 5);
			seen[n] = true;
		}
		assert!(seen.iter().all(|s| *s));
	}

	#[test]
	fn degenerate_ranges_return_lower_bound() {
		let mut sampler = Sampler::from_seed(0);
		assert_eq!(sampler.below(0), 0);
		assert_eq!(sampler.random_range(4, 4), 4);
		assert_eq!(sampler.random_range(2, 3), 2);
	}

	#[test]
	fn choose_weighted_on_empty_slice() {
		let mut sampler = Sampler::from_seed(0);
		let empty: [u8; 0] = [];
		assert!(sampler.choose_weighted(&empty, 2.0).is_none());
	}

	#[test]
	fn same_seed_same_sequence() {
		let mut a = Sampler::from_seed(42);
		let mut b = Sampler::from_seed(42);
		let xs: Vec<usize> = (0..32).map(|_| a.below(1000)).collect();
		let ys: Vec<usize> = (0..32).map(|_| b.below(1000)).collect();
		assert_eq!(xs, ys);
	}
}
