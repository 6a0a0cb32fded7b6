/*!
This crate provides the `Finite` type, a floating point number that is known to be neither infinite nor `NaN`. Because `NaN` is excluded, `Finite` has a total order, so it can be used as a key in ordered collections such as `std::collections::BinaryHeap`, where a `NaN` would silently corrupt the ordering.

# Example

```
use ebm_finite::Finite;

let gain = Finite::<f64>::new(1.5).unwrap();
assert!(Finite::new(gain.get() / 0.0).is_err());
assert!(Finite::new(f64::NAN).is_err());
```
*/

use num_traits::Float;
use std::cmp::Ordering;
use thiserror::Error;

/// A floating point number that is neither infinite nor `NaN`.
#[derive(Clone, Copy, Debug)]
pub struct Finite<T>(T)
where
	T: Float;

/// The error returned when constructing a `Finite` from an infinite or `NaN` value.
#[derive(Debug, Error, PartialEq)]
#[error("not finite")]
pub struct NotFiniteError;

impl<T> Finite<T>
where
	T: Float,
{
	pub fn new(value: T) -> Result<Self, NotFiniteError> {
		if value.is_finite() {
			Ok(Self(value))
		} else {
			Err(NotFiniteError)
		}
	}

	pub fn zero() -> Self {
		Self(T::zero())
	}

	pub fn get(self) -> T {
		self.0
	}

	/// Add two finite values, failing if the sum overflows to infinity.
	pub fn checked_add(self, other: Self) -> Result<Self, NotFiniteError> {
		Self::new(self.0 + other.0)
	}
}

impl<T> std::fmt::Display for Finite<T>
where
	T: Float + std::fmt::Display,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl<T> PartialEq for Finite<T>
where
	T: Float,
{
	fn eq(&self, other: &Self) -> bool {
		self.0.eq(&other.0)
	}
}

impl<T> Eq for Finite<T> where T: Float {}

impl<T> PartialOrd for Finite<T>
where
	T: Float,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> Ord for Finite<T>
where
	T: Float,
{
	fn cmp(&self, other: &Self) -> Ordering {
		// Both values are finite, so the comparison is always defined.
		self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
	}
}

/// Use this trait to conveniently convert a floating point number to its `Finite` counterpart.
pub trait ToFinite<T>
where
	T: Float,
{
	fn to_finite(self) -> Result<Finite<T>, NotFiniteError>;
}

impl<T> ToFinite<T> for T
where
	T: Float,
{
	fn to_finite(self) -> Result<Finite<T>, NotFiniteError> {
		Finite::new(self)
	}
}
