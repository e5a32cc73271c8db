//! Numeric helpers and argument-wise function composition.
//!
//! The composition combinators adapt a unary transform `g` to each argument of an *N*-ary
//! function `f`, e.g., [`compose2`] turns `f(b, b)` into `|a, a| f(g(a), g(a))`. This is how a
//! key-comparing comparator is derived from a key function (see [`sort_by`]).
//!
//! [`sort_by`]: crate::array::sort_by

use num_traits::Float;

/// Returns positive infinity of the float type `T`.
///
/// # Examples
///
/// ```
/// use ndarray_seq::basics::infinity;
///
/// assert_eq!(infinity::<f64>(), f64::INFINITY);
/// assert!(infinity::<f32>() > f32::MAX);
/// ```
#[inline]
#[must_use]
pub fn infinity<T: Float>() -> T {
	T::infinity()
}

/// Linearly interpolates between `from` and `to` by `t`.
///
/// Yields `from` for `t == 0` and `to` for `t == 1`. Values of `t` outside `[0, 1]` extrapolate.
///
/// # Examples
///
/// ```
/// use ndarray_seq::basics::lerp;
///
/// assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
/// assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
/// assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
/// assert_eq!(lerp(10.0, 20.0, 2.0), 30.0);
/// ```
#[inline]
#[must_use]
pub fn lerp<T: Float>(from: T, to: T, t: T) -> T {
	from + (to - from) * t
}

/// Linearly remaps `value` from the range `(from_lo, from_hi)` onto `(to_lo, to_hi)`.
///
/// Neither range has to be ascending. A degenerate source range (`from_lo == from_hi`) is not
/// checked and yields a non-finite result following IEEE division.
///
/// # Examples
///
/// ```
/// use ndarray_seq::basics::range_map;
///
/// assert_eq!(range_map(5.0, (0.0, 10.0), (-1.0, 1.0)), 0.0);
/// assert_eq!(range_map(0.0, (0.0, 10.0), (100.0, 200.0)), 100.0);
/// // Reversed target range.
/// assert_eq!(range_map(2.5, (0.0, 10.0), (1.0, 0.0)), 0.75);
/// ```
#[inline]
#[must_use]
pub fn range_map<T: Float>(value: T, (from_lo, from_hi): (T, T), (to_lo, to_hi): (T, T)) -> T {
	lerp(to_lo, to_hi, (value - from_lo) / (from_hi - from_lo))
}

/// Composes `f` after `g`, i.e., returns `|a| f(g(a))`.
///
/// # Examples
///
/// ```
/// use ndarray_seq::basics::compose;
///
/// let len_plus_one = compose(|n: usize| n + 1, |s: &str| s.len());
/// assert_eq!(len_plus_one("four"), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(&A) -> C
where
	A: ?Sized,
	F: Fn(B) -> C,
	G: Fn(&A) -> B,
{
	move |a: &A| f(g(a))
}

/// Applies `g` to each of both arguments before passing them to `f`.
///
/// The returned closure accepts arguments of any lifetime, so it can be passed directly as a
/// comparator.
///
/// # Examples
///
/// ```
/// use ndarray_seq::basics::compose2;
/// use core::cmp::Ordering;
///
/// let by_len = compose2(|a: usize, b: usize| a.cmp(&b), |s: &&str| s.len());
/// assert_eq!(by_len(&"ab", &"abc"), Ordering::Less);
///
/// let mut words = ["ccc", "a", "bb"];
/// words.sort_by(&by_len);
/// assert_eq!(words, ["a", "bb", "ccc"]);
/// ```
#[inline]
pub fn compose2<A, B, C, F, G>(f: F, g: G) -> impl Fn(&A, &A) -> C
where
	A: ?Sized,
	F: Fn(B, B) -> C,
	G: Fn(&A) -> B,
{
	move |a1: &A, a2: &A| f(g(a1), g(a2))
}

/// Applies `g` to each of three arguments before passing them to `f`.
#[inline]
pub fn compose3<A, B, C, F, G>(f: F, g: G) -> impl Fn(&A, &A, &A) -> C
where
	A: ?Sized,
	F: Fn(B, B, B) -> C,
	G: Fn(&A) -> B,
{
	move |a1: &A, a2: &A, a3: &A| f(g(a1), g(a2), g(a3))
}

/// Applies `g` to each of four arguments before passing them to `f`.
#[inline]
pub fn compose4<A, B, C, F, G>(f: F, g: G) -> impl Fn(&A, &A, &A, &A) -> C
where
	A: ?Sized,
	F: Fn(B, B, B, B) -> C,
	G: Fn(&A) -> B,
{
	move |a1: &A, a2: &A, a3: &A, a4: &A| f(g(a1), g(a2), g(a3), g(a4))
}

/// Applies `g` to each of five arguments before passing them to `f`.
///
/// # Examples
///
/// ```
/// use ndarray_seq::basics::compose5;
///
/// let sum_of_squares = compose5(
///     |a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e,
///     |x: &i32| x * x,
/// );
/// assert_eq!(sum_of_squares(&1, &2, &3, &4, &5), 55);
/// ```
#[inline]
pub fn compose5<A, B, C, F, G>(f: F, g: G) -> impl Fn(&A, &A, &A, &A, &A) -> C
where
	A: ?Sized,
	F: Fn(B, B, B, B, B) -> C,
	G: Fn(&A) -> B,
{
	move |a1: &A, a2: &A, a3: &A, a4: &A, a5: &A| f(g(a1), g(a2), g(a3), g(a4), g(a5))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{compose, compose2, compose3, compose4, infinity, lerp, range_map};
	use core::cmp::Ordering;
	use quickcheck::TestResult;
	use quickcheck_macros::quickcheck;

	#[test]
	fn infinite() {
		assert!(infinity::<f64>().is_infinite());
		assert!(infinity::<f64>().is_sign_positive());
		assert_eq!(-infinity::<f32>(), f32::NEG_INFINITY);
	}

	#[test]
	fn degenerate_range() {
		assert!(!range_map(1.0_f64, (2.0, 2.0), (0.0, 1.0)).is_finite());
	}

	#[test]
	fn composed() {
		let negated_len = compose(|n: usize| -(n as isize), |s: &str| s.len());
		assert_eq!(negated_len("abc"), -3);

		let by_abs = compose2(|a: i32, b: i32| a.cmp(&b), |x: &i32| x.abs());
		assert_eq!(by_abs(&-3, &2), Ordering::Greater);
		assert_eq!(by_abs(&-2, &2), Ordering::Equal);

		let all_even = compose3(|a: bool, b: bool, c: bool| a && b && c, |x: &u8| x % 2 == 0);
		assert!(all_even(&2, &4, &6));
		assert!(!all_even(&2, &3, &6));

		let concat = compose4(
			|a: String, b: String, c: String, d: String| a + &b + &c + &d,
			|x: &u8| x.to_string(),
		);
		assert_eq!(concat(&1, &2, &3, &4), "1234");
	}

	#[quickcheck]
	fn lerp_endpoints(from: f64, to: f64) -> TestResult {
		if !from.is_finite() || !to.is_finite() || !(to - from).is_finite() {
			return TestResult::discard();
		}
		let tolerance = 1e-12 * from.abs().max(to.abs()).max(1.0);
		TestResult::from_bool(
			lerp(from, to, 0.0) == from && (lerp(from, to, 1.0) - to).abs() <= tolerance,
		)
	}

	#[quickcheck]
	fn range_map_onto_itself(value: i16, lo: i16, hi: i16) -> TestResult {
		if lo == hi {
			return TestResult::discard();
		}
		let (value, lo, hi) = (f64::from(value), f64::from(lo), f64::from(hi));
		let mapped = range_map(value, (lo, hi), (lo, hi));
		TestResult::from_bool((mapped - value).abs() <= 1e-6)
	}
}
