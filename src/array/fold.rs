use ndarray::{ArrayBase, Data, Ix1, s};
use num_traits::{One, Zero};

/// Folds `v` from the left, starting with its first element as accumulator.
///
/// Calls `f(acc, x)` for every following element `x`. Returns `None` if `v` is empty, hence no
/// identity element is required.
///
/// Unlike [`foldr_safe`], the reducer takes the accumulator first, as [`Iterator::fold`] does.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::foldl_safe, ndarray::{Array1, arr1}};
///
/// assert_eq!(foldl_safe(&arr1(&[1, 2, 3]), |acc, x| acc + x), Some(6));
/// assert_eq!(foldl_safe(&arr1(&[8, 2, 2]), |acc, x| acc / x), Some(2));
/// assert_eq!(foldl_safe(&Array1::<i32>::zeros(0), |acc, x| acc + x), None);
/// ```
#[must_use]
pub fn foldl_safe<A, S, F>(v: &ArrayBase<S, Ix1>, mut f: F) -> Option<A>
where
	A: Clone,
	S: Data<Elem = A>,
	F: FnMut(A, &A) -> A,
{
	let mut iter = v.iter();
	let first = iter.next()?.clone();
	Some(iter.fold(first, |acc, x| f(acc, x)))
}

/// Folds `v` from the right, starting with its first element as accumulator.
///
/// Calls `f(x, acc)` for every following element `x`, walking from the back towards the second
/// element. Returns `None` if `v` is empty.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::foldr_safe, ndarray::arr1};
///
/// // (10 - 2) - 1
/// assert_eq!(foldr_safe(&arr1(&[10, 1, 2]), |x, acc| acc - x), Some(7));
/// // 8 / 2 / 4
/// assert_eq!(foldr_safe(&arr1(&[8, 4, 2]), |x, acc| acc / x), Some(1));
/// ```
#[must_use]
pub fn foldr_safe<A, S, F>(v: &ArrayBase<S, Ix1>, mut f: F) -> Option<A>
where
	A: Clone,
	S: Data<Elem = A>,
	F: FnMut(&A, A) -> A,
{
	let first = v.get(0)?.clone();
	Some(v.slice(s![1..]).iter().rev().fold(first, |acc, x| f(x, acc)))
}

/// Returns the sum of all elements, zero if `v` is empty.
#[must_use]
pub fn sum<A, S>(v: &ArrayBase<S, Ix1>) -> A
where
	A: Clone + Zero,
	S: Data<Elem = A>,
{
	v.iter().fold(A::zero(), |acc, x| acc + x.clone())
}

/// Returns the product of all elements, one if `v` is empty.
#[must_use]
pub fn product<A, S>(v: &ArrayBase<S, Ix1>) -> A
where
	A: Clone + One,
	S: Data<Elem = A>,
{
	v.iter().fold(A::one(), |acc, x| acc * x.clone())
}

/// Returns the least element, or `None` if `v` is empty.
///
/// Of several least elements, the first one is returned.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::minimum, ndarray::arr1};
///
/// assert_eq!(minimum(&arr1(&[1, 5, 3])), Some(1));
/// ```
#[must_use]
pub fn minimum<A, S>(v: &ArrayBase<S, Ix1>) -> Option<A>
where
	A: Clone + Ord,
	S: Data<Elem = A>,
{
	foldl_safe(v, |acc, x| if *x < acc { x.clone() } else { acc })
}

/// Returns the greatest element, or `None` if `v` is empty.
///
/// Of several greatest elements, the first one is returned.
#[must_use]
pub fn maximum<A, S>(v: &ArrayBase<S, Ix1>) -> Option<A>
where
	A: Clone + Ord,
	S: Data<Elem = A>,
{
	foldl_safe(v, |acc, x| if *x > acc { x.clone() } else { acc })
}
