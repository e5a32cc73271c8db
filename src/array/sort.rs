use crate::{basics::compose2, quick_sort::quick_sort};
use core::cmp::Ordering;
use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Returns the elements of `v` sorted in ascending order.
///
/// See [`sort_with`] for the algorithm and its guarantees.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::sort, ndarray::arr1};
///
/// assert_eq!(sort(&arr1(&[3, 1, 5])), arr1(&[1, 3, 5]));
/// ```
#[inline]
#[must_use]
pub fn sort<A, S>(v: &ArrayBase<S, Ix1>) -> Array1<A>
where
	A: Clone + Ord,
	S: Data<Elem = A>,
{
	quick_sort(v.view(), A::cmp)
}

/// Returns the elements of `v` sorted in ascending order of the keys `f` derives from them.
///
/// Elements with equal keys are not kept in input order, see [`sort_with`].
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::sort_by, ndarray::arr1};
///
/// let words = arr1(&["cherry", "fig", "banana"]);
/// assert_eq!(sort_by(&words, |word| word.len()), arr1(&["fig", "banana", "cherry"]));
/// ```
#[inline]
#[must_use]
pub fn sort_by<A, K, S, F>(v: &ArrayBase<S, Ix1>, f: F) -> Array1<A>
where
	A: Clone,
	K: Ord,
	S: Data<Elem = A>,
	F: Fn(&A) -> K,
{
	quick_sort(v.view(), compose2(|a: K, b: K| a.cmp(&b), f))
}

/// Returns the elements of `v` sorted with the three-way comparator `compare`.
///
/// The comparator must define a total order, otherwise the order of the returned elements is
/// unspecified.
///
/// This sort is not stable (i.e., may reorder equal elements) and *O*(*n* \* log(*n*)) on
/// average but *O*(*n*²) worst-case.
///
/// # Current Implementation
///
/// The current algorithm is a quicksort taking the first element as pivot. The remaining
/// elements are partitioned in their original order into those comparing less than or equal to
/// the pivot and those comparing greater, and both partitions are sorted the same way. Hence,
/// already sorted input hits the worst case. Elements equal to a pivot end up before it, so equal
/// elements come out in reverse input order.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::sort_with, ndarray::arr1};
///
/// let descending = sort_with(&arr1(&[3, 1, 5]), |a, b| b.cmp(a));
/// assert_eq!(descending, arr1(&[5, 3, 1]));
///
/// // `f64` isn't `Ord`, but `total_cmp` is a total order.
/// let floats = sort_with(&arr1(&[5.0, -0.0, 0.0, 1.5]), f64::total_cmp);
/// assert_eq!(floats.to_vec(), [-0.0, 0.0, 1.5, 5.0]);
/// ```
#[inline]
#[must_use]
pub fn sort_with<A, S, F>(v: &ArrayBase<S, Ix1>, compare: F) -> Array1<A>
where
	A: Clone,
	S: Data<Elem = A>,
	F: FnMut(&A, &A) -> Ordering,
{
	quick_sort(v.view(), compare)
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{sort, sort_by, sort_with};
	use core::cmp::Reverse;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted_permutation(xs: Vec<i32>) {
		let array = Array1::from_vec(xs.clone());
		let sorted = sort(&array);
		assert!(sorted.windows(2).into_iter().all(|w| w[0] <= w[1]));
		let mut expected = xs;
		expected.sort_unstable();
		assert_eq!(sorted.to_vec(), expected);
	}

	#[quickcheck]
	fn by_identity(xs: Vec<u16>) {
		let array = Array1::from_vec(xs);
		assert_eq!(sort_by(&array, |&x| x), sort(&array));
		assert_eq!(sort_with(&array, u16::cmp), sort(&array));
	}

	#[quickcheck]
	fn by_reversed_key(xs: Vec<u16>) {
		let array = Array1::from_vec(xs.clone());
		let mut expected = xs;
		expected.sort_unstable_by(|a, b| b.cmp(a));
		assert_eq!(sort_by(&array, |&x| Reverse(x)).to_vec(), expected);
	}

	#[test]
	fn equal_keys() {
		let pairs = arr1(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
		assert_eq!(
			sort_by(&pairs, |&(key, _)| key),
			arr1(&[(1, 'd'), (1, 'b'), (2, 'c'), (2, 'a')])
		);
	}

	#[test]
	fn input_untouched() {
		let array = arr1(&[3, 2, 1]);
		let sorted = sort(&array.view());
		assert_eq!(sorted, arr1(&[1, 2, 3]));
		assert_eq!(array, arr1(&[3, 2, 1]));
	}
}
