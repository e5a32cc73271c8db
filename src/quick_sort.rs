//! Quicksort taking the first element as pivot, returning a sorted copy.

use alloc::{vec, vec::Vec};
use core::{cmp::Ordering, mem};
use ndarray::{Array1, ArrayView1};

/// Pending work of [`quick_sort`].
enum Task {
	/// Indices left to sort, in input order.
	Sort(Vec<usize>),
	/// Pivot index whose output position has been reached.
	Place(usize),
}

/// Returns a sorted copy of `v` with respect to `compare`.
///
/// The first element of every partition is its pivot. The remaining elements are split in input
/// order into those comparing [`Less`](Ordering::Less) or [`Equal`](Ordering::Equal) to the pivot
/// and those comparing [`Greater`](Ordering::Greater). The result is the sorted former, the
/// pivot, and the sorted latter. Hence elements equal to a pivot are placed before it, the sort
/// is not stable.
///
/// This is *O*(*n* \* log(*n*)) on average and *O*(*n*²) worst-case (e.g., already sorted
/// input). Partitions are kept on an explicit stack, so the worst case never exhausts the call
/// stack. Every element is cloned once.
pub fn quick_sort<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> Array1<T>
where
	T: Clone,
	F: FnMut(&T, &T) -> Ordering,
{
	let len = v.len();

	// Ordering has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 || len < 2 {
		return v.to_owned();
	}

	let mut order = Vec::with_capacity(len);
	let mut tasks = vec![Task::Sort((0..len).collect())];
	while let Some(task) = tasks.pop() {
		match task {
			Task::Place(pivot) => order.push(pivot),
			Task::Sort(indices) => {
				let Some((&pivot, rest)) = indices.split_first() else {
					continue;
				};
				if rest.is_empty() {
					order.push(pivot);
					continue;
				}
				let (lesser_or_equal, greater): (Vec<usize>, Vec<usize>) = rest
					.iter()
					.partition(|&&i| compare(&v[i], &v[pivot]) != Ordering::Greater);
				// Popped in reverse order.
				tasks.push(Task::Sort(greater));
				tasks.push(Task::Place(pivot));
				tasks.push(Task::Sort(lesser_or_equal));
			}
		}
	}
	debug_assert_eq!(order.len(), len);

	order.into_iter().map(|i| v[i].clone()).collect()
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sort;
	use core::cmp::Ordering;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;
	use rand::{rng, seq::SliceRandom};

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let array = Array1::from_vec(xs);
		assert_eq!(quick_sort(array.view(), u32::cmp), Array1::from_vec(sorted));
	}

	#[quickcheck]
	fn reverse_sorted(xs: Vec<i16>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable_by(|a, b| b.cmp(a));
		let array = Array1::from_vec(xs);
		assert_eq!(
			quick_sort(array.view(), |a, b| b.cmp(a)),
			Array1::from_vec(sorted)
		);
	}

	#[test]
	fn equal_elements_precede_pivot() {
		// Pairs compare by their first component only.
		let array = arr1(&[(1, 'a'), (0, 'x'), (1, 'b'), (1, 'c')]);
		let sorted = quick_sort(array.view(), |a, b| a.0.cmp(&b.0));
		assert_eq!(sorted, arr1(&[(0, 'x'), (1, 'c'), (1, 'b'), (1, 'a')]));
	}

	#[test]
	fn strided_view() {
		let array = arr1(&[9, 0, 7, 0, 8, 0, 1]);
		let sorted = quick_sort(array.slice(ndarray::s![..;-2]), Ord::cmp);
		assert_eq!(sorted, arr1(&[1, 7, 8, 9]));
	}

	#[test]
	fn zero_sized() {
		let array = Array1::from_elem(3, ());
		assert_eq!(quick_sort(array.view(), |_, _| Ordering::Less), array);
	}

	#[test]
	fn worst_case_does_not_overflow() {
		let len = 10_000;
		let ascending = Array1::from_iter(0..len);
		assert_eq!(quick_sort(ascending.view(), Ord::cmp), ascending);
		let descending = Array1::from_iter((0..len).rev());
		assert_eq!(quick_sort(descending.view(), Ord::cmp), ascending);

		let mut shuffled = (0..len).collect::<Vec<_>>();
		shuffled.shuffle(&mut rng());
		let shuffled = Array1::from_vec(shuffled);
		assert_eq!(quick_sort(shuffled.view(), Ord::cmp), ascending);
	}
}
