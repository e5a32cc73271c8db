//! Pure sequence helpers (e.g., [lookup], zipping, safe folds, [sorting]) for 1-dimensional
//! arrays or (sub)views into [`ndarray`] arrays with arbitrary memory layout (e.g.,
//! non-contiguous), together with numeric and function-composition [`basics`].
//!
//! No operation mutates its input. Every transformation returns a newly allocated [`Array1`],
//! partial operations on possibly empty input return [`Option`].
//!
//! # Example
//!
//! ```
//! use ndarray_seq::{Seq1Ext, array, ndarray::arr2};
//!
//! // 2-dimensional array of 3 rows and 4 columns.
//! let v = arr2(&[[-5, 4, 1, -3],   // row 0, axis 0
//!                [ 8, 3, 2,  4],   // row 1, axis 0
//!                [38, 9, 3,  0]]); // row 2, axis 0
//!
//! // Non-contiguous view into the first column.
//! let column = v.column(0);
//!
//! assert_eq!(column.head(), Some(&-5));
//! assert_eq!(column.sorted().to_vec(), [-5, 8, 38]);
//! assert_eq!(column.maximum(), Some(38));
//!
//! // Pointwise combination of columns, truncated to the shortest one.
//! let dots = array::map3(&v.column(1), &v.column(2), &column.tail(), |a, b, c| a * b * c);
//! assert_eq!(dots.to_vec(), [4 * 1 * 8, 3 * 2 * 38]);
//!
//! // `v` is untouched.
//! assert_eq!(v[[0, 0]], -5);
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | Lookup           | Sorting             |
//! |----------|------------|------------------|---------------------|
//! | Time     | Best       | *O*(1)           | *O*(*n* log *n*)    |
//! | Time     | Average    | *O*(*n*)         | *O*(*n* log *n*)    |
//! | Time     | Worst      | *O*(*n*)         | *O*(*n*²)           |
//! | Space    | Worst      | *O*(1)           | *O*(*n*)            |
//!
//! [lookup]: array::index_of
//! [sorting]: array::sort_with
//!
//! # Features
//!
//!   * `std` for `ndarray/std` and `num-traits/std`. Enabled by `default`. Without it, the crate
//!     is `no_std` and float math of [`basics`] falls back to `libm`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod array;
pub mod basics;

mod quick_sort;

use core::cmp::Ordering;
use ndarray::{Array1, ArrayBase, Data, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing the functions of [`array`] taking a
/// single array as methods.
///
/// Method names differ from the functions where they would otherwise be shadowed by inherent
/// methods of [`ArrayBase`] (e.g., [`reversed`](Seq1Ext::reversed) for [`array::reverse`]).
pub trait Seq1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Returns the first element, or `None` if empty.
	///
	/// See [`array::head`].
	fn head(&self) -> Option<&A>;
	/// Returns all elements but the first.
	///
	/// See [`array::tail`].
	fn tail(&self) -> Array1<A>
	where
		A: Clone;
	/// Returns `true` if an element equals `x`.
	///
	/// See [`array::member`].
	fn member(&self, x: &A) -> bool
	where
		A: PartialEq;
	/// Returns the index of the first element equal to `x`.
	///
	/// See [`array::index_of`].
	fn index_of(&self, x: &A) -> Option<usize>
	where
		A: PartialEq;
	/// Returns the elements in reverse order.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_seq::{Seq1Ext, ndarray::arr1};
	///
	/// assert_eq!(arr1(&[1, 2, 3]).reversed(), arr1(&[3, 2, 1]));
	/// ```
	fn reversed(&self) -> Array1<A>
	where
		A: Clone;
	/// Places `x` between all adjacent elements.
	///
	/// See [`array::intersperse`].
	fn intersperse(&self, x: A) -> Array1<A>
	where
		A: Clone;
	/// Maps every element to an array and flattens the results.
	///
	/// See [`array::concat_map`].
	fn concat_map<B, T, F>(&self, f: F) -> Array1<B>
	where
		B: Clone,
		T: Data<Elem = B>,
		F: FnMut(&A) -> ArrayBase<T, Ix1>;
	/// Folds from the left, starting with the first element.
	///
	/// See [`array::foldl_safe`].
	fn foldl_safe<F>(&self, f: F) -> Option<A>
	where
		A: Clone,
		F: FnMut(A, &A) -> A;
	/// Folds from the right, starting with the last element.
	///
	/// See [`array::foldr_safe`].
	fn foldr_safe<F>(&self, f: F) -> Option<A>
	where
		A: Clone,
		F: FnMut(&A, A) -> A;
	/// Returns the first least element.
	///
	/// See [`array::minimum`].
	fn minimum(&self) -> Option<A>
	where
		A: Clone + Ord;
	/// Returns the first greatest element.
	///
	/// See [`array::maximum`].
	fn maximum(&self) -> Option<A>
	where
		A: Clone + Ord;
	/// Returns the elements sorted in ascending order.
	///
	/// See [`array::sort`].
	fn sorted(&self) -> Array1<A>
	where
		A: Clone + Ord;
	/// Returns the elements sorted in ascending order of their keys.
	///
	/// See [`array::sort_by`].
	fn sorted_by<K, F>(&self, f: F) -> Array1<A>
	where
		A: Clone,
		K: Ord,
		F: Fn(&A) -> K;
	/// Returns the elements sorted with a three-way comparator.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_seq::{Seq1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[-5, 4, 1, -3, 2]);
	/// assert_eq!(v.sorted_with(|a, b| b.cmp(a)), arr1(&[4, 2, 1, -3, -5]));
	/// ```
	///
	/// See [`array::sort_with`].
	fn sorted_with<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
}

impl<A, S> Seq1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn head(&self) -> Option<&A> {
		array::head(self)
	}
	#[inline]
	fn tail(&self) -> Array1<A>
	where
		A: Clone,
	{
		array::tail(self)
	}
	#[inline]
	fn member(&self, x: &A) -> bool
	where
		A: PartialEq,
	{
		array::member(self, x)
	}
	#[inline]
	fn index_of(&self, x: &A) -> Option<usize>
	where
		A: PartialEq,
	{
		array::index_of(self, x)
	}
	#[inline]
	fn reversed(&self) -> Array1<A>
	where
		A: Clone,
	{
		array::reverse(self)
	}
	#[inline]
	fn intersperse(&self, x: A) -> Array1<A>
	where
		A: Clone,
	{
		array::intersperse(self, x)
	}
	#[inline]
	fn concat_map<B, T, F>(&self, f: F) -> Array1<B>
	where
		B: Clone,
		T: Data<Elem = B>,
		F: FnMut(&A) -> ArrayBase<T, Ix1>,
	{
		array::concat_map(self, f)
	}
	#[inline]
	fn foldl_safe<F>(&self, f: F) -> Option<A>
	where
		A: Clone,
		F: FnMut(A, &A) -> A,
	{
		array::foldl_safe(self, f)
	}
	#[inline]
	fn foldr_safe<F>(&self, f: F) -> Option<A>
	where
		A: Clone,
		F: FnMut(&A, A) -> A,
	{
		array::foldr_safe(self, f)
	}
	#[inline]
	fn minimum(&self) -> Option<A>
	where
		A: Clone + Ord,
	{
		array::minimum(self)
	}
	#[inline]
	fn maximum(&self) -> Option<A>
	where
		A: Clone + Ord,
	{
		array::maximum(self)
	}
	#[inline]
	fn sorted(&self) -> Array1<A>
	where
		A: Clone + Ord,
	{
		array::sort(self)
	}
	#[inline]
	fn sorted_by<K, F>(&self, f: F) -> Array1<A>
	where
		A: Clone,
		K: Ord,
		F: Fn(&A) -> K,
	{
		array::sort_by(self, f)
	}
	#[inline]
	fn sorted_with<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		array::sort_with(self, compare)
	}
}
