use alloc::vec::Vec;
use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Places `x` between all adjacent elements of `v`.
///
/// A non-empty result has length `2 * v.len() - 1` with the original elements at even indices.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::intersperse, ndarray::arr1};
///
/// let v = arr1(&["turtles", "turtles", "turtles"]);
/// assert_eq!(
/// 	intersperse(&v, "on"),
/// 	arr1(&["turtles", "on", "turtles", "on", "turtles"])
/// );
/// ```
#[must_use]
pub fn intersperse<A, S>(v: &ArrayBase<S, Ix1>, x: A) -> Array1<A>
where
	A: Clone,
	S: Data<Elem = A>,
{
	let mut interspersed = Vec::with_capacity((2 * v.len()).saturating_sub(1));
	for (i, a) in v.iter().enumerate() {
		if i > 0 {
			interspersed.push(x.clone());
		}
		interspersed.push(a.clone());
	}
	Array1::from_vec(interspersed)
}

/// Flattens an array of arrays into one array, preserving order.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::concat, ndarray::arr1};
///
/// let nested = arr1(&[arr1(&[1, 2]), arr1(&[3, 4])]);
/// assert_eq!(concat(&nested), arr1(&[1, 2, 3, 4]));
/// ```
#[must_use]
pub fn concat<A, S, T>(v: &ArrayBase<S, Ix1>) -> Array1<A>
where
	A: Clone,
	S: Data<Elem = ArrayBase<T, Ix1>>,
	T: Data<Elem = A>,
{
	let len = v.iter().map(ArrayBase::len).sum();
	let mut flattened = Vec::with_capacity(len);
	for inner in v {
		flattened.extend(inner.iter().cloned());
	}
	Array1::from_vec(flattened)
}

/// Maps every element to an array and flattens the results, preserving order.
///
/// Equivalent to [`concat`] of the mapped arrays without allocating the intermediate array of
/// arrays.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::concat_map, ndarray::{Array1, arr1}};
///
/// let repeated = concat_map(&arr1(&[1, 2, 3]), |&x| Array1::from_elem(x, x));
/// assert_eq!(repeated, arr1(&[1, 2, 2, 3, 3, 3]));
/// ```
#[must_use]
pub fn concat_map<A, B, S, T, F>(v: &ArrayBase<S, Ix1>, mut f: F) -> Array1<B>
where
	B: Clone,
	S: Data<Elem = A>,
	T: Data<Elem = B>,
	F: FnMut(&A) -> ArrayBase<T, Ix1>,
{
	let mut flattened = Vec::new();
	for a in v {
		flattened.extend(f(a).iter().cloned());
	}
	Array1::from_vec(flattened)
}
