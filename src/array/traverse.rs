use core::cmp;
use ndarray::{Array1, ArrayBase, Data, Ix1, s};

/// Returns the first element, or `None` if `v` is empty.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::head, ndarray::{Array1, arr1}};
///
/// assert_eq!(head(&arr1(&[3, 4, 5])), Some(&3));
/// assert_eq!(head(&Array1::<u8>::zeros(0)), None);
/// ```
#[inline]
#[must_use]
pub fn head<A, S>(v: &ArrayBase<S, Ix1>) -> Option<&A>
where
	S: Data<Elem = A>,
{
	v.get(0)
}

/// Returns all elements but the first.
///
/// An empty array has an empty tail.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::tail, ndarray::{Array1, arr1}};
///
/// assert_eq!(tail(&arr1(&[3, 4, 5])), arr1(&[4, 5]));
/// assert_eq!(tail(&arr1(&[3])), Array1::<i32>::zeros(0));
/// assert_eq!(tail(&Array1::<i32>::zeros(0)), Array1::<i32>::zeros(0));
/// ```
#[must_use]
pub fn tail<A, S>(v: &ArrayBase<S, Ix1>) -> Array1<A>
where
	A: Clone,
	S: Data<Elem = A>,
{
	v.slice(s![cmp::min(1, v.len())..]).to_owned()
}

/// Returns `true` if `v` has no elements.
#[inline]
#[must_use]
pub fn is_empty<A, S>(v: &ArrayBase<S, Ix1>) -> bool
where
	S: Data<Elem = A>,
{
	v.len() == 0
}

/// Returns `true` if `v` contains an element equal to `x`.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::member, ndarray::arr1};
///
/// let v = arr1(&["turtles", "on"]);
/// assert!(member(&v, &"on"));
/// assert!(!member(&v, &"off"));
/// ```
#[inline]
#[must_use]
pub fn member<A, S>(v: &ArrayBase<S, Ix1>, x: &A) -> bool
where
	A: PartialEq,
	S: Data<Elem = A>,
{
	v.iter().any(|a| a == x)
}

/// Returns the index of the first element equal to `x`, or `None` if there is none.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::index_of, ndarray::arr1};
///
/// assert_eq!(index_of(&arr1(&[3, 4, 5, 2, 1, 2]), &2), Some(3));
/// assert_eq!(index_of(&arr1(&[2, 3, 4]), &1), None);
/// ```
#[inline]
#[must_use]
pub fn index_of<A, S>(v: &ArrayBase<S, Ix1>, x: &A) -> Option<usize>
where
	A: PartialEq,
	S: Data<Elem = A>,
{
	v.iter().position(|a| a == x)
}

/// Returns the elements of `v` in reverse order.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::reverse, ndarray::arr1};
///
/// assert_eq!(reverse(&arr1(&[1, 2, 3])), arr1(&[3, 2, 1]));
/// ```
#[must_use]
pub fn reverse<A, S>(v: &ArrayBase<S, Ix1>) -> Array1<A>
where
	A: Clone,
	S: Data<Elem = A>,
{
	v.slice(s![..;-1]).to_owned()
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{head, index_of, is_empty, member, reverse, tail};
	use ndarray::{Array1, arr1, s};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn reversed_twice(xs: Vec<u32>) {
		let array = Array1::from_vec(xs);
		let reversed = reverse(&array);
		assert_eq!(reversed.len(), array.len());
		assert_eq!(reverse(&reversed), array);
	}

	#[quickcheck]
	fn member_iff_indexed(xs: Vec<u8>, x: u8) {
		let array = Array1::from_vec(xs);
		match index_of(&array, &x) {
			Some(index) => {
				assert!(member(&array, &x));
				assert_eq!(array[index], x);
				assert!(array.slice(s![..index]).iter().all(|&a| a != x));
			}
			None => assert!(!member(&array, &x)),
		}
	}

	#[quickcheck]
	fn head_and_tail(xs: Vec<i32>) {
		let array = Array1::from_vec(xs.clone());
		assert_eq!(is_empty(&array), xs.is_empty());
		assert_eq!(head(&array), xs.first());
		assert_eq!(tail(&array).to_vec(), xs.iter().skip(1).copied().collect::<Vec<_>>());
	}

	#[test]
	fn strided_view() {
		let array = arr1(&[0, 1, 2, 3, 4, 5]);
		let odd = array.slice(s![1..;2]);
		assert_eq!(head(&odd), Some(&1));
		assert_eq!(tail(&odd), arr1(&[3, 5]));
		assert_eq!(reverse(&odd), arr1(&[5, 3, 1]));
		assert_eq!(index_of(&odd, &5), Some(2));
		assert_eq!(index_of(&odd, &4), None);
	}
}
