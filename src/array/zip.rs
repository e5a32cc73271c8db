//! Pointwise combination of up to five arrays.
//!
//! Arrays of unequal length are truncated to the shortest one, i.e., trailing elements of the
//! longer arrays are ignored.

use ndarray::{Array1, ArrayBase, Data, Ix1, Zip, s};

/// Combines `a` and `b` pointwise with `f`.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::map2, ndarray::arr1};
///
/// let sums = map2(&arr1(&[1, 2, 3]), &arr1(&[1, 2, 3, 4]), |a, b| a + b);
/// assert_eq!(sums, arr1(&[2, 4, 6]));
/// ```
#[must_use]
pub fn map2<A, B, C, SA, SB, F>(a: &ArrayBase<SA, Ix1>, b: &ArrayBase<SB, Ix1>, f: F) -> Array1<C>
where
	SA: Data<Elem = A>,
	SB: Data<Elem = B>,
	F: FnMut(&A, &B) -> C,
{
	let len = a.len().min(b.len());
	Zip::from(a.slice(s![..len]))
		.and(b.slice(s![..len]))
		.map_collect(f)
}

/// Combines `a`, `b`, and `c` pointwise with `f`.
#[must_use]
pub fn map3<A, B, C, D, SA, SB, SC, F>(
	a: &ArrayBase<SA, Ix1>,
	b: &ArrayBase<SB, Ix1>,
	c: &ArrayBase<SC, Ix1>,
	f: F,
) -> Array1<D>
where
	SA: Data<Elem = A>,
	SB: Data<Elem = B>,
	SC: Data<Elem = C>,
	F: FnMut(&A, &B, &C) -> D,
{
	let len = a.len().min(b.len()).min(c.len());
	Zip::from(a.slice(s![..len]))
		.and(b.slice(s![..len]))
		.and(c.slice(s![..len]))
		.map_collect(f)
}

/// Combines `a`, `b`, `c`, and `d` pointwise with `f`.
#[must_use]
pub fn map4<A, B, C, D, E, SA, SB, SC, SD, F>(
	a: &ArrayBase<SA, Ix1>,
	b: &ArrayBase<SB, Ix1>,
	c: &ArrayBase<SC, Ix1>,
	d: &ArrayBase<SD, Ix1>,
	f: F,
) -> Array1<E>
where
	SA: Data<Elem = A>,
	SB: Data<Elem = B>,
	SC: Data<Elem = C>,
	SD: Data<Elem = D>,
	F: FnMut(&A, &B, &C, &D) -> E,
{
	let len = a.len().min(b.len()).min(c.len()).min(d.len());
	Zip::from(a.slice(s![..len]))
		.and(b.slice(s![..len]))
		.and(c.slice(s![..len]))
		.and(d.slice(s![..len]))
		.map_collect(f)
}

/// Combines `a`, `b`, `c`, `d`, and `e` pointwise with `f`.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::map5, ndarray::arr1};
///
/// let a = arr1(&[1, 2]);
/// let products = map5(&a, &a, &a, &a, &arr1(&[1, 2, 3]), |a, b, c, d, e| a * b * c * d * e);
/// assert_eq!(products, arr1(&[1, 32]));
/// ```
#[must_use]
pub fn map5<A, B, C, D, E, G, SA, SB, SC, SD, SE, F>(
	a: &ArrayBase<SA, Ix1>,
	b: &ArrayBase<SB, Ix1>,
	c: &ArrayBase<SC, Ix1>,
	d: &ArrayBase<SD, Ix1>,
	e: &ArrayBase<SE, Ix1>,
	f: F,
) -> Array1<G>
where
	SA: Data<Elem = A>,
	SB: Data<Elem = B>,
	SC: Data<Elem = C>,
	SD: Data<Elem = D>,
	SE: Data<Elem = E>,
	F: FnMut(&A, &B, &C, &D, &E) -> G,
{
	let len = a.len().min(b.len()).min(c.len()).min(d.len()).min(e.len());
	Zip::from(a.slice(s![..len]))
		.and(b.slice(s![..len]))
		.and(c.slice(s![..len]))
		.and(d.slice(s![..len]))
		.and(e.slice(s![..len]))
		.map_collect(f)
}

/// Pairs up the elements of `a` and `b`.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::zip, ndarray::arr1};
///
/// let pairs = zip(&arr1(&[1, 2, 3]), &arr1(&[2, 3, 4]));
/// assert_eq!(pairs, arr1(&[(1, 2), (2, 3), (3, 4)]));
/// ```
#[must_use]
pub fn zip<A, B, SA, SB>(a: &ArrayBase<SA, Ix1>, b: &ArrayBase<SB, Ix1>) -> Array1<(A, B)>
where
	A: Clone,
	B: Clone,
	SA: Data<Elem = A>,
	SB: Data<Elem = B>,
{
	map2(a, b, |a, b| (a.clone(), b.clone()))
}

/// Groups the elements of `a`, `b`, and `c` into triples.
#[must_use]
pub fn zip3<A, B, C, SA, SB, SC>(
	a: &ArrayBase<SA, Ix1>,
	b: &ArrayBase<SB, Ix1>,
	c: &ArrayBase<SC, Ix1>,
) -> Array1<(A, B, C)>
where
	A: Clone,
	B: Clone,
	C: Clone,
	SA: Data<Elem = A>,
	SB: Data<Elem = B>,
	SC: Data<Elem = C>,
{
	map3(a, b, c, |a, b, c| (a.clone(), b.clone(), c.clone()))
}

/// Groups the elements of `a`, `b`, `c`, and `d` into 4-tuples.
#[must_use]
pub fn zip4<A, B, C, D, SA, SB, SC, SD>(
	a: &ArrayBase<SA, Ix1>,
	b: &ArrayBase<SB, Ix1>,
	c: &ArrayBase<SC, Ix1>,
	d: &ArrayBase<SD, Ix1>,
) -> Array1<(A, B, C, D)>
where
	A: Clone,
	B: Clone,
	C: Clone,
	D: Clone,
	SA: Data<Elem = A>,
	SB: Data<Elem = B>,
	SC: Data<Elem = C>,
	SD: Data<Elem = D>,
{
	map4(a, b, c, d, |a, b, c, d| {
		(a.clone(), b.clone(), c.clone(), d.clone())
	})
}

/// Groups the elements of `a`, `b`, `c`, `d`, and `e` into 5-tuples.
#[must_use]
pub fn zip5<A, B, C, D, E, SA, SB, SC, SD, SE>(
	a: &ArrayBase<SA, Ix1>,
	b: &ArrayBase<SB, Ix1>,
	c: &ArrayBase<SC, Ix1>,
	d: &ArrayBase<SD, Ix1>,
	e: &ArrayBase<SE, Ix1>,
) -> Array1<(A, B, C, D, E)>
where
	A: Clone,
	B: Clone,
	C: Clone,
	D: Clone,
	E: Clone,
	SA: Data<Elem = A>,
	SB: Data<Elem = B>,
	SC: Data<Elem = C>,
	SD: Data<Elem = D>,
	SE: Data<Elem = E>,
{
	map5(a, b, c, d, e, |a, b, c, d, e| {
		(a.clone(), b.clone(), c.clone(), d.clone(), e.clone())
	})
}

/// Splits an array of pairs into an array of first and an array of second components.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::unzip, ndarray::arr1};
///
/// let (numbers, letters) = unzip(&arr1(&[(1, 'a'), (2, 'b')]));
/// assert_eq!(numbers, arr1(&[1, 2]));
/// assert_eq!(letters, arr1(&['a', 'b']));
/// ```
#[must_use]
pub fn unzip<A, B, S>(v: &ArrayBase<S, Ix1>) -> (Array1<A>, Array1<B>)
where
	A: Clone,
	B: Clone,
	S: Data<Elem = (A, B)>,
{
	(v.map(|(a, _)| a.clone()), v.map(|(_, b)| b.clone()))
}

/// Splits an array of triples into three arrays of their components.
#[must_use]
pub fn unzip3<A, B, C, S>(v: &ArrayBase<S, Ix1>) -> (Array1<A>, Array1<B>, Array1<C>)
where
	A: Clone,
	B: Clone,
	C: Clone,
	S: Data<Elem = (A, B, C)>,
{
	(
		v.map(|(a, ..)| a.clone()),
		v.map(|(_, b, _)| b.clone()),
		v.map(|(.., c)| c.clone()),
	)
}

/// Splits an array of 4-tuples into four arrays of their components.
#[must_use]
#[allow(clippy::type_complexity)]
pub fn unzip4<A, B, C, D, S>(
	v: &ArrayBase<S, Ix1>,
) -> (Array1<A>, Array1<B>, Array1<C>, Array1<D>)
where
	A: Clone,
	B: Clone,
	C: Clone,
	D: Clone,
	S: Data<Elem = (A, B, C, D)>,
{
	(
		v.map(|(a, ..)| a.clone()),
		v.map(|(_, b, ..)| b.clone()),
		v.map(|(.., c, _)| c.clone()),
		v.map(|(.., d)| d.clone()),
	)
}

/// Splits an array of 5-tuples into five arrays of their components.
#[must_use]
#[allow(clippy::type_complexity)]
pub fn unzip5<A, B, C, D, E, S>(
	v: &ArrayBase<S, Ix1>,
) -> (Array1<A>, Array1<B>, Array1<C>, Array1<D>, Array1<E>)
where
	A: Clone,
	B: Clone,
	C: Clone,
	D: Clone,
	E: Clone,
	S: Data<Elem = (A, B, C, D, E)>,
{
	(
		v.map(|(a, ..)| a.clone()),
		v.map(|(_, b, ..)| b.clone()),
		v.map(|(_, _, c, ..)| c.clone()),
		v.map(|(.., d, _)| d.clone()),
		v.map(|(.., e)| e.clone()),
	)
}
