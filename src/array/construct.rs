use ndarray::Array1;

/// Creates `n` arrays of length `m`, where the element at `[i][j]` is `f(i, j)`.
///
/// Elements are created in row-major order, i.e., `f(0, 0)`, `f(0, 1)`, …, `f(n - 1, m - 1)`.
///
/// # Examples
///
/// ```
/// use ndarray_seq::{array::initialize2, ndarray::arr1};
///
/// let table = initialize2(2, 3, |i, j| 10 * i + j);
/// assert_eq!(table, arr1(&[arr1(&[0, 1, 2]), arr1(&[10, 11, 12])]));
/// ```
#[must_use]
pub fn initialize2<T, F>(n: usize, m: usize, mut f: F) -> Array1<Array1<T>>
where
	F: FnMut(usize, usize) -> T,
{
	Array1::from_shape_fn(n, |i| Array1::from_shape_fn(m, |j| f(i, j)))
}

/// Creates `x` arrays of `y` arrays of length `z`, where the element at `[i][j][k]` is
/// `f(i, j, k)`.
///
/// Elements are created in row-major order.
///
/// # Examples
///
/// ```
/// use ndarray_seq::array::initialize3;
///
/// let cube = initialize3(2, 3, 4, |i, j, k| (i, j, k));
/// assert_eq!(cube.len(), 2);
/// assert_eq!(cube[1].len(), 3);
/// assert_eq!(cube[1][2].len(), 4);
/// assert_eq!(cube[1][2][3], (1, 2, 3));
/// ```
#[must_use]
pub fn initialize3<T, F>(x: usize, y: usize, z: usize, mut f: F) -> Array1<Array1<Array1<T>>>
where
	F: FnMut(usize, usize, usize) -> T,
{
	Array1::from_shape_fn(x, |i| initialize2(y, z, |j, k| f(i, j, k)))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{initialize2, initialize3};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn indexed2(n: u8, m: u8) {
		let (n, m) = (usize::from(n % 16), usize::from(m % 16));
		let table = initialize2(n, m, |i, j| (i, j));
		assert_eq!(table.len(), n);
		for (i, row) in table.iter().enumerate() {
			assert_eq!(row.len(), m);
			for (j, &element) in row.iter().enumerate() {
				assert_eq!(element, (i, j));
			}
		}
	}

	#[quickcheck]
	fn indexed3(x: u8, y: u8, z: u8) {
		let (x, y, z) = (usize::from(x % 8), usize::from(y % 8), usize::from(z % 8));
		let cube = initialize3(x, y, z, |i, j, k| (i, j, k));
		assert_eq!(cube.len(), x);
		for (i, plane) in cube.iter().enumerate() {
			assert_eq!(plane.len(), y);
			for (j, row) in plane.iter().enumerate() {
				assert_eq!(row.len(), z);
				for (k, &element) in row.iter().enumerate() {
					assert_eq!(element, (i, j, k));
				}
			}
		}
	}

	#[test]
	fn row_major_calls() {
		let mut calls = Vec::new();
		let table = initialize2(2, 2, |i, j| {
			calls.push((i, j));
			calls.len()
		});
		assert_eq!(calls, [(0, 0), (0, 1), (1, 0), (1, 1)]);
		assert_eq!(table[1][0], 3);
	}

	#[test]
	fn empty_axes() {
		assert!(initialize2(0, 5, |_, _| ()).is_empty());
		assert!(initialize2(3, 0, |_, _| ()).iter().all(|row| row.is_empty()));
		assert!(initialize3(2, 0, 4, |_, _, _| ()).iter().all(|plane| plane.is_empty()));
	}
}
