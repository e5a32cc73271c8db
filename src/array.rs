//! Sequence operations on 1-dimensional arrays or (sub)views.
//!
//! Every function borrows its input arrays, which may have arbitrary memory layout (e.g.,
//! non-contiguous or reversed), and returns newly allocated arrays. Inputs are never mutated.

mod combine;
mod construct;
mod fold;
mod sort;
mod traverse;
mod zip;

pub use self::{
	combine::{concat, concat_map, intersperse},
	construct::{initialize2, initialize3},
	fold::{foldl_safe, foldr_safe, maximum, minimum, product, sum},
	sort::{sort, sort_by, sort_with},
	traverse::{head, index_of, is_empty, member, reverse, tail},
	zip::{map2, map3, map4, map5, unzip, unzip3, unzip4, unzip5, zip, zip3, zip4, zip5},
};
