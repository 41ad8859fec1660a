//! The bwt_algorithms module forms the sorting subsystem of the codec.
//!
//! The Burrow-Wheeler Transform (BWT) prepares data for entropy coding. It permutes a block so that
//! bytes sharing a following context end up next to each other, which clusters repeated bytes.
//!
//! Sorting the rotations is the expensive part. It is done by rank doubling over an index array
//! (suffix_sort). The transform itself and its LF-mapping inverse live in bwt_sort.
//!
pub mod bwt_sort;
pub mod suffix_sort;
