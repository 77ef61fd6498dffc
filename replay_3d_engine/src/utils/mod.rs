//! Small statistics helpers for frame metadata

mod histogram;

pub use histogram::id_occurrences;
