//! Distance model.
//!
//! Provides the precomputed deadhead matrix and service distances that
//! every other component reads.

mod matrix;

pub use matrix::DistanceMatrix;
