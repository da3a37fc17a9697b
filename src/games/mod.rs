//! Game implementations.

pub mod quoridor;
