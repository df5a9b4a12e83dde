//! Game implementations.

pub mod greed;
