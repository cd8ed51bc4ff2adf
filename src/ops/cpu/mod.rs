//! CPU implementation of conversion operations.

pub mod convert;
