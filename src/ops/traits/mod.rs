//! Operation traits

mod convert;

pub use convert::ConvertOps;
