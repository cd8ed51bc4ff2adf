//! Typed one-dimensional arrays living in a memory space
//!
//! `Array<R, T>` is the container every sparse record is made of. It is a
//! thin typed handle over reference-counted runtime memory: cloning an array
//! aliases the same buffer, so a graph built over caller-supplied arrays sees
//! (and exposes) the in-place results of the build pipeline.

mod core;
mod storage;

pub use self::core::Array;
