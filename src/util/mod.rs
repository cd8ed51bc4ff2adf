//! Small helpers shared by graph loaders and tools

pub mod path;
