//! Element and Index traits for mapping Rust types to DType

use super::DType;
use bytemuck::Pod;
use std::fmt::Debug;

/// Trait for types that can be stored in a graph array
///
/// # Bounds
/// - `Pod` - arrays are moved between memory spaces as raw bytes (bytemuck)
/// - `PartialOrd` - comparisons in scans and searches
/// - `Send + Sync` - host kernels run on the rayon pool
pub trait Element: Copy + Send + Sync + Pod + Debug + PartialOrd + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self;
}

/// Integer element usable as a vertex id, edge id or offset
///
/// Conversions to and from `usize` are plain `as` casts. Offsets and indices
/// are assumed to be non-negative and to fit the target type; that is a caller
/// obligation, exactly like monotonicity of offset arrays.
pub trait Index: Element + Ord {
    /// Convert to a host position
    fn to_usize(self) -> usize;

    /// Convert from a host position
    fn from_usize(v: usize) -> Self;
}

macro_rules! impl_element {
    ($t:ty, $dtype:expr, $zero:expr) => {
        impl Element for $t {
            const DTYPE: DType = $dtype;

            #[inline]
            fn zero() -> Self {
                $zero
            }
        }
    };
}

macro_rules! impl_index {
    ($t:ty) => {
        impl Index for $t {
            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn from_usize(v: usize) -> Self {
                v as $t
            }
        }
    };
}

impl_element!(f64, DType::F64, 0.0);
impl_element!(f32, DType::F32, 0.0);
impl_element!(i64, DType::I64, 0);
impl_element!(i32, DType::I32, 0);
impl_element!(u64, DType::U64, 0);
impl_element!(u32, DType::U32, 0);

impl_index!(i64);
impl_index!(i32);
impl_index!(u64);
impl_index!(u32);
