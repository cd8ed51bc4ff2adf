//! Storage: memory-space buffers with Arc-based sharing

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::sync::Arc;

/// Untyped buffer in a runtime's memory space
///
/// Storage wraps runtime memory with reference counting. Clones share the
/// buffer, which is how a graph aliases the arrays it was built from.
///
/// Memory is automatically deallocated when the last reference is dropped.
pub(crate) struct Storage<R: Runtime> {
    inner: Arc<StorageInner<R>>,
}

struct StorageInner<R: Runtime> {
    /// Raw pointer (accelerator address or host ptr cast to u64)
    ptr: u64,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
    /// Device where memory is allocated
    device: R::Device,
    /// If true, we own this memory and should deallocate on drop
    owned: bool,
}

impl<R: Runtime> Storage<R> {
    /// Allocate `len` zeroed elements of type `dtype` on the device.
    pub(crate) fn new(len: usize, dtype: DType, device: &R::Device) -> Result<Self> {
        let size_bytes = len
            .checked_mul(dtype.size_in_bytes())
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;
        let ptr = R::allocate(size_bytes, device)?;

        Ok(Self::wrap(ptr, len, dtype, device, true))
    }

    /// Allocate and fill from host bytes.
    pub(crate) fn from_bytes(data: &[u8], dtype: DType, device: &R::Device) -> Result<Self> {
        let len = data.len() / dtype.size_in_bytes();
        let ptr = R::allocate(data.len(), device)?;

        if let Err(e) = R::copy_to_device(data, ptr, device) {
            R::deallocate(ptr, data.len(), device);
            return Err(e);
        }

        Ok(Self::wrap(ptr, len, dtype, device, true))
    }

    /// Wrap existing memory without taking ownership
    ///
    /// # Safety
    /// - `ptr` must point to `len` elements of `dtype` in `R`'s memory space
    /// - The memory must remain valid for the lifetime of this Storage
    /// - Caller is responsible for eventual deallocation
    pub(crate) unsafe fn from_ptr(ptr: u64, len: usize, dtype: DType, device: &R::Device) -> Self {
        Self::wrap(ptr, len, dtype, device, false)
    }

    fn wrap(ptr: u64, len: usize, dtype: DType, device: &R::Device, owned: bool) -> Self {
        Self {
            inner: Arc::new(StorageInner {
                ptr,
                len,
                dtype,
                device: device.clone(),
                owned,
            }),
        }
    }

    #[inline]
    pub(crate) fn ptr(&self) -> u64 {
        self.inner.ptr
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.inner.len
    }

    #[inline]
    pub(crate) fn dtype(&self) -> DType {
        self.inner.dtype
    }

    #[inline]
    pub(crate) fn device(&self) -> &R::Device {
        &self.inner.device
    }

    #[inline]
    pub(crate) fn size_in_bytes(&self) -> usize {
        self.inner.len * self.inner.dtype.size_in_bytes()
    }

    #[inline]
    pub(crate) fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    #[inline]
    pub(crate) fn is_owned(&self) -> bool {
        self.inner.owned
    }
}

impl<R: Runtime> Clone for Storage<R> {
    /// Clone increments the reference count (zero-copy)
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Runtime> Drop for StorageInner<R> {
    fn drop(&mut self) {
        if self.owned && self.ptr != 0 {
            R::deallocate(
                self.ptr,
                self.len * self.dtype.size_in_bytes(),
                &self.device,
            );
        }
    }
}

impl<R: Runtime> std::fmt::Debug for Storage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("ptr", &format!("0x{:x}", self.inner.ptr))
            .field("len", &self.inner.len)
            .field("dtype", &self.inner.dtype)
            .field("owned", &self.inner.owned)
            .field("refs", &Arc::strong_count(&self.inner))
            .finish()
    }
}
