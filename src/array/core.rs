//! Core Array implementation: struct, creation, transfers

use super::storage::Storage;
use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::runtime::cpu::CpuRuntime;
use crate::runtime::{MemorySpace, Runtime};
use std::marker::PhantomData;

/// Typed one-dimensional buffer in runtime `R`'s memory space
pub struct Array<R: Runtime, T: Element> {
    storage: Storage<R>,
    _elem: PhantomData<T>,
}

impl<R: Runtime, T: Element> Array<R, T> {
    /// Allocate `len` zero-initialized elements on `device`
    pub fn zeros(len: usize, device: &R::Device) -> Result<Self> {
        Ok(Self::from_storage(Storage::new(len, T::DTYPE, device)?))
    }

    /// Allocate an array on `device` and copy `data` into it
    pub fn from_slice(data: &[T], device: &R::Device) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        Ok(Self::from_storage(Storage::from_bytes(
            bytes, T::DTYPE, device,
        )?))
    }

    /// Alias existing runtime memory without taking ownership
    ///
    /// The resulting array never frees the memory.
    ///
    /// # Safety
    /// - `ptr` must point to `len` properly aligned elements of `T` in `R`'s memory space
    /// - The memory must stay valid for as long as any clone of the array lives
    /// - The memory must not be accessed except through the array and its clones
    pub unsafe fn from_ptr(ptr: u64, len: usize, device: &R::Device) -> Self {
        Self::from_storage(Storage::from_ptr(ptr, len, T::DTYPE, device))
    }

    fn from_storage(storage: Storage<R>) -> Self {
        Self {
            storage,
            _elem: PhantomData,
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Raw pointer into the runtime's memory (0 for empty arrays)
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.storage.ptr()
    }

    /// Element type tag
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Device holding the memory
    #[inline]
    pub fn device(&self) -> &R::Device {
        self.storage.device()
    }

    /// Memory space holding the array
    #[inline]
    pub fn memory_space(&self) -> MemorySpace {
        R::memory_space()
    }

    /// Size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.storage.size_in_bytes()
    }

    /// Number of handles sharing this buffer
    #[inline]
    pub fn ref_count(&self) -> usize {
        self.storage.ref_count()
    }

    /// Returns true if the array frees its memory on drop
    #[inline]
    pub fn is_owned(&self) -> bool {
        self.storage.is_owned()
    }

    /// Returns true if the two arrays share any byte of memory
    pub fn overlaps<U: Element>(&self, other: &Array<R, U>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a0, a1) = (self.ptr(), self.ptr() + self.size_in_bytes() as u64);
        let (b0, b1) = (other.ptr(), other.ptr() + other.size_in_bytes() as u64);
        a0 < b1 && b0 < a1
    }

    /// Copy the array to a host vector
    pub fn to_vec(&self) -> Result<Vec<T>> {
        // Allocate with T's alignment, then view as bytes for the copy.
        let mut result = vec![T::zero(); self.len()];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut result);
        R::copy_from_device(self.ptr(), bytes, self.device())?;
        Ok(result)
    }

    /// Copy the array into another memory space
    pub fn copy_to<R2: Runtime>(&self, device: &R2::Device) -> Result<Array<R2, T>> {
        let host = self.to_vec()?;
        Array::<R2, T>::from_slice(&host, device)
    }

    /// Allocate a new buffer in the same memory space holding the same elements
    ///
    /// Unlike `clone`, the result does not alias `self`.
    pub fn deep_clone(&self) -> Result<Self> {
        let copy = Self::zeros(self.len(), self.device())?;
        R::copy_within_device(self.ptr(), copy.ptr(), self.size_in_bytes(), self.device())?;
        Ok(copy)
    }
}

impl<T: Element> Array<CpuRuntime, T> {
    /// View a host array as a slice
    ///
    /// Writers need an exclusive handle (see [`Array::as_mut_slice`]), so the
    /// buffer cannot change while the slice is alive.
    pub fn as_slice(&self) -> &[T] {
        if self.is_empty() {
            return &[];
        }
        // SAFETY: the buffer holds `len` initialized elements and is only
        // written through a handle whose storage is not shared.
        unsafe { std::slice::from_raw_parts(self.ptr() as *const T, self.len()) }
    }

    /// View a host array as a mutable slice
    ///
    /// Returns `None` when another handle shares the buffer.
    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        if self.ref_count() > 1 {
            return None;
        }
        if self.is_empty() {
            return Some(&mut []);
        }
        // SAFETY: `self` is the only handle to the buffer and is borrowed
        // mutably for the lifetime of the slice.
        Some(unsafe { std::slice::from_raw_parts_mut(self.ptr() as *mut T, self.len()) })
    }
}

impl<R: Runtime, T: Element> Clone for Array<R, T> {
    /// Clone aliases the buffer (zero-copy)
    fn clone(&self) -> Self {
        Self::from_storage(self.storage.clone())
    }
}

impl<R: Runtime, T: Element> std::fmt::Debug for Array<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Array")
            .field("runtime", &R::name())
            .field("storage", &self.storage)
            .finish()
    }
}
