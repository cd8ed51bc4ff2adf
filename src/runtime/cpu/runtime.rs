//! CPU runtime implementation

use super::client::CpuClient;
use super::device::CpuDevice;
use crate::error::{Error, Result};
use crate::runtime::{MemorySpace, Runtime};
use std::alloc::{alloc_zeroed, dealloc, Layout as AllocLayout};

/// Alignment of every host allocation (AVX-512 width)
const HOST_ALIGN: usize = 64;

/// Host memory runtime
///
/// This is the default runtime that works on any platform.
/// Memory is allocated on the heap using the system allocator.
#[derive(Clone, Debug, Default)]
pub struct CpuRuntime;

impl Runtime for CpuRuntime {
    type Device = CpuDevice;
    type Client = CpuClient;

    fn name() -> &'static str {
        "cpu"
    }

    fn memory_space() -> MemorySpace {
        MemorySpace::Host
    }

    fn allocate(size_bytes: usize, _device: &Self::Device) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let layout = AllocLayout::from_size_align(size_bytes, HOST_ALIGN)
            .map_err(|_| Error::OutOfMemory { size: size_bytes })?;

        let ptr = unsafe { alloc_zeroed(layout) };
        if ptr.is_null() {
            return Err(Error::OutOfMemory { size: size_bytes });
        }

        Ok(ptr as u64)
    }

    fn deallocate(ptr: u64, size_bytes: usize, _device: &Self::Device) {
        if ptr == 0 || size_bytes == 0 {
            return;
        }

        // Layout was accepted by `allocate`, so it is valid here too.
        if let Ok(layout) = AllocLayout::from_size_align(size_bytes, HOST_ALIGN) {
            unsafe {
                dealloc(ptr as *mut u8, layout);
            }
        }
    }

    fn copy_to_device(src: &[u8], dst: u64, _device: &Self::Device) -> Result<()> {
        if src.is_empty() || dst == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst as *mut u8, src.len());
        }
        Ok(())
    }

    fn copy_from_device(src: u64, dst: &mut [u8], _device: &Self::Device) -> Result<()> {
        if dst.is_empty() || src == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src as *const u8, dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }

    fn copy_within_device(
        src: u64,
        dst: u64,
        size_bytes: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        if size_bytes == 0 || src == 0 || dst == 0 {
            return Ok(());
        }

        unsafe {
            // Use copy (not copy_nonoverlapping) in case src and dst overlap
            std::ptr::copy(src as *const u8, dst as *mut u8, size_bytes);
        }
        Ok(())
    }

    fn default_device() -> Self::Device {
        CpuDevice::new()
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        CpuClient::new(device.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_is_zeroed_and_aligned() {
        let device = CpuRuntime::default_device();
        let ptr = CpuRuntime::allocate(128, &device).unwrap();
        assert_ne!(ptr, 0);
        assert_eq!(ptr as usize % HOST_ALIGN, 0);

        let mut out = [0xffu8; 128];
        CpuRuntime::copy_from_device(ptr, &mut out, &device).unwrap();
        assert!(out.iter().all(|&b| b == 0));

        CpuRuntime::deallocate(ptr, 128, &device);
    }

    #[test]
    fn test_zero_sized_allocation() {
        let device = CpuRuntime::default_device();
        assert_eq!(CpuRuntime::allocate(0, &device).unwrap(), 0);
        CpuRuntime::deallocate(0, 0, &device);
    }

    #[test]
    fn test_copy_roundtrip() {
        let device = CpuRuntime::default_device();
        let src = [1u8, 2, 3, 4];
        let a = CpuRuntime::allocate(4, &device).unwrap();
        let b = CpuRuntime::allocate(4, &device).unwrap();
        CpuRuntime::copy_to_device(&src, a, &device).unwrap();
        CpuRuntime::copy_within_device(a, b, 4, &device).unwrap();

        let mut out = [0u8; 4];
        CpuRuntime::copy_from_device(b, &mut out, &device).unwrap();
        assert_eq!(out, src);

        CpuRuntime::deallocate(a, 4, &device);
        CpuRuntime::deallocate(b, 4, &device);
        assert_eq!(CpuRuntime::memory_space(), MemorySpace::Host);
    }
}
