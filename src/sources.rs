/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * Copyright (c) Jan-Paul Bultmann
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Borrowing conversions from common owning buffers into views.
//!
//! | Feature  | Implementations                                                    |
//! | -------- | ------------------------------------------------------------------ |
//! | *(none)* | `Vec<T>`, `Box<[T]>`, `String` and `str` (as bytes)                |
//! | `bytes`  | `bytes::Bytes` and `bytes::BytesMut`                               |
//! | `mmap`   | `memmap2::Mmap` and `memmap2::MmapMut`                             |
//!
//! The view borrows the buffer, so the buffer cannot be dropped, grown or
//! reallocated while the view is alive:
//!
//! ```rust
//! use arrayview::DynamicView;
//!
//! let data = vec![1u16, 2, 3];
//! let view = DynamicView::from(&data);
//! assert!(view == data.as_ptr());
//! assert_eq!(view.size(), 3);
//! ```

use crate::{ArraySize, DynamicView, DynamicViewMut};

impl<'a, T> From<&'a Vec<T>> for DynamicView<'a, T> {
    fn from(vec: &'a Vec<T>) -> Self {
        Self::new(vec.as_slice())
    }
}

impl<'a, T> From<&'a mut Vec<T>> for DynamicView<'a, T> {
    fn from(vec: &'a mut Vec<T>) -> Self {
        Self::new(vec.as_slice())
    }
}

impl<'a, T> From<&'a mut Vec<T>> for DynamicViewMut<'a, T> {
    fn from(vec: &'a mut Vec<T>) -> Self {
        Self::new(vec.as_mut_slice())
    }
}

impl<'a, T> From<&'a Box<[T]>> for DynamicView<'a, T> {
    fn from(boxed: &'a Box<[T]>) -> Self {
        Self::new(boxed)
    }
}

impl<'a, T> From<&'a mut Box<[T]>> for DynamicViewMut<'a, T> {
    fn from(boxed: &'a mut Box<[T]>) -> Self {
        Self::new(boxed)
    }
}

impl<'a> From<&'a String> for DynamicView<'a, u8> {
    fn from(string: &'a String) -> Self {
        Self::new(string.as_bytes())
    }
}

impl<'a> From<&'a str> for DynamicView<'a, u8> {
    fn from(string: &'a str) -> Self {
        Self::new(string.as_bytes())
    }
}

impl<T> ArraySize for Vec<T> {
    fn array_size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "bytes")]
impl<'a> From<&'a bytes::Bytes> for DynamicView<'a, u8> {
    fn from(bytes: &'a bytes::Bytes) -> Self {
        Self::new(bytes.as_ref())
    }
}

#[cfg(feature = "bytes")]
impl<'a> From<&'a bytes::BytesMut> for DynamicView<'a, u8> {
    fn from(bytes: &'a bytes::BytesMut) -> Self {
        Self::new(bytes.as_ref())
    }
}

#[cfg(feature = "bytes")]
impl<'a> From<&'a mut bytes::BytesMut> for DynamicViewMut<'a, u8> {
    fn from(bytes: &'a mut bytes::BytesMut) -> Self {
        Self::new(bytes.as_mut())
    }
}

#[cfg(feature = "mmap")]
impl<'a> From<&'a memmap2::Mmap> for DynamicView<'a, u8> {
    fn from(map: &'a memmap2::Mmap) -> Self {
        Self::new(map.as_ref())
    }
}

#[cfg(feature = "mmap")]
impl<'a> From<&'a memmap2::MmapMut> for DynamicView<'a, u8> {
    fn from(map: &'a memmap2::MmapMut) -> Self {
        Self::new(map.as_ref())
    }
}

#[cfg(feature = "mmap")]
impl<'a> From<&'a mut memmap2::MmapMut> for DynamicViewMut<'a, u8> {
    fn from(map: &'a mut memmap2::MmapMut) -> Self {
        Self::new(map.as_mut())
    }
}
