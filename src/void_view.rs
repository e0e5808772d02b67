/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * Copyright (c) Jan-Paul Bultmann
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::ffi::c_void;
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::mem::{size_of, size_of_val};
use std::ptr;

use crate::{DynamicView, DynamicViewMut, StaticView, StaticViewMut};

/// Read-only, type-erased view of a byte range.
///
/// Any typed view converts into a `VoidView`; its size is the byte size of
/// the original elements. A `VoidView` never reads the memory it refers to,
/// going back to a typed view requires the unsafe [`cast`](VoidView::cast).
///
/// ```
/// use arrayview::{StaticView, VoidView};
///
/// let data = [3i32, 4, 7, 12, 0, -15];
/// let view = StaticView::new(&data);
/// let erased = VoidView::from(view);
/// assert!(erased == view.data());
/// assert_eq!(erased.size(), 6 * std::mem::size_of::<i32>());
/// ```
///
/// ```compile_fail
/// use arrayview::{DynamicView, VoidView};
///
/// let data = [1u8, 2];
/// let view: DynamicView<u8> = VoidView::from(&data[..]).into();
/// ```
#[derive(Clone, Copy)]
pub struct VoidView<'a> {
    ptr: *const c_void,
    len: usize,
    _marker: PhantomData<&'a [u8]>,
}

/// Mutable, type-erased view of a byte range.
pub struct VoidViewMut<'a> {
    ptr: *mut c_void,
    len: usize,
    _marker: PhantomData<&'a mut [u8]>,
}

// The views never dereference their pointer.
unsafe impl Send for VoidView<'_> {}
unsafe impl Sync for VoidView<'_> {}
unsafe impl Send for VoidViewMut<'_> {}
unsafe impl Sync for VoidViewMut<'_> {}

// Core implementation of VoidView.
impl<'a> VoidView<'a> {
    /// Creates a null view of zero bytes.
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Erases the element type of `slice`.
    pub fn new<T>(slice: &'a [T]) -> Self {
        Self {
            ptr: slice.as_ptr().cast(),
            len: size_of_val(slice),
            _marker: PhantomData,
        }
    }

    /// Address of the first byte, null for a null view.
    pub const fn data(&self) -> *const c_void {
        self.ptr
    }

    /// Same as [`data`](Self::data).
    pub const fn as_ptr(&self) -> *const c_void {
        self.ptr
    }

    /// Whether the address is null.
    pub const fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Number of bytes.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Same as [`size`](Self::size).
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the view covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reinterprets the bytes as elements of `T`.
    ///
    /// The element count is `size() / size_of::<T>()`.
    ///
    /// # Safety
    /// `T` must not be zero-sized, the address must be aligned for `T` and
    /// the bytes must hold initialized, valid values of `T` that are not
    /// mutated for `'a`.
    pub unsafe fn cast<T>(self) -> DynamicView<'a, T> {
        unsafe { DynamicView::from_raw_parts(self.ptr.cast(), self.len / size_of::<T>()) }
    }
}

impl Default for VoidView<'_> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a, T> From<&'a [T]> for VoidView<'a> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for VoidView<'a> {
    fn from(array: &'a [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T> From<DynamicView<'a, T>> for VoidView<'a> {
    fn from(view: DynamicView<'a, T>) -> Self {
        Self {
            ptr: view.data().cast(),
            len: view.size() * size_of::<T>(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> From<DynamicViewMut<'a, T>> for VoidView<'a> {
    fn from(view: DynamicViewMut<'a, T>) -> Self {
        DynamicView::from(view).into()
    }
}

impl<'a, T, const N: usize> From<StaticView<'a, T, N>> for VoidView<'a> {
    fn from(view: StaticView<'a, T, N>) -> Self {
        // A null static view erases to the null, empty byte view.
        DynamicView::from(view).into()
    }
}

impl<'a, T, const N: usize> From<StaticViewMut<'a, T, N>> for VoidView<'a> {
    fn from(view: StaticViewMut<'a, T, N>) -> Self {
        StaticView::from(view).into()
    }
}

impl<'a> From<VoidViewMut<'a>> for VoidView<'a> {
    fn from(view: VoidViewMut<'a>) -> Self {
        Self {
            ptr: view.ptr.cast_const(),
            len: view.len,
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq<*const T> for VoidView<'_> {
    fn eq(&self, other: &*const T) -> bool {
        self.ptr == other.cast::<c_void>()
    }
}

impl<T> PartialEq<*mut T> for VoidView<'_> {
    fn eq(&self, other: &*mut T) -> bool {
        self.ptr == other.cast_const().cast::<c_void>()
    }
}

impl Debug for VoidView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoidView")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

// Core implementation of VoidViewMut.
impl<'a> VoidViewMut<'a> {
    /// Creates a null view of zero bytes.
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Erases the element type of `slice`.
    pub fn new<T>(slice: &'a mut [T]) -> Self {
        Self {
            len: size_of_val(slice),
            ptr: slice.as_mut_ptr().cast(),
            _marker: PhantomData,
        }
    }

    /// Address of the first byte, null for a null view.
    pub const fn data(&self) -> *mut c_void {
        self.ptr
    }

    /// Same as [`data`](Self::data).
    pub const fn as_mut_ptr(&self) -> *mut c_void {
        self.ptr
    }

    /// Whether the address is null.
    pub const fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Number of bytes.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Same as [`size`](Self::size).
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the view covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reinterprets the bytes as mutable elements of `T`.
    ///
    /// # Safety
    /// As for [`VoidView::cast`], and additionally every bit pattern written
    /// through the result must be valid for the original element type.
    pub unsafe fn cast<T>(self) -> DynamicViewMut<'a, T> {
        unsafe { DynamicViewMut::from_raw_parts(self.ptr.cast(), self.len / size_of::<T>()) }
    }
}

impl Default for VoidViewMut<'_> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a, T> From<&'a mut [T]> for VoidViewMut<'a> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for VoidViewMut<'a> {
    fn from(array: &'a mut [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T> From<DynamicViewMut<'a, T>> for VoidViewMut<'a> {
    fn from(mut view: DynamicViewMut<'a, T>) -> Self {
        Self {
            ptr: view.as_mut_ptr().cast(),
            len: view.size() * size_of::<T>(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> From<StaticViewMut<'a, T, N>> for VoidViewMut<'a> {
    fn from(view: StaticViewMut<'a, T, N>) -> Self {
        DynamicViewMut::from(view).into()
    }
}

impl<T> PartialEq<*const T> for VoidViewMut<'_> {
    fn eq(&self, other: &*const T) -> bool {
        self.ptr.cast_const() == other.cast::<c_void>()
    }
}

impl<T> PartialEq<*mut T> for VoidViewMut<'_> {
    fn eq(&self, other: &*mut T) -> bool {
        self.ptr == other.cast::<c_void>()
    }
}

impl Debug for VoidViewMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoidViewMut")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}
