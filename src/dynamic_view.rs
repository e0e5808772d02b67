/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * Copyright (c) Jan-Paul Bultmann
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Range};
use std::ptr;

use crate::upcast::{upcast_slice, upcast_slice_mut};
use crate::{check_slice, check_static_slice, empty_view_access_fail};
use crate::{StaticView, StaticViewMut, Upcast, ViewError};

/// Read-only view of a runtime number of contiguous elements of `T`.
///
/// A default view is null and empty. A view with a non-null address and a
/// size of zero is a different, equally valid, empty view.
///
/// Mutability can be added by conversion but never removed:
///
/// ```compile_fail
/// use arrayview::{DynamicView, DynamicViewMut};
///
/// let data = [1, 2, 3];
/// let view: DynamicViewMut<i32> = DynamicView::new(&data[..]).into();
/// ```
pub struct DynamicView<'a, T> {
    data: Option<&'a [T]>,
}

/// Mutable view of a runtime number of contiguous elements of `T`.
pub struct DynamicViewMut<'a, T> {
    data: Option<&'a mut [T]>,
}

// #[derive(Clone, Copy)] would require `T: Copy`.
impl<T> Clone for DynamicView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DynamicView<'_, T> {}

// Core implementation of DynamicView.
impl<'a, T> DynamicView<'a, T> {
    /// Creates a null, empty view.
    pub const fn null() -> Self {
        Self { data: None }
    }

    /// Creates a view of all elements of `slice`.
    pub const fn new(slice: &'a [T]) -> Self {
        Self { data: Some(slice) }
    }

    /// Creates a view from a pointer and an element count.
    ///
    /// A null `data` produces a null view.
    ///
    /// # Safety
    /// If `data` is not null, the requirements of
    /// [`std::slice::from_raw_parts`] apply for `'a`. If it is null, `len`
    /// must be zero.
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        if data.is_null() {
            debug_assert!(len == 0, "null view with a length of {}", len);
            Self::null()
        } else {
            Self::new(unsafe { std::slice::from_raw_parts(data, len) })
        }
    }

    /// Converts the view into a view of the base element type `B`.
    pub fn upcast<B>(self) -> DynamicView<'a, B>
    where
        T: Upcast<B>,
    {
        DynamicView {
            data: self.data.map(upcast_slice),
        }
    }

    /// Address of the first element, null for a null view.
    pub const fn data(&self) -> *const T {
        match self.data {
            Some(slice) => slice.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Same as [`data`](Self::data).
    pub const fn as_ptr(&self) -> *const T {
        self.data()
    }

    /// Whether the address is null.
    pub const fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Number of elements.
    pub const fn size(&self) -> usize {
        match self.data {
            Some(slice) => slice.len(),
            None => 0,
        }
    }

    /// Same as [`size`](Self::size).
    pub const fn len(&self) -> usize {
        self.size()
    }

    /// Whether the view has no elements.
    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The referenced elements. Empty for a null view.
    pub const fn as_slice(self) -> &'a [T] {
        match self.data {
            Some(slice) => slice,
            None => &[],
        }
    }

    /// The half-open pointer range `data()..data() + size()`.
    pub fn as_ptr_range(self) -> Range<*const T> {
        match self.data {
            Some(slice) => slice.as_ptr_range(),
            None => ptr::null()..ptr::null(),
        }
    }

    /// First element. Panics on an empty view.
    #[track_caller]
    pub fn front(self) -> &'a T {
        match self.as_slice().first() {
            Some(first) => first,
            None => empty_view_access_fail(),
        }
    }

    /// Last element. Panics on an empty view.
    #[track_caller]
    pub fn back(self) -> &'a T {
        match self.as_slice().last() {
            Some(last) => last,
            None => empty_view_access_fail(),
        }
    }

    /// Elements `begin..end`.
    ///
    /// Panics unless `begin <= end <= size()`.
    #[track_caller]
    pub fn slice(self, begin: usize, end: usize) -> DynamicView<'a, T> {
        check_slice(begin, end, self.size());
        // SAFETY: the range was checked above.
        unsafe { self.slice_unchecked(begin, end) }
    }

    /// Elements `begin..end` without bounds checks.
    ///
    /// # Safety
    /// `begin <= end <= size()` must hold.
    pub unsafe fn slice_unchecked(self, begin: usize, end: usize) -> DynamicView<'a, T> {
        debug_assert!(
            begin <= end && end <= self.size(),
            "invalid slice {}..{}",
            begin,
            end
        );
        match self.data {
            Some(slice) => DynamicView::new(unsafe { slice.get_unchecked(begin..end) }),
            None => DynamicView::null(),
        }
    }

    /// The first `end` elements.
    #[track_caller]
    pub fn prefix(self, end: usize) -> DynamicView<'a, T> {
        self.slice(0, end)
    }

    /// Elements from `begin` to the end.
    #[track_caller]
    pub fn suffix(self, begin: usize) -> DynamicView<'a, T> {
        self.slice(begin, self.size())
    }

    /// `M` elements starting at `begin` as a static view.
    ///
    /// Panics unless `begin + M <= size()`.
    #[track_caller]
    pub fn slice_static<const M: usize>(self, begin: usize) -> StaticView<'a, T, M> {
        check_static_slice(begin, M, self.size());
        match self.data {
            // SAFETY: `begin + M <= size()` was checked above.
            Some(slice) => {
                StaticView::new(unsafe { &*(slice.as_ptr().add(begin) as *const [T; M]) })
            }
            None => StaticView::null(),
        }
    }

    /// The first `M` elements as a static view.
    #[track_caller]
    pub fn prefix_static<const M: usize>(self) -> StaticView<'a, T, M> {
        self.slice_static::<M>(0)
    }
}

impl<T> Default for DynamicView<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Deref for DynamicView<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for DynamicView<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<'a, T> IntoIterator for DynamicView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> From<&'a [T]> for DynamicView<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for DynamicView<'a, T> {
    fn from(array: &'a [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T, const N: usize> From<StaticView<'a, T, N>> for DynamicView<'a, T> {
    fn from(view: StaticView<'a, T, N>) -> Self {
        match view.as_array() {
            Some(array) => Self::new(array),
            None => Self::null(),
        }
    }
}

impl<'a, T, const N: usize> From<StaticViewMut<'a, T, N>> for DynamicView<'a, T> {
    fn from(view: StaticViewMut<'a, T, N>) -> Self {
        StaticView::from(view).into()
    }
}

impl<'a, T, const N: usize> TryFrom<DynamicView<'a, T>> for StaticView<'a, T, N> {
    type Error = ViewError;

    fn try_from(view: DynamicView<'a, T>) -> Result<Self, Self::Error> {
        match view.data {
            Some(slice) => StaticView::try_from(slice),
            None if N == 0 => Ok(StaticView::null()),
            None => Err(ViewError::Length {
                expected: N,
                actual: 0,
            }),
        }
    }
}

impl<T> From<DynamicView<'_, T>> for *const T {
    fn from(view: DynamicView<'_, T>) -> Self {
        view.data()
    }
}

impl<T> PartialEq<*const T> for DynamicView<'_, T> {
    fn eq(&self, other: &*const T) -> bool {
        self.data() == *other
    }
}

impl<T> PartialEq<*mut T> for DynamicView<'_, T> {
    fn eq(&self, other: &*mut T) -> bool {
        self.data() == other.cast_const()
    }
}

impl<T> PartialOrd<*const T> for DynamicView<'_, T> {
    fn partial_cmp(&self, other: &*const T) -> Option<Ordering> {
        self.data().partial_cmp(other)
    }
}

impl<T: PartialEq> PartialEq for DynamicView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicView<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicView<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicView<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialOrd> PartialOrd for DynamicView<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynamicView<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynamicView<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for DynamicView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

// Core implementation of DynamicViewMut.
impl<'a, T> DynamicViewMut<'a, T> {
    /// Creates a null, empty view.
    pub const fn null() -> Self {
        Self { data: None }
    }

    /// Creates a view of all elements of `slice`.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { data: Some(slice) }
    }

    /// Creates a view from a pointer and an element count.
    ///
    /// # Safety
    /// If `data` is not null, the requirements of
    /// [`std::slice::from_raw_parts_mut`] apply for `'a`. If it is null,
    /// `len` must be zero.
    pub unsafe fn from_raw_parts(data: *mut T, len: usize) -> Self {
        if data.is_null() {
            debug_assert!(len == 0, "null view with a length of {}", len);
            Self::null()
        } else {
            Self::new(unsafe { std::slice::from_raw_parts_mut(data, len) })
        }
    }

    /// Converts the view into a view of the base element type `B`.
    pub fn upcast<B>(self) -> DynamicViewMut<'a, B>
    where
        T: Upcast<B>,
    {
        DynamicViewMut {
            data: self.data.map(upcast_slice_mut),
        }
    }

    /// Address of the first element, null for a null view.
    pub fn data(&self) -> *const T {
        self.as_ptr()
    }

    /// Same as [`data`](Self::data).
    pub fn as_ptr(&self) -> *const T {
        match &self.data {
            Some(slice) => slice.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Mutable address of the first element, null for a null view.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match &mut self.data {
            Some(slice) => slice.as_mut_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// The half-open pointer range `data()..data() + size()`, `null..null`
    /// for a null view.
    pub fn as_ptr_range(&self) -> Range<*const T> {
        match &self.data {
            Some(slice) => slice.as_ptr_range(),
            None => ptr::null()..ptr::null(),
        }
    }

    /// Mutable variant of [`as_ptr_range`](Self::as_ptr_range).
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        match &mut self.data {
            Some(slice) => slice.as_mut_ptr_range(),
            None => ptr::null_mut()..ptr::null_mut(),
        }
    }

    /// Whether the address is null.
    pub const fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        match &self.data {
            Some(slice) => slice.len(),
            None => 0,
        }
    }

    /// Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Lends the view out for a shorter lifetime.
    pub fn reborrow(&mut self) -> DynamicViewMut<'_, T> {
        DynamicViewMut {
            data: self.data.as_deref_mut(),
        }
    }

    /// A read-only view of the same elements.
    pub fn as_view(&self) -> DynamicView<'_, T> {
        DynamicView {
            data: self.data.as_deref(),
        }
    }

    /// The referenced elements. Empty for a null view.
    pub fn into_slice(self) -> &'a mut [T] {
        match self.data {
            Some(slice) => slice,
            None => &mut [],
        }
    }

    /// First element. Panics on an empty view.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.first() {
            Some(first) => first,
            None => empty_view_access_fail(),
        }
    }

    /// First element, mutably. Panics on an empty view.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.first_mut() {
            Some(first) => first,
            None => empty_view_access_fail(),
        }
    }

    /// Last element. Panics on an empty view.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.last() {
            Some(last) => last,
            None => empty_view_access_fail(),
        }
    }

    /// Last element, mutably. Panics on an empty view.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.last_mut() {
            Some(last) => last,
            None => empty_view_access_fail(),
        }
    }

    /// Elements `begin..end`.
    #[track_caller]
    pub fn slice(self, begin: usize, end: usize) -> DynamicViewMut<'a, T> {
        check_slice(begin, end, self.size());
        // SAFETY: the range was checked above.
        unsafe { self.slice_unchecked(begin, end) }
    }

    /// Elements `begin..end` without bounds checks.
    ///
    /// # Safety
    /// `begin <= end <= size()` must hold.
    pub unsafe fn slice_unchecked(self, begin: usize, end: usize) -> DynamicViewMut<'a, T> {
        debug_assert!(
            begin <= end && end <= self.size(),
            "invalid slice {}..{}",
            begin,
            end
        );
        match self.data {
            Some(slice) => DynamicViewMut::new(unsafe { slice.get_unchecked_mut(begin..end) }),
            None => DynamicViewMut::null(),
        }
    }

    /// The first `end` elements.
    #[track_caller]
    pub fn prefix(self, end: usize) -> DynamicViewMut<'a, T> {
        self.slice(0, end)
    }

    /// Elements from `begin` to the end.
    #[track_caller]
    pub fn suffix(self, begin: usize) -> DynamicViewMut<'a, T> {
        let end = self.size();
        self.slice(begin, end)
    }

    /// `M` elements starting at `begin` as a static view.
    #[track_caller]
    pub fn slice_static<const M: usize>(self, begin: usize) -> StaticViewMut<'a, T, M> {
        check_static_slice(begin, M, self.size());
        match self.data {
            // SAFETY: `begin + M <= size()` was checked above.
            Some(slice) => StaticViewMut::new(unsafe {
                &mut *(slice.as_mut_ptr().add(begin) as *mut [T; M])
            }),
            None => StaticViewMut::null(),
        }
    }

    /// The first `M` elements as a static view.
    #[track_caller]
    pub fn prefix_static<const M: usize>(self) -> StaticViewMut<'a, T, M> {
        self.slice_static::<M>(0)
    }
}

impl<T> Default for DynamicViewMut<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Deref for DynamicViewMut<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        match &self.data {
            Some(slice) => &slice[..],
            None => &[],
        }
    }
}

impl<T> DerefMut for DynamicViewMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.data {
            Some(slice) => &mut slice[..],
            None => &mut [],
        }
    }
}

impl<T> AsRef<[T]> for DynamicViewMut<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynamicViewMut<'_, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<'a, T> IntoIterator for DynamicViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

impl<'a, T> From<&'a mut [T]> for DynamicViewMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for DynamicViewMut<'a, T> {
    fn from(array: &'a mut [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T, const N: usize> From<StaticViewMut<'a, T, N>> for DynamicViewMut<'a, T> {
    fn from(view: StaticViewMut<'a, T, N>) -> Self {
        match view.into_array() {
            Some(array) => Self::new(array),
            None => Self::null(),
        }
    }
}

impl<'a, T> From<DynamicViewMut<'a, T>> for DynamicView<'a, T> {
    fn from(view: DynamicViewMut<'a, T>) -> Self {
        match view.data {
            Some(slice) => DynamicView::new(slice),
            None => DynamicView::null(),
        }
    }
}

impl<'a, T, const N: usize> TryFrom<DynamicViewMut<'a, T>> for StaticViewMut<'a, T, N> {
    type Error = ViewError;

    fn try_from(view: DynamicViewMut<'a, T>) -> Result<Self, Self::Error> {
        match view.data {
            Some(slice) => StaticViewMut::try_from(slice),
            None if N == 0 => Ok(StaticViewMut::null()),
            None => Err(ViewError::Length {
                expected: N,
                actual: 0,
            }),
        }
    }
}

impl<T> From<DynamicViewMut<'_, T>> for *mut T {
    fn from(mut view: DynamicViewMut<'_, T>) -> Self {
        view.as_mut_ptr()
    }
}

impl<T> PartialEq<*const T> for DynamicViewMut<'_, T> {
    fn eq(&self, other: &*const T) -> bool {
        self.as_ptr() == *other
    }
}

impl<T> PartialEq<*mut T> for DynamicViewMut<'_, T> {
    fn eq(&self, other: &*mut T) -> bool {
        self.as_ptr() == other.cast_const()
    }
}

impl<T: PartialEq> PartialEq for DynamicViewMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicViewMut<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self[..] == other[..]
    }
}

impl<T: Debug> Debug for DynamicViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self[..], f)
    }
}
