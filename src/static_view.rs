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

use crate::upcast::{upcast_array, upcast_array_mut};
use crate::{check_slice, check_static_slice, null_view_access_fail};
use crate::{DynamicView, DynamicViewMut, Upcast, ViewError};

/// Read-only view of exactly `N` contiguous elements of `T`.
///
/// The element count is part of the type, so a `StaticView` stores nothing
/// but the address of its first element. It is `Copy` and never owns the
/// memory it refers to.
///
/// # Null views
///
/// [`StaticView::null`] (and [`Default`]) produce a view whose address is
/// null but whose [`size`](StaticView::size) is still `N`, and
/// [`is_empty`](StaticView::is_empty) reports `N == 0` regardless of the
/// address:
///
/// ```
/// use arrayview::StaticView;
///
/// let view = StaticView::<i32, 5>::default();
/// assert!(view.is_null());
/// assert_eq!(view.size(), 5);
/// assert!(!view.is_empty());
/// // There is nothing to read, the element slice is empty.
/// assert!(view.as_slice().is_empty());
/// ```
///
/// Element access through a null view panics and slicing it yields another
/// null view. Only the address, size and emptiness queries are meaningful.
///
/// A null address always means "no elements" for [`DynamicView`] and
/// [`VoidView`](crate::VoidView), so converting a null static view into
/// either of them produces their null, empty view and drops `N`:
///
/// ```
/// use arrayview::{array_size, DynamicView, StaticView, VoidView};
///
/// let fixed = StaticView::<u16, 4>::null();
/// assert_eq!(array_size(&fixed), 4);
/// assert_eq!(DynamicView::from(fixed).size(), 0);
/// assert_eq!(VoidView::from(fixed).size(), 0);
/// ```
///
/// # Compile-time checks
///
/// A zero-sized view has no first or last element:
///
/// ```compile_fail
/// use arrayview::StaticView;
///
/// let data: [i32; 0] = [];
/// let _ = StaticView::new(&data).front();
/// ```
///
/// ```compile_fail
/// use arrayview::StaticView;
///
/// let data: [i32; 0] = [];
/// let _ = StaticView::new(&data).back();
/// ```
///
/// A static sub-view cannot be larger than the view it is taken from:
///
/// ```compile_fail
/// use arrayview::StaticView;
///
/// let data = [1, 2, 3];
/// let _ = StaticView::new(&data).slice_static::<4>(0);
/// ```
///
/// # No construction from bare pointers
///
/// A pointer carries no length, so there is no conversion from one:
///
/// ```compile_fail
/// use arrayview::StaticView;
///
/// let data = [0i32; 5];
/// let view: StaticView<i32, 5> = data.as_ptr().into();
/// ```
pub struct StaticView<'a, T, const N: usize> {
    data: Option<&'a [T; N]>,
}

/// Mutable view of exactly `N` contiguous elements of `T`.
///
/// Unlike [`StaticView`] this view is not `Copy`; use
/// [`reborrow`](StaticViewMut::reborrow) to lend it out temporarily. It
/// converts into a [`StaticView`], never the other way around:
///
/// ```compile_fail
/// use arrayview::{StaticView, StaticViewMut};
///
/// let data = [0i32; 3];
/// let view: StaticViewMut<i32, 3> = StaticView::new(&data).into();
/// ```
///
/// Null views behave as documented on [`StaticView`].
pub struct StaticViewMut<'a, T, const N: usize> {
    data: Option<&'a mut [T; N]>,
}

// #[derive(Clone, Copy)] would require `T: Copy`.
impl<T, const N: usize> Clone for StaticView<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for StaticView<'_, T, N> {}

// Core implementation of StaticView.
impl<'a, T, const N: usize> StaticView<'a, T, N> {
    /// Number of elements in every view of this type.
    pub const SIZE: usize = N;

    /// Creates a view with a null address. See the type documentation.
    pub const fn null() -> Self {
        Self { data: None }
    }

    /// Creates a view of all elements of `array`.
    pub const fn new(array: &'a [T; N]) -> Self {
        Self { data: Some(array) }
    }

    /// Creates a view of the first `N` elements of a larger array.
    ///
    /// An array shorter than `N` is rejected at compile time.
    pub const fn prefix_of<const L: usize>(array: &'a [T; L]) -> Self {
        const { assert!(N <= L, "array is shorter than the view") };
        // SAFETY: `[T; N]` is a prefix of `[T; L]` with identical layout and
        // `N <= L` was asserted above.
        let data = unsafe { &*(array as *const [T; L] as *const [T; N]) };
        Self { data: Some(data) }
    }

    /// Creates a view from a pointer to the first of `N` elements.
    ///
    /// A null `data` produces a null view.
    ///
    /// # Safety
    /// If `data` is not null it must point to `N` initialized, properly
    /// aligned elements that stay valid and unmodified for `'a`.
    pub unsafe fn from_raw(data: *const T) -> Self {
        Self {
            data: unsafe { data.cast::<[T; N]>().as_ref() },
        }
    }

    /// Views an array of a derived element type as its base type.
    pub fn from_derived<D: Upcast<T>>(array: &'a [D; N]) -> Self {
        StaticView::new(array).upcast()
    }

    /// Converts the view into a view of the base element type `B`.
    ///
    /// The address and the size are preserved.
    pub fn upcast<B>(self) -> StaticView<'a, B, N>
    where
        T: Upcast<B>,
    {
        StaticView {
            data: self.data.map(upcast_array),
        }
    }

    /// Address of the first element, null for a null view.
    pub const fn data(&self) -> *const T {
        match self.data {
            Some(array) => (array as *const [T; N]).cast::<T>(),
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

    /// Number of elements, always `N`.
    pub const fn size(&self) -> usize {
        N
    }

    /// Same as [`size`](Self::size).
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether `N` is zero. Does not depend on the address.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The referenced array, `None` for a null view.
    pub const fn as_array(self) -> Option<&'a [T; N]> {
        self.data
    }

    /// The referenced elements. Empty for a null view.
    pub fn as_slice(self) -> &'a [T] {
        match self.data {
            Some(array) => array,
            None => &[],
        }
    }

    /// The half-open pointer range `data()..data() + N`.
    pub fn as_ptr_range(self) -> Range<*const T> {
        match self.data {
            Some(array) => array.as_ptr_range(),
            None => ptr::null()..ptr::null(),
        }
    }

    /// First element.
    #[track_caller]
    pub fn front(self) -> &'a T {
        const { assert!(N > 0, "front() of a zero-sized view") };
        match self.data {
            Some(array) => &array[0],
            None => null_view_access_fail(),
        }
    }

    /// Last element.
    #[track_caller]
    pub fn back(self) -> &'a T {
        const { assert!(N > 0, "back() of a zero-sized view") };
        match self.data {
            Some(array) => &array[N - 1],
            None => null_view_access_fail(),
        }
    }

    /// Elements `begin..end` as a dynamic view.
    ///
    /// Panics unless `begin <= end <= N`.
    #[track_caller]
    pub fn slice(self, begin: usize, end: usize) -> DynamicView<'a, T> {
        check_slice(begin, end, N);
        // SAFETY: the range was checked above.
        unsafe { self.slice_unchecked(begin, end) }
    }

    /// Elements `begin..end` without bounds checks.
    ///
    /// # Safety
    /// `begin <= end <= N` must hold.
    pub unsafe fn slice_unchecked(self, begin: usize, end: usize) -> DynamicView<'a, T> {
        debug_assert!(begin <= end && end <= N, "invalid slice {}..{}", begin, end);
        match self.data {
            Some(array) => DynamicView::new(unsafe { array.get_unchecked(begin..end) }),
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
        self.slice(begin, N)
    }

    /// `M` elements starting at `begin` as a static view.
    ///
    /// `M > N` is rejected at compile time, `begin + M > N` panics.
    #[track_caller]
    pub fn slice_static<const M: usize>(self, begin: usize) -> StaticView<'a, T, M> {
        const { assert!(M <= N, "static slice is larger than the view") };
        check_static_slice(begin, M, N);
        StaticView {
            // SAFETY: `begin + M <= N` was checked above.
            data: self
                .data
                .map(|array| unsafe { &*(array.as_ptr().add(begin) as *const [T; M]) }),
        }
    }

    /// The first `M` elements as a static view.
    #[track_caller]
    pub fn prefix_static<const M: usize>(self) -> StaticView<'a, T, M> {
        self.slice_static::<M>(0)
    }
}

impl<T, const N: usize> Default for StaticView<'_, T, N> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T, const N: usize> Deref for StaticView<'_, T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticView<'_, T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<'a, T, const N: usize> IntoIterator for StaticView<'a, T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for StaticView<'a, T, N> {
    fn from(array: &'a [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T, const N: usize> TryFrom<&'a [T]> for StaticView<'a, T, N> {
    type Error = ViewError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        match <&[T; N]>::try_from(slice) {
            Ok(array) => Ok(Self::new(array)),
            Err(_) => Err(ViewError::Length {
                expected: N,
                actual: slice.len(),
            }),
        }
    }
}

impl<T, const N: usize> From<StaticView<'_, T, N>> for *const T {
    fn from(view: StaticView<'_, T, N>) -> Self {
        view.data()
    }
}

impl<T, const N: usize> PartialEq<*const T> for StaticView<'_, T, N> {
    fn eq(&self, other: &*const T) -> bool {
        self.data() == *other
    }
}

impl<T, const N: usize> PartialEq<*mut T> for StaticView<'_, T, N> {
    fn eq(&self, other: &*mut T) -> bool {
        self.data() == other.cast_const()
    }
}

impl<T, const N: usize> PartialOrd<*const T> for StaticView<'_, T, N> {
    fn partial_cmp(&self, other: &*const T) -> Option<Ordering> {
        self.data().partial_cmp(other)
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticView<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for StaticView<'_, T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for StaticView<'_, T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for StaticView<'_, T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialOrd, const N: usize> PartialOrd for StaticView<'_, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const N: usize> Ord for StaticView<'_, T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, const N: usize> Hash for StaticView<'_, T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug, const N: usize> Debug for StaticView<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            Some(array) => Debug::fmt(&array[..], f),
            None => f.write_str("null"),
        }
    }
}

// Core implementation of StaticViewMut.
impl<'a, T, const N: usize> StaticViewMut<'a, T, N> {
    /// Number of elements in every view of this type.
    pub const SIZE: usize = N;

    /// Creates a view with a null address. See [`StaticView`].
    pub const fn null() -> Self {
        Self { data: None }
    }

    /// Creates a view of all elements of `array`.
    pub fn new(array: &'a mut [T; N]) -> Self {
        Self { data: Some(array) }
    }

    /// Creates a view of the first `N` elements of a larger array.
    pub fn prefix_of<const L: usize>(array: &'a mut [T; L]) -> Self {
        const { assert!(N <= L, "array is shorter than the view") };
        // SAFETY: see `StaticView::prefix_of`.
        let data = unsafe { &mut *(array as *mut [T; L] as *mut [T; N]) };
        Self { data: Some(data) }
    }

    /// Creates a view from a pointer to the first of `N` elements.
    ///
    /// # Safety
    /// If `data` is not null it must point to `N` initialized, properly
    /// aligned elements that nothing else accesses for `'a`.
    pub unsafe fn from_raw(data: *mut T) -> Self {
        Self {
            data: unsafe { data.cast::<[T; N]>().as_mut() },
        }
    }

    /// Views an array of a derived element type as its base type.
    pub fn from_derived<D: Upcast<T>>(array: &'a mut [D; N]) -> Self {
        StaticViewMut::new(array).upcast()
    }

    /// Converts the view into a view of the base element type `B`.
    pub fn upcast<B>(self) -> StaticViewMut<'a, B, N>
    where
        T: Upcast<B>,
    {
        StaticViewMut {
            data: self.data.map(upcast_array_mut),
        }
    }

    /// Address of the first element, null for a null view.
    pub fn data(&self) -> *const T {
        self.as_ptr()
    }

    /// Same as [`data`](Self::data).
    pub fn as_ptr(&self) -> *const T {
        match &self.data {
            Some(array) => array.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Mutable address of the first element, null for a null view.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match &mut self.data {
            Some(array) => array.as_mut_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// The half-open pointer range `data()..data() + N`, `null..null` for a
    /// null view.
    pub fn as_ptr_range(&self) -> Range<*const T> {
        match &self.data {
            Some(array) => array.as_ptr_range(),
            None => ptr::null()..ptr::null(),
        }
    }

    /// Mutable variant of [`as_ptr_range`](Self::as_ptr_range).
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        match &mut self.data {
            Some(array) => array.as_mut_ptr_range(),
            None => ptr::null_mut()..ptr::null_mut(),
        }
    }

    /// Whether the address is null.
    pub const fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Number of elements, always `N`.
    pub const fn size(&self) -> usize {
        N
    }

    /// Same as [`size`](Self::size).
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether `N` is zero. Does not depend on the address.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Lends the view out for a shorter lifetime.
    pub fn reborrow(&mut self) -> StaticViewMut<'_, T, N> {
        StaticViewMut {
            data: self.data.as_deref_mut(),
        }
    }

    /// A read-only view of the same elements.
    pub fn as_view(&self) -> StaticView<'_, T, N> {
        StaticView {
            data: self.data.as_deref(),
        }
    }

    /// The referenced array, `None` for a null view.
    pub fn into_array(self) -> Option<&'a mut [T; N]> {
        self.data
    }

    /// The referenced elements. Empty for a null view.
    pub fn into_slice(self) -> &'a mut [T] {
        match self.data {
            Some(array) => array,
            None => &mut [],
        }
    }

    /// First element.
    #[track_caller]
    pub fn front(&self) -> &T {
        const { assert!(N > 0, "front() of a zero-sized view") };
        match &self.data {
            Some(array) => &array[0],
            None => null_view_access_fail(),
        }
    }

    /// First element, mutably.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        const { assert!(N > 0, "front() of a zero-sized view") };
        match &mut self.data {
            Some(array) => &mut array[0],
            None => null_view_access_fail(),
        }
    }

    /// Last element.
    #[track_caller]
    pub fn back(&self) -> &T {
        const { assert!(N > 0, "back() of a zero-sized view") };
        match &self.data {
            Some(array) => &array[N - 1],
            None => null_view_access_fail(),
        }
    }

    /// Last element, mutably.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        const { assert!(N > 0, "back() of a zero-sized view") };
        match &mut self.data {
            Some(array) => &mut array[N - 1],
            None => null_view_access_fail(),
        }
    }

    /// Elements `begin..end` as a dynamic view.
    #[track_caller]
    pub fn slice(self, begin: usize, end: usize) -> DynamicViewMut<'a, T> {
        check_slice(begin, end, N);
        // SAFETY: the range was checked above.
        unsafe { self.slice_unchecked(begin, end) }
    }

    /// Elements `begin..end` without bounds checks.
    ///
    /// # Safety
    /// `begin <= end <= N` must hold.
    pub unsafe fn slice_unchecked(self, begin: usize, end: usize) -> DynamicViewMut<'a, T> {
        debug_assert!(begin <= end && end <= N, "invalid slice {}..{}", begin, end);
        match self.data {
            Some(array) => DynamicViewMut::new(unsafe { array.get_unchecked_mut(begin..end) }),
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
        self.slice(begin, N)
    }

    /// `M` elements starting at `begin` as a static view.
    #[track_caller]
    pub fn slice_static<const M: usize>(self, begin: usize) -> StaticViewMut<'a, T, M> {
        const { assert!(M <= N, "static slice is larger than the view") };
        check_static_slice(begin, M, N);
        StaticViewMut {
            // SAFETY: `begin + M <= N` was checked above.
            data: self
                .data
                .map(|array| unsafe { &mut *(array.as_mut_ptr().add(begin) as *mut [T; M]) }),
        }
    }

    /// The first `M` elements as a static view.
    #[track_caller]
    pub fn prefix_static<const M: usize>(self) -> StaticViewMut<'a, T, M> {
        self.slice_static::<M>(0)
    }
}

impl<T, const N: usize> Default for StaticViewMut<'_, T, N> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T, const N: usize> Deref for StaticViewMut<'_, T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        match &self.data {
            Some(array) => &array[..],
            None => &[],
        }
    }
}

impl<T, const N: usize> DerefMut for StaticViewMut<'_, T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.data {
            Some(array) => &mut array[..],
            None => &mut [],
        }
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticViewMut<'_, T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsMut<[T]> for StaticViewMut<'_, T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<'a, T, const N: usize> IntoIterator for StaticViewMut<'a, T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for StaticViewMut<'a, T, N> {
    fn from(array: &'a mut [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T, const N: usize> TryFrom<&'a mut [T]> for StaticViewMut<'a, T, N> {
    type Error = ViewError;

    fn try_from(slice: &'a mut [T]) -> Result<Self, Self::Error> {
        let actual = slice.len();
        match <&mut [T; N]>::try_from(slice) {
            Ok(array) => Ok(Self::new(array)),
            Err(_) => Err(ViewError::Length {
                expected: N,
                actual,
            }),
        }
    }
}

impl<'a, T, const N: usize> From<StaticViewMut<'a, T, N>> for StaticView<'a, T, N> {
    fn from(view: StaticViewMut<'a, T, N>) -> Self {
        match view.data {
            Some(array) => StaticView::new(array),
            None => StaticView::null(),
        }
    }
}

impl<T, const N: usize> From<StaticViewMut<'_, T, N>> for *mut T {
    fn from(mut view: StaticViewMut<'_, T, N>) -> Self {
        view.as_mut_ptr()
    }
}

impl<T, const N: usize> PartialEq<*const T> for StaticViewMut<'_, T, N> {
    fn eq(&self, other: &*const T) -> bool {
        self.as_ptr() == *other
    }
}

impl<T, const N: usize> PartialEq<*mut T> for StaticViewMut<'_, T, N> {
    fn eq(&self, other: &*mut T) -> bool {
        self.as_ptr() == other.cast_const()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticViewMut<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for StaticViewMut<'_, T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self[..] == other[..]
    }
}

impl<T: Debug, const N: usize> Debug for StaticViewMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.as_view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::{StaticView, StaticViewMut};
    use crate::{DynamicView, ViewError};

    #[test]
    fn null_keeps_compile_time_size() {
        let view = StaticView::<i32, 5>::null();
        assert!(view.is_null());
        assert_eq!(view, std::ptr::null::<i32>());
        assert_eq!(view.size(), StaticView::<i32, 5>::SIZE);
        assert_eq!(view.size(), 5);
        assert!(!view.is_empty());

        const CONST_VIEW: StaticView<'static, i32, 5> = StaticView::null();
        assert!(CONST_VIEW.is_null());
        assert_eq!(CONST_VIEW.size(), 5);

        let zero = StaticView::<i32, 0>::default();
        assert!(zero.is_null());
        assert!(zero.is_empty());
    }

    #[test]
    fn null_views_have_no_elements() {
        let view = StaticView::<i32, 3>::null();
        assert!(view.as_slice().is_empty());
        assert!(view.get(0).is_none());
        assert!(view.slice(1, 3).is_null());
        assert!(view.slice_static::<2>(1).is_null());
        assert_eq!(format!("{:?}", view), "null");
    }

    #[test]
    #[should_panic(expected = "null view")]
    fn front_of_null_view_panics() {
        let view = StaticView::<i32, 3>::null();
        let _ = view.front();
    }

    #[test]
    fn construct_from_array() {
        let a = [0i32; 13];
        let view = StaticView::new(&a);
        assert_eq!(view, a.as_ptr());
        assert_eq!(view.size(), 13);

        let prefix = StaticView::<i32, 5>::prefix_of(&a);
        assert_eq!(prefix, a.as_ptr());
        assert_eq!(prefix.size(), 5);
    }

    #[test]
    fn construct_in_const_context() {
        const ARRAY30: [i32; 30] = [0; 30];
        const VIEW: StaticView<'static, i32, 5> = StaticView::prefix_of(&ARRAY30);
        const NOT_NULL: bool = !VIEW.is_null();
        assert!(NOT_NULL);
        assert_eq!(VIEW.size(), 5);
    }

    #[test]
    fn try_from_slice_checks_length() {
        let data = vec![1, 2, 3];
        let view = StaticView::<i32, 3>::try_from(&data[..]).unwrap();
        assert_eq!(view, [1, 2, 3]);

        let err = StaticView::<i32, 4>::try_from(&data[..]).unwrap_err();
        assert_eq!(
            err,
            ViewError::Length {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn pointer_conversion() {
        let a = [0i32; 7];
        let view = StaticView::new(&a);
        let p: *const i32 = view.into();
        assert_eq!(p, a.as_ptr());
        assert_eq!(p.wrapping_add(2), &view[2] as *const i32);
        assert!(view < a.as_ptr().wrapping_add(1));
    }

    #[test]
    fn access() {
        let mut a = [0i32; 7];
        let mut view = StaticViewMut::new(&mut a);
        for (i, x) in view.iter_mut().enumerate() {
            *x = i as i32;
        }
        assert_eq!(*view.front(), 0);
        assert_eq!(*view.back(), 6);
        assert_eq!(view[4], 4);
        let range = view.as_mut_ptr_range();
        assert_eq!(unsafe { range.end.offset_from(range.start) }, 7);
        *view.front_mut() = 10;
        *view.back_mut() = 16;
        assert_eq!(a, [10, 1, 2, 3, 4, 5, 16]);
    }

    #[test]
    fn mutable_pointer_ranges() {
        let mut a = [0u32; 4];
        let view = StaticViewMut::new(&mut a);
        let range = view.as_ptr_range();
        assert_eq!(range.start, view.data());
        assert_eq!(range.end, view.data().wrapping_add(4));

        let null = StaticViewMut::<u32, 4>::null();
        assert_eq!(null.as_ptr_range(), std::ptr::null()..std::ptr::null());
    }

    #[test]
    fn iterate_mutably() {
        let mut a = [0i32; 5];
        for x in StaticViewMut::new(&mut a) {
            *x = 3;
        }
        assert_eq!(a, [3; 5]);
    }

    #[test]
    fn slice_to_static() {
        let data = [1, 2, 3, 4, 5];
        let view = StaticView::new(&data);
        let b: StaticView<i32, 3> = view.slice_static(1);
        assert_eq!(b, [2, 3, 4]);
        assert_eq!(b, data[1..].as_ptr());
        assert_eq!(view.prefix_static::<3>(), [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "exceeds view length")]
    fn slice_static_out_of_range_panics() {
        let data = [1, 2, 3, 4, 5];
        let _ = StaticView::new(&data).slice_static::<3>(3);
    }

    #[test]
    #[should_panic(expected = "invalid slice")]
    fn reversed_slice_panics() {
        let data = [1, 2, 3, 4, 5];
        let _ = StaticView::new(&data).slice(3, 1);
    }

    #[test]
    fn mutable_slices_write_through() {
        let mut data = [1, 2, 3, 4, 5];
        let mut view = StaticViewMut::new(&mut data);
        view.reborrow().suffix(3).fill(0);
        view.reborrow().slice_static::<2>(1).copy_from_slice(&[7, 8]);
        assert_eq!(view.as_view(), [1, 7, 8, 0, 0]);
        let read_only: StaticView<i32, 5> = view.into();
        let dynamic: DynamicView<i32> = read_only.prefix(2);
        assert_eq!(dynamic, [1, 7]);
    }

    #[test]
    fn element_wise_equality_and_hash() {
        use std::collections::HashSet;

        let a = [1u8, 2, 3];
        let b = [1u8, 2, 3];
        assert_eq!(StaticView::new(&a), StaticView::new(&b));
        assert_ne!(StaticView::new(&a), b.as_ptr());

        let mut set = HashSet::new();
        set.insert(StaticView::new(&a));
        assert!(set.contains(&StaticView::new(&b)));
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    pub fn check_slice_bounds() {
        let data = [0u8; 8];
        let view = StaticView::new(&data);
        let begin: usize = kani::any();
        let end: usize = kani::any();
        kani::assume(begin <= end && end <= 8);
        let sliced = view.slice(begin, end);
        assert_eq!(sliced.size(), end - begin);
        assert_eq!(sliced.data(), data.as_ptr().wrapping_add(begin));
    }

    #[kani::proof]
    pub fn check_slice_static_bounds() {
        let data = [0u8; 8];
        let view = StaticView::new(&data);
        let begin: usize = kani::any();
        kani::assume(begin <= 5);
        let sliced = view.slice_static::<3>(begin);
        assert_eq!(sliced.data(), data.as_ptr().wrapping_add(begin));
    }
}
