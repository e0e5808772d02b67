/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * Copyright (c) Jan-Paul Bultmann
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use crate::{DynamicView, DynamicViewMut, StaticView, StaticViewMut, VoidView, VoidViewMut};

/// Sources a [`StaticView`] can be made from with its size inferred.
pub trait IntoStaticView<'a, T, const N: usize> {
    /// Converts `self` into a read-only static view.
    fn into_static_view(self) -> StaticView<'a, T, N>;
}

/// Sources a [`StaticViewMut`] can be made from with its size inferred.
pub trait IntoStaticViewMut<'a, T, const N: usize> {
    /// Converts `self` into a mutable static view.
    fn into_static_view_mut(self) -> StaticViewMut<'a, T, N>;
}

impl<'a, T, const N: usize> IntoStaticView<'a, T, N> for &'a [T; N] {
    fn into_static_view(self) -> StaticView<'a, T, N> {
        StaticView::new(self)
    }
}

impl<'a, T, const N: usize> IntoStaticView<'a, T, N> for &'a mut [T; N] {
    fn into_static_view(self) -> StaticView<'a, T, N> {
        StaticView::new(self)
    }
}

impl<'a, T, const N: usize> IntoStaticView<'a, T, N> for StaticView<'a, T, N> {
    fn into_static_view(self) -> StaticView<'a, T, N> {
        self
    }
}

impl<'a, T, const N: usize> IntoStaticView<'a, T, N> for StaticViewMut<'a, T, N> {
    fn into_static_view(self) -> StaticView<'a, T, N> {
        self.into()
    }
}

impl<'a, T, const N: usize> IntoStaticViewMut<'a, T, N> for &'a mut [T; N] {
    fn into_static_view_mut(self) -> StaticViewMut<'a, T, N> {
        StaticViewMut::new(self)
    }
}

impl<'a, T, const N: usize> IntoStaticViewMut<'a, T, N> for StaticViewMut<'a, T, N> {
    fn into_static_view_mut(self) -> StaticViewMut<'a, T, N> {
        self
    }
}

/// Makes a read-only static view, inferring `N` from `source`.
///
/// ```
/// use arrayview::{static_view, StaticView};
///
/// let data = [0i32; 13];
/// let view = static_view(&data);
/// assert_eq!(view.size(), 13);
///
/// // To view fewer elements than the array holds, name the size.
/// let prefix = StaticView::<_, 5>::prefix_of(&data);
/// assert!(static_view(prefix) == data.as_ptr());
/// ```
pub fn static_view<'a, T, const N: usize>(
    source: impl IntoStaticView<'a, T, N>,
) -> StaticView<'a, T, N> {
    source.into_static_view()
}

/// Makes a mutable static view, inferring `N` from `source`.
pub fn static_view_mut<'a, T, const N: usize>(
    source: impl IntoStaticViewMut<'a, T, N>,
) -> StaticViewMut<'a, T, N> {
    source.into_static_view_mut()
}

/// Uniform element count of views, arrays and slices.
///
/// Type-erased views count bytes.
pub trait ArraySize {
    /// Number of elements.
    fn array_size(&self) -> usize;
}

/// Number of elements in `array`, whichever kind of view or array it is.
///
/// ```
/// use arrayview::{array_size, DynamicView, StaticView};
///
/// let data = [0i32; 6];
/// assert_eq!(array_size(&StaticView::<_, 3>::prefix_of(&data)), 3);
/// assert_eq!(array_size(&DynamicView::new(&data[1..])), 5);
/// assert_eq!(array_size(&data), 6);
/// ```
///
/// Trait calls cannot be evaluated in a `const`. There, use the inherent
/// `size()` of [`StaticView`], [`DynamicView`] or [`VoidView`], which is a
/// `const fn`:
///
/// ```
/// use arrayview::{DynamicView, StaticView};
///
/// static DATA: [u8; 13] = [0; 13];
/// const FIXED: StaticView<'static, u8, 3> = StaticView::null();
/// const FIXED_SIZE: usize = FIXED.size();
/// const DYNAMIC_SIZE: usize = DynamicView::new(&[1u8, 2]).size();
/// assert_eq!(FIXED_SIZE, 3);
/// assert_eq!(DYNAMIC_SIZE, 2);
/// assert_eq!(StaticView::<_, 3>::prefix_of(&DATA).size(), FIXED_SIZE);
/// ```
pub fn array_size<A: ArraySize + ?Sized>(array: &A) -> usize {
    array.array_size()
}

impl<T, const N: usize> ArraySize for StaticView<'_, T, N> {
    fn array_size(&self) -> usize {
        N
    }
}

impl<T, const N: usize> ArraySize for StaticViewMut<'_, T, N> {
    fn array_size(&self) -> usize {
        N
    }
}

impl<T> ArraySize for DynamicView<'_, T> {
    fn array_size(&self) -> usize {
        self.size()
    }
}

impl<T> ArraySize for DynamicViewMut<'_, T> {
    fn array_size(&self) -> usize {
        self.size()
    }
}

impl ArraySize for VoidView<'_> {
    fn array_size(&self) -> usize {
        self.size()
    }
}

impl ArraySize for VoidViewMut<'_> {
    fn array_size(&self) -> usize {
        self.size()
    }
}

impl<T, const N: usize> ArraySize for [T; N] {
    fn array_size(&self) -> usize {
        N
    }
}

impl<T> ArraySize for [T] {
    fn array_size(&self) -> usize {
        self.len()
    }
}
