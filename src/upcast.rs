/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * Copyright (c) Jan-Paul Bultmann
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Rust has no class inheritance, so "a `Derived` is a `Base`" is expressed
//! with the [`Upcast`] marker trait. Views of `Derived` elements convert into
//! views of `Base` elements in place, keeping their address and their size.
//!
//! ```
//! use arrayview::{StaticView, Upcast};
//!
//! #[repr(C)]
//! struct Base {
//!     id: u32,
//! }
//!
//! #[repr(transparent)]
//! struct Tagged(Base);
//!
//! // SAFETY: `Tagged` is a transparent wrapper around `Base`.
//! unsafe impl Upcast<Base> for Tagged {}
//!
//! let items = [Tagged(Base { id: 1 }), Tagged(Base { id: 2 })];
//! let bases = StaticView::<Base, 2>::from_derived(&items);
//! assert!(bases == items.as_ptr().cast::<Base>());
//! assert_eq!(bases[1].id, 2);
//! ```
//!
//! Unrelated element types do not convert:
//!
//! ```compile_fail
//! use arrayview::StaticView;
//!
//! let items = [1u32, 2];
//! let floats: StaticView<f32, 2> = StaticView::new(&items).upcast();
//! ```

use std::mem::{align_of, size_of};

/// Marker for element types whose values can be viewed in place as `Base`.
///
/// Every type upcasts to itself.
///
/// # Safety
/// Implementors guarantee that `Self` and `Base` have the same size, that the
/// alignment of `Self` is at least that of `Base`, that every valid `Self`
/// is a valid `Base` at the same address, and that storing any valid `Base`
/// over a `Self` leaves a valid `Self`. A `#[repr(transparent)]` wrapper
/// without additional invariants satisfies all of these. Size and alignment
/// are also verified at compile time when a view is upcast.
pub unsafe trait Upcast<Base> {}

// SAFETY: a type is trivially layout-compatible with itself.
unsafe impl<T> Upcast<T> for T {}

const fn assert_layout<D, B>() {
    assert!(
        size_of::<D>() == size_of::<B>(),
        "upcast between element types of different size"
    );
    assert!(
        align_of::<D>() >= align_of::<B>(),
        "upcast to an element type with stricter alignment"
    );
}

pub(crate) fn upcast_array<D: Upcast<B>, B, const N: usize>(array: &[D; N]) -> &[B; N] {
    const { assert_layout::<D, B>() };
    // SAFETY: guaranteed by `Upcast`, size and alignment are checked above.
    unsafe { &*(array as *const [D; N] as *const [B; N]) }
}

pub(crate) fn upcast_array_mut<D: Upcast<B>, B, const N: usize>(
    array: &mut [D; N],
) -> &mut [B; N] {
    const { assert_layout::<D, B>() };
    // SAFETY: see `upcast_array`.
    unsafe { &mut *(array as *mut [D; N] as *mut [B; N]) }
}

pub(crate) fn upcast_slice<D: Upcast<B>, B>(slice: &[D]) -> &[B] {
    const { assert_layout::<D, B>() };
    // SAFETY: see `upcast_array`.
    unsafe { std::slice::from_raw_parts(slice.as_ptr().cast::<B>(), slice.len()) }
}

pub(crate) fn upcast_slice_mut<D: Upcast<B>, B>(slice: &mut [D]) -> &mut [B] {
    const { assert_layout::<D, B>() };
    // SAFETY: see `upcast_array`.
    unsafe { std::slice::from_raw_parts_mut(slice.as_mut_ptr().cast::<B>(), slice.len()) }
}
