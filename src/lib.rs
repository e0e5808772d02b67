/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * Copyright (c) Jan-Paul Bultmann
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Reinterpretation of views as views of another element type.
pub mod cast;
/// Views with a runtime element count.
pub mod dynamic_view;
mod helpers;
mod sources;
/// Views with a compile-time element count.
pub mod static_view;
/// Element types that can be viewed as another element type.
pub mod upcast;
/// Type-erased byte views.
pub mod void_view;


pub use crate::cast::array_cast;
pub use crate::cast::try_array_cast;
pub use crate::cast::ArrayCast;
pub use crate::cast::ViewError;
pub use crate::dynamic_view::DynamicView;
pub use crate::dynamic_view::DynamicViewMut;
pub use crate::helpers::array_size;
pub use crate::helpers::static_view;
pub use crate::helpers::static_view_mut;
pub use crate::helpers::ArraySize;
pub use crate::helpers::IntoStaticView;
pub use crate::helpers::IntoStaticViewMut;
pub use crate::static_view::StaticView;
pub use crate::static_view::StaticViewMut;
pub use crate::upcast::Upcast;
pub use crate::void_view::VoidView;
pub use crate::void_view::VoidViewMut;

#[inline(never)]
#[cold]
#[track_caller]
fn slice_index_order_fail(begin: usize, end: usize) -> ! {
    panic!("invalid slice {}..{}", begin, end);
}

#[inline(never)]
#[cold]
#[track_caller]
fn slice_end_index_len_fail(end: usize, len: usize) -> ! {
    panic!("{} exceeds view length {}", end, len);
}

#[inline(never)]
#[cold]
#[track_caller]
fn null_view_access_fail() -> ! {
    panic!("element access through a null view");
}

#[inline(never)]
#[cold]
#[track_caller]
fn empty_view_access_fail() -> ! {
    panic!("element access through an empty view");
}

/// Validates `begin..end` against a view of `len` elements.
#[inline]
#[track_caller]
fn check_slice(begin: usize, end: usize, len: usize) {
    if begin > end {
        slice_index_order_fail(begin, end);
    }
    if end > len {
        slice_end_index_len_fail(end, len);
    }
}

/// Validates a statically sized window of `size` elements at `begin`.
#[inline]
#[track_caller]
fn check_static_slice(begin: usize, size: usize, len: usize) {
    match begin.checked_add(size) {
        Some(end) => check_slice(begin, end, len),
        None => slice_end_index_len_fail(usize::MAX, len),
    }
}
