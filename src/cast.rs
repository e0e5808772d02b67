/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * Copyright (c) Jan-Paul Bultmann
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A cast keeps the address and the byte size of a view and recomputes its
//! element count as `len * size_of::<T>() / size_of::<U>()`. The element
//! types are restricted with [`zerocopy`] marker traits so that every cast
//! reads only initialized bytes and produces only valid values.
//!
//! For static views the target length is a const parameter, normally inferred
//! from the annotated result, and a byte size mismatch is a compile error:
//!
//! ```
//! use arrayview::{array_cast, StaticView};
//!
//! #[repr(C, align(8))]
//! struct Aligned([u32; 6]);
//!
//! let data = Aligned([0; 6]);
//! let view = StaticView::new(&data.0);
//! let wide: StaticView<u64, 3> = array_cast(view);
//! let narrow: StaticView<u16, 12> = array_cast(view);
//! assert!(wide == view.data().cast::<u64>());
//! assert!(narrow == view.data().cast::<u16>());
//! ```
//!
//! ```compile_fail
//! use arrayview::{array_cast, StaticView};
//!
//! let data = [0u32; 6];
//! let wrong: StaticView<u16, 10> = array_cast(StaticView::new(&data));
//! ```
//!
//! For dynamic views the divisibility is checked at runtime; alignment is
//! always checked at runtime. [`array_cast`] panics on either failure,
//! [`try_array_cast`] reports it as a [`ViewError`].

use std::convert::Infallible;
use std::mem::{align_of, size_of};

use zerocopy::{ConvertError, FromBytes, Immutable, IntoBytes};

use crate::{DynamicView, DynamicViewMut, StaticView, StaticViewMut};

/// Errors that can occur when converting a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// The address was not aligned for the target element type.
    Alignment {
        /// Address of the first byte.
        address: usize,
        /// Alignment required by the target element type.
        align: usize,
    },
    /// The byte size was not a multiple of the target element size.
    Size {
        /// Byte size of the view.
        bytes: usize,
        /// Size of the target element type.
        element_size: usize,
    },
    /// The element count did not match the static size of the target view.
    Length {
        /// Element count of the target view.
        expected: usize,
        /// Element count of the source.
        actual: usize,
    },
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::Alignment { address, align } => write!(
                f,
                "failed to cast view: address {:#x} is not aligned to {} bytes.",
                address, align
            ),
            ViewError::Size {
                bytes,
                element_size,
            } => write!(
                f,
                "failed to cast view: {} bytes are not a multiple of the element size {}.",
                bytes, element_size
            ),
            ViewError::Length { expected, actual } => write!(
                f,
                "failed to convert view: expected {} elements, found {}.",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ViewError {}

impl ViewError {
    fn from_cast_error<A, S, U>(
        err: ConvertError<A, S, Infallible>,
        address: usize,
        bytes: usize,
    ) -> Self {
        match err {
            ConvertError::Alignment(_) => Self::Alignment {
                address,
                align: align_of::<U>(),
            },
            ConvertError::Size(_) => Self::Size {
                bytes,
                element_size: size_of::<U>(),
            },
            ConvertError::Validity(never) => match never {},
        }
    }
}

/// Reinterpretation of a view, array or slice as a view of `Target`.
pub trait ArrayCast<Target>: Sized {
    /// Reinterprets the elements, reporting misalignment or a byte size that
    /// does not divide evenly.
    fn try_array_cast(self) -> Result<Target, ViewError>;

    /// Reinterprets the elements, panicking on misalignment or a byte size
    /// that does not divide evenly.
    #[track_caller]
    fn array_cast(self) -> Target {
        match self.try_array_cast() {
            Ok(target) => target,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Reinterprets `view` as a view of another element type over the same bytes.
///
/// Panics if the address is misaligned for the target element type or, for
/// dynamic views, if the byte size is not a multiple of its size.
#[track_caller]
pub fn array_cast<Target, Source: ArrayCast<Target>>(view: Source) -> Target {
    view.array_cast()
}

/// Fallible variant of [`array_cast`].
pub fn try_array_cast<Target, Source: ArrayCast<Target>>(
    view: Source,
) -> Result<Target, ViewError> {
    view.try_array_cast()
}

const fn assert_same_byte_size<T, U, const N: usize, const M: usize>() {
    assert!(
        N * size_of::<T>() == M * size_of::<U>(),
        "array_cast changes the byte size of the view"
    );
}

impl<'a, T, U, const N: usize, const M: usize> ArrayCast<StaticView<'a, U, M>>
    for StaticView<'a, T, N>
where
    T: IntoBytes + Immutable,
    U: FromBytes + Immutable,
{
    fn try_array_cast(self) -> Result<StaticView<'a, U, M>, ViewError> {
        const { assert_same_byte_size::<T, U, N, M>() };
        let Some(array) = self.as_array() else {
            return Ok(StaticView::null());
        };
        let bytes = IntoBytes::as_bytes(array);
        let (address, len) = (bytes.as_ptr() as usize, bytes.len());
        match <[U; M]>::ref_from_bytes(bytes) {
            Ok(cast) => Ok(StaticView::new(cast)),
            Err(err) => Err(ViewError::from_cast_error::<_, _, U>(err, address, len)),
        }
    }
}

impl<'a, T, U, const N: usize, const M: usize> ArrayCast<StaticViewMut<'a, U, M>>
    for StaticViewMut<'a, T, N>
where
    T: IntoBytes + FromBytes,
    U: IntoBytes + FromBytes,
{
    fn try_array_cast(self) -> Result<StaticViewMut<'a, U, M>, ViewError> {
        const { assert_same_byte_size::<T, U, N, M>() };
        let Some(array) = self.into_array() else {
            return Ok(StaticViewMut::null());
        };
        let bytes = IntoBytes::as_mut_bytes(array);
        let (address, len) = (bytes.as_ptr() as usize, bytes.len());
        match <[U; M]>::mut_from_bytes(bytes) {
            Ok(cast) => Ok(StaticViewMut::new(cast)),
            Err(err) => Err(ViewError::from_cast_error::<_, _, U>(err, address, len)),
        }
    }
}

impl<'a, T, U> ArrayCast<DynamicView<'a, U>> for DynamicView<'a, T>
where
    T: IntoBytes + Immutable,
    U: FromBytes + Immutable,
{
    fn try_array_cast(self) -> Result<DynamicView<'a, U>, ViewError> {
        if self.is_null() {
            return Ok(DynamicView::null());
        }
        let bytes = IntoBytes::as_bytes(self.as_slice());
        let (address, len) = (bytes.as_ptr() as usize, bytes.len());
        match <[U]>::ref_from_bytes(bytes) {
            Ok(cast) => Ok(DynamicView::new(cast)),
            Err(err) => Err(ViewError::from_cast_error::<_, _, U>(err, address, len)),
        }
    }
}

impl<'a, T, U> ArrayCast<DynamicViewMut<'a, U>> for DynamicViewMut<'a, T>
where
    T: IntoBytes + FromBytes,
    U: IntoBytes + FromBytes,
{
    fn try_array_cast(self) -> Result<DynamicViewMut<'a, U>, ViewError> {
        if self.is_null() {
            return Ok(DynamicViewMut::null());
        }
        let bytes = IntoBytes::as_mut_bytes(self.into_slice());
        let (address, len) = (bytes.as_ptr() as usize, bytes.len());
        match <[U]>::mut_from_bytes(bytes) {
            Ok(cast) => Ok(DynamicViewMut::new(cast)),
            Err(err) => Err(ViewError::from_cast_error::<_, _, U>(err, address, len)),
        }
    }
}

impl<'a, T, U, const N: usize, const M: usize> ArrayCast<StaticView<'a, U, M>> for &'a [T; N]
where
    T: IntoBytes + Immutable,
    U: FromBytes + Immutable,
{
    fn try_array_cast(self) -> Result<StaticView<'a, U, M>, ViewError> {
        StaticView::new(self).try_array_cast()
    }
}

impl<'a, T, U, const N: usize, const M: usize> ArrayCast<StaticViewMut<'a, U, M>>
    for &'a mut [T; N]
where
    T: IntoBytes + FromBytes,
    U: IntoBytes + FromBytes,
{
    fn try_array_cast(self) -> Result<StaticViewMut<'a, U, M>, ViewError> {
        StaticViewMut::new(self).try_array_cast()
    }
}

impl<'a, T, U> ArrayCast<DynamicView<'a, U>> for &'a [T]
where
    T: IntoBytes + Immutable,
    U: FromBytes + Immutable,
{
    fn try_array_cast(self) -> Result<DynamicView<'a, U>, ViewError> {
        DynamicView::new(self).try_array_cast()
    }
}

impl<'a, T, U> ArrayCast<DynamicViewMut<'a, U>> for &'a mut [T]
where
    T: IntoBytes + FromBytes,
    U: IntoBytes + FromBytes,
{
    fn try_array_cast(self) -> Result<DynamicViewMut<'a, U>, ViewError> {
        DynamicViewMut::new(self).try_array_cast()
    }
}

#[cfg(test)]
mod tests {
    use super::{array_cast, try_array_cast, ViewError};
    use crate::{DynamicView, DynamicViewMut, StaticView, StaticViewMut};

    #[repr(C, align(8))]
    struct Aligned<const N: usize>([u32; N]);

    #[test]
    fn static_cast_computes_size_at_compile_time() {
        let data = Aligned([0u32; 6]);
        let a = StaticView::new(&data.0);
        let b: StaticView<u64, 3> = array_cast(a);
        let c: StaticView<u16, 12> = array_cast(a);
        let d: StaticView<u16, 12> = array_cast(&data.0);
        assert_eq!(b.data().cast::<u8>(), a.data().cast::<u8>());
        assert_eq!(c.data().cast::<u8>(), a.data().cast::<u8>());
        assert_eq!(d.data().cast::<u8>(), a.data().cast::<u8>());
        assert_eq!(StaticView::<u64, 3>::SIZE, 3);
    }

    #[test]
    fn null_static_view_casts_to_null() {
        let cast: StaticView<u8, 8> = array_cast(StaticView::<u32, 2>::null());
        assert!(cast.is_null());
        assert_eq!(cast.size(), 8);
    }

    #[test]
    fn static_cast_reports_misalignment() {
        let data = Aligned([0u32; 4]);
        let shifted = StaticView::new(&data.0).slice_static::<2>(1);
        let err = try_array_cast::<StaticView<u64, 1>, _>(shifted).unwrap_err();
        assert_eq!(
            err,
            ViewError::Alignment {
                address: shifted.data() as usize,
                align: 8
            }
        );
    }

    #[test]
    fn dynamic_cast_recomputes_length() {
        let data = [1u16, 2, 3, 4, 5, 6];
        let view = DynamicView::new(&data[..]);
        let bytes: DynamicView<u8> = array_cast(view);
        assert_eq!(bytes.size(), 12);
        assert_eq!(bytes.data(), view.data().cast::<u8>());
        let back: DynamicView<u16> = array_cast(bytes);
        assert_eq!(back, view);
        assert_eq!(back.data(), view.data());
    }

    #[test]
    fn dynamic_cast_reports_size_mismatch() {
        let data = Aligned([0u32; 3]);
        let err = try_array_cast::<DynamicView<u64>, _>(&data.0[..]).unwrap_err();
        assert_eq!(
            err,
            ViewError::Size {
                bytes: 12,
                element_size: 8
            }
        );
        assert_eq!(
            err.to_string(),
            "failed to cast view: 12 bytes are not a multiple of the element size 8."
        );
    }

    #[test]
    #[should_panic(expected = "not a multiple")]
    fn dynamic_cast_panics_on_size_mismatch() {
        let data = Aligned([0u32; 3]);
        let _: DynamicView<u64> = array_cast(&data.0[..]);
    }

    #[test]
    fn null_dynamic_view_casts_to_null() {
        let cast: DynamicView<u64> = array_cast(DynamicView::<u8>::null());
        assert!(cast.is_null());
        assert!(cast.is_empty());
    }

    #[test]
    fn mutable_casts_write_through() {
        let mut data = Aligned([0u32; 4]);
        {
            let mut wide: StaticViewMut<u64, 2> = array_cast(&mut data.0);
            wide[1] = u64::MAX;
        }
        assert_eq!(data.0, [0, 0, u32::MAX, u32::MAX]);

        let mut bytes: DynamicViewMut<u8> = array_cast(&mut data.0[..]);
        bytes.fill(0);
        assert_eq!(data.0, [0; 4]);
    }
}
