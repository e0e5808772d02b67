use std::mem::size_of;

use arrayview::{
    array_cast, array_size, static_view, static_view_mut, DynamicView, StaticView, StaticViewMut,
    Upcast, VoidView,
};

static ARRAY30: [i32; 30] = [0; 30];
static ARRAY13: [i32; 13] = [0; 13];
static ONE_TO_SEVEN: [i32; 7] = [0, 1, 2, 3, 4, 5, 6];

#[test]
fn default_view_is_null_but_sized() {
    let a = StaticView::<i32, 5>::default();
    assert!(a.is_null());
    assert!(a == std::ptr::null::<i32>());
    assert!(!a.is_empty());
    assert_eq!(a.size(), StaticView::<i32, 5>::SIZE);
    assert_eq!(a.size(), 5);

    const CA: StaticView<'static, i32, 5> = StaticView::null();
    assert!(CA.is_null());
    assert!(!CA.is_empty());
    assert_eq!(CA.size(), 5);

    assert!(StaticView::<i32, 0>::null().is_empty());
}

#[test]
fn construct_prefix_of_larger_array() {
    let a = [0i32; 30];

    let b = StaticView::<_, 5>::prefix_of(&a);
    assert!(b == a.as_ptr());
    let c: StaticView<i32, 5> = static_view(b);
    assert!(c == a.as_ptr());

    static CB: StaticView<'static, i32, 5> = StaticView::prefix_of(&ARRAY30);
    assert!(CB == ARRAY30.as_ptr());
    let cc: StaticView<i32, 5> = static_view(CB);
    assert!(cc == ARRAY30.as_ptr());
}

#[test]
fn construct_fixed_size() {
    let mut a = [0i32; 13];
    let address = a.as_mut_ptr();

    let b: StaticViewMut<i32, 13> = StaticViewMut::new(&mut a);
    assert!(b == address);
    let b: StaticViewMut<i32, 13> = static_view_mut(&mut a);
    assert!(b == address);

    static CB: StaticView<'static, i32, 13> = StaticView::new(&ARRAY13);
    assert!(CB == ARRAY13.as_ptr());
    let cb: StaticView<i32, 13> = static_view(&ARRAY13);
    assert!(cb == ARRAY13.as_ptr());
}

#[derive(Default)]
#[repr(C)]
struct Base {
    i: i32,
}

#[derive(Default)]
#[repr(transparent)]
struct Derived(Base);

unsafe impl Upcast<Base> for Derived {}

static DERIVED_ARRAY: [Derived; 5] = [const { Derived(Base { i: 0 }) }; 5];

#[test]
fn construct_derived() {
    let b: [Derived; 5] = Default::default();
    let bv = StaticView::new(&b);
    let a = StaticView::<Base, 5>::from_derived(&b);
    let av: StaticView<Base, 5> = bv.upcast();
    assert!(a == b.as_ptr().cast::<Base>());
    assert!(av == b.as_ptr().cast::<Base>());

    let cbv = StaticView::new(&DERIVED_ARRAY);
    let ca = StaticView::<Base, 5>::from_derived(&DERIVED_ARRAY);
    let cav: StaticView<Base, 5> = cbv.upcast();
    assert!(ca == DERIVED_ARRAY.as_ptr().cast::<Base>());
    assert!(cav == DERIVED_ARRAY.as_ptr().cast::<Base>());
    assert_eq!(cav[4].i, 0);
}

#[test]
fn null_check() {
    let a = [0i32; 7];
    assert!(!StaticView::<_, 5>::prefix_of(&a).is_null());
    assert!(StaticView::<i32, 5>::default().is_null());

    static CB: StaticView<'static, i32, 30> = StaticView::new(&ARRAY30);
    assert!(!CB.is_null());
    const CC: StaticView<'static, i32, 30> = StaticView::null();
    assert!(CC.is_null());
}

#[test]
fn convert_pointer() {
    let mut a = [0i32; 7];
    let address = a.as_mut_ptr();
    let b = StaticViewMut::new(&mut a);
    let bp: *mut i32 = b.into();
    assert_eq!(bp, address);

    let c = StaticView::new(&a);
    let cp: *const i32 = c.into();
    assert_eq!(cp, a.as_ptr());

    let ccp: *const i32 = StaticView::new(&ARRAY13).into();
    assert_eq!(ccp, ARRAY13.as_ptr());

    let e = StaticView::new(&a);
    let ep = e.data().wrapping_add(2);
    assert_eq!(ep, &e[2] as *const i32);
}

#[test]
fn convert_const() {
    let mut a = [0i32; 3];
    let address = a.as_ptr();
    let b = StaticViewMut::new(&mut a);
    let c: DynamicView<i32> = b.into();
    assert!(c == address);
    assert_eq!(c.size(), 3);
}

#[test]
fn convert_void() {
    let mut a = [3i32, 4, 7, 12, 0, -15];
    let cb = StaticView::new(&a);
    let cc = VoidView::from(cb);
    assert!(cc == cb.data());
    assert_eq!(cc.size(), 6 * size_of::<i32>());

    let b = StaticViewMut::new(&mut a);
    let address = b.data();
    let c = VoidView::from(b);
    assert!(c == address);
    assert_eq!(c.size(), 6 * size_of::<i32>());

    let ccb = StaticView::new(&ARRAY13);
    let ccc = VoidView::from(ccb);
    assert!(ccc == ccb.data());
    assert_eq!(ccc.size(), 13 * size_of::<i32>());
}

#[test]
fn access() {
    let mut a = [0i32; 7];
    let address = a.as_ptr();
    let mut b = StaticViewMut::new(&mut a);
    for (i, value) in b.iter_mut().enumerate() {
        *value = i as i32;
    }

    assert_eq!(b.data(), address);
    assert_eq!(b.size(), 7);
    assert_eq!(*b.front(), 0);
    assert_eq!(*b.back(), 6);
    assert_eq!(b[4], 4);
    let range = b.as_mut_ptr_range();
    assert_eq!(unsafe { range.end.offset_from(range.start) }, 7);

    let c = StaticView::new(&a);
    assert_eq!(c.data(), a.as_ptr());

    static CB: StaticView<'static, i32, 7> = StaticView::new(&ONE_TO_SEVEN);
    assert_eq!(CB.data(), ONE_TO_SEVEN.as_ptr());
    assert_eq!(CB.size(), 7);
    assert_eq!(CB.as_ptr_range().start, ONE_TO_SEVEN.as_ptr());
    assert_eq!(CB, ONE_TO_SEVEN);
}

#[test]
fn write_through_mutable_view() {
    let mut a = [0i32; 7];
    let mut b = StaticViewMut::new(&mut a);
    *b.front_mut() = 0;
    b[1] = 1;
    b[2] = 2;
    b[3] = 3;
    b[4] = 4;
    b.as_mut()[5] = 5;
    *b.back_mut() = 6;

    assert_eq!(a, [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn range_based_for() {
    let mut a = [0i32; 5];
    let mut b = StaticViewMut::new(&mut a);
    for i in b.reborrow() {
        *i = 3;
    }
    assert_eq!(b, [3; 5]);
    for i in StaticView::new(&a) {
        assert_eq!(*i, 3);
    }
}

#[test]
fn slice() {
    let data = [1i32, 2, 3, 4, 5];
    let a = StaticView::new(&data);

    let b = a.slice(1, 4);
    assert_eq!(b.size(), 3);
    assert_eq!(b, [2, 3, 4]);

    let c = a.prefix(3);
    assert_eq!(c.size(), 3);
    assert_eq!(c, [1, 2, 3]);

    let d = a.suffix(2);
    assert_eq!(d.size(), 3);
    assert_eq!(d, [3, 4, 5]);
}

#[test]
fn slice_to_static() {
    let data = [1i32, 2, 3, 4, 5];
    let a = StaticView::new(&data);

    let b: StaticView<i32, 3> = a.slice_static(1);
    assert_eq!(b, [2, 3, 4]);
    assert!(b == data[1..].as_ptr());

    let c = a.prefix_static::<3>();
    assert_eq!(c, [1, 2, 3]);
}

#[test]
#[should_panic(expected = "exceeds view length")]
fn slice_past_end_panics() {
    let data = [1i32, 2, 3, 4, 5];
    let _ = StaticView::new(&data).slice(2, 6);
}

#[test]
#[should_panic(expected = "null view")]
fn front_of_null_view_panics() {
    let _ = StaticView::<i32, 3>::null().front();
}

#[test]
fn slicing_null_view_stays_null() {
    let a = StaticView::<i32, 5>::null();
    assert!(a.slice(1, 3).is_null());
    assert!(a.slice_static::<2>(3).is_null());
}

#[test]
fn cast() {
    #[repr(C, align(8))]
    struct Data([u32; 6]);

    let data = Data([0; 6]);
    let a = StaticView::new(&data.0);
    let b: StaticView<u64, 3> = array_cast(a);
    let c: StaticView<u16, 12> = array_cast(a);
    let d: StaticView<u16, 12> = array_cast(&data.0);

    assert_eq!(b.data().cast::<u8>(), a.data().cast::<u8>());
    assert_eq!(c.data().cast::<u8>(), a.data().cast::<u8>());
    assert_eq!(d.data().cast::<u8>(), a.data().cast::<u8>());
    assert_eq!(b.size(), 3);
    assert_eq!(c.size(), 12);
}

#[test]
fn size() {
    let a = [0i32; 6];
    let b = StaticView::<_, 3>::prefix_of(&a);
    assert_eq!(array_size(&b), 3);

    const CB: StaticView<'static, i32, 3> = StaticView::null();
    const SIZE: usize = CB.size();
    assert_eq!(SIZE, 3);
    assert_eq!(array_size(&StaticView::<_, 3>::prefix_of(&ARRAY13)), 3);
}
