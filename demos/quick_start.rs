use arrayview::{array_cast, DynamicView, StaticView, StaticViewMut, VoidView};

fn main() {
    // view a whole array, the size is part of the type
    let mut data = [1u32, 2, 3, 4, 5, 6];
    let mut view = StaticViewMut::new(&mut data);
    view[0] = 10;

    // slice it without copying
    let read_only = StaticView::from(view);
    let middle: DynamicView<u32> = read_only.slice(1, 4);
    assert_eq!(middle, [2, 3, 4]);

    // reinterpret the same bytes as another element type
    let halves: DynamicView<u16> = array_cast(middle);
    assert_eq!(halves.size(), 6);

    // erase the type, keeping only the address and the byte size
    let erased = VoidView::from(read_only);
    assert_eq!(erased.size(), 24);
    assert_eq!(data[0], 10);
}
