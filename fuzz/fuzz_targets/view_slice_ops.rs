#![no_main]

use arrayview::{try_array_cast, DynamicView};
use arbitrary::{Arbitrary, Result as ArbResult, Unstructured};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
enum Operation {
    Slice(u16, u16),
    Prefix(u16),
    Suffix(u16),
    Front,
    Back,
    CastPairs,
}

impl<'a> Arbitrary<'a> for Operation {
    fn arbitrary(u: &mut Unstructured<'a>) -> ArbResult<Self> {
        let tag = u.int_in_range::<u8>(0..=5)?;
        let op = match tag {
            0 => Operation::Slice(u.arbitrary()?, u.arbitrary()?),
            1 => Operation::Prefix(u.arbitrary()?),
            2 => Operation::Suffix(u.arbitrary()?),
            3 => Operation::Front,
            4 => Operation::Back,
            _ => Operation::CastPairs,
        };
        Ok(op)
    }
}

#[derive(Debug)]
struct FuzzCase {
    data: Vec<u8>,
    ops: Vec<Operation>,
}

impl<'a> Arbitrary<'a> for FuzzCase {
    fn arbitrary(u: &mut Unstructured<'a>) -> ArbResult<Self> {
        let len = u.int_in_range::<usize>(0..=64)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            data.push(u.arbitrary()?);
        }

        let ops_len = u.int_in_range::<usize>(0..=64)?;
        let mut ops = Vec::with_capacity(ops_len);
        for _ in 0..ops_len {
            ops.push(u.arbitrary()?);
        }

        Ok(Self { data, ops })
    }
}

// Out-of-range operations panic by contract, so only in-range ones are
// applied and compared against the same range of the model.
fuzz_target!(|case: FuzzCase| {
    let mut view = DynamicView::new(&case.data[..]);
    let mut model = 0..case.data.len();

    for op in case.ops {
        let len = model.len();
        match op {
            Operation::Slice(begin, end) => {
                let (begin, end) = (begin as usize, end as usize);
                if begin <= end && end <= len {
                    view = view.slice(begin, end);
                    model = model.start + begin..model.start + end;
                }
            }
            Operation::Prefix(end) => {
                let end = end as usize;
                if end <= len {
                    view = view.prefix(end);
                    model = model.start..model.start + end;
                }
            }
            Operation::Suffix(begin) => {
                let begin = begin as usize;
                if begin <= len {
                    view = view.suffix(begin);
                    model = model.start + begin..model.end;
                }
            }
            Operation::Front => {
                if len > 0 {
                    assert_eq!(*view.front(), case.data[model.start]);
                }
            }
            Operation::Back => {
                if len > 0 {
                    assert_eq!(*view.back(), case.data[model.end - 1]);
                }
            }
            Operation::CastPairs => {
                let pairs: Result<DynamicView<[u8; 2]>, _> = try_array_cast(view);
                match pairs {
                    Ok(pairs) => {
                        assert_eq!(pairs.size() * 2, len);
                        assert_eq!(pairs.data().cast::<u8>(), view.data());
                    }
                    Err(_) => assert_eq!(len % 2, 1),
                }
            }
        }
        assert_eq!(view.as_slice(), &case.data[model.clone()]);
        assert_eq!(view.data(), case.data[model.start..].as_ptr());
    }
});
