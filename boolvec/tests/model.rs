//! Compare [BoolVec] against a `Vec<bool>` model over seeded random operation sequences.

use boolvec::{BoolVec, Error};
use rand::{rngs::StdRng, Rng, SeedableRng};
use test_case::test_case;

/// Applies one random operation to both `bv` and `model`, asserting they agree.
fn step(rng: &mut StdRng, bv: &mut BoolVec, model: &mut Vec<bool>) {
    let value: bool = rng.gen();
    let index = rng.gen_range(0..model.len() + 3);
    match rng.gen_range(0..10) {
        0..=3 => {
            bv.add(value);
            model.push(value);
        }
        4 => {
            let expected = if index < model.len() {
                Ok(model.remove(index))
            } else {
                Err(Error::OutOfBounds {
                    index,
                    len: model.len(),
                })
            };
            assert_eq!(bv.remove_at(index), expected);
        }
        5 => {
            let expected = model.iter().position(|&v| v == value);
            if let Some(position) = expected {
                model.remove(position);
            }
            assert_eq!(bv.remove_value(value), expected.is_some());
        }
        6 => {
            let expected = match model.get_mut(index) {
                Some(slot) => Ok(std::mem::replace(slot, value)),
                None => Err(Error::OutOfBounds {
                    index,
                    len: model.len(),
                }),
            };
            assert_eq!(bv.set(index, value), expected);
        }
        7 => {
            assert_eq!(bv.get_or_none(index), model.get(index).copied());
            assert_eq!(bv.index_of(value), model.iter().position(|&v| v == value));
            assert_eq!(
                bv.last_index_of(value),
                model.iter().rposition(|&v| v == value)
            );
        }
        8 => {
            let mut cursor = bv.cursor();
            while let Some(current) = cursor.next() {
                if current == value {
                    cursor.remove().unwrap();
                }
            }
            model.retain(|&v| v != value);
        }
        _ => {
            if rng.gen_ratio(1, 10) {
                bv.clear();
                model.clear();
            }
        }
    }
    assert_eq!(bv.len(), model.len());
    assert!(bv.len() <= bv.capacity());
    assert_eq!(bv.as_slice(), model.as_slice());
}

#[test]
fn test_matches_vec_model() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut bv = BoolVec::new();
        let mut model = Vec::new();
        for _ in 0..500 {
            step(&mut rng, &mut bv, &mut model);
        }

        // Round trip through a fixed-size copy
        assert_eq!(BoolVec::from_slice(&bv.to_boxed_slice()), bv);
        assert_eq!(bv.to_vec(), model);
    }
}

#[test]
fn test_capacity_only_doubles() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut bv = BoolVec::new();
    let mut last = bv.capacity();
    for _ in 0..5_000 {
        bv.add(rng.gen());
        let capacity = bv.capacity();
        if capacity != last {
            let expected = if last == 0 { 10 } else { last * 2 };
            assert_eq!(capacity, expected);
            last = capacity;
        }
    }
    assert_eq!(bv.len(), 5_000);
    assert_eq!(bv.capacity(), 5_120);
}

#[test_case(0, 4, 4; "full range")]
#[test_case(1, 3, 2; "inner range")]
#[test_case(2, 2, 0; "empty range")]
#[test_case(0, 100, 4; "to past end")]
#[test_case(3, 1, 0; "inverted range")]
#[test_case(10, 20, 0; "from past end")]
#[test_case(usize::MAX, usize::MAX, 0; "maximum bounds")]
fn test_sub_list_clamped(from: usize, to: usize, expected_len: usize) {
    let bv = BoolVec::from_slice(&[true, false, true, false]);
    let sub = bv.sub_list_clamped(from, to);
    assert_eq!(sub.len(), expected_len);
    assert_eq!(sub.len(), to.min(bv.len()).saturating_sub(from));
    if expected_len > 0 {
        assert_eq!(sub.as_slice(), &bv.as_slice()[from..from + expected_len]);
    }
}

#[test_case(0, 5, Error::OutOfBounds { index: 5, len: 4 }; "to past end")]
#[test_case(3, 1, Error::InvalidRange { from: 3, to: 1 }; "inverted range")]
#[test_case(9, 5, Error::OutOfBounds { index: 5, len: 4 }; "to checked before from")]
fn test_sub_list_errors(from: usize, to: usize, expected: Error) {
    let bv = BoolVec::from_slice(&[true, false, true, false]);
    assert_eq!(bv.sub_list(from, to), Err(expected));
}

#[test_case(0; "empty")]
#[test_case(1; "single")]
#[test_case(10; "at initial capacity")]
#[test_case(11; "after first doubling")]
fn test_remove_last_drains(n: usize) {
    let mut bv: BoolVec = (0..n).map(|i| i % 2 == 0).collect();
    for i in (0..n).rev() {
        assert_eq!(bv.remove_last(), Ok(i % 2 == 0));
    }
    assert!(bv.is_empty());
    assert!(matches!(bv.remove_last(), Err(Error::OutOfBounds { .. })));
}
