#![no_main]

use arbitrary::Arbitrary;
use boolvec::{BoolVec, Error};
use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 100_000;

#[derive(Arbitrary, Debug)]
enum BoolVecOperation {
    Add(bool),
    AddAll(Vec<bool>),
    AddAllPresent(Option<Vec<Option<bool>>>),
    Get(usize),
    GetOr(usize, bool),
    Set(usize, bool),
    SetOrDiscard(usize, bool),
    RemoveValue(bool),
    RemoveAt(usize),
    RemoveFirst,
    RemoveLast,
    RemoveAll(Vec<bool>),
    Clear,
    IndexOf(bool),
    SubList(usize, usize),
    SubListClamped(usize, usize),
    CursorRemove(bool),
}

fn fuzz(initial_capacity: u16, ops: Vec<BoolVecOperation>) {
    let mut bv = BoolVec::with_capacity(initial_capacity as usize);
    let mut model: Vec<bool> = Vec::new();

    for op in ops {
        let capacity = bv.capacity();
        match op {
            BoolVecOperation::Add(value) => {
                if model.len() >= MAX_LEN {
                    continue;
                }
                bv.add(value);
                model.push(value);
                if model.len() > capacity {
                    let expected = if capacity == 0 { 10 } else { capacity * 2 };
                    assert_eq!(bv.capacity(), expected);
                } else {
                    assert_eq!(bv.capacity(), capacity);
                }
            }

            BoolVecOperation::AddAll(values) => {
                if model.len() + values.len() > MAX_LEN {
                    continue;
                }
                bv.add_all(values.iter().copied());
                model.extend_from_slice(&values);
            }

            BoolVecOperation::AddAllPresent(values) => {
                let present: Vec<bool> = values.iter().flatten().flatten().copied().collect();
                if model.len() + present.len() > MAX_LEN {
                    continue;
                }
                bv.add_all_present(values);
                model.extend_from_slice(&present);
            }

            BoolVecOperation::Get(index) => match model.get(index) {
                Some(&value) => assert_eq!(bv.get(index), Ok(value)),
                None => assert_eq!(
                    bv.get(index),
                    Err(Error::OutOfBounds {
                        index,
                        len: model.len()
                    })
                ),
            },

            BoolVecOperation::GetOr(index, default) => {
                let expected = model.get(index).copied().unwrap_or(default);
                assert_eq!(bv.get_or(index, default), expected);
                assert_eq!(bv.get_or_else(index, || default), expected);
                assert_eq!(bv.get_or_none(index), model.get(index).copied());
            }

            BoolVecOperation::Set(index, value) => match model.get_mut(index) {
                Some(slot) => {
                    let old = std::mem::replace(slot, value);
                    assert_eq!(bv.set(index, value), Ok(old));
                }
                None => assert!(bv.set(index, value).is_err()),
            },

            BoolVecOperation::SetOrDiscard(index, value) => {
                bv.set_or_discard(index, value);
                if let Some(slot) = model.get_mut(index) {
                    *slot = value;
                }
            }

            BoolVecOperation::RemoveValue(value) => {
                let position = model.iter().position(|&v| v == value);
                if let Some(position) = position {
                    model.remove(position);
                }
                assert_eq!(bv.remove_value(value), position.is_some());
            }

            BoolVecOperation::RemoveAt(index) => {
                if index < model.len() {
                    assert_eq!(bv.remove_at(index), Ok(model.remove(index)));
                } else {
                    assert!(bv.remove_at(index).is_err());
                }
            }

            BoolVecOperation::RemoveFirst => {
                if model.is_empty() {
                    assert!(bv.remove_first().is_err());
                } else {
                    assert_eq!(bv.remove_first(), Ok(model.remove(0)));
                }
            }

            BoolVecOperation::RemoveLast => match model.pop() {
                Some(value) => assert_eq!(bv.remove_last(), Ok(value)),
                None => assert!(bv.remove_last().is_err()),
            },

            BoolVecOperation::RemoveAll(values) => {
                bv.remove_all(values.iter().copied());
                for value in values {
                    if let Some(position) = model.iter().position(|&v| v == value) {
                        model.remove(position);
                    }
                }
            }

            BoolVecOperation::Clear => {
                bv.clear();
                model.clear();
                assert_eq!(bv.capacity(), capacity);
            }

            BoolVecOperation::IndexOf(value) => {
                assert_eq!(bv.index_of(value), model.iter().position(|&v| v == value));
                assert_eq!(
                    bv.last_index_of(value),
                    model.iter().rposition(|&v| v == value)
                );
                assert_eq!(bv.contains(value), model.contains(&value));
            }

            BoolVecOperation::SubList(from, to) => {
                let result = bv.sub_list(from, to);
                if to > model.len() || from > to {
                    assert!(result.is_err());
                } else {
                    assert_eq!(result.unwrap(), model[from..to]);
                }
            }

            BoolVecOperation::SubListClamped(from, to) => {
                let sub = bv.sub_list_clamped(from, to);
                let to = to.min(model.len());
                assert_eq!(sub.len(), to.saturating_sub(from));
                if from < to {
                    assert_eq!(sub, model[from..to]);
                }
            }

            BoolVecOperation::CursorRemove(value) => {
                let mut cursor = bv.cursor();
                while let Some(current) = cursor.next() {
                    if current == value {
                        assert_eq!(cursor.remove(), Ok(value));
                    }
                }
                model.retain(|&v| v != value);
            }
        }

        assert_eq!(bv.len(), model.len());
        assert!(bv.len() <= bv.capacity());
        assert_eq!(bv.as_slice(), model.as_slice());
    }

    assert_eq!(bv.to_vec(), model);
    assert_eq!(BoolVec::from_slice(&bv.to_boxed_slice()), bv);
}

fuzz_target!(|input: (u16, Vec<BoolVecOperation>)| {
    fuzz(input.0, input.1);
});
