//! Growable vector of booleans.
//!
//! [BoolVec] stores one `bool` per slot in a fixed-capacity buffer and tracks the number of valid
//! elements (its length) separately from the size of that buffer (its capacity). When an append
//! would exceed the capacity, the buffer is reallocated to twice its size ([INITIAL_CAPACITY] slots
//! when empty) and the valid elements are copied over, so a sequence of appends costs amortized
//! O(1). Removal and [BoolVec::clear] only shrink the length; the buffer is never reallocated down.
//!
//! An invariant of the implementation is that slots at or beyond the length hold stale values that
//! are never observable: equality, hashing, formatting, iteration and conversions all consider the
//! first `len` slots only.

use crate::{
    iter::{Cursor, IntoIter, Iter},
    Error,
};
use core::{
    fmt::{self, Formatter, Write as _},
    hash::{Hash, Hasher},
    ops::Index,
};
use tracing::trace;

/// Capacity allocated by the first append into a buffer without any slots.
pub const INITIAL_CAPACITY: usize = 10;

/// Value written into freshly allocated slots.
const EMPTY_SLOT: bool = false;

/// A growable vector of booleans.
///
/// Not synchronized: concurrent mutation requires external locking.
pub struct BoolVec {
    /// The underlying storage. Its length is the capacity of the vector.
    storage: Box<[bool]>,
    /// The number of valid elements at the front of `storage`.
    len: usize,
}

impl BoolVec {
    /// Creates a new, empty `BoolVec` without allocating.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new, empty `BoolVec` with exactly `capacity` slots.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        BoolVec {
            storage: vec![EMPTY_SLOT; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Creates a `BoolVec` holding a copy of `values`. Length and capacity both equal
    /// `values.len()`.
    #[inline]
    pub fn from_slice(values: &[bool]) -> Self {
        BoolVec {
            storage: values.into(),
            len: values.len(),
        }
    }

    /// Creates a `BoolVec` holding a copy of the valid elements of `other`.
    ///
    /// The excess capacity of `other` is not carried over.
    #[inline]
    pub fn from_vector(other: &BoolVec) -> Self {
        Self::from_slice(other.as_slice())
    }

    /// Creates a `BoolVec` by appending each value of `values` in order.
    ///
    /// The lower bound of the iterator's size hint is reserved up front; any further values
    /// grow the buffer under the usual doubling policy.
    pub fn from_iterable<I: IntoIterator<Item = bool>>(values: I) -> Self {
        let values = values.into_iter();
        let mut result = Self::with_capacity(values.size_hint().0);
        result.add_all(values);
        result
    }

    /// Returns the number of valid elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots in the underlying buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the valid elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.storage[..self.len]
    }

    /// Returns the valid elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.storage[..self.len]
    }

    // ---------- Access ----------

    /// Gets the element at `index`.
    ///
    /// Returns [Error::OutOfBounds] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(self.storage[index])
    }

    /// Gets the element at `index`, or `default` if the index is out of bounds.
    #[inline]
    pub fn get_or(&self, index: usize, default: bool) -> bool {
        self.get_or_none(index).unwrap_or(default)
    }

    /// Gets the element at `index`, or the result of `default` if the index is out of bounds.
    ///
    /// `default` is only called when it is needed.
    #[inline]
    pub fn get_or_else<F: FnOnce() -> bool>(&self, index: usize, default: F) -> bool {
        self.get_or_none(index).unwrap_or_else(default)
    }

    /// Gets the element at `index`, or `None` if the index is out of bounds.
    #[inline]
    pub fn get_or_none(&self, index: usize) -> Option<bool> {
        self.as_slice().get(index).copied()
    }

    // ---------- Mutation ----------

    /// Overwrites the element at `index` and returns the previous value.
    ///
    /// Returns [Error::OutOfBounds] if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(core::mem::replace(&mut self.storage[index], value))
    }

    /// Overwrites the element at `index`, or does nothing if the index is out of bounds.
    #[inline]
    pub fn set_or_discard(&mut self, index: usize, value: bool) {
        if let Some(slot) = self.as_mut_slice().get_mut(index) {
            *slot = value;
        }
    }

    /// Appends an element to the end of the vector.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    #[inline]
    pub fn add(&mut self, value: bool) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.storage[self.len] = value;
        self.len += 1;
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns true if an element was removed; an absent value is not an error.
    pub fn remove_value(&mut self, value: bool) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.remove_unchecked(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at `index`, shifting every later element one position to
    /// the left.
    ///
    /// This is O(n) in the number of elements after `index`. The relative order of the remaining
    /// elements is preserved.
    ///
    /// Returns [Error::OutOfBounds] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(self.remove_unchecked(index))
    }

    /// Removes and returns the first element.
    ///
    /// Returns [Error::OutOfBounds] if the vector is empty.
    #[inline]
    pub fn remove_first(&mut self) -> Result<bool, Error> {
        self.remove_at(0)
    }

    /// Removes and returns the last element.
    ///
    /// Returns [Error::OutOfBounds] if the vector is empty.
    #[inline]
    pub fn remove_last(&mut self) -> Result<bool, Error> {
        let index = self
            .len
            .checked_sub(1)
            .ok_or(Error::OutOfBounds { index: 0, len: 0 })?;
        Ok(self.remove_unchecked(index))
    }

    /// Removes all elements. The capacity and the contents of the buffer are left untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    // ---------- Bulk Operations ----------

    /// Appends every value of `values` in order.
    ///
    /// The growth policy applies to each element, so the buffer may grow several times during a
    /// single call.
    pub fn add_all<I: IntoIterator<Item = bool>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }

    /// Appends the present values of `values`, skipping `None` entries. A `None` source is a
    /// no-op.
    pub fn add_all_present<I: IntoIterator<Item = Option<bool>>>(&mut self, values: Option<I>) {
        let Some(values) = values else {
            return;
        };
        for value in values.into_iter().flatten() {
            self.add(value);
        }
    }

    /// Removes, for each value of `values`, the first remaining element equal to it.
    ///
    /// Repeated values remove repeated occurrences.
    pub fn remove_all<I: IntoIterator<Item = bool>>(&mut self, values: I) {
        for value in values {
            self.remove_value(value);
        }
    }

    // ---------- Queries ----------

    /// Returns the index of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: bool) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Returns the index of the last element equal to `value`.
    #[inline]
    pub fn last_index_of(&self, value: bool) -> Option<usize> {
        self.as_slice().iter().rposition(|&v| v == value)
    }

    /// Returns true if any element equals `value`.
    #[inline]
    pub fn contains(&self, value: bool) -> bool {
        self.index_of(value).is_some()
    }

    // ---------- Slicing ----------

    /// Returns a new `BoolVec` holding a copy of the elements in `[from, to)`.
    ///
    /// Returns [Error::OutOfBounds] if `to > len` and [Error::InvalidRange] if `from > to`.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self, Error> {
        if to > self.len {
            return Err(Error::OutOfBounds {
                index: to,
                len: self.len,
            });
        }
        if from > to {
            return Err(Error::InvalidRange { from, to });
        }
        Ok(Self::from_slice(&self.storage[from..to]))
    }

    /// Returns a new `BoolVec` holding a copy of the elements in `[from, to)`, after clamping
    /// `to` to the length. Never fails: an empty or inverted range yields an empty vector.
    pub fn sub_list_clamped(&self, from: usize, to: usize) -> Self {
        let to = to.min(self.len);
        let from = from.min(to);
        Self::from_slice(&self.storage[from..to])
    }

    // ---------- Iteration ----------

    /// Creates a read-only iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.as_slice())
    }

    /// Creates an iterator that can remove the element it last returned.
    #[inline]
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Calls `f` on each element in order.
    pub fn for_each<F: FnMut(bool)>(&self, mut f: F) {
        for &value in self.as_slice() {
            f(value);
        }
    }

    /// Calls `f` with the index and value of each element, from first to last.
    pub fn for_each_indexed<F: FnMut(usize, bool)>(&self, mut f: F) {
        for (index, &value) in self.as_slice().iter().enumerate() {
            f(index, value);
        }
    }

    /// Calls `f` with the index and value of each element, from last to first.
    pub fn for_each_reversed_indexed<F: FnMut(usize, bool)>(&self, mut f: F) {
        for (index, &value) in self.as_slice().iter().enumerate().rev() {
            f(index, value);
        }
    }

    // ---------- Conversion ----------

    /// Returns a fixed-size copy of the valid elements.
    #[inline]
    pub fn to_boxed_slice(&self) -> Box<[bool]> {
        self.as_slice().into()
    }

    /// Returns a `Vec<bool>` copy of the valid elements.
    #[inline]
    pub fn to_vec(&self) -> Vec<bool> {
        self.as_slice().to_vec()
    }

    // ---------- Helper Functions ----------

    /// Reallocates the buffer to twice its capacity (or [INITIAL_CAPACITY] when empty) and copies
    /// the valid elements over.
    fn grow(&mut self) {
        let old = self.capacity();
        let new = if old == 0 {
            INITIAL_CAPACITY
        } else {
            old.checked_mul(2).expect("capacity overflow")
        };
        let mut storage = vec![EMPTY_SLOT; new].into_boxed_slice();
        storage[..self.len].copy_from_slice(self.as_slice());
        self.storage = storage;
        trace!(old, new, "grew storage");
    }

    /// Removes the element at `index`, which must be less than the length.
    #[inline]
    fn remove_unchecked(&mut self, index: usize) -> bool {
        let value = self.storage[index];
        self.storage.copy_within(index + 1..self.len, index);
        self.len -= 1;
        value
    }

    /// Returns [Error::OutOfBounds] if `index` does not refer to a valid element.
    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.len {
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

// ---------- Constructors ----------

impl Default for BoolVec {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BoolVec {
    fn clone(&self) -> Self {
        Self::from_vector(self)
    }
}

impl From<&[bool]> for BoolVec {
    fn from(values: &[bool]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[bool; N]> for BoolVec {
    fn from(values: [bool; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl From<Vec<bool>> for BoolVec {
    fn from(values: Vec<bool>) -> Self {
        let len = values.len();
        BoolVec {
            storage: values.into_boxed_slice(),
            len,
        }
    }
}

impl FromIterator<bool> for BoolVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_iterable(iter)
    }
}

impl Extend<bool> for BoolVec {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a> Extend<&'a bool> for BoolVec {
    fn extend<I: IntoIterator<Item = &'a bool>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().copied());
    }
}

// ---------- Converters ----------

impl From<BoolVec> for Vec<bool> {
    fn from(bv: BoolVec) -> Self {
        let mut values = bv.storage.into_vec();
        values.truncate(bv.len);
        values
    }
}

impl AsRef<[bool]> for BoolVec {
    fn as_ref(&self) -> &[bool] {
        self.as_slice()
    }
}

// ---------- Comparison ----------

impl PartialEq for BoolVec {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for BoolVec {}

impl PartialEq<[bool]> for BoolVec {
    fn eq(&self, other: &[bool]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<Vec<bool>> for BoolVec {
    fn eq(&self, other: &Vec<bool>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<[bool; N]> for BoolVec {
    fn eq(&self, other: &[bool; N]) -> bool {
        self.as_slice() == other
    }
}

impl Hash for BoolVec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// ---------- Display ----------

impl fmt::Display for BoolVec {
    /// Renders the elements as `[true,false,...]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_char(',')?;
            }
            write!(f, "{value}")?;
        }
        f.write_char(']')
    }
}

// ---------- Debug ----------

impl fmt::Debug for BoolVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // For very large vectors, only show a preview
        const MAX_DISPLAY: usize = 64;
        const HALF_DISPLAY: usize = MAX_DISPLAY / 2;

        let write_slot = |formatter: &mut Formatter<'_>, index: usize| -> fmt::Result {
            formatter.write_char(if self.storage[index] { '1' } else { '0' })
        };

        f.write_str("BoolVec[")?;
        if self.len <= MAX_DISPLAY {
            for i in 0..self.len {
                write_slot(f, i)?;
            }
        } else {
            for i in 0..HALF_DISPLAY {
                write_slot(f, i)?;
            }

            f.write_str("...")?;

            for i in (self.len - HALF_DISPLAY)..self.len {
                write_slot(f, i)?;
            }
        }
        f.write_str("]")
    }
}

// ---------- Operations ----------

impl Index<usize> for BoolVec {
    type Output = bool;

    /// Allows accessing elements using the `[]` operator.
    ///
    /// Panics if out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

// ---------- Iterator ----------

impl IntoIterator for BoolVec {
    type Item = bool;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a> IntoIterator for &'a BoolVec {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
