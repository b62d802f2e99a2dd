//! Iterators over a [BoolVec].
//!
//! [Iter] borrows the valid elements read-only and yields them by value. [Cursor] borrows the
//! vector mutably and can remove the element it returned last, so it drives in-place filtering
//! without collecting indices first. Both yield plain `bool`s, so there is no boxed/unboxed split
//! to choose between: generics are monomorphized over `bool` and `next` compiles down to a load.

use crate::{BoolVec, Error};
use core::{iter::FusedIterator, slice};

/// Read-only iterator over the elements of a [BoolVec].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, bool>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(values: &'a [bool]) -> Self {
        Self {
            inner: values.iter(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the elements of a [BoolVec] that can remove the element it returned last.
///
/// Removing shifts every later element one position to the left, and the cursor steps back
/// with them, so the next call to [Iterator::next] returns the element that followed the
/// removed one.
pub struct Cursor<'a> {
    /// The vector being iterated over.
    vec: &'a mut BoolVec,

    /// Index of the element the next call to `next` will return.
    pos: usize,

    /// Whether the element at `pos - 1` was returned by `next` and not yet removed.
    current: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(vec: &'a mut BoolVec) -> Self {
        Self {
            vec,
            pos: 0,
            current: false,
        }
    }

    /// Removes the element most recently returned by `next` and returns it.
    ///
    /// Returns [Error::NoCurrent] if `next` has not returned an element since the cursor was
    /// created or since the last removal. Reaching the end does not clear the current element.
    pub fn remove(&mut self) -> Result<bool, Error> {
        if !self.current {
            return Err(Error::NoCurrent);
        }
        let value = self.vec.remove_at(self.pos - 1)?;
        self.pos -= 1;
        self.current = false;
        Ok(value)
    }
}

impl Iterator for Cursor<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.vec.get_or_none(self.pos)?;
        self.pos += 1;
        self.current = true;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl FusedIterator for Cursor<'_> {}

/// Owning iterator over the elements of a [BoolVec].
#[derive(Clone, Debug)]
pub struct IntoIter {
    vec: BoolVec,
    front: usize,
    back: usize,
}

impl IntoIter {
    pub(crate) fn new(vec: BoolVec) -> Self {
        let back = vec.len();
        Self {
            vec,
            front: 0,
            back,
        }
    }
}

impl Iterator for IntoIter {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.vec.as_slice()[self.front];
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.vec.as_slice()[self.back])
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
