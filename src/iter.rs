use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::ptr;
use core::slice;

use crate::core::GrowVec;
use crate::error::GrowVecError;
use crate::raw::RawStore;

/// Position of a [`Cursor`] within its source vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    NotStarted,
    At(usize),
    Exhausted,
}

/// A detached read cursor that fails fast on structural modification.
///
/// A cursor snapshots the source vector's version stamp when it is
/// created and holds no borrow of the vector itself, so the vector stays
/// freely mutable while the cursor exists. The price is paid at use time:
/// [`advance`](Cursor::advance) and [`reset`](Cursor::reset) compare
/// stamps first and report `ConcurrentModification` once the vector has
/// been structurally modified, instead of ever reading a shifted or stale
/// element. The check is a single integer comparison, not a lock.
///
/// A cursor is only meaningful with the vector that created it; pair it
/// with anything else and the stamps will disagree.
///
/// ```
/// use growvec::GrowVec;
///
/// let mut numbers: GrowVec<i32> = (1..=3).collect();
/// let mut cursor = numbers.cursor();
///
/// assert_eq!(cursor.advance(&numbers).unwrap(), Some(&1));
/// numbers.push(4);
/// assert!(cursor.advance(&numbers).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    version: u64,
    state: CursorState,
}

impl Cursor {
    pub(crate) fn new(version: u64) -> Self {
        Self {
            version,
            state: CursorState::NotStarted,
        }
    }

    fn check_version<T>(&self, source: &GrowVec<T>) -> Result<(), GrowVecError> {
        if self.version == source.version {
            Ok(())
        } else {
            Err(GrowVecError::ConcurrentModification {
                bound: self.version,
                current: source.version,
            })
        }
    }

    /// Steps to the next element of `source`.
    ///
    /// Returns `Ok(None)` once the cursor has moved past the last element;
    /// further calls keep returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::ConcurrentModification` if `source` was
    /// structurally modified after this cursor was created. The version is
    /// checked before the exhaustion state, so modification is detected
    /// even on a cursor that had already run off the end.
    pub fn advance<'a, T>(&mut self, source: &'a GrowVec<T>) -> Result<Option<&'a T>, GrowVecError> {
        self.check_version(source)?;
        let next = match self.state {
            CursorState::NotStarted => 0,
            CursorState::At(position) => position + 1,
            CursorState::Exhausted => return Ok(None),
        };
        if next < source.len() {
            self.state = CursorState::At(next);
            Ok(source.get(next))
        } else {
            self.state = CursorState::Exhausted;
            Ok(None)
        }
    }

    /// Returns the element the cursor is currently positioned on.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CursorOutOfPosition` before the first
    /// `advance` and after exhaustion.
    pub fn current<'a, T>(&self, source: &'a GrowVec<T>) -> Result<&'a T, GrowVecError> {
        match self.state {
            CursorState::At(position) => source
                .get(position)
                .ok_or(GrowVecError::CursorOutOfPosition),
            _ => Err(GrowVecError::CursorOutOfPosition),
        }
    }

    /// Rewinds the cursor to its not-started state.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::ConcurrentModification` under the same rule
    /// as [`advance`](Cursor::advance).
    pub fn reset<T>(&mut self, source: &GrowVec<T>) -> Result<(), GrowVecError> {
        self.check_version(source)?;
        self.state = CursorState::NotStarted;
        Ok(())
    }
}

/// Iterator over the elements of a `GrowVec`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct GrowVecIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for GrowVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for GrowVecIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for GrowVecIter<'_, T> {}

impl<T> FusedIterator for GrowVecIter<'_, T> {}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = GrowVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        GrowVecIter {
            inner: self.as_slice().iter(),
        }
    }
}

/// Owning iterator returned by consuming a `GrowVec`.
///
/// Elements not consumed by the time the iterator is dropped are dropped
/// with it.
pub struct GrowVecIntoIter<T> {
    buf: RawStore<T>,
    start: usize,
    end: usize,
}

impl<T> Iterator for GrowVecIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // Safe: the slot is initialized, and `start` moves past it so it
        // is read exactly once.
        let item = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for GrowVecIntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // Safe: symmetric with `next`.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for GrowVecIntoIter<T> {}

impl<T> FusedIterator for GrowVecIntoIter<T> {}

impl<T> Drop for GrowVecIntoIter<T> {
    fn drop(&mut self) {
        // Safe: [start, end) holds exactly the elements not yet yielded;
        // the backing store frees the allocation afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(self.start),
                self.end - self.start,
            ));
        }
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = GrowVecIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        // Safe: the vector is forgotten, so ownership of the buffer and
        // every element moves into the iterator.
        let buf = unsafe { ptr::read(&vec.buf) };
        GrowVecIntoIter {
            buf,
            start: 0,
            end: vec.len,
        }
    }
}

// Safe: the iterator exclusively owns the elements it has not yet
// yielded.
unsafe impl<T: Send> Send for GrowVecIntoIter<T> {}
unsafe impl<T: Sync> Sync for GrowVecIntoIter<T> {}
