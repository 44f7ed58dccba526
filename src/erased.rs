use core::any::{type_name, Any};

use alloc::boxed::Box;

use crate::core::GrowVec;
use crate::error::GrowVecError;

/// Type-erased compatibility shim over [`GrowVec`].
///
/// Accepts values as `Box<dyn Any>` or `&dyn Any`, checks at runtime that
/// they actually hold the element type, and delegates to the typed API.
/// A failed check on an insertion path is a `TypeMismatch` error carrying
/// the expected type's name; on a lookup path an incompatible value simply
/// matches nothing. The shim adds no behavior of its own; it exists for
/// callers that only learn the element type at runtime.
#[derive(Debug)]
pub struct ErasedVec<T: Any> {
    inner: GrowVec<T>,
}

impl<T: Any> ErasedVec<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: GrowVec::new(),
        }
    }

    fn accept(value: Box<dyn Any>) -> Result<T, GrowVecError> {
        match value.downcast::<T>() {
            Ok(typed) => Ok(*typed),
            Err(_) => Err(GrowVecError::TypeMismatch {
                expected: type_name::<T>(),
            }),
        }
    }

    /// Appends a type-erased value.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::TypeMismatch` if `value` does not hold a
    /// `T`.
    pub fn push_value(&mut self, value: Box<dyn Any>) -> Result<(), GrowVecError> {
        self.inner.push(Self::accept(value)?);
        Ok(())
    }

    /// Inserts a type-erased value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::TypeMismatch` if `value` does not hold a
    /// `T`, and `GrowVecError::IndexOutOfBounds` if `index > len`.
    pub fn insert_value(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), GrowVecError> {
        self.inner.insert(index, Self::accept(value)?)
    }

    /// Index of the first element equal to `value`, or `None` when the
    /// value is absent or does not hold a `T`.
    #[must_use]
    pub fn index_of_value(&self, value: &dyn Any) -> Option<usize>
    where
        T: PartialEq,
    {
        let typed = value.downcast_ref::<T>()?;
        self.inner.index_of(typed)
    }

    #[must_use]
    pub fn contains_value(&self, value: &dyn Any) -> bool
    where
        T: PartialEq,
    {
        self.index_of_value(value).is_some()
    }

    /// Removes the first element equal to `value`. A value of the wrong
    /// type matches nothing and returns false.
    pub fn remove_value(&mut self, value: &dyn Any) -> bool
    where
        T: PartialEq,
    {
        match value.downcast_ref::<T>() {
            Some(typed) => self.inner.remove_item(typed),
            None => false,
        }
    }

    /// Gets the element at `index` as a type-erased reference.
    #[must_use]
    pub fn get_value(&self, index: usize) -> Option<&dyn Any> {
        self.inner.get(index).map(|item| item as &dyn Any)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn inner(&self) -> &GrowVec<T> {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut GrowVec<T> {
        &mut self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> GrowVec<T> {
        self.inner
    }
}

impl<T: Any> Default for ErasedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Any> From<GrowVec<T>> for ErasedVec<T> {
    fn from(inner: GrowVec<T>) -> Self {
        Self { inner }
    }
}
