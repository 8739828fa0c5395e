use crate::error::ListError;
use alloc::vec::Vec;

/// An ordered collection that grows and shrinks at its tail.
pub trait List<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `value` as the new last element.
    fn push(&mut self, value: T);

    /// Remove and return the last element, `None` if there is none.
    fn pop(&mut self) -> Option<T>;

    /// Like `pop` but reports an empty list as an error.
    fn try_pop(&mut self) -> Result<T, ListError> {
        self.pop().ok_or(ListError::Empty)
    }
}

impl<T> List<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}
