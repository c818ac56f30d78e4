//! Lazy depth-first flattening over a result tree.
//!
//! Both iterators keep a stack of entry cursors. A nested result pushes its
//! own cursor and is drained before the outer cursor resumes, so the walk
//! stops as soon as the consumer stops pulling (e.g. "find first failure").

use std::iter::FusedIterator;

use crate::foundation::registration::Registration;
use crate::foundation::result::Entry;

// ============================================================================
// BORROWING ITERATOR
// ============================================================================

/// Borrowing flattening iterator returned by
/// [`ValidationResult::iter`](crate::foundation::ValidationResult::iter).
///
/// Each call to `iter()` starts a fresh traversal.
#[derive(Debug, Clone)]
pub struct Registrations<'r> {
    stack: Vec<std::slice::Iter<'r, Entry>>,
}

impl<'r> Registrations<'r> {
    pub(crate) fn new(entries: &'r [Entry]) -> Self {
        Self {
            stack: vec![entries.iter()],
        }
    }
}

impl<'r> Iterator for Registrations<'r> {
    type Item = &'r Registration;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cursor) = self.stack.last_mut() {
            match cursor.next() {
                Some(Entry::Registration(registration)) => return Some(registration),
                Some(Entry::Result(nested)) => self.stack.push(nested.entries().iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl FusedIterator for Registrations<'_> {}

// ============================================================================
// OWNING ITERATOR
// ============================================================================

/// Owning flattening iterator, produced by `ValidationResult::into_iter`.
#[derive(Debug)]
pub struct IntoRegistrations {
    stack: Vec<std::vec::IntoIter<Entry>>,
}

impl IntoRegistrations {
    pub(crate) fn new(entries: Vec<Entry>) -> Self {
        Self {
            stack: vec![entries.into_iter()],
        }
    }
}

impl Iterator for IntoRegistrations {
    type Item = Registration;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cursor) = self.stack.last_mut() {
            match cursor.next() {
                Some(Entry::Registration(registration)) => return Some(registration),
                Some(Entry::Result(nested)) => self.stack.push(nested.into_entries().into_iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl FusedIterator for IntoRegistrations {}
