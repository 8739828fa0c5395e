use crate::iter::Iter;
use crate::list::List;
use alloc::boxed::Box;
use core::fmt;
use core::iter::FromIterator;
use tracing::{debug, trace};

type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

/// A singly linked list that owns its nodes.
///
/// No tail pointer is kept, so `push` and `pop` walk the chain and cost
/// O(len).
pub struct LinkedList<T> {
    head: Link<T>,
    size: usize,
}

/// Appends behind a cached tail link, used to build a list in one pass.
pub(crate) struct Appender<'a, T> {
    tail: Option<&'a mut Link<T>>,
    size: &'a mut usize,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { value, next: None }
    }
}

/// Follow `next` links from `link` to the empty link after the last node.
fn last_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    /// Build a list whose order matches `values`, first value at the head.
    ///
    /// Equivalent to pushing each value in turn.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.extend(values);
        list
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append `value` as the new tail.
    pub fn push(&mut self, value: T) {
        *last_link(&mut self.head) = Some(Box::new(Node::new(value)));
        self.size += 1;
        trace!(len = self.size, "pushed tail");
    }

    /// Remove the tail and return its value, `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.head.is_none() {
            debug!("pop on empty list");
            return None;
        }

        //stop at the link that owns the last node
        let mut link = &mut self.head;
        while link.as_ref()?.next.is_some() {
            link = &mut link.as_mut()?.next;
        }
        let tail = link.take()?;
        self.size -= 1;
        trace!(len = self.size, "popped tail");
        Some(tail.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.size)
    }

    pub(crate) fn appender(&mut self) -> Appender<'_, T> {
        Appender {
            tail: Some(last_link(&mut self.head)),
            size: &mut self.size,
        }
    }

    /// Write one `Node(<value>)` line per node to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self);
    }
}

impl<'a, T> Appender<'a, T> {
    pub(crate) fn append(&mut self, value: T) {
        if let Some(tail) = self.tail.take() {
            let node = tail.insert(Box::new(Node::new(value)));
            self.tail = Some(&mut node.next);
            *self.size += 1;
        }
    }
}

impl<T> List<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn push(&mut self, value: T) {
        LinkedList::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        LinkedList::pop(self)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    //unlink one node at a time, dropping the boxes recursively can blow the stack
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut appender = self.appender();
        for v in values {
            appender.append(v);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.iter() {
            writeln!(f, "Node({})", v)?;
        }
        Ok(())
    }
}
