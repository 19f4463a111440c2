//! A first-in-first-out [queue] built on a singly-linked chain.
//!
//! The queue owns `head`, the dequeue end, and every node owns the node
//! enqueued after it. `tail` is a non-owning back-reference to the last node
//! so enqueueing stays *constant* time. It is cleared whenever the queue
//! drains, so a later enqueue rebuilds the chain from empty instead of
//! attaching to a node that has already been released.
//!
//! [queue]: https://en.wikipedia.org/wiki/Queue_(abstract_data_type)

use std::fmt;

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use tracing::trace;

/// Creates a `Queue` containing the arguments, enqueued in order.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut queue = queue![1, 2, 3];
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), Some(3));
/// ```
#[macro_export]
macro_rules! queue {
    () => {
        $crate::collections::queue::Queue::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut queue = $crate::collections::queue::Queue::new();
        $(queue.enqueue($elem);)+
        queue
    }};
}

/// A first-in-first-out queue.
pub struct Queue<T> {
    /// Owning pointer to the oldest node, the dequeue end.
    head: Option<NonNull<Node<T>>>,
    /// Back-reference to the newest node, the enqueue end.
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    /// In order to tell the drop checker that we do own values of type `T`, and
    /// therefore may drop some `T`'s when we drop.
    _marker: PhantomData<T>,
}

#[derive(Debug)]
struct Node<T> {
    /// Owning pointer to the node enqueued after this one.
    next: Option<NonNull<Node<T>>>,
    elem: T,
}

/// An iterator that moves out of a `Queue<T>`, dequeuing from the front.
#[derive(Debug)]
pub struct IntoIter<T> {
    queue: Queue<T>,
}

/// An iterator over a `Queue<T>`, from front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a T>,
}

/// A mutable iterator over a `Queue<T>`, from front to back.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty `Queue`.
    ///
    /// The queue will not allocate until elements are enqueued.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let queue: Queue<i32> = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Adds an element to the back of the queue.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The new node is attached after `tail`, or becomes
    /// both `head` and `tail` when the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(3);
    /// queue.enqueue(4);
    ///
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.peek(), Some(&3));
    /// ```
    pub fn enqueue(&mut self, elem: T) {
        let new_node = NonNull::from(Box::leak(Box::new(Node { next: None, elem })));

        match self.tail {
            // SAFETY: `tail` is always a live node of this queue.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(new_node) },
            None => self.head = Some(new_node),
        }

        self.tail = Some(new_node);
        self.len += 1;
    }

    /// Removes the element at the front of the queue and returns it, or
    /// [`None`] if the queue is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut queue = queue![5];
    ///
    /// assert_eq!(queue.dequeue(), Some(5));
    /// assert_eq!(queue.dequeue(), None);
    ///
    /// queue.enqueue(6);
    /// assert_eq!(queue.peek(), Some(&6));
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` is always a live node of this queue, owned by it.
            let Node { next, elem } = unsafe { *Box::from_raw(head.as_ptr()) };

            self.head = next;
            self.len -= 1;

            if self.head.is_none() {
                trace!("queue drained, clearing tail");
                self.tail = None;
            }

            elem
            // The node itself was released when it was moved out of its box.
        })
    }

    /// Returns a reference to the element at the front of the queue without
    /// removing it, or [`None`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the element at the front of the queue,
    /// or [`None`] if the queue is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.map(|head| &mut (*head.as_ptr()).elem) }
    }

    /// Removes every element from the queue.
    #[inline]
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
    }

    /// Returns an iterator over the queue, from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns a mutable iterator over the queue, from front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.enqueue(elem);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> IntoIterator for Queue<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Queue<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len, Some(self.queue.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| unsafe {
            self.len -= 1;
            self.next = (*node.as_ptr()).next;
            &(*node.as_ptr()).elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| unsafe {
            self.len -= 1;
            self.next = (*node.as_ptr()).next;
            &mut (*node.as_ptr()).elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod test {
    use super::*;

    /// Checks `head`/`tail` agree with `len` and that `tail` ends the chain.
    fn check_ends<T>(queue: &Queue<T>) {
        assert_eq!(queue.head.is_none(), queue.len == 0);
        assert_eq!(queue.tail.is_none(), queue.len == 0);

        let mut count = 0;
        let mut last = None;
        let mut curr = queue.head;

        while let Some(node) = curr {
            count += 1;
            last = Some(node);
            curr = unsafe { (*node.as_ptr()).next };
        }

        assert_eq!(count, queue.len);
        assert_eq!(last, queue.tail);
    }

    #[test]
    fn test_basic() {
        let mut queue = Queue::new();

        // Try to break an empty queue
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.len(), 0);
        check_ends(&queue);

        // Try to break a one item queue
        queue.enqueue(1);
        assert_eq!(queue.head, queue.tail);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), None);
        check_ends(&queue);

        // Mess around
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(4);
        assert_eq!(queue.len(), 3);
        check_ends(&queue);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(4));
        assert_eq!(queue.dequeue(), None);
        check_ends(&queue);
    }

    #[test]
    fn test_drain_then_enqueue_rebuilds_from_empty() {
        let mut queue = queue![1, 2, 3];

        while queue.dequeue().is_some() {}
        assert!(queue.tail.is_none());

        queue.enqueue(10);
        assert_eq!(queue.len(), 1);
        assert!(queue.head.is_some());
        assert_eq!(queue.head, queue.tail);
        assert_eq!(queue.peek(), Some(&10));
        check_ends(&queue);

        queue.enqueue(11);
        assert!(queue.iter().eq([&10, &11]));
        check_ends(&queue);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut queue = queue![1, 2];

        for _ in 0..5 {
            assert_eq!(queue.peek(), Some(&1));
        }
        assert_eq!(queue.len(), 2);

        if let Some(front) = queue.peek_mut() {
            *front = 10;
        }
        for elem in &mut queue {
            *elem += 1;
        }
        assert!(queue.iter().eq([&11, &3]));
    }

    #[test]
    fn test_clone_debug_into_iter() {
        let queue: Queue<i32> = (1..=3).collect();
        let copy = queue.clone();

        assert_eq!(format!("{copy:?}"), "[1, 2, 3]");
        check_ends(&copy);
        assert_eq!(copy.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(queue.len(), 3);
    }
}
