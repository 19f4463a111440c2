//! A last-in-first-out [stack] built on a singly-linked chain.
//!
//! The stack owns its top node and each node owns the one pushed before it,
//! so both `push` and `pop` only touch the top of the chain.
//!
//! [stack]: https://en.wikipedia.org/wiki/Stack_(abstract_data_type)

use std::fmt;

use core::iter::FusedIterator;

/// Creates a `Stack` containing the arguments, pushed in order so that the
/// last argument ends up on top.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut stack = stack![1, 2, 3];
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// ```
#[macro_export]
macro_rules! stack {
    () => {
        $crate::collections::stack::Stack::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut stack = $crate::collections::stack::Stack::new();
        $(stack.push($elem);)+
        stack
    }};
}

type Link<T> = Option<Box<Node<T>>>;

/// A last-in-first-out stack.
pub struct Stack<T> {
    /// Owning link to the most recently pushed node.
    top: Link<T>,
    len: usize,
}

#[derive(Debug)]
struct Node<T> {
    /// Owning link to the node pushed before this one.
    prev: Link<T>,
    elem: T,
}

/// An iterator that moves out of a `Stack<T>`, popping from the top.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Stack<T>,
}

/// An iterator over a `Stack<T>`, from the top down.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let stack: Stack<i32> = Stack::new();
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    pub fn push(&mut self, elem: T) {
        let node = Box::new(Node {
            prev: self.top.take(),
            elem,
        });

        self.top = Some(node);
        self.len += 1;
    }

    /// Removes the top element and returns it, or [`None`] if the stack is
    /// empty.
    ///
    /// Popping an empty stack is not an error, so draining loops can simply
    /// run until [`None`].
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
    /// let mut stack = stack![1, 2];
    ///
    /// let mut drained = Vec::new();
    /// while let Some(elem) = stack.pop() {
    ///     drained.push(elem);
    /// }
    ///
    /// assert_eq!(drained, [2, 1]);
    /// assert_eq!(stack.pop(), None);
    /// assert_eq!(stack.len(), 0);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            let Node { prev, elem } = *node;
            self.top = prev;
            self.len -= 1;

            elem
        })
    }

    /// Returns a reference to the top element without removing it, or
    /// [`None`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.elem)
    }

    /// Returns a mutable reference to the top element, or [`None`] if the
    /// stack is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_mut().map(|node| &mut node.elem)
    }

    /// Removes every element from the stack.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Returns an iterator over the stack, from the top down.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
            len: self.len,
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut stack = Self::new();
        let mut link = &mut stack.top;

        // Rebuild top-down so the copy keeps the same order.
        for elem in self {
            let node = link.insert(Box::new(Node {
                prev: None,
                elem: elem.clone(),
            }));
            link = &mut node.prev;
        }

        stack.len = self.len;
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> IntoIterator for Stack<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len, Some(self.stack.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.prev.as_deref();
            self.len -= 1;
            &node.elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
