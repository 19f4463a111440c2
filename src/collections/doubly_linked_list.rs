//! A doubly-linked list with owned nodes.
//!
//! Ownership flows forward: the list owns `head` and every node owns its
//! `next`. The `prev` links and the list's `tail` are observational
//! back-references that are only ever used to navigate and re-link, never to
//! free a node. With `tail` tracked, both ends support *constant* time
//! insertion and removal.
//!
//! Using [Learn Rust With Entirely Too Many Linked Lists]
//!
//! [Learn Rust With Entirely Too Many Linked Lists]: https://rust-unofficial.github.io/too-many-lists/

use std::fmt;

use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker;
use core::ptr::NonNull;

use tracing::debug;

use crate::error::{Error, Result};

/// Creates a `DoublyLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut list = doubly![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
/// assert!(list.iter().eq([&1, &2, &3]));
///
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.pop_back(), Some(2));
/// assert_eq!(list.pop_back(), Some(1));
/// ```
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let list = doubly![1; 5];
/// assert_eq!(list.len(), 5);
/// assert!(list.iter().eq([&1, &1, &1, &1, &1]));
/// ```
#[macro_export]
macro_rules! doubly {
    () => {
        $crate::collections::doubly_linked_list::DoublyLinkedList::new()
    };
    ($($elem:expr)=>+) => {{
        let mut list = $crate::collections::doubly_linked_list::DoublyLinkedList::new();
        $(list.append($elem);)+
        list
    }};
    ($elem:expr; $n:expr) => {{
        // Ensure the expression is only evaluated once.
        let count = $n;

        let mut list = $crate::collections::doubly_linked_list::DoublyLinkedList::new();
        list.extend(::core::iter::repeat($elem).take(count));
        list
    }};
}

/// A doubly-linked list with owned nodes.
///
/// Both ends can be pushed, popped and accessed in *constant* time. Indexed
/// access walks from whichever end is closer.
pub struct DoublyLinkedList<T> {
    /// Owning pointer to the first node.
    head: Option<NonNull<Node<T>>>,
    /// Back-reference to the last node.
    tail: Option<NonNull<Node<T>>>,
    /// Number of live nodes.
    len: usize,
    /// In order to tell the drop checker that we do own values of type T, and
    /// therefore may drop some T's when we drop.
    _marker: marker::PhantomData<T>,
}

#[derive(Debug)]
struct Node<T> {
    /// Owning pointer to the next node, `None` at the tail.
    next: Option<NonNull<Node<T>>>,
    /// Back-reference to the previous node, `None` at the head.
    prev: Option<NonNull<Node<T>>>,
    elem: T,
}

/// An iterator that moves out of a `DoublyLinkedList<T>`.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

/// An iterator that borrows a `DoublyLinkedList<T>` immutably.
#[derive(Debug)]
pub struct Iter<'a, T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// Number of nodes not yet yielded from either end.
    len: usize,
    _marker: marker::PhantomData<&'a T>,
}

/// An iterator that borrows a `DoublyLinkedList<T>` mutably.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// Number of nodes not yet yielded from either end.
    len: usize,
    _marker: marker::PhantomData<&'a mut T>,
}

/// A mutable cursor over a `DoublyLinkedList<T>`.
///
/// A cursor holds a direct reference to one node, so removing or inserting
/// around it needs no traversal.
///
/// Cursors index in a logically circular way: a "ghost" non-element that
/// yields [`None`] sits between the tail and the head of the list. When
/// created, cursors start on the "ghost" non-element.
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    /// Node the cursor is "on", `None` for the "ghost" non-element.
    curr: Option<NonNull<Node<T>>>,
    list: &'a mut DoublyLinkedList<T>,
    /// Index of `curr`, `None` exactly when `curr` is `None`.
    idx: Option<usize>,
}

impl<T> DoublyLinkedList<T> {
    /// Constructs a new, empty `DoublyLinkedList<T>`.
    ///
    /// The list will not allocate until elements are inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: marker::PhantomData,
        }
    }

    /// Returns an immutable reference to the first element of the list, or
    /// [`None`] if it is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the first element of the list, or
    /// [`None`] if it is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.map(|head| &mut (*head.as_ptr()).elem) }
    }

    /// Returns an immutable reference to the last element of the list, or
    /// [`None`] if it is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.map(|tail| &(*tail.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the last element of the list, or
    /// [`None`] if it is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        unsafe { self.tail.map(|tail| &mut (*tail.as_ptr()).elem) }
    }

    /// Prepends an element to the front of the list.
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
    /// let mut list = DoublyLinkedList::new();
    /// list.prepend(3);
    /// list.prepend(4);
    ///
    /// assert_eq!(list.front(), Some(&4));
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn prepend(&mut self, elem: T) {
        let new_node = Node::alloc(elem);

        unsafe {
            if let Some(head) = self.head {
                // There is at least a valid `head` node.
                (*head.as_ptr()).prev = Some(new_node);
                (*new_node.as_ptr()).next = Some(head);
            } else {
                self.tail = Some(new_node);
            }
        }

        self.head = Some(new_node);
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The new node is attached after `tail`, which is
    /// then moved onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.append(3);
    /// list.append(4);
    ///
    /// assert_eq!(list.front(), Some(&3));
    /// assert_eq!(list.back(), Some(&4));
    /// ```
    pub fn append(&mut self, elem: T) {
        let new_node = Node::alloc(elem);

        unsafe {
            if let Some(tail) = self.tail {
                // There is at least a valid `tail` node.
                (*tail.as_ptr()).next = Some(new_node);
                (*new_node.as_ptr()).prev = Some(tail);
            } else {
                self.head = Some(new_node);
            }
        }

        self.tail = Some(new_node);
        self.len += 1;
    }

    /// Inserts an element so that it ends up at position `idx`.
    ///
    /// Index `0` prepends and index `len` appends; anything in between is
    /// spliced in immediately before the node currently at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `idx > len`. The list is left
    /// untouched in that case.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*min*(*idx*, *len* - *idx*)) time to locate the node at
    /// `idx`. Splicing is *constant* time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![1 => 3 => 4];
    ///
    /// list.insert_at(2, 1).unwrap();
    /// list.insert_at(5, 4).unwrap();
    /// assert!(list.iter().eq([&1, &2, &3, &4, &5]));
    ///
    /// assert!(list.insert_at(6, 6).is_err());
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn insert_at(&mut self, elem: T, idx: usize) -> Result<()> {
        if idx > self.len {
            debug!(index = idx, len = self.len, "rejected out-of-bounds insertion");
            return Err(Error::IndexOutOfBounds {
                index: idx,
                len: self.len,
            });
        }

        if idx == 0 {
            self.prepend(elem);
        } else if idx == self.len {
            self.append(elem);
        } else {
            match self.node_at(idx) {
                // SAFETY: `node_at` only yields live nodes of this list.
                Some(succ) => unsafe {
                    self.link_before(succ, elem);
                },
                None => unreachable!("index {idx} was checked against length {}", self.len),
            }
        }

        Ok(())
    }

    /// Removes the first element from the list and returns it, or [`None`] if
    /// it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: `head` is always a live node of this list.
        self.head.map(|head| unsafe { self.unlink_node(head) })
    }

    /// Removes the last element from the list and returns it, or [`None`] if
    /// it is empty.
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
    /// let mut list = doubly![5 => 4 => 3];
    ///
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.pop_front(), Some(5));
    /// assert_eq!(list.pop_back(), Some(4));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        // SAFETY: `tail` is always a live node of this list.
        self.tail.map(|tail| unsafe { self.unlink_node(tail) })
    }

    /// Removes the element at position `idx` and returns it, or [`None`] if
    /// `idx` is out of bounds.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*min*(*idx*, *len* - *idx*)) time to locate the node.
    /// Unlinking is *constant* time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![0 => 1 => 2 => 3];
    ///
    /// assert_eq!(list.remove_at(2), Some(2));
    /// assert_eq!(list.remove_at(3), None);
    /// assert!(list.iter().eq([&0, &1, &3]));
    /// ```
    pub fn remove_at(&mut self, idx: usize) -> Option<T> {
        let node = self.node_at(idx)?;

        // SAFETY: `node_at` only yields live nodes of this list.
        unsafe { Some(self.unlink_node(node)) }
    }

    /// Returns an immutable reference to the element at position `idx`, or
    /// [`None`] if it is out of bounds.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*min*(*idx*, *len* - *idx*)) time. The walk starts from
    /// whichever end of the list is closer to `idx`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = doubly![4 => 3 => 2];
    ///
    /// assert_eq!(list.get(0), Some(&4));
    /// assert_eq!(list.get(2), Some(&2));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, idx: usize) -> Option<&T> {
        unsafe { self.node_at(idx).map(|node| &(*node.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the element at position `idx`, or
    /// [`None`] if it is out of bounds.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        unsafe { self.node_at(idx).map(|node| &mut (*node.as_ptr()).elem) }
    }

    /// Clears the list, removing all nodes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an immutable iterator over the list.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: marker::PhantomData,
        }
    }

    /// Returns a mutable iterator over the list.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: marker::PhantomData,
        }
    }

    /// Returns a mutable cursor over the list, starting on the "ghost"
    /// non-element.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![1 => 2 => 3];
    ///
    /// let mut cursor = list.cursor_mut();
    /// cursor.move_next();
    /// cursor.move_next();
    /// assert_eq!(cursor.remove_current(), Some(2));
    /// assert_eq!(cursor.current(), Some(&mut 3));
    ///
    /// assert!(list.iter().eq([&1, &3]));
    /// ```
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            curr: None,
            list: self,
            idx: None,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Locates the node at `idx`, walking from the closer end.
    fn node_at(&self, idx: usize) -> Option<NonNull<Node<T>>> {
        if idx >= self.len {
            return None;
        }

        unsafe {
            if idx <= self.len / 2 {
                let mut curr = self.head?;
                for _ in 0..idx {
                    curr = (*curr.as_ptr()).next?;
                }
                Some(curr)
            } else {
                let mut curr = self.tail?;
                for _ in 0..(self.len - 1 - idx) {
                    curr = (*curr.as_ptr()).prev?;
                }
                Some(curr)
            }
        }
    }

    /// Splices a new node holding `elem` immediately before `succ` and
    /// returns it.
    ///
    /// # Safety
    ///
    /// `succ` must be a live node of this list.
    unsafe fn link_before(&mut self, succ: NonNull<Node<T>>, elem: T) -> NonNull<Node<T>> {
        let new_node = Node::alloc(elem);

        unsafe {
            let prev = (*succ.as_ptr()).prev;

            (*new_node.as_ptr()).prev = prev;
            (*new_node.as_ptr()).next = Some(succ);
            (*succ.as_ptr()).prev = Some(new_node);

            match prev {
                Some(prev) => (*prev.as_ptr()).next = Some(new_node),
                None => self.head = Some(new_node),
            }
        }

        self.len += 1;

        new_node
    }

    /// Splices `node` out of the list, repointing its neighbours (or `head`
    /// and `tail` when it is an endpoint), frees it and returns its element.
    ///
    /// # Safety
    ///
    /// `node` must be a live node of this list.
    unsafe fn unlink_node(&mut self, node: NonNull<Node<T>>) -> T {
        // Moving out of the box releases the node together with its own
        // `next`/`prev`, so no stale link to a neighbour survives it.
        let Node { next, prev, elem } = unsafe { *Box::from_raw(node.as_ptr()) };

        unsafe {
            match prev {
                Some(prev) => (*prev.as_ptr()).next = next,
                None => self.head = next,
            }

            match next {
                Some(next) => (*next.as_ptr()).prev = prev,
                None => self.tail = prev,
            }
        }

        self.len -= 1;

        elem
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Removes the first element equal to `key` and returns it, or [`None`]
    /// if no such element exists.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time to find the node. Unlinking is *constant* time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![1 => 2 => 3 => 2];
    ///
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&9), None);
    /// assert!(list.iter().eq([&1, &3, &2]));
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let mut curr = self.head;

        while let Some(node) = curr {
            unsafe {
                if (*node.as_ptr()).elem == *key {
                    return Some(self.unlink_node(node));
                }

                curr = (*node.as_ptr()).next;
            }
        }

        None
    }

    /// Returns `true` if the list contains an element equal to `key`.
    pub fn contains(&self, key: &T) -> bool {
        self.iter().any(|elem| elem == key)
    }
}

impl<T> Node<T> {
    /// Heap-allocates an unlinked node. Ownership is handed to whichever
    /// link the caller stores it in.
    fn alloc(elem: T) -> NonNull<Node<T>> {
        let boxed = Box::new(Node {
            next: None,
            prev: None,
            elem,
        });

        NonNull::from(Box::leak(boxed))
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.append(elem);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.head.map(|head| unsafe {
            self.len -= 1;
            self.head = (*head.as_ptr()).next;
            &(*head.as_ptr()).elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.tail.map(|tail| unsafe {
            self.len -= 1;
            self.tail = (*tail.as_ptr()).prev;
            &(*tail.as_ptr()).elem
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.head.map(|head| unsafe {
            self.len -= 1;
            self.head = (*head.as_ptr()).next;
            &mut (*head.as_ptr()).elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.tail.map(|tail| unsafe {
            self.len -= 1;
            self.tail = (*tail.as_ptr()).prev;
            &mut (*tail.as_ptr()).elem
        })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> CursorMut<'_, T> {
    /// Returns the cursor position index within the list, or [`None`] if the
    /// cursor is on the "ghost" non-element.
    pub fn index(&self) -> Option<usize> {
        self.idx
    }

    /// Returns a mutable reference to the element the cursor is on, or
    /// [`None`] on the "ghost" non-element.
    pub fn current(&mut self) -> Option<&mut T> {
        unsafe { self.curr.map(|curr| &mut (*curr.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the next element.
    ///
    /// From the "ghost" non-element this is the first element of the list;
    /// from the last element it is [`None`].
    pub fn peek_next(&mut self) -> Option<&mut T> {
        unsafe {
            match self.curr {
                Some(curr) => (*curr.as_ptr()).next,
                None => self.list.head,
            }
            .map(|node| &mut (*node.as_ptr()).elem)
        }
    }

    /// Returns a mutable reference to the previous element.
    ///
    /// From the "ghost" non-element this is the last element of the list;
    /// from the first element it is [`None`].
    pub fn peek_prev(&mut self) -> Option<&mut T> {
        unsafe {
            match self.curr {
                Some(curr) => (*curr.as_ptr()).prev,
                None => self.list.tail,
            }
            .map(|node| &mut (*node.as_ptr()).elem)
        }
    }

    /// Moves the cursor to the next element, wrapping through the "ghost"
    /// non-element after the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![1 => 2];
    ///
    /// let mut cursor = list.cursor_mut();
    /// assert_eq!(cursor.index(), None);
    ///
    /// cursor.move_next();
    /// assert_eq!(cursor.index(), Some(0));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), Some(&mut 2));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn move_next(&mut self) {
        match self.curr {
            Some(curr) => unsafe {
                self.curr = (*curr.as_ptr()).next;
                self.idx = self.curr.and(self.idx.map(|idx| idx + 1));
            },
            None => {
                self.curr = self.list.head;
                self.idx = self.curr.map(|_| 0);
            }
        }
    }

    /// Moves the cursor to the previous element, wrapping through the
    /// "ghost" non-element before the head.
    pub fn move_prev(&mut self) {
        match self.curr {
            Some(curr) => unsafe {
                self.curr = (*curr.as_ptr()).prev;
                self.idx = self.curr.and(self.idx.and_then(|idx| idx.checked_sub(1)));
            },
            None => {
                self.curr = self.list.tail;
                self.idx = self.curr.map(|_| self.list.len - 1);
            }
        }
    }

    /// Inserts an element before the cursor.
    ///
    /// On the "ghost" non-element this appends to the list.
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
    /// let mut list = doubly![1 => 2 => 3];
    ///
    /// let mut cursor = list.cursor_mut();
    /// cursor.move_next();
    /// cursor.move_next(); // current node (2)
    ///
    /// cursor.insert_before(10);
    /// assert_eq!(cursor.index(), Some(2));
    ///
    /// assert!(list.iter().eq([&1, &10, &2, &3]));
    /// ```
    pub fn insert_before(&mut self, elem: T) {
        match self.curr {
            Some(curr) => {
                // SAFETY: the cursor only ever rests on live nodes.
                unsafe { self.list.link_before(curr, elem) };
                self.idx = self.idx.map(|idx| idx + 1);
            }
            None => self.list.append(elem),
        }
    }

    /// Inserts an element after the cursor.
    ///
    /// On the "ghost" non-element this prepends to the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    pub fn insert_after(&mut self, elem: T) {
        let Some(curr) = self.curr else {
            return self.list.prepend(elem);
        };

        // SAFETY: the cursor only ever rests on live nodes, and so does
        // their successor.
        unsafe {
            match (*curr.as_ptr()).next {
                Some(next) => {
                    self.list.link_before(next, elem);
                }
                None => self.list.append(elem),
            }
        }
    }

    /// Removes the element the cursor is on and returns it, or [`None`] on
    /// the "ghost" non-element.
    ///
    /// The cursor moves to the next element, which takes over the removed
    /// element's index, or to the "ghost" non-element if the tail was
    /// removed.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    pub fn remove_current(&mut self) -> Option<T> {
        let curr = self.curr?;

        unsafe {
            self.curr = (*curr.as_ptr()).next;
            if self.curr.is_none() {
                self.idx = None;
            }

            // SAFETY: the cursor only ever rests on live nodes.
            Some(self.list.unlink_node(curr))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn list_from<T: Clone>(v: &[T]) -> DoublyLinkedList<T> {
        v.iter().cloned().collect()
    }

    /// Walks the raw links and checks every structural invariant.
    fn check_links<T: PartialEq + fmt::Debug>(list: &DoublyLinkedList<T>) {
        assert_eq!(list.head.is_none(), list.len == 0);
        assert_eq!(list.tail.is_none(), list.len == 0);

        unsafe {
            if let Some(head) = list.head {
                assert!((*head.as_ptr()).prev.is_none(), "`head.prev` is set");
            }
            if let Some(tail) = list.tail {
                assert!((*tail.as_ptr()).next.is_none(), "`tail.next` is set");
            }

            let mut count = 0;
            let mut last = None;
            let mut curr = list.head;

            while let Some(node) = curr {
                count += 1;
                assert!(count <= list.len, "chain is longer than `len`");
                assert_eq!((*node.as_ptr()).prev, last, "broken back-reference");

                last = Some(node);
                curr = (*node.as_ptr()).next;
            }

            assert_eq!(count, list.len);
            assert_eq!(last, list.tail, "`tail` is not the end of the chain");
        }

        let from_front: Vec<_> = list.iter().collect();
        let mut from_back: Vec<_> = list.iter().rev().collect();
        from_back.reverse();
        assert_eq!(from_front, from_back);
    }

    #[test]
    fn test_basic_front() {
        let mut list = DoublyLinkedList::new();

        // Try to break an empty list
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);

        // Try to break a one item list
        list.prepend(10);
        assert_eq!(list.len(), 1);
        check_links(&list);
        assert_eq!(list.pop_front(), Some(10));
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
        check_links(&list);

        // Mess around
        list.prepend(10);
        list.prepend(20);
        list.prepend(30);
        assert_eq!(list.len(), 3);
        assert_eq!(list.pop_front(), Some(30));
        list.prepend(40);
        assert_eq!(list.pop_front(), Some(40));
        assert_eq!(list.pop_front(), Some(20));
        assert_eq!(list.pop_front(), Some(10));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
        check_links(&list);
    }

    #[test]
    fn test_basic_back() {
        let mut m = DoublyLinkedList::new();
        assert_eq!(m.pop_back(), None);
        m.append(1);
        assert_eq!(m.pop_back(), Some(1));
        check_links(&m);

        m.append(2);
        m.append(3);
        m.prepend(1);
        assert_eq!(m.len(), 3);
        check_links(&m);
        assert_eq!(m.front(), Some(&1));
        assert_eq!(m.back(), Some(&3));

        if let Some(x) = m.front_mut() {
            *x = 0;
        }
        if let Some(y) = m.back_mut() {
            *y = 4;
        }
        assert_eq!(m.pop_back(), Some(4));
        assert_eq!(m.pop_back(), Some(2));
        assert_eq!(m.pop_back(), Some(0));
        assert_eq!(m.pop_back(), None);
        check_links(&m);
    }

    #[test]
    fn test_insert_at() {
        let mut list = DoublyLinkedList::new();

        assert_eq!(list.insert_at(2, 0), Ok(()));
        assert_eq!(list.insert_at(5, 1), Ok(()));
        assert_eq!(list.insert_at(0, 0), Ok(()));
        assert_eq!(list.insert_at(1, 1), Ok(()));
        assert_eq!(list.insert_at(3, 3), Ok(()));
        assert_eq!(list.insert_at(4, 4), Ok(()));

        assert!(list.iter().eq([&0, &1, &2, &3, &4, &5]));
        check_links(&list);

        // appending after a middle insertion still lands at the end
        list.append(6);
        assert_eq!(list.back(), Some(&6));
        check_links(&list);
    }

    #[test]
    fn test_insert_at_out_of_bounds() {
        let mut list = list_from(&[1, 2, 3]);

        assert_eq!(
            list.insert_at(9, 4),
            Err(Error::IndexOutOfBounds { index: 4, len: 3 })
        );
        assert!(list.iter().eq([&1, &2, &3]));
        check_links(&list);
    }

    #[test]
    fn test_remove_at_endpoints() {
        let mut list = list_from(&[0, 1, 2, 3, 4]);

        assert_eq!(list.remove_at(4), Some(4));
        check_links(&list);
        assert_eq!(list.back(), Some(&3));

        assert_eq!(list.remove_at(0), Some(0));
        check_links(&list);
        assert_eq!(list.front(), Some(&1));

        assert_eq!(list.remove_at(1), Some(2));
        check_links(&list);

        assert_eq!(list.remove_at(2), None);
        assert_eq!(list.len(), 2);

        assert_eq!(list.remove_at(1), Some(3));
        assert_eq!(list.remove_at(0), Some(1));
        assert_eq!(list.remove_at(0), None);
        check_links(&list);

        // rebuilding from empty starts a fresh chain
        list.append(7);
        assert_eq!(list.front(), Some(&7));
        assert_eq!(list.back(), Some(&7));
        check_links(&list);
    }

    #[test]
    fn test_remove_by_value() {
        let mut list = list_from(&[1, 2, 3, 2, 1]);

        assert_eq!(list.remove(&9), None);
        assert_eq!(list.len(), 5);
        check_links(&list);

        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.front(), Some(&2));
        check_links(&list);

        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.back(), Some(&2));
        check_links(&list);

        assert_eq!(list.remove(&3), Some(3));
        assert!(list.iter().eq([&2, &2]));
        check_links(&list);

        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(list.remove(&2), Some(2));
        assert!(list.is_empty());
        check_links(&list);
    }

    #[test]
    fn test_get_from_both_ends() {
        let list: DoublyLinkedList<usize> = (0..9).collect();

        for i in 0..9 {
            assert_eq!(list.get(i), Some(&i));
        }
        assert_eq!(list.get(9), None);

        let mut list = list;
        if let Some(elem) = list.get_mut(7) {
            *elem = 70;
        }
        assert_eq!(list.get(7), Some(&70));
    }

    #[test]
    fn test_iterator_double_end() {
        let mut n = DoublyLinkedList::new();
        assert_eq!(n.iter().next(), None);
        n.prepend(4);
        n.prepend(5);
        n.prepend(6);
        let mut it = n.iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next(), Some(&6));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_iterator_mut_double_end() {
        let mut n = list_from(&[6, 5, 4]);
        let mut it = n.iter_mut();
        assert_eq!(it.next(), Some(&mut 6));
        assert_eq!(it.next_back(), Some(&mut 4));
        if let Some(elem) = it.next_back() {
            *elem = 50;
        }
        assert!(it.next().is_none());
        assert!(n.iter().eq([&6, &50, &4]));

        let owned: Vec<_> = n.into_iter().rev().collect();
        assert_eq!(owned, [4, 50, 6]);
    }

    #[test]
    fn test_eq_debug_hash() {
        let mut n: DoublyLinkedList<u8> = list_from(&[]);
        let mut m = list_from(&[]);
        assert!(n == m);
        n.prepend(1);
        assert!(n != m);
        m.append(1);
        assert!(n == m);

        let list: DoublyLinkedList<i32> = (0..4).collect();
        assert_eq!(format!("{list:?}"), "[0, 1, 2, 3]");
        assert!(list.contains(&3));

        let mut map = std::collections::HashMap::new();
        map.insert(list.clone(), "list");
        assert_eq!(map.get(&list), Some(&"list"));
    }

    #[test]
    fn test_macro_repeat() {
        let list = doubly![String::from("a"); 3];
        assert_eq!(list.len(), 3);
        check_links(&list);
    }

    #[test]
    fn test_cursor_move_peek() {
        let mut m: DoublyLinkedList<u32> = (1..=6).collect();
        let mut cursor = m.cursor_mut();
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&mut 1));
        assert_eq!(cursor.peek_next(), Some(&mut 2));
        assert_eq!(cursor.peek_prev(), None);
        assert_eq!(cursor.index(), Some(0));
        cursor.move_prev();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), Some(&mut 1));
        assert_eq!(cursor.peek_prev(), Some(&mut 6));
        assert_eq!(cursor.index(), None);
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&mut 6));
        assert_eq!(cursor.index(), Some(5));
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&mut 5));
        assert_eq!(cursor.index(), Some(4));
    }

    #[test]
    fn test_cursor_insert_remove() {
        let mut m: DoublyLinkedList<u32> = (1..=4).collect();

        let mut cursor = m.cursor_mut();
        // ghost: insert_after prepends, insert_before appends
        cursor.insert_after(0);
        cursor.insert_before(5);
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&mut 0));
        cursor.insert_before(10);
        assert_eq!(cursor.index(), Some(1));
        cursor.insert_after(11);
        check_links(&m);
        assert!(m.iter().eq([&10, &0, &11, &1, &2, &3, &4, &5]));

        let mut cursor = m.cursor_mut();
        assert_eq!(cursor.remove_current(), None);
        cursor.move_next();
        assert_eq!(cursor.remove_current(), Some(10));
        assert_eq!(cursor.index(), Some(0));
        assert_eq!(cursor.current(), Some(&mut 0));
        cursor.move_prev();
        cursor.move_prev();
        assert_eq!(cursor.remove_current(), Some(5));
        assert_eq!(cursor.index(), None);
        assert_eq!(cursor.current(), None);
        check_links(&m);
        assert!(m.iter().eq([&0, &11, &1, &2, &3, &4]));

        let mut one = list_from(&[1]);
        let mut cursor = one.cursor_mut();
        cursor.move_next();
        assert_eq!(cursor.remove_current(), Some(1));
        assert!(one.is_empty());
        check_links(&one);
    }

    #[test]
    fn test_send_sync() {
        fn is_send<T: Send>() {}
        fn is_sync<T: Sync>() {}

        is_send::<DoublyLinkedList<i32>>();
        is_sync::<DoublyLinkedList<i32>>();
        is_send::<Iter<'_, i32>>();
        is_sync::<IterMut<'_, i32>>();
    }
}
