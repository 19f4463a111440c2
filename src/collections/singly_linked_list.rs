//! A [singly-linked list] with owned nodes.
//!
//! Each node exclusively owns the node after it and the list owns its head,
//! so dropping the list releases the whole chain along a single owner path.
//! No tail reference is kept: appending walks the chain.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use std::fmt;

use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use tracing::debug;

use crate::error::{Error, Result};

/// Creates a `SinglyLinkedList` containing the arguments, in order.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut list = singly![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_front(), Some(1));
/// assert_eq!(list.pop_front(), Some(2));
/// assert_eq!(list.pop_front(), Some(3));
/// ```
#[macro_export]
macro_rules! singly {
    () => {
        $crate::collections::singly_linked_list::SinglyLinkedList::new()
    };
    ($($elem:expr)=>+) => {{
        let mut singly = $crate::collections::singly_linked_list::SinglyLinkedList::new();
        singly.extend([$($elem),+]);
        singly
    }};
}

type Link<T> = Option<Box<Node<T>>>;

/// A [singly-linked list] with owned nodes.
///
/// [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list
pub struct SinglyLinkedList<T> {
    /// Owning link to the first node.
    head: Link<T>,
    /// Number of nodes reachable from `head`.
    len: usize,
}

#[derive(Debug)]
struct Node<T> {
    /// Owning link to the next node, `None` at the end of the chain.
    next: Link<T>,
    elem: T,
}

/// An iterator that moves out of a `SinglyLinkedList<T>`.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

/// An iterator that borrows a `SinglyLinkedList<T>` immutably.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    len: usize,
}

/// An iterator that borrows a `SinglyLinkedList<T>` mutably.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty `SinglyLinkedList`.
    ///
    /// The list will not allocate until elements are inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns an immutable reference to the first element of the list, or
    /// [`None`] if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.elem)
    }

    /// Returns a mutable reference to the first element of the list, or
    /// [`None`] if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.elem)
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The new node takes ownership of the old head and
    /// becomes the head itself, regardless of the number of nodes within the
    /// list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.prepend(3);
    /// list.prepend(4);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(0), Some(&4));
    /// assert_eq!(list.get(1), Some(&3));
    /// ```
    pub fn prepend(&mut self, elem: T) {
        let node = Box::new(Node {
            next: self.head.take(),
            elem,
        });

        self.head = Some(node);
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. No `tail` reference is maintained, so the list is
    /// traversed until reaching the node without a successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append(3);
    /// list.append(4);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(0), Some(&3));
    /// assert_eq!(list.get(1), Some(&4));
    /// ```
    pub fn append(&mut self, elem: T) {
        *self.last_link() = Some(Box::new(Node { next: None, elem }));
        self.len += 1;
    }

    /// Inserts an element so that it ends up at position `idx`.
    ///
    /// Valid indices are `0..=len`; inserting at `len` is the same as
    /// [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `idx > len`. The list is left
    /// untouched in that case.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed to the node before
    /// `idx`. Splicing itself is a *constant* time operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = singly![4 => 2 => 1];
    ///
    /// list.insert_at(3, 1).unwrap();
    /// assert_eq!(list.len(), 4);
    /// assert!(list.iter().eq([&4, &3, &2, &1]));
    ///
    /// assert!(list.insert_at(9, 10).is_err());
    /// assert_eq!(list.len(), 4);
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
            return Ok(());
        }

        // `idx` is in `1..=len`, so the link owned by the node at `idx - 1`
        // always exists.
        let link = self.link_at(idx);
        let next = link.take();
        *link = Some(Box::new(Node { next, elem }));

        self.len += 1;

        Ok(())
    }

    /// Removes the first element from the list and returns it, or [`None`] if
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
    /// let mut list = singly![5 => 4];
    ///
    /// assert_eq!(list.pop_front(), Some(5));
    /// assert_eq!(list.pop_front(), Some(4));
    /// assert_eq!(list.pop_front(), None);
    /// assert_eq!(list.len(), 0);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { next, elem } = *node;
            self.head = next;
            self.len -= 1;

            elem
        })
    }

    /// Removes the element at position `idx` and returns it, or [`None`] if
    /// `idx` is out of bounds.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time for the head, otherwise *O*(*n*) time to reach the
    /// predecessor of `idx`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = singly![4 => 3 => 2 => 1];
    ///
    /// assert_eq!(list.remove_at(1), Some(3));
    /// assert_eq!(list.remove_at(2), Some(1));
    /// assert_eq!(list.remove_at(2), None);
    /// assert_eq!(list.remove_at(0), Some(4));
    /// assert_eq!(list.remove_at(0), Some(2));
    ///
    /// assert_eq!(list.remove_at(0), None);
    /// assert_eq!(list.len(), 0);
    /// ```
    pub fn remove_at(&mut self, idx: usize) -> Option<T> {
        if idx >= self.len {
            return None;
        } else if idx == 0 {
            return self.pop_front();
        }

        let elem = Self::unlink(self.link_at(idx))?;
        self.len -= 1;

        Some(elem)
    }

    /// Returns an immutable reference to the element at position `idx`, or
    /// [`None`] if it is out of bounds.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = singly![4 => 3 => 2];
    ///
    /// assert_eq!(list.get(0), Some(&4));
    /// assert_eq!(list.get(2), Some(&2));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, idx: usize) -> Option<&T> {
        if idx >= self.len {
            return None;
        }

        self.iter().nth(idx)
    }

    /// Returns a mutable reference to the element at position `idx`, or
    /// [`None`] if it is out of bounds.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        if idx >= self.len {
            return None;
        }

        self.iter_mut().nth(idx)
    }

    /// Clears the list, removing all nodes.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an immutable iterator over the list, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            len: self.len,
        }
    }

    /// Returns a mutable iterator over the list, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            len: self.len,
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

    /// Returns the link that owns the node at `idx`, which is the `next` of
    /// the node at `idx - 1` (or `head` for 0).
    ///
    /// Stops early at the end of the chain, so any `idx >= len` yields the
    /// empty link after the last node.
    fn link_at(&mut self, idx: usize) -> &mut Link<T> {
        let mut link = &mut self.head;

        for _ in 0..idx {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }

        link
    }

    /// Returns the empty link after the last node.
    fn last_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;

        while let Some(node) = link {
            link = &mut node.next;
        }

        link
    }

    /// Splices the node owned by `link` out of the chain, handing its
    /// successor to `link`. The caller adjusts `len`.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        let node = link.take()?;
        let Node { next, elem } = *node;
        *link = next;

        Some(elem)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Removes the first element equal to `key` and returns it, or [`None`]
    /// if no such element exists.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, keeping hold of
    /// the link into the current node so its predecessor can be repointed.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = singly![4 => 2 => 1 => 2];
    /// assert_eq!(list.remove(&0), None);
    /// assert_eq!(list.len(), 4);
    ///
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert!(list.iter().eq([&4, &1, &2]));
    ///
    /// assert_eq!(list.remove(&4), Some(4));
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&1), Some(1));
    /// assert_eq!(list.remove(&1), None);
    /// assert!(list.is_empty());
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let mut link = &mut self.head;

        while link.as_ref().is_some_and(|node| node.elem != *key) {
            link = &mut link.as_mut()?.next;
        }

        let elem = Self::unlink(link)?;
        self.len -= 1;

        Some(elem)
    }

    /// Returns `true` if the list contains an element equal to `key`.
    pub fn contains(&self, key: &T) -> bool {
        self.iter().any(|elem| elem == key)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so dropping a long chain never recurses
        // through `Box<Node<T>>` destructors.
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut link = self.last_link();

        for elem in iter {
            let node = link.insert(Box::new(Node { next: None, elem }));
            link = &mut node.next;
            added += 1;
        }

        self.len += added;
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
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

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
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

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.len -= 1;
            &mut node.elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

#[cfg(test)]
mod test {
    use super::*;

    /// Walks the chain and checks it agrees with `len`.
    fn check_chain<T>(list: &SinglyLinkedList<T>) {
        let mut count = 0;
        let mut curr = list.head.as_deref();

        while let Some(node) = curr {
            count += 1;
            assert!(count <= list.len, "chain is longer than `len`");
            curr = node.next.as_deref();
        }

        assert_eq!(count, list.len);
        assert_eq!(list.head.is_none(), list.len == 0);
    }

    #[test]
    fn test_basic_front() {
        let mut list = SinglyLinkedList::new();

        // Try to break an empty list
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);

        // Try to break a one item list
        list.prepend(10);
        assert_eq!(list.len(), 1);
        assert_eq!(list.pop_front(), Some(10));
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);

        // Mess around
        list.prepend(10);
        list.prepend(20);
        list.append(30);
        assert_eq!(list.len(), 3);
        assert_eq!(list.pop_front(), Some(20));
        list.prepend(40);
        assert_eq!(list.len(), 3);
        assert_eq!(list.pop_front(), Some(40));
        assert_eq!(list.pop_front(), Some(10));
        assert_eq!(list.pop_front(), Some(30));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
        check_chain(&list);
    }

    #[test]
    fn test_append_prepend_order() {
        let mut list = SinglyLinkedList::new();
        list.append(2);
        list.prepend(1);
        list.append(3);
        list.prepend(0);

        assert_eq!(list.len(), 4);
        for i in 0..4 {
            assert_eq!(list.get(i), Some(&(i as i32)));
        }
        assert_eq!(list.get(4), None);
        check_chain(&list);
    }

    #[test]
    fn test_insert_at_boundaries() {
        let mut list = SinglyLinkedList::new();

        assert_eq!(list.insert_at(1, 0), Ok(()));
        assert_eq!(list.insert_at(3, 1), Ok(()));
        assert_eq!(list.insert_at(2, 1), Ok(()));
        assert_eq!(list.insert_at(0, 0), Ok(()));
        assert_eq!(list.insert_at(4, list.len()), Ok(()));

        assert!(list.iter().eq([&0, &1, &2, &3, &4]));
        check_chain(&list);
    }

    #[test]
    fn test_insert_at_out_of_bounds() {
        let mut list = singly![1 => 2];

        assert_eq!(
            list.insert_at(9, 3),
            Err(Error::IndexOutOfBounds { index: 3, len: 2 })
        );
        assert!(list.iter().eq([&1, &2]));

        let mut empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(empty.insert_at(9, 1).is_err());
        assert!(empty.is_empty());
        check_chain(&empty);
    }

    #[test]
    fn test_remove_at() {
        let mut list = singly![0 => 1 => 2 => 3 => 4];

        // tail
        assert_eq!(list.remove_at(4), Some(4));
        // middle
        assert_eq!(list.remove_at(2), Some(2));
        // head
        assert_eq!(list.remove_at(0), Some(0));
        assert!(list.iter().eq([&1, &3]));
        check_chain(&list);

        assert_eq!(list.remove_at(2), None);
        assert_eq!(list.len(), 2);

        // appending after removing the last node reattaches at the new end
        list.append(5);
        assert!(list.iter().eq([&1, &3, &5]));
        check_chain(&list);
    }

    #[test]
    fn test_remove_by_value() {
        let mut list = singly![1 => 2 => 3 => 2];

        assert_eq!(list.remove(&7), None);
        assert_eq!(list.len(), 4);

        // first match in traversal order
        assert_eq!(list.remove(&2), Some(2));
        assert!(list.iter().eq([&1, &3, &2]));

        // tail
        assert_eq!(list.remove(&2), Some(2));
        assert!(list.iter().eq([&1, &3]));

        // head
        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.remove(&3), Some(3));
        assert_eq!(list.remove(&3), None);
        assert!(list.is_empty());
        check_chain(&list);
    }

    #[test]
    fn test_get_mut() {
        let mut list = singly![1 => 2 => 3];

        if let Some(elem) = list.get_mut(1) {
            *elem = 20;
        }
        for elem in &mut list {
            *elem += 1;
        }

        assert!(list.iter().eq([&2, &21, &4]));
        assert_eq!(list.get_mut(3), None);
        assert_eq!(list.front_mut(), Some(&mut 2));
    }

    #[test]
    fn test_extend_after_existing() {
        let mut list = singly![1 => 2];
        list.extend([3, 4]);

        assert_eq!(list.len(), 4);
        assert!(list.iter().eq([&1, &2, &3, &4]));
        check_chain(&list);

        let collected: SinglyLinkedList<_> = list.clone().into_iter().collect();
        assert_eq!(collected, list);
    }

    #[test]
    fn test_iterators() {
        let list: SinglyLinkedList<i32> = (0..5).collect();

        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (5, Some(5)));
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.len(), 4);

        let owned: Vec<_> = list.into_iter().collect();
        assert_eq!(owned, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_debug_eq_hash() {
        let list = singly![1 => 2 => 3];
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        assert_eq!(list, list.clone());
        assert_ne!(list, singly![1 => 2]);
        assert!(list.contains(&3));
        assert!(!list.contains(&4));

        let mut set = std::collections::HashSet::new();
        set.insert(list.clone());
        assert!(set.contains(&list));
    }

    #[test]
    fn test_drop_long_chain() {
        let list: SinglyLinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
