//! Node-based sequential containers and a threshold search.
//!
//! The containers share one ownership model: the container owns the first
//! node and every node owns its successor, while back-references such as
//! `prev` and `tail` only observe. Lookups and removals report a missing
//! element as [`None`]; insertions at an invalid index are rejected with an
//! [`Error`].

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod collections;
pub mod error;

pub use error::{Error, Result};

/// Linked DSA Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{doubly, queue, singly, stack};

    #[doc(no_inline)]
    pub use super::collections::doubly_linked_list::DoublyLinkedList;
    #[doc(no_inline)]
    pub use super::collections::queue::Queue;
    #[doc(no_inline)]
    pub use super::collections::singly_linked_list::SinglyLinkedList;
    #[doc(no_inline)]
    pub use super::collections::stack::Stack;

    #[doc(no_inline)]
    pub use super::algorithms::threshold_search::*;

    #[doc(no_inline)]
    pub use super::error::Error;
}
