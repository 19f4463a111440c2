//! Collection Types.

pub mod doubly_linked_list;
pub mod queue;
pub mod singly_linked_list;
pub mod stack;

#[doc(no_inline)]
pub use doubly_linked_list::DoublyLinkedList;
#[doc(no_inline)]
pub use queue::Queue;
#[doc(no_inline)]
pub use singly_linked_list::SinglyLinkedList;
#[doc(no_inline)]
pub use stack::Stack;
