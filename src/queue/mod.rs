use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::{IntoIter, Iter, IterMut};

pub mod iterator;

mod algorithms;
mod text;

/// The `Queue` is a double-ended queue of owned values, backed by a cyclic
/// doubly-linked list anchored by a sentinel node.
///
/// Inserting and removing at either end take *O*(1) time. Counting the
/// elements takes *O*(*n*) time, by a full traversal of the ring.
///
/// The `Queue` owns its sentinel, and through it every element reachable by
/// following `next` until the ring wraps back around to the sentinel.
pub struct Queue<T> {
    sentinel: Box<Node<Erased>>,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) value: T,
}

/// The sentinel's payload slot. Zero-sized: the sentinel carries no value,
/// and is only ever read through its link prefix.
struct Erased;

// private methods
impl<T> Queue<T> {
    pub(crate) fn sentinel_node(&self) -> NonNull<Node<T>> {
        // The cast is valid because `Node` is `#[repr(C)]` with the links
        // first, and the sentinel's value slot is never read.
        NonNull::from(self.sentinel.as_ref()).cast()
    }
    pub(crate) fn head_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.next` is always valid (either the sentinel
        // itself, or the first element of the ring).
        NonNull::from(unsafe { self.sentinel_node().as_ref().next.as_ref() })
    }
    pub(crate) fn tail_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.prev` is always valid (either the sentinel
        // itself, or the last element of the ring).
        NonNull::from(unsafe { self.sentinel_node().as_ref().prev.as_ref() })
    }

    /// Detach a single node `node` from the ring, reclaiming it as a box,
    /// and re-link its neighbors to each other.
    ///
    /// It is unsafe because it does not check whether `node` is an element
    /// of this ring. Detaching the sentinel, or a node of another ring,
    /// makes the ring ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single detached node between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to this ring, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`). Violating either makes the ring
    /// ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }
}

impl<T> Queue<T> {
    /// Create an empty `Queue`.
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::Queue;
    /// let queue: Queue<u32> = Queue::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let sentinel = new_sentinel();
        let _marker = PhantomData;
        Self { sentinel, _marker }
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.is_empty());
    ///
    /// queue.push_front("foo");
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head_node() == self.sentinel_node()
    }

    /// Returns the number of elements in the `Queue`, by a full traversal
    /// of the ring.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.len(), 0);
    ///
    /// queue.push_front(2);
    /// queue.push_back(3);
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the head value, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.front(), None);
    ///
    /// queue.push_front(1);
    /// assert_eq!(queue.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so the head node is a live
        // element and carries a value.
        Some(unsafe { &self.head_node().as_ref().value })
    }

    /// Provides a reference to the tail value, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.back(), None);
    ///
    /// queue.push_back(1);
    /// assert_eq!(queue.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so the tail node is a live
        // element and carries a value.
        Some(unsafe { &self.tail_node().as_ref().value })
    }

    /// Adds an element at the head of the queue.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_front(2);
    /// assert_eq!(queue.front(), Some(&2));
    ///
    /// queue.push_front(1);
    /// assert_eq!(queue.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = Node::new_detached(value);
        // SAFETY: the sentinel and the head node are adjacent in any
        // well-formed ring, and `node` is freshly detached.
        unsafe { self.attach_node(self.sentinel_node(), self.head_node(), node) };
    }

    /// Adds an element at the tail of the queue.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back(1);
    /// queue.push_back(3);
    /// assert_eq!(queue.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let node = Node::new_detached(value);
        // SAFETY: the tail node and the sentinel are adjacent in any
        // well-formed ring, and `node` is freshly detached.
        unsafe { self.attach_node(self.tail_node(), self.sentinel_node(), node) };
    }

    /// Removes the head element and returns its value, or `None` if the
    /// queue is empty. Ownership of the value transfers to the caller.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.pop_front(), None);
    ///
    /// queue.push_front(1);
    /// queue.push_front(3);
    /// assert_eq!(queue.pop_front(), Some(3));
    /// assert_eq!(queue.pop_front(), Some(1));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let node = self.head_node();
        // SAFETY: the queue is not empty, so the head node is an element
        // of this ring.
        Some(unsafe { self.detach_node(node) }.into_value())
    }

    /// Removes the tail element and returns its value, or `None` if the
    /// queue is empty. Ownership of the value transfers to the caller.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.pop_back(), None);
    /// queue.push_back(1);
    /// queue.push_back(3);
    /// assert_eq!(queue.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let node = self.tail_node();
        // SAFETY: the queue is not empty, so the tail node is an element
        // of this ring.
        Some(unsafe { self.detach_node(node) }.into_value())
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_back(0);
    /// queue.push_back(1);
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with the given value. The links are dangling
    /// placeholders and must not be read before the node is attached.
    pub(crate) fn new_detached(value: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            value,
        })))
    }

    /// Consume the node box, releasing the node and returning the owned
    /// value. The value is released when the caller drops it, completing
    /// the node-then-value release order.
    pub(crate) fn into_value(self: Box<Self>) -> T {
        self.value
    }
}

/// Link `prev` and `next` to each other.
///
/// It is unsafe because both pointers must reference live nodes, and the
/// caller must restore the ring invariant before the mutation becomes
/// observable.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

fn new_sentinel() -> Box<Node<Erased>> {
    let mut sentinel = Box::new(Node {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        value: Erased,
    });
    let ptr = NonNull::from(sentinel.as_mut());
    sentinel.next = ptr;
    sentinel.prev = ptr;
    sentinel
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for Queue<T> {}

unsafe impl<T: Sync> Sync for Queue<T> {}

// Ensure that `Queue` and its read-only iterators are covariant in their
// type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: Queue<&'static str>) -> Queue<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> Queue<T> {
    /// Walk the whole ring, sentinel included, asserting the doubly-linked
    /// invariant at every node.
    pub(crate) fn check_ring(&self) {
        unsafe {
            let sentinel = self.sentinel_node();
            let mut node = sentinel;
            loop {
                let next = node.as_ref().next;
                assert_eq!(next.as_ref().prev, node);
                assert_eq!(node.as_ref().prev.as_ref().next, node);
                node = next;
                if node == sentinel {
                    break;
                }
            }
        }
    }

    /// Node addresses from head to tail, for node-identity assertions.
    pub(crate) fn node_ptrs(&self) -> Vec<NonNull<Node<T>>> {
        let sentinel = self.sentinel_node();
        let mut ptrs = Vec::new();
        let mut node = self.head_node();
        while node != sentinel {
            ptrs.push(node);
            node = unsafe { node.as_ref().next };
        }
        ptrs
    }
}
