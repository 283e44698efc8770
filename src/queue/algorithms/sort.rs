use crate::queue::{connect, Node, Queue};
use std::ptr::NonNull;

impl<T: Ord> Queue<T> {
    /// Sorts the queue into ascending value order.
    ///
    /// This sort is stable (i.e., does not reorder equal values) and runs
    /// in *O*(*n* \* log(*n*)) time. Sorting an already-sorted queue is a
    /// no-op in effect, and an empty or single-element queue is untouched.
    ///
    /// # Current Implementation
    ///
    /// A merge sort over the ring reinterpreted as a singly-linked chain:
    /// the ring is opened into a forward-only chain, split recursively
    /// at the midpoint found by slow/fast traversal, merged head-to-head
    /// (`<=` keeps the left side, which is what makes the sort stable),
    /// and finally walked once to rebuild the backward links and re-close
    /// the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(vec!["banana", "apple", "cherry"]);
    /// queue.sort();
    /// assert_eq!(queue, Queue::from_iter(vec!["apple", "banana", "cherry"]));
    /// ```
    pub fn sort(&mut self) {
        if self.is_empty() {
            return;
        }
        let sorted = Chain::open(self).sort();
        sorted.close(self);
    }
}

/// A forward-only run of nodes carved out of a ring.
///
/// The sentinel acts as the chain terminator the way a null pointer
/// terminates a singly-linked list. While a chain is open, the `prev`
/// links of its nodes are stale and must not be read; a chain is therefore
/// a distinct type from [`Queue`] and only [`Chain::close`] restores the
/// ring invariant.
struct Chain<T> {
    head: NonNull<Node<T>>,
    term: NonNull<Node<T>>,
}

impl<T> Chain<T> {
    /// Open the ring of a non-empty queue into a chain.
    ///
    /// The tail's forward link already points at the sentinel, so the
    /// forward traversal is terminated without touching any link.
    fn open(queue: &mut Queue<T>) -> Self {
        Self {
            head: queue.head_node(),
            term: queue.sentinel_node(),
        }
    }

    /// Walk the chain once, rebuilding every backward link and re-closing
    /// the ring of `queue` through its sentinel.
    fn close(self, queue: &mut Queue<T>) {
        debug_assert_eq!(queue.sentinel_node(), self.term);
        // SAFETY: the chain holds every element of the ring exactly once
        // and is terminated by the sentinel, so connecting each node to
        // its predecessor and finally back to the sentinel restores a
        // well-formed ring.
        unsafe {
            let mut prev = self.term;
            let mut current = self.head;
            while current != self.term {
                let next = current.as_ref().next;
                connect(prev, current);
                prev = current;
                current = next;
            }
            connect(prev, self.term);
        }
    }
}

impl<T: Ord> Chain<T> {
    /// Sort the chain, returning it with its new head.
    fn sort(self) -> Self {
        let Chain { head, term } = self;
        // SAFETY: `head..term` is a well-terminated chain.
        let head = unsafe { sort_chain(head, term) };
        Chain { head, term }
    }
}

/// Sort the chain `head..term` recursively, returning its new head.
///
/// Base case: a chain of zero or one node is returned unchanged.
unsafe fn sort_chain<T: Ord>(
    head: NonNull<Node<T>>,
    term: NonNull<Node<T>>,
) -> NonNull<Node<T>> {
    if head == term || head.as_ref().next == term {
        return head;
    }

    // Slow/fast midpoint: `fast` starts one node ahead and advances two
    // steps per iteration, leaving `slow` on the last node of the left
    // half when `fast` runs off the end.
    let mut slow = head;
    let mut fast = head.as_ref().next;
    while fast != term && fast.as_ref().next != term {
        slow = slow.as_ref().next;
        fast = {
            let step = fast.as_ref().next;
            step.as_ref().next
        };
    }
    let right = slow.as_ref().next;
    // terminate the left half
    slow.as_mut().next = term;

    let left = sort_chain(head, term);
    let right = sort_chain(right, term);
    merge(left, right, term)
}

/// Merge two sorted, non-empty chains into one, returning its head.
///
/// On equal values the left node is appended first, preserving the
/// original relative order of equal elements. When one side is exhausted,
/// the remainder of the other is spliced onto the result tail.
unsafe fn merge<T: Ord>(
    mut left: NonNull<Node<T>>,
    mut right: NonNull<Node<T>>,
    term: NonNull<Node<T>>,
) -> NonNull<Node<T>> {
    let head;
    if right.as_ref().value < left.as_ref().value {
        head = right;
        right = right.as_ref().next;
    } else {
        head = left;
        left = left.as_ref().next;
    }
    let mut tail = head;
    loop {
        if left == term {
            tail.as_mut().next = right;
            break;
        }
        if right == term {
            tail.as_mut().next = left;
            break;
        }
        if right.as_ref().value < left.as_ref().value {
            tail.as_mut().next = right;
            tail = right;
            right = right.as_ref().next;
        } else {
            tail.as_mut().next = left;
            tail = left;
            left = left.as_ref().next;
        }
    }
    head
}
