use crate::queue::{connect, Node, Queue};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ptr::NonNull;

mod sort;

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: PartialOrd> PartialOrd for Queue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for Queue<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for Queue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for value in self {
            value.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> Queue<T> {
    /// Locate the middle element of a non-empty queue: the element at the
    /// lower-middle index ⌊(n - 1)/2⌋, counting from the head.
    ///
    /// Two walkers start at the head and tail and step inward together;
    /// they stop when they meet (odd length) or become adjacent (even
    /// length), leaving the forward walker on the middle.
    fn middle_node(&self) -> NonNull<Node<T>> {
        let mut forward = self.head_node();
        let mut backward = self.tail_node();
        // SAFETY: the queue is non-empty, and the walkers stop before
        // passing each other, so both stay on live elements.
        unsafe {
            while forward != backward && forward.as_ref().next != backward {
                forward = forward.as_ref().next;
                backward = backward.as_ref().prev;
            }
        }
        forward
    }

    /// Deletes the middle element, releasing it in place.
    ///
    /// The middle of a queue with `n` elements is the element at index
    /// ⌊(n - 1)/2⌋ from the head: index 2 of 6 elements, index 3 of 7.
    /// A single-element queue becomes empty.
    ///
    /// Returns `false` if the queue is empty, `true` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(0..6);
    /// assert!(queue.delete_middle());
    /// assert_eq!(queue, Queue::from_iter(vec![0, 1, 3, 4, 5]));
    /// ```
    pub fn delete_middle(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let middle = self.middle_node();
        // SAFETY: `middle_node` returns an element of this ring.
        unsafe { self.detach_node(middle) };
        true
    }

    /// Deletes every run of equal adjacent values entirely, leaving only
    /// the values that had no duplicate.
    ///
    /// The queue must already be sorted ascending; the precondition is the
    /// caller's responsibility and is not re-verified. An empty queue is a
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(vec!["a", "a", "b", "c", "c"]);
    /// queue.delete_duplicates();
    /// assert_eq!(queue, Queue::from_iter(vec!["b"]));
    /// ```
    pub fn delete_duplicates(&mut self)
    where
        T: PartialEq,
    {
        let end = self.sentinel_node();
        let mut current = self.head_node();
        let mut deleting = false;
        while current != end {
            // Lookahead is saved before any mutation, so deleting
            // `current` leaves the traversal intact.
            let next = unsafe { current.as_ref().next };
            let in_run =
                next != end && unsafe { current.as_ref().value == next.as_ref().value };
            if in_run || deleting {
                // SAFETY: `current` is a live element of this ring, and
                // its neighbors were read before the detach.
                unsafe { self.detach_node(current) };
            }
            deleting = in_run;
            current = next;
        }
    }

    /// Swaps every two adjacent elements by relinking, without touching
    /// the values: for each pair `(a, b)`, `a` is unlinked and re-attached
    /// right after `b`. An odd trailing element is left in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(vec!['a', 'b', 'c', 'd', 'e']);
    /// queue.swap_pairs();
    /// assert_eq!(queue, Queue::from_iter(vec!['b', 'a', 'd', 'c', 'e']));
    /// ```
    pub fn swap_pairs(&mut self) {
        let end = self.sentinel_node();
        let mut current = self.head_node();
        // SAFETY: `current` and `second` are live elements checked against
        // the sentinel; each relink step restores the ring invariant
        // before the next read.
        unsafe {
            while current != end && current.as_ref().next != end {
                let second = current.as_ref().next;
                let after = second.as_ref().next;
                // unlink `current`, then relink it right after `second`
                connect(current.as_ref().prev, second);
                connect(second, current);
                connect(current, after);
                current = after;
            }
        }
    }

    /// Reverses the queue by swapping the values of symmetric positions.
    ///
    /// The links are untouched: every node keeps its position in the ring
    /// and only the payloads move, so nothing is allocated or released.
    /// An empty queue is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(vec!['a', 'b', 'c', 'd']);
    /// queue.reverse();
    /// assert_eq!(queue, Queue::from_iter(vec!['d', 'c', 'b', 'a']));
    /// ```
    pub fn reverse(&mut self) {
        if self.is_empty() {
            return;
        }
        let mut forward = self.head_node();
        let mut backward = self.tail_node();
        while forward != backward {
            // SAFETY: `forward` and `backward` are distinct live elements,
            // so the two value borrows do not alias; only the value slots
            // are written.
            unsafe {
                mem::swap(&mut forward.as_mut().value, &mut backward.as_mut().value);
                forward = forward.as_ref().next;
                if forward == backward {
                    break;
                }
                backward = backward.as_ref().prev;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Queue;
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    #[test]
    fn delete_middle_small_sizes() {
        for n in &[0usize, 1, 2, 3, 6, 7] {
            let n = *n;
            let mut queue = Queue::from_iter(0..n);
            let deleted = queue.delete_middle();
            queue.check_ring();
            if n == 0 {
                assert!(!deleted);
                assert!(queue.is_empty());
            } else {
                let middle = (n - 1) / 2;
                assert!(deleted);
                assert_eq!(queue, Queue::from_iter((0..n).filter(|&i| i != middle)));
            }
        }
    }

    #[test]
    fn delete_middle_of_six() {
        let mut queue = Queue::from_iter(0..6);
        assert!(queue.delete_middle());
        assert_eq!(queue, Queue::from_iter(vec![0, 1, 3, 4, 5]));
    }

    #[test]
    fn delete_middle_until_empty() {
        let mut queue = Queue::from_iter(0..5);
        for remaining in (0..5).rev() {
            assert!(queue.delete_middle());
            assert_eq!(queue.len(), remaining);
            queue.check_ring();
        }
        assert!(!queue.delete_middle());
    }

    #[test]
    fn delete_duplicates_keeps_only_unique_values() {
        let mut queue = Queue::from_iter(vec!["a", "a", "b", "c", "c"]);
        queue.delete_duplicates();
        queue.check_ring();
        assert_eq!(queue, Queue::from_iter(vec!["b"]));
    }

    #[test]
    fn delete_duplicates_without_duplicates_is_identity() {
        let mut queue = Queue::from_iter(vec!["a", "b", "c"]);
        queue.delete_duplicates();
        assert_eq!(queue, Queue::from_iter(vec!["a", "b", "c"]));
    }

    #[test]
    fn delete_duplicates_on_empty_is_noop() {
        let mut queue: Queue<i32> = Queue::new();
        queue.delete_duplicates();
        assert!(queue.is_empty());
        queue.check_ring();
    }

    #[test]
    fn delete_duplicates_can_empty_the_queue() {
        let mut queue = Queue::from_iter(vec![1, 1, 1, 2, 2]);
        queue.delete_duplicates();
        assert!(queue.is_empty());
        queue.check_ring();
    }

    #[test]
    fn swap_pairs_even_and_odd() {
        let mut queue = Queue::from_iter(vec!['a', 'b', 'c', 'd', 'e']);
        queue.swap_pairs();
        queue.check_ring();
        assert_eq!(queue, Queue::from_iter(vec!['b', 'a', 'd', 'c', 'e']));

        let mut queue = Queue::from_iter(vec![1, 2, 3, 4]);
        queue.swap_pairs();
        queue.check_ring();
        assert_eq!(queue, Queue::from_iter(vec![2, 1, 4, 3]));
    }

    #[test]
    fn swap_pairs_trivial_cases() {
        let mut queue: Queue<i32> = Queue::new();
        queue.swap_pairs();
        assert!(queue.is_empty());

        let mut queue = Queue::from_iter(Some(1));
        queue.swap_pairs();
        assert_eq!(queue, Queue::from_iter(Some(1)));
        queue.check_ring();
    }

    #[test]
    fn swap_pairs_moves_nodes_not_values() {
        let mut queue = Queue::from_iter(0..4);
        let before = queue.node_ptrs();
        queue.swap_pairs();
        let after = queue.node_ptrs();
        assert_eq!(after, vec![before[1], before[0], before[3], before[2]]);
    }

    #[test]
    fn reverse_moves_values_not_nodes() {
        let mut queue = Queue::from_iter(vec!['a', 'b', 'c', 'd']);
        let before = queue.node_ptrs();
        queue.reverse();
        queue.check_ring();
        assert_eq!(queue, Queue::from_iter(vec!['d', 'c', 'b', 'a']));
        // node identities per position are unchanged, only payloads moved
        assert_eq!(queue.node_ptrs(), before);
    }

    #[test]
    fn reverse_odd_length_and_trivial_cases() {
        let mut queue = Queue::from_iter(0..5);
        queue.reverse();
        assert_eq!(queue, Queue::from_iter((0..5).rev()));

        let mut queue: Queue<i32> = Queue::new();
        queue.reverse();
        assert!(queue.is_empty());

        let mut queue = Queue::from_iter(Some(7));
        queue.reverse();
        assert_eq!(queue, Queue::from_iter(Some(7)));
    }

    proptest! {
        #[test]
        fn ring_invariant_under_random_ops(ops in prop::collection::vec(0u8..4, 0..64)) {
            let mut queue = Queue::new();
            let mut model = VecDeque::new();
            for (i, op) in ops.into_iter().enumerate() {
                match op {
                    0 => {
                        queue.push_front(i);
                        model.push_front(i);
                    }
                    1 => {
                        queue.push_back(i);
                        model.push_back(i);
                    }
                    2 => prop_assert_eq!(queue.pop_front(), model.pop_front()),
                    _ => prop_assert_eq!(queue.pop_back(), model.pop_back()),
                }
                queue.check_ring();
                prop_assert_eq!(queue.len(), model.len());
            }
            prop_assert!(queue.iter().eq(model.iter()));
        }

        #[test]
        fn reverse_twice_is_identity(values in prop::collection::vec("[a-c]{0,3}", 0..16)) {
            let mut queue = Queue::from_iter(values.clone());
            queue.reverse();
            queue.check_ring();
            queue.reverse();
            prop_assert_eq!(queue, Queue::from_iter(values));
        }

        #[test]
        fn delete_duplicates_matches_model(mut values in prop::collection::vec(0u8..6, 0..24)) {
            values.sort();
            let unique: Vec<u8> = values
                .iter()
                .copied()
                .filter(|v| values.iter().filter(|w| *w == v).count() == 1)
                .collect();
            let mut queue = Queue::from_iter(values);
            queue.delete_duplicates();
            queue.check_ring();
            prop_assert_eq!(queue, Queue::from_iter(unique));
        }
    }
}
