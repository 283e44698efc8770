//! A safe-linkage experiment: the same deque shape as [`crate::Queue`],
//! built without raw pointers.
//!
//! Each link owns *half* of its target node via [`StaticRc`]; joining the
//! forward and backward halves recovers the full box on removal. The
//! backward half is never used to reach a node on its own, so it plays the
//! part of the non-owning position marker that `prev` plays in the raw
//! ring, while the forward chain (plus the deque's end slots) carries true
//! ownership. [`GhostCell`] provides the interior mutability, gated by a
//! branded token instead of a runtime borrow check.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct Deque<'id, T> {
    ends: [Option<NodePtr<'id, T>>; 2],
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    value: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    const NEXT: usize = 0;
    const PREV: usize = 1;
    fn next(&self) -> Option<&NodePtr<'id, T>> {
        self.links[Self::NEXT].as_ref()
    }
    fn new(value: T) -> Self {
        let links = [None, None];
        Self { value, links }
    }
}

impl<'id, T> Default for Deque<'id, T> {
    fn default() -> Self {
        let ends = [None, None];
        Self { ends }
    }
}

impl<'id, T> Deque<'id, T> {
    const HEAD: usize = 0;
    const TAIL: usize = 1;

    fn head(&self) -> Option<&NodePtr<'id, T>> {
        self.ends[Self::HEAD].as_ref()
    }
    fn push_at(&mut self, side: usize, value: T, token: &mut GhostToken<'id>) {
        let oppo = 1 - side;
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.ends[side].take() {
            Some(this_side) => {
                this_side.deref().borrow_mut(token).links[oppo] = Some(left);
                right.deref().borrow_mut(token).links[side] = Some(this_side);
            }
            None => self.ends[oppo] = Some(left),
        }
        self.ends[side] = Some(right);
    }
    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let right = self.ends[side].take()?;
        let left = match right.deref().borrow_mut(token).links[side].take() {
            Some(this_side) => {
                let left = this_side.deref().borrow_mut(token).links[oppo]
                    .take()
                    .unwrap();
                self.ends[side] = Some(this_side);
                left
            }
            None => self.ends[oppo].take().unwrap(),
        };
        Some(Full::into_box(Full::join(left, right)).into_inner().value)
    }
}

impl<'id, T> Deque<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn is_empty(&self) -> bool {
        self.head().is_none()
    }
    /// Element count by forward traversal, borrowing each node through
    /// the token.
    pub fn len(&self, token: &GhostToken<'id>) -> usize {
        let mut count = 0;
        let mut cursor = self.head();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.deref().borrow(token).next();
        }
        count
    }
    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.head().map(|node| &node.deref().borrow(token).value)
    }
    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::TAIL, value, token);
    }
    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::TAIL, token)
    }
    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::HEAD, value, token);
    }
    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::HEAD, token)
    }
}
