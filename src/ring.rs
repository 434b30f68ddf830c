//! A circular doubly-linked list threaded through arena slots.
//!
//! The ring stores nothing but the index of its head. Links live inside the
//! nodes themselves (see [`Linked`]), so the same ring type serves vertices and
//! edges. An empty ring has no head; a ring of one node links that node to
//! itself.

use std::marker::PhantomData;

use tracing::warn;

use crate::{
    arena::{Arena, Index},
    error::RingError,
};

/// The `prev`/`next` pair embedded in every ring node.
/// Both are `None` while the node is outside of any ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Links {
    prev: Option<Index>,
    next: Option<Index>,
}

impl Links {
    pub fn is_linked(&self) -> bool {
        self.prev.is_some() || self.next.is_some()
    }

    pub fn prev(&self) -> Option<Index> {
        self.prev
    }

    pub fn next(&self) -> Option<Index> {
        self.next
    }
}

/// A value that can be threaded into a [`Ring`].
pub trait Linked {
    fn links(&self) -> &Links;
    fn links_mut(&mut self) -> &mut Links;
}

#[derive(Debug)]
pub struct Ring<T> {
    head: Option<Index>,
    _node: PhantomData<fn() -> T>,
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self {
            head: None,
            _node: PhantomData,
        }
    }
}

impl<T: Linked> Ring<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head(&self) -> Option<Index> {
        self.head
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `node` at the logical end of the ring, right before the head.
    pub fn append(&mut self, arena: &mut Arena<T>, node: Index) -> Result<(), RingError> {
        if links(arena, node)?.is_linked() {
            warn!(%node, "refusing to append a node that is still linked");
            return Err(RingError::AlreadyLinked { node });
        }

        let Some(head) = self.head else {
            *links_mut(arena, node)? = Links {
                prev: Some(node),
                next: Some(node),
            };
            self.head = Some(node);
            return Ok(());
        };

        let tail = links(arena, head)?
            .prev
            .ok_or(RingError::Broken { node: head })?;

        *links_mut(arena, node)? = Links {
            prev: Some(tail),
            next: Some(head),
        };
        links_mut(arena, tail)?.next = Some(node);
        links_mut(arena, head)?.prev = Some(node);

        Ok(())
    }

    /// Unlinks `node` without releasing it from the arena.
    ///
    /// Membership is checked by walking the ring, which makes this O(n).
    pub fn remove(&mut self, arena: &mut Arena<T>, node: Index) -> Result<(), RingError> {
        let Some(head) = self.head else {
            warn!(%node, "refusing to remove from an empty ring");
            return Err(RingError::Empty { node });
        };

        if !self.contains(arena, node) {
            warn!(%node, "refusing to remove a node outside of the ring");
            return Err(RingError::NotMember { node });
        }

        let Links { prev, next } = *links(arena, node)?;
        let prev = prev.ok_or(RingError::Broken { node })?;
        let next = next.ok_or(RingError::Broken { node })?;

        if next == node {
            self.head = None;
        } else {
            if head == node {
                self.head = Some(next);
            }
            links_mut(arena, prev)?.next = Some(next);
            links_mut(arena, next)?.prev = Some(prev);
        }

        *links_mut(arena, node)? = Links::default();
        Ok(())
    }

    /// Counts the members by walking the ring.
    pub fn len(&self, arena: &Arena<T>) -> usize {
        self.iter(arena).count()
    }

    pub fn contains(&self, arena: &Arena<T>, node: Index) -> bool {
        self.iter(arena).any(|member| member == node)
    }

    /// Iterates over the members in ring order, starting at the head.
    pub fn iter<'a>(&self, arena: &'a Arena<T>) -> Iter<'a, T> {
        Iter {
            arena,
            start: self.head,
            current: self.head,
        }
    }
}

pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    start: Option<Index>,
    current: Option<Index>,
}

impl<'a, T: Linked> Iterator for Iter<'a, T> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let next = self
            .arena
            .get(current)
            .and_then(|node| node.links().next);

        self.current = next.filter(|next| Some(*next) != self.start);
        Some(current)
    }
}

fn links<T: Linked>(arena: &Arena<T>, node: Index) -> Result<&Links, RingError> {
    arena
        .get(node)
        .map(Linked::links)
        .ok_or(RingError::Stale { node })
}

fn links_mut<T: Linked>(arena: &mut Arena<T>, node: Index) -> Result<&mut Links, RingError> {
    arena
        .get_mut(node)
        .map(Linked::links_mut)
        .ok_or(RingError::Stale { node })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct Node {
        links: Links,
        value: u32,
    }

    impl Linked for Node {
        fn links(&self) -> &Links {
            &self.links
        }

        fn links_mut(&mut self) -> &mut Links {
            &mut self.links
        }
    }

    fn node(arena: &mut Arena<Node>, value: u32) -> Index {
        arena.insert(Node {
            links: Links::default(),
            value,
        })
    }

    fn values(ring: &Ring<Node>, arena: &Arena<Node>) -> Vec<u32> {
        ring.iter(arena)
            .map(|index| arena.get(index).unwrap().value)
            .collect()
    }

    /// Every member must agree with both of its neighbours.
    fn assert_well_linked(ring: &Ring<Node>, arena: &Arena<Node>) {
        for index in ring.iter(arena) {
            let links = arena.get(index).unwrap().links;
            let prev = links.prev.unwrap();
            let next = links.next.unwrap();
            assert_eq!(arena.get(next).unwrap().links.prev, Some(index));
            assert_eq!(arena.get(prev).unwrap().links.next, Some(index));
        }
    }

    #[test]
    fn empty() {
        let arena = Arena::<Node>::new();
        let ring = Ring::<Node>::new();
        assert!(ring.is_empty());
        assert_eq!(ring.len(&arena), 0);
        assert_eq!(ring.head(), None);
    }

    #[test]
    fn single_node_points_to_itself() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let a = node(&mut arena, 1);
        ring.append(&mut arena, a).unwrap();

        let links = arena.get(a).unwrap().links;
        assert_eq!(links.prev(), Some(a));
        assert_eq!(links.next(), Some(a));
        assert_eq!(ring.head(), Some(a));
        assert_eq!(ring.len(&arena), 1);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        for value in 1..=4 {
            let index = node(&mut arena, value);
            ring.append(&mut arena, index).unwrap();
        }

        assert_eq!(values(&ring, &arena), vec![1, 2, 3, 4]);
        assert_well_linked(&ring, &arena);
    }

    #[test]
    fn append_rejects_linked_node() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let mut other = Ring::new();
        let a = node(&mut arena, 1);
        let b = node(&mut arena, 2);
        ring.append(&mut arena, a).unwrap();
        ring.append(&mut arena, b).unwrap();

        assert_eq!(
            other.append(&mut arena, a),
            Err(RingError::AlreadyLinked { node: a })
        );
        assert!(other.is_empty());
        assert_eq!(values(&ring, &arena), vec![1, 2]);
    }

    #[test]
    fn remove_head_advances_head() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let a = node(&mut arena, 1);
        let b = node(&mut arena, 2);
        let c = node(&mut arena, 3);
        for index in [a, b, c] {
            ring.append(&mut arena, index).unwrap();
        }

        ring.remove(&mut arena, a).unwrap();
        assert_eq!(ring.head(), Some(b));
        assert_eq!(values(&ring, &arena), vec![2, 3]);
        assert_well_linked(&ring, &arena);
        assert!(!arena.get(a).unwrap().links.is_linked());
    }

    #[test]
    fn remove_middle_and_tail() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let indices: Vec<_> = (1..=5).map(|value| node(&mut arena, value)).collect();
        for &index in &indices {
            ring.append(&mut arena, index).unwrap();
        }

        ring.remove(&mut arena, indices[2]).unwrap();
        ring.remove(&mut arena, indices[4]).unwrap();
        assert_eq!(values(&ring, &arena), vec![1, 2, 4]);
        assert_well_linked(&ring, &arena);
    }

    #[test]
    fn remove_sole_member_empties_ring() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let a = node(&mut arena, 1);
        ring.append(&mut arena, a).unwrap();
        ring.remove(&mut arena, a).unwrap();

        assert!(ring.is_empty());
        assert_eq!(ring.len(&arena), 0);
    }

    #[test]
    fn remove_from_empty_ring_fails() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let a = node(&mut arena, 1);
        assert_eq!(ring.remove(&mut arena, a), Err(RingError::Empty { node: a }));
    }

    #[test]
    fn remove_non_member_fails_without_mutation() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let mut other = Ring::new();
        let a = node(&mut arena, 1);
        let b = node(&mut arena, 2);
        ring.append(&mut arena, a).unwrap();
        other.append(&mut arena, b).unwrap();

        assert_eq!(
            ring.remove(&mut arena, b),
            Err(RingError::NotMember { node: b })
        );
        assert_eq!(values(&ring, &arena), vec![1]);
        assert_eq!(values(&other, &arena), vec![2]);
    }

    #[test]
    fn removed_node_can_be_appended_again() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let a = node(&mut arena, 1);
        let b = node(&mut arena, 2);
        ring.append(&mut arena, a).unwrap();
        ring.append(&mut arena, b).unwrap();

        ring.remove(&mut arena, a).unwrap();
        ring.append(&mut arena, a).unwrap();
        assert_eq!(values(&ring, &arena), vec![2, 1]);
        assert_well_linked(&ring, &arena);
    }

    #[test]
    fn stale_node_is_rejected() {
        let mut arena = Arena::new();
        let mut ring = Ring::new();
        let a = node(&mut arena, 1);
        arena.remove(a);
        assert_eq!(ring.append(&mut arena, a), Err(RingError::Stale { node: a }));
    }
}
