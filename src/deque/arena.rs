//! Slot storage for deque nodes.
//!
//! Nodes live in a `Vec` of slots and refer to their neighbours by slot index,
//! so the doubly-linked structure needs neither shared ownership nor raw
//! pointers. Allocation always appends and a released slot is never handed out
//! again. Once at least half of the slots are vacant the owner compacts the
//! arena, which drops the vacant slots and keeps retained storage within a
//! constant factor of the live node count.

use std::mem;

/// A single link in the chain: the two neighbour indices and the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Node<T> {
    pub(super) left: Option<usize>,
    pub(super) right: Option<usize>,
    pub(super) element: T,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant,
}

#[derive(Debug, Clone)]
pub(super) struct Arena<T> {
    slots: Vec<Slot<T>>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(super) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            occupied: 0,
        }
    }

    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            occupied: 0,
        }
    }

    /// Appends `node` and returns its index.
    pub(super) fn allocate(&mut self, node: Node<T>) -> usize {
        self.occupied += 1;
        self.slots.push(Slot::Occupied(node));
        self.slots.len() - 1
    }

    /// Vacates the slot at `index` and hands the node back to the caller.
    pub(super) fn release(&mut self, index: usize) -> Node<T> {
        match mem::replace(&mut self.slots[index], Slot::Vacant) {
            Slot::Occupied(node) => {
                self.occupied -= 1;
                node
            }
            Slot::Vacant => unreachable!("released vacant slot {index}"),
        }
    }

    pub(super) fn get(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("linked to vacant slot {index}"),
        }
    }

    pub(super) fn get_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("linked to vacant slot {index}"),
        }
    }

    /// Exchanges the payloads of two occupied slots, leaving links untouched.
    pub(super) fn swap_elements(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }
        let (low, high) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        let (head, tail) = self.slots.split_at_mut(high);
        if let (Slot::Occupied(low_node), Slot::Occupied(high_node)) = (&mut head[low], &mut tail[0])
        {
            mem::swap(&mut low_node.element, &mut high_node.element);
        }
    }

    pub(super) const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Number of slots held, vacant or not.
    pub(super) const fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` once at least half of the slots are vacant.
    pub(super) const fn is_sparse(&self) -> bool {
        self.occupied * 2 <= self.slots.len()
    }

    /// Rebuilds the arena with only the nodes reachable from `leftmost`, in
    /// chain order, and drops every vacant slot.
    ///
    /// Returns the new indices of the leftmost and rightmost nodes.
    pub(super) fn compact(&mut self, leftmost: usize) -> (usize, usize) {
        let mut previous = mem::replace(&mut self.slots, Vec::with_capacity(self.occupied));

        let mut cursor = Some(leftmost);
        while let Some(index) = cursor {
            let Slot::Occupied(node) = mem::replace(&mut previous[index], Slot::Vacant) else {
                unreachable!("linked to vacant slot {index}")
            };
            let position = self.slots.len();
            cursor = node.right;
            self.slots.push(Slot::Occupied(Node {
                left: position.checked_sub(1),
                right: cursor.map(|_| position + 1),
                element: node.element,
            }));
        }

        self.occupied = self.slots.len();
        (0, self.slots.len().saturating_sub(1))
    }

    /// Drops every slot, vacant or not, and gives the storage back.
    pub(super) fn clear(&mut self) {
        self.slots = Vec::new();
        self.occupied = 0;
    }
}
