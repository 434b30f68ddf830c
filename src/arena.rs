//! Slot storage backing both rings of a graph.
//!
//! Every value lives in a slot addressed by an [`Index`]. An index carries the
//! generation of the slot at the time of insertion, so a handle to a value that
//! has since been removed never resolves to whatever reused the slot.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    slot: u32,
    generation: u32,
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.slot, self.generation)
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<u32> },
}

#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: vec![],
            free: None,
            len: 0,
        }
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T) -> Index {
        self.len += 1;

        match self.free {
            Some(slot) => {
                let entry = &mut self.slots[slot as usize];
                let generation = match *entry {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free = next_free;
                        generation
                    }
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                *entry = Slot::Occupied { generation, value };
                Index { slot, generation }
            }
            None => {
                let slot = self.slots.len() as u32;
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    value,
                });
                Index {
                    slot,
                    generation: 0,
                }
            }
        }
    }

    /// Takes the value out of its slot. The slot's generation is bumped so
    /// `index` and every copy of it go stale.
    pub fn remove(&mut self, index: Index) -> Option<T> {
        if !self.contains(index) {
            return None;
        }

        let vacant = Slot::Vacant {
            generation: index.generation.wrapping_add(1),
            next_free: self.free,
        };
        let taken = std::mem::replace(&mut self.slots[index.slot as usize], vacant);
        self.free = Some(index.slot);
        self.len -= 1;

        match taken {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, index: Index) -> bool {
        self.get(index).is_some()
    }

    pub fn get(&self, index: Index) -> Option<&T> {
        match self.slots.get(index.slot as usize)? {
            Slot::Occupied { generation, value } if *generation == index.generation => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        match self.slots.get_mut(index.slot as usize)? {
            Slot::Occupied { generation, value } if *generation == index.generation => Some(value),
            _ => None,
        }
    }

    /// Drops every value. Outstanding indices all go stale.
    pub fn clear(&mut self) {
        let occupied: Vec<Index> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| match entry {
                Slot::Occupied { generation, .. } => Some(Index {
                    slot: slot as u32,
                    generation: *generation,
                }),
                Slot::Vacant { .. } => None,
            })
            .collect();

        for index in occupied {
            self.remove(index);
        }
    }
}
