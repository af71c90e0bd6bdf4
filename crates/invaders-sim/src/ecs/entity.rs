//! Entity identifiers, the per-kind ID pool and the bullet free-list.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use invaders_core::enums::EntityKind;
use invaders_core::error::EcsError;

/// Index into every component store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// How many IDs each kind reserves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolCapacities {
    pub alien: usize,
    pub tank: usize,
    pub bullet: usize,
}

impl PoolCapacities {
    pub fn for_kind(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Alien => self.alien,
            EntityKind::Tank => self.tank,
            EntityKind::Bullet => self.bullet,
        }
    }

    /// Sum of all kinds, `None` on overflow.
    pub fn total(&self) -> Option<usize> {
        self.alien.checked_add(self.tank)?.checked_add(self.bullet)
    }
}

/// Hands out IDs from one contiguous range per kind.
///
/// IDs are never reclaimed. An entity is "deleted" by clearing its Active
/// flag; bullets are reused through [`SlotFreeList`].
#[derive(Debug, Clone, Default)]
pub struct EntityPool {
    ranges: [Range<u32>; 3],
    allocated: [Vec<EntityId>; 3],
    all: Vec<EntityId>,
}

impl EntityPool {
    /// Fails with [`EcsError::CapacityOverflow`] when the ranges do not fit
    /// in the `u32` ID space.
    pub fn new(capacities: PoolCapacities) -> Result<Self, EcsError> {
        let total = capacities.total().ok_or(EcsError::CapacityOverflow)?;
        u32::try_from(total).map_err(|_| EcsError::CapacityOverflow)?;

        let mut ranges: [Range<u32>; 3] = Default::default();
        let mut start = 0u32;
        for kind in EntityKind::ALL {
            let len = u32::try_from(capacities.for_kind(kind))
                .map_err(|_| EcsError::CapacityOverflow)?;
            let end = start.checked_add(len).ok_or(EcsError::CapacityOverflow)?;
            ranges[kind.ordinal()] = start..end;
            start = end;
        }
        Ok(Self {
            ranges,
            allocated: Default::default(),
            all: Vec::with_capacity(total),
        })
    }

    /// Allocate the next unused ID of `kind`.
    pub fn create(&mut self, kind: EntityKind) -> Result<EntityId, EcsError> {
        let range = &self.ranges[kind.ordinal()];
        let allocated = &mut self.allocated[kind.ordinal()];
        let next = range.start + allocated.len() as u32;
        if next >= range.end {
            return Err(EcsError::CapacityExhausted {
                kind,
                capacity: range.len(),
            });
        }
        let id = EntityId(next);
        allocated.push(id);
        self.all.push(id);
        Ok(id)
    }

    /// Every allocated ID, in creation order.
    pub fn all_ids(&self) -> &[EntityId] {
        &self.all
    }

    /// Allocated IDs of one kind, in creation order.
    pub fn kind_ids(&self, kind: EntityKind) -> &[EntityId] {
        &self.allocated[kind.ordinal()]
    }

    /// Total number of reserved IDs across all kinds.
    pub fn capacity(&self) -> usize {
        self.ranges.iter().map(|r| r.len()).sum()
    }

    /// The kind whose range holds `id`, allocated or not.
    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| self.ranges[kind.ordinal()].contains(&id.0))
    }

    /// Whether `id` has been handed out by [`EntityPool::create`].
    pub fn contains(&self, id: EntityId) -> bool {
        match self.kind_of(id) {
            Some(kind) => {
                let range = &self.ranges[kind.ordinal()];
                id.0 < range.start + self.allocated[kind.ordinal()].len() as u32
            }
            None => false,
        }
    }
}

/// Free-list over a fixed set of reusable slots.
///
/// Slots start free and are handed out in ascending ID order; a released
/// slot is the next one handed out.
#[derive(Debug, Clone, Default)]
pub struct SlotFreeList {
    slots: Vec<EntityId>,
    /// Stack of free slots; the top is handed out next.
    free: Vec<EntityId>,
    in_use: Vec<bool>,
}

impl SlotFreeList {
    pub fn new(slots: &[EntityId]) -> Self {
        Self {
            slots: slots.to_vec(),
            free: slots.iter().rev().copied().collect(),
            in_use: vec![false; slots.len()],
        }
    }

    pub fn acquire(&mut self) -> Option<EntityId> {
        let id = self.free.pop()?;
        if let Some(pos) = self.position(id) {
            self.in_use[pos] = true;
        }
        Some(id)
    }

    /// Return `id` to the list. False if it is not one of this list's slots
    /// or is already free.
    pub fn release(&mut self, id: EntityId) -> bool {
        match self.position(id) {
            Some(pos) if self.in_use[pos] => {
                self.in_use[pos] = false;
                self.free.push(id);
                true
            }
            _ => false,
        }
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.slots.iter().position(|&slot| slot == id)
    }
}
