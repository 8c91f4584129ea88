use std::fmt::{Display, Write};

use crate::error::RingError;
use crate::slot::Slot;

/// A resizable circular array whose live elements form one contiguous,
/// wrap-aware run starting at the head. Arbitrary-position removals close the
/// gap they open by moving only the elements between the gap and the write
/// cursor, never the whole array.
#[derive(Clone)]
pub struct GaplessRing<T> {
    slots: Vec<Slot<T>>,
    head: usize,
    tail: usize,
    next_free: usize,
    len: usize,
    growth_factor: usize,
}

impl<T> GaplessRing<T> {
    pub fn new(initial_capacity: usize, growth_factor: usize) -> Result<Self, RingError> {
        if initial_capacity < 1 {
            return Err(RingError::InvalidCapacity(initial_capacity));
        }

        if growth_factor < 2 {
            return Err(RingError::InvalidGrowthFactor(growth_factor));
        }

        let mut slots = Vec::with_capacity(initial_capacity);
        slots.resize_with(initial_capacity, || Slot::Empty);

        Ok(Self {
            slots,
            head: 0,
            tail: initial_capacity - 1,
            next_free: 0,
            len: 0,
            growth_factor,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn step_forward(&self, index: usize) -> usize {
        if index + 1 == self.capacity() {
            0
        } else {
            index + 1
        }
    }

    #[inline]
    fn step_backward(&self, index: usize) -> usize {
        if index == 0 {
            self.capacity() - 1
        } else {
            index - 1
        }
    }

    #[inline]
    fn physical_index(&self, logical: usize) -> usize {
        let offset = self.head + logical;
        if offset >= self.capacity() {
            offset - self.capacity()
        } else {
            offset
        }
    }

    /// Appends a value at the write cursor, enlarging the ring first when it
    /// is at capacity.
    pub fn push(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }

        self.slots[self.next_free] = Slot::Occupied(value);
        self.len += 1;

        // Once the ring fills, the cursor parks on the slot it just wrote;
        // the next growth recomputes it.
        if !self.is_full() {
            self.next_free = self.step_forward(self.next_free);
        }
    }

    // Growth only runs at full occupancy, so the live run has no gaps and a
    // single wrapped pass relinearizes it oldest-first.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * self.growth_factor;

        let mut slots = Vec::with_capacity(new_capacity);
        let mut cursor = self.head;
        for _ in 0..old_capacity {
            slots.push(self.slots[cursor].take());
            cursor = self.step_forward(cursor);
        }
        slots.resize_with(new_capacity, || Slot::Empty);

        self.slots = slots;
        self.head = 0;
        self.tail = new_capacity - 1;
        self.next_free = self.len;
    }

    /// Removes the element at a logical position. Returns `false`, mutating
    /// nothing, when the position is out of bounds or its slot is vacant.
    pub fn remove(&mut self, logical: usize) -> bool {
        if logical >= self.capacity() {
            return false;
        }

        let index = self.physical_index(logical);
        if self.slots[index].is_empty() {
            return false;
        }

        if index == self.head {
            // The tail parks on the vacated slot before the head advances;
            // later boundary checks rely on this ordering.
            self.slots[index] = Slot::Empty;
            self.tail = self.head;
            self.head = self.step_forward(self.head);
        } else if index == self.tail {
            self.slots[index] = Slot::Empty;
        } else if self.slots[self.step_forward(index)].is_empty() {
            // The gap opened against the free boundary: the slot itself
            // becomes the next write target, no shifting needed.
            self.slots[index] = Slot::Empty;
            self.next_free = index;
        } else {
            self.close_gap(index, self.next_free);

            if self.next_free != self.tail {
                self.next_free = self.step_backward(self.next_free);
            }
        }

        self.len -= 1;
        true
    }

    // Walks forward from the gap, pulling each neighbor one slot back, until
    // the cell taken from the old cursor position has been placed or an empty
    // cell gets moved.
    fn close_gap(&mut self, start: usize, end: usize) {
        let mut current = start;

        loop {
            let pulled = if current == end {
                Slot::Empty
            } else {
                let next = self.step_forward(current);
                self.slots[next].take()
            };
            let done = pulled.is_empty();

            self.slots[current] = pulled;
            current = self.step_forward(current);

            if done {
                break;
            }
        }
    }

    pub fn get(&self, logical: usize) -> Option<&T> {
        if logical >= self.capacity() {
            return None;
        }

        self.slots[self.physical_index(logical)].value()
    }

    pub fn get_mut(&mut self, logical: usize) -> Option<&mut T> {
        if logical >= self.capacity() {
            return None;
        }

        let index = self.physical_index(logical);
        self.slots[index].value_mut()
    }

    /// Vacates every slot and resets the indices. Capacity is kept.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = self.capacity() - 1;
        self.next_free = 0;
        self.len = 0;

        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
    }

    /// One bracketed cell per physical slot, tagged `H`, `T`, `N` where the
    /// head, tail, and write cursor sit. Tags concatenate on shared slots.
    pub fn state_view(&self) -> String {
        let mut out = String::with_capacity(self.capacity() * 4);

        for index in 0..self.capacity() {
            let mut tags = String::new();
            if index == self.head {
                tags.push('H');
            }
            if index == self.tail {
                tags.push('T');
            }
            if index == self.next_free {
                tags.push('N');
            }
            if tags.is_empty() {
                tags.push(' ');
            }

            out.push('[');
            out.push_str(&tags);
            out.push(']');
        }

        out
    }

    /// One bracketed cell per physical slot, showing the element or a blank
    /// for a vacant slot.
    pub fn values_view(&self) -> String
    where
        T: Display,
    {
        let mut out = String::with_capacity(self.capacity() * 4);

        for slot in &self.slots {
            match slot.value() {
                Some(value) => {
                    let _ = write!(out, "[{}]", value);
                }
                None => out.push_str("[ ]"),
            }
        }

        out
    }
}
