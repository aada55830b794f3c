use alloc::collections::VecDeque;
use alloc::string::String;

use crate::{Rect, SlotId};

/// A reusable cell: one pooled visual unit that is reassigned to different rows while scrolling.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSlot {
    pub(crate) id: SlotId,
    pub(crate) row: i64,
    pub(crate) text: String,
    pub(crate) frame: Rect,
    pub(crate) hidden: bool,
}

impl CellSlot {
    fn new(id: SlotId) -> Self {
        Self {
            id,
            row: 0,
            text: String::new(),
            frame: Rect::default(),
            hidden: true,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    /// The logical row currently shown by this slot (may be out of bounds).
    pub fn row(&self) -> i64 {
        self.row
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Frame in content coordinates, aligned to integral pixels.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// An ordered sequence of reusable cell slots.
///
/// Slots are kept in ascending row order. The pool never grows or shrinks between resets; the
/// engine only rotates slots from one edge to the other and reassigns them.
#[derive(Clone, Debug, Default)]
pub struct CellPool {
    slots: VecDeque<CellSlot>,
    generation: u64,
}

impl CellPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every slot and creates `new_size` fresh ones under a new generation.
    pub fn reset(&mut self, new_size: usize) {
        self.generation = self.generation.wrapping_add(1);
        self.slots.clear();
        self.slots.reserve_exact(new_size);
        for index in 0..new_size {
            self.slots.push_back(CellSlot::new(SlotId {
                generation: self.generation,
                index: index as u32,
            }));
        }
    }

    /// Moves the first slot to the back and returns it for reassignment.
    pub fn rotate_forward(&mut self) -> Option<&mut CellSlot> {
        let slot = self.slots.pop_front()?;
        self.slots.push_back(slot);
        self.slots.back_mut()
    }

    /// Moves the last slot to the front and returns it for reassignment.
    pub fn rotate_backward(&mut self) -> Option<&mut CellSlot> {
        let slot = self.slots.pop_back()?;
        self.slots.push_front(slot);
        self.slots.front_mut()
    }

    pub fn first(&self) -> Option<&CellSlot> {
        self.slots.front()
    }

    pub fn last(&self) -> Option<&CellSlot> {
        self.slots.back()
    }

    pub fn get(&self, position: usize) -> Option<&CellSlot> {
        self.slots.get(position)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CellSlot> + DoubleEndedIterator + '_ {
        self.slots.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CellSlot> + '_ {
        self.slots.iter_mut()
    }

    /// Whether the slot rows ascend by exactly one from front to back.
    pub(crate) fn is_contiguous(&self) -> bool {
        self.slots
            .iter()
            .zip(self.slots.iter().skip(1))
            .all(|(a, b)| a.row.checked_add(1) == Some(b.row))
    }

    /// Looks up the slot showing `row`, relying on the pool being contiguous and ordered.
    pub fn slot_for_row(&self, row: i64) -> Option<&CellSlot> {
        let first = self.slots.front()?.row;
        let position = usize::try_from(row.checked_sub(first)?).ok()?;
        self.slots.get(position).filter(|s| s.row == row)
    }
}
