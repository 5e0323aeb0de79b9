//! Ordered day sequences of blocks.

use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Block;

/// Direction for moving a block within its sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Swap with the previous block
    Up,
    /// Swap with the next block
    Down,
}

impl FromStr for MoveDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(MoveDirection::Up),
            "down" => Ok(MoveDirection::Down),
            _ => Err(format!("Invalid move direction: {s}")),
        }
    }
}

/// An ordered list of blocks representing one day's plan.
///
/// Order encodes execution order and is exactly what the user manipulates:
/// blocks move up or down one position at a time, get deleted by identifier,
/// or have new blocks spliced in at a given index. The sequence enforces no
/// timing; projecting it onto the clock is the schedule calculator's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DaySequence(pub Vec<Block>);

impl DaySequence {
    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of blocks in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the block at the given index.
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.0.get(index)
    }

    /// Get an iterator over the blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.0.iter()
    }

    /// The blocks as a slice, in execution order.
    pub fn blocks(&self) -> &[Block] {
        &self.0
    }

    /// Find the index of the block with the given identifier.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.0.iter().position(|b| b.id == id)
    }

    /// Index of the first block not yet completed.
    ///
    /// `None` when every block is complete or the sequence is empty.
    pub fn first_incomplete_index(&self) -> Option<usize> {
        self.0.iter().position(|b| !b.completed)
    }

    /// Swap the block at `index` with its neighbor in `direction`.
    ///
    /// Returns `false` without touching the sequence when the move would go
    /// out of bounds.
    pub fn move_block(&mut self, index: usize, direction: MoveDirection) -> bool {
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1),
        };
        let Some(target) = target else {
            return false;
        };
        if index >= self.0.len() || target >= self.0.len() {
            return false;
        }
        self.0.swap(index, target);
        true
    }

    /// Remove the block with the given identifier.
    ///
    /// Returns `false` when no block carries that identifier.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip the completion flag of the block with the given identifier.
    ///
    /// Returns `false` when no block carries that identifier.
    pub fn toggle_complete(&mut self, id: u64) -> bool {
        match self.0.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.completed = !block.completed;
                true
            }
            None => false,
        }
    }

    /// Insert a block at the given index, clamped to the sequence end.
    pub fn insert_at(&mut self, index: usize, block: Block) {
        let index = index.min(self.0.len());
        self.0.insert(index, block);
    }
}

impl Index<usize> for DaySequence {
    type Output = Block;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for DaySequence {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DaySequence {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
