use std::collections::VecDeque;

use chess_core::Square;

/// Landing squares of the engine's own most recent moves, oldest first.
///
/// A move whose piece starts on one of these squares is moving something
/// the engine just moved, which the selector discourages.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    squares: VecDeque<Square>,
    capacity: usize,
}

impl MoveHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            squares: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Remember `sq`, evicting the oldest entry when full.
    pub fn record(&mut self, sq: Square) {
        if self.capacity == 0 {
            return;
        }
        while self.squares.len() >= self.capacity {
            self.squares.pop_front();
        }
        self.squares.push_back(sq);
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.squares.contains(&sq)
    }

    pub fn clear(&mut self) {
        self.squares.clear();
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
