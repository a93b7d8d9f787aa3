//! ## Clause Queue
//! This module contains the implementation of the work list used by the resolution loop. The key
//! exported data structure is [ClauseQueue].

use std::collections::VecDeque;

use crate::knowledge_base::ClauseId;

/// A first in first out queue of clauses waiting to be resolved against the knowledge base.
/// Processing clauses in the order they were derived makes the search breadth first.
#[derive(Debug, Default)]
pub struct ClauseQueue {
    queue: VecDeque<ClauseId>,
}

impl ClauseQueue {
    /// Create an empty clause queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Push a clause to the back of the queue.
    pub fn push(&mut self, id: ClauseId) {
        self.queue.push_back(id);
    }

    /// Obtain the oldest clause from the queue.
    pub fn pop(&mut self) -> Option<ClauseId> {
        self.queue.pop_front()
    }
}
