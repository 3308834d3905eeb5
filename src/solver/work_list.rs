use std::collections::{HashSet, VecDeque};

use crate::model::VariableId;

/// An arc `(x, y)` waiting to be revised: make `x` consistent with `y`.
pub type Arc = (VariableId, VariableId);

/// The AC-3 worklist: a FIFO queue of arcs with a membership set, so an arc
/// that is already pending is never queued a second time.
pub struct WorkList {
    queue: VecDeque<Arc>,
    queue_members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, arc: Arc) {
        if self.queue_members.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pops_in_fifo_order() {
        let mut list = WorkList::new();
        list.push_back((0, 1));
        list.push_back((1, 0));
        assert_eq!(list.pop_front(), Some((0, 1)));
        assert_eq!(list.pop_front(), Some((1, 0)));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn a_pending_arc_is_not_queued_twice() {
        let mut list = WorkList::new();
        list.push_back((0, 1));
        list.push_back((0, 1));
        assert_eq!(list.len(), 1);

        // Once popped, the arc may be queued again.
        list.pop_front();
        list.push_back((0, 1));
        assert_eq!(list.len(), 1);
    }
}
