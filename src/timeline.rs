use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::events::Event;

/// Pending events, popped earliest first.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    events: BinaryHeap<Reverse<Event>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, event: Event) {
        self.events.push(Reverse(event));
    }

    pub fn poll(&mut self) -> Option<Event> {
        self.events.pop().map(|Reverse(event)| event)
    }

    pub fn peek(&self) -> Option<&Event> {
        self.events.peek().map(|Reverse(event)| event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Event> for Timeline {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().map(Reverse).collect(),
        }
    }
}
