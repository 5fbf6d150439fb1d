//! Poll-loop event queue.
//!
//! Events are produced by the [`Scheduler`](crate::scheduler::Scheduler)
//! (through the [`TaskDelegate`] impl below) and consumed by the
//! [`PollLoop`](crate::app::runner::PollLoop), one at a time in FIFO
//! order.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Button task │────▶│  EventQueue  │────▶│   PollLoop   │
//! │ Timeout task│────▶│ (fixed cap)  │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Everything runs on the one cooperative loop, so the queue is a plain
//! owned `heapless::Deque` with no atomics.

use heapless::Deque;
use log::warn;

use crate::app::ports::{TaskDelegate, TaskKind};

/// Maximum number of pending events.
const EVENT_QUEUE_CAP: usize = 8;

/// Poll-loop event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Button sample period elapsed.
    ButtonPoll,
    /// Auto-off check period elapsed.
    TimeoutPoll,
}

impl From<TaskKind> for Event {
    fn from(kind: TaskKind) -> Self {
        match kind {
            TaskKind::ButtonPoll => Self::ButtonPoll,
            TaskKind::TimeoutPoll => Self::TimeoutPoll,
        }
    }
}

pub struct EventQueue {
    inner: Deque<Event, EVENT_QUEUE_CAP>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Push an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: Event) -> bool {
        self.inner.push_back(event).is_ok()
    }

    /// Pop the next event, or `None` if empty.
    pub fn pop(&mut self) -> Option<Event> {
        self.inner.pop_front()
    }

    /// Drain all pending events into a callback, FIFO.
    pub fn drain(&mut self, mut handler: impl FnMut(Event)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl TaskDelegate for EventQueue {
    fn on_task_due(&mut self, label: &str, kind: TaskKind) {
        if !self.push(kind.into()) {
            warn!("Event queue full, dropped '{}'", label);
        }
    }
}
