//! Cooperative periodic-task scheduler.
//!
//! Holds a small fixed set of periodic tasks and, on every pass of the
//! poll loop, notifies a [`TaskDelegate`] for each task whose interval
//! has elapsed.  The scheduler knows nothing about the event queue or
//! the relay; the poll loop hands it the queue as its delegate.
//!
//! ```text
//!  ┌──────────────┐  ┌──────────────┐
//!  │ Button task  │  │ Timeout task │
//!  │   (5 ms)     │  │  (1000 ms)   │
//!  └──────┬───────┘  └──────┬───────┘
//!         ▼                 ▼
//!  ┌────────────────────────────────┐
//!  │          TaskDelegate          │
//!  │   (EventQueue in production)   │
//!  └────────────────────────────────┘
//! ```
//!
//! ## Timing rules
//!
//! - A task runs on the first pass after it is enabled.
//! - It then runs every `interval_ms`, anchored to its previous due
//!   time so periods do not drift with loop jitter.
//! - A task that falls a whole interval or more behind (e.g. the loop
//!   stalled) is re-anchored at `now` and runs once, no catch-up burst.
//! - All comparisons use wrapping `u32` milliseconds.

use heapless::Vec;
use log::info;

use crate::app::ports::{TaskDelegate, TaskKind};

/// Maximum number of periodic tasks (stack-allocated).
const MAX_TASKS: usize = 4;

/// A single periodic task.
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    /// Human-readable label (e.g., "button").
    pub label: &'static str,
    pub kind: TaskKind,
    pub interval_ms: u32,
    pub enabled: bool,
}

/// Internal bookkeeping for a live task.
#[derive(Debug, Clone)]
struct TaskEntry {
    task: PeriodicTask,
    /// Due time of the last run; `None` until the first run.
    last_due_ms: Option<u32>,
}

pub struct Scheduler {
    tasks: Vec<TaskEntry, MAX_TASKS>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a task.  Returns the slot index, or `None` if full.
    pub fn add(&mut self, task: PeriodicTask) -> Option<usize> {
        let label = task.label;
        let interval = task.interval_ms;
        self.tasks
            .push(TaskEntry {
                task,
                last_due_ms: None,
            })
            .ok()?;
        let slot = self.tasks.len() - 1;
        info!("Scheduler: added '{}' every {}ms at slot {}", label, interval, slot);
        Some(slot)
    }

    /// Enable or disable a task.  Re-enabling runs it on the next pass.
    pub fn set_enabled(&mut self, slot: usize, enabled: bool) {
        if let Some(entry) = self.tasks.get_mut(slot) {
            if enabled && !entry.task.enabled {
                entry.last_due_ms = None;
            }
            entry.task.enabled = enabled;
        }
    }

    /// Run one scheduling pass at `now_ms`.
    pub fn tick(&mut self, now_ms: u32, delegate: &mut dyn TaskDelegate) {
        for entry in self.tasks.iter_mut().filter(|e| e.task.enabled) {
            let due = match entry.last_due_ms {
                None => Some(now_ms),
                Some(last) => {
                    let elapsed = now_ms.wrapping_sub(last);
                    let interval = entry.task.interval_ms;
                    if elapsed < interval {
                        None
                    } else if elapsed < interval.saturating_mul(2) {
                        Some(last.wrapping_add(interval))
                    } else {
                        Some(now_ms)
                    }
                }
            };

            if let Some(due_ms) = due {
                entry.last_due_ms = Some(due_ms);
                delegate.on_task_due(entry.task.label, entry.task.kind);
            }
        }
    }

    /// Number of enabled tasks.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|e| e.task.enabled).count()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
