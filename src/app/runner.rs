//! The cooperative poll loop.
//!
//! [`PollLoop`] wires the scheduler, the event queue, the gesture
//! classifier and the [`RelayController`] together.  The binary calls
//! [`PollLoop::step`] forever with the current monotonic time; host
//! tests call it with a simulated clock.
//!
//! ```text
//!  step(now) ─▶ Scheduler.tick ─▶ EventQueue ─▶ drain
//!                                                 │
//!          ButtonPoll ◀───────────────────────────┤
//!            └─ ButtonPort ─▶ GestureClassifier ─▶ RelayController.handle_gesture
//!          TimeoutPoll ◀──────────────────────────┘
//!            └─ RelayController.poll_timeout
//! ```

use crate::config::ControllerConfig;
use crate::drivers::button::GestureClassifier;
use crate::events::{Event, EventQueue};
use crate::fsm::RelayMode;
use crate::scheduler::{PeriodicTask, Scheduler};

use super::ports::{ButtonPort, EventSink, RelayPort, TaskKind};
use super::service::RelayController;

pub struct PollLoop {
    scheduler: Scheduler,
    queue: EventQueue,
    classifier: GestureClassifier,
    controller: RelayController,
}

impl PollLoop {
    /// Build the loop with its two periodic tasks registered.
    pub fn new(config: ControllerConfig) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.add(PeriodicTask {
            label: "button",
            kind: TaskKind::ButtonPoll,
            interval_ms: config.button_poll_interval_ms,
            enabled: true,
        });
        scheduler.add(PeriodicTask {
            label: "auto-off",
            kind: TaskKind::TimeoutPoll,
            interval_ms: config.timeout_poll_interval_ms,
            enabled: true,
        });

        Self {
            scheduler,
            queue: EventQueue::new(),
            classifier: GestureClassifier::new(&config),
            controller: RelayController::new(config),
        }
    }

    /// Force the relay off and announce the start.  Call once before
    /// the first [`step`](Self::step).
    pub fn start(&mut self, hw: &mut impl RelayPort, sink: &mut impl EventSink) {
        self.controller.start(hw, sink);
    }

    /// One pass of the loop at `now_ms`: schedule due tasks, then run
    /// them in FIFO order.
    pub fn step(&mut self, now_ms: u32, hw: &mut (impl RelayPort + ButtonPort), sink: &mut impl EventSink) {
        self.scheduler.tick(now_ms, &mut self.queue);

        let Self {
            queue,
            classifier,
            controller,
            ..
        } = self;

        queue.drain(|event| match event {
            Event::ButtonPoll => {
                let raw = hw.is_pressed();
                if let Some(gesture) = classifier.tick(raw, now_ms) {
                    controller.handle_gesture(gesture, now_ms, hw, sink);
                }
            }
            Event::TimeoutPoll => {
                controller.poll_timeout(now_ms, hw, sink);
            }
        });
    }

    pub fn mode(&self) -> RelayMode {
        self.controller.mode()
    }

    pub fn controller(&self) -> &RelayController {
        &self.controller
    }
}
