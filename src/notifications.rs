// Notification lifecycle: each toast carries its own dismiss/remove deadlines.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::{Notification, NotificationKind, NotificationState};

/// How long a notification stays fully visible, and how long its fade-out lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub visible_for: Duration,
    pub fade_out: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            visible_for: Duration::from_millis(3000),
            fade_out: Duration::from_millis(300),
        }
    }
}

impl NotificationTimings {
    /// State of a shown notification `elapsed` after it was created.
    pub fn state_at(&self, elapsed: Duration) -> NotificationState {
        if elapsed < self.visible_for {
            NotificationState::Visible
        } else if elapsed < self.visible_for + self.fade_out {
            NotificationState::Dismissing
        } else {
            NotificationState::Removed
        }
    }
}

#[derive(Debug, Clone)]
struct Tracked {
    notification: Notification,
    state: NotificationState,
    dismiss_at: Instant,
    remove_at: Instant,
}

impl Tracked {
    fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            NotificationState::Created | NotificationState::Visible => Some(self.dismiss_at),
            NotificationState::Dismissing => Some(self.remove_at),
            NotificationState::Removed => None,
        }
    }
}

/// A state change produced by `NotificationCenter::advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub notification: Notification,
    pub state: NotificationState,
}

/// Live notifications. Multiple may coexist; each advances on its own deadlines.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    timings: NotificationTimings,
    next_id: u64,
    active: Vec<Tracked>,
}

impl NotificationCenter {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            next_id: 1,
            active: Vec::new(),
        }
    }

    pub fn timings(&self) -> NotificationTimings {
        self.timings
    }

    /// Creates a notification and shows it immediately (Created -> Visible).
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> Notification {
        let notification = Notification {
            id: self.next_id,
            message: message.into(),
            kind,
        };
        self.next_id += 1;
        let dismiss_at = now + self.timings.visible_for;
        self.active.push(Tracked {
            notification: notification.clone(),
            state: NotificationState::Visible,
            dismiss_at,
            remove_at: dismiss_at + self.timings.fade_out,
        });
        notification
    }

    /// Applies every deadline that has passed by `now`. Removed notifications are dropped.
    pub fn advance(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        for tracked in &mut self.active {
            if matches!(
                tracked.state,
                NotificationState::Created | NotificationState::Visible
            ) && now >= tracked.dismiss_at
            {
                tracked.state = NotificationState::Dismissing;
                transitions.push(Transition {
                    notification: tracked.notification.clone(),
                    state: tracked.state,
                });
            }
            if tracked.state == NotificationState::Dismissing && now >= tracked.remove_at {
                tracked.state = NotificationState::Removed;
                transitions.push(Transition {
                    notification: tracked.notification.clone(),
                    state: tracked.state,
                });
            }
        }
        self.active.retain(|t| t.state != NotificationState::Removed);
        transitions
    }

    /// Earliest pending deadline across all live notifications.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.iter().filter_map(Tracked::next_deadline).min()
    }

    /// Current state of `id`; ids that were issued but are no longer live are Removed.
    pub fn state_of(&self, id: u64) -> Option<NotificationState> {
        if let Some(t) = self.active.iter().find(|t| t.notification.id == id) {
            Some(t.state)
        } else if id > 0 && id < self.next_id {
            Some(NotificationState::Removed)
        } else {
            None
        }
    }

    /// Live notifications with their state, oldest first.
    pub fn live(&self) -> Vec<(Notification, NotificationState)> {
        self.active
            .iter()
            .map(|t| (t.notification.clone(), t.state))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationTimings::default())
    }
}
