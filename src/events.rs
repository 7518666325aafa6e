use crate::types::Coord2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Notifications queued by the model for a presenter to react to.
///
/// Cell payloads are always batches: `CellsOpened` carries every cell a
/// single command opened, `CellMarked` carries a one-element batch of the
/// same shape so consumers handle both uniformly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Notification {
    /// Elapsed time crossed a second boundary; zero-padded `"MM:SS"`.
    TimeChanged(String),
    /// Cells opened by one command, in open order.
    CellsOpened(Vec<Coord2>),
    /// A cell toggled between closed and marked.
    CellMarked(Vec<Coord2>),
    /// Every non-mine cell is now open.
    GameWon,
    /// A mine was opened.
    GameLost,
}

/// FIFO queue of pending notifications.
///
/// The model owns one of these by composition instead of being an event
/// emitter itself; consumers drain it after each command or tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub(crate) fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    pub fn pop(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
