use crate::*;
use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Both end states are terminal: no command mutates anything afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The minefield model: the content and state grids, the clock, and the
/// queue of notifications a presenter consumes.
///
/// Cell coordinates are `(row, col)`. Callers are responsible for bounds
/// checking against [`Game::rows`]/[`Game::cols`]; out-of-range coordinates
/// are a programming error and panic on the grid index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    content: Array2<CellContent>,
    state: Array2<CellState>,
    mine_count: usize,
    closed_count: usize,
    status: GameStatus,
    clock: GameClock,
    events: NotificationQueue,
}

impl Game {
    /// Derives the content grid from the layout and starts the clock.
    pub fn new(layout: MineLayout) -> Game {
        let size = layout.size();
        let mut content: Array2<CellContent> = Array2::default(size);
        for (coords, cell) in content.indexed_iter_mut() {
            *cell = if layout.contains_mine(coords) {
                CellContent::Mine
            } else {
                CellContent::Count(layout.adjacent_mine_count(coords))
            };
        }

        Self {
            content,
            state: Array2::default(size),
            mine_count: layout.mine_count(),
            closed_count: layout.total_cells(),
            status: GameStatus::InProgress,
            clock: GameClock::start_now(),
            events: NotificationQueue::default(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ended(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn rows(&self) -> usize {
        self.state.dim().0
    }

    pub fn cols(&self) -> usize {
        self.state.dim().1
    }

    pub fn total_mines(&self) -> usize {
        self.mine_count
    }

    /// Cells whose state is not yet opened, marked cells included.
    pub fn closed_count(&self) -> usize {
        self.closed_count
    }

    pub fn content_at(&self, coords: Coord2) -> CellContent {
        self.content[coords]
    }

    pub fn state_at(&self, coords: Coord2) -> CellState {
        self.state[coords]
    }

    pub fn is_opened(&self, coords: Coord2) -> bool {
        self.state[coords].is_opened()
    }

    pub fn is_marked(&self, coords: Coord2) -> bool {
        self.state[coords].is_marked()
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.content[coords].is_mine()
    }

    pub fn is_zero(&self, coords: Coord2) -> bool {
        self.content[coords].is_zero()
    }

    /// Final duration in whole seconds; `None` while the game is running.
    pub fn elapsed_secs(&self) -> Option<u32> {
        self.clock.elapsed_secs()
    }

    pub fn pop_notification(&mut self) -> Option<Notification> {
        self.events.pop()
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.events.drain()
    }

    pub fn has_notifications(&self) -> bool {
        !self.events.is_empty()
    }

    /// Opens a cell, flood-filling its zero region when the cell is a zero
    /// cell. Already-open and marked cells are safe no-ops, as is any
    /// command after the game ended.
    ///
    /// Queues one batched [`Notification::CellsOpened`] for the whole
    /// command, then at most one terminal notification: opening a mine loses
    /// and short-circuits, so a single open never wins and loses at once.
    pub fn try_open_cell(&mut self, coords: Coord2) {
        if self.status.is_terminal() || self.is_opened(coords) || self.is_marked(coords) {
            return;
        }

        let mut opened = Vec::new();
        self.open_cell(coords, &mut opened);
        if self.is_zero(coords) {
            self.flood_open(coords, &mut opened);
        }
        log::debug!("Opened {} cell(s) from {:?}", opened.len(), coords);
        self.events.push(Notification::CellsOpened(opened));

        if self.is_mine(coords) {
            self.finish(GameStatus::Lost);
            self.events.push(Notification::GameLost);
        } else if self.closed_count == self.mine_count {
            // every cell still closed is a mine
            self.finish(GameStatus::Won);
            self.events.push(Notification::GameWon);
        }
    }

    /// Toggles a cell between closed and marked. Opened cells are a safe
    /// no-op. Queues a one-element [`Notification::CellMarked`] batch.
    pub fn try_mark_cell(&mut self, coords: Coord2) {
        if self.status.is_terminal() || self.is_opened(coords) {
            return;
        }

        self.state[coords] = match self.state[coords] {
            CellState::Marked => CellState::Closed,
            _ => CellState::Marked,
        };
        self.events.push(Notification::CellMarked(vec![coords]));
    }

    /// Abandons the game, recorded as a loss rather than a separate terminal
    /// state. Queues no notification: the caller requested the quit and
    /// handles its own teardown.
    pub fn quit_game(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        log::debug!("Game quit");
        self.finish(GameStatus::Lost);
    }

    /// Host-driven clock tick; call on a roughly one-second interval. Queues
    /// [`Notification::TimeChanged`] whenever the elapsed whole-second value
    /// advanced. Returns `false` once the game is terminal, after which the
    /// host should stop the interval; a terminal game never emits again.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Utc::now())
    }

    fn tick_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        if let Some(display) = self.clock.tick_at(now) {
            self.events.push(Notification::TimeChanged(display));
        }
        true
    }

    /// Transitions a single cell to opened, recording it in the command's
    /// batch.
    fn open_cell(&mut self, coords: Coord2, opened: &mut Vec<Coord2>) {
        if !self.state[coords].is_opened() {
            self.state[coords] = CellState::Opened;
            self.closed_count -= 1;
            opened.push(coords);
        }
    }

    /// Work-queue flood fill over the zero region around `start`, which must
    /// already be open. The state grid doubles as the visited set: opened
    /// cells are never revisited. Numbered cells open but stop the expansion;
    /// mines are never crossed. Marked cells reached by the flood are opened,
    /// only direct opens are guarded by the mark.
    fn flood_open(&mut self, start: Coord2, opened: &mut Vec<Coord2>) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            for pos in self.content.iter_neighbors(coords) {
                if self.is_mine(pos) || self.is_opened(pos) {
                    continue;
                }
                self.open_cell(pos, opened);
                log::trace!("Flood opened cell at {:?}", pos);
                if self.is_zero(pos) {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    fn finish(&mut self, status: GameStatus) {
        debug_assert!(status.is_terminal());
        self.clock.stop_now();
        self.status = status;
        log::debug!("Game ended: {:?}", status);
    }
}
