use serde::{Deserialize, Serialize};

/// What a cell holds, fixed when the board is generated. The mine/number
/// distinction is a tagged union so the two can never be confused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    /// Number of mines among the up-to-8 neighboring cells.
    Count(u8),
    Mine,
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// A zero cell: no mine here, no mine in the neighborhood.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Count(count) => Some(count),
            Self::Mine => None,
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Closed,
    Opened,
    Marked,
}

impl CellState {
    pub const fn is_opened(self) -> bool {
        matches!(self, Self::Opened)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Marked)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Closed
    }
}
