//! Board cells and the renderer-facing cell id space.

use serde::{Deserialize, Serialize};

/// A cell on the 3x3 board.
///
/// The renderer names its nine target meshes `1`-`9` in row-major order
/// (1-2-3 top row, 4-5-6 middle, 7-8-9 bottom), so that id space is the
/// public boundary; internally cells are a fieldless enum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (id 1)
    TopLeft,
    /// Top-center (id 2)
    TopCenter,
    /// Top-right (id 3)
    TopRight,
    /// Middle-left (id 4)
    MiddleLeft,
    /// Center (id 5)
    Center,
    /// Middle-right (id 6)
    MiddleRight,
    /// Bottom-left (id 7)
    BottomLeft,
    /// Bottom-center (id 8)
    BottomCenter,
    /// Bottom-right (id 9)
    BottomRight,
}

/// A cell id outside the board's 1-9 range.
///
/// Selections come from the renderer as raw integers; anything outside
/// 1-9 is a wiring bug on that side, not a user mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("cell id {_0} is outside the board (expected 1-9)")]
pub struct InvalidCell(pub u8);

impl std::error::Error for InvalidCell {}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Creates a cell from its renderer id (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCell`] for ids outside 1-9.
    pub fn from_id(id: u8) -> Result<Self, InvalidCell> {
        match id {
            1 => Ok(Cell::TopLeft),
            2 => Ok(Cell::TopCenter),
            3 => Ok(Cell::TopRight),
            4 => Ok(Cell::MiddleLeft),
            5 => Ok(Cell::Center),
            6 => Ok(Cell::MiddleRight),
            7 => Ok(Cell::BottomLeft),
            8 => Ok(Cell::BottomCenter),
            9 => Ok(Cell::BottomRight),
            other => Err(InvalidCell(other)),
        }
    }

    /// Returns the renderer id (1-9) of this cell.
    pub fn id(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Converts the cell to a board array index (0-8).
    pub fn index(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// Display label for this cell.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "top-left",
            Cell::TopCenter => "top-center",
            Cell::TopRight => "top-right",
            Cell::MiddleLeft => "middle-left",
            Cell::Center => "center",
            Cell::MiddleRight => "middle-right",
            Cell::BottomLeft => "bottom-left",
            Cell::BottomCenter => "bottom-center",
            Cell::BottomRight => "bottom-right",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
