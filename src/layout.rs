// seating-chart: venue layout, identifiers and grid enumeration

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::labels::Labels;
use crate::store::OccupancyStore;

// ============================================================================
// Constants
// ============================================================================

/// Tables shown above the seat rows
pub const TABLE_COUNT: u32 = 3;

/// Seat rows
pub const ROW_COUNT: u32 = 5;

/// Seats in every row
pub const SEATS_PER_ROW: u32 = 10;

/// The aisle runs between this seat and the next one (display only)
pub const AISLE_AFTER_SEAT: u32 = 5;

// ============================================================================
// Identifier
// ============================================================================

/// A table or a seat in a row.
///
/// Variant order matters: the derived `Ord` sorts every table before
/// every seat, tables by number and seats by row, then seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Table(u32),
    Seat { row: u32, seat: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a table (table-N) or a seat (seat-ROW-SEAT)")]
pub struct ParseIdentifierError(pub String);

impl Identifier {
    pub fn seat(row: u32, seat: u32) -> Self {
        Identifier::Seat { row, seat }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Identifier::Table(_))
    }

    /// Human-readable name, e.g. "Table 3" or "Row 1, Seat 1"
    pub fn caption(&self, labels: &Labels) -> String {
        match self {
            Identifier::Table(n) => format!("{} {}", labels.table, n),
            Identifier::Seat { row, seat } => {
                format!("{} {}, {} {}", labels.row, row, labels.seat, seat)
            }
        }
    }

    /// Whether the venue actually has this table or seat
    pub fn in_layout(&self) -> bool {
        match *self {
            Identifier::Table(n) => (1..=TABLE_COUNT).contains(&n),
            Identifier::Seat { row, seat } => {
                (1..=ROW_COUNT).contains(&row) && (1..=SEATS_PER_ROW).contains(&seat)
            }
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Table(n) => write!(f, "table-{}", n),
            Identifier::Seat { row, seat } => write!(f, "seat-{}-{}", row, seat),
        }
    }
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    /// Accepts `table-N`, `seat-R-S` and the older untagged `R-S` seat key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseIdentifierError(s.to_string());
        let number = |part: &str| part.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(err);

        let parts: Vec<&str> = s.trim().split('-').collect();
        match parts.as_slice() {
            ["table", n] => Ok(Identifier::Table(number(*n)?)),
            ["seat", row, seat] => Ok(Identifier::seat(number(*row)?, number(*seat)?)),
            [row, seat] => Ok(Identifier::seat(number(*row)?, number(*seat)?)),
            _ => Err(err()),
        }
    }
}

// ============================================================================
// Grid Enumeration
// ============================================================================

/// One clickable table or seat with its current occupant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: Identifier,
    pub occupant: Option<String>,
}

impl Cell {
    fn lookup(id: Identifier, store: &OccupancyStore) -> Self {
        Cell {
            id,
            occupant: store.get(&id).map(str::to_string),
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Hover text: the occupant, or the "free" label
    pub fn title<'a>(&'a self, labels: &'a Labels) -> &'a str {
        self.occupant.as_deref().unwrap_or(labels.free)
    }
}

/// A seat row split at the aisle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRow {
    pub row: u32,
    pub left: Vec<Cell>,
    pub right: Vec<Cell>,
}

impl SeatRow {
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.left.iter().chain(self.right.iter())
    }
}

pub fn table_cells(store: &OccupancyStore) -> Vec<Cell> {
    (1..=TABLE_COUNT)
        .map(|n| Cell::lookup(Identifier::Table(n), store))
        .collect()
}

pub fn seat_rows(store: &OccupancyStore) -> Vec<SeatRow> {
    (1..=ROW_COUNT)
        .map(|row| {
            let cell = |seat| Cell::lookup(Identifier::seat(row, seat), store);
            SeatRow {
                row,
                left: (1..=AISLE_AFTER_SEAT).map(cell).collect(),
                right: (AISLE_AFTER_SEAT + 1..=SEATS_PER_ROW).map(cell).collect(),
            }
        })
        .collect()
}

/// Plain-text view of the whole chart; occupied cells are starred.
pub fn render_text(store: &OccupancyStore, labels: &Labels) -> String {
    let mark = |cell: &Cell| if cell.is_occupied() { '*' } else { ' ' };

    let tables: Vec<String> = table_cells(store)
        .iter()
        .map(|cell| format!("[{}{}]", mark(cell), cell.id.caption(labels)))
        .collect();

    let rows = seat_rows(store);
    let row_label = |row: u32| format!("{} {}", labels.row, row);
    let label_width = rows
        .iter()
        .map(|r| row_label(r.row).chars().count())
        .max()
        .unwrap_or(0);

    let mut out = tables.join(" ");
    out.push_str("\n\n");

    for row in &rows {
        // Seats are numbered from the start of the row across the aisle
        let block = |cells: &[Cell], first_seat: u32| {
            cells
                .iter()
                .zip(first_seat..)
                .map(|(cell, seat)| format!("[{}{:>2}]", mark(cell), seat))
                .collect::<String>()
        };
        out.push_str(&format!(
            "{:<width$}  {}   {}\n",
            row_label(row.row),
            block(&row.left, 1),
            block(&row.right, AISLE_AFTER_SEAT + 1),
            width = label_width
        ));
    }

    out
}
