// seating-chart: the editor instance that owns all state

use crate::export::{copy_plan, Clipboard};
use crate::labels::Labels;
use crate::layout::{self, Cell, Identifier, SeatRow};
use crate::selection::{DialogView, Key, Selection};
use crate::store::OccupancyStore;

/// Input events delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Click(Identifier),
    Input(String),
    Key(Key),
    Save,
    Cancel,
}

/// One seating chart: the occupancy store plus the edit dialog.
#[derive(Debug, Clone, Default)]
pub struct SeatingChart {
    store: OccupancyStore,
    selection: Selection,
}

impl SeatingChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: OccupancyStore) -> Self {
        Self {
            store,
            selection: Selection::Closed,
        }
    }

    pub fn store(&self) -> &OccupancyStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Click(id) => self.click(id),
            Event::Input(text) => self.selection.edit(&text),
            Event::Key(key) => {
                self.selection.press(key, &mut self.store);
            }
            Event::Save => {
                self.selection.save(&mut self.store);
            }
            Event::Cancel => {
                self.selection.cancel();
            }
        }
    }

    pub fn click(&mut self, id: Identifier) {
        self.selection.open(id, &self.store);
    }

    pub fn dialog(&self, labels: &Labels) -> Option<DialogView> {
        self.selection.dialog(&self.store, labels)
    }

    pub fn tables(&self) -> Vec<Cell> {
        layout::table_cells(&self.store)
    }

    pub fn rows(&self) -> Vec<SeatRow> {
        layout::seat_rows(&self.store)
    }

    pub fn render_text(&self, labels: &Labels) -> String {
        layout::render_text(&self.store, labels)
    }

    pub fn copy_plan(&self, labels: &Labels, clipboard: &mut dyn Clipboard) {
        copy_plan(&self.store, labels, clipboard);
    }
}
