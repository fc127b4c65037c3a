// seating-chart: plan export and clipboard collaborators

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::labels::Labels;
use crate::store::OccupancyStore;

// ============================================================================
// Clipboard
// ============================================================================

/// Somewhere the exported plan can be handed to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Prints the plan to standard output
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Replaces the contents of a file with the latest plan
#[derive(Debug)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        fs::write(&self.path, text)
    }
}

// ============================================================================
// Plan Rendering
// ============================================================================

/// Render the store as text: tables first, then seats, each sorted.
///
/// Ordering comes from `OccupancyStore::iter`, which yields entries in
/// `Identifier` order; the partition keeps that order within each section.
///
/// A section is left out entirely when it has no entries, so an empty
/// store renders as the title line alone.
pub fn render_plan(store: &OccupancyStore, labels: &Labels) -> String {
    let (tables, seats): (Vec<_>, Vec<_>) = store.iter().partition(|(id, _)| id.is_table());

    let mut plan = format!("{}\n", labels.plan_title);
    for (heading, entries) in [(labels.tables_heading, tables), (labels.seats_heading, seats)] {
        if entries.is_empty() {
            continue;
        }
        plan.push('\n');
        plan.push_str(heading);
        plan.push('\n');
        for (id, name) in entries {
            plan.push_str(&format!("{}: {}\n", id.caption(labels), name));
        }
    }
    plan
}

/// Render the plan and hand it to the clipboard.
///
/// Fire-and-forget: a failed write is logged and otherwise ignored.
pub fn copy_plan(store: &OccupancyStore, labels: &Labels, clipboard: &mut dyn Clipboard) {
    let plan = render_plan(store, labels);
    match clipboard.write_text(&plan) {
        Ok(()) => info!(entries = store.len(), "seating plan copied"),
        Err(e) => warn!(error = %e, "failed to copy seating plan"),
    }
}
