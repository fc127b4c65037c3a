// seating-chart: edit dialog state

use tracing::debug;

use crate::labels::Labels;
use crate::layout::Identifier;
use crate::store::OccupancyStore;

/// Keys the dialog reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Accept: same as pressing save
    Enter,
    /// Dismiss: same as pressing cancel
    Escape,
}

/// The edit dialog: closed, or open on one target with a draft name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open { target: Identifier, draft: String },
}

impl Selection {
    /// Open the dialog on `target`, pre-filled with its current occupant.
    ///
    /// An already open dialog is retargeted and its draft dropped.
    pub fn open(&mut self, target: Identifier, store: &OccupancyStore) {
        let draft = store.get(&target).unwrap_or_default().to_string();
        debug!(%target, "dialog opened");
        *self = Selection::Open { target, draft };
    }

    /// Replace the draft name. Ignored while closed.
    pub fn edit(&mut self, text: &str) {
        match self {
            Selection::Open { draft, .. } => {
                draft.clear();
                draft.push_str(text);
            }
            Selection::Closed => debug!("edit ignored, dialog closed"),
        }
    }

    /// Commit the draft and close. Returns the identifier that was written.
    pub fn save(&mut self, store: &mut OccupancyStore) -> Option<Identifier> {
        match std::mem::take(self) {
            Selection::Open { target, draft } => {
                store.set(target, &draft);
                debug!(%target, "dialog saved");
                Some(target)
            }
            Selection::Closed => {
                debug!("save ignored, dialog closed");
                None
            }
        }
    }

    /// Drop the draft and close without touching the store.
    pub fn cancel(&mut self) -> Option<Identifier> {
        match std::mem::take(self) {
            Selection::Open { target, .. } => {
                debug!(%target, "dialog cancelled");
                Some(target)
            }
            Selection::Closed => {
                debug!("cancel ignored, dialog closed");
                None
            }
        }
    }

    pub fn press(&mut self, key: Key, store: &mut OccupancyStore) -> Option<Identifier> {
        match key {
            Key::Enter => self.save(store),
            Key::Escape => self.cancel(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open { .. })
    }

    pub fn target(&self) -> Option<Identifier> {
        match self {
            Selection::Open { target, .. } => Some(*target),
            Selection::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Selection::Open { draft, .. } => Some(draft.as_str()),
            Selection::Closed => None,
        }
    }

    /// What the open dialog shows
    pub fn dialog(&self, store: &OccupancyStore, labels: &Labels) -> Option<DialogView> {
        let Selection::Open { target, draft } = self else {
            return None;
        };
        let title = if store.contains(target) {
            labels.edit_title
        } else {
            labels.assign_title
        };
        Some(DialogView {
            title: title.to_string(),
            caption: target.caption(labels),
            placeholder: labels.name_placeholder.to_string(),
            draft: draft.clone(),
        })
    }
}

/// Render-ready contents of the edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    pub caption: String,
    pub placeholder: String,
    pub draft: String,
}
