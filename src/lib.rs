//! Seating chart editor: assign occupants to tables and seats, then
//! export a grouped, sorted plan.

pub mod chart;
pub mod error;
pub mod export;
pub mod labels;
pub mod layout;
pub mod pdf;
pub mod selection;
pub mod session;
pub mod store;

pub use chart::{Event, SeatingChart};
pub use error::AppError;
pub use export::{copy_plan, render_plan, Clipboard, FileClipboard, StdoutClipboard};
pub use labels::{Labels, Language};
pub use layout::Identifier;
pub use selection::{Key, Selection};
pub use store::OccupancyStore;
