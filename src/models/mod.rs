pub mod day_summary;
pub mod entry;
pub mod measures;

pub use day_summary::DaySummary;
pub use entry::{Entry, EntryPatch, NewEntry, ValueChange};
pub use measures::{Measures, Totals};
