pub mod day;
pub mod day_entry;
pub mod day_kind;
pub mod totals;

pub use day::Day;
pub use day_entry::DayEntry;
pub use day_kind::DayKind;
pub use totals::Totals;
