pub mod backup;
pub mod context;
pub mod engine;
pub mod holidays;
pub mod logic;

pub use context::{RunContext, RunMode};
pub use engine::{Policy, Reconciliation, reconcile};
pub use holidays::{GermanHolidays, Holiday, HolidayCache, HolidayOracle};
pub use logic::Core;
