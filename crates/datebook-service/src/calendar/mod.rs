//! Month calendar: the grid builder and the month view that merges it with a
//! user's events.

pub mod grid;
pub mod view;

pub use grid::{MonthGrid, MonthRef, Week, build_grid};
pub use view::{MonthView, month_view};
