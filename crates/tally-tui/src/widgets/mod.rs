mod counter;
mod status_bar;

pub use counter::{layout_row, CounterWidget, TILE_HEIGHT};
pub use status_bar::StatusBarWidget;
