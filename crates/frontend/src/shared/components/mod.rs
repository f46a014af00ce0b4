pub mod scroll_area;
pub mod ui;

pub use scroll_area::ScrollArea;
