pub mod navigation;
pub mod sidebar;
pub mod sidebar_model;

pub use navigation::{NavigationEntry, NAVIGATION};
pub use sidebar::NavigationSidebar;
