pub mod center;
pub mod page_view;

pub use center::Center;
pub use page_view::PageView;
