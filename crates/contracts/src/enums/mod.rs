pub mod page_identifier;

pub use page_identifier::PageIdentifier;
