pub mod footer;
pub mod header;
pub mod page;
pub mod terminal_overlay;
