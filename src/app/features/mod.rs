pub mod handler;
pub mod page;
pub mod terminal;

pub use handler::handle_command;
