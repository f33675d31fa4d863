//! Command layer: turn a line of user text into an action on the address book.
//!
//! - **parser**: split raw input into a typed [`Command`]
//! - **handlers**: run a [`Command`] against an [`AddressBook`](crate::models::AddressBook)

pub mod handlers;
pub mod parser;

pub use handlers::{execute, Reply};
pub use parser::{parse_input, Command};
