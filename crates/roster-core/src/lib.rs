pub mod contact;
pub mod list;
pub mod util;

pub use contact::Contact;
pub use list::{ContactList, ListSummary, ListView};
