//! Deployed-address book and CREATE address forecasting

pub mod book;
pub mod future;

pub use book::{AddressBook, BookError};
pub use future::{checksummed, future_contract_address};
