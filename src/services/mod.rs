pub mod ledger;
pub mod line_login;
pub mod line_notify;
pub mod line_notify_records;
pub mod security;
pub mod users;

pub use security::*;
