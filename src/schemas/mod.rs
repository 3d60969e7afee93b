pub mod line;
pub mod user;

pub use line::*;
pub use user::*;
