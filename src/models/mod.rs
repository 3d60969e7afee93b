pub mod aerich;
pub mod line_login;
pub mod line_notify;
pub mod line_notify_record;
pub mod user;

#[allow(unused_imports)]
pub mod prelude {
    pub use super::aerich::{self, Entity as Aerich};
    pub use super::line_login::{self, Entity as LineLogin};
    pub use super::line_notify::{self, Entity as LineNotify};
    pub use super::line_notify_record::{self, Entity as LineNotifyRecord};
    pub use super::user::{self, Entity as User};
}
