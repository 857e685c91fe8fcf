pub mod get_users;
pub mod profile;
pub mod register_user;

pub use get_users::*;
pub use profile::*;
pub use register_user::*;
