pub mod login_user_service;
pub mod password;

pub use login_user_service::LoginUserService;
