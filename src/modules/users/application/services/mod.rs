pub mod get_user_service;
pub mod list_users_service;
pub mod register_user_service;
pub mod update_profile_service;

pub use get_user_service::{GetUserService, GetUserWithEnrollmentsService};
pub use list_users_service::ListUsersService;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateProfileService;
