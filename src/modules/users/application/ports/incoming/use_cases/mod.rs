pub mod get_user;
pub mod list_users;
pub mod register_user;
pub mod update_profile;

pub use get_user::{GetUserError, GetUserUseCase, GetUserWithEnrollmentsUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
};

pub const MAX_NAME_LEN: usize = 100;
