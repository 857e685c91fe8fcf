pub mod login_user;

pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginOutput, LoginUserUseCase};
