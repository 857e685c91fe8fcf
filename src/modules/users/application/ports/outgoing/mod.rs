pub mod user_query;
pub mod user_repository;

pub use user_query::{
    EnrolledCourseItem, UserCredentials, UserListFilter, UserQuery, UserQueryError,
    UserWithEnrollments, UserView,
};
pub use user_repository::{CreateUserData, UpdateUserData, UserRepository, UserRepositoryError};
