use std::sync::Arc;

use crate::users::application::ports::incoming::use_cases::{
    GetUserUseCase, GetUserWithEnrollmentsUseCase, ListUsersUseCase, RegisterUserUseCase,
    UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub get_with_enrollments: Arc<dyn GetUserWithEnrollmentsUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
}
