use std::sync::Arc;

use crate::courses::application::ports::incoming::use_cases::{
    CreateCourseUseCase, GetCourseUseCase, GetCourseWithStudentsUseCase, ListCoursesUseCase,
    SetCourseStatusUseCase, UpdateCourseUseCase,
};

#[derive(Clone)]
pub struct CourseUseCases {
    pub list: Arc<dyn ListCoursesUseCase + Send + Sync>,
    pub get: Arc<dyn GetCourseUseCase + Send + Sync>,
    pub get_with_students: Arc<dyn GetCourseWithStudentsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCourseUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCourseUseCase + Send + Sync>,
    pub set_status: Arc<dyn SetCourseStatusUseCase + Send + Sync>,
}
