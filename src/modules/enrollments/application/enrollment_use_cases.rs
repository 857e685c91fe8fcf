use std::sync::Arc;

use crate::enrollments::application::ports::incoming::use_cases::{
    DeregisterFromCourseUseCase, DeregisterUseCase, EnrollUseCase, ListCourseEnrollmentsUseCase,
    ListEnrollmentsUseCase, ListMyEnrollmentsUseCase,
};

#[derive(Clone)]
pub struct EnrollmentUseCases {
    pub enroll: Arc<dyn EnrollUseCase + Send + Sync>,
    pub deregister: Arc<dyn DeregisterUseCase + Send + Sync>,
    pub deregister_from_course: Arc<dyn DeregisterFromCourseUseCase + Send + Sync>,
    pub my_enrollments: Arc<dyn ListMyEnrollmentsUseCase + Send + Sync>,
    pub list: Arc<dyn ListEnrollmentsUseCase + Send + Sync>,
    pub course_enrollments: Arc<dyn ListCourseEnrollmentsUseCase + Send + Sync>,
}
