use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
use crate::auth::application::services::password::StrengthPasswordPolicy;
use crate::courses::application::course_use_cases::CourseUseCases;
use crate::courses::application::ports::incoming::use_cases::{
    CreateCourseUseCase, GetCourseUseCase, GetCourseWithStudentsUseCase, ListCoursesUseCase,
    SetCourseStatusUseCase, UpdateCourseUseCase,
};
use crate::enrollments::application::enrollment_use_cases::EnrollmentUseCases;
use crate::enrollments::application::ports::incoming::use_cases::{
    DeregisterFromCourseUseCase, DeregisterUseCase, EnrollUseCase, ListCourseEnrollmentsUseCase,
    ListEnrollmentsUseCase, ListMyEnrollmentsUseCase,
};
use crate::tests::support::auth_helper::StubGetUserUseCase;
use crate::tests::support::stubs::*;
use crate::users::application::ports::incoming::use_cases::{
    GetUserUseCase, GetUserWithEnrollmentsUseCase, ListUsersUseCase, RegisterUserUseCase,
    UpdateProfileUseCase,
};
use crate::users::application::user_use_cases::UserUseCases;
use crate::AppState;

/// Builds an [`AppState`] where every use case is a stub unless replaced.
pub struct TestAppStateBuilder {
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    users: UserUseCases,
    courses: CourseUseCases,
    enrollments: EnrollmentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Arc::new(StubLoginUserUseCase),
            users: UserUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                get: Arc::new(StubGetUserUseCase::not_found()),
                get_with_enrollments: Arc::new(StubGetUserWithEnrollmentsUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
                list: Arc::new(StubListUsersUseCase),
            },
            courses: CourseUseCases {
                list: Arc::new(StubListCoursesUseCase),
                get: Arc::new(StubGetCourseUseCase),
                get_with_students: Arc::new(StubGetCourseUseCase),
                create: Arc::new(StubManageCourseUseCase),
                update: Arc::new(StubManageCourseUseCase),
                set_status: Arc::new(StubManageCourseUseCase),
            },
            enrollments: EnrollmentUseCases {
                enroll: Arc::new(StubEnrollUseCase),
                deregister: Arc::new(StubDeregisterUseCase),
                deregister_from_course: Arc::new(StubDeregisterUseCase),
                my_enrollments: Arc::new(StubListEnrollmentsUseCase),
                list: Arc::new(StubListEnrollmentsUseCase),
                course_enrollments: Arc::new(StubListEnrollmentsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.users.register = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + 'static) -> Self {
        self.users.get = Arc::new(uc);
        self
    }

    pub fn with_get_user_with_enrollments(
        mut self,
        uc: impl GetUserWithEnrollmentsUseCase + 'static,
    ) -> Self {
        self.users.get_with_enrollments = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.users.update_profile = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + 'static) -> Self {
        self.users.list = Arc::new(uc);
        self
    }

    pub fn with_list_courses(mut self, uc: impl ListCoursesUseCase + 'static) -> Self {
        self.courses.list = Arc::new(uc);
        self
    }

    pub fn with_get_course(mut self, uc: impl GetCourseUseCase + 'static) -> Self {
        self.courses.get = Arc::new(uc);
        self
    }

    pub fn with_get_course_with_students(
        mut self,
        uc: impl GetCourseWithStudentsUseCase + 'static,
    ) -> Self {
        self.courses.get_with_students = Arc::new(uc);
        self
    }

    pub fn with_create_course(mut self, uc: impl CreateCourseUseCase + 'static) -> Self {
        self.courses.create = Arc::new(uc);
        self
    }

    pub fn with_update_course(mut self, uc: impl UpdateCourseUseCase + 'static) -> Self {
        self.courses.update = Arc::new(uc);
        self
    }

    pub fn with_set_course_status(mut self, uc: impl SetCourseStatusUseCase + 'static) -> Self {
        self.courses.set_status = Arc::new(uc);
        self
    }

    pub fn with_enroll(mut self, uc: impl EnrollUseCase + 'static) -> Self {
        self.enrollments.enroll = Arc::new(uc);
        self
    }

    pub fn with_deregister(mut self, uc: impl DeregisterUseCase + 'static) -> Self {
        self.enrollments.deregister = Arc::new(uc);
        self
    }

    pub fn with_deregister_from_course(
        mut self,
        uc: impl DeregisterFromCourseUseCase + 'static,
    ) -> Self {
        self.enrollments.deregister_from_course = Arc::new(uc);
        self
    }

    pub fn with_my_enrollments(mut self, uc: impl ListMyEnrollmentsUseCase + 'static) -> Self {
        self.enrollments.my_enrollments = Arc::new(uc);
        self
    }

    pub fn with_list_enrollments(mut self, uc: impl ListEnrollmentsUseCase + 'static) -> Self {
        self.enrollments.list = Arc::new(uc);
        self
    }

    pub fn with_course_enrollments(
        mut self,
        uc: impl ListCourseEnrollmentsUseCase + 'static,
    ) -> Self {
        self.enrollments.course_enrollments = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_user_use_case: self.login_user,
            password_policy: Arc::new(StrengthPasswordPolicy),
            users: self.users,
            courses: self.courses,
            enrollments: self.enrollments,
        })
    }
}
