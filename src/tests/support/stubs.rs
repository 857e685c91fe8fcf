use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginOutput, LoginUserUseCase,
};
use crate::courses::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError, CreateCourseUseCase, GetCourseError, GetCourseUseCase,
    GetCourseWithStudentsUseCase, ListCoursesError, ListCoursesUseCase, SetCourseStatusError,
    SetCourseStatusUseCase, UpdateCourseCommand, UpdateCourseError, UpdateCourseUseCase,
};
use crate::courses::application::ports::outgoing::{
    CourseListFilter, CourseView, CourseWithStudents,
};
use crate::enrollments::application::ports::incoming::use_cases::{
    DeregisterError, DeregisterFromCourseUseCase, DeregisterUseCase, EnrollError, EnrollUseCase,
    ListCourseEnrollmentsUseCase, ListEnrollmentsError, ListEnrollmentsUseCase,
    ListMyEnrollmentsUseCase,
};
use crate::enrollments::application::ports::outgoing::{
    EnrollmentCourseItem, EnrollmentDetails, EnrollmentListFilter, EnrollmentUserItem,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::application::domain::entities::UserRole;
use crate::users::application::ports::incoming::use_cases::{
    GetUserError, GetUserWithEnrollmentsUseCase, ListUsersError, ListUsersUseCase,
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, UpdateProfileCommand,
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::users::application::ports::outgoing::{UserListFilter, UserView, UserWithEnrollments};

pub fn sample_course(id: i32, capacity: i32, enrolled: u64) -> CourseView {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    CourseView::new(
        id,
        format!("Course {}", id),
        format!("CS{:03}", id),
        capacity,
        true,
        enrolled,
        at,
        at,
    )
}

pub fn sample_enrollment(id: i32, user_id: i32, course_id: i32) -> EnrollmentDetails {
    let at = Utc.with_ymd_and_hms(2025, 3, 2, 10, 30, 0).unwrap();
    EnrollmentDetails {
        id,
        user_id,
        course_id,
        created_at: at,
        updated_at: at,
        user: EnrollmentUserItem {
            id: user_id,
            name: format!("Student {}", user_id),
            email: format!("student{}@example.com", user_id),
            role: UserRole::Student,
        },
        course: EnrollmentCourseItem {
            id: course_id,
            title: format!("Course {}", course_id),
            code: format!("CS{:03}", course_id),
            capacity: 30,
            is_active: true,
        },
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginOutput, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<UserView, RegisterUserError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserWithEnrollmentsUseCase;

#[async_trait]
impl GetUserWithEnrollmentsUseCase for StubGetUserWithEnrollmentsUseCase {
    async fn execute(&self, _user_id: i32) -> Result<UserWithEnrollments, GetUserError> {
        Err(GetUserError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UserView, UpdateProfileError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(
        &self,
        _filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserView>, ListUsersError> {
        Ok(PageResult::new(vec![], 0, page))
    }
}

#[derive(Default, Clone)]
pub struct StubListCoursesUseCase;

#[async_trait]
impl ListCoursesUseCase for StubListCoursesUseCase {
    async fn execute(
        &self,
        _filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, ListCoursesError> {
        Ok(PageResult::new(vec![], 0, page))
    }
}

#[derive(Default, Clone)]
pub struct StubGetCourseUseCase;

#[async_trait]
impl GetCourseUseCase for StubGetCourseUseCase {
    async fn execute(&self, _course_id: i32) -> Result<CourseView, GetCourseError> {
        Err(GetCourseError::NotFound)
    }
}

#[async_trait]
impl GetCourseWithStudentsUseCase for StubGetCourseUseCase {
    async fn execute(&self, _course_id: i32) -> Result<CourseWithStudents, GetCourseError> {
        Err(GetCourseError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubManageCourseUseCase;

#[async_trait]
impl CreateCourseUseCase for StubManageCourseUseCase {
    async fn execute(&self, _command: CreateCourseCommand) -> Result<CourseView, CreateCourseError> {
        unimplemented!("not used in this test")
    }
}

#[async_trait]
impl UpdateCourseUseCase for StubManageCourseUseCase {
    async fn execute(&self, _command: UpdateCourseCommand) -> Result<CourseView, UpdateCourseError> {
        unimplemented!("not used in this test")
    }
}

#[async_trait]
impl SetCourseStatusUseCase for StubManageCourseUseCase {
    async fn execute(
        &self,
        _course_id: i32,
        _is_active: bool,
    ) -> Result<CourseView, SetCourseStatusError> {
        Err(SetCourseStatusError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubEnrollUseCase;

#[async_trait]
impl EnrollUseCase for StubEnrollUseCase {
    async fn execute(&self, _actor: Actor, _course_id: i32) -> Result<EnrollmentDetails, EnrollError> {
        Err(EnrollError::CourseNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeregisterUseCase;

#[async_trait]
impl DeregisterUseCase for StubDeregisterUseCase {
    async fn execute(&self, _actor: Actor, _enrollment_id: i32) -> Result<(), DeregisterError> {
        Err(DeregisterError::EnrollmentNotFound)
    }
}

#[async_trait]
impl DeregisterFromCourseUseCase for StubDeregisterUseCase {
    async fn execute(&self, _actor: Actor, _course_id: i32) -> Result<(), DeregisterError> {
        Err(DeregisterError::NotEnrolled)
    }
}

#[derive(Default, Clone)]
pub struct StubListEnrollmentsUseCase;

#[async_trait]
impl ListMyEnrollmentsUseCase for StubListEnrollmentsUseCase {
    async fn execute(&self, _user_id: i32) -> Result<Vec<EnrollmentDetails>, ListEnrollmentsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl ListEnrollmentsUseCase for StubListEnrollmentsUseCase {
    async fn execute(
        &self,
        _filter: EnrollmentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<EnrollmentDetails>, ListEnrollmentsError> {
        Ok(PageResult::new(vec![], 0, page))
    }
}

#[async_trait]
impl ListCourseEnrollmentsUseCase for StubListEnrollmentsUseCase {
    async fn execute(
        &self,
        _course_id: i32,
    ) -> Result<Vec<EnrollmentDetails>, ListEnrollmentsError> {
        Err(ListEnrollmentsError::CourseNotFound)
    }
}
