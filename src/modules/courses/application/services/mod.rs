pub mod create_course_service;
pub mod get_course_service;
pub mod list_courses_service;
pub mod set_course_status_service;
pub mod update_course_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_course_service::CreateCourseService;
pub use get_course_service::{GetCourseService, GetCourseWithStudentsService};
pub use list_courses_service::ListCoursesService;
pub use set_course_status_service::SetCourseStatusService;
pub use update_course_service::UpdateCourseService;
