pub mod create_course;
pub mod get_course;
pub mod list_courses;
pub mod set_course_status;
pub mod update_course;

pub use create_course::{
    CourseFieldError, CreateCourseCommand, CreateCourseError, CreateCourseUseCase,
};
pub use get_course::{GetCourseError, GetCourseUseCase, GetCourseWithStudentsUseCase};
pub use list_courses::{ListCoursesError, ListCoursesUseCase};
pub use set_course_status::{SetCourseStatusError, SetCourseStatusUseCase};
pub use update_course::{UpdateCourseCommand, UpdateCourseError, UpdateCourseUseCase};
