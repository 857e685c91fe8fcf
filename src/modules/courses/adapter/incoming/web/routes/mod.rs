pub mod course_status;
pub mod get_courses;
pub mod manage_course;

pub use course_status::*;
pub use get_courses::*;
pub use manage_course::*;
