pub mod course_query;
pub mod course_repository;

pub use course_query::{
    CourseListFilter, CourseQuery, CourseQueryError, CourseView, CourseWithStudents,
    EnrolledStudentItem,
};
pub use course_repository::{
    CourseRepository, CourseRepositoryError, CreateCourseData, UpdateCourseData,
};
