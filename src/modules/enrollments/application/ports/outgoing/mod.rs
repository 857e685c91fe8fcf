pub mod enrollment_query;
pub mod enrollment_repository;

pub use enrollment_query::{
    EnrollmentCourseItem, EnrollmentDetails, EnrollmentListFilter, EnrollmentQuery,
    EnrollmentQueryError, EnrollmentRecord, EnrollmentUserItem,
};
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError};
