pub mod deregister;
pub mod enroll;
pub mod list_enrollments;

pub use deregister::{DeregisterError, DeregisterFromCourseUseCase, DeregisterUseCase};
pub use enroll::{EnrollError, EnrollUseCase};
pub use list_enrollments::{
    ListCourseEnrollmentsUseCase, ListEnrollmentsError, ListEnrollmentsUseCase,
    ListMyEnrollmentsUseCase,
};
