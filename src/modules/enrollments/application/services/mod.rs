pub mod deregister_service;
pub mod enroll_service;
pub mod list_enrollments_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use deregister_service::{DeregisterFromCourseService, DeregisterService};
pub use enroll_service::EnrollService;
pub use list_enrollments_service::{
    ListCourseEnrollmentsService, ListEnrollmentsService, ListMyEnrollmentsService,
};
