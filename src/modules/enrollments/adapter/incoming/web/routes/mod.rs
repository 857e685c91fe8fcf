pub mod deregister;
pub mod enroll;
pub mod list_enrollments;

pub use deregister::*;
pub use enroll::*;
pub use list_enrollments::*;
