use crate::auth::application::domain::entities::Actor;
use crate::courses::application::domain::entities::Seats;

/// Why an enrollment request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentRejection {
    #[error("Only students can enroll")]
    OnlyStudents,

    #[error("Cannot enroll in inactive course")]
    CourseInactive,

    #[error("Already enrolled")]
    AlreadyEnrolled,

    #[error("Course is at full capacity")]
    CourseFull,
}

/// State of the target course as seen under the row lock.
#[derive(Debug, Clone, Copy)]
pub struct CourseAdmission {
    pub is_active: bool,
    pub seats: Seats,
    pub already_enrolled: bool,
}

pub struct EnrollmentPolicy;

impl EnrollmentPolicy {
    pub fn ensure_can_enroll(actor: &Actor) -> Result<(), EnrollmentRejection> {
        if actor.is_student() {
            Ok(())
        } else {
            Err(EnrollmentRejection::OnlyStudents)
        }
    }

    /// Checks run in order: inactive, duplicate, full.
    pub fn admit(course: &CourseAdmission) -> Result<(), EnrollmentRejection> {
        if !course.is_active {
            return Err(EnrollmentRejection::CourseInactive);
        }
        if course.already_enrolled {
            return Err(EnrollmentRejection::AlreadyEnrolled);
        }
        if course.seats.is_full() {
            return Err(EnrollmentRejection::CourseFull);
        }
        Ok(())
    }

    pub fn can_deregister(actor: &Actor, owner_id: i32) -> bool {
        actor.is_admin() || actor.user_id == owner_id
    }
}
