use async_trait::async_trait;

use super::create_course::{validate_capacity, validate_code, validate_title, CourseFieldError};
use crate::courses::application::ports::outgoing::{CourseView, UpdateCourseData};

#[derive(Debug, Clone)]
pub struct UpdateCourseCommand {
    course_id: i32,
    changes: UpdateCourseData,
}

impl UpdateCourseCommand {
    pub fn new(
        course_id: i32,
        title: Option<String>,
        code: Option<String>,
        capacity: Option<i64>,
        is_active: Option<bool>,
    ) -> Result<Self, Vec<CourseFieldError>> {
        let mut errors = Vec::new();

        let title = title
            .map(|t| validate_title(&t))
            .transpose()
            .map_err(|e| errors.push(e))
            .unwrap_or(None);
        let code = code
            .map(|c| validate_code(&c))
            .transpose()
            .map_err(|e| errors.push(e))
            .unwrap_or(None);
        let capacity = capacity
            .map(validate_capacity)
            .transpose()
            .map_err(|e| errors.push(e))
            .unwrap_or(None);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            course_id,
            changes: UpdateCourseData {
                title,
                code,
                capacity,
                is_active,
            },
        })
    }

    pub fn course_id(&self) -> i32 {
        self.course_id
    }

    pub fn changes(&self) -> &UpdateCourseData {
        &self.changes
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Course code already exists")]
    CodeAlreadyExists,

    #[error("Capacity cannot be lower than current enrollment count")]
    CapacityBelowEnrollment,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCourseUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCourseCommand) -> Result<CourseView, UpdateCourseError>;
}
