use async_trait::async_trait;

use crate::courses::application::domain::entities::{MAX_CODE_LEN, MAX_TITLE_LEN};
use crate::courses::application::ports::outgoing::{CourseView, CreateCourseData};

/// Field-level validation failures shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseFieldError {
    #[error("title: must be between 1 and 200 characters")]
    InvalidTitle,

    #[error("code: must be between 1 and 20 characters")]
    InvalidCode,

    #[error("capacity: must be greater than 0")]
    InvalidCapacity,
}

pub(crate) fn validate_title(raw: &str) -> Result<String, CourseFieldError> {
    let title = raw.trim();
    let len = title.chars().count();
    if len == 0 || len > MAX_TITLE_LEN {
        return Err(CourseFieldError::InvalidTitle);
    }
    Ok(title.to_string())
}

pub(crate) fn validate_code(raw: &str) -> Result<String, CourseFieldError> {
    let code = raw.trim();
    let len = code.chars().count();
    if len == 0 || len > MAX_CODE_LEN {
        return Err(CourseFieldError::InvalidCode);
    }
    Ok(code.to_string())
}

pub(crate) fn validate_capacity(raw: i64) -> Result<i32, CourseFieldError> {
    match i32::try_from(raw) {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(CourseFieldError::InvalidCapacity),
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    data: CreateCourseData,
}

impl CreateCourseCommand {
    pub fn new(title: String, code: String, capacity: i64) -> Result<Self, Vec<CourseFieldError>> {
        let mut errors = Vec::new();

        let title = validate_title(&title).map_err(|e| errors.push(e)).ok();
        let code = validate_code(&code).map_err(|e| errors.push(e)).ok();
        let capacity = validate_capacity(capacity).map_err(|e| errors.push(e)).ok();

        match (title, code, capacity) {
            (Some(title), Some(code), Some(capacity)) => Ok(Self {
                data: CreateCourseData {
                    title,
                    code,
                    capacity,
                },
            }),
            _ => Err(errors),
        }
    }

    pub fn data(&self) -> &CreateCourseData {
        &self.data
    }

    pub fn into_data(self) -> CreateCourseData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCourseError {
    #[error("Course code already exists")]
    CodeAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(&self, command: CreateCourseCommand) -> Result<CourseView, CreateCourseError>;
}
