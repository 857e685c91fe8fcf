use async_trait::async_trait;

use crate::courses::application::ports::{
    incoming::use_cases::{GetCourseError, GetCourseUseCase, GetCourseWithStudentsUseCase},
    outgoing::{CourseQuery, CourseView, CourseWithStudents},
};

#[derive(Debug, Clone)]
pub struct GetCourseService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCourseService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCourseUseCase for GetCourseService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(&self, course_id: i32) -> Result<CourseView, GetCourseError> {
        self.query
            .find_by_id(course_id)
            .await
            .map_err(|e| GetCourseError::QueryError(e.to_string()))?
            .ok_or(GetCourseError::NotFound)
    }
}

#[derive(Debug, Clone)]
pub struct GetCourseWithStudentsService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCourseWithStudentsService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCourseWithStudentsUseCase for GetCourseWithStudentsService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(&self, course_id: i32) -> Result<CourseWithStudents, GetCourseError> {
        let course = self
            .query
            .find_by_id(course_id)
            .await
            .map_err(|e| GetCourseError::QueryError(e.to_string()))?
            .ok_or(GetCourseError::NotFound)?;

        let enrollments = self
            .query
            .find_enrolled_students(course_id)
            .await
            .map_err(|e| GetCourseError::QueryError(e.to_string()))?;

        Ok(CourseWithStudents {
            course,
            enrollments,
        })
    }
}
