use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use crate::courses::application::ports::outgoing::{
    CourseListFilter, CourseQuery, CourseQueryError, CourseRepository, CourseRepositoryError,
    CourseView, CreateCourseData, EnrolledStudentItem, UpdateCourseData,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn course_view(id: i32, code: &str, capacity: i32, enrolled: u64) -> CourseView {
    let now = Utc::now();
    CourseView::new(
        id,
        "Distributed Systems".to_string(),
        code.to_string(),
        capacity,
        true,
        enrolled,
        now,
        now,
    )
}

#[derive(Clone, Default)]
pub struct StubCourseQuery {
    pub course: Option<CourseView>,
    pub students: Vec<EnrolledStudentItem>,
    pub code_taken: bool,
    pub fail: bool,
    pub seen_exclude: Arc<Mutex<Option<Option<i32>>>>,
}

impl StubCourseQuery {
    fn check(&self) -> Result<(), CourseQueryError> {
        if self.fail {
            return Err(CourseQueryError::DatabaseError("connection reset".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CourseQuery for StubCourseQuery {
    async fn find_by_id(&self, _id: i32) -> Result<Option<CourseView>, CourseQueryError> {
        self.check()?;
        Ok(self.course.clone())
    }

    async fn list(
        &self,
        _filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, CourseQueryError> {
        self.check()?;
        let items: Vec<CourseView> = self.course.clone().into_iter().collect();
        let total = items.len() as u64;
        Ok(PageResult::new(items, total, page))
    }

    async fn find_enrolled_students(
        &self,
        _course_id: i32,
    ) -> Result<Vec<EnrolledStudentItem>, CourseQueryError> {
        self.check()?;
        Ok(self.students.clone())
    }

    async fn code_exists(
        &self,
        _code: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, CourseQueryError> {
        self.check()?;
        *self.seen_exclude.lock().unwrap() = Some(exclude_id);
        Ok(self.code_taken)
    }
}

pub struct StubCourseRepository {
    pub result: Result<CourseView, CourseRepositoryError>,
    pub seen_update: Arc<Mutex<Option<UpdateCourseData>>>,
}

impl StubCourseRepository {
    pub fn returning(result: Result<CourseView, CourseRepositoryError>) -> Self {
        Self {
            result,
            seen_update: Arc::default(),
        }
    }
}

#[async_trait]
impl CourseRepository for StubCourseRepository {
    async fn create_course(
        &self,
        _data: CreateCourseData,
    ) -> Result<CourseView, CourseRepositoryError> {
        self.result.clone()
    }

    async fn update_course(
        &self,
        _course_id: i32,
        data: UpdateCourseData,
    ) -> Result<CourseView, CourseRepositoryError> {
        *self.seen_update.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn set_active(
        &self,
        _course_id: i32,
        _is_active: bool,
    ) -> Result<CourseView, CourseRepositoryError> {
        self.result.clone()
    }
}
