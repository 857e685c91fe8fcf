use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::enrollments::application::ports::outgoing::{
    EnrollmentCourseItem, EnrollmentDetails, EnrollmentListFilter, EnrollmentQuery,
    EnrollmentQueryError, EnrollmentRecord, EnrollmentRepository, EnrollmentRepositoryError,
    EnrollmentUserItem,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::application::domain::entities::UserRole;

mock! {
    pub Repository {}

    #[async_trait]
    impl EnrollmentRepository for Repository {
        async fn enroll(
            &self,
            user_id: i32,
            course_id: i32,
        ) -> Result<EnrollmentRecord, EnrollmentRepositoryError>;

        async fn delete(&self, enrollment_id: i32) -> Result<(), EnrollmentRepositoryError>;
    }
}

pub fn details(id: i32, user_id: i32, course_id: i32) -> EnrollmentDetails {
    let now = Utc::now();
    EnrollmentDetails {
        id,
        user_id,
        course_id,
        created_at: now,
        updated_at: now,
        user: EnrollmentUserItem {
            id: user_id,
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            role: UserRole::Student,
        },
        course: EnrollmentCourseItem {
            id: course_id,
            title: "Compilers".to_string(),
            code: "CS420".to_string(),
            capacity: 20,
            is_active: true,
        },
    }
}

#[derive(Clone, Default)]
pub struct StubEnrollmentQuery {
    pub records: Vec<EnrollmentRecord>,
    pub course_exists: bool,
    pub fail: bool,
}

impl StubEnrollmentQuery {
    fn check(&self) -> Result<(), EnrollmentQueryError> {
        if self.fail {
            return Err(EnrollmentQueryError::DatabaseError("pool timed out".into()));
        }
        Ok(())
    }

    fn matching(&self, filter: EnrollmentListFilter) -> Vec<EnrollmentDetails> {
        self.records
            .iter()
            .filter(|r| filter.user_id.map_or(true, |id| r.user_id == id))
            .filter(|r| filter.course_id.map_or(true, |id| r.course_id == id))
            .map(|r| details(r.id, r.user_id, r.course_id))
            .collect()
    }
}

#[async_trait]
impl EnrollmentQuery for StubEnrollmentQuery {
    async fn find_by_id(&self, id: i32) -> Result<Option<EnrollmentRecord>, EnrollmentQueryError> {
        self.check()?;
        Ok(self.records.iter().find(|r| r.id == id).copied())
    }

    async fn find_by_user_and_course(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<EnrollmentRecord>, EnrollmentQueryError> {
        self.check()?;
        Ok(self
            .records
            .iter()
            .find(|r| r.user_id == user_id && r.course_id == course_id)
            .copied())
    }

    async fn find_details(
        &self,
        id: i32,
    ) -> Result<Option<EnrollmentDetails>, EnrollmentQueryError> {
        self.check()?;
        Ok(self
            .records
            .iter()
            .find(|r| r.id == id)
            .map(|r| details(r.id, r.user_id, r.course_id)))
    }

    async fn list_details(
        &self,
        filter: EnrollmentListFilter,
    ) -> Result<Vec<EnrollmentDetails>, EnrollmentQueryError> {
        self.check()?;
        Ok(self.matching(filter))
    }

    async fn page_details(
        &self,
        filter: EnrollmentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<EnrollmentDetails>, EnrollmentQueryError> {
        self.check()?;
        let items = self.matching(filter);
        let total = items.len() as u64;
        Ok(PageResult::new(items, total, page))
    }

    async fn course_exists(&self, _course_id: i32) -> Result<bool, EnrollmentQueryError> {
        self.check()?;
        Ok(self.course_exists)
    }
}
