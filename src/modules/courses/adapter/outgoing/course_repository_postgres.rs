use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QuerySelect, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::courses::application::domain::entities::Seats;
use crate::courses::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError, CourseView, CreateCourseData, UpdateCourseData,
};
use crate::shared::db::is_unique_violation;

use super::course_query_postgres::count_enrolled;
use super::sea_orm_entity::{ActiveModel as CourseActiveModel, Entity as CourseEntity};

#[derive(Debug, Clone)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> CourseRepositoryError {
    CourseRepositoryError::DatabaseError(e.to_string())
}

fn write_err(e: DbErr) -> CourseRepositoryError {
    if is_unique_violation(&e) {
        CourseRepositoryError::CodeAlreadyExists
    } else {
        db_err(e)
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create_course(
        &self,
        data: CreateCourseData,
    ) -> Result<CourseView, CourseRepositoryError> {
        let active = CourseActiveModel {
            title: Set(data.title),
            code: Set(data.code),
            capacity: Set(data.capacity),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(write_err)?;
        Ok(inserted.to_view(0))
    }

    async fn update_course(
        &self,
        course_id: i32,
        data: UpdateCourseData,
    ) -> Result<CourseView, CourseRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        // Row lock keeps concurrent enrollments out until the capacity check commits
        let existing = CourseEntity::find_by_id(course_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(CourseRepositoryError::CourseNotFound)?;

        let enrolled = count_enrolled(&txn, course_id).await.map_err(db_err)?;

        if let Some(capacity) = data.capacity {
            if !Seats::fits(capacity, enrolled) {
                warn!(course_id, capacity, enrolled, "Capacity below enrollment count");
                return Err(CourseRepositoryError::CapacityBelowEnrollment);
            }
        }

        let model = if data == UpdateCourseData::default() {
            existing
        } else {
            let mut active = existing.into_active_model();
            if let Some(title) = data.title {
                active.title = Set(title);
            }
            if let Some(code) = data.code {
                active.code = Set(code);
            }
            if let Some(capacity) = data.capacity {
                active.capacity = Set(capacity);
            }
            if let Some(is_active) = data.is_active {
                active.is_active = Set(is_active);
            }
            active.update(&txn).await.map_err(write_err)?
        };

        txn.commit().await.map_err(db_err)?;

        Ok(model.to_view(enrolled))
    }

    async fn set_active(
        &self,
        course_id: i32,
        is_active: bool,
    ) -> Result<CourseView, CourseRepositoryError> {
        let existing = CourseEntity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(CourseRepositoryError::CourseNotFound)?;

        let model = if existing.is_active == is_active {
            existing
        } else {
            let mut active = existing.into_active_model();
            active.is_active = Set(is_active);
            active.update(&*self.db).await.map_err(db_err)?
        };

        let enrolled = count_enrolled(&*self.db, course_id)
            .await
            .map_err(db_err)?;

        Ok(model.to_view(enrolled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::adapter::outgoing::sea_orm_entity::Model as CourseModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr, Value};
    use std::collections::BTreeMap;

    fn course_model(id: i32, capacity: i32, is_active: bool) -> CourseModel {
        let now = Utc::now().fixed_offset();
        CourseModel {
            id,
            title: "Databases".to_string(),
            code: "CS305".to_string(),
            capacity,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        let mut row = BTreeMap::new();
        row.insert("num_items".to_string(), Value::BigInt(Some(n)));
        row
    }

    #[tokio::test]
    async fn create_course_starts_empty_and_active() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(1, 30, true)]])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let course = repo
            .create_course(CreateCourseData {
                title: "Databases".to_string(),
                code: "CS305".to_string(),
                capacity: 30,
            })
            .await
            .unwrap();

        assert_eq!(course.enrolled_count, 0);
        assert!(course.is_active);
    }

    #[tokio::test]
    async fn create_course_duplicate_code() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"courses_code_key\"".into(),
            ))])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_course(CreateCourseData {
                title: "Databases".to_string(),
                code: "CS305".to_string(),
                capacity: 30,
            })
            .await;

        assert!(matches!(result, Err(CourseRepositoryError::CodeAlreadyExists)));
    }

    #[tokio::test]
    async fn update_rejects_capacity_below_enrollment() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(1, 10, true)]])
            .append_query_results(vec![vec![count_row(5)]])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_course(
                1,
                UpdateCourseData {
                    capacity: Some(4),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(CourseRepositoryError::CapacityBelowEnrollment)
        ));
    }

    #[tokio::test]
    async fn update_applies_changes_inside_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(1, 10, true)]])
            .append_query_results(vec![vec![count_row(5)]])
            .append_query_results(vec![vec![course_model(1, 5, true)]])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let course = repo
            .update_course(
                1,
                UpdateCourseData {
                    capacity: Some(5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(course.capacity, 5);
        assert_eq!(course.enrolled_count, 5);
        assert!(course.is_full);
    }

    #[tokio::test]
    async fn update_missing_course_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CourseModel>::new()])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let result = repo.update_course(9, UpdateCourseData::default()).await;

        assert!(matches!(result, Err(CourseRepositoryError::CourseNotFound)));
    }

    #[tokio::test]
    async fn set_active_updates_flag() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(1, 10, true)]])
            .append_query_results(vec![vec![course_model(1, 10, false)]])
            .append_query_results(vec![vec![count_row(3)]])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let course = repo.set_active(1, false).await.unwrap();

        assert!(!course.is_active);
        assert_eq!(course.enrolled_count, 3);
    }

    #[tokio::test]
    async fn set_active_same_flag_skips_write() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(1, 10, true)]])
            .append_query_results(vec![vec![count_row(0)]])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let course = repo.set_active(1, true).await.unwrap();

        assert!(course.is_active);
    }
}
