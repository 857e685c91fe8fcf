use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::courses::adapter::outgoing::course_query_postgres::count_enrolled;
use crate::courses::adapter::outgoing::sea_orm_entity::Entity as CourseEntity;
use crate::courses::application::domain::entities::Seats;
use crate::enrollments::application::domain::policy::{
    CourseAdmission, EnrollmentPolicy, EnrollmentRejection,
};
use crate::enrollments::application::ports::outgoing::{
    EnrollmentRecord, EnrollmentRepository, EnrollmentRepositoryError,
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::{
    ActiveModel as EnrollmentActiveModel, Column, Entity as EnrollmentEntity,
};

#[derive(Debug, Clone)]
pub struct EnrollmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EnrollmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> EnrollmentRepositoryError {
    EnrollmentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryPostgres {
    async fn enroll(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<EnrollmentRecord, EnrollmentRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        // SELECT ... FOR UPDATE serialises concurrent enrollments per course
        let course = CourseEntity::find_by_id(course_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(EnrollmentRepositoryError::CourseNotFound)?;

        let already_enrolled = EnrollmentEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .count(&txn)
            .await
            .map_err(db_err)?
            > 0;

        let enrolled = count_enrolled(&txn, course_id).await.map_err(db_err)?;

        EnrollmentPolicy::admit(&CourseAdmission {
            is_active: course.is_active,
            seats: Seats::new(course.capacity, enrolled),
            already_enrolled,
        })
        .map_err(EnrollmentRepositoryError::Rejected)?;

        let inserted = EnrollmentActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                EnrollmentRepositoryError::Rejected(EnrollmentRejection::AlreadyEnrolled)
            } else {
                db_err(e)
            }
        })?;

        txn.commit().await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn delete(&self, enrollment_id: i32) -> Result<(), EnrollmentRepositoryError> {
        let result = EnrollmentEntity::delete_by_id(enrollment_id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(EnrollmentRepositoryError::EnrollmentNotFound);
        }

        Ok(())
    }
}
