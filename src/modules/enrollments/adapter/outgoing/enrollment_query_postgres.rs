use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::courses::adapter::outgoing::sea_orm_entity::{
    Column as CourseColumn, Entity as CourseEntity,
};
use crate::enrollments::application::ports::outgoing::{
    EnrollmentCourseItem, EnrollmentDetails, EnrollmentListFilter, EnrollmentQuery,
    EnrollmentQueryError, EnrollmentRecord, EnrollmentUserItem,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::adapter::outgoing::sea_orm_entity::{Column as UserColumn, Entity as UserEntity};

use super::sea_orm_entity::{Column, Entity as EnrollmentEntity, Model as EnrollmentModel};

#[derive(Debug, Clone)]
pub struct EnrollmentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EnrollmentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> EnrollmentQueryError {
    EnrollmentQueryError::DatabaseError(e.to_string())
}

fn list_condition(filter: EnrollmentListFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(user_id) = filter.user_id {
        condition = condition.add(Column::UserId.eq(user_id));
    }
    if let Some(course_id) = filter.course_id {
        condition = condition.add(Column::CourseId.eq(course_id));
    }
    condition
}

fn unique_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Attaches user and course summaries with one query per table.
async fn load_details<C>(
    db: &C,
    rows: Vec<EnrollmentModel>,
) -> Result<Vec<EnrollmentDetails>, DbErr>
where
    C: ConnectionTrait,
{
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let users: HashMap<i32, EnrollmentUserItem> = UserEntity::find()
        .filter(UserColumn::Id.is_in(unique_ids(rows.iter().map(|r| r.user_id))))
        .all(db)
        .await?
        .into_iter()
        .map(|u| {
            (
                u.id,
                EnrollmentUserItem {
                    id: u.id,
                    name: u.name,
                    email: u.email,
                    role: u.role.into(),
                },
            )
        })
        .collect();

    let courses: HashMap<i32, EnrollmentCourseItem> = CourseEntity::find()
        .filter(CourseColumn::Id.is_in(unique_ids(rows.iter().map(|r| r.course_id))))
        .all(db)
        .await?
        .into_iter()
        .map(|c| {
            (
                c.id,
                EnrollmentCourseItem {
                    id: c.id,
                    title: c.title,
                    code: c.code,
                    capacity: c.capacity,
                    is_active: c.is_active,
                },
            )
        })
        .collect();

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let user = users.get(&row.user_id)?.clone();
            let course = courses.get(&row.course_id)?.clone();
            Some(EnrollmentDetails {
                id: row.id,
                user_id: row.user_id,
                course_id: row.course_id,
                created_at: row.created_at.into(),
                updated_at: row.updated_at.into(),
                user,
                course,
            })
        })
        .collect())
}

#[async_trait]
impl EnrollmentQuery for EnrollmentQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<EnrollmentRecord>, EnrollmentQueryError> {
        let model = EnrollmentEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn find_by_user_and_course(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<EnrollmentRecord>, EnrollmentQueryError> {
        let model = EnrollmentEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn find_details(
        &self,
        id: i32,
    ) -> Result<Option<EnrollmentDetails>, EnrollmentQueryError> {
        let Some(model) = EnrollmentEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let details = load_details(&*self.db, vec![model]).await.map_err(db_err)?;
        Ok(details.into_iter().next())
    }

    async fn list_details(
        &self,
        filter: EnrollmentListFilter,
    ) -> Result<Vec<EnrollmentDetails>, EnrollmentQueryError> {
        let rows = EnrollmentEntity::find()
            .filter(list_condition(filter))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        load_details(&*self.db, rows).await.map_err(db_err)
    }

    async fn page_details(
        &self,
        filter: EnrollmentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<EnrollmentDetails>, EnrollmentQueryError> {
        let select = EnrollmentEntity::find().filter(list_condition(filter));

        let total = select.clone().count(&*self.db).await.map_err(db_err)?;

        let rows = select
            .order_by_asc(Column::Id)
            .offset(page.skip())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let items = load_details(&*self.db, rows).await.map_err(db_err)?;
        Ok(PageResult::new(items, total, page))
    }

    async fn course_exists(&self, course_id: i32) -> Result<bool, EnrollmentQueryError> {
        let count = CourseEntity::find_by_id(course_id)
            .count(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::adapter::outgoing::sea_orm_entity::Model as CourseModel;
    use crate::users::adapter::outgoing::sea_orm_entity::{Model as UserModel, Role};
    use crate::users::application::domain::entities::UserRole;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr, Value};
    use std::collections::BTreeMap;

    fn enrollment(id: i32, user_id: i32, course_id: i32) -> EnrollmentModel {
        let now = Utc::now().fixed_offset();
        EnrollmentModel {
            id,
            user_id,
            course_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn user(id: i32) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            name: format!("Student {id}"),
            email: format!("s{id}@example.com"),
            hashed_password: "$argon2id$hash".to_string(),
            role: Role::Student,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn course(id: i32) -> CourseModel {
        let now = Utc::now().fixed_offset();
        CourseModel {
            id,
            title: "Compilers".to_string(),
            code: format!("CS{id}"),
            capacity: 20,
            is_active: true,
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
    async fn find_details_nests_user_and_course() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![enrollment(7, 4, 2)]])
            .append_query_results(vec![vec![user(4)]])
            .append_query_results(vec![vec![course(2)]])
            .into_connection();

        let query = EnrollmentQueryPostgres::new(Arc::new(db));
        let details = query.find_details(7).await.unwrap().unwrap();

        assert_eq!(details.id, 7);
        assert_eq!(details.user.email, "s4@example.com");
        assert_eq!(details.user.role, UserRole::Student);
        assert_eq!(details.course.code, "CS2");
        assert!(details.course.is_active);
    }

    #[tokio::test]
    async fn find_details_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<EnrollmentModel>::new()])
            .into_connection();

        let query = EnrollmentQueryPostgres::new(Arc::new(db));
        assert!(query.find_details(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_details_shares_lookups_across_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![enrollment(1, 4, 2), enrollment(2, 5, 2)]])
            .append_query_results(vec![vec![user(4), user(5)]])
            .append_query_results(vec![vec![course(2)]])
            .into_connection();

        let query = EnrollmentQueryPostgres::new(Arc::new(db));
        let rows = query
            .list_details(EnrollmentListFilter {
                user_id: None,
                course_id: Some(2),
            })
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].user.id, 5);
        assert_eq!(rows[1].course.id, 2);
    }

    #[tokio::test]
    async fn page_details_reports_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(31)]])
            .append_query_results(vec![vec![enrollment(1, 4, 2)]])
            .append_query_results(vec![vec![user(4)]])
            .append_query_results(vec![vec![course(2)]])
            .into_connection();

        let query = EnrollmentQueryPostgres::new(Arc::new(db));
        let page = query
            .page_details(EnrollmentListFilter::default(), PageRequest::new(Some(30), None))
            .await
            .unwrap();

        assert_eq!(page.total, 31);
        assert_eq!(page.skip, 30);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn find_by_user_and_course_returns_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![enrollment(9, 4, 2)]])
            .into_connection();

        let query = EnrollmentQueryPostgres::new(Arc::new(db));
        let record = query.find_by_user_and_course(4, 2).await.unwrap();

        assert_eq!(
            record,
            Some(EnrollmentRecord {
                id: 9,
                user_id: 4,
                course_id: 2
            })
        );
    }

    #[tokio::test]
    async fn course_exists_uses_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .into_connection();

        let query = EnrollmentQueryPostgres::new(Arc::new(db));
        assert!(!query.course_exists(2).await.unwrap());
    }

    #[tokio::test]
    async fn database_error_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("gone".into()))])
            .into_connection();

        let query = EnrollmentQueryPostgres::new(Arc::new(db));
        assert!(matches!(
            query.find_by_id(1).await,
            Err(EnrollmentQueryError::DatabaseError(_))
        ));
    }
}
