use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;

use crate::courses::adapter::outgoing::sea_orm_entity::{
    Column as CourseColumn, Entity as CourseEntity,
};
use crate::enrollments::adapter::outgoing::sea_orm_entity::{
    Column as EnrollmentColumn, Relation as EnrollmentRelation,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::application::ports::outgoing::{
    EnrolledCourseItem, UserCredentials, UserListFilter, UserQuery, UserQueryError, UserView,
};

use super::sea_orm_entity::{Column, Entity as UserEntity, Role};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

fn list_condition(filter: &UserListFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(role) = filter.role {
        condition = condition.add(Column::Role.eq(Role::from(role)));
    }

    if let Some(is_active) = filter.is_active {
        condition = condition.add(Column::IsActive.eq(is_active));
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search.to_lowercase());
        condition = condition.add(
            Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(Column::Name))).like(pattern.clone()))
                .add(Expr::expr(Func::lower(Expr::col(Column::Email))).like(pattern)),
        );
    }

    condition
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserView>, UserQueryError> {
        let model = UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.to_view()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        let model = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.to_credentials()))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserQueryError> {
        let count = UserEntity::find()
            .filter(Column::Email.eq(email))
            .count(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(count > 0)
    }

    async fn list(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserView>, UserQueryError> {
        let select = UserEntity::find().filter(list_condition(&filter));

        let total = select.clone().count(&*self.db).await.map_err(db_err)?;

        let models = select
            .order_by_asc(Column::Id)
            .offset(page.skip())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(PageResult::new(
            models.iter().map(|m| m.to_view()).collect(),
            total,
            page,
        ))
    }

    async fn find_enrolled_courses(
        &self,
        user_id: i32,
    ) -> Result<Vec<EnrolledCourseItem>, UserQueryError> {
        let courses = CourseEntity::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                EnrollmentRelation::Course.def().rev(),
            )
            .filter(EnrollmentColumn::UserId.eq(user_id))
            .order_by_asc(CourseColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(courses
            .into_iter()
            .map(|c| EnrolledCourseItem {
                id: c.id,
                title: c.title,
                code: c.code,
                capacity: c.capacity,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::adapter::outgoing::sea_orm_entity::Model as CourseModel;
    use crate::users::adapter::outgoing::sea_orm_entity::Model as UserModel;
    use crate::users::application::domain::entities::UserRole;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, QueryTrait, RuntimeErr, Value};
    use std::collections::BTreeMap;

    fn user_model(id: i32, email: &str, role: Role, is_active: bool) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            name: "Ada".to_string(),
            email: email.to_string(),
            hashed_password: "$argon2id$hash".to_string(),
            role,
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
    async fn find_by_id_maps_model_to_view() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(3, "ada@example.com", Role::Admin, true)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_id(3).await.unwrap().unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        assert!(query.find_by_id(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn credentials_carry_hash_and_active_flag() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(
                5,
                "ada@example.com",
                Role::Student,
                false,
            )]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let creds = query
            .find_credentials_by_email("ada@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(creds.id, 5);
        assert_eq!(creds.hashed_password, "$argon2id$hash");
        assert!(!creds.is_active);
    }

    #[tokio::test]
    async fn email_exists_uses_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        assert!(query.email_exists("ada@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn list_returns_page_with_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(12)]])
            .append_query_results(vec![vec![
                user_model(1, "a@example.com", Role::Student, true),
                user_model(2, "b@example.com", Role::Student, true),
            ]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let filter = UserListFilter {
            search: Some("EXAMPLE".to_string()),
            role: Some(UserRole::Student),
            is_active: Some(true),
        };

        let page = query
            .list(filter, PageRequest::new(Some(0), Some(2)))
            .await
            .unwrap();

        assert_eq!(page.total, 12);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.limit, 2);
    }

    #[tokio::test]
    async fn list_database_error_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "relation does not exist".into(),
            ))])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query
            .list(UserListFilter::default(), PageRequest::default())
            .await;

        assert!(matches!(result, Err(UserQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn enrolled_courses_are_projected() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![CourseModel {
                id: 9,
                title: "Compilers".to_string(),
                code: "CS420".to_string(),
                capacity: 25,
                is_active: true,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let courses = query.find_enrolled_courses(5).await.unwrap();

        assert_eq!(
            courses,
            vec![EnrolledCourseItem {
                id: 9,
                title: "Compilers".to_string(),
                code: "CS420".to_string(),
                capacity: 25,
            }]
        );
    }

    #[test]
    fn search_term_is_matched_as_given() {
        let filter = UserListFilter {
            search: Some(" Ada ".to_string()),
            ..Default::default()
        };
        let sql = UserEntity::find()
            .filter(list_condition(&filter))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains("'% ada %'"), "{}", sql);
    }
}
