use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::courses::application::ports::outgoing::{
    CourseListFilter, CourseQuery, CourseQueryError, CourseView, EnrolledStudentItem,
};
use crate::enrollments::adapter::outgoing::sea_orm_entity::{
    Column as EnrollmentColumn, Entity as EnrollmentEntity, Relation as EnrollmentRelation,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::adapter::outgoing::sea_orm_entity::{
    Column as UserColumn, Entity as UserEntity,
};

use super::sea_orm_entity::{Column, Entity as CourseEntity};

#[derive(Debug, FromQueryResult)]
struct EnrolledCount {
    course_id: i32,
    enrolled: i64,
}

/// Number of enrollments in a single course.
pub(crate) async fn count_enrolled<C>(db: &C, course_id: i32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    EnrollmentEntity::find()
        .filter(EnrollmentColumn::CourseId.eq(course_id))
        .count(db)
        .await
}

/// Enrollment counts keyed by course id; courses without enrollments are absent.
pub(crate) async fn count_enrolled_many<C>(
    db: &C,
    course_ids: Vec<i32>,
) -> Result<HashMap<i32, u64>, DbErr>
where
    C: ConnectionTrait,
{
    if course_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = EnrollmentEntity::find()
        .select_only()
        .column(EnrollmentColumn::CourseId)
        .column_as(Expr::col(EnrollmentColumn::Id).count(), "enrolled")
        .filter(EnrollmentColumn::CourseId.is_in(course_ids))
        .group_by(EnrollmentColumn::CourseId)
        .into_model::<EnrolledCount>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|r| (r.course_id, r.enrolled.max(0) as u64))
        .collect())
}

#[derive(Debug, Clone)]
pub struct CourseQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> CourseQueryError {
    CourseQueryError::DatabaseError(e.to_string())
}

fn list_condition(filter: &CourseListFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(is_active) = filter.is_active {
        condition = condition.add(Column::IsActive.eq(is_active));
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search.to_lowercase());
        condition = condition.add(
            Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(Column::Title))).like(pattern.clone()))
                .add(Expr::expr(Func::lower(Expr::col(Column::Code))).like(pattern)),
        );
    }

    condition
}

#[async_trait]
impl CourseQuery for CourseQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<CourseView>, CourseQueryError> {
        let Some(model) = CourseEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let enrolled = count_enrolled(&*self.db, model.id).await.map_err(db_err)?;
        Ok(Some(model.to_view(enrolled)))
    }

    async fn list(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, CourseQueryError> {
        let select = CourseEntity::find().filter(list_condition(&filter));

        let total = select.clone().count(&*self.db).await.map_err(db_err)?;

        let models = select
            .order_by_asc(Column::Id)
            .offset(page.skip())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let counts = count_enrolled_many(&*self.db, models.iter().map(|m| m.id).collect())
            .await
            .map_err(db_err)?;

        let items = models
            .iter()
            .map(|m| m.to_view(counts.get(&m.id).copied().unwrap_or(0)))
            .collect();

        Ok(PageResult::new(items, total, page))
    }

    async fn find_enrolled_students(
        &self,
        course_id: i32,
    ) -> Result<Vec<EnrolledStudentItem>, CourseQueryError> {
        let students = UserEntity::find()
            .join(JoinType::InnerJoin, EnrollmentRelation::User.def().rev())
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(students
            .into_iter()
            .map(|u| EnrolledStudentItem {
                id: u.id,
                name: u.name,
                email: u.email,
            })
            .collect())
    }

    async fn code_exists(
        &self,
        code: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, CourseQueryError> {
        let mut select = CourseEntity::find().filter(Column::Code.eq(code));
        if let Some(id) = exclude_id {
            select = select.filter(Column::Id.ne(id));
        }

        let count = select.count(&*self.db).await.map_err(db_err)?;
        Ok(count > 0)
    }
}
