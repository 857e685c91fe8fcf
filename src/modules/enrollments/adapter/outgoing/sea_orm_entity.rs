use sea_orm::entity::prelude::*;

use crate::enrollments::application::ports::outgoing::EnrollmentRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    pub course_id: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> EnrollmentRecord {
        EnrollmentRecord {
            id: self.id,
            user_id: self.user_id,
            course_id: self.course_id,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::users::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::users::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "crate::courses::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CourseId",
        to = "crate::courses::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<crate::users::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<crate::courses::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
