use sea_orm::entity::prelude::*;

use crate::courses::application::ports::outgoing::CourseView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(unique)]
    pub code: String,

    pub capacity: i32,

    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_view(&self, enrolled_count: u64) -> CourseView {
        CourseView::new(
            self.id,
            self.title.clone(),
            self.code.clone(),
            self.capacity,
            self.is_active,
            enrolled_count,
            self.created_at.into(),
            self.updated_at.into(),
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::enrollments::adapter::outgoing::sea_orm_entity::Entity")]
    Enrollments,
}

impl Related<crate::enrollments::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
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
