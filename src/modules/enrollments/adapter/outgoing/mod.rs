pub mod enrollment_query_postgres;
pub mod enrollment_repository_postgres;
pub mod sea_orm_entity;

pub use enrollment_query_postgres::EnrollmentQueryPostgres;
pub use enrollment_repository_postgres::EnrollmentRepositoryPostgres;
