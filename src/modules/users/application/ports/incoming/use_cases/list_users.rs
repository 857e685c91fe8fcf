use async_trait::async_trait;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::application::ports::outgoing::{UserListFilter, UserView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserView>, ListUsersError>;
}
