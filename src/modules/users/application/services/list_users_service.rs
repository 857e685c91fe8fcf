use async_trait::async_trait;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::users::application::ports::{
    incoming::use_cases::{ListUsersError, ListUsersUseCase},
    outgoing::{UserListFilter, UserQuery, UserView},
};

#[derive(Debug, Clone)]
pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserView>, ListUsersError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))
    }
}
