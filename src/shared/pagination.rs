use serde::{de, Deserialize, Deserializer, Serialize};

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;
/// Largest offset Postgres accepts as a `BIGINT` bind.
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Offset paging window. `limit` is capped at [`MAX_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: u64,
    limit: u64,
}

impl PageRequest {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            skip: skip.unwrap_or(0).min(MAX_SKIP),
            limit: limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
        }
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: PageRequest) -> Self {
        Self {
            items,
            total,
            skip: page.skip(),
            limit: page.limit(),
        }
    }

    pub fn empty(page: PageRequest) -> Self {
        Self::new(Vec::new(), 0, page)
    }

    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            skip: self.skip,
            limit: self.limit,
        }
    }
}

/// Query-string paging value, rejected when it does not fit a `BIGINT`.
///
/// Use with `#[serde(default, deserialize_with = "page_param")]`.
pub fn page_param<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<u64>::deserialize(deserializer)? {
        Some(value) if value > MAX_SKIP => Err(de::Error::custom(format!(
            "must be at most {}",
            MAX_SKIP
        ))),
        other => Ok(other),
    }
}
