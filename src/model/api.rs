use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default page size when the client does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// JSON body returned with every error status.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Zero-indexed pagination query parameters shared by list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationParam {
    /// Page number, defaults to 0.
    pub page: Option<u64>,
    /// Items per page, defaults to 20.
    pub size: Option<u64>,
}

impl PaginationParam {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    pub fn size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }
}

/// One page of results with pagination metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub total_pages: u64,
}

impl<T> PaginatedDto<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, size: u64) -> Self {
        let total_pages = total.div_ceil(size.max(1));
        Self {
            items,
            total,
            page,
            size,
            total_pages,
        }
    }
}
