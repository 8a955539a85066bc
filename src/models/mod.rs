pub mod common;
pub mod students;

pub use common::pagination::{PageQuery, PaginatedResponse, paginate};
pub use common::response::{ErrorCode, ErrorResponse};

/// 程序启动时间，用于输出预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
