// ==========================================
// EC退货率分析系统 - API 层
// ==========================================
// 职责: 面向展示层的只读查询与格式化
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod formatter;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use formatter::{format_currency, format_percentage, format_return_rate, round_to};
