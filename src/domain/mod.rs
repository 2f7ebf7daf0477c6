// ==========================================
// EC退货率分析系统 - 领域层
// ==========================================
// 职责: 实体与类型定义,不含业务规则
// ==========================================

pub mod record;
pub mod shop;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use record::{CanonicalRecord, RawShopRow};
pub use shop::ShopYoy;
pub use summary::GroupSummary;
pub use types::{CoarseRisk, GroupDimension, RiskLevel};
