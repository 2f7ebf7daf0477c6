// ==========================================
// EC退货率分析系统 - 配置层
// ==========================================
// 职责: 品牌映射与对比年度配置,显式对象注入
// ==========================================

pub mod analysis_config;
pub mod brand_mapping;

// 重导出核心配置类型
pub use analysis_config::{AnalysisConfig, CompareYears};
pub use brand_mapping::{BrandMapping, BrandRule};
