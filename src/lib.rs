// ==========================================
// EC退货率分析系统 - 核心库
// ==========================================
// 系统定位: 渠道/品牌退货率 YOY 决策支持
// 数据流向: 原始行 → 标准化 → YOY/风险 → 汇总 → 查询门面
// 技术栈: Rust + CSV/Excel 导入 + JSON 快照导出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 品牌映射与对比年度
pub mod config;

// 导入层 - 外部快照文件
pub mod importer;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 查询门面与格式化
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{CanonicalRecord, CoarseRisk, GroupDimension, GroupSummary, RawShopRow, RiskLevel, ShopYoy};

// 配置
pub use config::{AnalysisConfig, BrandMapping, BrandRule, CompareYears};

// 引擎
pub use engine::{
    AnalysisPipeline, AnalysisResult, NewShopDetector, PipelineDiagnostics, RiskEngine,
    SummaryEngine, YoyEngine,
};

// API
pub use api::{ApiError, ApiResult, DashboardApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "EC退货率分析系统";
