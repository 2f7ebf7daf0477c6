// ==========================================
// EC退货率分析系统 - 引擎层
// ==========================================
// 职责: 纯业务规则引擎,不做 I/O
// 红线: 引擎输出必须可解释 (风险等级对应固定建议文案)
// ==========================================

pub mod aggregator;
pub mod new_shop;
pub mod pipeline;
pub mod risk;
pub mod yoy;

// 重导出核心引擎
pub use aggregator::SummaryEngine;
pub use new_shop::NewShopDetector;
pub use pipeline::{AnalysisPipeline, AnalysisResult, PipelineDiagnostics};
pub use risk::RiskEngine;
pub use yoy::YoyEngine;
