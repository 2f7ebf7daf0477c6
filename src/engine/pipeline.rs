// ==========================================
// EC退货率分析系统 - 分析管线编排器
// ==========================================
// 职责: 原始行 → 标准化 → YOY → 汇总,产出不可变快照
// 约束: 纯同步单遍计算,无 I/O,无共享可变状态;
//       相同输入重复运行产出字段级一致的结果 (幂等)
// ==========================================

use crate::config::AnalysisConfig;
use crate::domain::record::RawShopRow;
use crate::domain::shop::ShopYoy;
use crate::domain::summary::GroupSummary;
use crate::domain::types::GroupDimension;
use crate::engine::aggregator::SummaryEngine;
use crate::engine::yoy::YoyEngine;
use crate::importer::normalizer::RecordNormalizer;
use serde::{Deserialize, Serialize};
use tracing::info;

// ==========================================
// 管线诊断 (PipelineDiagnostics)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    /// 输入原始行数
    pub input_rows: usize,
    /// 产出标准记录数
    pub records_produced: usize,
    /// 产出店铺数
    pub shops_produced: usize,
    /// 品牌未映射剔除行数
    pub skipped_unmapped_brand: usize,
}

// ==========================================
// 分析结果快照 (AnalysisResult)
// ==========================================
/// 单次管线运行的完整产出,运行后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 全量店铺 YOY (按风险等级排序,同级保持输入顺序)
    pub shops: Vec<ShopYoy>,
    /// 渠道汇总 (按本年总销售额降序)
    pub channel_summaries: Vec<GroupSummary>,
    /// 品牌汇总 (按本年总销售额降序)
    pub brand_summaries: Vec<GroupSummary>,
    /// 管线诊断
    pub diagnostics: PipelineDiagnostics,
}

// ==========================================
// AnalysisPipeline - 分析管线
// ==========================================
pub struct AnalysisPipeline {
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    /// 构造函数
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// 运行管线
    ///
    /// # 参数
    /// - `rows`: 原始行快照
    ///
    /// # 返回
    /// AnalysisResult 完整分析快照 (每次调用全新分配)
    pub fn run(&self, rows: &[RawShopRow]) -> AnalysisResult {
        // 1. 标准化
        let normalizer = RecordNormalizer::new(
            self.config.brand_mapping.clone(),
            self.config.years,
        );
        let outcome = normalizer.normalize(rows);
        info!(
            input_rows = rows.len(),
            records = outcome.records.len(),
            skipped = outcome.skipped_unmapped_brand,
            "标准化完成"
        );

        // 2. 店铺 YOY 派生
        let yoy_engine = YoyEngine::new();
        let shops_input_order = yoy_engine.derive(&outcome.records, self.config.years);
        info!(shops = shops_input_order.len(), "店铺 YOY 派生完成");

        // 3. 渠道/品牌汇总 (基于输入顺序的店铺列表,保证组内稳定排序基准)
        let summary_engine = SummaryEngine::new();
        let channel_summaries =
            summary_engine.summarize(&shops_input_order, GroupDimension::Channel);
        let brand_summaries = summary_engine.summarize(&shops_input_order, GroupDimension::Brand);
        info!(
            channels = channel_summaries.len(),
            brands = brand_summaries.len(),
            "汇总完成"
        );

        // 4. 全量店铺列表按风险等级排序 (稳定,同级保持输入顺序)
        let mut shops = shops_input_order;
        shops.sort_by_key(|s| s.risk_level.rank());

        let diagnostics = PipelineDiagnostics {
            input_rows: rows.len(),
            records_produced: outcome.records.len(),
            shops_produced: shops.len(),
            skipped_unmapped_brand: outcome.skipped_unmapped_brand,
        };

        AnalysisResult {
            shops,
            channel_summaries,
            brand_summaries,
            diagnostics,
        }
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
