// ==========================================
// EC退货率分析系统 - 驾驶舱 API
// ==========================================
// 职责: 封装 AnalysisResult 快照,向展示层提供只读查询
// 架构: API 层 → 引擎层 (AnalysisPipeline) → 领域层
// 约定: 未知渠道键返回 None (展示层渲染"未找到"态),不抛错误
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::AnalysisConfig;
use crate::domain::record::RawShopRow;
use crate::domain::shop::ShopYoy;
use crate::domain::summary::GroupSummary;
use crate::engine::pipeline::{AnalysisPipeline, AnalysisResult};
use crate::importer::{FieldMapper, UniversalFileParser};
use std::path::Path;

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 持有一次管线运行产出的不可变快照;
/// 所有查询只读,不重算,不持共享可变状态
pub struct DashboardApi {
    result: AnalysisResult,
}

impl DashboardApi {
    /// 基于已计算快照构造
    pub fn new(result: AnalysisResult) -> Self {
        Self { result }
    }

    /// 从原始行构造: 运行一次完整管线
    pub fn from_rows(rows: &[RawShopRow], config: AnalysisConfig) -> Self {
        let pipeline = AnalysisPipeline::new(config);
        Self::new(pipeline.run(rows))
    }

    /// 从快照文件构造: 解析 → 字段映射 → 管线
    ///
    /// # 返回
    /// - Ok(DashboardApi): 导入并计算成功
    /// - Err(ApiError): 文件级错误 (不存在/格式不支持/解析失败)
    pub fn from_file<P: AsRef<Path>>(path: P, config: AnalysisConfig) -> ApiResult<Self> {
        let raw_records = UniversalFileParser.parse(path)?;
        let mapper = FieldMapper::new(config.years);
        let rows: Vec<RawShopRow> = raw_records
            .iter()
            .filter_map(|r| mapper.map_to_raw_row(r))
            .collect();
        Ok(Self::from_rows(&rows, config))
    }

    // ==========================================
    // 只读查询接口
    // ==========================================

    /// 全量店铺 YOY (固定顺序: 风险等级升序,同级保持输入顺序)
    pub fn shop_yoy(&self) -> &[ShopYoy] {
        &self.result.shops
    }

    /// 渠道汇总 (按本年总销售额降序)
    pub fn channel_summaries(&self) -> &[GroupSummary] {
        &self.result.channel_summaries
    }

    /// 品牌汇总 (按本年总销售额降序)
    pub fn brand_summaries(&self) -> &[GroupSummary] {
        &self.result.brand_summaries
    }

    /// 单渠道明细: 精确键匹配,未知键返回 None
    pub fn channel_detail(&self, channel_key: &str) -> Option<&GroupSummary> {
        self.result
            .channel_summaries
            .iter()
            .find(|s| s.key == channel_key)
    }

    /// 完整分析快照
    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    /// 导出 JSON 快照
    ///
    /// # 返回
    /// - Ok(String): 格式化 JSON
    /// - Err(ApiError): 序列化失败
    pub fn export_json(&self) -> ApiResult<String> {
        serde_json::to_string_pretty(&self.result).map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(shop: &str, channel: &str) -> RawShopRow {
        RawShopRow {
            channel: channel.to_string(),
            shop_name: shop.to_string(),
            sales_current: Some("80,000".to_string()),
            sales_previous: Some("100,000".to_string()),
            return_rate_current: Some("9%".to_string()),
            return_rate_previous: Some("5%".to_string()),
        }
    }

    #[test]
    fn test_channel_detail_exact_match() {
        let api = DashboardApi::from_rows(
            &[raw_row("MLB天猫旗舰店", "TM")],
            AnalysisConfig::default(),
        );

        assert!(api.channel_detail("TM").is_some());
        assert!(api.channel_detail("tm").is_none()); // 精确匹配
        assert!(api.channel_detail("不存在渠道").is_none());
    }

    #[test]
    fn test_export_json_stable() {
        let rows = vec![raw_row("MLB天猫旗舰店", "TM")];
        let api1 = DashboardApi::from_rows(&rows, AnalysisConfig::default());
        let api2 = DashboardApi::from_rows(&rows, AnalysisConfig::default());
        assert_eq!(api1.export_json().unwrap(), api2.export_json().unwrap());
    }
}
