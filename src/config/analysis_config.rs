// ==========================================
// EC退货率分析系统 - 分析配置
// ==========================================
// 职责: 对比年度与品牌映射的组合配置
// ==========================================

use crate::config::brand_mapping::BrandMapping;
use serde::{Deserialize, Serialize};

// ==========================================
// 对比年度 (CompareYears)
// ==========================================
/// 数据集内仅出现两个年度: 本年与上年
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareYears {
    /// 本年 (报告期)
    pub current: i32,
    /// 上年 (对比期)
    pub previous: i32,
}

impl Default for CompareYears {
    fn default() -> Self {
        Self {
            current: 2025,
            previous: 2024,
        }
    }
}

// ==========================================
// 分析配置 (AnalysisConfig)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    /// 对比年度
    pub years: CompareYears,
    /// 品牌映射表
    pub brand_mapping: BrandMapping,
}
