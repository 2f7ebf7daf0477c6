// ==========================================
// EC退货率分析系统 - 领域类型定义
// ==========================================
// 风险等级体系: 等级制,按固定顺序排序展示
// 序列化格式: 与前端展示标签一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 风险等级 (Risk Level) - 五级细分
// ==========================================
// 排序: HighRisk < Risk < Watch < NewStore < Normal < IncompleteData
// 每个等级对应唯一一条固定建议文案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "🚨 高风险")]
    HighRisk, // 销售下降且退货率上升
    #[serde(rename = "🔴 风险")]
    Risk, // 退货率增幅超过销售增幅
    #[serde(rename = "⚠️ 观察")]
    Watch, // 退货率上升但增幅小于销售增幅
    #[serde(rename = "🆕 新开店｜不可比")]
    NewStore, // 上年无数据,不参与同比
    #[serde(rename = "✅ 正常")]
    Normal, // 其他情形
    #[serde(rename = "数据不全")]
    IncompleteData, // YOY 输入缺失
}

impl RiskLevel {
    /// 组内展示排序序号 (越小越靠前)
    pub fn rank(&self) -> u8 {
        match self {
            RiskLevel::HighRisk => 1,
            RiskLevel::Risk => 2,
            RiskLevel::Watch => 3,
            RiskLevel::NewStore => 4,
            RiskLevel::Normal => 5,
            RiskLevel::IncompleteData => 6,
        }
    }

    /// 风险等级对应的固定建议文案 (静态查表,不做动态拼接)
    pub fn suggestion(&self) -> &'static str {
        match self {
            RiskLevel::HighRisk => "建议检查：商品质量、物流时效、尺码准确性、退货政策",
            RiskLevel::Risk => "退货率增长超过销售增长，建议优化：商品质量、物流服务、售后政策",
            RiskLevel::Watch => "销售增长快于退货率增长，持续监控退货率变化趋势",
            RiskLevel::NewStore => "关注新店铺运营质量和退货率趋势",
            RiskLevel::Normal => "保持当前运营策略",
            RiskLevel::IncompleteData => "需补充数据",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::HighRisk => write!(f, "🚨 高风险"),
            RiskLevel::Risk => write!(f, "🔴 风险"),
            RiskLevel::Watch => write!(f, "⚠️ 观察"),
            RiskLevel::NewStore => write!(f, "🆕 新开店｜不可比"),
            RiskLevel::Normal => write!(f, "✅ 正常"),
            RiskLevel::IncompleteData => write!(f, "数据不全"),
        }
    }
}

// ==========================================
// 粗粒度风险 (Coarse Risk) - 三级简分
// ==========================================
// 与五级细分是两条独立的判定路径,不可合并:
// 细分路径服务店铺级建议,粗分路径服务渠道级 has_risk 指标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoarseRisk {
    High,     // 销售下降且退货率上升
    Watch,    // 销售上升且退货率上升
    Normal,   // 其他情形
    NewStore, // 新开店
}

impl fmt::Display for CoarseRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoarseRisk::High => write!(f, "HIGH"),
            CoarseRisk::Watch => write!(f, "WATCH"),
            CoarseRisk::Normal => write!(f, "NORMAL"),
            CoarseRisk::NewStore => write!(f, "NEW_STORE"),
        }
    }
}

// ==========================================
// 汇总维度 (Group Key)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupDimension {
    Channel, // 按渠道汇总
    Brand,   // 按品牌汇总
}

impl fmt::Display for GroupDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupDimension::Channel => write!(f, "CHANNEL"),
            GroupDimension::Brand => write!(f, "BRAND"),
        }
    }
}
