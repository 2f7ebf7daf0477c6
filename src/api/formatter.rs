// ==========================================
// EC退货率分析系统 - 展示格式化
// ==========================================
// 职责: 展示边界的舍入与格式化
// 精度约定: 百分比/退货率保留 2 位,千元销售额保留 1 位
// 引擎内部一律使用未舍入原值,舍入只发生在这里
// ==========================================

/// 退货率/百分比展示精度
pub const DECIMAL_PLACES_PCT: u32 = 2;
/// 千元销售额展示精度
pub const DECIMAL_PLACES_SALES_K: u32 = 1;

/// 按位数舍入 (展示用)
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// 格式化货币 (千元K): ¥80.0K,缺失显示 "-"
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("¥{:.1}K", v / 1000.0),
        None => "-".to_string(),
    }
}

/// 格式化百分比: 非负值带显式 "+" 号,保留 2 位小数
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{}{:.2}%", sign, v)
        }
        None => "-".to_string(),
    }
}

/// 格式化退货率 (小数 → 百分比,不带符号): 0.0533 → "5.33%"
pub fn format_return_rate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "-".to_string(),
    }
}
