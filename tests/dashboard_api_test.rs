// ==========================================
// 驾驶舱 API 集成测试
// ==========================================
// 测试目标: 只读查询门面与展示格式化契约
// 覆盖范围: 文件入口、渠道明细查询、格式化规则
// ==========================================

use ec_return_analysis::api::{format_currency, format_percentage, format_return_rate};
use ec_return_analysis::config::AnalysisConfig;
use ec_return_analysis::domain::RawShopRow;
use ec_return_analysis::DashboardApi;
use std::io::Write;

/// 创建测试用的原始行
fn create_test_row(shop: &str, channel: &str, cur: &str, prev: &str) -> RawShopRow {
    RawShopRow {
        channel: channel.to_string(),
        shop_name: shop.to_string(),
        sales_current: Some(cur.to_string()),
        sales_previous: Some(prev.to_string()),
        return_rate_current: Some("9%".to_string()),
        return_rate_previous: Some("5%".to_string()),
    }
}

#[test]
fn test_channel_detail_lookup() {
    let api = DashboardApi::from_rows(
        &[
            create_test_row("MLB天猫旗舰店", "TM", "80,000", "100,000"),
            create_test_row("MK京东旗舰店", "JD", "120,000", "100,000"),
        ],
        AnalysisConfig::default(),
    );

    let tm = api.channel_detail("TM").unwrap();
    assert_eq!(tm.key, "TM");
    assert_eq!(tm.shop_count, 1);

    // 未知渠道键: 显式缺席,不是错误
    assert!(api.channel_detail("PDD").is_none());
}

#[test]
fn test_shop_yoy_stable_order_across_queries() {
    let api = DashboardApi::from_rows(
        &[
            create_test_row("观察MLB店", "TM", "120,000", "100,000"),
            create_test_row("高危MLB店", "TM", "80,000", "100,000"),
        ],
        AnalysisConfig::default(),
    );

    // 高风险店排在正常店之前,多次查询顺序一致
    let first: Vec<String> = api.shop_yoy().iter().map(|s| s.shop_name.clone()).collect();
    let second: Vec<String> = api.shop_yoy().iter().map(|s| s.shop_name.clone()).collect();
    assert_eq!(first, second);
    assert_eq!(first[0], "高危MLB店");
}

#[test]
fn test_brand_summaries_exposed() {
    let api = DashboardApi::from_rows(
        &[
            create_test_row("MLB天猫旗舰店", "TM", "80,000", "100,000"),
            create_test_row("MK天猫旗舰店", "TM", "40,000", "30,000"),
        ],
        AnalysisConfig::default(),
    );

    let brands: Vec<&str> = api.brand_summaries().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(brands, vec!["MLB", "MLB KIDS"]);
}

#[test]
fn test_from_file_csv_roundtrip() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(
        file,
        "渠道,店铺,2025年净销售,2024年净销售,2025年YTD-退货率,2024年YTD-退货率"
    )
    .unwrap();
    writeln!(file, "TM,MLB天猫旗舰店,80000,100000,9%,5%").unwrap();
    file.flush().unwrap();

    let api = DashboardApi::from_file(file.path(), AnalysisConfig::default()).unwrap();
    assert_eq!(api.shop_yoy().len(), 1);
    assert!(api.channel_detail("TM").is_some());

    // 导出 JSON 可反序列化回快照
    let json = api.export_json().unwrap();
    let back: ec_return_analysis::AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, api.result());
}

#[test]
fn test_from_file_missing_file_is_error() {
    let result = DashboardApi::from_file("不存在的文件.csv", AnalysisConfig::default());
    assert!(result.is_err());
}

// ==========================================
// 格式化契约
// ==========================================

#[test]
fn test_percentage_format_carries_explicit_sign() {
    assert_eq!(format_percentage(Some(4.0)), "+4.00%");
    assert_eq!(format_percentage(Some(0.0)), "+0.00%");
    assert_eq!(format_percentage(Some(-20.0)), "-20.00%");
    assert_eq!(format_percentage(None), "-");
}

#[test]
fn test_currency_format_thousands_with_symbol() {
    assert_eq!(format_currency(Some(80000.0)), "¥80.0K");
    assert_eq!(format_currency(Some(130500.0)), "¥130.5K");
    assert_eq!(format_currency(None), "-");
}

#[test]
fn test_return_rate_format_two_decimals() {
    assert_eq!(format_return_rate(Some(0.05)), "5.00%");
    assert_eq!(format_return_rate(Some(0.0533333)), "5.33%");
}
