// ==========================================
// 分析管线端到端测试
// ==========================================
// 测试目标: 原始行 → ShopYoy → GroupSummary 全流程属性
// 覆盖范围: 新开店口径、数据不全、汇总不变式、幂等性
// ==========================================

use ec_return_analysis::config::AnalysisConfig;
use ec_return_analysis::domain::{RawShopRow, RiskLevel};
use ec_return_analysis::engine::AnalysisPipeline;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的原始行
fn create_test_row(
    shop: &str,
    channel: &str,
    sales_cur: Option<&str>,
    sales_prev: Option<&str>,
    rate_cur: Option<&str>,
    rate_prev: Option<&str>,
) -> RawShopRow {
    RawShopRow {
        channel: channel.to_string(),
        shop_name: shop.to_string(),
        sales_current: sales_cur.map(String::from),
        sales_previous: sales_prev.map(String::from),
        return_rate_current: rate_cur.map(String::from),
        return_rate_previous: rate_prev.map(String::from),
    }
}

/// 标准测试数据集: 高风险店 + 新开店 + 正常店
fn create_test_dataset() -> Vec<RawShopRow> {
    vec![
        // Alpha: 销售 100k→80k, 退货率 5%→9% ⇒ 高风险
        create_test_row(
            "AlphaMLB旗舰店",
            "TM",
            Some("80,000"),
            Some("100,000"),
            Some("9%"),
            Some("5%"),
        ),
        // Beta: 仅本年记录 ⇒ 新开店
        create_test_row("BetaMLB新店", "TM", Some("50,000"), None, Some("8%"), None),
        // 正常店: 销售上升退货率下降
        create_test_row(
            "MK京东旗舰店",
            "JD",
            Some("120,000"),
            Some("100,000"),
            Some("4%"),
            Some("5%"),
        ),
    ]
}

// ==========================================
// 风险属性
// ==========================================

#[test]
fn test_new_shops_have_null_yoy_and_new_store_level() {
    let result = AnalysisPipeline::default().run(&create_test_dataset());

    for shop in result.shops.iter().filter(|s| s.is_new_shop) {
        assert_eq!(shop.sales_yoy_amount, None);
        assert_eq!(shop.sales_yoy_pct, None);
        assert_eq!(shop.return_rate_yoy_pct, None);
        assert_eq!(shop.risk_level, RiskLevel::NewStore);
    }
}

#[test]
fn test_alpha_scenario_exact_values() {
    let result = AnalysisPipeline::default().run(&create_test_dataset());
    let alpha = result
        .shops
        .iter()
        .find(|s| s.shop_name == "AlphaMLB旗舰店")
        .unwrap();

    assert_eq!(alpha.sales_yoy_amount, Some(-20000.0));
    assert_eq!(alpha.sales_yoy_pct, Some(-20.0));
    assert!((alpha.return_rate_yoy_pct.unwrap() - 4.0).abs() < 1e-9);
    assert_eq!(alpha.risk_level, RiskLevel::HighRisk);
}

#[test]
fn test_incomplete_data_when_previous_rate_missing() {
    let rows = vec![create_test_row(
        "DeltaMLB旗舰店",
        "TM",
        Some("120,000"),
        Some("100,000"),
        Some("7%"),
        Some("-"), // 占位符 ⇒ 缺失
    )];
    let result = AnalysisPipeline::default().run(&rows);

    let delta = &result.shops[0];
    assert!(!delta.is_new_shop);
    assert_eq!(delta.risk_level, RiskLevel::IncompleteData);
    assert_eq!(delta.suggestion, "需补充数据");
}

// ==========================================
// 汇总不变式
// ==========================================

#[test]
fn test_total_sales_current_invariant() {
    let result = AnalysisPipeline::default().run(&create_test_dataset());

    for summary in result
        .channel_summaries
        .iter()
        .chain(result.brand_summaries.iter())
    {
        // 本年总额 >= 可比子集本年额,无新开店时取等
        assert!(summary.total_sales_current >= summary.comparable_sales_current);
        if summary.new_store_count == 0 {
            assert!(
                (summary.total_sales_current - summary.comparable_sales_current).abs() < 1e-9
            );
        }
    }
}

#[test]
fn test_new_shop_in_channel_current_total_only() {
    let result = AnalysisPipeline::default().run(&create_test_dataset());
    let tm = result
        .channel_summaries
        .iter()
        .find(|s| s.key == "TM")
        .unwrap();

    // Beta 的本年 50k 计入本年总额,不计入上年总额
    assert_eq!(tm.total_sales_current, 130000.0);
    assert_eq!(tm.total_sales_previous, 100000.0);
    assert_eq!(tm.new_store_count, 1);
    assert_eq!(tm.high_risk_count, 1);
}

#[test]
fn test_member_ordering_high_risk_before_normal() {
    let result = AnalysisPipeline::default().run(&create_test_dataset());

    for summary in &result.channel_summaries {
        let ranks: Vec<u8> = summary
            .member_shops
            .iter()
            .map(|s| s.risk_level.rank())
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted, "渠道 {} 成员未按风险序排列", summary.key);
    }
}

#[test]
fn test_channels_ordered_by_current_total_desc() {
    let result = AnalysisPipeline::default().run(&create_test_dataset());
    let totals: Vec<f64> = result
        .channel_summaries
        .iter()
        .map(|s| s.total_sales_current)
        .collect();
    for pair in totals.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn test_weighted_channel_rate_scenario() {
    // 两家可比店: 上年销售 [100k, 200k], 退货率 [4%, 6%]
    let rows = vec![
        create_test_row(
            "S1MLB店",
            "TM",
            Some("100,000"),
            Some("100,000"),
            Some("4%"),
            Some("4%"),
        ),
        create_test_row(
            "S2MLB店",
            "TM",
            Some("200,000"),
            Some("200,000"),
            Some("6%"),
            Some("6%"),
        ),
    ];
    let result = AnalysisPipeline::default().run(&rows);
    let tm = &result.channel_summaries[0];

    // (100k×4% + 200k×6%) / 300k = 5.33%
    assert!((tm.weighted_return_rate_previous - 0.05333333).abs() < 1e-6);

    // 加权均值有界性: 落在成员退货率 [4%, 6%] 区间内
    assert!(tm.weighted_return_rate_previous >= 0.04);
    assert!(tm.weighted_return_rate_previous <= 0.06);
}

// ==========================================
// 幂等性
// ==========================================

#[test]
fn test_pipeline_idempotent_field_for_field() {
    let rows = create_test_dataset();
    let pipeline = AnalysisPipeline::default();

    let first = pipeline.run(&rows);
    let second = pipeline.run(&rows);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

// ==========================================
// 自定义配置
// ==========================================

#[test]
fn test_custom_brand_taxonomy_without_restart() {
    use ec_return_analysis::config::{BrandMapping, BrandRule, CompareYears};

    let config = AnalysisConfig {
        years: CompareYears::default(),
        brand_mapping: BrandMapping::new(vec![BrandRule {
            brand: "Alpha系".to_string(),
            keywords: vec!["ALPHA".to_string()],
        }]),
    };
    let result = AnalysisPipeline::new(config).run(&create_test_dataset());

    // 只有 Alpha 店命中新映射表,其余被剔除
    assert_eq!(result.shops.len(), 1);
    assert_eq!(result.shops[0].brand, "Alpha系");
    assert_eq!(result.diagnostics.skipped_unmapped_brand, 2);
}
