// ==========================================
// EC退货率分析系统 - CLI 主入口
// ==========================================
// 用法: ec-return-analysis <输入文件.csv|.xlsx> [输出文件.json]
// 流程: 读取快照 → 运行分析管线 → 打印统计 → 导出 JSON
// ==========================================

use ec_return_analysis::api::{ApiError, ApiResult};
use ec_return_analysis::config::AnalysisConfig;
use ec_return_analysis::{logging, DashboardApi, APP_NAME, VERSION};
use std::collections::BTreeMap;
use std::process::ExitCode;

fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 渠道/品牌 YOY 决策支持", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("处理失败: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> ApiResult<()> {
    let mut args = std::env::args().skip(1);
    let input_path = args
        .next()
        .ok_or_else(|| ApiError::InvalidInput("缺少输入文件参数".to_string()))?;
    let output_path = args.next();

    tracing::info!("读取文件: {}", input_path);
    let api = DashboardApi::from_file(&input_path, AnalysisConfig::default())?;

    // 处理统计
    let diag = &api.result().diagnostics;
    tracing::info!("输入行数: {}", diag.input_rows);
    tracing::info!("成功处理: {} 家店铺", diag.shops_produced);
    tracing::info!("剔除店铺: {} 家（未匹配品牌规则）", diag.skipped_unmapped_brand);

    // 品牌分布
    let mut brand_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for shop in api.shop_yoy() {
        *brand_counts.entry(shop.brand.as_str()).or_insert(0) += 1;
    }
    for (brand, count) in &brand_counts {
        tracing::info!("品牌分布 - {}: {} 家店铺", brand, count);
    }

    // 风险统计
    let mut risk_counts: BTreeMap<String, usize> = BTreeMap::new();
    for shop in api.shop_yoy() {
        *risk_counts.entry(shop.risk_level.to_string()).or_insert(0) += 1;
    }
    for (risk, count) in &risk_counts {
        tracing::info!("风险统计 - {}: {} 家", risk, count);
    }

    // 渠道概览
    for summary in api.channel_summaries() {
        tracing::info!(
            "渠道 {} - 店铺 {} 家, 本年销售 {:.1}K, 风险指标: {}",
            summary.key,
            summary.shop_count,
            summary.total_sales_current / 1000.0,
            if summary.has_risk { "有" } else { "无" }
        );
    }

    // 导出 JSON 快照
    if let Some(path) = output_path {
        let json = api.export_json()?;
        std::fs::write(&path, json)
            .map_err(|e| ApiError::ExportError(format!("{}: {}", path, e)))?;
        tracing::info!("分析结果已保存至: {}", path);
    }

    tracing::info!("处理完成");
    Ok(())
}
