// ==========================================
// 采购请求合成数据生成系统 - 工作流数据集入口
// ==========================================
// 职责: 生成工作流数据集 (变体 1) 并导出 CSV + JSON
// 输出: ./data/requests.csv 与 ./data/requests.json (整体覆盖)
// ==========================================

use anyhow::Context;
use procurement_datagen::config::{self, GenerationProfile};
use procurement_datagen::export::{export_to_csv, export_to_json};
use procurement_datagen::generator::WorkflowGenerator;
use procurement_datagen::logging;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 工作流数据集生成", procurement_datagen::APP_NAME);
    tracing::info!("系统版本: {}", procurement_datagen::VERSION);
    tracing::info!("==================================================");

    // 加载生成参数档案 (缺省时使用内置默认值)
    let profile = GenerationProfile::load_or_default(Path::new(config::PROFILE_PATH))
        .context("生成参数档案解析失败")?;

    // 生成记录集
    let generator = WorkflowGenerator::new(profile.workflow.clone())?;
    let records = generator.generate(profile.workflow.rows);
    tracing::info!("已生成 {} 条工作流请求记录", records.len());

    // 导出 CSV + JSON (目标目录不存在时直接报错)
    let csv_path = Path::new(config::REQUESTS_CSV_PATH);
    export_to_csv(&records, csv_path)
        .with_context(|| format!("CSV 导出失败: {}", csv_path.display()))?;
    tracing::info!("数据集已写入: {}", csv_path.display());

    let json_path = Path::new(config::REQUESTS_JSON_PATH);
    export_to_json(&records, json_path)
        .with_context(|| format!("JSON 导出失败: {}", json_path.display()))?;
    tracing::info!("数据集已写入: {}", json_path.display());

    Ok(())
}
