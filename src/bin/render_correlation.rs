// ==========================================
// 采购请求合成数据生成系统 - 相关性报告入口
// ==========================================
// 职责: 读取采购数据集 CSV, 渲染相关性热力图
// 说明: 独立的后置流程, 与生成流程分进程运行
// 输出: ./data/correlation_matrix.png (整体覆盖)
// ==========================================

use anyhow::Context;
use procurement_datagen::config;
use procurement_datagen::logging;
use procurement_datagen::report::{correlation_from_csv, render_heatmap};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 相关性报告", procurement_datagen::APP_NAME);
    tracing::info!("系统版本: {}", procurement_datagen::VERSION);
    tracing::info!("==================================================");

    // 读取数据集并计算相关性矩阵
    let csv_path = Path::new(config::REQUESTS_CSV_PATH);
    let matrix = correlation_from_csv(csv_path)
        .with_context(|| format!("相关性计算失败: {}", csv_path.display()))?;
    tracing::info!("相关性矩阵: {} x {} 列", matrix.labels.len(), matrix.labels.len());

    // 渲染热力图
    let image_path = Path::new(config::CORRELATION_IMAGE_PATH);
    render_heatmap(&matrix, image_path)
        .with_context(|| format!("热力图渲染失败: {}", image_path.display()))?;
    tracing::info!("相关性热力图已保存: {}", image_path.display());

    Ok(())
}
