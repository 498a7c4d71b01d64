// ==========================================
// 采购请求数据生成系统 - 报告模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 相关性报告错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    // ===== 文件相关错误 =====
    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),

    // ===== 数据相关错误 =====
    #[error("数据集缺少列: {0}")]
    MissingColumn(String),

    #[error("数值解析失败 (行 {row}, 列 {column}): {value}")]
    ValueParse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("数据集为空, 无法计算相关性")]
    EmptyDataset,

    // ===== 渲染错误 =====
    #[error("热力图渲染失败: {0}")]
    Render(String),
}
