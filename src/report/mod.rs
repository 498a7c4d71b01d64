// ==========================================
// 采购请求数据生成系统 - 相关性报告层
// ==========================================
// 职责: 读取导出数据集, 计算 Pearson 相关矩阵并渲染热力图
// 说明: 作为独立的后置流程运行, 不依赖生成器内存状态
// ==========================================

pub mod correlation;
pub mod error;
pub mod heatmap;

// 重导出核心接口
pub use correlation::{correlation_from_csv, CorrelationMatrix};
pub use error::ReportError;
pub use heatmap::render_heatmap;
