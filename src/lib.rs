// ==========================================
// 采购请求合成数据生成系统 - 核心库
// ==========================================
// 技术栈: Rust + rand + csv + plotters
// 系统定位: 数据集生成工具 (非真实请求处理管线)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 状态判定规则
pub mod engine;

// 生成器层 - 记录采样
pub mod generator;

// 导出层 - CSV / JSON 序列化
pub mod export;

// 报告层 - 相关性矩阵与热力图
pub mod report;

// 配置层 - 生成参数档案
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    round2, DeliveryLocation, OrderType, ProcurementRequest, RequestPriority, RequestStatus,
    WorkflowRequest,
};

// 引擎
pub use engine::{
    ProcurementStatusEngine, ProcurementStatusInput, StatusWeights, WorkflowStatusEngine,
    WorkflowStatusInput,
};

// 生成器
pub use generator::{GeneratorError, ProcurementGenerator, WorkflowGenerator};

// 导出
pub use export::{export_to_csv, export_to_json, CsvRecord, ExportError};

// 报告
pub use report::{correlation_from_csv, render_heatmap, CorrelationMatrix, ReportError};

// 配置
pub use config::{GenerationProfile, ProcurementProfile, WorkflowProfile};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "采购请求合成数据生成系统";

// ==========================================
// 预编译检查
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
