// ==========================================
// 采购请求数据生成系统 - 状态判定引擎层
// ==========================================
// 职责: 将记录属性向量映射到唯一状态标签
// 红线: 随机源一律由调用方注入, 引擎自身不持有随机状态
// ==========================================

pub mod procurement_status;
pub mod workflow_status;

// 重导出核心引擎
pub use procurement_status::{ProcurementStatusEngine, ProcurementStatusInput, StatusWeights};
pub use workflow_status::{WorkflowStatusEngine, WorkflowStatusInput};
