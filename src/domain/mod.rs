// ==========================================
// 采购请求数据生成系统 - 领域模型层
// ==========================================
// 职责: 定义请求记录实体与封闭枚举类型
// 红线: 不含随机采样逻辑, 不含导出逻辑
// ==========================================

pub mod request;
pub mod types;

// 重导出核心类型
pub use request::{round2, ProcurementRequest, WorkflowRequest};
pub use types::{DeliveryLocation, OrderType, RequestPriority, RequestStatus};
