// ==========================================
// 采购请求数据生成系统 - 请求记录实体
// ==========================================
// 职责: 两种数据集变体的记录结构
// 红线: 记录构造后不可变, 记录之间无共享状态
// ==========================================

use crate::domain::types::{DeliveryLocation, OrderType, RequestPriority, RequestStatus};
use chrono::NaiveDate;
use serde::Serialize;

// ==========================================
// WorkflowRequest - 工作流数据集记录 (变体 1)
// ==========================================
// 字段顺序即 CSV 列顺序 / JSON 字段顺序
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowRequest {
    /// 顺序递增的正整数主键, 创建时分配
    pub request_id: u64,
    pub requested_items: u32,
    pub request_date: NaiveDate,
    /// 创建时由分类器计算一次, 之后不再变更
    pub status: RequestStatus,
    pub priority: RequestPriority,
    pub is_urgent: bool,
    pub expected_delivery: NaiveDate,
    pub is_from_wholesaler: bool,
    pub delivery_location: DeliveryLocation,
    /// 金额, 保留 2 位小数
    pub total_value: f64,
}

// ==========================================
// ProcurementRequest - 采购数据集记录 (变体 2)
// ==========================================
// 字段顺序即 CSV 列顺序
#[derive(Debug, Clone)]
pub struct ProcurementRequest {
    /// 顺序递增的正整数主键, 创建时分配
    pub request_id: u64,
    pub requested_items: u32,
    /// 创建时由分类器计算一次, 之后不再变更
    pub status: RequestStatus,
    pub priority: RequestPriority,
    pub is_urgent: bool,
    pub is_from_wholesaler: bool,
    /// 金额, 保留 2 位小数
    pub total_value: f64,
    /// total_value / requested_items, 保留 2 位小数
    pub price_per_item: f64,
    pub order_type: OrderType,
}

/// 四舍五入到 2 位小数 (导出金额字段的统一精度)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.006), 2.01);
        assert_eq!(round2(1500.0), 1500.0);
        assert_eq!(round2(6999.999), 7000.0);
    }

    #[test]
    fn test_workflow_request_json_shape() {
        let record = WorkflowRequest {
            request_id: 1,
            requested_items: 12,
            request_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: RequestStatus::Pending,
            priority: RequestPriority::High,
            is_urgent: true,
            expected_delivery: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            is_from_wholesaler: false,
            delivery_location: DeliveryLocation::Germany,
            total_value: 1234.5,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["request_id"], 1);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["request_date"], "2024-03-01");
        assert_eq!(json["expected_delivery"], "2024-03-09");
        assert_eq!(json["delivery_location"], "Germany");
        assert_eq!(json["is_urgent"], true);
    }
}
