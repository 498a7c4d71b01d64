// ==========================================
// 采购请求数据生成系统 - 领域类型定义
// ==========================================
// 职责: 封闭枚举类型与导出标签
// 序列化格式: 与导出数据集的字符串值保持一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 请求状态 (Request Status)
// ==========================================
// 唯一的派生/分类字段, 创建时计算一次, 之后不再变更
// 两套数据集的导出大小写不同:
// - 工作流数据集: 小写 ("pending")
// - 采购数据集: 首字母大写 ("Pending")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// 全部状态
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    /// 工作流数据集标签 (小写)
    pub fn workflow_label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    /// 采购数据集标签 (首字母大写)
    pub fn dataset_label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.workflow_label())
    }
}

// ==========================================
// 请求优先级 (Request Priority)
// ==========================================
// 两套数据集均导出小写
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPriority {
    Low,
    Medium,
    High,
}

impl RequestPriority {
    /// 全部优先级, 顺序与采样权重表一致 (LOW/MEDIUM/HIGH)
    pub const ALL: [RequestPriority; 3] = [
        RequestPriority::Low,
        RequestPriority::Medium,
        RequestPriority::High,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RequestPriority::Low => "low",
            RequestPriority::Medium => "medium",
            RequestPriority::High => "high",
        }
    }
}

impl fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==========================================
// 订单类型 (Order Type)
// ==========================================
// 仅采购数据集使用, 导出为 snake_case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    MaterialForProduction,
    OfficeEquipment,
    Other,
}

impl OrderType {
    /// 全部订单类型, 顺序与采样权重表一致
    pub const ALL: [OrderType; 3] = [
        OrderType::MaterialForProduction,
        OrderType::OfficeEquipment,
        OrderType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderType::MaterialForProduction => "material_for_production",
            OrderType::OfficeEquipment => "office_equipment",
            OrderType::Other => "other",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==========================================
// 交付地点 (Delivery Location)
// ==========================================
// 仅工作流数据集使用, 导出为展示名 (含空格)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryLocation {
    #[serde(rename = "Czech Republic")]
    CzechRepublic,
    Slovakia,
    Germany,
    Austria,
    Poland,
    Hungary,
    France,
    Italy,
}

impl DeliveryLocation {
    /// 全部交付地点 (均匀抽取用)
    pub const ALL: [DeliveryLocation; 8] = [
        DeliveryLocation::CzechRepublic,
        DeliveryLocation::Slovakia,
        DeliveryLocation::Germany,
        DeliveryLocation::Austria,
        DeliveryLocation::Poland,
        DeliveryLocation::Hungary,
        DeliveryLocation::France,
        DeliveryLocation::Italy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryLocation::CzechRepublic => "Czech Republic",
            DeliveryLocation::Slovakia => "Slovakia",
            DeliveryLocation::Germany => "Germany",
            DeliveryLocation::Austria => "Austria",
            DeliveryLocation::Poland => "Poland",
            DeliveryLocation::Hungary => "Hungary",
            DeliveryLocation::France => "France",
            DeliveryLocation::Italy => "Italy",
        }
    }
}

impl fmt::Display for DeliveryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
