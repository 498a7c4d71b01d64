// ==========================================
// 采购请求数据生成系统 - CSV 导出
// ==========================================
// 职责: 固定列序 + 表头行, 每记录一行
// 覆盖语义: 直接 truncate 覆盖, 最近一次运行完整替换既有内容
// (不做先删后写, 避免目标文件不存在时的删除失败)
// ==========================================

use crate::domain::request::{ProcurementRequest, WorkflowRequest};
use crate::export::error::ExportError;
use csv::Writer;
use std::fs::File;
use std::path::Path;

// ==========================================
// CsvRecord - 固定列序的 CSV 记录
// ==========================================
pub trait CsvRecord {
    /// 表头列名 (顺序即列序)
    const COLUMNS: &'static [&'static str];

    /// 单行字段值, 与 COLUMNS 一一对应
    fn to_row(&self) -> Vec<String>;
}

// ==========================================
// 采购数据集列序 (变体 2)
// ==========================================
// 状态列使用首字母大写标签
impl CsvRecord for ProcurementRequest {
    const COLUMNS: &'static [&'static str] = &[
        "request_id",
        "requested_items",
        "status",
        "priority",
        "is_urgent",
        "is_from_wholesaler",
        "total_value",
        "price_per_item",
        "order_type",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.request_id.to_string(),
            self.requested_items.to_string(),
            self.status.dataset_label().to_string(),
            self.priority.label().to_string(),
            self.is_urgent.to_string(),
            self.is_from_wholesaler.to_string(),
            self.total_value.to_string(),
            self.price_per_item.to_string(),
            self.order_type.label().to_string(),
        ]
    }
}

// ==========================================
// 工作流数据集列序 (变体 1)
// ==========================================
// 状态列使用小写标签, 日期列格式 YYYY-MM-DD
impl CsvRecord for WorkflowRequest {
    const COLUMNS: &'static [&'static str] = &[
        "request_id",
        "requested_items",
        "request_date",
        "status",
        "priority",
        "is_urgent",
        "expected_delivery",
        "is_from_wholesaler",
        "delivery_location",
        "total_value",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.request_id.to_string(),
            self.requested_items.to_string(),
            self.request_date.format("%Y-%m-%d").to_string(),
            self.status.workflow_label().to_string(),
            self.priority.label().to_string(),
            self.is_urgent.to_string(),
            self.expected_delivery.format("%Y-%m-%d").to_string(),
            self.is_from_wholesaler.to_string(),
            self.delivery_location.label().to_string(),
            self.total_value.to_string(),
        ]
    }
}

/// 导出记录集到 CSV 文件
///
/// # 行为
/// - 表头行 + 每记录一行, 列序固定
/// - 目标文件存在则整体覆盖
/// - 目标目录不存在时返回 IO 错误
pub fn export_to_csv<T: CsvRecord>(records: &[T], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(T::COLUMNS)?;
    for record in records {
        writer.write_record(&record.to_row())?;
    }
    writer.flush()?;

    Ok(())
}
