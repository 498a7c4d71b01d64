// ==========================================
// 采购请求数据生成系统 - 导出层
// ==========================================
// 职责: 将记录集序列化为 CSV / JSON 文件
// 红线: 最近一次运行完整替换既有输出, 不追加
// ==========================================

pub mod csv_exporter;
pub mod error;
pub mod json_exporter;

// 重导出核心接口
pub use csv_exporter::{export_to_csv, CsvRecord};
pub use error::ExportError;
pub use json_exporter::export_to_json;
