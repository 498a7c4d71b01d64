// ==========================================
// 采购请求数据生成系统 - JSON 导出
// ==========================================
// 职责: 平铺对象数组, 4 空格缩进
// 覆盖语义: 与 CSV 导出一致, 直接 truncate 覆盖
// ==========================================

use crate::export::error::ExportError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出记录集到 JSON 文件 (数组形式, 4 空格缩进)
///
/// # 行为
/// - 目标文件存在则整体覆盖
/// - 目标目录不存在时返回 IO 错误
pub fn export_to_json<T: Serialize>(records: &[T], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut serializer)?;
    writer.flush()?;

    Ok(())
}
