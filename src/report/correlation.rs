// ==========================================
// 采购请求数据生成系统 - 相关性矩阵计算
// ==========================================
// 职责: 读取采购数据集 CSV, one-hot 编码分类列,
//       对数值列 + one-hot 列计算两两 Pearson 相关系数
// ==========================================

use crate::report::error::ReportError;
use csv::ReaderBuilder;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

/// 参与相关性分析的数值列 (固定顺序)
const NUMERIC_COLUMNS: &[&str] = &[
    "requested_items",
    "total_value",
    "is_urgent",
    "is_from_wholesaler",
    "price_per_item",
];

/// 需要 one-hot 编码的分类列 (固定顺序, 类别值按字典序展开)
const ONE_HOT_COLUMNS: &[&str] = &["status", "order_type"];

// ==========================================
// CorrelationMatrix - 相关性矩阵
// ==========================================
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    /// 列标签, 与 values 的行/列顺序一致
    pub labels: Vec<String>,

    /// N x N 对称矩阵; 常量列与任何列的相关系数为 NaN
    pub values: Vec<Vec<f64>>,
}

/// 从导出的采购数据集 CSV 构建相关性矩阵
///
/// # 失败模式
/// - 文件/目录不存在: IO 错误
/// - 缺少数值列或分类列: MissingColumn
/// - 单元格无法解析为数值/布尔: ValueParse
/// - 数据集不含任何数据行: EmptyDataset
pub fn correlation_from_csv(path: &Path) -> Result<CorrelationMatrix, ReportError> {
    let series = load_series(path)?;
    Ok(pearson_matrix(series))
}

/// 读取 CSV 并展开为 (标签, 数值序列) 列表
fn load_series(path: &Path) -> Result<Vec<(String, Vec<f64>)>, ReportError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column_index = |name: &str| -> Result<usize, ReportError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ReportError::MissingColumn(name.to_string()))
    };

    let numeric_idx: Vec<usize> = NUMERIC_COLUMNS
        .iter()
        .map(|c| column_index(c))
        .collect::<Result<_, _>>()?;
    let one_hot_idx: Vec<usize> = ONE_HOT_COLUMNS
        .iter()
        .map(|c| column_index(c))
        .collect::<Result<_, _>>()?;

    // 数值序列与分类原始值逐行累积
    let mut numeric_series: Vec<Vec<f64>> = vec![Vec::new(); numeric_idx.len()];
    let mut categorical_raw: Vec<Vec<String>> = vec![Vec::new(); one_hot_idx.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        for (series, &idx) in numeric_series.iter_mut().zip(&numeric_idx) {
            let raw = record.get(idx).unwrap_or("").trim();
            series.push(parse_numeric(raw).ok_or_else(|| ReportError::ValueParse {
                row: row_no + 1,
                column: headers[idx].clone(),
                value: raw.to_string(),
            })?);
        }
        for (values, &idx) in categorical_raw.iter_mut().zip(&one_hot_idx) {
            values.push(record.get(idx).unwrap_or("").trim().to_string());
        }
    }

    if numeric_series[0].is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    // 数值列在前, one-hot 列在后
    let mut series: Vec<(String, Vec<f64>)> = NUMERIC_COLUMNS
        .iter()
        .zip(numeric_series)
        .map(|(name, values)| (name.to_string(), values))
        .collect();

    for (col_name, values) in ONE_HOT_COLUMNS.iter().zip(categorical_raw) {
        // 类别按字典序展开为 0/1 指示列
        let categories: BTreeSet<&String> = values.iter().collect();
        for category in categories {
            let indicator: Vec<f64> = values
                .iter()
                .map(|v| if v == category { 1.0 } else { 0.0 })
                .collect();
            series.push((format!("{}_{}", col_name, category), indicator));
        }
    }

    Ok(series)
}

/// 布尔列按 1/0 编码, 其余按浮点解析
fn parse_numeric(raw: &str) -> Option<f64> {
    match raw {
        "true" | "True" => Some(1.0),
        "false" | "False" => Some(0.0),
        _ => raw.parse::<f64>().ok(),
    }
}

/// 计算两两 Pearson 相关系数矩阵
fn pearson_matrix(series: Vec<(String, Vec<f64>)>) -> CorrelationMatrix {
    let n = series.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        for j in i..n {
            let r = pearson(&series[i].1, &series[j].1);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        labels: series.into_iter().map(|(label, _)| label).collect(),
        values,
    }
}

/// 单对序列的 Pearson 相关系数; 任一序列方差为零时无定义 (NaN)
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        var_x += dx * dx;
        var_y += dy * dy;
        cov_xy += dx * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return f64::NAN;
    }
    cov_xy / (var_x.sqrt() * var_y.sqrt())
}
