// ==========================================
// 端到端集成测试
// ==========================================
// 测试目标: 生成 -> 导出 -> 相关性 -> 热力图 全链路
// ==========================================

use chrono::NaiveDate;
use procurement_datagen::config::{GenerationProfile, ProcurementProfile, WorkflowProfile};
use procurement_datagen::export::{export_to_csv, export_to_json};
use procurement_datagen::generator::{ProcurementGenerator, WorkflowGenerator};
use procurement_datagen::report::{correlation_from_csv, render_heatmap};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_procurement_pipeline_end_to_end() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("requests.csv");
    let image_path = dir.path().join("correlation_matrix.png");

    // 生成
    let generator = ProcurementGenerator::new(ProcurementProfile::default())
        .expect("Default profile should be valid");
    let mut rng = StdRng::seed_from_u64(2024);
    let records = generator.generate_with_rng(300, &mut rng);
    assert_eq!(records.len(), 300);

    // 导出
    export_to_csv(&records, &csv_path).expect("Export should succeed");

    // 相关性矩阵: 回读行数与列集合应与内存数据一致
    let matrix = correlation_from_csv(&csv_path).expect("Correlation should succeed");
    for column in [
        "requested_items",
        "total_value",
        "is_urgent",
        "is_from_wholesaler",
        "price_per_item",
    ] {
        assert!(
            matrix.labels.iter().any(|l| l == column),
            "缺少数值列 {}",
            column
        );
    }
    let status_columns = matrix
        .labels
        .iter()
        .filter(|l| l.starts_with("status_"))
        .count();
    assert!(status_columns >= 2, "300 条样本应覆盖至少两种状态");

    // 热力图
    render_heatmap(&matrix, &image_path).expect("Render should succeed");
    assert!(image_path.exists());
}

#[test]
fn test_workflow_pipeline_end_to_end() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("requests.csv");
    let json_path = dir.path().join("requests.json");

    let generator =
        WorkflowGenerator::new(WorkflowProfile::default()).expect("Default profile should be valid");
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let records = generator.generate_with_rng(120, today, &mut rng);

    export_to_csv(&records, &csv_path).expect("CSV export should succeed");
    export_to_json(&records, &json_path).expect("JSON export should succeed");

    // CSV 回读: 行数一致
    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 120);

    // JSON 回读: 行数与字段集合一致
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 120);
    let first = array[0].as_object().unwrap();
    for field in [
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
    ] {
        assert!(first.contains_key(field), "JSON 缺少字段 {}", field);
    }
}

#[test]
fn test_default_generation_profile_is_valid() {
    let profile = GenerationProfile::default();
    assert!(ProcurementGenerator::new(profile.procurement).is_ok());
    assert!(WorkflowGenerator::new(profile.workflow).is_ok());
}
