// ==========================================
// 导出层集成测试
// ==========================================
// 测试目标: CSV/JSON 导出的列序、覆盖语义与大小写约定
// ==========================================


use chrono::NaiveDate;
use procurement_datagen::domain::{
    DeliveryLocation, OrderType, ProcurementRequest, RequestPriority, RequestStatus,
    WorkflowRequest,
};
use procurement_datagen::export::{export_to_csv, export_to_json, CsvRecord, ExportError};
use test_helpers::procurement_record;

fn workflow_record(request_id: u64, status: RequestStatus) -> WorkflowRequest {
    WorkflowRequest {
        request_id,
        requested_items: 5,
        request_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        status,
        priority: RequestPriority::Low,
        is_urgent: false,
        expected_delivery: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        is_from_wholesaler: true,
        delivery_location: DeliveryLocation::CzechRepublic,
        total_value: 999.5,
    }
}

#[test]
fn test_csv_roundtrip_row_count_and_columns() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("requests.csv");

    let records: Vec<ProcurementRequest> = (1..=5)
        .map(|id| procurement_record(id, RequestStatus::Pending, OrderType::Other))
        .collect();
    export_to_csv(&records, &path).expect("Export should succeed");

    let mut reader = csv::Reader::from_path(&path).expect("Readback should succeed");
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    assert_eq!(headers, ProcurementRequest::COLUMNS);

    let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), records.len(), "行数应与内存记录数一致");
}

#[test]
fn test_csv_overwrite_fully_replaces() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("requests.csv");

    let first: Vec<ProcurementRequest> = (1..=10)
        .map(|id| procurement_record(id, RequestStatus::Approved, OrderType::Other))
        .collect();
    export_to_csv(&first, &path).expect("First export should succeed");

    let second: Vec<ProcurementRequest> = (1..=3)
        .map(|id| procurement_record(id, RequestStatus::Rejected, OrderType::OfficeEquipment))
        .collect();
    export_to_csv(&second, &path).expect("Second export should succeed");

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 3, "重新导出应整体替换既有内容, 不追加");
}

#[test]
fn test_csv_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no_such_dir").join("requests.csv");

    let records = vec![procurement_record(1, RequestStatus::Pending, OrderType::Other)];
    let result = export_to_csv(&records, &path);
    assert!(matches!(result, Err(ExportError::Io(_))), "目录缺失应报 IO 错误");
}

#[test]
fn test_procurement_csv_status_title_case() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("requests.csv");

    let records = vec![
        procurement_record(1, RequestStatus::Pending, OrderType::MaterialForProduction),
        procurement_record(2, RequestStatus::Approved, OrderType::OfficeEquipment),
        procurement_record(3, RequestStatus::Rejected, OrderType::Other),
    ];
    export_to_csv(&records, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    // 采购数据集: 状态首字母大写, 订单类型 snake_case, 布尔为 true/false
    assert!(raw.contains("Pending"));
    assert!(raw.contains("Approved"));
    assert!(raw.contains("Rejected"));
    assert!(raw.contains("material_for_production"));
    assert!(raw.contains("true"));
    assert!(!raw.contains("pending"), "采购数据集不应出现小写状态");
}

#[test]
fn test_workflow_csv_status_lower_case_and_dates() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("requests.csv");

    let records = vec![
        workflow_record(1, RequestStatus::Pending),
        workflow_record(2, RequestStatus::Approved),
    ];
    export_to_csv(&records, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    // 工作流数据集: 状态小写, 日期 YYYY-MM-DD, 地点为展示名
    assert!(raw.contains("pending"));
    assert!(raw.contains("approved"));
    assert!(raw.contains("2024-05-01"));
    assert!(raw.contains("Czech Republic"));
    assert!(!raw.contains("Pending"), "工作流数据集不应出现首字母大写状态");
}

#[test]
fn test_json_four_space_indent_and_field_set() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("requests.json");

    let records = vec![
        workflow_record(1, RequestStatus::Approved),
        workflow_record(2, RequestStatus::Rejected),
    ];
    export_to_json(&records, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    // 4 空格缩进: 数组元素缩进 4, 对象字段缩进 8
    assert!(raw.starts_with("[\n    {\n        \"request_id\": 1"), "raw = {}", &raw[..60.min(raw.len())]);

    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["status"], "approved");
    assert_eq!(array[1]["status"], "rejected");
    assert_eq!(array[0]["request_date"], "2024-05-01");
    assert_eq!(array[0]["delivery_location"], "Czech Republic");
    assert_eq!(array[0]["is_from_wholesaler"], true);
}

#[test]
fn test_json_overwrite_fully_replaces() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("requests.json");

    let first: Vec<WorkflowRequest> = (1..=8)
        .map(|id| workflow_record(id, RequestStatus::Pending))
        .collect();
    export_to_json(&first, &path).unwrap();

    let second = vec![workflow_record(1, RequestStatus::Approved)];
    export_to_json(&second, &path).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}
