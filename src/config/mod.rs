// ==========================================
// 采购请求数据生成系统 - 配置层
// ==========================================
// 职责: 生成参数档案与固定输出路径
// 存储: 可选 JSON 档案文件, 缺省时使用内置默认值
// ==========================================

pub mod generation_profile;

// 重导出生成参数档案
pub use generation_profile::{GenerationProfile, ProcurementProfile, WorkflowProfile};

// ==========================================
// 固定路径常量
// ==========================================
// 无 CLI 参数, 无环境变量; 输出路径为硬编码常量

/// 数据集 CSV 输出路径
pub const REQUESTS_CSV_PATH: &str = "./data/requests.csv";

/// 工作流数据集 JSON 输出路径
pub const REQUESTS_JSON_PATH: &str = "./data/requests.json";

/// 相关性热力图输出路径
pub const CORRELATION_IMAGE_PATH: &str = "./data/correlation_matrix.png";

/// 生成参数档案文件路径 (存在则加载, 否则使用默认值)
pub const PROFILE_PATH: &str = "./datagen.profile.json";
