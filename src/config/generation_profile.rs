// ==========================================
// 采购请求数据生成系统 - 生成参数档案
// ==========================================
// 职责: 两种数据集变体的采样分布参数
// 默认值: 与既有数据集保持一致, 档案文件可整体或部分覆写
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

// ==========================================
// ProcurementProfile - 采购数据集生成参数 (变体 2)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcurementProfile {
    /// 生成行数
    pub rows: usize,

    /// 请求数量下限 (含), 必须 >= 1 (price_per_item 的除数由此保证为正)
    pub items_min: u32,

    /// 请求数量上限 (含)
    pub items_max: u32,

    /// 总金额下限
    pub value_min: f64,

    /// 总金额上限
    pub value_max: f64,

    /// 优先级采样权重, 顺序为 LOW/MEDIUM/HIGH
    pub priority_weights: [f64; 3],

    /// 加急概率
    pub urgent_probability: f64,

    /// 批发商来源概率
    pub wholesaler_probability: f64,

    /// 订单类型采样权重, 顺序为 生产物料/办公设备/其他
    pub order_type_weights: [f64; 3],
}

impl Default for ProcurementProfile {
    fn default() -> Self {
        Self {
            rows: 10000,
            items_min: 5,
            items_max: 40,
            value_min: 1500.0,
            value_max: 7000.0,
            priority_weights: [0.1, 0.6, 0.3],
            urgent_probability: 0.5,
            wholesaler_probability: 0.7,
            order_type_weights: [0.5, 0.3, 0.2],
        }
    }
}

// ==========================================
// WorkflowProfile - 工作流数据集生成参数 (变体 1)
// ==========================================
// 分类属性均为等概率抽取, 无权重配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowProfile {
    /// 生成行数
    pub rows: usize,

    /// 请求数量下限 (含)
    pub items_min: u32,

    /// 请求数量上限 (含)
    pub items_max: u32,

    /// 总金额下限
    pub value_min: f64,

    /// 总金额上限
    pub value_max: f64,

    /// 请求日期回溯天数上限 (含, 下限固定为 1)
    pub request_age_days_max: i64,

    /// 预期交付提前期天数上限 (含, 下限固定为 1)
    pub delivery_lead_days_max: i64,
}

impl Default for WorkflowProfile {
    fn default() -> Self {
        Self {
            rows: 1000,
            items_min: 1,
            items_max: 50,
            value_min: 500.0,
            value_max: 10000.0,
            request_age_days_max: 30,
            delivery_lead_days_max: 15,
        }
    }
}

// ==========================================
// GenerationProfile - 完整生成档案
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationProfile {
    pub procurement: ProcurementProfile,
    pub workflow: WorkflowProfile,
}

impl GenerationProfile {
    /// 加载生成档案: 文件存在则解析, 否则返回默认值
    ///
    /// 档案文件内容非法时报错而非静默回退, 避免用错误的分布生成数据
    pub fn load_or_default(path: &Path) -> Result<Self, serde_json::Error> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                info!("加载生成参数档案: {}", path.display());
                serde_json::from_str(&raw)
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_procurement_profile() {
        let profile = ProcurementProfile::default();
        assert_eq!(profile.rows, 10000);
        assert_eq!(profile.items_min, 5);
        assert_eq!(profile.items_max, 40);
        assert_eq!(profile.priority_weights, [0.1, 0.6, 0.3]);
        assert_eq!(profile.order_type_weights, [0.5, 0.3, 0.2]);
    }

    #[test]
    fn test_partial_profile_overrides_defaults() {
        // 档案文件允许只给出部分字段
        let raw = r#"{ "procurement": { "rows": 50 } }"#;
        let profile: GenerationProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.procurement.rows, 50);
        assert_eq!(profile.procurement.items_max, 40);
        assert_eq!(profile.workflow.rows, 1000);
    }
}
