// ==========================================
// 采购请求数据生成系统 - 生成器错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 生成器构造/采样参数错误
///
/// 非法档案在构造时报错, 生成阶段不再做参数检查
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("采样区间非法 ({field}): 下限 {min} 大于上限 {max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("请求数量下限必须 >= 1 (price_per_item 的除数), 实际为 {0}")]
    NonPositiveItems(u32),

    #[error("概率值非法 ({field}): {value} 不在 [0, 1] 区间内")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("采样权重非法 ({field}): {message}")]
    InvalidWeights {
        field: &'static str,
        message: String,
    },
}
