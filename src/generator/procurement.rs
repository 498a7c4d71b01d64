// ==========================================
// 采购请求数据生成系统 - 采购数据集生成器 (变体 2)
// ==========================================
// 职责: 按档案分布独立采样各属性, 逐条调用状态判定引擎
// 输出: 不可变记录列表, 按 request_id 1..N 插入顺序排列
// ==========================================

use crate::config::ProcurementProfile;
use crate::domain::request::{round2, ProcurementRequest};
use crate::domain::types::{OrderType, RequestPriority};
use crate::engine::{ProcurementStatusEngine, ProcurementStatusInput};
use crate::generator::error::GeneratorError;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::instrument;

// ==========================================
// ProcurementGenerator - 采购数据集生成器
// ==========================================
pub struct ProcurementGenerator {
    profile: ProcurementProfile,
    priority_dist: WeightedIndex<f64>,
    order_type_dist: WeightedIndex<f64>,
    engine: ProcurementStatusEngine,
}

impl ProcurementGenerator {
    /// 创建生成器, 并对档案做一次性校验
    ///
    /// # 校验规则
    /// - items_min >= 1 (保证 price_per_item 除数为正)
    /// - 区间下限不大于上限
    /// - 概率值在 [0,1] 内
    /// - 权重表可构造加权抽样分布
    pub fn new(profile: ProcurementProfile) -> Result<Self, GeneratorError> {
        if profile.items_min < 1 {
            return Err(GeneratorError::NonPositiveItems(profile.items_min));
        }
        if profile.items_min > profile.items_max {
            return Err(GeneratorError::InvalidRange {
                field: "requested_items",
                min: f64::from(profile.items_min),
                max: f64::from(profile.items_max),
            });
        }
        if !(profile.value_min < profile.value_max) {
            return Err(GeneratorError::InvalidRange {
                field: "total_value",
                min: profile.value_min,
                max: profile.value_max,
            });
        }
        check_probability("urgent_probability", profile.urgent_probability)?;
        check_probability("wholesaler_probability", profile.wholesaler_probability)?;

        let priority_dist =
            WeightedIndex::new(profile.priority_weights).map_err(|e| {
                GeneratorError::InvalidWeights {
                    field: "priority_weights",
                    message: e.to_string(),
                }
            })?;
        let order_type_dist =
            WeightedIndex::new(profile.order_type_weights).map_err(|e| {
                GeneratorError::InvalidWeights {
                    field: "order_type_weights",
                    message: e.to_string(),
                }
            })?;

        Ok(Self {
            profile,
            priority_dist,
            order_type_dist,
            engine: ProcurementStatusEngine::new(),
        })
    }

    /// 生成 count 条记录 (生产入口, 进程级随机源, 无固定种子)
    #[instrument(skip(self))]
    pub fn generate(&self, count: usize) -> Vec<ProcurementRequest> {
        self.generate_with_rng(count, &mut rand::thread_rng())
    }

    /// 使用注入的随机源生成 count 条记录 (测试传入固定种子即可复现)
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<ProcurementRequest> {
        (1..=count as u64)
            .map(|request_id| self.generate_one(request_id, rng))
            .collect()
    }

    /// 生成单条记录: 各属性独立采样, 状态创建时计算一次
    fn generate_one<R: Rng + ?Sized>(&self, request_id: u64, rng: &mut R) -> ProcurementRequest {
        let requested_items = rng.gen_range(self.profile.items_min..=self.profile.items_max);
        let priority = RequestPriority::ALL[self.priority_dist.sample(rng)];
        let is_urgent = rng.gen_bool(self.profile.urgent_probability);
        let is_from_wholesaler = rng.gen_bool(self.profile.wholesaler_probability);
        let total_value = round2(rng.gen_range(self.profile.value_min..self.profile.value_max));
        // 分类器接收未舍入的商; 记录字段保留 2 位小数
        let price_per_item = total_value / f64::from(requested_items);
        let order_type = OrderType::ALL[self.order_type_dist.sample(rng)];

        let status = self.engine.classify(
            &ProcurementStatusInput {
                order_type,
                requested_items,
                total_value,
                is_urgent,
                is_from_wholesaler,
                price_per_item,
                priority,
            },
            rng,
        );

        ProcurementRequest {
            request_id,
            requested_items,
            status,
            priority,
            is_urgent,
            is_from_wholesaler,
            total_value,
            price_per_item: round2(price_per_item),
            order_type,
        }
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), GeneratorError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneratorError::InvalidProbability { field, value });
    }
    Ok(())
}
