// ==========================================
// 采购请求数据生成系统 - 工作流数据集生成器 (变体 1)
// ==========================================
// 职责: 等概率采样各属性 (含日期与交付地点), 逐条调用状态判定引擎
// 输出: 不可变记录列表, 按 request_id 1..N 插入顺序排列
// ==========================================

use crate::config::WorkflowProfile;
use crate::domain::request::{round2, WorkflowRequest};
use crate::domain::types::{DeliveryLocation, RequestPriority};
use crate::engine::{WorkflowStatusEngine, WorkflowStatusInput};
use crate::generator::error::GeneratorError;
use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use tracing::instrument;

// ==========================================
// WorkflowGenerator - 工作流数据集生成器
// ==========================================
pub struct WorkflowGenerator {
    profile: WorkflowProfile,
    engine: WorkflowStatusEngine,
}

impl WorkflowGenerator {
    /// 创建生成器, 并对档案做一次性校验
    pub fn new(profile: WorkflowProfile) -> Result<Self, GeneratorError> {
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
        if profile.request_age_days_max < 1 {
            return Err(GeneratorError::InvalidRange {
                field: "request_age_days",
                min: 1.0,
                max: profile.request_age_days_max as f64,
            });
        }
        if profile.delivery_lead_days_max < 1 {
            return Err(GeneratorError::InvalidRange {
                field: "delivery_lead_days",
                min: 1.0,
                max: profile.delivery_lead_days_max as f64,
            });
        }

        Ok(Self {
            profile,
            engine: WorkflowStatusEngine::new(),
        })
    }

    /// 生成 count 条记录 (生产入口, 进程级随机源, 以本地当日为基准日)
    #[instrument(skip(self))]
    pub fn generate(&self, count: usize) -> Vec<WorkflowRequest> {
        self.generate_with_rng(count, Local::now().date_naive(), &mut rand::thread_rng())
    }

    /// 使用注入的基准日与随机源生成 count 条记录
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        count: usize,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<WorkflowRequest> {
        (1..=count as u64)
            .map(|request_id| self.generate_one(request_id, today, rng))
            .collect()
    }

    /// 生成单条记录: 各属性独立采样, 状态创建时计算一次
    fn generate_one<R: Rng + ?Sized>(
        &self,
        request_id: u64,
        today: NaiveDate,
        rng: &mut R,
    ) -> WorkflowRequest {
        let requested_items = rng.gen_range(self.profile.items_min..=self.profile.items_max);
        let request_date = today - Duration::days(rng.gen_range(1..=self.profile.request_age_days_max));
        let priority = RequestPriority::ALL[rng.gen_range(0..RequestPriority::ALL.len())];
        let is_urgent = rng.gen_bool(0.5);
        let expected_delivery =
            request_date + Duration::days(rng.gen_range(1..=self.profile.delivery_lead_days_max));
        let is_from_wholesaler = rng.gen_bool(0.5);
        let delivery_location = DeliveryLocation::ALL[rng.gen_range(0..DeliveryLocation::ALL.len())];
        let total_value = round2(rng.gen_range(self.profile.value_min..self.profile.value_max));

        let status = self.engine.classify(
            &WorkflowStatusInput {
                priority,
                is_urgent,
                is_from_wholesaler,
                total_value,
            },
            rng,
        );

        WorkflowRequest {
            request_id,
            requested_items,
            request_date,
            status,
            priority,
            is_urgent,
            expected_delivery,
            is_from_wholesaler,
            delivery_location,
            total_value,
        }
    }
}
