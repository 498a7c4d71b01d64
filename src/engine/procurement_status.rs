// ==========================================
// 采购请求数据生成系统 - 采购状态判定引擎 (变体 2)
// ==========================================
// 职责: 按属性向量累加批准/拒绝权重, 单次抽样判定状态
// 输入: 订单类型 / 数量 / 金额 / 加急 / 批发商 / 单价 / 优先级
// 输出: RequestStatus
// ==========================================
// 红线: 权重增量表数值固定, 不截断到 [0,1]
// ==========================================

use crate::domain::types::{OrderType, RequestPriority, RequestStatus};
use rand::Rng;

/// 拒绝权重初始值
pub const BASE_REJECT_WEIGHT: f64 = 0.1;

/// 批准权重初始值
pub const BASE_APPROVE_WEIGHT: f64 = 0.15;

// ==========================================
// ProcurementStatusInput - 判定输入属性
// ==========================================
// 分类器接收未舍入的单价商 (记录字段另行保留 2 位小数)
#[derive(Debug, Clone, Copy)]
pub struct ProcurementStatusInput {
    pub order_type: OrderType,
    pub requested_items: u32,
    pub total_value: f64,
    pub is_urgent: bool,
    pub is_from_wholesaler: bool,
    pub price_per_item: f64,
    pub priority: RequestPriority,
}

// ==========================================
// StatusWeights - 累加后的权重标量
// ==========================================
// 无上限累加值: reject + approve 可能超过 1,
// 此时 PENDING 区间为空 (不可达), 属既有判定行为
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusWeights {
    pub reject: f64,
    pub approve: f64,
}

// ==========================================
// ProcurementStatusEngine - 加权区间状态判定
// ==========================================
pub struct ProcurementStatusEngine;

impl ProcurementStatusEngine {
    pub fn new() -> Self {
        Self
    }

    /// 按属性向量累加权重 (纯函数, 不消耗随机数)
    ///
    /// 权重增量表:
    /// - 订单类型: 生产物料 approve+0.85/reject-0.5, 办公设备 reject+0.4/approve+0.1, 其他 reject+0.2
    /// - 请求数量: >30 reject+0.6, <10 approve+0.3
    /// - 总金额:   >5000 reject+0.8, <2000 approve+0.6
    /// - 加急:     否 reject+0.7, 是 approve+0.8
    /// - 批发商:   是 approve+0.7, 否 reject+0.5
    /// - 单价:     >300 reject+0.7, <100 approve+0.6
    /// - 优先级:   HIGH approve+0.9, LOW reject+0.7
    pub fn weights(&self, input: &ProcurementStatusInput) -> StatusWeights {
        let mut reject = BASE_REJECT_WEIGHT;
        let mut approve = BASE_APPROVE_WEIGHT;

        // 订单类型
        match input.order_type {
            OrderType::MaterialForProduction => {
                approve += 0.85;
                reject -= 0.5;
            }
            OrderType::OfficeEquipment => {
                reject += 0.4;
                approve += 0.1;
            }
            OrderType::Other => {
                reject += 0.2;
            }
        }

        // 请求数量
        if input.requested_items > 30 {
            reject += 0.6;
        } else if input.requested_items < 10 {
            approve += 0.3;
        }

        // 总金额
        if input.total_value > 5000.0 {
            reject += 0.8;
        } else if input.total_value < 2000.0 {
            approve += 0.6;
        }

        // 加急
        if !input.is_urgent {
            reject += 0.7;
        } else {
            approve += 0.8;
        }

        // 批发商来源
        if input.is_from_wholesaler {
            approve += 0.7;
        } else {
            reject += 0.5;
        }

        // 单价
        if input.price_per_item > 300.0 {
            reject += 0.7;
        } else if input.price_per_item < 100.0 {
            approve += 0.6;
        }

        // 优先级
        match input.priority {
            RequestPriority::High => approve += 0.9,
            RequestPriority::Low => reject += 0.7,
            RequestPriority::Medium => {}
        }

        StatusWeights { reject, approve }
    }

    /// 用给定的均匀抽样值 r ∈ [0,1) 判定状态 (纯函数, 便于确定性测试)
    ///
    /// 区间划分:
    /// - r < reject                    => REJECTED
    /// - reject <= r < reject+approve  => APPROVED
    /// - 其余                          => PENDING
    pub fn classify_with_draw(&self, input: &ProcurementStatusInput, r: f64) -> RequestStatus {
        let w = self.weights(input);
        if r < w.reject {
            RequestStatus::Rejected
        } else if r < w.reject + w.approve {
            RequestStatus::Approved
        } else {
            RequestStatus::Pending
        }
    }

    /// 判定单条请求的状态 (消耗恰好一次抽样)
    pub fn classify<R: Rng + ?Sized>(
        &self,
        input: &ProcurementStatusInput,
        rng: &mut R,
    ) -> RequestStatus {
        self.classify_with_draw(input, rng.gen::<f64>())
    }
}

impl Default for ProcurementStatusEngine {
    fn default() -> Self {
        Self::new()
    }
}
