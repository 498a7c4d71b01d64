// ==========================================
// 采购请求数据生成系统 - 工作流状态判定引擎 (变体 1)
// ==========================================
// 职责: 按离散分支规则为单条请求判定状态
// 输入: 优先级 / 加急标记 / 批发商标记 / 总金额 + 注入的随机源
// 输出: RequestStatus
// ==========================================

use crate::domain::types::{RequestPriority, RequestStatus};
use rand::Rng;

// ==========================================
// WorkflowStatusInput - 判定输入属性
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct WorkflowStatusInput {
    pub priority: RequestPriority,
    pub is_urgent: bool,
    pub is_from_wholesaler: bool,
    pub total_value: f64,
}

// ==========================================
// WorkflowStatusEngine - 离散分支状态判定
// ==========================================
pub struct WorkflowStatusEngine;

impl WorkflowStatusEngine {
    pub fn new() -> Self {
        Self
    }

    /// 判定单条请求的状态
    ///
    /// 规则按固定顺序评估, 命中概率检查的分支立即返回:
    /// 1. 批发商来源或总金额 > 5000: 80% 概率批准
    /// 2. 高优先级或加急: 70% 概率挂起, 否则批准
    /// 3. 低优先级且总金额 < 1000: 70% 概率拒绝
    /// 4. 兜底: 三种状态等概率随机
    pub fn classify<R: Rng + ?Sized>(
        &self,
        input: &WorkflowStatusInput,
        rng: &mut R,
    ) -> RequestStatus {
        // 规则 1: 大额或批发商来源, 高概率直接批准
        if input.is_from_wholesaler || input.total_value > 5000.0 {
            if rng.gen::<f64>() < 0.8 {
                return RequestStatus::Approved;
            }
            // 概率未命中时不返回, 继续评估规则 2
            // (与规则 2 未命中即返回 APPROVED 的行为不对称; 该不对称保持不变)
        }

        // 规则 2: 高优先级或加急, 倾向挂起, 否则批准
        if input.priority == RequestPriority::High || input.is_urgent {
            if rng.gen::<f64>() < 0.7 {
                return RequestStatus::Pending;
            }
            return RequestStatus::Approved;
        }

        // 规则 3: 低优先级且小额, 倾向拒绝; 概率未命中时落入兜底
        if input.priority == RequestPriority::Low && input.total_value < 1000.0 {
            if rng.gen::<f64>() < 0.7 {
                return RequestStatus::Rejected;
            }
        }

        // 兜底: 三种状态等概率 (单次均匀抽样, 三等分区间判定)
        let r = rng.gen::<f64>();
        if r < 1.0 / 3.0 {
            RequestStatus::Pending
        } else if r < 2.0 / 3.0 {
            RequestStatus::Approved
        } else {
            RequestStatus::Rejected
        }
    }
}

impl Default for WorkflowStatusEngine {
    fn default() -> Self {
        Self::new()
    }
}
