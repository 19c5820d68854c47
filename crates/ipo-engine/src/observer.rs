//! 탐색 관찰 훅.
//!
//! 원래 요구사항은 탐색 진행 상황의 디버깅 가시성입니다. 관찰자는
//! 배분 방출과 가지치기 시점에만 호출되며 탐색 결과에 영향을 주지
//! 않습니다.

use rust_decimal::Decimal;
use tracing::debug;

use crate::search::Allocation;

/// 탐색 이벤트 관찰자.
///
/// 병렬 탐색 확장을 허용하기 위해 `Send + Sync`를 요구합니다.
pub trait SearchObserver: Send + Sync {
    /// 완성된 배분이 방출될 때 호출됩니다.
    fn on_allocation(&self, _allocation: &Allocation) {}

    /// 예산 초과 가지가 잘릴 때 호출됩니다.
    fn on_pruned(&self, _spent: Decimal, _budget: Decimal) {}
}

/// 아무 것도 하지 않는 관찰자.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// 모든 이벤트를 tracing으로 기록하는 관찰자.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_allocation(&self, allocation: &Allocation) {
        debug!(
            plans = allocation.plans.len(),
            cash = %allocation.total_cash(),
            profit = %allocation.total_profit(),
            "allocation emitted"
        );
    }

    fn on_pruned(&self, spent: Decimal, budget: Decimal) {
        debug!(spent = %spent, budget = %budget, "branch pruned");
    }
}
