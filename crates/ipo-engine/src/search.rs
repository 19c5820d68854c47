//! 예산 배분 탐색.
//!
//! 증권사 순서를 따라 "건너뛰기 / 현금 k 투입 / 융자 k 투입"의 모든
//! 조합을 깊이 우선으로 열거합니다. k는 1랏 가격의 배수이며, 합이
//! 예산과 정확히 일치하거나 증권사를 모두 소진했을 때 배분 하나가
//! 완성됩니다.

use ipo_core::{Broker, Stock, TierPolicy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::observer::SearchObserver;
use crate::plan::SubscriptionPlan;

/// 완성된 배분: 증권사 순서대로 최대 하나씩의 플랜 목록.
///
/// 방출된 이후에는 변경되지 않습니다. 불변식: 플랜 현금 합 ≤ 예산.
#[derive(Debug, Clone)]
pub struct Allocation {
    /// 구성 플랜 (증권사 순서 유지)
    pub plans: Vec<SubscriptionPlan>,
}

impl Allocation {
    /// 투입 현금 합계.
    pub fn total_cash(&self) -> Decimal {
        self.plans.iter().map(|p| p.cash()).sum()
    }

    /// 예상 이익 합계.
    pub fn total_profit(&self) -> Decimal {
        self.plans.iter().map(|p| p.profit()).sum()
    }

    /// 실제 청약이 포함되지 않은 빈 배분인지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// 탐색 설정.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 수량 구간 보정 정책
    #[serde(default)]
    pub tier_policy: TierPolicy,

    /// 방출할 배분 수 상한 (대형 예산용 안전장치, 기본 무제한)
    #[serde(default)]
    pub max_allocations: Option<usize>,
}

/// 예산 배분 탐색기.
pub struct AllocationSearch {
    stock: Arc<Stock>,
    brokers: Vec<Arc<Broker>>,
    budget: Decimal,
    config: SearchConfig,
}

impl AllocationSearch {
    /// 새 탐색기를 생성합니다.
    pub fn new(
        stock: Arc<Stock>,
        brokers: Vec<Arc<Broker>>,
        budget: Decimal,
        config: SearchConfig,
    ) -> Self {
        Self {
            stock,
            brokers,
            budget,
            config,
        }
    }

    /// 모든 유효 배분을 열거합니다.
    ///
    /// 반복 순서는 증권사 순서 × 투입액 오름차순 × 현금-융자 순으로
    /// 고정이므로 같은 입력은 항상 같은 출력을 냅니다.
    pub fn run(&self, observer: &dyn SearchObserver) -> Vec<Allocation> {
        let mut results = Vec::new();
        let mut current = Vec::new();
        self.explore(&mut current, 0, &mut results, observer);
        results
    }

    /// 깊이 우선 탐색 본체. 상한 도달 시 false를 돌려 전체 되감기를
    /// 유도합니다.
    fn explore(
        &self,
        current: &mut Vec<SubscriptionPlan>,
        broker_idx: usize,
        results: &mut Vec<Allocation>,
        observer: &dyn SearchObserver,
    ) -> bool {
        let spent: Decimal = current.iter().map(|p| p.cash()).sum();

        // 방어적 검사: 아래 증분 루프는 예산을 넘는 k를 만들지 않는다
        if spent > self.budget {
            observer.on_pruned(spent, self.budget);
            return true;
        }
        if spent == self.budget {
            return self.emit(current, results, observer);
        }
        if broker_idx >= self.brokers.len() {
            // 증권사 소진: 남은 예산은 유휴 자금
            return self.emit(current, results, observer);
        }

        let broker = &self.brokers[broker_idx];
        let mut k = Decimal::ZERO;
        while spent + k <= self.budget {
            if k.is_zero() {
                // 이 증권사 건너뛰기
                if !self.explore(current, broker_idx + 1, results, observer) {
                    return false;
                }
            } else {
                for use_financing in [false, true] {
                    let plan = SubscriptionPlan::new(
                        Arc::clone(&self.stock),
                        Arc::clone(broker),
                        k,
                        use_financing,
                        self.config.tier_policy,
                    );
                    current.push(plan);
                    let keep_going = self.explore(current, broker_idx + 1, results, observer);
                    current.pop();
                    if !keep_going {
                        return false;
                    }
                }
            }
            k += self.stock.lot_price;
        }

        true
    }

    fn emit(
        &self,
        current: &[SubscriptionPlan],
        results: &mut Vec<Allocation>,
        observer: &dyn SearchObserver,
    ) -> bool {
        let allocation = Allocation {
            plans: current.to_vec(),
        };
        observer.on_allocation(&allocation);
        results.push(allocation);

        match self.config.max_allocations {
            Some(cap) => results.len() < cap,
            None => true,
        }
    }
}
