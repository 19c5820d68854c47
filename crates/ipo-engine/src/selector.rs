//! 최적 배분 선택기.

use ipo_core::{IpoError, IpoResult};
use rust_decimal::Decimal;

use crate::search::Allocation;

/// 선택 결과: 최적 배분과 그 이익, 후보 수.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// 최적 배분
    pub best: Allocation,
    /// 최적 배분의 이익 합계
    pub profit: Decimal,
    /// 평가한 후보 수
    pub candidates: usize,
}

/// 생성 순서대로 후보를 훑어 이익이 가장 큰 배분을 고릅니다.
///
/// 실행 중인 최선은 이익이 엄격히 더 클 때만 교체되므로 동점에서는
/// 먼저 생성된 배분이 이깁니다. 탐색은 항상 빈 배분을 최소 하나
/// 방출하므로 빈 후보 목록은 불변식 위반입니다.
pub fn select_best(allocations: &[Allocation]) -> IpoResult<SearchOutcome> {
    let mut iter = allocations.iter();
    let first = iter.next().ok_or_else(|| {
        IpoError::NoCandidate("탐색이 배분을 하나도 방출하지 않았습니다".to_string())
    })?;

    let mut best = first;
    let mut best_profit = first.total_profit();
    for allocation in iter {
        let profit = allocation.total_profit();
        if profit > best_profit {
            best = allocation;
            best_profit = profit;
        }
    }

    Ok(SearchOutcome {
        best: best.clone(),
        profit: best_profit,
        candidates: allocations.len(),
    })
}
