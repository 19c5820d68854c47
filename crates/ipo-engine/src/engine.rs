//! 배분 실행 오케스트레이션.
//!
//! 탐색과 선택을 묶어 한 번의 호출로 최적 배분을 구합니다.

use ipo_core::{Broker, IpoResult, Stock};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

use crate::observer::SearchObserver;
use crate::search::{AllocationSearch, SearchConfig};
use crate::selector::{select_best, SearchOutcome};

/// 주어진 시나리오에서 최적 배분을 찾습니다.
///
/// 탐색이 모든 후보를 열거한 뒤 선택기가 이익 최대 배분을 고릅니다.
/// 같은 입력은 항상 같은 결과를 냅니다.
pub fn arrange(
    stock: Arc<Stock>,
    brokers: Vec<Arc<Broker>>,
    budget: Decimal,
    config: SearchConfig,
    observer: &dyn SearchObserver,
) -> IpoResult<SearchOutcome> {
    info!(
        stock = %stock.name,
        budget = %budget,
        brokers = brokers.len(),
        "allocation search started"
    );

    let search = AllocationSearch::new(stock, brokers, budget, config);
    let allocations = search.run(observer);
    debug!(candidates = allocations.len(), "enumeration finished");

    let outcome = select_best(&allocations)?;
    info!(
        profit = %outcome.profit,
        cash = %outcome.best.total_cash(),
        candidates = outcome.candidates,
        "best allocation selected"
    );

    Ok(outcome)
}
