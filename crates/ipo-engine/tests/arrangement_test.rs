//! 배분 엔진 통합 테스트.
//!
//! 엔진의 핵심 동작을 검증합니다:
//! 1. 기준 시나리오의 후보 열거 범위
//! 2. 비용/수익 공식에 따른 최적 배분 선택
//! 3. 예산 불변식과 결정성
//! 4. 동점 처리

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use ipo_core::{Broker, Stock};
use ipo_engine::{
    arrange, AllocationSearch, NoopObserver, SearchConfig, TracingObserver,
};

// ============================================================================
// 헬퍼 함수
// ============================================================================

/// 기준 시나리오 공모주: 1랏 10000, 동결 5일, 상승률 10%,
/// 1랏 당첨률 5%, 랏당 증가 1%.
fn reference_stock() -> Arc<Stock> {
    Arc::new(Stock::new("기준종목", dec!(10000), 5, dec!(0.10), dec!(0.05), dec!(0.01)).unwrap())
}

/// 기준 시나리오 증권사: 현금 수수료 50, 융자 수수료 100,
/// 융자 이율 3%, 배수 5.
fn reference_broker(name: &str) -> Arc<Broker> {
    Arc::new(Broker::new(name, dec!(50), dec!(100), dec!(0.03), 5).unwrap())
}

fn run_reference_search(brokers: Vec<Arc<Broker>>, budget: Decimal) -> Vec<ipo_engine::Allocation> {
    AllocationSearch::new(reference_stock(), brokers, budget, SearchConfig::default())
        .run(&NoopObserver)
}

/// 배분을 (증권사, 현금, 융자) 튜플 목록으로 요약.
fn summarize(allocation: &ipo_engine::Allocation) -> Vec<(String, Decimal, bool)> {
    allocation
        .plans
        .iter()
        .map(|p| (p.broker().name.clone(), p.cash(), p.use_financing()))
        .collect()
}

// ============================================================================
// 기준 시나리오 (증권사 1곳, 예산 2랏)
// ============================================================================

#[test]
fn test_reference_scenario_enumerates_all_combinations() {
    let allocations = run_reference_search(vec![reference_broker("기준")], dec!(20000));

    let summaries: Vec<_> = allocations.iter().map(summarize).collect();
    assert_eq!(summaries.len(), 5);

    // 건너뛰기 + 현금/융자 × 1랏/2랏
    assert!(summaries.contains(&vec![]));
    assert!(summaries.contains(&vec![("기준".to_string(), dec!(10000), false)]));
    assert!(summaries.contains(&vec![("기준".to_string(), dec!(10000), true)]));
    assert!(summaries.contains(&vec![("기준".to_string(), dec!(20000), false)]));
    assert!(summaries.contains(&vec![("기준".to_string(), dec!(20000), true)]));
}

#[test]
fn test_reference_scenario_plan_profits() {
    // 현금 1랏: 수익 floor(10000*0.05*0.10)=50, 비용 50, 이익 0
    // 융자 1랏(5랏 청약): 수익 floor(10000*0.09*0.10)=90,
    //   이자 floor(40000*0.03*5/365)=16, 비용 116, 이익 -26
    // 현금 2랏: 수익 floor(10000*0.06*0.10)=60, 비용 50, 이익 10
    // 융자 2랏(10랏 청약): 수익 floor(10000*0.14*0.10)=140,
    //   이자 floor(80000*0.03*5/365)=32, 비용 132, 이익 8
    let allocations = run_reference_search(vec![reference_broker("기준")], dec!(20000));

    let profit_of = |cash: Decimal, financing: bool| -> Decimal {
        allocations
            .iter()
            .find(|a| {
                a.plans.len() == 1
                    && a.plans[0].cash() == cash
                    && a.plans[0].use_financing() == financing
            })
            .expect("allocation must be enumerated")
            .total_profit()
    };

    assert_eq!(profit_of(dec!(10000), false), dec!(0));
    assert_eq!(profit_of(dec!(10000), true), dec!(-26));
    assert_eq!(profit_of(dec!(20000), false), dec!(10));
    assert_eq!(profit_of(dec!(20000), true), dec!(8));
}

#[test]
fn test_reference_scenario_selects_best_profit() {
    let outcome = arrange(
        reference_stock(),
        vec![reference_broker("기준")],
        dec!(20000),
        SearchConfig::default(),
        &TracingObserver,
    )
    .unwrap();

    // 위 이익 계산에서 최대는 현금 2랏의 10
    assert_eq!(outcome.profit, dec!(10));
    assert_eq!(outcome.candidates, 5);
    let best = summarize(&outcome.best);
    assert_eq!(best, vec![("기준".to_string(), dec!(20000), false)]);
}

// ============================================================================
// 복수 증권사
// ============================================================================

#[test]
fn test_two_broker_enumeration_count() {
    // A 건너뛰기: B에서 5개 (빈 배분 포함)
    // A 1랏 현금/융자: 각각 B 건너뛰기 + B 1랏 현금/융자 = 3개씩
    // A 2랏 현금/융자: 예산 소진으로 즉시 방출 = 1개씩
    // 합계 5 + 6 + 2 = 13
    let brokers = vec![reference_broker("A"), reference_broker("B")];
    let allocations = run_reference_search(brokers, dec!(20000));
    assert_eq!(allocations.len(), 13);
}

#[test]
fn test_two_broker_split_is_enumerated() {
    let brokers = vec![reference_broker("A"), reference_broker("B")];
    let allocations = run_reference_search(brokers, dec!(20000));

    let summaries: Vec<_> = allocations.iter().map(summarize).collect();
    assert!(summaries.contains(&vec![
        ("A".to_string(), dec!(10000), false),
        ("B".to_string(), dec!(10000), false),
    ]));
    assert!(summaries.contains(&vec![
        ("A".to_string(), dec!(10000), true),
        ("B".to_string(), dec!(10000), true),
    ]));
}

#[test]
fn test_budget_invariant_holds_for_every_candidate() {
    let brokers = vec![
        reference_broker("A"),
        reference_broker("B"),
        reference_broker("C"),
    ];
    let budget = dec!(30000);
    for allocation in run_reference_search(brokers, budget) {
        assert!(allocation.total_cash() <= budget);
    }
}

// ============================================================================
// 결정성과 동점 처리
// ============================================================================

#[test]
fn test_arrange_is_deterministic() {
    let brokers = || vec![reference_broker("A"), reference_broker("B")];
    let run = || {
        arrange(
            reference_stock(),
            brokers(),
            dec!(30000),
            SearchConfig::default(),
            &NoopObserver,
        )
        .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.profit, second.profit);
    assert_eq!(first.candidates, second.candidates);
    assert_eq!(summarize(&first.best), summarize(&second.best));
}

#[test]
fn test_equal_brokers_tie_broken_by_generation_order() {
    // 조건이 같은 증권사 둘이면 최적 이익(현금 2랏, 이익 10)이 A와 B
    // 양쪽에 존재한다. 건너뛰기(k=0) 가지가 먼저 재귀하므로 B 단독
    // 배분이 A 단독 배분보다 먼저 생성되고, 동점에서는 먼저 생성된
    // 쪽이 이긴다
    let brokers = vec![reference_broker("A"), reference_broker("B")];
    let outcome = arrange(
        reference_stock(),
        brokers,
        dec!(20000),
        SearchConfig::default(),
        &NoopObserver,
    )
    .unwrap();

    assert_eq!(outcome.profit, dec!(10));
    assert_eq!(
        summarize(&outcome.best),
        vec![("B".to_string(), dec!(20000), false)]
    );
}
