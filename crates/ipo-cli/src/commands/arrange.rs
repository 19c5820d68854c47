//! 최적 배분 계산 명령.

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use ipo_core::{ScenarioConfig, TierPolicy};
use ipo_engine::{arrange, NoopObserver, SearchConfig, SearchObserver, TracingObserver};

/// arrange 명령 설정.
#[derive(Debug, Clone)]
pub struct ArrangeConfig {
    /// 시나리오 파일 경로
    pub config_path: String,
    /// 예산 오버라이드
    pub budget: Option<Decimal>,
    /// 수량 구간 내림 보정 사용
    pub snap_down: bool,
    /// 방출 배분 수 상한
    pub max_allocations: Option<usize>,
    /// 탐색 과정을 로그로 출력
    pub trace_search: bool,
    /// 결과를 JSON으로 출력
    pub json: bool,
}

/// JSON 출력용 플랜 행.
#[derive(Debug, Serialize)]
struct PlanRow {
    broker: String,
    cash: Decimal,
    financing: bool,
    lots: u32,
    profit: Decimal,
}

/// JSON 출력용 결과 보고서.
#[derive(Debug, Serialize)]
struct ArrangeReport {
    stock: String,
    budget: Decimal,
    candidates: usize,
    total_cash: Decimal,
    total_profit: Decimal,
    plans: Vec<PlanRow>,
}

/// 시나리오를 로드해 최적 배분을 계산하고 출력합니다.
pub fn run_arrange(config: ArrangeConfig) -> anyhow::Result<()> {
    let scenario = ScenarioConfig::load(&config.config_path)
        .with_context(|| format!("시나리오 로드 실패: {}", config.config_path))?;

    let (stock, brokers, file_budget) = scenario.into_domain()?;
    let budget = config.budget.unwrap_or(file_budget);

    if !config.json {
        println!("\n📊 종목: {}", stock);
        println!("예산: {}", budget);
        println!("증권사: {}곳", brokers.len());
    }

    let search_config = SearchConfig {
        tier_policy: if config.snap_down {
            TierPolicy::SnapDown
        } else {
            TierPolicy::Exact
        },
        max_allocations: config.max_allocations,
    };

    let observer: &dyn SearchObserver = if config.trace_search {
        &TracingObserver
    } else {
        &NoopObserver
    };

    let stock_name = stock.name.clone();
    let outcome = arrange(stock, brokers, budget, search_config, observer)?;
    info!(
        candidates = outcome.candidates,
        profit = %outcome.profit,
        "arrangement finished"
    );

    if config.json {
        let report = ArrangeReport {
            stock: stock_name,
            budget,
            candidates: outcome.candidates,
            total_cash: outcome.best.total_cash(),
            total_profit: outcome.profit,
            plans: outcome
                .best
                .plans
                .iter()
                .map(|p| PlanRow {
                    broker: p.broker().name.clone(),
                    cash: p.cash(),
                    financing: p.use_financing(),
                    lots: p.lots(),
                    profit: p.profit(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n✅ 후보 {}개 중 최적 배분:", outcome.candidates);
    if outcome.best.is_empty() {
        println!("  (청약하지 않음)");
    }
    for plan in &outcome.best.plans {
        let mode = if plan.use_financing() { "융자" } else { "현금" };
        println!(
            "  {} | 투입 {} | {} | {}랏 | 이익 {}",
            plan.broker().name,
            plan.cash(),
            mode,
            plan.lots(),
            plan.profit()
        );
    }
    println!("총 투입: {}", outcome.best.total_cash());
    println!("총 예상 이익: {}", outcome.profit);

    Ok(())
}
