//! 단일 증권사 플랜 상세 계산 명령.

use anyhow::{bail, Context};
use rust_decimal::Decimal;

use ipo_core::{ScenarioConfig, TierPolicy};
use ipo_engine::SubscriptionPlan;

/// plan 명령 설정.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// 시나리오 파일 경로
    pub config_path: String,
    /// 증권사명
    pub broker: String,
    /// 투입 현금
    pub cash: Decimal,
    /// 융자 청약 여부
    pub financing: bool,
    /// 수량 구간 내림 보정 사용
    pub snap_down: bool,
}

/// 증권사 하나에 대한 청약 계산 전체 내역을 출력합니다.
pub fn run_plan(config: PlanConfig) -> anyhow::Result<()> {
    let scenario = ScenarioConfig::load(&config.config_path)
        .with_context(|| format!("시나리오 로드 실패: {}", config.config_path))?;

    let (stock, brokers, _) = scenario.into_domain()?;
    let Some(broker) = brokers.iter().find(|b| b.name == config.broker) else {
        bail!("증권사를 찾을 수 없습니다: {}", config.broker);
    };

    let tier_policy = if config.snap_down {
        TierPolicy::SnapDown
    } else {
        TierPolicy::Exact
    };

    let plan = SubscriptionPlan::new(
        stock,
        broker.clone(),
        config.cash,
        config.financing,
        tier_policy,
    );

    println!("\n📋 {}", plan.label());
    if plan.is_degenerate() && !plan.is_skip() {
        println!("⚠️  유효 수량 구간이 아니어서 이익 0으로 처리됩니다");
    }
    for line in plan.report_lines() {
        println!("  {}", line);
    }

    Ok(())
}
