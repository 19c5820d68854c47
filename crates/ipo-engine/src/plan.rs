//! 증권사별 청약 플랜.
//!
//! 한 증권사에 투입할 현금과 융자 여부를 묶고, 비용/수익/이익을
//! 파생 계산합니다.

use ipo_core::{Broker, Stock, TierPolicy};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

use crate::cost::{subscription_cost, CostDetail};
use crate::earning::{expected_earning, EarningDetail};

/// 증권사 하나에 대한 청약 플랜.
///
/// 생성 이후 불변입니다. 현금 0은 "이 증권사에 청약하지 않음"을
/// 뜻하며 비용/수익 없이 배분에 포함됩니다. 수량 구간 보정이 0랏을
/// 돌려준 플랜도 동일하게 이익 0으로 흡수됩니다.
#[derive(Debug, Clone)]
pub struct SubscriptionPlan {
    stock: Arc<Stock>,
    broker: Arc<Broker>,
    cash: Decimal,
    use_financing: bool,
    cash_lots: u32,
    finance_lots: u32,
}

impl SubscriptionPlan {
    /// 새 청약 플랜을 생성하고 수량을 파생 계산합니다.
    pub fn new(
        stock: Arc<Stock>,
        broker: Arc<Broker>,
        cash: Decimal,
        use_financing: bool,
        tier_policy: TierPolicy,
    ) -> Self {
        let raw_cash_lots = (cash / stock.lot_price).floor().to_u32().unwrap_or(0);
        let raw_finance_lots = (cash * Decimal::from(broker.leverage) / stock.lot_price)
            .floor()
            .to_u32()
            .unwrap_or(0);

        Self {
            cash_lots: tier_policy.resolve(raw_cash_lots),
            finance_lots: tier_policy.resolve(raw_finance_lots),
            stock,
            broker,
            cash,
            use_financing,
        }
    }

    /// 이 플랜의 증권사.
    pub fn broker(&self) -> &Broker {
        &self.broker
    }

    /// 투입 현금.
    pub fn cash(&self) -> Decimal {
        self.cash
    }

    /// 융자 청약 여부.
    pub fn use_financing(&self) -> bool {
        self.use_financing
    }

    /// 선택한 모드의 청약 수량.
    pub fn lots(&self) -> u32 {
        if self.use_financing {
            self.finance_lots
        } else {
            self.cash_lots
        }
    }

    /// 청약하지 않는 플랜인지 확인합니다.
    pub fn is_skip(&self) -> bool {
        self.cash.is_zero()
    }

    /// 유효 수량이 없어 이익 0으로 흡수되는 플랜인지 확인합니다.
    pub fn is_degenerate(&self) -> bool {
        self.is_skip() || self.lots() == 0
    }

    /// 청약 비용 내역.
    pub fn cost(&self) -> CostDetail {
        if self.is_degenerate() {
            return CostDetail {
                use_financing: self.use_financing,
                pure_financing_lots: 0,
                principal: Decimal::ZERO,
                interest: Decimal::ZERO,
                fee: Decimal::ZERO,
                total: Decimal::ZERO,
            };
        }
        subscription_cost(&self.stock, &self.broker, self.use_financing, self.finance_lots)
    }

    /// 예상 수익 내역.
    pub fn earning(&self) -> EarningDetail {
        if self.is_degenerate() {
            return EarningDetail {
                lot_count: 0,
                winning_rate: Decimal::ZERO,
                total: Decimal::ZERO,
            };
        }
        expected_earning(&self.stock, self.lots())
    }

    /// 예상 이익 (수익 - 비용). 순수 함수이며 결정적입니다.
    pub fn profit(&self) -> Decimal {
        self.earning().total - self.cost().total
    }

    /// 보고용 요약 라벨 (증권사, 현금, 융자 여부).
    pub fn label(&self) -> String {
        let mode = if self.use_financing { "융자" } else { "현금" };
        format!("{} / {} / {}", self.broker.name, self.cash, mode)
    }

    /// 계산 단계 전체를 순서대로 돌려줍니다.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(if self.use_financing {
            "융자청약".to_string()
        } else {
            "현금청약".to_string()
        });
        lines.extend(self.cost().lines());
        lines.extend(self.earning().lines(&self.stock));
        lines.push(format!("이익:{}", self.profit()));
        lines
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report_lines().join("\n"))
    }
}
