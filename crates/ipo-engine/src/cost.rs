//! 청약 비용 모델.
//!
//! 현금 청약은 고정 수수료만, 융자 청약은 동결 기간 이자에 융자
//! 수수료를 더해 비용을 계산합니다.

use ipo_core::{Broker, Stock};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// 청약 비용 산출 내역.
///
/// 결정 값은 `total` 하나지만, 감사/로깅용으로 중간 수치와
/// 사람이 읽을 수 있는 계산 단계를 함께 보존합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct CostDetail {
    /// 융자 청약 여부
    pub use_financing: bool,
    /// 순수 융자 수량 (자기자본 제외분)
    pub pure_financing_lots: u32,
    /// 융자 원금
    pub principal: Decimal,
    /// 동결 기간 이자
    pub interest: Decimal,
    /// 청약 수수료 (선택한 모드 기준)
    pub fee: Decimal,
    /// 총 비용
    pub total: Decimal,
}

impl CostDetail {
    /// 계산 단계를 순서대로 돌려줍니다.
    pub fn lines(&self) -> Vec<String> {
        if !self.use_financing {
            return vec![format!("현금청약수수료:{}", self.total)];
        }
        vec![
            format!("순수융자수량:{}", self.pure_financing_lots),
            format!("융자원금:{}", self.principal),
            format!("융자이자:{}", self.interest),
            format!("융자청약수수료:{}", self.fee),
            format!("융자총비용:{}", self.total),
        ]
    }
}

impl fmt::Display for CostDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// 청약 비용을 계산합니다.
///
/// 현금 청약: 비용 = 현금 청약 수수료.
/// 융자 청약: 융자 수량 중 자기자본 비율을 제외한 순수 융자분에 대해
/// 동결 기간만큼 이자를 물고, 융자 청약 수수료를 더합니다.
/// 순수 융자 수량은 내림 정수 나눗셈으로 구합니다.
pub fn subscription_cost(
    stock: &Stock,
    broker: &Broker,
    use_financing: bool,
    finance_lots: u32,
) -> CostDetail {
    if !use_financing {
        return CostDetail {
            use_financing: false,
            pure_financing_lots: 0,
            principal: Decimal::ZERO,
            interest: Decimal::ZERO,
            fee: broker.cash_fee,
            total: broker.cash_fee,
        };
    }

    let pure_financing_lots = finance_lots * (broker.leverage - 1) / broker.leverage;
    let principal = Decimal::from(pure_financing_lots) * stock.lot_price;
    let interest =
        (principal * broker.financing_rate * Decimal::from(stock.freeze_days) / dec!(365)).floor();

    CostDetail {
        use_financing: true,
        pure_financing_lots,
        principal,
        interest,
        fee: broker.financing_fee,
        total: interest + broker.financing_fee,
    }
}
