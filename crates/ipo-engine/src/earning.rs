//! 예상 수익 모델.
//!
//! 당첨률 선형 모델과 상장 후 예상 상승률로 청약 수익을 추정합니다.

use ipo_core::Stock;
use rust_decimal::Decimal;
use std::fmt;

/// 예상 수익 산출 내역.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningDetail {
    /// 청약 수량
    pub lot_count: u32,
    /// 예상 전체 당첨률 (선형 모델, 1 초과 가능)
    pub winning_rate: Decimal,
    /// 예상 수익
    pub total: Decimal,
}

impl EarningDetail {
    /// 계산 단계를 순서대로 돌려줍니다.
    pub fn lines(&self, stock: &Stock) -> Vec<String> {
        vec![
            format!("총수량:{}", self.lot_count),
            format!("당첨률:{}", self.winning_rate),
            format!(
                "1랏가격:{}, 상장후예상상승:{}",
                stock.lot_price, stock.growth_rate
            ),
            format!("예상수익:{}", self.total),
        ]
    }
}

impl fmt::Display for EarningDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "총수량:{}, 당첨률:{}, 예상수익:{}",
            self.lot_count, self.winning_rate, self.total
        )
    }
}

/// 예상 수익을 계산합니다.
///
/// 수익 = floor(1랏 가격 × 당첨률 × 상승률). 수량 0은 지원되지 않는
/// 수량 구간이 흡수된 결과이므로 수익 0으로 처리합니다.
pub fn expected_earning(stock: &Stock, lot_count: u32) -> EarningDetail {
    if lot_count == 0 {
        return EarningDetail {
            lot_count: 0,
            winning_rate: Decimal::ZERO,
            total: Decimal::ZERO,
        };
    }

    let winning_rate = stock.winning_rate(lot_count);
    let total = (stock.lot_price * winning_rate * stock.growth_rate).floor();

    EarningDetail {
        lot_count,
        winning_rate,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_stock() -> Stock {
        Stock::new("테스트", dec!(10000), 5, dec!(0.10), dec!(0.05), dec!(0.01)).unwrap()
    }

    #[test]
    fn test_single_lot_earning() {
        // floor(10000 * 0.05 * 0.10) = floor(50) = 50
        let detail = expected_earning(&sample_stock(), 1);
        assert_eq!(detail.winning_rate, dec!(0.05));
        assert_eq!(detail.total, dec!(50));
    }

    #[test]
    fn test_multi_lot_earning_uses_linear_rate() {
        // 당첨률 = 0.05 + (10-1) * 0.01 = 0.14
        // floor(10000 * 0.14 * 0.10) = floor(140) = 140
        let detail = expected_earning(&sample_stock(), 10);
        assert_eq!(detail.winning_rate, dec!(0.14));
        assert_eq!(detail.total, dec!(140));
    }

    #[test]
    fn test_earning_floors_fraction() {
        // floor(10700 * 0.05 * 0.06) = floor(32.1) = 32
        let stock = Stock::new("단수", dec!(10700), 5, dec!(0.06), dec!(0.05), dec!(0.007)).unwrap();
        let detail = expected_earning(&stock, 1);
        assert_eq!(detail.total, dec!(32));
    }

    #[test]
    fn test_zero_lots_earn_nothing() {
        let detail = expected_earning(&sample_stock(), 0);
        assert_eq!(detail.total, Decimal::ZERO);
        assert_eq!(detail.winning_rate, Decimal::ZERO);
    }
}
