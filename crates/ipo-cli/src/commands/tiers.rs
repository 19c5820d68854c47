//! 유효 청약 수량 구간 조회 명령.

use ipo_core::LOT_TIERS;

/// 유효 청약 수량 구간 테이블을 출력합니다.
pub fn run_tiers() {
    println!("\n유효 청약 수량 구간 ({}개):", LOT_TIERS.len());
    let rows: Vec<String> = LOT_TIERS
        .chunks(10)
        .map(|chunk| {
            chunk
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    for row in rows {
        println!("  {}", row);
    }
}
