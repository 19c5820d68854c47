//! 공모주 청약 배분 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 시나리오 파일로 최적 배분 계산
//! ipo arrange -c config/default.toml
//!
//! # 예산을 바꿔가며 재계산
//! ipo arrange -c config/default.toml --budget 200000
//!
//! # 단일 증권사 청약 내역 확인
//! ipo plan -c config/default.toml --broker 미래에셋 --cash 107000 --financing
//!
//! # 유효 청약 수량 구간 보기
//! ipo tiers
//! ```

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::error;

mod commands;

use commands::arrange::{run_arrange, ArrangeConfig};
use commands::plan::{run_plan, PlanConfig};
use commands::tiers::run_tiers;

use ipo_core::{init_logging, LogConfig};

#[derive(Parser)]
#[command(name = "ipo")]
#[command(about = "공모주 청약 예산 배분 계산기", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 시나리오 파일에서 최적 배분 계산
    Arrange {
        /// 시나리오 파일 (TOML)
        #[arg(short, long, default_value = "config/default.toml")]
        config: String,

        /// 예산 오버라이드 (기본: 시나리오 파일 값)
        #[arg(short, long)]
        budget: Option<Decimal>,

        /// 유효 수량 구간 내림 보정 사용 (기본: 정확 일치만)
        #[arg(long, default_value = "false")]
        snap_down: bool,

        /// 방출할 배분 수 상한 (대형 예산용 안전장치)
        #[arg(long)]
        max_allocations: Option<usize>,

        /// 탐색 과정을 디버그 로그로 출력
        #[arg(long, default_value = "false")]
        trace_search: bool,

        /// 결과를 JSON으로 출력
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// 단일 증권사 청약 플랜 상세 계산
    Plan {
        /// 시나리오 파일 (TOML)
        #[arg(short, long, default_value = "config/default.toml")]
        config: String,

        /// 증권사명 (시나리오 파일 기준)
        #[arg(long)]
        broker: String,

        /// 투입 현금
        #[arg(long)]
        cash: Decimal,

        /// 융자 청약 여부
        #[arg(long, default_value = "false")]
        financing: bool,

        /// 유효 수량 구간 내림 보정 사용
        #[arg(long, default_value = "false")]
        snap_down: bool,
    },

    /// 유효 청약 수량 구간 보기
    Tiers,
}

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::default())?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Arrange {
            config,
            budget,
            snap_down,
            max_allocations,
            trace_search,
            json,
        } => {
            let arrange_config = ArrangeConfig {
                config_path: config,
                budget,
                snap_down,
                max_allocations,
                trace_search,
                json,
            };

            if let Err(e) = run_arrange(arrange_config) {
                error!("Arrange failed: {}", e);
                return Err(e);
            }
        }

        Commands::Plan {
            config,
            broker,
            cash,
            financing,
            snap_down,
        } => {
            let plan_config = PlanConfig {
                config_path: config,
                broker,
                cash,
                financing,
                snap_down,
            };

            if let Err(e) = run_plan(plan_config) {
                error!("Plan failed: {}", e);
                return Err(e);
            }
        }

        Commands::Tiers => {
            run_tiers();
        }
    }

    Ok(())
}
