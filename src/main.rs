use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::{array, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rbm_engine::{sampler_rng, EpochReport, Rbm, TrainingConfig, DEFAULT_SEED};

/// 6 가시 / 2 은닉 RBM 데모: 고정된 6×6 데이터로 학습 후 한 사용자의 은닉 상태 추론
#[derive(Parser, Debug)]
#[command(name = "rbm_demo", version, about)]
struct Args {
    /// 가중치 초기화 시드
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// 샘플링 스트림 시드 (생략하면 엔트로피 사용)
    #[arg(long)]
    sampler_seed: Option<u64>,

    /// 학습 에포크 수
    #[arg(long, default_value_t = 1)]
    epochs: usize,

    /// 학습률
    #[arg(long, default_value_t = 0.1)]
    learning_rate: f64,

    /// 에포크별 재구성 오차 보고
    #[arg(long)]
    diagnostics: bool,

    /// 진단 보고를 JSON 줄로 출력
    #[arg(long)]
    json: bool,
}

fn training_data() -> Array2<f64> {
    array![
        [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
    ]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut sampler = match args.sampler_seed {
        Some(seed) => sampler_rng(seed),
        None => StdRng::from_entropy(),
    };

    let config = TrainingConfig::new()
        .with_max_epochs(args.epochs)
        .with_learning_rate(args.learning_rate)
        .with_diagnostics(args.diagnostics || args.json);

    let mut rbm = Rbm::with_seed(6, 2, args.seed)?;
    let data = training_data();

    if args.json {
        println!("{}", serde_json::to_string(&config)?);
        let mut emit = |report: &EpochReport| match serde_json::to_string(report) {
            Ok(line) => println!("{}", line),
            Err(err) => log::warn!("failed to encode epoch report: {}", err),
        };
        rbm.train_with_sink(&data, &config, &mut sampler, &mut emit)?;
    } else if config.diagnostics {
        let bar = ProgressBar::new(config.max_epochs as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} epochs {msg}")?,
        );
        let mut progress = |report: &EpochReport| {
            bar.set_message(format!("error {:.4}", report.reconstruction_error));
            bar.inc(1);
        };
        rbm.train_with_sink(&data, &config, &mut sampler, &mut progress)?;
        bar.finish();
    } else {
        rbm.train(&data, &config, &mut sampler)?;
    }

    println!("Weights ({}x{}):", rbm.weights().nrows(), rbm.weights().ncols());
    println!("{:.6}", rbm.weights());

    let user = array![[0.0, 0.0, 0.0, 1.0, 1.0, 0.0]];
    let hidden = rbm.run_visible(&user, &mut sampler)?;
    println!("Hidden states for {}:", user);
    println!("{}", hidden);

    Ok(())
}
