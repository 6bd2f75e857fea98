//! # 학습 진단
//!
//! 에포크마다 재구성 오차를 호출자가 넘긴 싱크로 흘려보낸다.
//! 콘솔 출력은 알고리즘이 아니라 싱크 쪽 책임이다.

use serde::{Deserialize, Serialize};

/// 한 에포크의 진단 결과
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochReport {
    /// 0부터 시작하는 에포크 번호
    pub epoch: usize,
    /// 바이어스 포함 데이터와 음의 단계 가시 확률 간 제곱 오차 합
    pub reconstruction_error: f64,
}

/// 에포크 보고를 받는 싱크
pub trait DiagnosticsSink {
    fn record(&mut self, report: &EpochReport);
}

impl<F> DiagnosticsSink for F
where
    F: FnMut(&EpochReport),
{
    fn record(&mut self, report: &EpochReport) {
        self(report)
    }
}

/// `log` 파사드로 보고를 내보내는 기본 싱크
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn record(&mut self, report: &EpochReport) {
        log::info!(
            "Epoch {}: error is {}",
            report.epoch,
            report.reconstruction_error
        );
    }
}
