//! Timed execution of a single algorithm run on an isolated worker.

use std::time::{Duration, Instant};

use tokio::time::timeout;

use crate::algorithms::Algorithm;
use crate::models::RunOutcome;

/// Runs one algorithm per call on a blocking worker under a fixed time limit.
#[derive(Debug, Clone)]
pub struct TimedExecutor {
    time_limit: Duration,
}

impl TimedExecutor {
    pub fn new(time_limit: Duration) -> Self {
        Self { time_limit }
    }

    /// Execute `algorithm` over `data`, measuring only the routine itself.
    ///
    /// The buffer moves into the worker. On timeout the worker is abandoned
    /// along with the buffer, so no later run can observe its writes; the
    /// measured span opens after the worker owns the buffer and closes before
    /// the result travels back.
    pub async fn execute(
        &self,
        algorithm: Algorithm,
        mut data: Vec<i64>,
        key: Option<i64>,
    ) -> RunOutcome {
        let mut worker = tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            algorithm.run(&mut data, key).map(|()| started.elapsed())
        });

        match timeout(self.time_limit, &mut worker).await {
            Ok(Ok(Ok(elapsed))) => RunOutcome::Completed {
                elapsed_ms: elapsed.as_millis() as u64,
            },
            Ok(Ok(Err(err))) => RunOutcome::Failed {
                message: err.to_string(),
            },
            Ok(Err(join_err)) => {
                let message = if join_err.is_panic() {
                    "worker panicked".to_string()
                } else {
                    "worker cancelled".to_string()
                };
                RunOutcome::Failed { message }
            }
            Err(_) => {
                // abort only stops a worker that has not started yet; a
                // running routine finishes on its thread and the result is
                // discarded either way
                worker.abort();
                RunOutcome::TimedOut
            }
        }
    }
}
