use std::future::Future;
use std::time::Instant;
use tracing::info;

/// Wall-clock timer for one pipeline stage. Reports on drop, so the elapsed
/// time is logged on the error path too.
pub struct StageTimer {
    label: String,
    start: Instant,
}

impl StageTimer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Drop for StageTimer {
    fn drop(&mut self) {
        info!(
            "finished executing {} in {:.6} seconds",
            self.label,
            self.elapsed_secs()
        );
    }
}

/// Runs a future between 120-column START/END banners, timing it.
pub async fn framed<T>(label: &str, fut: impl Future<Output = T>) -> T {
    println!("{:-^120}", " START ");
    let result = {
        let _timer = StageTimer::start(label);
        fut.await
    };
    println!("{:-^120}", " END ");
    result
}
