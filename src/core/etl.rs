use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs search → engine → report once and returns the output location.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting course search...");
        self.monitor.log_stats("start");

        let raw_items = self.pipeline.extract().await?;
        tracing::info!("Fetched {} search hit(s)", raw_items.len());
        self.monitor.log_stats("extract");

        let fetched = raw_items.len();
        let result = self.pipeline.transform(raw_items).await?;
        tracing::info!(
            "Kept {} course(s) out of {} hit(s)",
            result.response.results.len(),
            fetched
        );
        self.monitor.log_stats("transform");

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Reports saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
