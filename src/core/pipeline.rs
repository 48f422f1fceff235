use crate::adapters::search::SearchClient;
use crate::core::{
    ConfigProvider, CourseEngine, EngineSettings, Pipeline, RawItem, SearchResponse, Storage,
    TransformResult,
};
use crate::report::csv_report::{
    render_contacts_csv, render_csv, CONTACTS_FILENAME, REPORT_FILENAME,
};
use crate::report::{select_rows, vendor_contacts};
use crate::utils::error::Result;

pub const RESULTS_FILENAME: &str = "results.json";

/// Search provider in, ranked course records and reports out.
pub struct SearchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: SearchClient,
    engine: CourseEngine,
}

impl<S: Storage, C: ConfigProvider> SearchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let client = SearchClient::new(config.search_endpoint(), config.api_key(), config.engine_id());
        let engine = CourseEngine::new(EngineSettings {
            exchange_rate: config.exchange_rate(),
            ..EngineSettings::default()
        });
        Self {
            storage,
            config,
            client,
            engine,
        }
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SearchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawItem>> {
        self.client
            .search(self.config.query(), self.config.max_results())
            .await
    }

    async fn transform(&self, data: Vec<RawItem>) -> Result<TransformResult> {
        tracing::debug!(
            "Processing {} hit(s) at {} per USD",
            data.len(),
            self.engine.settings().exchange_rate
        );
        let records = self.engine.process(&data, self.config.query());
        let response = SearchResponse::new(records);

        let json_output = if self.wants("json") {
            Some(serde_json::to_string_pretty(&response)?)
        } else {
            None
        };

        let csv_output = if self.wants("csv") {
            let rows = select_rows(&response.results, self.config.report_selection());
            tracing::debug!("Exporting {} row(s) to CSV", rows.len());
            Some(render_csv(&rows)?)
        } else {
            None
        };

        let contacts_output = if self.wants("contacts") {
            let contacts = vendor_contacts(&response.results);
            tracing::debug!("Listing {} distinct vendor(s)", contacts.len());
            Some(render_contacts_csv(&contacts)?)
        } else {
            None
        };

        Ok(TransformResult {
            response,
            json_output,
            csv_output,
            contacts_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        if let Some(json) = &result.json_output {
            tracing::debug!("Writing {} ({} bytes)", RESULTS_FILENAME, json.len());
            self.storage.write_file(RESULTS_FILENAME, json.as_bytes()).await?;
        }

        if let Some(csv) = &result.csv_output {
            tracing::debug!("Writing {} ({} bytes)", REPORT_FILENAME, csv.len());
            self.storage.write_file(REPORT_FILENAME, csv.as_bytes()).await?;
        }

        if let Some(contacts) = &result.contacts_output {
            tracing::debug!("Writing {} ({} bytes)", CONTACTS_FILENAME, contacts.len());
            self.storage
                .write_file(CONTACTS_FILENAME, contacts.as_bytes())
                .await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
