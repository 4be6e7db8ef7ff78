//! CLI runner - executes an ingest

use crate::cli::commands::Cli;
use crate::config::WorkspaceConfig;
use crate::convert::ConvertOptions;
use crate::engine::{BatchSink, IngestEngine, IngestStats, StdoutSink};
use crate::error::Result;
use crate::http::{ClientConfig, LogAnalyticsClient};
use crate::source::{SourceLoader, SourceLocator};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<IngestStats> {
        let locators: Vec<SourceLocator> = self
            .cli
            .blob
            .iter()
            .map(|b| SourceLocator::parse(b))
            .collect();

        if self.cli.dry_run {
            info!("Dry run: printing {} source(s)", locators.len());
            let engine = IngestEngine::new(SourceLoader::new(), StdoutSink);
            return self.drive(engine, &locators).await;
        }

        let credentials = self.workspace_config()?.into_credentials()?;
        let client = LogAnalyticsClient::with_config(credentials, self.client_config())?;
        info!("Uploading {} source(s) to {}", locators.len(), client.url());

        let loader = SourceLoader::with_client(client.inner().clone());
        let engine = IngestEngine::new(loader, client);
        self.drive(engine, &locators).await
    }

    async fn drive<S: BatchSink>(
        &self,
        engine: IngestEngine<S>,
        locators: &[SourceLocator],
    ) -> Result<IngestStats> {
        let mut engine = engine.with_options(self.convert_options());
        engine
            .ingest(locators, self.cli.table_name.as_deref())
            .await
    }

    /// Credentials from flags/environment, completed from the config file
    fn workspace_config(&self) -> Result<WorkspaceConfig> {
        let explicit =
            WorkspaceConfig::new(self.cli.workspace_id.clone(), self.cli.primary_key.clone());
        WorkspaceConfig::resolve(explicit, self.cli.config.as_deref())
    }

    fn client_config(&self) -> ClientConfig {
        let mut builder = ClientConfig::builder();
        if let Some(endpoint) = &self.cli.endpoint {
            builder = builder.endpoint(endpoint.clone());
        }
        builder.build()
    }

    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_types(self.cli.use_types)
            .with_batch_size(self.cli.batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;
    use std::io::Write;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "c3VwZXItc2VjcmV0LXNoYXJlZC1rZXk=";

    #[tokio::test]
    async fn test_run_uploads_to_endpoint() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/logs"))
            .and(header("Log-Type", "Perf"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "id,value\n1,2\n").unwrap();
        let blob = file.path().to_string_lossy().to_string();
        let endpoint = mock_server.uri();

        let cli = Cli::try_parse_from([
            "logship",
            "-w",
            "ws-1",
            "-p",
            KEY,
            "-b",
            blob.as_str(),
            "-t",
            "Perf",
            "--endpoint",
            endpoint.as_str(),
        ])
        .unwrap();

        let stats = Runner::new(cli).run().await.unwrap();
        assert_eq!(stats.batches, 1);
        assert_eq!(stats.records, 1);
    }

    #[tokio::test]
    async fn test_run_reads_config_file() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(config, "workspace_id: ws-file\nshared_key: {KEY}").unwrap();
        let mut csv = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(csv, "a\n1\n").unwrap();

        let config_path = config.path().to_string_lossy().to_string();
        let blob = csv.path().to_string_lossy().to_string();
        let endpoint = mock_server.uri();

        let cli = Cli::try_parse_from([
            "logship",
            "-C",
            config_path.as_str(),
            "-b",
            blob.as_str(),
            "-t",
            "T",
            "--endpoint",
            endpoint.as_str(),
        ])
        .unwrap();

        // Explicit flags may come from the environment; only the file is set here
        let runner = Runner {
            cli: Cli {
                workspace_id: None,
                primary_key: None,
                ..cli
            },
        };
        runner.run().await.unwrap();
    }

    #[tokio::test]
    async fn test_run_without_credentials() {
        let cli = Cli::try_parse_from(["logship", "-b", "a.csv"]).unwrap();
        let runner = Runner {
            cli: Cli {
                workspace_id: None,
                primary_key: None,
                ..cli
            },
        };

        let err = runner.run().await.unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[tokio::test]
    async fn test_dry_run_needs_no_credentials() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "id\n1\n2\n").unwrap();
        let blob = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["logship", "-b", blob.as_str(), "--dry-run"]).unwrap();
        let runner = Runner {
            cli: Cli {
                workspace_id: None,
                primary_key: None,
                ..cli
            },
        };

        let stats = runner.run().await.unwrap();
        assert_eq!(stats.records, 2);
    }
}
