//! Runs the extraction and the transformation one after another.

use crate::config::PipelineConfig;
use crate::extract::{ExtractOutcome, Extractor, Fetcher, UrlFetcher};
use crate::transform::{TransformStats, Transformer};
use crate::MtgRdfError;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::info;

/// A stage of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Extract,
    Transform,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extract => f.write_str("extract"),
            Self::Transform => f.write_str("transform"),
        }
    }
}

/// Selects the stages of a pipeline run. Selected stages always run in the order extract,
/// transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stages {
    pub extract: bool,
    pub transform: bool,
}

impl Stages {
    /// Both stages.
    pub const ALL: Stages = Stages {
        extract: true,
        transform: true,
    };

    pub fn is_empty(self) -> bool {
        !self.extract && !self.transform
    }
}

/// A fatal error, tagged with the stage that failed.
#[derive(Debug, Error)]
#[error("The {stage} stage failed")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: MtgRdfError,
}

/// Summarizes a pipeline run. Stages that did not run are [None].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub extract: Option<ExtractOutcome>,
    pub transform: Option<TransformStats>,
}

/// The extract-then-transform pipeline.
pub struct Pipeline<F = UrlFetcher> {
    extractor: Extractor<F>,
    transformer: Transformer,
}

impl Pipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        Self::with_fetcher(config, UrlFetcher::default())
    }
}

impl<F: Fetcher> Pipeline<F> {
    pub fn with_fetcher(config: &PipelineConfig, fetcher: F) -> Self {
        Self {
            extractor: Extractor::with_fetcher(config.extract_config(), fetcher),
            transformer: Transformer::new(config.transform_config()),
        }
    }

    /// Runs the selected `stages`. The first failing stage aborts the run.
    pub async fn run(&self, stages: Stages) -> Result<PipelineReport, StageError> {
        let mut report = PipelineReport::default();
        let stage_count = usize::from(stages.extract) + usize::from(stages.transform);
        let mut step = 0;

        if stages.extract {
            step += 1;
            info!("[{step}/{stage_count}] Extracting data from MTGJSON ...");
            let outcome = self.extractor.extract().await.map_err(|source| StageError {
                stage: Stage::Extract,
                source,
            })?;
            report.extract = Some(outcome);
        }

        if stages.transform {
            step += 1;
            info!("[{step}/{stage_count}] Transforming to RDF ...");
            let stats = self.transformer.transform().map_err(|source| StageError {
                stage: Stage::Transform,
                source,
            })?;
            info!(
                "RDF data saved to '{}'.",
                self.transformer.config().output.display()
            );
            report.transform = Some(stats);
        }

        Ok(report)
    }
}
