use crate::config::Config;
use crate::metrics::CATALOG_QUESTIONS;

use catalog::Catalog;
use quiz_service::QuizService;
use shuffle::ShuffleEngine;

pub struct AppState {
    pub config: Config,
    pub quiz: QuizService,
}

impl AppState {
    /// Loads the question catalog named by the configuration. A catalog that
    /// cannot be read or parsed aborts startup.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let catalog = Catalog::load_from_path(&config.questions_path)?;
        let shuffler = ShuffleEngine::new().with_random_limit(config.random_question_limit);
        Ok(Self::with_catalog(config, catalog, shuffler))
    }

    pub fn with_catalog(config: Config, catalog: Catalog, shuffler: ShuffleEngine) -> Self {
        CATALOG_QUESTIONS.set(catalog.question_count() as i64);
        if catalog.is_empty() {
            tracing::warn!("Question catalog is empty; quiz endpoints will report errors");
        }

        Self {
            config,
            quiz: QuizService::with_shuffler(catalog, shuffler),
        }
    }
}

pub mod catalog;
pub mod ledger;
pub mod quiz_service;
pub mod scorer;
pub mod shuffle;
