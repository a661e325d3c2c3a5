use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pipeline::{PageTextExtractor, Pipelines};
use crate::prompts::PromptLoader;
use crate::render::ResumeRenderer;
use crate::session::ViewedCompanies;
use crate::sheet::SheetClient;
use crate::storage::CvStore;

/// Shared application state, cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CvStore>,
    pub pipelines: Pipelines,
    pub extractor: Arc<dyn PageTextExtractor>,
    pub renderer: ResumeRenderer,
    pub sheet: SheetClient,
    pub viewed: Arc<Mutex<ViewedCompanies>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn CvStore>,
        extractor: Arc<dyn PageTextExtractor>,
    ) -> Self {
        let prompts = PromptLoader::new(&config.prompts_dir);
        let pipelines = Pipelines::new(prompts, LlmClient::new());
        let sheet = SheetClient::new(config.sheet_app_url.clone());

        Self {
            store,
            pipelines,
            extractor,
            renderer: ResumeRenderer::default(),
            sheet,
            viewed: Arc::new(Mutex::new(ViewedCompanies::default())),
            config: Arc::new(config),
        }
    }

    /// Resolves the OpenAI API key for a pipeline call: the key saved
    /// through settings wins, the environment key is the fallback.
    pub async fn resolve_api_key(&self) -> Result<String, crate::errors::AppError> {
        let stored = crate::storage::load_api_key(self.store.as_ref()).await?;
        let key = crate::llm_client::resolve_api_key(stored, self.config.openai_api_key.as_deref())
            .map_err(|_| {
            crate::errors::AppError::Configuration(
                "No OpenAI API key configured. Save one via the settings endpoint or set \
                 OPENAI_API_KEY."
                    .to_string(),
            )
        })?;
        Ok(key)
    }
}
