pub mod corpus;
pub mod identity;
pub mod prompt;
pub mod report;

use llm_interface::{ChatRequest, CompletionClient};
use persona_core::{AppConfig, CoreError, PersonaReport};
use reddit_client::ContentSource;
use report::ReportWriter;
use std::path::PathBuf;
use tracing::{debug, info};

/// Orchestrates one persona run: resolve identity, fetch content, format
/// the corpus, request the analysis and persist the report. Strictly
/// linear; every failure aborts the run.
pub struct PersonaGenerator {
    source: Box<dyn ContentSource>,
    completions: Box<dyn CompletionClient>,
    config: AppConfig,
}

impl PersonaGenerator {
    pub fn new(
        source: Box<dyn ContentSource>,
        completions: Box<dyn CompletionClient>,
        config: AppConfig,
    ) -> Self {
        Self {
            source,
            completions,
            config,
        }
    }

    /// Generate a persona report for a username or profile URL and return
    /// the path of the written file.
    pub async fn generate(&self, identifier: &str) -> Result<PathBuf, CoreError> {
        let username = identity::resolve_username(identifier)?;
        info!("Processing user: {}", username);

        let (posts, comments) = self
            .source
            .fetch_user_content(&username, self.config.max_posts, self.config.max_comments)
            .await?;
        info!(
            "Scraped {} posts and {} comments",
            posts.len(),
            comments.len()
        );

        // Bail before spending a completion call on an empty corpus.
        if posts.is_empty() && comments.is_empty() {
            return Err(CoreError::NoContentFound { username });
        }

        let corpus = corpus::format_corpus(&posts, &comments);
        debug!("Prepared corpus of {} characters", corpus.chars().count());

        let request = ChatRequest::new(
            prompt::SYSTEM_PROMPT,
            prompt::build_persona_prompt(&username, &corpus),
        );
        let analysis = self.completions.complete(request).await?;

        let report = PersonaReport {
            username,
            generated_at: chrono::Local::now(),
            posts_analyzed: posts.len(),
            comments_analyzed: comments.len(),
            body: analysis,
        };

        ReportWriter::new(&self.config.output_dir).write(&report)
    }
}
