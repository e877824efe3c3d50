use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{Phase, Report, SearchResult, ViewSnapshot};
use crate::services::citations::source_links;
use crate::services::gemini::SearchClient;
use crate::services::interpreter::interpret;

#[derive(Debug, Clone)]
struct StoredResult {
    search_id: Uuid,
    completed_at: DateTime<Utc>,
    result: SearchResult,
}

#[derive(Debug, Clone)]
struct ViewState {
    query: String,
    phase: Phase,
    has_searched: bool,
    result: Option<StoredResult>,
    error: Option<String>,
    /// Bumped on every accepted submission; responses carrying an older
    /// value are stale.
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            phase: Phase::Idle,
            has_searched: false,
            result: None,
            error: None,
            generation: 0,
        }
    }
}

/// What happened to one call to [`ViewController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query; nothing was sent and the state is untouched.
    Ignored,
    Succeeded,
    Failed,
    /// A newer submission started while this one was in flight, so its
    /// response was thrown away.
    Superseded,
}

/// Owns the page state and sequences search, interpretation and dedup.
pub struct ViewController {
    client: Arc<dyn SearchClient>,
    state: RwLock<ViewState>,
}

impl ViewController {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self {
            client,
            state: RwLock::new(ViewState::default()),
        }
    }

    pub async fn submit(&self, query: &str) -> SubmitOutcome {
        if query.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let ticket = {
            let mut state = self.state.write().await;
            if state.phase == Phase::Searching {
                debug!(previous = %state.query, "new search submitted while another is in flight");
            }
            state.generation += 1;
            state.query = query.to_string();
            state.phase = Phase::Searching;
            state.has_searched = true;
            state.result = None;
            state.error = None;
            state.generation
        };

        info!(query, ticket, "Searching");
        let outcome = self.client.search(query).await;

        let mut state = self.state.write().await;
        if state.generation != ticket {
            debug!(query, ticket, latest = state.generation, "discarding stale search response");
            return SubmitOutcome::Superseded;
        }

        match outcome {
            Ok(result) => {
                state.result = Some(StoredResult {
                    search_id: Uuid::new_v4(),
                    completed_at: Utc::now(),
                    result,
                });
                state.phase = Phase::Success;
                SubmitOutcome::Succeeded
            }
            Err(failure) => {
                warn!(query, "search failed");
                state.error = Some(failure.message().to_string());
                state.phase = Phase::Failed;
                SubmitOutcome::Failed
            }
        }
    }

    /// Interprets the stored result afresh on every call.
    pub async fn render(&self) -> ViewSnapshot {
        let state = self.state.read().await;
        let report = state.result.as_ref().map(|stored| Report {
            search_id: stored.search_id,
            completed_at: stored.completed_at,
            sections: interpret(&stored.result.text),
            sources: source_links(&stored.result.citations),
        });

        ViewSnapshot {
            query: state.query.clone(),
            phase: state.phase,
            loading: state.phase == Phase::Searching,
            has_searched: state.has_searched,
            report,
            error: state.error.clone(),
        }
    }
}
