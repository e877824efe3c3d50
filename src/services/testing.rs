use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::SearchFailure;
use crate::models::SearchResult;
use crate::services::gemini::SearchClient;

pub type Reply = Result<SearchResult, SearchFailure>;

/// Hands each call the next pending response, so tests decide when
/// and in which order in-flight searches resolve.
pub struct ScriptedClient {
    pending: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
}

#[async_trait]
impl SearchClient for ScriptedClient {
    async fn search(&self, _product_name: &str) -> Result<SearchResult, SearchFailure> {
        let rx = self.pending.lock().unwrap().pop_front().expect("scripted response");
        rx.await.unwrap_or_else(|_| Err(SearchFailure::default()))
    }
}

/// A client answering `count` calls, plus the senders that release them in call order.
pub fn scripted_client(count: usize) -> (Arc<dyn SearchClient>, Vec<oneshot::Sender<Reply>>) {
    let (senders, receivers): (Vec<_>, VecDeque<_>) =
        (0..count).map(|_| oneshot::channel()).unzip();
    let client = ScriptedClient {
        pending: Mutex::new(receivers),
    };
    (Arc::new(client), senders)
}

pub fn titled_result(label: &str) -> Reply {
    Ok(SearchResult::new(format!("### 总结\n{}", label), Vec::new()))
}
