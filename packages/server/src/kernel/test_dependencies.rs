// TestDependencies - mock implementations for testing
//
// Provides an in-memory crawl provider that can be injected into ServerDeps
// for tests. Runs and datasets live in a map; every call is recorded.

use anyhow::{anyhow, Result};
use apify_client::{InstagramComment, RunData};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseCrawlProvider, ServerDeps};

// =============================================================================
// Mock Crawl Provider
// =============================================================================

/// Arguments captured from a start call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCallArgs {
    pub post_url: String,
    pub max_comments: u32,
}

/// Arguments captured from a dataset listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCallArgs {
    pub dataset_id: String,
    pub offset: u64,
    pub limit: u64,
}

#[derive(Default)]
struct MockState {
    runs: HashMap<String, RunData>,
    datasets: HashMap<String, Vec<InstagramComment>>,
    start_calls: Vec<StartCallArgs>,
    list_calls: Vec<ListCallArgs>,
    next_run: usize,
}

#[derive(Clone, Default)]
pub struct MockCrawlProvider {
    state: Arc<Mutex<MockState>>,
}

impl MockCrawlProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a run with the given status and optional dataset
    pub fn with_run(self, run_id: &str, status: &str, dataset_id: Option<&str>) -> Self {
        self.state.lock().unwrap().runs.insert(
            run_id.to_string(),
            RunData {
                id: run_id.to_string(),
                status: status.to_string(),
                default_dataset_id: dataset_id.map(str::to_string),
                started_at: None,
                finished_at: None,
            },
        );
        self
    }

    /// Register dataset contents
    pub fn with_dataset(self, dataset_id: &str, items: Vec<InstagramComment>) -> Self {
        self.state
            .lock()
            .unwrap()
            .datasets
            .insert(dataset_id.to_string(), items);
        self
    }

    /// Simulate the actor finishing: mark SUCCEEDED and fill its dataset
    pub fn finish_run(&self, run_id: &str, items: Vec<InstagramComment>) {
        let mut state = self.state.lock().unwrap();
        let dataset_id = match state.runs.get_mut(run_id) {
            Some(run) => {
                run.status = "SUCCEEDED".to_string();
                run.default_dataset_id
                    .get_or_insert_with(|| format!("dataset-{}", run_id))
                    .clone()
            }
            None => return,
        };
        state.datasets.insert(dataset_id, items);
    }

    pub fn start_calls(&self) -> Vec<StartCallArgs> {
        self.state.lock().unwrap().start_calls.clone()
    }

    pub fn list_calls(&self) -> Vec<ListCallArgs> {
        self.state.lock().unwrap().list_calls.clone()
    }

    /// Wrap this mock in ServerDeps
    pub fn into_deps(self) -> ServerDeps {
        ServerDeps::new(Arc::new(self))
    }
}

#[async_trait]
impl BaseCrawlProvider for MockCrawlProvider {
    async fn start_comment_scrape(&self, post_url: &str, max_comments: u32) -> Result<RunData> {
        let mut state = self.state.lock().unwrap();
        state.start_calls.push(StartCallArgs {
            post_url: post_url.to_string(),
            max_comments,
        });

        state.next_run += 1;
        let run_id = format!("run-{}", state.next_run);
        let dataset_id = format!("dataset-{}", run_id);
        let run = RunData {
            id: run_id.clone(),
            status: "READY".to_string(),
            default_dataset_id: Some(dataset_id.clone()),
            started_at: None,
            finished_at: None,
        };
        state.runs.insert(run_id, run.clone());
        state.datasets.entry(dataset_id).or_default();
        Ok(run)
    }

    async fn get_run(&self, run_id: &str) -> Result<RunData> {
        self.state
            .lock()
            .unwrap()
            .runs
            .get(run_id)
            .cloned()
            .ok_or_else(|| anyhow!("Actor run {} was not found", run_id))
    }

    async fn dataset_item_count(&self, dataset_id: &str) -> Result<u64> {
        self.state
            .lock()
            .unwrap()
            .datasets
            .get(dataset_id)
            .map(|items| items.len() as u64)
            .ok_or_else(|| anyhow!("Dataset {} was not found", dataset_id))
    }

    async fn list_comments(
        &self,
        dataset_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<InstagramComment>> {
        let mut state = self.state.lock().unwrap();
        state.list_calls.push(ListCallArgs {
            dataset_id: dataset_id.to_string(),
            offset,
            limit,
        });

        let items = state
            .datasets
            .get(dataset_id)
            .ok_or_else(|| anyhow!("Dataset {} was not found", dataset_id))?;

        Ok(items
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Build a comment the way the scraper actor emits it
pub fn comment(username: &str, text: &str, timestamp: Option<serde_json::Value>) -> InstagramComment {
    InstagramComment {
        id: None,
        post_url: Some("https://www.instagram.com/p/test/".to_string()),
        owner_username: Some(username.to_string()),
        text: Some(text.to_string()),
        timestamp,
        likes_count: None,
    }
}

/// `count` numbered comments
pub fn comments(count: usize) -> Vec<InstagramComment> {
    (0..count)
        .map(|i| comment(&format!("user{}", i), &format!("comment {}", i), None))
        .collect()
}
