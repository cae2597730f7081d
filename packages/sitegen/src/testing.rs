//! Testing utilities including mock implementations.
//!
//! These are useful for testing code that drives generation and deployment
//! without making real LLM or network calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{Result, SitegenError};
use crate::traits::{host::StaticHost, model::CompletionModel};
use crate::types::site::GeneratedSite;

/// Record of one completion request made to [`MockModel`].
#[derive(Debug, Clone)]
pub struct MockModelCall {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
}

/// A scripted completion model.
///
/// Returns a fixed completion (or a fixed failure) and records every call
/// for assertions.
pub struct MockModel {
    completion: std::result::Result<String, String>,
    calls: Arc<RwLock<Vec<MockModelCall>>>,
}

impl MockModel {
    /// A model that always returns the given completion text.
    pub fn completing(completion: impl Into<String>) -> Self {
        Self {
            completion: Ok(completion.into()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A model whose every call fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            completion: Err(reason.into()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All calls made so far.
    pub fn calls(&self) -> Vec<MockModelCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    async fn complete(&self, system: &str, user: &str, max_tokens: u32) -> Result<String> {
        self.calls.write().unwrap().push(MockModelCall {
            system: system.to_string(),
            user: user.to_string(),
            max_tokens,
        });

        match &self.completion {
            Ok(text) => Ok(text.clone()),
            Err(reason) => Err(SitegenError::Generation(reason.clone().into())),
        }
    }
}

/// Shared view into a [`MockHost`]'s invocation count, usable after the
/// host has been boxed into a deployer.
#[derive(Clone)]
pub struct MockHostHandle {
    calls: Arc<AtomicUsize>,
}

impl MockHostHandle {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// A scripted hosting provider.
pub struct MockHost {
    name: String,
    outcome: std::result::Result<String, String>,
    calls: Arc<AtomicUsize>,
}

impl MockHost {
    /// A host that always succeeds with the given URL.
    pub fn publishing(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Ok(url.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A host whose every publish fails with the given reason.
    pub fn failing(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Err(reason.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle for asserting call counts after the host is moved away.
    pub fn handle(&self) -> MockHostHandle {
        MockHostHandle {
            calls: self.calls.clone(),
        }
    }
}

#[async_trait]
impl StaticHost for MockHost {
    fn name(&self) -> &str {
        &self.name
    }

    async fn publish(&self, _site: &GeneratedSite) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Ok(url) => Ok(url.clone()),
            Err(reason) => Err(SitegenError::Host {
                host: self.name.clone(),
                source: reason.clone().into(),
            }),
        }
    }
}
