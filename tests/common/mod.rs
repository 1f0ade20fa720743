#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use healthmate_relay::services::completion::{
    CompletionProvider, CompletionRequest, ProviderError,
};

/// What the stub answers with.
#[derive(Clone)]
pub enum StubReply {
    /// Echo the system instruction back, so callers can see which one was used.
    EchoInstruction,
    Text(String),
    NoChoices,
    Upstream(String),
    Transport(String),
}

/// Counts calls and records every request it was handed.
pub struct StubProvider {
    reply: StubReply,
    delay: Duration,
    calls: AtomicUsize,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl StubProvider {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Self::with_delay(reply, Duration::ZERO)
    }

    pub fn with_delay(reply: StubReply, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delay,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(
        &self,
        _api_key: &str,
        request: &CompletionRequest,
    ) -> Result<Option<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.reply {
            StubReply::EchoInstruction => Ok(Some(request.system_instruction.clone())),
            StubReply::Text(text) => Ok(Some(text.clone())),
            StubReply::NoChoices => Ok(None),
            StubReply::Upstream(msg) => Err(ProviderError::Upstream(msg.clone())),
            StubReply::Transport(msg) => Err(ProviderError::Transport(msg.clone())),
        }
    }
}
