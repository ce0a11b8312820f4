//! Scripted in-memory gateway for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::ModelGateway;

/// One recorded gateway invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub system: Option<String>,
}

/// Replays queued replies in order; once the queue is drained every call
/// gets `fallback`.
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<String>>,
    fallback: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGateway {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            fallback: "了解しました。".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `reply`.
    pub fn always(reply: impl Into<String>) -> Self {
        let mut gateway = Self::new(Vec::<String>::new());
        gateway.fallback = reply.into();
        gateway
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn generate(&self, prompt: &str, system: Option<&str>) -> String {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            system: system.map(str::to_string),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }

    fn model(&self) -> &str {
        "scripted"
    }
}
