use std::collections::VecDeque;

use serde_json::Value;

use crate::protocol::Response;
use crate::transport::Transport;

/// A request captured by [`InMemoryTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub body: Value,
}

/// Transport that answers from a queue of scripted replies and records every
/// request it is given. Posting with an empty queue is an error, as is a
/// scripted reply that is not a JSON object.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    replies: VecDeque<Value>,
    requests: Vec<Request>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: impl IntoIterator<Item = Value>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Queue another reply.
    pub fn push_reply(&mut self, reply: Value) {
        self.replies.push_back(reply);
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Transport for InMemoryTransport {
    fn post(&mut self, url: &str, body: &Value) -> anyhow::Result<Response> {
        self.requests.push(Request {
            url: url.to_string(),
            body: body.clone(),
        });
        match self.replies.pop_front() {
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(anyhow::anyhow!("reply is not a JSON object: {}", other)),
            None => Err(anyhow::anyhow!("no scripted reply left for {}", url)),
        }
    }
}
