use serde_json::Value;

use crate::protocol::Response;

/// One blocking request/response exchange with the game server.
///
/// Implementations post `body` as JSON and return the reply parsed as a JSON
/// object. Non-success HTTP statuses are not errors at this level; only a
/// failed exchange or an unparseable body is.
pub trait Transport {
    fn post(&mut self, url: &str, body: &Value) -> anyhow::Result<Response>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post(&mut self, url: &str, body: &Value) -> anyhow::Result<Response> {
        (**self).post(url, body)
    }
}

pub mod http;
pub mod in_memory;
