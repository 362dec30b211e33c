//! Direct-method request/response types and the method registry.
//!
//! A direct method is a cloud-initiated remote procedure call targeting
//! this device: a named method plus an optional JSON payload, answered
//! with a status code and a JSON body. The registry is the seam an
//! external transport drives; nothing here knows about any transport.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

/// An incoming direct-method invocation.
#[derive(Debug, Clone, Default)]
pub struct MethodRequest {
    /// Raw JSON payload, absent for payload-less methods.
    pub payload: Option<Value>,
}

impl MethodRequest {
    /// Create a request carrying a payload.
    pub fn new(payload: Value) -> Self {
        Self {
            payload: Some(payload),
        }
    }

    /// Create a payload-less request.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a top-level field of the payload.
    ///
    /// Returns `None` when the payload is absent, not an object, or the
    /// field is missing.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.as_ref().and_then(|p| p.get(name))
    }
}

/// The response to a direct-method invocation.
///
/// Status codes follow HTTP conventions: 200 success, 4xx caller error,
/// 5xx device-side failure.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodResponse {
    /// HTTP-like status code.
    pub status: u16,
    /// JSON response body.
    pub body: Value,
}

impl MethodResponse {
    /// A 200 response with the given body.
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// A 200 response carrying only a message.
    pub fn message(text: impl Into<String>) -> Self {
        Self::ok(json!({ "message": text.into() }))
    }

    /// A failure response carrying a message.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "message": message.into() }),
        }
    }

    /// Whether the status code indicates success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Handler for a single direct method.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// Execute the method against the given request.
    ///
    /// Handlers never fail at this boundary; failures are encoded in the
    /// response status.
    async fn handle(&self, request: MethodRequest) -> MethodResponse;
}

/// Registry of direct methods by name.
///
/// The external dispatch layer resolves incoming calls through
/// [`MethodRegistry::dispatch`].
#[derive(Default)]
pub struct MethodRegistry {
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl MethodRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a method name.
    ///
    /// Registering the same name again replaces the previous handler.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn MethodHandler>) {
        let name = name.into();
        if self.handlers.insert(name.clone(), handler).is_some() {
            debug!(method = %name, "replaced direct method handler");
        }
    }

    /// Dispatch a request to the named method.
    ///
    /// Unknown methods yield a 404 response, never an error.
    pub async fn dispatch(&self, name: &str, request: MethodRequest) -> MethodResponse {
        match self.handlers.get(name) {
            Some(handler) => handler.handle(request).await,
            None => MethodResponse::error(404, format!("Unknown method: {}", name)),
        }
    }

    /// Names of all registered methods, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
