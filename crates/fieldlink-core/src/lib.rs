//! Core types for the Fieldlink device agent.
//!
//! This crate defines the foundational abstractions used across the
//! project:
//! - Unified error type
//! - Agent configuration
//! - Direct-method request/response types and registry
//! - Connectivity parameter store

pub mod config;
pub mod error;
pub mod method;
pub mod params;

pub use config::AgentConfig;
pub use error::{Error, Result};
pub use method::{MethodHandler, MethodRegistry, MethodRequest, MethodResponse};
pub use params::{FileParameterStore, ParameterStore};
