//! Sass Engine - the compilation boundary of the sassc driver
//!
//! The driver never looks inside a stylesheet. It builds a [`CompileRequest`],
//! hands it to an [`Engine`], and routes the [`CompileResult`] that comes back.
//!
//! # Architecture
//!
//! ```text
//! CompileRequest { origin, options }
//!     │
//!     ▼
//! Engine::compile() ──► CompileResult { outcome, dependencies }
//!                              │              │
//!                              ▼              ▼
//!                        CompileOutcome  DependencyList
//! ```
//!
//! [`GrassEngine`] is the production engine, backed by the `grass` crate.
//! Tests substitute their own `Engine` implementations.

mod grass_engine;
mod options;
mod request;

pub use grass_engine::GrassEngine;
pub use options::{CompileOptions, OutputStyle, UnknownStyle};
pub use request::{
    CompileOutcome, CompileRequest, CompileResult, DependencyList, SourceOrigin,
    PATH_LIST_SEPARATOR,
};

/// A stylesheet compiler.
///
/// `compile` is a synchronous, blocking call. Every failure inside the engine
/// is reported through [`CompileOutcome::Error`]; the call itself never fails.
pub trait Engine {
    fn compile(&self, request: &CompileRequest) -> CompileResult;
}
