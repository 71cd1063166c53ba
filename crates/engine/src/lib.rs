#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Boundary between the playground and the template engine.
//!
//! Everything the engine produces is mapped onto typed values here, so the
//! rest of the playground never inspects untyped engine data.
//!
//! # Main Types
//!
//! - [`TemplateEngine`] - Environment construction plus the three source queries
//! - [`RenderEnvironment`] - A set of registered templates that can be rendered
//! - [`MiniJinja`] - The engine implementation backed by `minijinja`
//! - [`Value`] - Tagged null/bool/number/string/sequence/mapping value
//!
//! Every call is a one-shot function of its inputs: nothing is cached between
//! invocations and failures are never retried.

/// Syntax tree returned by [`TemplateEngine::parse`].
pub mod ast;
mod engine;
mod error;
/// Compiled block programs returned by [`TemplateEngine::instructions`].
pub mod instructions;
mod minijinja_engine;
/// Lexical tokens returned by [`TemplateEngine::tokenize`].
pub mod token;
pub mod value;
mod serialized;


pub use ast::AstNode;
pub use engine::{RenderEnvironment, TemplateEngine, TemplateFiles};
pub use error::EngineError;
pub use instructions::{BlockInstructions, Instruction, ROOT_BLOCK};
pub use minijinja_engine::{MiniJinja, MiniJinjaEnvironment};
pub use token::{Span, Token};
pub use value::{Number, Value};
