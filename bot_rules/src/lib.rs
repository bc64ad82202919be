//! # Bot Rules
//!
//! Shared definitions for bot knowledge: who owns a knowledge base and how
//! facts are written down as text. This crate holds no facts itself.

pub mod agent;
pub mod syntax;

pub use agent::*;
pub use syntax::*;
