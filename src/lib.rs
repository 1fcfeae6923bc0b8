//! AgentBoost - AGENTS.md generation for AI coding agents
//!
//! AgentBoost inspects a repository, detects which stacks and frameworks it
//! uses, and writes an `AGENTS.md` briefing file for AI coding agents,
//! optionally polished by a language model.
//!
//! The CLI surface is schema-free: arguments are classified structurally
//! (command, flags, `key=value` pairs, `key value` pairs) without a fixed
//! flag registry, so commands read whatever parameters they need by name.

pub mod args;
pub mod cli;
pub mod config;
pub mod detect;
pub mod llm;
pub mod markdown;
pub mod workspace;

pub use args::{classify, ParseResult};
pub use config::Config;
pub use workspace::Workspace;
