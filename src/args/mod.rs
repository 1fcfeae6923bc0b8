//! # Argument Handling
//!
//! Schema-free command-line argument classification.
//!
//! AgentBoost carries no flag registry: any `--key value`, `--key=value`,
//! `-abc` bundle, or bare `key value` pair becomes a parameter, and the
//! first standalone token becomes the command. Commands read whatever keys
//! they need by name and ignore the rest.
//!
//! ## Token Kinds
//!
//! | Kind | Shape | Example | Result |
//! |------|-------|---------|--------|
//! | Key=value | contains `=` | `--output=AGENTS.md` | `output` -> `AGENTS.md` |
//! | Combined short | `-` + 2+ chars | `-fn` | `f` -> `true`, `n` -> `true` |
//! | Flag | starts with `-` | `--name boost` | `name` -> `boost` |
//! | Bare pair | two bare tokens | `env prod` | `env` -> `prod` |
//! | Standalone | lone bare token | `generate` | the command |
//!
//! A token containing `=` is always key=value, even when it also starts
//! with `-`. Flags without a following bare token get the literal value
//! `"true"`.
//!
//! ## Key Types
//!
//! - [`ParseResult`] - Classified command and parameter map
//! - [`classify`] - The two-pass classifier, total over all inputs

mod classifier;

pub use classifier::{classify, ParseResult};
