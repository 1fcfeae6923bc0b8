//! Two-pass schema-free argument classifier
//!
//! Pass 1 scans left to right for the command: the first bare token that is
//! not structurally consumed as a flag's value. Pass 2 re-scans the same
//! token list with its own position to build the parameter map, skipping the
//! index chosen as the command. Both passes are pure functions of the input
//! slice, so classification is deterministic and safe to repeat.

use std::collections::BTreeMap;

use serde::Serialize;

/// Classified command line: at most one command plus named parameters.
///
/// Both fields are `None` when empty. The command is never an empty string
/// and the parameter map is never present with zero entries, so callers can
/// match on presence alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParseResult {
    /// The standalone command token, if one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Parameter keys mapped to string values. Boolean switches carry the
    /// literal string `"true"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,
}

impl ParseResult {
    /// Returns the command, or `fallback` when none was detected.
    pub fn command_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.command.as_deref().unwrap_or(fallback)
    }

    /// Looks up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .as_ref()
            .and_then(|p| p.get(key))
            .map(|s| s.as_str())
    }

    /// Looks up a parameter under any of the given keys; first hit wins.
    /// Used for long/short spellings of the same parameter.
    pub fn param_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.param(k))
    }

    /// Returns true when the key is present as a boolean switch.
    pub fn is_set(&self, key: &str) -> bool {
        self.param(key) == Some("true")
    }
}

/// True for any token starting with `-`: `-`, `--`, `-f`, `--flag`, and
/// numeric-looking tokens like `-1`.
fn is_flag_like(tok: &str) -> bool {
    tok.starts_with('-')
}

/// True for any token containing `=`, regardless of position. Checked
/// before flag-likeness: `--key=value` is key=value, not a flag.
fn is_key_value(tok: &str) -> bool {
    tok.contains('=')
}

/// True for a single-dash token bundling two or more short switches
/// (`-ab`). Long flags, bare dashes, and single-char shorts do not count,
/// and neither does anything with a dash after the first (`-a-b`).
fn is_combined_short(tok: &str) -> bool {
    match tok.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            rest.chars().count() >= 2 && !rest.contains('-')
        }
        _ => false,
    }
}

/// True when the token after `idx` exists and is neither flag-like nor
/// key=value, making it eligible for consumption as a flag's value.
fn value_follows(tokens: &[String], idx: usize) -> bool {
    tokens
        .get(idx + 1)
        .is_some_and(|next| !is_flag_like(next) && !is_key_value(next))
}

/// Pass 1: finds the index of the command token, if any.
///
/// The first bare token that is not consumed as a flag's value wins and the
/// scan stops immediately. Later bare tokens fall through to pass 2 as
/// ordinary `key value` parameters.
fn find_command(tokens: &[String]) -> Option<usize> {
    let mut j = 0;
    while j < tokens.len() {
        let tok = &tokens[j];
        if is_key_value(tok) {
            j += 1;
        } else if is_flag_like(tok) {
            // A non-combined flag consumes a following bare token as its
            // value; that token is never a command candidate. Combined
            // shorts like `-ab` consume nothing.
            if !is_combined_short(tok) && value_follows(tokens, j) {
                j += 2;
            } else {
                j += 1;
            }
        } else {
            return Some(j);
        }
    }
    None
}

/// Classifies a token sequence into a command and a parameter map.
///
/// Total over all finite inputs: malformed-looking tokens (`-`, `--`, empty
/// strings) degrade to dropped or boolean parameters rather than erroring.
/// Duplicate keys resolve last-write-wins.
pub fn classify(tokens: &[String]) -> ParseResult {
    let command_idx = find_command(tokens);

    let mut params = BTreeMap::new();
    let mut i = 0;
    while i < tokens.len() {
        if Some(i) == command_idx {
            i += 1;
            continue;
        }

        let tok = &tokens[i];
        if is_key_value(tok) {
            // Split on the first `=`; the value may be empty or contain
            // further `=` characters.
            let (raw_key, value) = tok.split_once('=').unwrap_or((tok.as_str(), ""));
            insert(&mut params, strip_one_prefix(raw_key), value);
            i += 1;
        } else if is_flag_like(tok) {
            if is_combined_short(tok) {
                // `-ab` becomes a=true, b=true.
                for ch in tok[1..].chars() {
                    insert(&mut params, &ch.to_string(), "true");
                }
                i += 1;
            } else {
                let key = tok.trim_start_matches('-');
                match tokens.get(i + 1) {
                    Some(next) if !next.starts_with('-') => {
                        insert(&mut params, key, next);
                        i += 2;
                    }
                    _ => {
                        insert(&mut params, key, "true");
                        i += 1;
                    }
                }
            }
        } else {
            // Bare token not chosen as the command: a key, paired with the
            // next token when that token is not flag-like.
            match tokens.get(i + 1) {
                Some(next) if !next.starts_with('-') => {
                    insert(&mut params, tok, next);
                    i += 2;
                }
                _ => {
                    insert(&mut params, tok, "true");
                    i += 1;
                }
            }
        }
    }

    ParseResult {
        command: command_idx
            .map(|idx| tokens[idx].clone())
            .filter(|c| !c.is_empty()),
        params: (!params.is_empty()).then_some(params),
    }
}

/// Strips at most one leading `--` or `-` from a key=value key.
fn strip_one_prefix(key: &str) -> &str {
    key.strip_prefix("--")
        .or_else(|| key.strip_prefix('-'))
        .unwrap_or(key)
}

/// Inserts a parameter, silently dropping empty keys.
fn insert(params: &mut BTreeMap<String, String>, key: &str, value: &str) {
    if !key.is_empty() {
        params.insert(key.to_string(), value.to_string());
    }
}
