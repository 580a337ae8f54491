//! Maps one logical input line to its presentation role. Pure and total:
//! any string, including control characters, yields a role without panicking.

use crate::model::Role;

/// Lines shorter than this qualify for the all-caps header heuristic.
const HEADER_MAX_CHARS: usize = 60;

/// The header heuristic only applies this close to the document start.
const HEADER_LINE_BOUND: usize = 6;

/// Underscore runs at least this long mark a signature rule.
const UNDERSCORE_RUN: usize = 5;

pub fn classify(line: &str, line_index: usize) -> Role {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Role::Blank;
    }
    if is_signature_marker(trimmed) {
        return Role::Signature;
    }
    // Known quirk: a short all-caps Body sentence near the top of the entry
    // is indistinguishable from a section title and gets bolded. Cosmetic
    // only; it still flows like any other line.
    if line_index < HEADER_LINE_BOUND
        && trimmed.chars().count() < HEADER_MAX_CHARS
        && !trimmed.contains('_')
        && trimmed.chars().any(|c| c.is_ascii_alphabetic())
        && trimmed.to_uppercase() == trimmed
    {
        return Role::Header;
    }
    Role::Body
}

fn is_signature_marker(trimmed: &str) -> bool {
    has_underscore_run(trimmed)
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
        || (trimmed.starts_with('(') && trimmed.ends_with(')'))
}

fn has_underscore_run(s: &str) -> bool {
    let mut run = 0;
    for ch in s.chars() {
        if ch == '_' {
            run += 1;
            if run >= UNDERSCORE_RUN {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
