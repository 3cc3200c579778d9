//! Parser for `svn status` output.
//!
//! `svn status` prints one line per changed item: single-character flag
//! columns followed by the item's path. A `!` flag means the item is missing
//! locally; a `C` flag on the same line means it is also a tree conflict.
//! This parser extracts the paths of items flagged with both, which is the
//! "local missing, incoming edit/replace" tree-conflict shape this tool
//! repairs.
//!
//! The flag sequence cannot distinguish the "incoming delete" subtype from
//! "incoming edit/replace" — do not run the resolver against working copies
//! carrying delete conflicts.

use tracing::debug;

/// Per-line parse state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// No relevant flag seen yet on this line.
    Scanning,
    /// A `!` (locally missing) flag was seen.
    SawMissing,
    /// A `C` (conflicted) flag was seen after `!` — path tokens follow.
    SawMissingConflict,
}

/// Extract raw conflict-path candidates from captured status output.
///
/// Tokens are the whitespace-split words of each line. `!` enters the
/// missing state (re-seeing it does not reset); `C` while missing enters the
/// conflict state; every other token in the conflict state is emitted as a
/// candidate. State resets at the start of each line.
///
/// A line whose path contains whitespace emits one candidate per word. That
/// quirk is kept deliberately: downstream classification keys on base
/// filenames, and split fragments without a supported suffix fall out there.
pub fn parse_status(output: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for line in output.lines() {
        let mut state = LineState::Scanning;

        for token in line.split_whitespace() {
            match token {
                "!" => {
                    if state == LineState::Scanning {
                        state = LineState::SawMissing;
                    }
                }
                "C" if state != LineState::Scanning => {
                    state = LineState::SawMissingConflict;
                }
                _ if state == LineState::SawMissingConflict => {
                    candidates.push(token.to_string());
                }
                _ => {}
            }
        }
    }

    debug!(count = candidates.len(), "parsed raw conflict candidates");
    candidates
}
