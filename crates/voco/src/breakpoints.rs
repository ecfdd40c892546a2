//! Per-session breakpoint bookkeeping.

use std::collections::BTreeSet;

/// Outcome of a [`BreakpointRegistry::toggle`] call.
///
/// Tells the caller which host effect to mirror the state change with:
/// `Added` means the line gained a breakpoint, `Removed` means an
/// existing one was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Lines (1-based, as spoken) that currently carry a breakpoint.
///
/// Owned by one engine, so its lifetime is the session's. The registry
/// only mirrors breakpoints placed through voice commands; it has no
/// view of markers added by other means.
#[derive(Debug, Default, Clone)]
pub struct BreakpointRegistry {
    lines: BTreeSet<u32>,
}

impl BreakpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the breakpoint on `line` and reports which way it went.
    pub fn toggle(&mut self, line: u32) -> Toggle {
        if self.lines.remove(&line) {
            Toggle::Removed
        } else {
            self.lines.insert(line);
            Toggle::Added
        }
    }

    /// Undoes a toggle the host rejected.
    pub fn revert(&mut self, line: u32, outcome: Toggle) {
        match outcome {
            Toggle::Added => {
                self.lines.remove(&line);
            }
            Toggle::Removed => {
                self.lines.insert(line);
            }
        }
    }

    pub fn contains(&self, line: u32) -> bool {
        self.lines.contains(&line)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
