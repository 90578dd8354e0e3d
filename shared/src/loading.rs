//! Explicit state of the day loader.
//!
//! Every load takes a ticket. Only the response holding the latest ticket is
//! applied to the view; older responses that arrive late are discarded, and
//! the loader stays `Loading` until the latest request settles.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        date: NaiveDate,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    pub date: NaiveDate,
}

/// Outcome of settling a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The ticket is the latest request: apply its result
    Apply,
    /// A newer request superseded this one: drop its result
    Stale,
}

#[derive(Debug, Default)]
pub struct LoadTracker {
    generation: u64,
    state: LoadState,
}

impl LoadTracker {
    pub fn begin(&mut self, date: NaiveDate) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading { date };
        LoadTicket {
            generation: self.generation,
            date,
        }
    }

    /// Settle a request, whatever its outcome
    pub fn settle(&mut self, ticket: LoadTicket) -> Settlement {
        if ticket.generation == self.generation {
            self.state = LoadState::Idle;
            Settlement::Apply
        } else {
            Settlement::Stale
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }
}
