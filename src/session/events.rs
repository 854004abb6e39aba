//! UI events the session responds to and what handling them produced.

use super::inputs::ControlId;

/// Discrete UI events. Values are read from the input registry when the
/// event is handled, not carried by the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The login league selector changed.
    LeagueSelectionChanged,
    /// "Continue" on the login screen.
    SubmitTeam,
    TradePartnerChanged,
    /// "Save Trade Block".
    SaveTradeBlock,
    ViewBlockChanged,
    SubmitTrade,
    /// "Generate Response" on the AI assistance panel.
    GenerateResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event does not apply in the current session state.
    Ignored,
    OptionsUpdated,
    LoggedIn { team: String, league: String },
    /// Team not chosen, or not in the chosen league. State is unchanged.
    LoginRejected,
    TradeBlockSaved { entries_added: usize },
    /// Accepted with no effect.
    NotImplemented,
}

/// Result of handling one event: its outcome plus every control whose
/// options were replaced, in the order they were replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventReport {
    pub outcome: EventOutcome,
    pub refreshed: Vec<ControlId>,
}

impl EventReport {
    pub fn new(outcome: EventOutcome) -> Self {
        Self {
            outcome,
            refreshed: Vec::new(),
        }
    }
}
