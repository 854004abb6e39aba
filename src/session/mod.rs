pub mod derivations;
pub mod dispatcher;
pub mod effects;
pub mod events;
pub mod inputs;
pub mod state;

pub use dispatcher::SessionController;
pub use effects::{Effect, EffectTracker};
pub use events::{EventOutcome, EventReport, UiEvent};
pub use inputs::{ControlId, InputPanel, InputRegistry, InputValue, InvalidChoice};
pub use state::{Session, TradeBlockEntry};
