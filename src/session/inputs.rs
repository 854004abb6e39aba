//! Named input controls and the registry the session reads and updates.

use std::collections::HashMap;
use thiserror::Error;

/// Every input control the application shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    UserLeagueName,
    UserTeamName,
    ChatInput,
    CategorySelector,
    PlayerAdder,
    ViewBlock,
    AddYourPlayers,
    TradePartner,
    AddOtherPlayers,
}

impl ControlId {
    pub const ALL: [ControlId; 9] = [
        ControlId::UserLeagueName,
        ControlId::UserTeamName,
        ControlId::ChatInput,
        ControlId::CategorySelector,
        ControlId::PlayerAdder,
        ControlId::ViewBlock,
        ControlId::AddYourPlayers,
        ControlId::TradePartner,
        ControlId::AddOtherPlayers,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ControlId::UserLeagueName => "user_league_name",
            ControlId::UserTeamName => "user_team_name",
            ControlId::ChatInput => "chat_input",
            ControlId::CategorySelector => "category_selector",
            ControlId::PlayerAdder => "player_adder",
            ControlId::ViewBlock => "view_block",
            ControlId::AddYourPlayers => "add_your_players",
            ControlId::TradePartner => "trade_partner",
            ControlId::AddOtherPlayers => "add_other_players",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ControlId::UserLeagueName => "Select Your League",
            ControlId::UserTeamName => "Select your team",
            ControlId::ChatInput => "Ask A Question",
            ControlId::CategorySelector => "Select Categories",
            ControlId::PlayerAdder => "Add Players to Your Trade Block",
            ControlId::ViewBlock => "Select a Team",
            ControlId::AddYourPlayers => "Add Players You Want to Trade",
            ControlId::TradePartner => "Select Team to Trade With",
            ControlId::AddOtherPlayers => "Add Players You Want to Trade For",
        }
    }

    /// Multi-select controls hold an ordered list of values.
    pub fn is_multiple(&self) -> bool {
        matches!(
            self,
            ControlId::CategorySelector
                | ControlId::PlayerAdder
                | ControlId::AddYourPlayers
                | ControlId::AddOtherPlayers
        )
    }

    /// Free-text controls accept any value; the rest only accept their options.
    pub fn is_free_text(&self) -> bool {
        matches!(self, ControlId::ChatInput)
    }

    /// Controls that only exist on the login screen.
    pub fn is_login(&self) -> bool {
        matches!(self, ControlId::UserLeagueName | ControlId::UserTeamName)
    }
}

/// Current value of a control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputValue {
    #[default]
    Unset,
    Single(String),
    Multiple(Vec<String>),
}

impl InputValue {
    /// The single selected value; empty strings count as unset.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            InputValue::Single(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// All selected values in selection order.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            InputValue::Unset => Vec::new(),
            InputValue::Single(value) if value.is_empty() => Vec::new(),
            InputValue::Single(value) => vec![value.clone()],
            InputValue::Multiple(values) => values.clone(),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.to_list().is_empty()
    }
}

/// What the session needs from the UI: read a control's value and replace
/// a control's selectable options.
pub trait InputRegistry {
    fn value(&self, control: ControlId) -> InputValue;

    /// Replaces the options wholesale.
    fn set_choices(&mut self, control: ControlId, choices: Vec<String>);
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{value}' is not an option for {}", .control.id())]
pub struct InvalidChoice {
    pub control: ControlId,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
struct ControlState {
    choices: Vec<String>,
    value: InputValue,
}

/// In-memory control registry backing the terminal front end.
#[derive(Debug, Clone, Default)]
pub struct InputPanel {
    controls: HashMap<ControlId, ControlState>,
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choices(&self, control: ControlId) -> &[String] {
        self.controls
            .get(&control)
            .map(|state| state.choices.as_slice())
            .unwrap_or(&[])
    }

    /// Selects `values` on `control`. Values must be among the control's
    /// options unless it is free text; nothing changes on rejection.
    pub fn select(&mut self, control: ControlId, values: Vec<String>) -> Result<(), InvalidChoice> {
        if !control.is_free_text() {
            let choices = self.choices(control);
            if let Some(invalid) = values.iter().find(|v| !choices.contains(*v)) {
                return Err(InvalidChoice {
                    control,
                    value: invalid.clone(),
                });
            }
        }

        let value = match (control.is_multiple(), values.len()) {
            (_, 0) => InputValue::Unset,
            (true, _) => InputValue::Multiple(values),
            (false, _) => InputValue::Single(values.into_iter().next().unwrap_or_default()),
        };
        self.controls.entry(control).or_default().value = value;
        Ok(())
    }

    pub fn clear(&mut self, control: ControlId) {
        if let Some(state) = self.controls.get_mut(&control) {
            state.value = InputValue::Unset;
        }
    }
}

impl InputRegistry for InputPanel {
    fn value(&self, control: ControlId) -> InputValue {
        self.controls
            .get(&control)
            .map(|state| state.value.clone())
            .unwrap_or_default()
    }

    /// Keeps only the selected values that survive the new option list.
    fn set_choices(&mut self, control: ControlId, choices: Vec<String>) {
        let state = self.controls.entry(control).or_default();
        state.value = match std::mem::take(&mut state.value) {
            InputValue::Single(value) if choices.contains(&value) => InputValue::Single(value),
            InputValue::Multiple(values) => {
                let kept: Vec<String> = values.into_iter().filter(|v| choices.contains(v)).collect();
                if kept.is_empty() {
                    InputValue::Unset
                } else {
                    InputValue::Multiple(kept)
                }
            }
            _ => InputValue::Unset,
        };
        state.choices = choices;
    }
}
