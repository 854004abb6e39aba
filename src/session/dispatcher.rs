//! Event dispatch: apply one UI event, then run the effects it made due.

use super::derivations::{
    active_categories, active_teams, is_category_league, trade_partner_choices,
    trade_partner_roster, your_team_roster,
};
use super::effects::{Effect, EffectTracker};
use super::events::{EventOutcome, EventReport, UiEvent};
use super::inputs::{ControlId, InputRegistry};
use super::state::{Session, TradeBlockEntry};
use crate::data_fetcher::LeagueDataProvider;
use std::sync::Arc;
use tracing::{debug, info};

/// Owns one user's session and trade blocks over shared, read-only league
/// tables. Events are handled one at a time; each call to [`handle`]
/// finishes every dependent option refresh before returning.
///
/// [`handle`]: SessionController::handle
pub struct SessionController<P: LeagueDataProvider> {
    provider: Arc<P>,
    session: Session,
    trade_blocks: Vec<TradeBlockEntry>,
    effects: EffectTracker,
}

impl<P: LeagueDataProvider> SessionController<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            session: Session::new(),
            trade_blocks: Vec::new(),
            effects: EffectTracker::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn trade_blocks(&self) -> &[TradeBlockEntry] {
        &self.trade_blocks
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Lays out the login screen: every league in the league selector and
    /// an empty team selector.
    pub fn start<R: InputRegistry + ?Sized>(&mut self, inputs: &mut R) -> Vec<ControlId> {
        let leagues = self
            .provider
            .league_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        inputs.set_choices(ControlId::UserLeagueName, leagues);
        inputs.set_choices(ControlId::UserTeamName, Vec::new());

        let mut refreshed = vec![ControlId::UserLeagueName, ControlId::UserTeamName];
        refreshed.extend(self.run_due_effects(inputs));
        refreshed
    }

    pub fn handle<R: InputRegistry + ?Sized>(
        &mut self,
        event: UiEvent,
        inputs: &mut R,
    ) -> EventReport {
        debug!("Handling {event:?}");

        let mut report = match event {
            UiEvent::LeagueSelectionChanged => self.on_league_changed(inputs),
            UiEvent::SubmitTeam => self.on_submit_team(inputs),
            UiEvent::TradePartnerChanged => self.on_trade_partner_changed(inputs),
            UiEvent::SaveTradeBlock => self.on_save_trade_block(inputs),
            UiEvent::ViewBlockChanged => {
                let team = inputs.value(ControlId::ViewBlock);
                debug!("View block requested for {:?}", team.as_single());
                EventReport::new(EventOutcome::NotImplemented)
            }
            UiEvent::SubmitTrade => EventReport::new(EventOutcome::NotImplemented),
            UiEvent::GenerateResponse => {
                let roster = your_team_roster(self.provider.as_ref(), &self.session);
                debug!("Response requested with {} rostered players", roster.len());
                EventReport::new(EventOutcome::NotImplemented)
            }
        };

        report.refreshed.extend(self.run_due_effects(inputs));
        report
    }

    fn on_league_changed<R: InputRegistry + ?Sized>(&mut self, inputs: &mut R) -> EventReport {
        let league = inputs.value(ControlId::UserLeagueName);
        let teams = active_teams(self.provider.as_ref(), league.as_single()).to_vec();
        debug!(
            "League {:?} selected, {} teams available",
            league.as_single(),
            teams.len()
        );
        inputs.set_choices(ControlId::UserTeamName, teams);

        EventReport {
            outcome: EventOutcome::OptionsUpdated,
            refreshed: vec![ControlId::UserTeamName],
        }
    }

    fn on_submit_team<R: InputRegistry + ?Sized>(&mut self, inputs: &mut R) -> EventReport {
        if self.session.has_entered() {
            return EventReport::new(EventOutcome::Ignored);
        }

        let team = inputs.value(ControlId::UserTeamName);
        let league = inputs.value(ControlId::UserLeagueName);

        match (team.as_single(), league.as_single()) {
            (Some(team), Some(league))
                if active_teams(self.provider.as_ref(), Some(league))
                    .iter()
                    .any(|t| t == team) =>
            {
                info!("Team '{team}' entered league '{league}'");
                self.session.enter(team, league);
                EventReport::new(EventOutcome::LoggedIn {
                    team: team.to_string(),
                    league: league.to_string(),
                })
            }
            (team, league) => {
                info!("Login rejected for team {team:?} in league {league:?}");
                EventReport::new(EventOutcome::LoginRejected)
            }
        }
    }

    fn on_trade_partner_changed<R: InputRegistry + ?Sized>(
        &mut self,
        inputs: &mut R,
    ) -> EventReport {
        let partner = inputs.value(ControlId::TradePartner);
        let roster = trade_partner_roster(self.provider.as_ref(), partner.as_single()).to_vec();
        inputs.set_choices(ControlId::AddOtherPlayers, roster);

        EventReport {
            outcome: EventOutcome::OptionsUpdated,
            refreshed: vec![ControlId::AddOtherPlayers],
        }
    }

    fn on_save_trade_block<R: InputRegistry + ?Sized>(&mut self, inputs: &mut R) -> EventReport {
        let (Some(team), Some(league)) = (
            self.session.selected_team().map(str::to_string),
            self.session.selected_league().map(str::to_string),
        ) else {
            return EventReport::new(EventOutcome::Ignored);
        };

        let before = self.trade_blocks.len();
        let category_league = is_category_league(self.provider.as_ref(), Some(&league));

        self.trade_blocks.push(TradeBlockEntry::Players {
            team: team.clone(),
            league: league.clone(),
            trade_block_players: inputs.value(ControlId::PlayerAdder).to_list(),
        });

        if category_league {
            self.trade_blocks.push(TradeBlockEntry::CategoriesNeeded {
                team,
                league,
                categories_needed: inputs.value(ControlId::CategorySelector).to_list(),
            });
        }

        let entries_added = self.trade_blocks.len() - before;
        info!(
            "Saved trade block ({entries_added} entries, {} total)",
            self.trade_blocks.len()
        );
        EventReport::new(EventOutcome::TradeBlockSaved { entries_added })
    }

    fn run_due_effects<R: InputRegistry + ?Sized>(&mut self, inputs: &mut R) -> Vec<ControlId> {
        let mut refreshed = Vec::new();
        for effect in self.effects.due(&self.session) {
            debug!("Running {effect:?}");
            match effect {
                Effect::MainScreenLayout => {
                    let view_teams = self
                        .provider
                        .team_names()
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                    inputs.set_choices(ControlId::ViewBlock, view_teams);
                    inputs.set_choices(
                        ControlId::TradePartner,
                        trade_partner_choices(self.provider.as_ref(), &self.session),
                    );
                    refreshed.extend([ControlId::ViewBlock, ControlId::TradePartner]);
                }
                Effect::UnlockInitialization => {
                    let roster = your_team_roster(self.provider.as_ref(), &self.session).to_vec();
                    let league_input = inputs.value(ControlId::UserLeagueName);
                    let categories = active_categories(
                        self.provider.as_ref(),
                        &self.session,
                        league_input.as_single(),
                    )
                    .to_vec();

                    inputs.set_choices(ControlId::PlayerAdder, roster.clone());
                    inputs.set_choices(ControlId::AddYourPlayers, roster);
                    inputs.set_choices(ControlId::CategorySelector, categories);
                    refreshed.extend([
                        ControlId::PlayerAdder,
                        ControlId::AddYourPlayers,
                        ControlId::CategorySelector,
                    ]);
                }
            }
        }
        refreshed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::inputs::InputPanel;
    use crate::testing_utils::TestDataBuilder;

    fn controller() -> SessionController<crate::data_fetcher::LeagueTables> {
        SessionController::new(Arc::new(TestDataBuilder::create_sample_tables()))
    }

    fn select(panel: &mut InputPanel, control: ControlId, values: &[&str]) {
        panel
            .select(control, values.iter().map(|v| v.to_string()).collect())
            .unwrap();
    }

    #[test]
    fn test_start_lists_leagues() {
        let mut controller = controller();
        let mut panel = InputPanel::new();

        let refreshed = controller.start(&mut panel);

        assert_eq!(
            refreshed,
            vec![ControlId::UserLeagueName, ControlId::UserTeamName]
        );
        assert_eq!(
            panel.choices(ControlId::UserLeagueName),
            ["Category League", "Points League", "L"]
        );
        assert!(panel.choices(ControlId::UserTeamName).is_empty());
    }

    #[test]
    fn test_league_change_replaces_team_options() {
        let mut controller = controller();
        let mut panel = InputPanel::new();
        controller.start(&mut panel);

        select(&mut panel, ControlId::UserLeagueName, &["Points League"]);
        let report = controller.handle(UiEvent::LeagueSelectionChanged, &mut panel);

        assert_eq!(report.outcome, EventOutcome::OptionsUpdated);
        assert_eq!(report.refreshed, vec![ControlId::UserTeamName]);
        assert_eq!(panel.choices(ControlId::UserTeamName), ["Team X", "Team Y"]);
    }

    #[test]
    fn test_login_runs_layout_then_initialization() {
        let mut controller = controller();
        let mut panel = InputPanel::new();
        controller.start(&mut panel);

        select(&mut panel, ControlId::UserLeagueName, &["Category League"]);
        controller.handle(UiEvent::LeagueSelectionChanged, &mut panel);
        select(&mut panel, ControlId::UserTeamName, &["Team A"]);
        let report = controller.handle(UiEvent::SubmitTeam, &mut panel);

        assert_eq!(
            report.outcome,
            EventOutcome::LoggedIn {
                team: "Team A".to_string(),
                league: "Category League".to_string()
            }
        );
        assert_eq!(
            report.refreshed,
            vec![
                ControlId::ViewBlock,
                ControlId::TradePartner,
                ControlId::PlayerAdder,
                ControlId::AddYourPlayers,
                ControlId::CategorySelector,
            ]
        );
        assert_eq!(panel.choices(ControlId::PlayerAdder), ["Player1", "Player2"]);
        assert_eq!(panel.choices(ControlId::AddYourPlayers), ["Player1", "Player2"]);
        assert_eq!(panel.choices(ControlId::CategorySelector), ["Goals", "Assists"]);
        assert_eq!(panel.choices(ControlId::TradePartner), ["Team B", "Team C"]);
    }

    #[test]
    fn test_second_submit_after_login_is_ignored() {
        let mut controller = controller();
        let mut panel = InputPanel::new();
        controller.start(&mut panel);
        select(&mut panel, ControlId::UserLeagueName, &["Category League"]);
        controller.handle(UiEvent::LeagueSelectionChanged, &mut panel);
        select(&mut panel, ControlId::UserTeamName, &["Team A"]);
        controller.handle(UiEvent::SubmitTeam, &mut panel);

        select(&mut panel, ControlId::UserTeamName, &["Team B"]);
        let report = controller.handle(UiEvent::SubmitTeam, &mut panel);

        assert_eq!(report.outcome, EventOutcome::Ignored);
        assert!(report.refreshed.is_empty());
        assert_eq!(controller.session().selected_team(), Some("Team A"));
    }

    #[test]
    fn test_save_before_login_is_ignored() {
        let mut controller = controller();
        let mut panel = InputPanel::new();
        controller.start(&mut panel);

        let report = controller.handle(UiEvent::SaveTradeBlock, &mut panel);
        assert_eq!(report.outcome, EventOutcome::Ignored);
        assert!(controller.trade_blocks().is_empty());
    }

    #[test]
    fn test_placeholders_change_nothing() {
        let mut controller = controller();
        let mut panel = InputPanel::new();
        controller.start(&mut panel);

        for event in [
            UiEvent::ViewBlockChanged,
            UiEvent::SubmitTrade,
            UiEvent::GenerateResponse,
        ] {
            let report = controller.handle(event, &mut panel);
            assert_eq!(report.outcome, EventOutcome::NotImplemented);
            assert!(report.refreshed.is_empty());
        }
        assert_eq!(controller.session(), &Session::new());
        assert!(controller.trade_blocks().is_empty());
    }
}
