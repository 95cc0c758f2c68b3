use champgen_terminal::roster::{seed_fatigue, seed_fixtures, seed_players};
use champgen_terminal::state::{apply_delta, AppState, Delta, FilterCriteria};

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    // Widen the budget so the whole roster is visible on the shortlist.
    state.filters = FilterCriteria {
        position: None,
        age: 25,
        league: None,
        budget_m: 250,
    };
    apply_delta(&mut state, Delta::SetPlayers(seed_players()));
    state
}

#[test]
fn set_players_builds_leagues_in_first_seen_order() {
    let state = loaded_state();
    assert_eq!(state.leagues, ["La Liga", "Premier League"]);
}

#[test]
fn selection_is_preserved_by_id_across_roster_reload() {
    let mut state = loaded_state();
    state.recruit_selected = 4; // mbappe
    assert_eq!(state.selected_player().unwrap().id, "mbappe");

    // Reload with the first two players dropped.
    let reduced: Vec<_> = seed_players().into_iter().skip(2).collect();
    apply_delta(&mut state, Delta::SetPlayers(reduced));

    assert_eq!(state.selected_player().unwrap().id, "mbappe");
}

#[test]
fn selection_falls_back_to_top_when_player_disappears() {
    let mut state = loaded_state();
    state.recruit_selected = 4;
    assert_eq!(state.selected_player().unwrap().id, "mbappe");

    let without_mbappe: Vec<_> = seed_players()
        .into_iter()
        .filter(|p| p.id != "mbappe")
        .collect();
    apply_delta(&mut state, Delta::SetPlayers(without_mbappe));

    assert_eq!(state.recruit_selected, 0);
    assert_eq!(state.selected_player().unwrap().id, "bellingham");
}

#[test]
fn explained_player_is_cleared_when_roster_loses_them() {
    let mut state = loaded_state();
    state.recruit_selected = 1;
    state.confirm_selection();
    assert_eq!(state.explained_player().unwrap().id, "pedri");

    let without_pedri: Vec<_> = seed_players()
        .into_iter()
        .filter(|p| p.id != "pedri")
        .collect();
    apply_delta(&mut state, Delta::SetPlayers(without_pedri));

    assert!(state.explained_player().is_none());
    assert!(state.selected_player_id.is_none());
}

#[test]
fn subject_indices_are_clamped_on_reload() {
    let mut state = loaded_state();
    state.valuation_selected = 2; // vinicius, of three valuation subjects

    let only_mbappe: Vec<_> = seed_players()
        .into_iter()
        .filter(|p| p.id == "mbappe" || p.valuation.is_none())
        .collect();
    apply_delta(&mut state, Delta::SetPlayers(only_mbappe));

    assert_eq!(state.valuation_selected, 0);
    assert_eq!(state.current_valuation_subject().unwrap().id, "mbappe");
}

#[test]
fn strategy_delta_installs_fixtures_and_fatigue() {
    let mut state = AppState::new();
    apply_delta(
        &mut state,
        Delta::SetStrategy {
            fixtures: seed_fixtures(),
            fatigue: seed_fatigue(),
        },
    );
    assert_eq!(state.fixtures.len(), 5);
    let fatigue = state.fatigue.as_ref().unwrap();
    assert_eq!(fatigue.overall, 65);
    assert_eq!(fatigue.levels.len(), 8);
}

#[test]
fn export_deltas_drive_the_status_line() {
    let mut state = AppState::new();

    apply_delta(
        &mut state,
        Delta::ExportStarted {
            path: "out.json".to_string(),
            total: 3,
        },
    );
    assert!(state.export.active);
    assert!(!state.export.done);
    assert_eq!(state.export.total, 3);

    apply_delta(
        &mut state,
        Delta::ExportProgress {
            current: 2,
            total: 3,
            message: "Player: Pedri González".to_string(),
        },
    );
    assert_eq!(state.export.current, 2);

    apply_delta(
        &mut state,
        Delta::ExportFinished {
            path: "out.json".to_string(),
            players: 3,
            errors: 0,
        },
    );
    assert!(state.export.done);
    assert_eq!(state.export.current, state.export.total);
    assert!(state.export.message.contains("out.json"));
}

#[test]
fn failed_export_does_not_claim_a_save() {
    let mut state = AppState::new();

    apply_delta(
        &mut state,
        Delta::ExportStarted {
            path: "out.xlsx".to_string(),
            total: 3,
        },
    );
    apply_delta(
        &mut state,
        Delta::ExportFailed {
            path: "out.xlsx".to_string(),
            message: "Permission denied (os error 13)".to_string(),
        },
    );

    assert!(state.export.done);
    assert_eq!(state.export.error_count, 1);
    assert!(state.export.message.starts_with("Export failed:"));
    assert!(!state.export.message.contains("Saved"));
}

#[test]
fn log_buffer_is_capped() {
    let mut state = AppState::new();
    for i in 0..300 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().unwrap(), "[INFO] line 100");
}

#[test]
fn subject_cycling_wraps_in_both_directions() {
    let mut state = loaded_state();
    state.screen = champgen_terminal::state::Screen::Valuation;

    // Three valuation subjects: mbappe, haaland, vinicius.
    assert_eq!(state.current_valuation_subject().unwrap().id, "mbappe");
    state.cycle_subject_prev();
    assert_eq!(state.current_valuation_subject().unwrap().id, "vinicius");
    state.cycle_subject_next();
    state.cycle_subject_next();
    assert_eq!(state.current_valuation_subject().unwrap().id, "haaland");
}
