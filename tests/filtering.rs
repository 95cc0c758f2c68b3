use champgen_terminal::filter::filter_players;
use champgen_terminal::roster::seed_players;
use champgen_terminal::state::{FilterCriteria, Position};

fn open_criteria() -> FilterCriteria {
    FilterCriteria {
        position: None,
        age: 25,
        league: None,
        budget_m: 250,
    }
}

#[test]
fn open_criteria_keep_roster_order() {
    let players = seed_players();
    let result = filter_players(&players, &open_criteria());
    let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "bellingham",
            "pedri",
            "camavinga",
            "gavi",
            "mbappe",
            "haaland",
            "vinicius"
        ]
    );
}

#[test]
fn default_budget_excludes_the_whole_roster() {
    // Every seeded player is worth more than the 50M starting budget, so
    // the shortlist starts empty until the scout raises it.
    let players = seed_players();
    let result = filter_players(&players, &FilterCriteria::default());
    assert!(result.is_empty());
}

#[test]
fn budget_steps_admit_players_by_value() {
    let players = seed_players();

    let mut criteria = open_criteria();
    criteria.budget_m = 75;
    let result = filter_players(&players, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "gavi");

    criteria.budget_m = 120;
    let ids: Vec<&str> = filter_players(&players, &criteria)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["pedri", "camavinga", "gavi"]);
}

#[test]
fn position_filter_narrows_to_forwards() {
    let players = seed_players();
    let mut criteria = open_criteria();
    criteria.position = Some(Position::Forward);
    let ids: Vec<&str> = filter_players(&players, &criteria)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["mbappe", "haaland", "vinicius"]);
}

#[test]
fn league_filter_is_exact() {
    let players = seed_players();
    let mut criteria = open_criteria();
    criteria.league = Some("Premier League".to_string());
    let ids: Vec<&str> = filter_players(&players, &criteria)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["haaland"]);
}

#[test]
fn age_window_spans_five_years_each_way() {
    let players = seed_players();
    let mut criteria = open_criteria();
    criteria.age = 16;
    // Window 16-21: only Bellingham (21) and Gavi (20) qualify.
    let ids: Vec<&str> = filter_players(&players, &criteria)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["bellingham", "gavi"]);
}

#[test]
fn filtering_is_idempotent() {
    let players = seed_players();
    let mut criteria = open_criteria();
    criteria.position = Some(Position::Midfielder);
    criteria.budget_m = 100;

    let once: Vec<String> = filter_players(&players, &criteria)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    let survivors: Vec<_> = filter_players(&players, &criteria)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<String> = filter_players(&survivors, &criteria)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(once, twice);
}
