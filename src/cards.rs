//! View-model construction for the recruitment screen. Pure functions so
//! card contents can be tested without a terminal.

use crate::filter::{classify_value, market_status_label, risk_band, risk_band_label, MarketStatus};
use crate::state::{position_label, risk_level_label, PlayerRecord};

/// Rendered card for one shortlisted player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub id: String,
    pub name: String,
    /// "Midfielder • Real Madrid • 21 years"
    pub headline: String,
    pub risk_badge: String,
    /// Injury-risk band, absent when the record has no injury outlook.
    pub risk_band: Option<String>,
    /// Label/value pairs for the stat grid; values fall back to "-" when a
    /// player record carries no stat block.
    pub stat_lines: Vec<(String, String)>,
    pub current_value: String,
    pub predicted_value: String,
    pub market_status: MarketStatus,
    pub market_label: String,
    pub similarity: String,
}

/// Whole-euro values render in millions with no decimals, matching the
/// scouting reports this feeds.
pub fn format_value_m(value: u64) -> String {
    format!("€{}M", value / 1_000_000)
}

pub fn build_player_card(player: &PlayerRecord) -> PlayerCard {
    let status = classify_value(player.current_value, player.predicted_value);
    // Similarity is a top-level field and always renders; the other three
    // come from the optional stats block.
    let similarity = format!("{}%", player.similarity);
    let stat_lines = match &player.stats {
        Some(s) => vec![
            ("Overall".to_string(), s.overall.to_string()),
            ("Similarity".to_string(), similarity),
            ("Goals/90".to_string(), format!("{:.1}", s.goals90)),
            ("Pass Acc".to_string(), format!("{}%", s.pass_accuracy)),
        ],
        None => vec![
            ("Overall".to_string(), "-".to_string()),
            ("Similarity".to_string(), similarity),
            ("Goals/90".to_string(), "-".to_string()),
            ("Pass Acc".to_string(), "-".to_string()),
        ],
    };

    PlayerCard {
        id: player.id.clone(),
        name: player.name.clone(),
        headline: format!(
            "{} • {} • {} years",
            position_label(player.position),
            player.club,
            player.age
        ),
        risk_badge: risk_level_label(player.risk_level).to_string(),
        risk_band: player
            .injury
            .as_ref()
            .map(|i| risk_band_label(risk_band(i.current_risk)).to_string()),
        stat_lines,
        current_value: format_value_m(player.current_value),
        predicted_value: format_value_m(player.predicted_value),
        market_status: status,
        market_label: market_status_label(status).to_string(),
        similarity: format!("{}% match", player.similarity),
    }
}

/// Cards for the current filter result, preserving shortlist order.
pub fn build_player_cards(players: &[&PlayerRecord]) -> Vec<PlayerCard> {
    players.iter().map(|p| build_player_card(p)).collect()
}

/// Explanation panel shown when a card is confirmed. Absent when the
/// record carries no model explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainPanel {
    pub player_name: String,
    pub confidence: String,
    /// (factor name, impact description, confidence bar percent)
    pub factors: Vec<(String, String, u8)>,
}

pub fn explain_panel(player: &PlayerRecord) -> Option<ExplainPanel> {
    let report = player.xai.as_ref()?;
    Some(ExplainPanel {
        player_name: player.name.clone(),
        confidence: format!("{:.1}%", report.confidence),
        factors: report
            .factors
            .iter()
            .map(|f| (f.name.clone(), f.impact.clone(), f.confidence))
            .collect(),
    })
}

/// Physical-metrics panel for the development screen. Absent when the
/// record carries no physical profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalPanel {
    pub player_name: String,
    /// (metric label, formatted value) pairs in display order.
    pub metrics: Vec<(String, String)>,
}

pub fn physical_panel(player: &PlayerRecord) -> Option<PhysicalPanel> {
    let profile = player.physical.as_ref()?;
    Some(PhysicalPanel {
        player_name: player.name.clone(),
        metrics: vec![
            (
                "Sprint Speed".to_string(),
                format!("{:.1} km/h", profile.sprint_speed),
            ),
            (
                "Distance Covered".to_string(),
                format!("{:.1} km", profile.distance_covered),
            ),
            (
                "Sprint Recovery".to_string(),
                format!("{}%", profile.sprint_recovery),
            ),
            ("Power Output".to_string(), profile.power_output.to_string()),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::seed_players;

    fn by_id<'a>(players: &'a [PlayerRecord], id: &str) -> &'a PlayerRecord {
        players.iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn card_headline_and_values() {
        let players = seed_players();
        let card = build_player_card(by_id(&players, "bellingham"));
        assert_eq!(card.headline, "Midfielder • Real Madrid • 21 years");
        assert_eq!(card.current_value, "€180M");
        assert_eq!(card.predicted_value, "€220M");
        assert_eq!(card.market_status, MarketStatus::Undervalued);
        assert_eq!(card.similarity, "88% match");
        assert_eq!(card.risk_band.as_deref(), Some("LOW RISK"));
    }

    #[test]
    fn card_without_stats_shows_placeholders() {
        let players = seed_players();
        let mut bare = by_id(&players, "haaland").clone();
        bare.stats = None;
        let card = build_player_card(&bare);
        let placeholders = card
            .stat_lines
            .iter()
            .filter(|(label, _)| label != "Similarity")
            .all(|(_, v)| v == "-");
        assert!(placeholders);
        assert_eq!(card.stat_lines[1], ("Similarity".to_string(), "89%".to_string()));
        assert!(card.risk_band.is_none());
    }

    #[test]
    fn overvalued_forward_is_flagged() {
        let players = seed_players();
        let card = build_player_card(by_id(&players, "mbappe"));
        assert_eq!(card.market_status, MarketStatus::Overvalued);
    }

    #[test]
    fn explain_panel_requires_a_report() {
        let players = seed_players();
        assert!(explain_panel(by_id(&players, "bellingham")).is_some());
        assert!(explain_panel(by_id(&players, "camavinga")).is_none());
    }

    #[test]
    fn physical_panel_formats_all_four_metrics() {
        let players = seed_players();
        let panel = physical_panel(by_id(&players, "bellingham")).unwrap();
        assert_eq!(panel.player_name, "Jude Bellingham");
        assert_eq!(
            panel.metrics,
            vec![
                ("Sprint Speed".to_string(), "32.4 km/h".to_string()),
                ("Distance Covered".to_string(), "12.8 km".to_string()),
                ("Sprint Recovery".to_string(), "89%".to_string()),
                ("Power Output".to_string(), "94".to_string()),
            ]
        );
    }

    #[test]
    fn physical_panel_requires_a_profile() {
        let players = seed_players();
        assert!(physical_panel(by_id(&players, "haaland")).is_none());
        assert!(physical_panel(by_id(&players, "vinicius")).is_none());
    }

    #[test]
    fn explain_panel_carries_all_factors() {
        let players = seed_players();
        let panel = explain_panel(by_id(&players, "pedri")).unwrap();
        assert_eq!(panel.confidence, "89.7%");
        assert_eq!(panel.factors.len(), 4);
        assert_eq!(panel.factors[0].0, "Technical Skills");
    }
}
