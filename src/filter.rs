use crate::state::{position_label, FilterCriteria, PlayerRecord};

/// Inclusive half-width of the age window around the criteria age.
pub const AGE_WINDOW_YEARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketStatus {
    Undervalued,
    Overvalued,
    FairValue,
    Unknown,
}

pub fn market_status_label(status: MarketStatus) -> &'static str {
    match status {
        MarketStatus::Undervalued => "UNDERVALUED",
        MarketStatus::Overvalued => "OVERVALUED",
        MarketStatus::FairValue => "FAIR VALUE",
        MarketStatus::Unknown => "N/A",
    }
}

/// Classify a player's market status from current vs. predicted value.
/// A zero current value has no meaningful ratio and is reported as
/// `Unknown` rather than letting the division blow up.
pub fn classify_value(current_value: u64, predicted_value: u64) -> MarketStatus {
    if current_value == 0 {
        return MarketStatus::Unknown;
    }
    let ratio = predicted_value as f64 / current_value as f64;
    if ratio > 1.1 {
        MarketStatus::Undervalued
    } else if ratio < 0.9 {
        MarketStatus::Overvalued
    } else {
        MarketStatus::FairValue
    }
}

/// Whether a single player passes all four recruitment predicates.
pub fn matches_criteria(player: &PlayerRecord, criteria: &FilterCriteria) -> bool {
    if let Some(wanted) = criteria.position {
        let player_pos = position_label(player.position).to_lowercase();
        let wanted = position_label(wanted).to_lowercase();
        if !player_pos.contains(&wanted) {
            return false;
        }
    }

    let age_gap = (player.age as i16 - criteria.age as i16).abs();
    if age_gap > AGE_WINDOW_YEARS as i16 {
        return false;
    }

    if let Some(league) = &criteria.league {
        if &player.league != league {
            return false;
        }
    }

    // Budget is an inclusive upper bound on the current value.
    if player.current_value > criteria.budget_m.saturating_mul(1_000_000) {
        return false;
    }

    true
}

/// Pure filter over the whole repository; repository order is preserved.
pub fn filter_players<'a>(
    all_players: &'a [PlayerRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PlayerRecord> {
    all_players
        .iter()
        .filter(|p| matches_criteria(p, criteria))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Moderate,
    Elevated,
}

pub fn risk_band_label(band: RiskBand) -> &'static str {
    match band {
        RiskBand::Low => "LOW RISK",
        RiskBand::Moderate => "MODERATE RISK",
        RiskBand::Elevated => "ELEVATED RISK",
    }
}

/// Band an injury-risk percentage for display.
pub fn risk_band(risk_pct: u8) -> RiskBand {
    if risk_pct <= 20 {
        RiskBand::Low
    } else if risk_pct <= 35 {
        RiskBand::Moderate
    } else {
        RiskBand::Elevated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Position, RiskLevel};

    fn player(id: &str, position: Position, age: u8, league: &str, value_m: u64) -> PlayerRecord {
        PlayerRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            position,
            club: "Test FC".to_string(),
            league: league.to_string(),
            age,
            nationality: "Testland".to_string(),
            current_value: value_m * 1_000_000,
            predicted_value: value_m * 1_000_000,
            risk_level: RiskLevel::Low,
            similarity: 80,
            stats: None,
            physical: None,
            development: None,
            injury: None,
            xai: None,
            valuation: None,
        }
    }

    #[test]
    fn inactive_filters_return_everything_in_order() {
        let players = vec![
            player("a", Position::Forward, 21, "La Liga", 40),
            player("b", Position::Midfielder, 24, "Premier League", 30),
            player("c", Position::Defender, 28, "Serie A", 20),
        ];
        let criteria = FilterCriteria {
            position: None,
            age: 25,
            league: None,
            budget_m: u64::MAX / 1_000_000,
        };
        let out = filter_players(&players, &criteria);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn age_window_is_inclusive_at_five_years() {
        let criteria = FilterCriteria {
            age: 25,
            ..FilterCriteria::default()
        };
        let at_edge = player("edge", Position::Forward, 30, "La Liga", 10);
        let beyond = player("beyond", Position::Forward, 31, "La Liga", 10);
        assert!(matches_criteria(&at_edge, &criteria));
        assert!(!matches_criteria(&beyond, &criteria));
    }

    #[test]
    fn budget_bound_is_inclusive() {
        let criteria = FilterCriteria {
            budget_m: 50,
            ..FilterCriteria::default()
        };
        let exact = player("exact", Position::Forward, 25, "La Liga", 50);
        let over = player("over", Position::Forward, 25, "La Liga", 51);
        assert!(matches_criteria(&exact, &criteria));
        assert!(!matches_criteria(&over, &criteria));
    }

    #[test]
    fn league_filter_is_exact_match() {
        let criteria = FilterCriteria {
            league: Some("La Liga".to_string()),
            ..FilterCriteria::default()
        };
        let in_league = player("in", Position::Forward, 25, "La Liga", 10);
        let out_of_league = player("out", Position::Forward, 25, "Premier League", 10);
        assert!(matches_criteria(&in_league, &criteria));
        assert!(!matches_criteria(&out_of_league, &criteria));
    }

    #[test]
    fn classifier_thresholds() {
        assert_eq!(classify_value(100, 120), MarketStatus::Undervalued);
        assert_eq!(classify_value(100, 85), MarketStatus::Overvalued);
        assert_eq!(classify_value(100, 100), MarketStatus::FairValue);
        assert_eq!(classify_value(100, 95), MarketStatus::FairValue);
    }

    #[test]
    fn classifier_defines_zero_current_value() {
        assert_eq!(classify_value(0, 100), MarketStatus::Unknown);
        assert_eq!(classify_value(0, 0), MarketStatus::Unknown);
    }

    #[test]
    fn risk_bands_match_display_thresholds() {
        assert_eq!(risk_band(20), RiskBand::Low);
        assert_eq!(risk_band(21), RiskBand::Moderate);
        assert_eq!(risk_band(35), RiskBand::Moderate);
        assert_eq!(risk_band(36), RiskBand::Elevated);
    }
}
