//! Static demo fixtures: the player repository plus the strategy,
//! governance, and training data sets. Loaded once by the provider at
//! startup and never mutated.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::state::{
    AccessRule, ComparablePlayer, DataSource, DevelopmentMetric, ExplainFactor, ExplainReport,
    HealthMetric, HealthStatus, InjuryOutlook, Intensity, PhysicalProfile, PlayerRecord,
    PlayerStats, Position, Priority, Recommendation, RiskDriver, RiskLevel, SourceStatus,
    SquadFatigue, TrendSeries, UpcomingFixture, ValuationInsight, ValuationOutlook, Venue,
};

static ROSTER: Lazy<Vec<PlayerRecord>> = Lazy::new(seed_players);

/// The shared read-only player repository.
pub fn roster() -> &'static [PlayerRecord] {
    &ROSTER
}

fn stats(
    overall: u8,
    goals90: f32,
    assists90: f32,
    pass_accuracy: u8,
    tackles90: f32,
    dribbles90: f32,
    key_passes90: f32,
    aerial_wins: u8,
) -> PlayerStats {
    PlayerStats {
        overall,
        goals90,
        assists90,
        pass_accuracy,
        tackles90,
        dribbles90,
        key_passes90,
        aerial_wins,
    }
}

fn physical(
    sprint_speed: f32,
    distance_covered: f32,
    sprint_recovery: u8,
    power_output: u8,
) -> PhysicalProfile {
    PhysicalProfile {
        sprint_speed,
        distance_covered,
        sprint_recovery,
        power_output,
    }
}

fn metric(name: &str, current: u8, change: f32) -> DevelopmentMetric {
    DevelopmentMetric {
        name: name.to_string(),
        current,
        change,
        trend: if change >= 0.0 {
            crate::state::Trend::Positive
        } else {
            crate::state::Trend::Negative
        },
    }
}

fn driver(name: &str, impact: i8) -> RiskDriver {
    RiskDriver {
        name: name.to_string(),
        impact,
    }
}

fn factor(name: &str, impact: &str, confidence: u8) -> ExplainFactor {
    ExplainFactor {
        name: name.to_string(),
        impact: impact.to_string(),
        confidence,
    }
}

fn comparable(name: &str, club: &str, value: u64) -> ComparablePlayer {
    ComparablePlayer {
        name: name.to_string(),
        club: club.to_string(),
        value,
    }
}

fn insight(title: &str, description: &str) -> ValuationInsight {
    ValuationInsight {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn recommendation(title: &str, description: &str, priority: Priority) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        priority,
    }
}

pub fn seed_players() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord {
            id: "bellingham".to_string(),
            name: "Jude Bellingham".to_string(),
            position: Position::Midfielder,
            club: "Real Madrid".to_string(),
            league: "La Liga".to_string(),
            age: 21,
            nationality: "England".to_string(),
            current_value: 180_000_000,
            predicted_value: 220_000_000,
            risk_level: RiskLevel::Low,
            similarity: 88,
            stats: Some(stats(94, 2.1, 1.8, 85, 2.3, 3.2, 2.5, 68)),
            physical: Some(physical(32.4, 12.8, 89, 94)),
            development: Some(vec![
                metric("Passing Accuracy", 87, 3.2),
                metric("Dribbling Success", 78, 5.1),
                metric("Defensive Actions", 72, -1.8),
                metric("Shooting Accuracy", 65, 2.3),
            ]),
            injury: Some(InjuryOutlook {
                current_risk: 15,
                weekly_risk: 22,
                biweekly_risk: 28,
                drivers: vec![
                    driver("Training Load Spike", 8),
                    driver("Sleep Quality Decline", 5),
                    driver("Match Density", 4),
                    driver("HRV Variability", 3),
                ],
            }),
            xai: Some(ExplainReport {
                confidence: 94.2,
                factors: vec![
                    factor(
                        "Age Profile",
                        "Peak development age for midfielders",
                        92,
                    ),
                    factor(
                        "Performance Trend",
                        "Consistent improvement over 18 months",
                        89,
                    ),
                    factor("League Adaptation", "Successfully adapted to La Liga", 85),
                    factor(
                        "Injury History",
                        "Clean injury record, low risk profile",
                        95,
                    ),
                ],
            }),
            valuation: None,
        },
        PlayerRecord {
            id: "pedri".to_string(),
            name: "Pedri González".to_string(),
            position: Position::Midfielder,
            club: "FC Barcelona".to_string(),
            league: "La Liga".to_string(),
            age: 22,
            nationality: "Spain".to_string(),
            current_value: 120_000_000,
            predicted_value: 135_000_000,
            risk_level: RiskLevel::Medium,
            similarity: 92,
            stats: Some(stats(91, 0.8, 2.1, 91, 1.8, 4.1, 3.2, 45)),
            physical: Some(physical(29.8, 11.9, 82, 87)),
            development: Some(vec![
                metric("Passing Accuracy", 91, 1.8),
                metric("Dribbling Success", 85, 3.2),
                metric("Defensive Actions", 68, -0.9),
                metric("Shooting Accuracy", 58, 4.1),
            ]),
            injury: Some(InjuryOutlook {
                current_risk: 28,
                weekly_risk: 35,
                biweekly_risk: 42,
                drivers: vec![
                    driver("Previous Injury History", 12),
                    driver("High Match Minutes", 8),
                    driver("Recovery Time", 6),
                    driver("Physical Load", 4),
                ],
            }),
            xai: Some(ExplainReport {
                confidence: 89.7,
                factors: vec![
                    factor(
                        "Technical Skills",
                        "Elite passing and dribbling abilities",
                        95,
                    ),
                    factor(
                        "Injury Concerns",
                        "Recent injury history affects rating",
                        78,
                    ),
                    factor("Youth Factor", "Still developing physically", 85),
                    factor(
                        "Barcelona Integration",
                        "Perfect fit for club philosophy",
                        92,
                    ),
                ],
            }),
            valuation: None,
        },
        PlayerRecord {
            id: "camavinga".to_string(),
            name: "Eduardo Camavinga".to_string(),
            position: Position::Midfielder,
            club: "Real Madrid".to_string(),
            league: "La Liga".to_string(),
            age: 22,
            nationality: "France".to_string(),
            current_value: 90_000_000,
            predicted_value: 110_000_000,
            risk_level: RiskLevel::Low,
            similarity: 85,
            stats: Some(stats(89, 0.6, 1.4, 87, 2.8, 2.9, 1.8, 72)),
            physical: Some(physical(33.1, 13.2, 91, 96)),
            development: Some(vec![
                metric("Passing Accuracy", 87, 2.1),
                metric("Dribbling Success", 76, 1.8),
                metric("Defensive Actions", 89, 4.2),
                metric("Shooting Accuracy", 52, -0.5),
            ]),
            injury: Some(InjuryOutlook {
                current_risk: 12,
                weekly_risk: 18,
                biweekly_risk: 24,
                drivers: vec![
                    driver("Optimal Load Management", -2),
                    driver("Age Factor", -3),
                    driver("Recovery Protocols", -1),
                    driver("Match Rotation", 2),
                ],
            }),
            xai: None,
            valuation: None,
        },
        PlayerRecord {
            id: "gavi".to_string(),
            name: "Pablo Gavi".to_string(),
            position: Position::Midfielder,
            club: "FC Barcelona".to_string(),
            league: "La Liga".to_string(),
            age: 20,
            nationality: "Spain".to_string(),
            current_value: 75_000_000,
            predicted_value: 95_000_000,
            risk_level: RiskLevel::Medium,
            similarity: 87,
            stats: Some(stats(86, 0.9, 1.6, 84, 2.1, 3.8, 2.2, 51)),
            physical: Some(physical(31.2, 12.4, 86, 89)),
            development: Some(vec![
                metric("Passing Accuracy", 84, 3.8),
                metric("Dribbling Success", 81, 6.2),
                metric("Defensive Actions", 75, 2.1),
                metric("Shooting Accuracy", 61, 1.9),
            ]),
            injury: None,
            xai: None,
            valuation: None,
        },
        PlayerRecord {
            id: "mbappe".to_string(),
            name: "Kylian Mbappé".to_string(),
            position: Position::Forward,
            club: "Real Madrid".to_string(),
            league: "La Liga".to_string(),
            age: 26,
            nationality: "France".to_string(),
            current_value: 200_000_000,
            predicted_value: 180_000_000,
            risk_level: RiskLevel::Medium,
            similarity: 91,
            stats: Some(stats(96, 2.8, 1.9, 78, 0.8, 4.2, 2.1, 42)),
            physical: Some(physical(36.2, 11.8, 88, 98)),
            development: None,
            injury: Some(InjuryOutlook {
                current_risk: 22,
                weekly_risk: 28,
                biweekly_risk: 35,
                drivers: vec![
                    driver("Age Factor", 6),
                    driver("High Intensity Play", 8),
                    driver("Sprint Load", 5),
                    driver("Match Frequency", 7),
                ],
            }),
            xai: None,
            valuation: Some(ValuationOutlook {
                current: 200_000_000,
                predictions: vec![
                    195_000_000,
                    180_000_000,
                    160_000_000,
                    140_000_000,
                    120_000_000,
                ],
                comparable: vec![
                    comparable("Erling Haaland", "Man City", 180_000_000),
                    comparable("Vinicius Jr", "Real Madrid", 150_000_000),
                    comparable("Jude Bellingham", "Real Madrid", 180_000_000),
                ],
                insights: vec![
                    insight(
                        "Peak Performance Window",
                        "Player is currently at peak performance level with consistent \
                         goal-scoring record. Age factor suggests value decline in coming years.",
                    ),
                    insight(
                        "Market Comparisons",
                        "Value aligns with comparable forwards in similar age bracket. Premium \
                         justified by proven Champions League performance.",
                    ),
                    insight(
                        "Contract Leverage",
                        "Current contract until 2028 provides negotiation strength. Consider \
                         renewal or sale within optimal window.",
                    ),
                ],
            }),
        },
        PlayerRecord {
            id: "haaland".to_string(),
            name: "Erling Haaland".to_string(),
            position: Position::Forward,
            club: "Manchester City".to_string(),
            league: "Premier League".to_string(),
            age: 24,
            nationality: "Norway".to_string(),
            current_value: 180_000_000,
            predicted_value: 200_000_000,
            risk_level: RiskLevel::Low,
            similarity: 89,
            stats: Some(stats(95, 3.2, 1.1, 72, 0.6, 2.1, 1.4, 78)),
            physical: None,
            development: None,
            injury: None,
            xai: None,
            valuation: Some(ValuationOutlook {
                current: 180_000_000,
                predictions: vec![
                    185_000_000,
                    200_000_000,
                    195_000_000,
                    180_000_000,
                    160_000_000,
                ],
                comparable: vec![
                    comparable("Kylian Mbappé", "Real Madrid", 200_000_000),
                    comparable("Vinicius Jr", "Real Madrid", 150_000_000),
                    comparable("Victor Osimhen", "Napoli", 130_000_000),
                ],
                insights: Vec::new(),
            }),
        },
        PlayerRecord {
            id: "vinicius".to_string(),
            name: "Vinicius Jr".to_string(),
            position: Position::Forward,
            club: "Real Madrid".to_string(),
            league: "La Liga".to_string(),
            age: 24,
            nationality: "Brazil".to_string(),
            current_value: 150_000_000,
            predicted_value: 165_000_000,
            risk_level: RiskLevel::Low,
            similarity: 86,
            stats: Some(stats(92, 2.1, 2.4, 79, 1.2, 5.8, 2.8, 38)),
            physical: None,
            development: None,
            injury: None,
            xai: None,
            valuation: Some(ValuationOutlook {
                current: 150_000_000,
                predictions: vec![
                    155_000_000,
                    165_000_000,
                    170_000_000,
                    160_000_000,
                    145_000_000,
                ],
                comparable: vec![
                    comparable("Kylian Mbappé", "Real Madrid", 200_000_000),
                    comparable("Erling Haaland", "Man City", 180_000_000),
                    comparable("Rafael Leão", "AC Milan", 90_000_000),
                ],
                insights: Vec::new(),
            }),
        },
    ]
}

pub fn seed_fixtures() -> Vec<UpcomingFixture> {
    fn fixture(
        opponent: &str,
        venue: Venue,
        intensity: Intensity,
        date: &str,
        competition: &str,
    ) -> UpcomingFixture {
        UpcomingFixture {
            opponent: opponent.to_string(),
            venue,
            intensity,
            date: date.to_string(),
            competition: competition.to_string(),
        }
    }

    vec![
        fixture("Barcelona", Venue::Home, Intensity::High, "2024-10-26", "El Clasico"),
        fixture("Atletico Madrid", Venue::Away, Intensity::Medium, "2024-10-29", "La Liga"),
        fixture("Valencia", Venue::Home, Intensity::Low, "2024-11-02", "La Liga"),
        fixture("AC Milan", Venue::Away, Intensity::High, "2024-11-05", "Champions League"),
        fixture("Osasuna", Venue::Home, Intensity::Medium, "2024-11-09", "La Liga"),
    ]
}

pub fn seed_fatigue() -> SquadFatigue {
    SquadFatigue {
        overall: 65,
        key_players: 80,
        levels: vec![
            ("Bellingham".to_string(), 75),
            ("Mbappé".to_string(), 82),
            ("Vinicius".to_string(), 68),
            ("Camavinga".to_string(), 58),
            ("Tchouaméni".to_string(), 65),
            ("Modric".to_string(), 88),
            ("Kroos".to_string(), 72),
            ("Valverde".to_string(), 61),
        ],
        recommendations: vec![
            recommendation(
                "Midfield Rotation",
                "Rest Bellingham for Valencia fixture. Deploy Camavinga and Tchouaméni to \
                 maintain intensity while managing load.",
                Priority::High,
            ),
            recommendation(
                "Forward Line Management",
                "Rotate Mbappé and Vinícius across fixtures to maintain freshness for \
                 high-intensity matches.",
                Priority::Medium,
            ),
            recommendation(
                "Defense Stability",
                "Maintain core defensive partnership while introducing rotation in fullback \
                 positions.",
                Priority::Low,
            ),
        ],
    }
}

pub fn seed_data_sources() -> Vec<DataSource> {
    fn source(name: &str, status: SourceStatus, latency_mins: u8) -> DataSource {
        DataSource {
            name: name.to_string(),
            status,
            latency_mins,
        }
    }

    vec![
        source("Performance Database", SourceStatus::Online, 0),
        source("Biomedical EMR", SourceStatus::Online, 0),
        source("Wearables Data", SourceStatus::Warning, 2),
        source("Match Statistics", SourceStatus::Online, 0),
        source("Training Load Data", SourceStatus::Online, 1),
        source("Video Analysis", SourceStatus::Online, 0),
    ]
}

pub fn seed_system_health() -> Vec<HealthMetric> {
    fn health(name: &str, value: u8, status: HealthStatus) -> HealthMetric {
        HealthMetric {
            name: name.to_string(),
            value,
            status,
        }
    }

    vec![
        health("CPU Usage", 45, HealthStatus::Good),
        health("Memory Usage", 72, HealthStatus::Warning),
        health("Disk Storage", 38, HealthStatus::Good),
        health("Network Latency", 12, HealthStatus::Good),
    ]
}

pub fn seed_access_rules() -> Vec<AccessRule> {
    fn rule(role: &str, access: &str, level: &str) -> AccessRule {
        AccessRule {
            role: role.to_string(),
            access: access.to_string(),
            level: level.to_string(),
        }
    }

    vec![
        rule("Head Coach", "Full Access", "admin"),
        rule("Assistant Coaches", "Limited Access", "coach"),
        rule("Medical Staff", "Medical Data Only", "medical"),
        rule("Analysts", "Performance Data", "analyst"),
        rule("Management", "Strategic Overview", "management"),
    ]
}

pub fn seed_training() -> HashMap<String, Vec<Recommendation>> {
    let mut out = HashMap::new();
    out.insert(
        "bellingham".to_string(),
        vec![
            recommendation(
                "Defensive Positioning Drills",
                "Focus on defensive transition positioning and marking in compact spaces. 3x \
                 per week, 20-minute sessions.",
                Priority::High,
            ),
            recommendation(
                "Ball Control Under Pressure",
                "Improve first touch and decision-making in tight spaces with pressure drills. \
                 2x per week, 15-minute sessions.",
                Priority::Medium,
            ),
            recommendation(
                "Sprint Endurance",
                "Enhance repeated sprint ability for sustained performance in final third. 2x \
                 per week, interval training.",
                Priority::Low,
            ),
        ],
    );
    out.insert(
        "pedri".to_string(),
        vec![
            recommendation(
                "Physical Conditioning",
                "Strengthen core and lower body to prevent recurring injuries. Daily 30-minute \
                 sessions with physiotherapy.",
                Priority::High,
            ),
            recommendation(
                "Shooting Accuracy",
                "Improve finishing from edge of box and set pieces. 3x per week, 25-minute \
                 sessions.",
                Priority::Medium,
            ),
            recommendation(
                "Aerial Duels",
                "Develop jumping technique and timing for defensive headers. 2x per week, \
                 15-minute sessions.",
                Priority::Low,
            ),
        ],
    );
    out.insert(
        "camavinga".to_string(),
        vec![
            recommendation(
                "Long Range Passing",
                "Enhance distribution accuracy and range for deeper playmaking role. 3x per \
                 week, 20-minute sessions.",
                Priority::High,
            ),
            recommendation(
                "Box-to-Box Movement",
                "Improve timing of forward runs and positioning in attacking third. 2x per \
                 week, tactical sessions.",
                Priority::Medium,
            ),
            recommendation(
                "Set Piece Delivery",
                "Develop corner and free kick delivery consistency. 2x per week, 10-minute \
                 sessions.",
                Priority::Low,
            ),
        ],
    );
    out.insert(
        "gavi".to_string(),
        vec![
            recommendation(
                "Decision Making Speed",
                "Enhance quick decision-making under pressure in central areas. Daily \
                 cognitive training sessions.",
                Priority::High,
            ),
            recommendation(
                "Strength Development",
                "Build physical strength to compete with larger opponents. 4x per week gym \
                 sessions.",
                Priority::Medium,
            ),
            recommendation(
                "Leadership Skills",
                "Develop on-field communication and leadership qualities. Weekly tactical \
                 meetings.",
                Priority::Medium,
            ),
        ],
    );
    out
}

pub fn seed_performance_trend() -> Vec<TrendSeries> {
    vec![
        TrendSeries {
            label: "Passing Accuracy".to_string(),
            points: vec![82, 84, 85, 83, 86, 87, 88, 87, 89, 87, 88, 90],
        },
        TrendSeries {
            label: "Dribbling Success".to_string(),
            points: vec![70, 72, 71, 74, 76, 75, 78, 79, 77, 80, 78, 82],
        },
        TrendSeries {
            label: "Defensive Actions".to_string(),
            points: vec![75, 74, 76, 73, 72, 74, 71, 73, 72, 70, 71, 72],
        },
    ]
}

pub fn seed_risk_timeline() -> Vec<u64> {
    vec![15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 28]
}

/// Descriptions shown under each development progress bar, keyed on the
/// metric name and trend direction.
pub fn progress_description(metric_name: &str, trend: crate::state::Trend) -> &'static str {
    use crate::state::Trend;
    match (metric_name, trend) {
        ("Passing Accuracy", Trend::Positive) => "Improved short passing consistency",
        ("Passing Accuracy", Trend::Negative) => "Focus on passing under pressure",
        ("Dribbling Success", Trend::Positive) => "Better 1v1 situations",
        ("Dribbling Success", Trend::Negative) => "Work on close control",
        ("Defensive Actions", Trend::Positive) => "Enhanced defensive positioning",
        ("Defensive Actions", Trend::Negative) => "Focus area for improvement",
        ("Shooting Accuracy", Trend::Positive) => "Better finishing technique",
        ("Shooting Accuracy", Trend::Negative) => "Needs shooting practice",
        _ => "Performance tracking",
    }
}
