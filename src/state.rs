use std::collections::{HashMap, VecDeque};
use std::env;

use serde::{Deserialize, Serialize};

use crate::filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Recruitment,
    Development,
    Injury,
    Valuation,
    Strategy,
    Governance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceStatus {
    Online,
    Warning,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub overall: u8,
    pub goals90: f32,
    pub assists90: f32,
    pub pass_accuracy: u8,
    pub tackles90: f32,
    pub dribbles90: f32,
    pub key_passes90: f32,
    pub aerial_wins: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalProfile {
    pub sprint_speed: f32,
    pub distance_covered: f32,
    pub sprint_recovery: u8,
    pub power_output: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevelopmentMetric {
    pub name: String,
    pub current: u8,
    pub change: f32,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskDriver {
    pub name: String,
    pub impact: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryOutlook {
    pub current_risk: u8,
    pub weekly_risk: u8,
    pub biweekly_risk: u8,
    pub drivers: Vec<RiskDriver>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainFactor {
    pub name: String,
    pub impact: String,
    pub confidence: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainReport {
    pub confidence: f32,
    pub factors: Vec<ExplainFactor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparablePlayer {
    pub name: String,
    pub club: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationInsight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationOutlook {
    pub current: u64,
    /// Projected value per future year, nearest first.
    pub predictions: Vec<u64>,
    pub comparable: Vec<ComparablePlayer>,
    pub insights: Vec<ValuationInsight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub club: String,
    pub league: String,
    pub age: u8,
    pub nationality: String,
    pub current_value: u64,
    pub predicted_value: u64,
    pub risk_level: RiskLevel,
    pub similarity: u8,
    // Nested records are fixture-dependent; absence means "no data", not zero.
    pub stats: Option<PlayerStats>,
    pub physical: Option<PhysicalProfile>,
    pub development: Option<Vec<DevelopmentMetric>>,
    pub injury: Option<InjuryOutlook>,
    pub xai: Option<ExplainReport>,
    pub valuation: Option<ValuationOutlook>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingFixture {
    pub opponent: String,
    pub venue: Venue,
    pub intensity: Intensity,
    pub date: String,
    pub competition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadFatigue {
    pub overall: u8,
    pub key_players: u8,
    /// Per-player fatigue levels for the squad load chart.
    pub levels: Vec<(String, u8)>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    pub status: SourceStatus,
    pub latency_mins: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetric {
    pub name: String,
    pub value: u8,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRule {
    pub role: String,
    pub access: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSeries {
    pub label: String,
    pub points: Vec<u64>,
}

/// Filter criteria for the recruitment screen. `None` position/league mean
/// the "All Positions" / "All Leagues" sentinels from the product UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub position: Option<Position>,
    pub age: u8,
    pub league: Option<String>,
    pub budget_m: u64,
}

pub const DEFAULT_FILTER_AGE: u8 = 25;
pub const DEFAULT_FILTER_BUDGET_M: u64 = 50;
pub const FILTER_AGE_MIN: u8 = 16;
pub const FILTER_AGE_MAX: u8 = 35;

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            position: None,
            age: DEFAULT_FILTER_AGE,
            league: None,
            budget_m: DEFAULT_FILTER_BUDGET_M,
        }
    }
}

impl FilterCriteria {
    pub fn position_label(&self) -> String {
        match self.position {
            Some(pos) => position_label(pos).to_string(),
            None => "All Positions".to_string(),
        }
    }

    pub fn league_label(&self) -> String {
        self.league
            .clone()
            .unwrap_or_else(|| "All Leagues".to_string())
    }

    /// Inclusion window shown next to the age slider, clamped to 16-35.
    pub fn age_window_label(&self) -> String {
        let lo = self.age.saturating_sub(5).max(FILTER_AGE_MIN);
        let hi = self.age.saturating_add(5).min(FILTER_AGE_MAX);
        format!("{lo}-{hi}")
    }

    pub fn budget_label(&self) -> String {
        format!("1-{}M", self.budget_m)
    }
}

pub fn position_label(pos: Position) -> &'static str {
    match pos {
        Position::Forward => "Forward",
        Position::Midfielder => "Midfielder",
        Position::Defender => "Defender",
        Position::Goalkeeper => "Goalkeeper",
    }
}

pub fn risk_level_label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "LOW RISK",
        RiskLevel::Medium => "MEDIUM RISK",
        RiskLevel::High => "HIGH RISK",
    }
}

pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "HIGH",
        Priority::Medium => "MEDIUM",
        Priority::Low => "LOW",
    }
}

pub fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Recruitment => "Recruitment",
        Screen::Development => "Development",
        Screen::Injury => "Injury Risk",
        Screen::Valuation => "Valuation",
        Screen::Strategy => "Strategy",
        Screen::Governance => "Governance",
    }
}

#[derive(Debug, Clone)]
pub struct ExportState {
    pub active: bool,
    pub done: bool,
    pub path: Option<String>,
    pub current: usize,
    pub total: usize,
    pub message: String,
    pub error_count: usize,
    pub last_updated: Option<std::time::Instant>,
}

impl Default for ExportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportState {
    pub fn new() -> Self {
        Self {
            active: false,
            done: false,
            path: None,
            current: 0,
            total: 0,
            message: String::new(),
            error_count: 0,
            last_updated: None,
        }
    }

    pub fn clear_if_done_for(&mut self, now: std::time::Instant, keep_secs: u64) {
        if !self.active || !self.done {
            return;
        }
        let Some(last) = self.last_updated else {
            return;
        };
        if now.duration_since(last).as_secs() >= keep_secs {
            *self = Self::new();
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub players: Vec<PlayerRecord>,
    pub filters: FilterCriteria,
    pub leagues: Vec<String>,
    pub recruit_selected: usize,
    pub selected_player_id: Option<String>,
    pub dev_selected: usize,
    pub injury_selected: usize,
    pub valuation_selected: usize,
    pub fixtures: Vec<UpcomingFixture>,
    pub fatigue: Option<SquadFatigue>,
    pub data_sources: Vec<DataSource>,
    pub system_health: Vec<HealthMetric>,
    pub access_rules: Vec<AccessRule>,
    pub training: HashMap<String, Vec<Recommendation>>,
    pub performance_trend: Vec<TrendSeries>,
    pub risk_timeline: Vec<u64>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub export: ExportState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Recruitment,
            players: Vec::new(),
            filters: FilterCriteria::default(),
            leagues: Vec::new(),
            recruit_selected: 0,
            selected_player_id: None,
            dev_selected: 0,
            injury_selected: 0,
            valuation_selected: 0,
            fixtures: Vec::new(),
            fatigue: None,
            data_sources: Vec::new(),
            system_health: Vec::new(),
            access_rules: Vec::new(),
            training: HashMap::new(),
            performance_trend: Vec::new(),
            risk_timeline: Vec::new(),
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
            export: ExportState::new(),
        }
    }

    pub fn maybe_clear_export(&mut self, now: std::time::Instant) {
        self.export.clear_if_done_for(now, 8);
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn filtered_indices(&self) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| filter::matches_criteria(p, &self.filters))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn filtered_players(&self) -> Vec<&PlayerRecord> {
        self.filtered_indices()
            .into_iter()
            .filter_map(|idx| self.players.get(idx))
            .collect()
    }

    pub fn selected_player(&self) -> Option<&PlayerRecord> {
        let filtered = self.filtered_indices();
        filtered
            .get(self.recruit_selected)
            .and_then(|idx| self.players.get(*idx))
    }

    /// The player pinned to the explainability panel, if the selection
    /// event has fired and the player is still in the roster.
    pub fn explained_player(&self) -> Option<&PlayerRecord> {
        let id = self.selected_player_id.as_deref()?;
        self.players.iter().find(|p| p.id == id)
    }

    pub fn select_next(&mut self) {
        let total = self.filtered_indices().len();
        if total == 0 {
            self.recruit_selected = 0;
            return;
        }
        self.recruit_selected = (self.recruit_selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.filtered_indices().len();
        if total == 0 {
            self.recruit_selected = 0;
            return;
        }
        if self.recruit_selected == 0 {
            self.recruit_selected = total - 1;
        } else {
            self.recruit_selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.filtered_indices().len();
        if total == 0 {
            self.recruit_selected = 0;
        } else if self.recruit_selected >= total {
            self.recruit_selected = total - 1;
        }
    }

    /// Fires the card-selection event: pins the highlighted player to the
    /// explainability panel.
    pub fn confirm_selection(&mut self) {
        if let Some(player) = self.selected_player() {
            self.selected_player_id = Some(player.id.clone());
        }
    }

    pub fn cycle_position_filter(&mut self) {
        self.filters.position = match self.filters.position {
            None => Some(Position::Forward),
            Some(Position::Forward) => Some(Position::Midfielder),
            Some(Position::Midfielder) => Some(Position::Defender),
            Some(Position::Defender) => Some(Position::Goalkeeper),
            Some(Position::Goalkeeper) => None,
        };
        self.recruit_selected = 0;
    }

    pub fn cycle_league_filter(&mut self) {
        let current = self
            .filters
            .league
            .as_ref()
            .and_then(|name| self.leagues.iter().position(|l| l == name));
        self.filters.league = match current {
            None => self.leagues.first().cloned(),
            Some(idx) => self.leagues.get(idx + 1).cloned(),
        };
        self.recruit_selected = 0;
    }

    pub fn adjust_age_filter(&mut self, delta: i8) {
        let age = self.filters.age as i16 + delta as i16;
        self.filters.age = age.clamp(FILTER_AGE_MIN as i16, FILTER_AGE_MAX as i16) as u8;
        self.recruit_selected = 0;
    }

    pub fn adjust_budget_filter(&mut self, delta_m: i64) {
        const BUDGET_MIN_M: i64 = 5;
        const BUDGET_MAX_M: i64 = 250;
        let budget = self.filters.budget_m as i64 + delta_m;
        self.filters.budget_m = budget.clamp(BUDGET_MIN_M, BUDGET_MAX_M) as u64;
        self.recruit_selected = 0;
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterCriteria::default();
        self.recruit_selected = 0;
        self.push_log("[INFO] Filters reset to defaults");
    }

    /// Players eligible as development subjects (those carrying a
    /// development record).
    pub fn development_subjects(&self) -> Vec<&PlayerRecord> {
        self.players
            .iter()
            .filter(|p| p.development.is_some())
            .collect()
    }

    pub fn injury_subjects(&self) -> Vec<&PlayerRecord> {
        self.players.iter().filter(|p| p.injury.is_some()).collect()
    }

    pub fn valuation_subjects(&self) -> Vec<&PlayerRecord> {
        self.players
            .iter()
            .filter(|p| p.valuation.is_some())
            .collect()
    }

    pub fn current_dev_subject(&self) -> Option<&PlayerRecord> {
        let subjects = self.development_subjects();
        subjects.get(self.dev_selected).copied()
    }

    pub fn current_injury_subject(&self) -> Option<&PlayerRecord> {
        let subjects = self.injury_subjects();
        subjects.get(self.injury_selected).copied()
    }

    pub fn current_valuation_subject(&self) -> Option<&PlayerRecord> {
        let subjects = self.valuation_subjects();
        subjects.get(self.valuation_selected).copied()
    }

    pub fn cycle_subject_next(&mut self) {
        match self.screen {
            Screen::Development => {
                let total = self.development_subjects().len();
                if total > 0 {
                    self.dev_selected = (self.dev_selected + 1) % total;
                }
            }
            Screen::Injury => {
                let total = self.injury_subjects().len();
                if total > 0 {
                    self.injury_selected = (self.injury_selected + 1) % total;
                }
            }
            Screen::Valuation => {
                let total = self.valuation_subjects().len();
                if total > 0 {
                    self.valuation_selected = (self.valuation_selected + 1) % total;
                }
            }
            _ => {}
        }
    }

    pub fn cycle_subject_prev(&mut self) {
        match self.screen {
            Screen::Development => {
                let total = self.development_subjects().len();
                if total > 0 {
                    self.dev_selected = (self.dev_selected + total - 1) % total;
                }
            }
            Screen::Injury => {
                let total = self.injury_subjects().len();
                if total > 0 {
                    self.injury_selected = (self.injury_selected + total - 1) % total;
                }
            }
            Screen::Valuation => {
                let total = self.valuation_subjects().len();
                if total > 0 {
                    self.valuation_selected = (self.valuation_selected + total - 1) % total;
                }
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetPlayers(Vec<PlayerRecord>),
    SetStrategy {
        fixtures: Vec<UpcomingFixture>,
        fatigue: SquadFatigue,
    },
    SetGovernance {
        sources: Vec<DataSource>,
        health: Vec<HealthMetric>,
        access: Vec<AccessRule>,
    },
    SetTraining(HashMap<String, Vec<Recommendation>>),
    SetTrendSeries {
        performance: Vec<TrendSeries>,
        risk_timeline: Vec<u64>,
    },
    UpdateSystemHealth(Vec<HealthMetric>),
    ExportStarted {
        path: String,
        total: usize,
    },
    ExportProgress {
        current: usize,
        total: usize,
        message: String,
    },
    ExportFinished {
        path: String,
        players: usize,
        errors: usize,
    },
    ExportFailed {
        path: String,
        message: String,
    },
    Log(String),
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    ReloadRoster,
    RefreshGovernance,
    ExportShortlist {
        path: String,
        format: crate::export::ExportFormat,
        players: Vec<PlayerRecord>,
    },
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetPlayers(players) => {
            // Keep the highlighted card on the same player across a roster
            // swap when it survives the current filters.
            let selected_id = state.selected_player().map(|p| p.id.clone());
            let mut leagues: Vec<String> = Vec::new();
            for player in &players {
                if !leagues.contains(&player.league) {
                    leagues.push(player.league.clone());
                }
            }
            state.players = players;
            state.leagues = leagues;
            if let Some(id) = selected_id {
                let filtered = state.filtered_indices();
                if let Some(pos) = filtered
                    .iter()
                    .position(|idx| state.players[*idx].id == id)
                {
                    state.recruit_selected = pos;
                } else {
                    state.recruit_selected = 0;
                }
            }
            state.clamp_selection();
            if state.explained_player().is_none() {
                state.selected_player_id = None;
            }
            let subjects = state.development_subjects().len();
            if state.dev_selected >= subjects {
                state.dev_selected = 0;
            }
            let subjects = state.injury_subjects().len();
            if state.injury_selected >= subjects {
                state.injury_selected = 0;
            }
            let subjects = state.valuation_subjects().len();
            if state.valuation_selected >= subjects {
                state.valuation_selected = 0;
            }
        }
        Delta::SetStrategy { fixtures, fatigue } => {
            state.fixtures = fixtures;
            state.fatigue = Some(fatigue);
        }
        Delta::SetGovernance {
            sources,
            health,
            access,
        } => {
            state.data_sources = sources;
            state.system_health = health;
            state.access_rules = access;
        }
        Delta::SetTraining(training) => {
            state.training = training;
        }
        Delta::SetTrendSeries {
            performance,
            risk_timeline,
        } => {
            state.performance_trend = performance;
            state.risk_timeline = risk_timeline;
        }
        Delta::UpdateSystemHealth(health) => {
            state.system_health = health;
        }
        Delta::ExportStarted { path, total } => {
            state.export.active = true;
            state.export.done = false;
            state.export.path = Some(path);
            state.export.current = 0;
            state.export.total = total;
            state.export.message = "Export started".to_string();
            state.export.error_count = 0;
            state.export.last_updated = Some(std::time::Instant::now());
        }
        Delta::ExportProgress {
            current,
            total,
            message,
        } => {
            state.export.active = true;
            state.export.current = current;
            state.export.total = total;
            state.export.message = message;
            state.export.last_updated = Some(std::time::Instant::now());
        }
        Delta::ExportFinished {
            path,
            players,
            errors,
        } => {
            state.export.active = true;
            state.export.done = true;
            state.export.current = state.export.total;
            state.export.message = format!("Saved {players} players to {path}");
            state.export.error_count = errors;
            state.export.path = Some(path);
            state.export.last_updated = Some(std::time::Instant::now());
        }
        Delta::ExportFailed { path, message } => {
            state.export.active = true;
            state.export.done = true;
            state.export.message = format!("Export failed: {message}");
            state.export.error_count += 1;
            state.export.path = Some(path);
            state.export.last_updated = Some(std::time::Instant::now());
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

pub fn parse_u64_env_or_default(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
