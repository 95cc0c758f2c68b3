use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Sparkline};

use champgen_terminal::cards::{
    build_player_cards, explain_panel, format_value_m, physical_panel, PlayerCard,
};
use champgen_terminal::export::{default_export_path, ExportFormat};
use champgen_terminal::filter::{risk_band, risk_band_label, MarketStatus};
use champgen_terminal::provider;
use champgen_terminal::roster::progress_description;
use champgen_terminal::state::{
    self, apply_delta, position_label, priority_label, screen_label, AppState, HealthStatus,
    Intensity, Screen, SourceStatus, Venue,
};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<state::ProviderCommand>>,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<state::ProviderCommand>>) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Recruitment,
            KeyCode::Char('2') => self.state.screen = Screen::Development,
            KeyCode::Char('3') => self.state.screen = Screen::Injury,
            KeyCode::Char('4') => self.state.screen = Screen::Valuation,
            KeyCode::Char('5') => self.state.screen = Screen::Strategy,
            KeyCode::Char('6') => self.state.screen = Screen::Governance,
            KeyCode::Char('j') | KeyCode::Down => match self.state.screen {
                Screen::Recruitment => self.state.select_next(),
                _ => self.state.cycle_subject_next(),
            },
            KeyCode::Char('k') | KeyCode::Up => match self.state.screen {
                Screen::Recruitment => self.state.select_prev(),
                _ => self.state.cycle_subject_prev(),
            },
            KeyCode::Enter => {
                if self.state.screen == Screen::Recruitment {
                    self.state.confirm_selection();
                    let name = self.state.explained_player().map(|p| p.name.clone());
                    if let Some(name) = name {
                        self.state.push_log(format!("[INFO] Selected {name}"));
                    }
                }
            }
            KeyCode::Char('p') => {
                if self.state.screen == Screen::Recruitment {
                    self.state.cycle_position_filter();
                }
            }
            KeyCode::Char('l') => {
                if self.state.screen == Screen::Recruitment {
                    self.state.cycle_league_filter();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if self.state.screen == Screen::Recruitment {
                    self.state.adjust_age_filter(1);
                }
            }
            KeyCode::Char('-') => {
                if self.state.screen == Screen::Recruitment {
                    self.state.adjust_age_filter(-1);
                }
            }
            KeyCode::Char(']') => {
                if self.state.screen == Screen::Recruitment {
                    self.state.adjust_budget_filter(5);
                }
            }
            KeyCode::Char('[') => {
                if self.state.screen == Screen::Recruitment {
                    self.state.adjust_budget_filter(-5);
                }
            }
            KeyCode::Char('r') => {
                if self.state.screen == Screen::Recruitment {
                    self.state.reset_filters();
                }
            }
            KeyCode::Char('R') => self.request_reload(),
            KeyCode::Char('g') => self.request_governance_refresh(),
            KeyCode::Char('e') => self.request_export(ExportFormat::Xlsx),
            KeyCode::Char('E') => self.request_export(ExportFormat::Json),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Esc => self.state.help_overlay = false,
            _ => {}
        }
    }

    fn request_reload(&mut self) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Roster reload unavailable");
            return;
        };
        if tx.send(state::ProviderCommand::ReloadRoster).is_err() {
            self.state.push_log("[WARN] Roster reload request failed");
        }
    }

    fn request_governance_refresh(&mut self) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Governance refresh unavailable");
            return;
        };
        if tx.send(state::ProviderCommand::RefreshGovernance).is_err() {
            self.state.push_log("[WARN] Governance refresh failed");
        }
    }

    fn request_export(&mut self, format: ExportFormat) {
        if self.state.export.active && !self.state.export.done {
            self.state.push_log("[INFO] Export already running");
            return;
        }
        let players: Vec<_> = self
            .state
            .filtered_players()
            .into_iter()
            .cloned()
            .collect();
        if players.is_empty() {
            self.state.push_log("[INFO] Nothing to export");
            return;
        }
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Export unavailable");
            return;
        };
        let path = default_export_path(format).display().to_string();
        if tx
            .send(state::ProviderCommand::ExportShortlist {
                path,
                format,
                players,
            })
            .is_err()
        {
            self.state.push_log("[WARN] Export request failed");
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    provider::spawn_fixture_provider(tx, cmd_rx);

    let mut app = App::new(Some(cmd_tx));
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<state::Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        app.state.maybe_clear_export(Instant::now());

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Recruitment => render_recruitment(frame, chunks[1], &app.state),
        Screen::Development => render_development(frame, chunks[1], &app.state),
        Screen::Injury => render_injury(frame, chunks[1], &app.state),
        Screen::Valuation => render_valuation(frame, chunks[1], &app.state),
        Screen::Strategy => render_strategy(frame, chunks[1], &app.state),
        Screen::Governance => render_governance(frame, chunks[1], &app.state),
    }

    let console =
        Paragraph::new(console_text(&app.state)).block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    format!("CHAMPIONS GEN | {}", screen_label(state.screen))
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Recruitment => {
            "1-6 Screens | j/k/↑/↓ Move | Enter Select | p Position | l League | +/- Age | [/] Budget | r Reset | e/E Export | ? Help | q Quit"
                .to_string()
        }
        Screen::Development | Screen::Injury | Screen::Valuation => {
            "1-6 Screens | j/k/↑/↓ Subject | e/E Export | ? Help | q Quit".to_string()
        }
        Screen::Strategy => "1-6 Screens | e/E Export | ? Help | q Quit".to_string(),
        Screen::Governance => "1-6 Screens | g Refresh | ? Help | q Quit".to_string(),
    }
}

fn console_text(state: &AppState) -> String {
    let mut lines: Vec<String> = Vec::new();
    if state.export.active {
        let pct = if state.export.total == 0 {
            100
        } else {
            state.export.current * 100 / state.export.total
        };
        lines.push(format!(
            "Export [{:>3}%] {}",
            pct, state.export.message
        ));
    }
    let remaining = 2usize.saturating_sub(lines.len());
    let start = state.logs.len().saturating_sub(remaining);
    for log in state.logs.iter().skip(start) {
        lines.push(log.clone());
    }
    if lines.is_empty() {
        return "No activity yet".to_string();
    }
    lines.join("\n")
}

fn render_recruitment(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let filters = &state.filters;
    let filter_line = format!(
        "Position: {} | Age: {} (window {}) | League: {} | Budget: €{}",
        filters.position_label(),
        filters.age,
        filters.age_window_label(),
        filters.league_label(),
        filters.budget_label()
    );
    let filter_bar = Paragraph::new(filter_line)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(filter_bar, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(42)])
        .split(rows[1]);

    render_card_list(frame, columns[0], state);
    render_explain_panel(frame, columns[1], state);
}

fn render_card_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Shortlist").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let players = state.filtered_players();
    if players.is_empty() {
        let empty = Paragraph::new("No players match the current filters")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let cards = build_player_cards(&players);

    const ROW_HEIGHT: u16 = 4;
    if inner.height < ROW_HEIGHT {
        let empty = Paragraph::new("Shortlist needs more height")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = (inner.height / ROW_HEIGHT) as usize;
    let (start, end) = visible_range(state.recruit_selected, cards.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + (i as u16) * ROW_HEIGHT,
            width: inner.width,
            height: ROW_HEIGHT,
        };

        let selected = idx == state.recruit_selected;
        let row_style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        if selected {
            frame.render_widget(Block::default().style(row_style), row_area);
        }

        let card = &cards[idx];
        let text = card_text(card);
        let paragraph = Paragraph::new(text).style(row_style);
        frame.render_widget(paragraph, row_area);
    }
}

fn card_text(card: &PlayerCard) -> String {
    let stats = card
        .stat_lines
        .iter()
        .map(|(label, value)| format!("{label} {value}"))
        .collect::<Vec<_>>()
        .join("  ");
    let band = card.risk_band.as_deref().unwrap_or("-");
    format!(
        "{}  [{}]\n  {}\n  {}\n  {} -> {}  {}  Injury: {}",
        card.name,
        card.risk_badge,
        card.headline,
        stats,
        card.current_value,
        card.predicted_value,
        market_text(card),
        band,
    )
}

fn market_text(card: &PlayerCard) -> String {
    let marker = match card.market_status {
        MarketStatus::Undervalued => "▲",
        MarketStatus::Overvalued => "▼",
        MarketStatus::FairValue => "■",
        MarketStatus::Unknown => "?",
    };
    format!("{marker} {}", card.market_label)
}

fn render_explain_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Why This Pick").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(player) = state.explained_player() else {
        let empty = Paragraph::new("Press Enter on a card to explain the pick")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let Some(panel) = explain_panel(player) else {
        let empty = Paragraph::new(format!(
            "No model explanation available for {}",
            player.name
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let mut lines = vec![
        format!("{}  (confidence {})", panel.player_name, panel.confidence),
        String::new(),
    ];
    for (name, impact, confidence) in &panel.factors {
        lines.push(format!("{name}  {}", percent_bar(*confidence, 10)));
        lines.push(format!("  {impact}"));
    }
    let paragraph = Paragraph::new(lines.join("\n"));
    frame.render_widget(paragraph, inner);
}

fn render_development(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(46)])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(7),
            Constraint::Length(8),
        ])
        .split(columns[0]);

    let block = Block::default().title("Development").borders(Borders::ALL);
    let inner = block.inner(left_chunks[0]);
    frame.render_widget(block, left_chunks[0]);

    let subject = state.current_dev_subject();
    match subject {
        Some(player) => {
            let mut lines = vec![
                format!(
                    "{}  ({} • {})",
                    player.name,
                    position_label(player.position),
                    player.club
                ),
                String::new(),
            ];
            if let Some(metrics) = &player.development {
                for metric in metrics {
                    let arrow = match metric.trend {
                        state::Trend::Positive => "+",
                        state::Trend::Negative => "-",
                    };
                    lines.push(format!(
                        "{:<18} {} {:>3}%  ({arrow}{:.1})",
                        metric.name,
                        percent_bar(metric.current, 14),
                        metric.current,
                        metric.change.abs()
                    ));
                    lines.push(format!(
                        "  {}",
                        progress_description(&metric.name, metric.trend)
                    ));
                }
            }
            let paragraph = Paragraph::new(lines.join("\n"));
            frame.render_widget(paragraph, inner);
        }
        None => {
            let empty = Paragraph::new("No development data loaded")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
        }
    }

    render_physical_metrics(frame, left_chunks[1], state);
    render_performance_trend(frame, left_chunks[2], state);
    render_training_panel(frame, columns[1], state);
}

fn render_physical_metrics(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("Physical Metrics")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let panel = state.current_dev_subject().and_then(physical_panel);
    let Some(panel) = panel else {
        let empty = Paragraph::new("No physical profile on record")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let lines: Vec<String> = panel
        .metrics
        .iter()
        .map(|(label, value)| format!("{label:<18} {value:>10}"))
        .collect();
    let paragraph = Paragraph::new(lines.join("\n"));
    frame.render_widget(paragraph, inner);
}

fn render_performance_trend(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("12-Week Trend")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.performance_trend.is_empty() || inner.height == 0 {
        return;
    }

    let series_height = (inner.height / state.performance_trend.len() as u16).max(1);
    for (i, series) in state.performance_trend.iter().enumerate() {
        let y = inner.y + i as u16 * series_height;
        if y >= inner.y + inner.height {
            break;
        }
        let series_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: series_height.min(inner.y + inner.height - y),
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(10)])
            .split(series_area);
        render_cell_text(frame, cols[0], &series.label, Style::default());
        let spark = Sparkline::default()
            .data(&series.points)
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(spark, cols[1]);
    }
}

fn render_training_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("Training Plan")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(player) = state.current_dev_subject() else {
        return;
    };
    let Some(plan) = state.training.get(&player.id) else {
        let empty = Paragraph::new(format!("No training plan for {}", player.name))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let mut lines = Vec::new();
    for rec in plan {
        lines.push(format!("[{}] {}", priority_label(rec.priority), rec.title));
        lines.push(format!("  {}", rec.description));
        lines.push(String::new());
    }
    let paragraph = Paragraph::new(lines.join("\n")).wrap(ratatui::widgets::Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn render_injury(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(40)])
        .split(area);

    let block = Block::default().title("Injury Outlook").borders(Borders::ALL);
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);

    match state.current_injury_subject() {
        Some(player) => {
            let outlook = player.injury.as_ref();
            let mut lines = vec![
                format!(
                    "{}  ({} • {})",
                    player.name,
                    position_label(player.position),
                    player.club
                ),
                String::new(),
            ];
            if let Some(outlook) = outlook {
                let band = risk_band_label(risk_band(outlook.current_risk));
                lines.push(format!(
                    "Current:  {} {:>3}%  [{band}]",
                    percent_bar(outlook.current_risk, 14),
                    outlook.current_risk
                ));
                lines.push(format!(
                    "1 Week:   {} {:>3}%",
                    percent_bar(outlook.weekly_risk, 14),
                    outlook.weekly_risk
                ));
                lines.push(format!(
                    "2 Weeks:  {} {:>3}%",
                    percent_bar(outlook.biweekly_risk, 14),
                    outlook.biweekly_risk
                ));
                lines.push(String::new());
                lines.push("Risk Drivers:".to_string());
                for driver in &outlook.drivers {
                    lines.push(format!("  {:<26} {:+}%", driver.name, driver.impact));
                }
            }
            let paragraph = Paragraph::new(lines.join("\n"));
            frame.render_widget(paragraph, inner);
        }
        None => {
            let empty = Paragraph::new("No injury data loaded")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
        }
    }

    let right_block = Block::default()
        .title("Risk Timeline")
        .borders(Borders::ALL);
    let right_inner = right_block.inner(columns[1]);
    frame.render_widget(right_block, columns[1]);

    if !state.risk_timeline.is_empty() && right_inner.height > 0 {
        let spark = Sparkline::default()
            .data(&state.risk_timeline)
            .style(Style::default().fg(Color::Red));
        frame.render_widget(spark, right_inner);
    }
}

fn render_valuation(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(46)])
        .split(area);

    let block = Block::default().title("Valuation").borders(Borders::ALL);
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);

    match state.current_valuation_subject() {
        Some(player) => {
            let mut lines = vec![
                format!(
                    "{}  ({} • {})",
                    player.name,
                    position_label(player.position),
                    player.club
                ),
                String::new(),
            ];
            if let Some(outlook) = &player.valuation {
                lines.push(format!("Current value: {}", format_value_m(outlook.current)));
                lines.push(String::new());
                lines.push("5-Year Projection:".to_string());
                for (year, value) in outlook.predictions.iter().enumerate() {
                    let scaled = (value / 2_500_000).min(80) as u8;
                    lines.push(format!(
                        "  Y{}  {} {}",
                        year + 1,
                        percent_bar(scaled, 16),
                        format_value_m(*value)
                    ));
                }
                lines.push(String::new());
                lines.push("Comparable Players:".to_string());
                for comp in &outlook.comparable {
                    lines.push(format!(
                        "  {:<18} {:<14} {}",
                        comp.name,
                        comp.club,
                        format_value_m(comp.value)
                    ));
                }
            }
            let paragraph = Paragraph::new(lines.join("\n"));
            frame.render_widget(paragraph, inner);
        }
        None => {
            let empty = Paragraph::new("No valuation data loaded")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
        }
    }

    let right_block = Block::default()
        .title("Market Insights")
        .borders(Borders::ALL);
    let right_inner = right_block.inner(columns[1]);
    frame.render_widget(right_block, columns[1]);

    if let Some(player) = state.current_valuation_subject() {
        if let Some(outlook) = &player.valuation {
            if outlook.insights.is_empty() {
                let empty = Paragraph::new("No insights for this player")
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(empty, right_inner);
            } else {
                let mut lines = Vec::new();
                for insight in &outlook.insights {
                    lines.push(insight.title.clone());
                    lines.push(format!("  {}", insight.description));
                    lines.push(String::new());
                }
                let paragraph = Paragraph::new(lines.join("\n"))
                    .wrap(ratatui::widgets::Wrap { trim: false });
                frame.render_widget(paragraph, right_inner);
            }
        }
    }
}

fn render_strategy(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(46)])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(6)])
        .split(columns[0]);

    let fixtures_block = Block::default()
        .title("Upcoming Fixtures")
        .borders(Borders::ALL);
    let fixtures_inner = fixtures_block.inner(left_chunks[0]);
    frame.render_widget(fixtures_block, left_chunks[0]);

    if state.fixtures.is_empty() {
        let empty = Paragraph::new("No fixtures loaded")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, fixtures_inner);
    } else {
        let mut lines = Vec::new();
        for fixture in &state.fixtures {
            lines.push(format!(
                "{}  vs {:<18} ({})  [{}] {}",
                fixture.date,
                fixture.opponent,
                venue_label(fixture.venue),
                intensity_label(fixture.intensity),
                fixture.competition
            ));
        }
        let paragraph = Paragraph::new(lines.join("\n"));
        frame.render_widget(paragraph, fixtures_inner);
    }

    render_fatigue_chart(frame, left_chunks[1], state);

    let rec_block = Block::default()
        .title("Rotation Plan")
        .borders(Borders::ALL);
    let rec_inner = rec_block.inner(columns[1]);
    frame.render_widget(rec_block, columns[1]);

    match &state.fatigue {
        Some(fatigue) => {
            let mut lines = vec![
                format!(
                    "Squad fatigue: {}%   Key players: {}%",
                    fatigue.overall, fatigue.key_players
                ),
                String::new(),
            ];
            for rec in &fatigue.recommendations {
                lines.push(format!("[{}] {}", priority_label(rec.priority), rec.title));
                lines.push(format!("  {}", rec.description));
                lines.push(String::new());
            }
            let paragraph =
                Paragraph::new(lines.join("\n")).wrap(ratatui::widgets::Wrap { trim: false });
            frame.render_widget(paragraph, rec_inner);
        }
        None => {
            let empty = Paragraph::new("No fatigue data loaded")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, rec_inner);
        }
    }
}

fn render_fatigue_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Squad Load").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(fatigue) = &state.fatigue else {
        return;
    };
    if inner.height == 0 || fatigue.levels.is_empty() {
        return;
    }

    let bars: Vec<Bar> = fatigue
        .levels
        .iter()
        .map(|(name, level)| {
            let color = if *level >= 80 {
                Color::Red
            } else if *level >= 65 {
                Color::Yellow
            } else {
                Color::Green
            };
            Bar::default()
                .value(*level as u64)
                .label(Line::from(name.clone()))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1)
        .max(100);
    frame.render_widget(chart, inner);
}

fn render_governance(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[0]);

    let sources_block = Block::default()
        .title("Data Sources")
        .borders(Borders::ALL);
    let sources_inner = sources_block.inner(left_chunks[0]);
    frame.render_widget(sources_block, left_chunks[0]);

    let mut lines = Vec::new();
    for source in &state.data_sources {
        let latency = if source.latency_mins == 0 {
            "real-time".to_string()
        } else {
            format!("{}m delay", source.latency_mins)
        };
        lines.push(format!(
            "{:<22} {:<8} {latency}",
            source.name,
            source_status_label(source.status)
        ));
    }
    if lines.is_empty() {
        lines.push("No sources loaded".to_string());
    }
    frame.render_widget(Paragraph::new(lines.join("\n")), sources_inner);

    let access_block = Block::default()
        .title("Access Control")
        .borders(Borders::ALL);
    let access_inner = access_block.inner(left_chunks[1]);
    frame.render_widget(access_block, left_chunks[1]);

    let mut access_lines = Vec::new();
    for rule in &state.access_rules {
        access_lines.push(format!("{:<20} {:<18} [{}]", rule.role, rule.access, rule.level));
    }
    if access_lines.is_empty() {
        access_lines.push("No access rules loaded".to_string());
    }
    frame.render_widget(Paragraph::new(access_lines.join("\n")), access_inner);

    let health_block = Block::default()
        .title("System Health")
        .borders(Borders::ALL);
    let health_inner = health_block.inner(columns[1]);
    frame.render_widget(health_block, columns[1]);

    let mut health_lines = Vec::new();
    for metric in &state.system_health {
        health_lines.push(format!(
            "{:<18} {} {:>3}%  {}",
            metric.name,
            percent_bar(metric.value, 14),
            metric.value,
            health_status_label(metric.status)
        ));
    }
    if health_lines.is_empty() {
        health_lines.push("No health data loaded".to_string());
    }
    frame.render_widget(Paragraph::new(health_lines.join("\n")), health_inner);
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let text_area = Rect {
        x: area.x,
        y: area.y + (area.height / 2),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(text).style(style);
    frame.render_widget(paragraph, text_area);
}

fn percent_bar(pct: u8, width: usize) -> String {
    let filled = (pct as usize * width) / 100;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn venue_label(venue: Venue) -> &'static str {
    match venue {
        Venue::Home => "H",
        Venue::Away => "A",
    }
}

fn intensity_label(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Low => "LOW",
        Intensity::Medium => "MED",
        Intensity::High => "HIGH",
    }
}

fn source_status_label(status: SourceStatus) -> &'static str {
    match status {
        SourceStatus::Online => "ONLINE",
        SourceStatus::Warning => "WARN",
        SourceStatus::Offline => "OFFLINE",
    }
}

fn health_status_label(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Good => "good",
        HealthStatus::Warning => "warning",
        HealthStatus::Critical => "critical",
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Champions Gen - Help",
        "",
        "Screens:",
        "  1  Recruitment   2  Development   3  Injury",
        "  4  Valuation     5  Strategy      6  Governance",
        "",
        "Recruitment:",
        "  j/k or ↑/↓   Move through shortlist",
        "  Enter        Explain the highlighted pick",
        "  p            Cycle position filter",
        "  l            Cycle league filter",
        "  + / -        Widen/narrow target age",
        "  ] / [        Raise/lower budget (€5M steps)",
        "  r            Reset filters",
        "",
        "Global:",
        "  e            Export shortlist (XLSX)",
        "  E            Export shortlist (JSON)",
        "  R            Reload roster",
        "  g            Refresh governance data",
        "  ?            Toggle help",
        "  q            Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn filter_keys_only_act_on_the_recruitment_screen() {
        let mut app = App::new(None);
        app.state.screen = Screen::Development;
        let before = app.state.filters.clone();

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state.filters, before);

        app.state.screen = Screen::Recruitment;
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state.filters.age, before.age + 1);
        assert_eq!(app.state.filters.budget_m, before.budget_m + 5);
    }
}
