use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::{Workbook, Worksheet};
use serde::Serialize;

use crate::filter::{classify_value, market_status_label, risk_band, risk_band_label};
use crate::state::{position_label, risk_level_label, PlayerRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Xlsx => "XLSX",
        }
    }
}

pub struct ExportReport {
    pub players: usize,
    pub errors: Vec<String>,
}

pub struct ExportProgress {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

/// Timestamped filename, e.g. `shortlist_20241026_143500.json`, placed in
/// `EXPORT_DIR` when set and the working directory otherwise.
pub fn default_export_path(format: ExportFormat) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let name = format!("shortlist_{stamp}.{}", format.extension());
    match std::env::var("EXPORT_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir).join(name),
        _ => PathBuf::from(name),
    }
}

/// One row of the exported shortlist. Field order matches the scouting
/// report template consumers already parse.
#[derive(Debug, Serialize)]
struct ShortlistEntry {
    name: String,
    position: String,
    club: String,
    league: String,
    nationality: String,
    age: u8,
    current_value: u64,
    predicted_value: u64,
    market_status: String,
    risk_level: String,
    similarity: u8,
}

fn shortlist_entry(player: &PlayerRecord) -> ShortlistEntry {
    ShortlistEntry {
        name: player.name.clone(),
        position: position_label(player.position).to_string(),
        club: player.club.clone(),
        league: player.league.clone(),
        nationality: player.nationality.clone(),
        age: player.age,
        current_value: player.current_value,
        predicted_value: player.predicted_value,
        market_status: market_status_label(classify_value(
            player.current_value,
            player.predicted_value,
        ))
        .to_string(),
        risk_level: risk_level_label(player.risk_level).to_string(),
        similarity: player.similarity,
    }
}

pub fn export_shortlist_with_progress(
    path: &Path,
    format: ExportFormat,
    players: &[PlayerRecord],
    mut on_progress: impl FnMut(ExportProgress),
) -> Result<ExportReport> {
    let total = players.len();
    let mut current = 0usize;

    on_progress(ExportProgress {
        current,
        total,
        message: format!("Preparing {} export", format.label()),
    });

    let mut entries = Vec::with_capacity(players.len());
    for player in players {
        entries.push(shortlist_entry(player));
        current = current.saturating_add(1);
        on_progress(ExportProgress {
            current,
            total,
            message: format!("Player: {}", player.name),
        });
    }

    match format {
        ExportFormat::Json => write_json(path, &entries)?,
        ExportFormat::Xlsx => write_xlsx(path, players, &entries)?,
    }

    Ok(ExportReport {
        players: entries.len(),
        errors: Vec::new(),
    })
}

fn write_json(path: &Path, entries: &[ShortlistEntry]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed creating export file {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), entries)
        .with_context(|| format!("failed writing shortlist to {}", path.display()))?;
    Ok(())
}

fn write_xlsx(path: &Path, players: &[PlayerRecord], entries: &[ShortlistEntry]) -> Result<()> {
    let mut rows = vec![vec![
        "Player".to_string(),
        "Position".to_string(),
        "Club".to_string(),
        "League".to_string(),
        "Nationality".to_string(),
        "Age".to_string(),
        "Current Value".to_string(),
        "Predicted Value".to_string(),
        "Market Status".to_string(),
        "Risk Level".to_string(),
        "Injury Band".to_string(),
        "Similarity".to_string(),
    ]];

    for (player, entry) in players.iter().zip(entries) {
        let injury_band = player
            .injury
            .as_ref()
            .map(|i| risk_band_label(risk_band(i.current_risk)).to_string())
            .unwrap_or_default();
        rows.push(vec![
            entry.name.clone(),
            entry.position.clone(),
            entry.club.clone(),
            entry.league.clone(),
            entry.nationality.clone(),
            entry.age.to_string(),
            entry.current_value.to_string(),
            entry.predicted_value.to_string(),
            entry.market_status.clone(),
            entry.risk_level.clone(),
            injury_band,
            format!("{}%", entry.similarity),
        ]);
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Shortlist")?;
        write_rows(sheet, &rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(())
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
