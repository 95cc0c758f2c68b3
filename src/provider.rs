use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::export::{self, ExportProgress};
use crate::roster;
use crate::state::{parse_u64_env_or_default, Delta, HealthStatus, ProviderCommand};

/// Background data thread. Seeds the fixture data sets at startup, keeps
/// the governance system-health panel moving, and runs exports off the UI
/// thread.
///
/// `HEALTH_JITTER_SECS` tunes how often the health metrics drift.
pub fn spawn_fixture_provider(tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        let mut rng = rand::thread_rng();

        let health_interval =
            Duration::from_secs(parse_u64_env_or_default("HEALTH_JITTER_SECS", 5).max(1));
        let mut last_health = Instant::now();
        let mut health = roster::seed_system_health();

        send_seed_data(&tx);
        let _ = tx.send(Delta::Log("[INFO] Demo data loaded".to_string()));

        loop {
            thread::sleep(Duration::from_millis(250));

            if last_health.elapsed() >= health_interval {
                jitter_health(&mut health, &mut rng);
                let _ = tx.send(Delta::UpdateSystemHealth(health.clone()));
                last_health = Instant::now();
            }

            while let Ok(cmd) = cmd_rx.try_recv() {
                match cmd {
                    ProviderCommand::ReloadRoster => {
                        let _ = tx.send(Delta::SetPlayers(roster::roster().to_vec()));
                        let _ = tx.send(Delta::Log("[INFO] Roster reloaded".to_string()));
                    }
                    ProviderCommand::RefreshGovernance => {
                        let _ = tx.send(Delta::SetGovernance {
                            sources: roster::seed_data_sources(),
                            health: health.clone(),
                            access: roster::seed_access_rules(),
                        });
                        let _ = tx.send(Delta::Log("[INFO] Governance refreshed".to_string()));
                    }
                    ProviderCommand::ExportShortlist {
                        path,
                        format,
                        players,
                    } => {
                        let _ = tx.send(Delta::ExportStarted {
                            path: path.clone(),
                            total: players.len(),
                        });

                        let result = export::export_shortlist_with_progress(
                            &PathBuf::from(&path),
                            format,
                            &players,
                            |progress: ExportProgress| {
                                let _ = tx.send(Delta::ExportProgress {
                                    current: progress.current,
                                    total: progress.total,
                                    message: progress.message,
                                });
                            },
                        );

                        match result {
                            Ok(report) => {
                                let _ = tx.send(Delta::ExportFinished {
                                    path: path.clone(),
                                    players: report.players,
                                    errors: report.errors.len(),
                                });
                                let _ = tx.send(Delta::Log(format!(
                                    "[INFO] Exported {} players to {path}",
                                    report.players
                                )));
                            }
                            Err(err) => {
                                let _ = tx.send(Delta::ExportFailed {
                                    path: path.clone(),
                                    message: err.to_string(),
                                });
                                let _ =
                                    tx.send(Delta::Log(format!("[WARN] Export failed: {err}")));
                            }
                        }
                    }
                }
            }
        }
    });
}

fn send_seed_data(tx: &Sender<Delta>) {
    let _ = tx.send(Delta::SetPlayers(roster::roster().to_vec()));
    let _ = tx.send(Delta::SetStrategy {
        fixtures: roster::seed_fixtures(),
        fatigue: roster::seed_fatigue(),
    });
    let _ = tx.send(Delta::SetGovernance {
        sources: roster::seed_data_sources(),
        health: roster::seed_system_health(),
        access: roster::seed_access_rules(),
    });
    let _ = tx.send(Delta::SetTraining(roster::seed_training()));
    let _ = tx.send(Delta::SetTrendSeries {
        performance: roster::seed_performance_trend(),
        risk_timeline: roster::seed_risk_timeline(),
    });
}

/// Drift each metric a few points and re-derive its status so the
/// governance panel looks alive in the demo.
fn jitter_health(health: &mut [crate::state::HealthMetric], rng: &mut impl Rng) {
    for metric in health.iter_mut() {
        let delta = rng.gen_range(-3i16..=3);
        let next = (metric.value as i16 + delta).clamp(1, 99) as u8;
        metric.value = next;
        metric.status = if next >= 90 {
            HealthStatus::Critical
        } else if next >= 70 {
            HealthStatus::Warning
        } else {
            HealthStatus::Good
        };
    }
}
