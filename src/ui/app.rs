//! Thin display surface: a start control and a result readout.
//!
//! All benchmark logic lives behind the orchestrator. This layer starts a
//! run on demand, drains the worker's event channel each frame, and renders
//! whatever the events say. The only value crossing the thread boundary is
//! the immutable finished run (or its error text).

use std::collections::VecDeque;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::config::BenchSettings;
use crate::history::RunHistoryStore;
use crate::log_collector::LogLine;
use crate::models::BenchmarkRun;
use crate::orchestrator::{BenchEvent, BenchOrchestrator};

/// Lines of log history kept for the collapsible pane.
const LOG_PANE_CAPACITY: usize = 200;

/// Observable run lifecycle, driven entirely by worker events.
enum RunState {
    Idle,
    Running { status: String },
    Done(BenchmarkRun),
    Failed(String),
}

/// eframe application wrapping the benchmark engine.
pub struct BenchApp {
    settings: BenchSettings,
    events_tx: Sender<BenchEvent>,
    events_rx: Receiver<BenchEvent>,
    log_rx: Option<Receiver<LogLine>>,
    recent_logs: VecDeque<String>,
    state: RunState,
}

impl BenchApp {
    pub fn new(settings: BenchSettings, log_rx: Option<Receiver<LogLine>>) -> Self {
        let (events_tx, events_rx) = unbounded();
        BenchApp {
            settings,
            events_tx,
            events_rx,
            log_rx,
            recent_logs: VecDeque::with_capacity(LOG_PANE_CAPACITY),
            state: RunState::Idle,
        }
    }

    fn start_run(&mut self) {
        let path = self
            .settings
            .results_path
            .clone()
            .unwrap_or_else(RunHistoryStore::default_path);
        let orchestrator = BenchOrchestrator::new(
            self.settings.clone(),
            RunHistoryStore::new(path),
            self.events_tx.clone(),
        );
        orchestrator.spawn();
        self.state = RunState::Running {
            status: "Starting benchmark...".to_string(),
        };
    }

    fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                BenchEvent::Status(status) => {
                    if let RunState::Running { status: current } = &mut self.state {
                        *current = status;
                    }
                }
                BenchEvent::Completed(run) => self.state = RunState::Done(run),
                BenchEvent::Failed(message) => self.state = RunState::Failed(message),
            }
        }
        if let Some(log_rx) = &self.log_rx {
            while let Ok(line) = log_rx.try_recv() {
                if self.recent_logs.len() >= LOG_PANE_CAPACITY {
                    self.recent_logs.pop_front();
                }
                self.recent_logs
                    .push_back(format!("[{}] [{}] {}", line.timestamp, line.level, line.message));
            }
        }
    }
}

impl eframe::App for BenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("benchrig");
            ui.add_space(8.0);

            let running = matches!(self.state, RunState::Running { .. });
            if ui
                .add_enabled(!running, egui::Button::new("Start benchmark"))
                .clicked()
            {
                self.start_run();
            }
            ui.add_space(8.0);

            match &self.state {
                RunState::Idle => {
                    ui.label("Ready.");
                }
                RunState::Running { status } => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(status);
                    });
                }
                RunState::Done(run) => {
                    ui.label(run.summary());
                }
                RunState::Failed(message) => {
                    ui.colored_label(
                        egui::Color32::LIGHT_RED,
                        format!("Benchmark failed: {}", message),
                    );
                }
            }

            if !self.recent_logs.is_empty() {
                ui.add_space(8.0);
                ui.collapsing("Log", |ui| {
                    egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                        for line in &self.recent_logs {
                            ui.monospace(line);
                        }
                    });
                });
            }
        });

        // The worker cannot request repaints; poll while it is running
        if matches!(self.state, RunState::Running { .. }) {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}
