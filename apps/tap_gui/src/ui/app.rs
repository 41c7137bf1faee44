use std::time::Duration;

use counter_core::{Command, SessionSnapshot, SessionState};
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use feedback::TapCounter;

use crate::controller::{
    events::{NoticeSeverity, StatusNotice},
    orchestration::{drain_commands, queue_command},
};

const COMMAND_QUEUE_CAPACITY: usize = 256;
const COUNT_FONT_SIZE: f32 = 64.0;
const PULSE_SCALE: f32 = 1.06;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
const SUCCESS: egui::Color32 = egui::Color32::from_rgb(5, 150, 105);
const WARNING: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);

pub struct TapCounterApp {
    counter: TapCounter,
    cmd_tx: Sender<Command>,
    cmd_rx: Receiver<Command>,
    target_input: String,
    status: Option<StatusNotice>,
}

impl TapCounterApp {
    pub fn new(counter: TapCounter, initial_target: u32) -> Self {
        let (cmd_tx, cmd_rx) = bounded(COMMAND_QUEUE_CAPACITY);
        Self {
            counter,
            cmd_tx,
            cmd_rx,
            target_input: initial_target.to_string(),
            status: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<StatusNotice>) -> Self {
        self.status = notice;
        self
    }

    fn queue(&mut self, cmd: Command) {
        queue_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn process_commands(&mut self) {
        if let Some(notice) = drain_commands(&self.cmd_rx, &mut self.counter) {
            self.status = Some(notice);
        }
        self.counter.poll();
    }

    fn start_challenge(&mut self) {
        self.status = None;
        let input = self.target_input.clone();
        self.queue(Command::configure(input));
        self.queue(Command::Start);
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        let Some(notice) = &self.status else {
            return;
        };
        let color = match notice.severity {
            NoticeSeverity::Info => ui.visuals().text_color(),
            NoticeSeverity::Success => SUCCESS,
            NoticeSeverity::Warning => WARNING,
        };
        ui.label(egui::RichText::new(&notice.message).color(color).strong());
    }

    fn show_count(&self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        let size = if self.counter.pulse_active() {
            COUNT_FONT_SIZE * PULSE_SCALE
        } else {
            COUNT_FONT_SIZE
        };
        ui.label(
            egui::RichText::new(snapshot.count.to_string())
                .size(size)
                .strong()
                .color(ACCENT),
        );

        if snapshot.state != SessionState::Idle {
            if let Some(target) = snapshot.target {
                ui.label(format!("of {target} taps"));
            }
            ui.add(
                egui::ProgressBar::new(snapshot.progress_percent / 100.0)
                    .text(format!("{}% Complete", snapshot.progress_percent.round() as u32)),
            );
        }
    }

    fn show_setup(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Set Your Challenge").strong());
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.target_input)
                .hint_text("Enter target")
                .desired_width(160.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let has_input = !self.target_input.trim().is_empty();
        let clicked = ui
            .add_enabled(has_input, egui::Button::new("Start Challenge").min_size(egui::vec2(200.0, 40.0)))
            .clicked();
        if clicked || (submitted && has_input) {
            self.start_challenge();
        }
    }

    fn show_tap_button(&mut self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        let label = format!("TAP ME\n{} left", snapshot.remaining);
        let button = egui::Button::new(egui::RichText::new(label).size(24.0).strong())
            .min_size(egui::vec2(220.0, 160.0));
        if ui.add(button).clicked() {
            self.queue(Command::Tap);
        }
    }

    fn show_completion(&self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        ui.label(egui::RichText::new("Well Done!").size(28.0).strong().color(SUCCESS));
        ui.label(snapshot.headline());
        ui.label(egui::RichText::new("Goal Completed").color(SUCCESS));
    }
}

impl eframe::App for TapCounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.queue(Command::Tap);
        }
        self.process_commands();
        let snapshot = self.counter.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tap Counter");
                ui.label(snapshot.headline());
                ui.add_space(12.0);
                self.show_status(ui);
                self.show_count(ui, &snapshot);
                ui.add_space(12.0);

                match snapshot.state {
                    SessionState::Idle => self.show_setup(ui),
                    SessionState::Active => self.show_tap_button(ui, &snapshot),
                    SessionState::Completed => self.show_completion(ui, &snapshot),
                }

                if snapshot.state != SessionState::Idle {
                    ui.add_space(12.0);
                    if ui.button(snapshot.reset_label()).clicked() {
                        self.status = None;
                        self.queue(Command::Reset);
                    }
                }
            });
        });

        match self.counter.feedback().pulse_remaining() {
            Some(remaining) => ctx.request_repaint_after(remaining.min(Duration::from_millis(16))),
            None if !self.cmd_rx.is_empty() => ctx.request_repaint(),
            None => {}
        }
    }
}
