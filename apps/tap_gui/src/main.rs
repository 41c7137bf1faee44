use std::sync::Arc;

mod controller;
mod ui;

use counter_core::CounterEngine;
use eframe::egui;
use feedback::{
    load_settings, AudioCapability, FeedbackDispatcher, Settings, SettingsError, TapCounter,
    TerminalBell,
};
use tracing_subscriber::EnvFilter;

use crate::{
    controller::events::{NoticeSeverity, StatusNotice},
    ui::TapCounterApp,
};

fn build_counter(settings: &Settings) -> TapCounter {
    let audio: Option<Arc<dyn AudioCapability>> = if settings.audio_enabled {
        Some(Arc::new(TerminalBell::stderr()))
    } else {
        None
    };
    // Desktop hosts have no vibration capability.
    let dispatcher = FeedbackDispatcher::new(settings.feedback_config()).with_audio(audio);
    TapCounter::new(CounterEngine::with_policy(settings.target_policy()), dispatcher)
}

/// A broken settings file keeps the window usable on defaults, but the user is
/// told about it.
fn resolve_settings(loaded: Result<Settings, SettingsError>) -> (Settings, Option<StatusNotice>) {
    match loaded {
        Ok(settings) => (settings, None),
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default settings");
            let notice = StatusNotice::new(
                NoticeSeverity::Warning,
                format!("Settings were not loaded ({err}); using defaults."),
            );
            (Settings::default(), Some(notice))
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let (settings, notice) = resolve_settings(load_settings());
    let counter = build_counter(&settings);
    let initial_target = settings.default_target;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tap Counter")
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tap Counter",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(
                TapCounterApp::new(counter, initial_target).with_notice(notice),
            ))
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use counter_core::SessionState;
    use feedback::{Settings, SettingsError};

    use super::{build_counter, resolve_settings};
    use crate::controller::events::NoticeSeverity;

    #[test]
    fn built_counter_honours_settings() {
        let settings = Settings {
            max_target: 5,
            audio_enabled: false,
            ..Settings::default()
        };
        let mut counter = build_counter(&settings);
        assert!(counter.configure(6).is_err());
        counter.configure(5).expect("configure");
        counter.start().expect("start");
        for _ in 0..5 {
            counter.tap();
        }
        assert_eq!(counter.snapshot().state, SessionState::Completed);
        assert_eq!(
            counter.feedback().config().pulse_duration,
            std::time::Duration::from_millis(180)
        );
    }

    #[test]
    fn unreadable_settings_fall_back_with_a_warning() {
        let err = SettingsError::Read {
            path: PathBuf::from("tap_counter.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let (settings, notice) = resolve_settings(Err(err));
        assert_eq!(settings, Settings::default());
        let notice = notice.expect("notice");
        assert_eq!(notice.severity, NoticeSeverity::Warning);
        assert!(notice.message.contains("tap_counter.toml"), "{}", notice.message);
    }

    #[test]
    fn loaded_settings_pass_through_silently() {
        let loaded = Settings {
            default_target: 4,
            ..Settings::default()
        };
        let (settings, notice) = resolve_settings(Ok(loaded.clone()));
        assert_eq!(settings, loaded);
        assert!(notice.is_none());
    }
}
