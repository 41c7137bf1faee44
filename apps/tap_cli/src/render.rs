use counter_core::{SessionSnapshot, SessionState};

const BAR_WIDTH: usize = 20;

pub fn status_line(snapshot: &SessionSnapshot, pulse: bool) -> String {
    let marker = if pulse { "*" } else { " " };
    match snapshot.state {
        SessionState::Idle => format!(
            "[idle]{marker} target {}  {}",
            snapshot
                .target
                .map_or_else(|| "unset".to_string(), |target| target.to_string()),
            snapshot.headline()
        ),
        SessionState::Active | SessionState::Completed => format!(
            "[{}]{marker} {}/{} {} {:>3}%  {}",
            snapshot.state.label(),
            snapshot.count,
            snapshot.target.unwrap_or_default(),
            progress_bar(snapshot.progress_percent),
            snapshot.progress_percent.round() as u32,
            snapshot.headline()
        ),
    }
}

fn progress_bar(percent: f32) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f32).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
