//! Navbar Component
//!
//! Top bar with the section menu. When the console logger is installed a
//! "Logs" toggle shows its recent lines.

use console_logger::ConsoleLogger;
use leptos::prelude::*;

const MENU: &[(&str, bool)] = &[
    ("Dashboard", false),
    ("Organization", true),
    ("Models", false),
    ("Tracking", false),
];

/// Latest line first, at most `limit` lines
fn newest_first(mut lines: Vec<String>, limit: usize) -> Vec<String> {
    lines.reverse();
    lines.truncate(limit);
    lines
}

const LOG_PANEL_LINES: usize = 50;

#[component]
fn LogPanel(logger: &'static ConsoleLogger) -> impl IntoView {
    let open = RwSignal::new(false);
    let lines = RwSignal::new(Vec::<String>::new());

    let toggle = move |_| {
        if !open.get_untracked() {
            lines.set(newest_first(logger.recent(), LOG_PANEL_LINES));
        }
        open.update(|o| *o = !*o);
    };

    view! {
        <div class="log-panel">
            <button type="button" class="btn btn-small" on:click=toggle>
                "Logs"
            </button>
            <Show when=move || open.get()>
                <pre class="log-lines">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No log lines yet".to_string() } else { lines.join("\n") }
                    }}
                </pre>
            </Show>
        </div>
    }
}

#[component]
pub fn Navbar(logger: Option<&'static ConsoleLogger>) -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar-brand">"X"</div>
            <nav class="navbar-menu">
                {MENU
                    .iter()
                    .map(|(label, active)| {
                        view! {
                            <span class=if *active { "navbar-item active" } else { "navbar-item" }>{*label}</span>
                        }
                    })
                    .collect_view()}
            </nav>
            {logger.map(|logger| view! { <LogPanel logger=logger /> })}
            <div class="navbar-user">"Admin"</div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_panel_shows_latest_lines_first() {
        let lines: Vec<String> = (1..=5).map(|i| format!("line {}", i)).collect();
        assert_eq!(newest_first(lines.clone(), 3), vec!["line 5", "line 4", "line 3"]);
        assert_eq!(newest_first(lines, 10).len(), 5);
        assert!(newest_first(Vec::new(), 3).is_empty());
    }

    #[test]
    fn test_recent_lines_reach_the_panel() {
        use log::{Level, LevelFilter, Log, Record};

        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        for message in ["loaded divisions", "saved division"] {
            logger.log(
                &Record::builder()
                    .level(Level::Info)
                    .target("org_admin_ui")
                    .args(format_args!("{}", message))
                    .build(),
            );
        }
        let shown = newest_first(logger.recent(), LOG_PANEL_LINES);
        assert!(shown[0].ends_with("saved division"));
        assert!(shown[1].ends_with("loaded divisions"));
    }
}
