//! Smoke-renders every view into a test backend; no tty needed.

use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use synthtop::analyze::Analysis;
use synthtop::app::App;
use synthtop::generate::Generator;

fn rendered_text(app: &App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).expect("test backend");
    terminal.draw(|f| app.draw(f)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn app() -> App {
    let table = Generator::seeded(11).generate(12.0, 5);
    let analysis = Analysis::compute(&table);
    App::new(table, analysis)
}

#[test]
fn time_series_view_renders_all_panels() {
    let text = rendered_text(&app());
    for label in ["CPU", "Memory", "Disk", "Network"] {
        assert!(text.contains(label), "missing {label} panel");
    }
}

#[test]
fn distribution_view_shows_means() {
    let mut a = app();
    a.handle_key(KeyCode::Char('2'));
    let text = rendered_text(&a);
    assert!(text.contains("CPU distribution"));
    assert!(text.contains("Network distribution"));
    assert!(text.contains("mean"));
}

#[test]
fn dashboard_view_renders_all_quadrants() {
    let mut a = app();
    a.handle_key(KeyCode::Char('3'));
    let text = rendered_text(&a);
    assert!(text.contains("CPU & Memory over time"));
    assert!(text.contains("CPU vs Memory distribution"));
    assert!(text.contains("Metrics comparison"));
    assert!(text.contains("Correlation matrix"));
    // Diagonal annotations of the correlation heatmap
    assert!(text.contains("1.00"));
}
