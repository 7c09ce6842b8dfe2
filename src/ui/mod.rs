mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// `m:ss` for the countdown and summaries.
fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::Session;
    use crate::config::Config;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(75), "1:15");
    }

    #[test]
    fn test_screens_render() {
        let text = "1. Pick one\na) yes\nb) no\nAnswer: a";
        let session = Session::with_input(Config::default(), text);
        let mut app = App::new(session, "Demo");
        assert!(draw(&app).contains("DEMO"));

        app.start_quiz();
        app.select_next_option();
        app.submit_answer();
        let screen = draw(&app);
        assert!(screen.contains("Pick one"));
        assert!(screen.contains("Correct answer: A"));

        app.finish();
        assert!(draw(&app).contains("RESULTS"));
    }
}
