use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::{state::session::FormState, ui::draw};

use super::Action;

pub fn handle_key(state: &mut FormState, key: KeyCode) -> Action {
    if state.has_notice() {
        state.dismiss_notice();
        return Action::None;
    }

    match key {
        KeyCode::Up | KeyCode::BackTab => state.focus_prev(),
        KeyCode::Down | KeyCode::Tab => state.focus_next(),
        KeyCode::Left => state.cycle(-1),
        KeyCode::Right => state.cycle(1),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Enter => {
            state.submit();
        }
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char(c) => state.type_char(c),
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &FormState) {
    draw::draw(f, &state.view());
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use predictor::{
        config::ClientConfig, error::GENERIC_FAILURE, form::Field, PredictSession, PredictionClient,
    };
    use tokio::runtime::Runtime;

    use super::*;

    fn state(rt: &Runtime) -> FormState {
        state_at(rt, "http://127.0.0.1:9")
    }

    fn state_at(rt: &Runtime, base_url: &str) -> FormState {
        let config = ClientConfig::new(base_url);
        let client = PredictionClient::new(&config);
        let session = PredictSession::new(client, rt.handle().clone());
        FormState::new(session, config.base_url)
    }

    fn press(state: &mut FormState, keys: &[KeyCode]) {
        for k in keys {
            handle_key(state, *k);
        }
    }

    #[test]
    fn focus_wraps_both_ways() {
        let rt = Runtime::new().unwrap();
        let mut s = state(&rt);

        assert_eq!(s.focused(), Field::Contract);
        press(&mut s, &[KeyCode::Up]);
        assert_eq!(s.focused(), Field::Age);
        press(&mut s, &[KeyCode::Tab]);
        assert_eq!(s.focused(), Field::Contract);
    }

    #[test]
    fn arrows_cycle_select_options() {
        let rt = Runtime::new().unwrap();
        let mut s = state(&rt);

        press(&mut s, &[KeyCode::Right]);
        assert_eq!(s.session().form().get(Field::Contract), "One year");
        press(&mut s, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(s.session().form().get(Field::Contract), "Two year");
    }

    #[test]
    fn numeric_field_takes_digits_only() {
        let rt = Runtime::new().unwrap();
        let mut s = state(&rt);

        press(&mut s, &[KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(s.focused(), Field::Tenure);

        press(
            &mut s,
            &[KeyCode::Backspace, KeyCode::Char('1'), KeyCode::Char('x'), KeyCode::Char('2')],
        );
        assert_eq!(s.session().form().get(Field::Tenure), "12");
    }

    #[test]
    fn out_of_range_value_blocks_submit() {
        let rt = Runtime::new().unwrap();
        let mut s = state(&rt);

        press(&mut s, &[KeyCode::Up, KeyCode::Backspace, KeyCode::Backspace, KeyCode::Char('0')]);
        press(&mut s, &[KeyCode::Down, KeyCode::Enter]);

        let view = s.view();
        assert!(!view.loading);
        assert_eq!(s.focused(), Field::Age);
        assert!(view.hint.unwrap().contains("greater than or equal to 1"));
    }

    #[test]
    fn quit_keys() {
        let rt = Runtime::new().unwrap();
        let mut s = state(&rt);

        assert!(matches!(handle_key(&mut s, KeyCode::Char('q')), Action::Quit));
        assert!(matches!(handle_key(&mut s, KeyCode::Esc), Action::Quit));
        assert!(matches!(handle_key(&mut s, KeyCode::Char('5')), Action::None));
    }

    #[test]
    fn view_lists_fields_in_order() {
        let rt = Runtime::new().unwrap();
        let s = state(&rt);
        let view = s.view();

        let fields: Vec<Field> = view.rows.iter().map(|r| r.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert!(view.rows[0].active);
        assert_eq!(view.rows[5].value, "30");
        assert!(view.result.is_none() && view.notice.is_none());
    }

    #[test]
    fn bad_base_url_still_opens_and_reports_on_submit() {
        let rt = Runtime::new().unwrap();
        let mut s = state_at(&rt, "churn-api.example.com");
        assert!(s.view().notice.is_none());

        press(&mut s, &[KeyCode::Enter]);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !s.has_notice() && Instant::now() < deadline {
            s.tick();
            std::thread::sleep(Duration::from_millis(5));
        }

        let view = s.view();
        assert!(!view.loading);
        assert_eq!(view.notice.unwrap().message, GENERIC_FAILURE);

        press(&mut s, &[KeyCode::Char('x')]);
        assert!(!s.has_notice());
        press(&mut s, &[KeyCode::Right]);
        assert_eq!(s.session().form().get(Field::Contract), "One year");
    }
}
