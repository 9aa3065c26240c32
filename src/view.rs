use serde_json::{json, Value};

use crate::quiz_engine::{
    models::{Category, DiscoveryFact, DifficultyMode, Feedback, GameStatus, Question},
    session::Session,
};

fn discovery_json(fact: &Option<DiscoveryFact>) -> Value {
    match fact {
        Some(f) => json!({
            "category": f.category.to_string(),
            "label": f.label,
            "value": f.value
        }),
        None => Value::Null,
    }
}

/// The question as the player may see it: the answer is not included.
fn question_json(q: &Question) -> Value {
    let country = &q.correct_answer;
    let (flag_code, flag_url) = if q.category == Category::Flag {
        (Value::String(country.flag.clone()), Value::String(country.flag_image_url()))
    } else {
        (Value::Null, Value::Null)
    };
    json!({
        "category": q.category.to_string(),
        "categoryLabel": q.category.label(),
        "prompt": q.prompt,
        "region": country.region.display_name(),
        "flagCode": flag_code,
        "flagUrl": flag_url,
        "options": q.options
    })
}

fn feedback_json(f: &Feedback) -> Value {
    json!({
        "isCorrect": f.is_correct,
        "isSkipped": f.is_skipped,
        "correctName": f.correct_name,
        "funFact": f.fun_fact,
        "discovery": discovery_json(&f.discovery)
    })
}

/// Entries for the mode picker, in display order.
pub fn mode_menu() -> Value {
    Value::Array(
        DifficultyMode::ALL
            .iter()
            .map(|m| {
                json!({
                    "mode": m.to_string(),
                    "blurb": m.blurb(),
                    "rounds": m.round_limit(),
                    "choices": m.option_count()
                })
            })
            .collect(),
    )
}

/// Everything the presentation layer needs to draw the current state.
///
/// `round` is 1-based. `roundTotal` is `min(pool size, mode round limit)`.
pub fn render_state(session: &Session) -> Value {
    json!({
        "status": session.status().to_string(),
        "mode": session.mode().to_string(),
        "score": session.score(),
        "round": session.round_index() + 1,
        "roundTotal": session.round_total(),
        "question": session.question().map(question_json).unwrap_or(Value::Null),
        "feedback": session.feedback().map(feedback_json).unwrap_or(Value::Null),
        "answersEnabled": session.status() == GameStatus::Playing
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::Dataset;

    #[test]
    fn start_state_has_no_question_or_feedback() {
        let s = Session::new(Dataset::builtin(), Some(1));
        let v = render_state(&s);
        assert_eq!(v["status"], "START");
        assert!(v["question"].is_null());
        assert!(v["feedback"].is_null());
        assert_eq!(v["answersEnabled"], false);
    }

    #[test]
    fn flag_round_exposes_code_and_url_but_not_the_answer() {
        let mut s = Session::new(Dataset::builtin(), Some(2));
        s.select_mode(DifficultyMode::Classic);
        let v = render_state(&s);
        let answer = s.question().unwrap().correct_answer.clone();

        assert_eq!(v["status"], "PLAYING");
        assert_eq!(v["round"], 1);
        assert_eq!(v["roundTotal"], 15);
        assert_eq!(v["question"]["category"], "FLAG");
        assert_eq!(v["question"]["flagCode"], answer.flag.as_str());
        assert_eq!(
            v["question"]["flagUrl"],
            format!("https://flagcdn.com/w640/{}.png", answer.flag).as_str()
        );
        assert_eq!(v["question"]["options"].as_array().unwrap().len(), 4);
        assert!(v["question"].get("correctAnswer").is_none());
        assert_eq!(v["answersEnabled"], true);
    }

    #[test]
    fn feedback_reveals_answer_and_fun_fact() {
        let mut s = Session::new(Dataset::builtin(), Some(3));
        s.select_mode(DifficultyMode::Easy);
        let answer = s.question().unwrap().correct_answer.clone();
        s.skip();
        let v = render_state(&s);
        assert_eq!(v["status"], "FEEDBACK");
        assert_eq!(v["feedback"]["isSkipped"], true);
        assert_eq!(v["feedback"]["isCorrect"], false);
        assert_eq!(v["feedback"]["correctName"], answer.name.as_str());
        assert_eq!(v["feedback"]["funFact"], answer.fun_fact.as_str());
        assert!(v["feedback"]["discovery"]["label"].is_string());
        assert_eq!(v["answersEnabled"], false);
    }

    #[test]
    fn mode_menu_lists_three_modes() {
        let menu = mode_menu();
        let items = menu.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["blurb"], "10 Rounds • 2 Choices • No Penalties");
        assert_eq!(items[2]["choices"], 6);
    }
}
