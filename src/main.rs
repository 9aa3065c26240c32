//! Country Trivia · terminal front end
//!
//! Draws the engine's render state as text and forwards the player's input.
//!
//! Important env variables:
//!   TRIVIA_CONFIG_PATH : path to TOML config (seed, feedback time, dataset)
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or "warn,session=debug"
//!   LOG_FORMAT         : "pretty" (default) or "json"

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

use country_trivia::{
    config::load_config_from_env, telemetry, view, DifficultyMode, FeedbackScheduler,
    GameStatus, Session,
};

type Input = Lines<BufReader<Stdin>>;

/// Next trimmed line from stdin; `None` on EOF or "q".
async fn prompt(input: &mut Input, label: &str) -> std::io::Result<Option<String>> {
    println!("{label}");
    match input.next_line().await? {
        Some(line) if line.trim().eq_ignore_ascii_case("q") => Ok(None),
        Some(line) => Ok(Some(line.trim().to_string())),
        None => Ok(None),
    }
}

fn print_question(state: &Value) {
    let q = &state["question"];
    println!();
    println!(
        "── Round {}/{} · Score {} · {} · {} ──",
        state["round"], state["roundTotal"], state["score"],
        q["categoryLabel"].as_str().unwrap_or(""),
        q["region"].as_str().unwrap_or("")
    );
    match q["flagUrl"].as_str() {
        Some(url) => println!("  Which nation flies this flag?  {url}"),
        None => println!("  {}", q["prompt"].as_str().unwrap_or("")),
    }
    if let Some(options) = q["options"].as_array() {
        for (i, opt) in options.iter().enumerate() {
            println!("   {}) {}", i + 1, opt.as_str().unwrap_or(""));
        }
    }
}

fn print_feedback(state: &Value) {
    let f = &state["feedback"];
    let name = f["correctName"].as_str().unwrap_or("");
    if f["isSkipped"].as_bool().unwrap_or(false) {
        println!("  ⏭  Skipped. The answer was {name}.");
    } else if f["isCorrect"].as_bool().unwrap_or(false) {
        println!("  ✓  Correct! {name}.");
    } else {
        println!("  ✗  Not quite. The answer was {name}.");
    }
    println!("  Fun fact: {}", f["funFact"].as_str().unwrap_or(""));
    let d = &f["discovery"];
    if let (Some(label), Some(value)) = (d["label"].as_str(), d["value"].as_str()) {
        println!("  {label}: {value}");
    }
}

fn parse_mode(choice: &str, default: DifficultyMode) -> Option<DifficultyMode> {
    match choice {
        ""  => Some(default),
        "1" => Some(DifficultyMode::Easy),
        "2" => Some(DifficultyMode::Classic),
        "3" => Some(DifficultyMode::Hard),
        other => other.parse().ok(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let cfg = load_config_from_env();
    let session = Session::new(cfg.dataset(), cfg.rng_seed);
    let game = FeedbackScheduler::with_delay(session, cfg.feedback_delay());
    let default_mode = cfg.default_mode();
    info!(target: "config", seeded = cfg.rng_seed.is_some(), delay = ?game.delay(), "Game ready");

    let mut input: Input = BufReader::new(tokio::io::stdin()).lines();

    println!("Global Trivia Pro · Cultures • Regions • Facts");
    loop {
        let (status, state) = {
            let session = game.lock().await;
            (session.status(), view::render_state(&session))
        };
        match status {
            GameStatus::Start => {
                if prompt(&mut input, "\nPress Enter to start your expedition (q to quit).").await?.is_none() {
                    break;
                }
                game.lock().await.open_mode_select();
            }
            GameStatus::ModeSelect => {
                println!("\nSelect difficulty:");
                if let Some(menu) = view::mode_menu().as_array() {
                    for (i, item) in menu.iter().enumerate() {
                        println!(
                            "   {}) {:<8} {}",
                            i + 1,
                            item["mode"].as_str().unwrap_or(""),
                            item["blurb"].as_str().unwrap_or("")
                        );
                    }
                }
                let label = format!("Choice [Enter = {default_mode}, b = back]:");
                let Some(choice) = prompt(&mut input, &label).await? else { break };
                if choice.eq_ignore_ascii_case("b") {
                    game.lock().await.return_home();
                } else if let Some(mode) = parse_mode(&choice, default_mode) {
                    game.select_mode(mode).await;
                } else {
                    println!("  Unknown choice {choice:?}.");
                }
            }
            GameStatus::Playing => {
                print_question(&state);
                let Some(choice) = prompt(&mut input, "Answer number, s = skip, q = quit:").await? else { break };
                let options = state["question"]["options"].as_array().cloned().unwrap_or_default();
                let accepted = if choice.eq_ignore_ascii_case("s") {
                    game.skip().await
                } else {
                    match choice.parse::<usize>().ok().and_then(|n| options.get(n.wrapping_sub(1))) {
                        Some(opt) => game.answer(opt.as_str().unwrap_or("")).await,
                        None => {
                            println!("  Pick a number between 1 and {}.", options.len());
                            false
                        }
                    }
                };
                if accepted {
                    print_feedback(&view::render_state(&*game.lock().await));
                    game.wait_pending().await;
                }
            }
            GameStatus::Feedback => {
                game.wait_pending().await;
            }
            GameStatus::Finished => {
                println!(
                    "\n🏆 Expedition complete! {} mode score: {}",
                    state["mode"].as_str().unwrap_or(""),
                    state["score"]
                );
                if prompt(&mut input, "Press Enter for a new expedition (q to quit).").await?.is_none() {
                    break;
                }
                game.lock().await.open_mode_select();
            }
        }
    }
    Ok(())
}
