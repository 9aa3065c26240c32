//! Deterministic walkthrough of one session per difficulty mode.
//!
//! Run with: `cargo run --example walkthrough`
//!
//! Each mode is played with a fixed seed, answering correctly on even rounds
//! and guessing the first wrong option on odd rounds, so the output shows
//! the option counts, distractor choices and penalties of every mode.
//!
//! ## Key concepts demonstrated
//!
//! - `Session::new(dataset, Some(seed))` reproduces the same pool every time.
//! - `submit_answer` returns an `AdvanceTicket`; `advance` redeems it. The
//!   terminal binary lets a `FeedbackScheduler` do that after 2.5 s instead.
//! - FLAG rounds carry a flag image URL; every other round carries a prompt.

use country_trivia::{Dataset, DifficultyMode, GameStatus, Session};

fn play(mode: DifficultyMode, seed: u64) {
    let mut session = Session::new(Dataset::builtin(), Some(seed));
    session.select_mode(mode);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{mode}]  {}  pool={}  rounds={}", mode.blurb(), session.pool().len(), session.round_total());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    while session.status() == GameStatus::Playing {
        let Some(q) = session.question().cloned() else { break };
        let round = session.round_index();
        let cue = if q.prompt.is_empty() { q.correct_answer.flag_image_url() } else { q.prompt.clone() };
        println!("  R{:>2} {:<8} {}", round + 1, q.category, cue);
        println!("       options: {}", q.options.join(" | "));

        let guess = if round % 2 == 0 {
            q.correct_answer.name.clone()
        } else {
            q.options
                .iter()
                .find(|o| **o != q.correct_answer.name)
                .cloned()
                .unwrap_or_default()
        };
        let Some(ticket) = session.submit_answer(&guess) else { break };
        if let Some(fb) = session.feedback() {
            let mark = if fb.is_correct { "✓" } else { "✗" };
            println!("       {mark} {}  score={}  ({})", fb.correct_name, session.score(), fb.fun_fact);
        }
        session.advance(ticket);
    }
    println!("  Final score: {}", session.score());
    println!();
}

fn main() {
    for (mode, seed) in [
        (DifficultyMode::Easy, 1),
        (DifficultyMode::Classic, 42),
        (DifficultyMode::Hard, 7),
    ] {
        play(mode, seed);
    }
}
