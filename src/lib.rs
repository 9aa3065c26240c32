//! # country_trivia
//!
//! An offline, single-player trivia engine about countries: flags, mascots,
//! sports, cuisine, dress, landmarks, symbols and history.
//!
//! ## How it works
//!
//! 1. Create a [`Session`] over a [`Dataset`] (the bundled table or one loaded
//!    from TOML), optionally with an RNG seed.
//! 2. Call [`Session::select_mode`] with [`DifficultyMode::Easy`], `Classic` or
//!    `Hard`. The engine filters and shuffles the dataset into a session pool
//!    and builds round 0's question.
//! 3. Each round's answer is `pool[k % pool.len()]` and its category is the
//!    fixed eight-step cycle at `k % 8`. Wrong options are ranked by
//!    similarity: same attribute value, then same region, then a
//!    neighbouring region, then anything else.
//! 4. [`Session::submit_answer`] or [`Session::skip`] scores the round and
//!    returns an [`AdvanceTicket`]. Redeem it with [`Session::advance`], or
//!    let a [`FeedbackScheduler`] do that after [`FEEDBACK_DURATION`].
//!
//! ## Key features
//!
//! - **Deterministic**: pass `Some(seed)` to reproduce the same pool, options
//!   and phrasing every time.
//! - **Graceful degradation**: a tiny dataset yields shorter option lists,
//!   and actions sent in the wrong state are ignored. Neither is an error.
//! - **Stale-timer safe**: advance tickets carry a session generation, so a
//!   feedback timer from an abandoned session can never move a new one.
//!
//! ## Quick start
//!
//! ```rust
//! use country_trivia::{Dataset, DifficultyMode, GameStatus, Session};
//!
//! let mut session = Session::new(Dataset::builtin(), Some(42));
//! session.select_mode(DifficultyMode::Classic);
//!
//! let question = session.question().unwrap();
//! assert_eq!(question.options.len(), 4);
//! let answer = question.correct_answer.name.clone();
//!
//! let ticket = session.submit_answer(&answer).unwrap();
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.status(), GameStatus::Feedback);
//!
//! assert!(session.advance(ticket));
//! assert_eq!(session.round_index(), 1);
//! ```

pub mod config;
pub mod quiz_engine;
pub mod telemetry;
pub mod view;

// Convenience re-exports so callers can write `country_trivia::Session`
// without reaching into `quiz_engine::`.
pub use quiz_engine::{
    build_pool, generate_question, score_delta, AdvanceTicket, Category, Country, Dataset,
    DifficultyMode, DiscoveryFact, Feedback, FeedbackScheduler, GameStatus, Question, QuizError,
    Region, Session, Tier, CATEGORY_CYCLE, FEEDBACK_DURATION,
};
