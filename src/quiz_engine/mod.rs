//! Core quiz engine: session pools, tiered distractors and round/score policy.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: countries, regions, categories, modes, questions, feedback |
//! | `dataset`     | Validated read-only country table (bundled or loaded from TOML) |
//! | `regions`     | Static near-region adjacency table |
//! | `pool`        | Fisher-Yates shuffle and per-mode session pool building |
//! | `distractors` | Thematic → regional → near-region → global candidate ranking |
//! | `phrasing`    | Question templates and the secondary discovery fact |
//! | `generator`   | Single entry point `generate_question()` |
//! | `session`     | Game state machine, scoring and advance tickets |
//! | `scheduler`   | Tokio-driven feedback timer with stale-advance protection |
//! | `error`       | Setup-time error type |

pub mod dataset;
pub mod distractors;
pub mod error;
pub mod generator;
pub mod models;
pub mod phrasing;
pub mod pool;
pub mod regions;
pub mod scheduler;
pub mod session;

pub use dataset::Dataset;
pub use error::{QuizError, Result};
pub use generator::generate_question;
pub use models::{
    Category, Country, DifficultyMode, DiscoveryFact, Feedback, GameStatus, Question, Region,
    Tier, CATEGORY_CYCLE,
};
pub use pool::build_pool;
pub use scheduler::{FeedbackScheduler, FEEDBACK_DURATION};
pub use session::{score_delta, AdvanceTicket, Session};
