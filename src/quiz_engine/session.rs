//! Session controller: round index, score, pool and the game state machine.
//!
//! ```text
//! START ──► MODE_SELECT ──► PLAYING ⇄ FEEDBACK ──► FINISHED
//!   ▲            │                                   │
//!   └────────────┘◄──────────────────────────────────┘
//! ```
//!
//! Answering or skipping moves PLAYING to FEEDBACK and hands back an
//! [`AdvanceTicket`]. The round only moves on when that ticket is redeemed
//! with [`Session::advance`], normally by the feedback timer. Every new
//! session bumps a generation counter, so a ticket issued for an older
//! session or round is refused.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::quiz_engine::{
    dataset::Dataset,
    generator::generate_question,
    models::{Country, DifficultyMode, Feedback, GameStatus, Question},
    pool::build_pool,
};

/// Score change for one answer under `mode`.
pub fn score_delta(mode: DifficultyMode, correct: bool) -> i32 {
    if correct {
        1
    } else {
        mode.wrong_answer_penalty()
    }
}

/// Proof that a round entered FEEDBACK; redeem it to move to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    pub generation: u64,
    pub round_index: usize,
}

pub struct Session {
    dataset: Dataset,
    rng: StdRng,
    status: GameStatus,
    mode: DifficultyMode,
    round_index: usize,
    score: i32,
    pool: Vec<Country>,
    question: Option<Question>,
    feedback: Option<Feedback>,
    generation: u64,
}

impl Session {
    /// A session at START. `rng_seed: Some(_)` makes every shuffle reproducible.
    pub fn new(dataset: Dataset, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self {
            dataset,
            rng,
            status: GameStatus::Start,
            mode: DifficultyMode::default(),
            round_index: 0,
            score: 0,
            pool: Vec::new(),
            question: None,
            feedback: None,
            generation: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> DifficultyMode {
        self.mode
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// 0-based index of the current round.
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Rounds this session will actually play.
    pub fn round_total(&self) -> usize {
        self.pool.len().min(self.mode.round_limit())
    }

    pub fn pool(&self) -> &[Country] {
        &self.pool
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// START or FINISHED → MODE_SELECT, dropping the previous session's
    /// score, pool and round. Repeating it from MODE_SELECT is a no-op.
    /// Returns false mid-round.
    pub fn open_mode_select(&mut self) -> bool {
        match self.status {
            GameStatus::Start | GameStatus::Finished => {
                self.clear_progress();
                self.status = GameStatus::ModeSelect;
                true
            }
            GameStatus::ModeSelect => true,
            _ => false,
        }
    }

    fn clear_progress(&mut self) {
        self.generation += 1;
        self.score = 0;
        self.round_index = 0;
        self.pool.clear();
        self.question = None;
        self.feedback = None;
    }

    /// MODE_SELECT → START.
    pub fn return_home(&mut self) -> bool {
        if self.status != GameStatus::ModeSelect {
            return false;
        }
        self.status = GameStatus::Start;
        true
    }

    /// Start a brand-new session in `mode`, discarding score, pool and any
    /// pending advance. Allowed from every state.
    pub fn select_mode(&mut self, mode: DifficultyMode) {
        self.clear_progress();
        self.mode = mode;
        self.pool = build_pool(&self.dataset, mode, &mut self.rng);
        self.question = generate_question(0, mode, &self.pool, &self.dataset, &mut self.rng);

        if self.question.is_some() {
            self.status = GameStatus::Playing;
            info!(
                target: "session",
                %mode, generation = self.generation, pool = self.pool.len(), rounds = self.round_total(),
                "Session started"
            );
        } else {
            self.status = GameStatus::Finished;
            warn!(target: "session", %mode, "Empty pool; session finished immediately");
        }
    }

    /// Score `selection` against the current answer. Ignored outside PLAYING.
    pub fn submit_answer(&mut self, selection: &str) -> Option<AdvanceTicket> {
        if self.status != GameStatus::Playing {
            debug!(target: "session", status = %self.status, "Answer ignored");
            return None;
        }
        let question = self.question.as_ref()?;
        let is_correct = question.is_correct(selection);
        let delta = score_delta(self.mode, is_correct);
        self.score += delta;
        self.feedback = Some(Feedback {
            is_correct,
            is_skipped: false,
            correct_name: question.correct_answer.name.clone(),
            fun_fact: question.correct_answer.fun_fact.clone(),
            discovery: question.discovery.clone(),
        });
        info!(
            target: "session",
            round = self.round_index, is_correct, delta, score = self.score,
            "Answer submitted"
        );
        Some(self.enter_feedback())
    }

    /// Reveal the answer without scoring. Ignored outside PLAYING.
    pub fn skip(&mut self) -> Option<AdvanceTicket> {
        if self.status != GameStatus::Playing {
            debug!(target: "session", status = %self.status, "Skip ignored");
            return None;
        }
        let question = self.question.as_ref()?;
        self.feedback = Some(Feedback {
            is_correct: false,
            is_skipped: true,
            correct_name: question.correct_answer.name.clone(),
            fun_fact: question.correct_answer.fun_fact.clone(),
            discovery: question.discovery.clone(),
        });
        info!(target: "session", round = self.round_index, "Question skipped");
        Some(self.enter_feedback())
    }

    fn enter_feedback(&mut self) -> AdvanceTicket {
        self.status = GameStatus::Feedback;
        AdvanceTicket {
            generation: self.generation,
            round_index: self.round_index,
        }
    }

    /// Leave FEEDBACK: clear it and play the next round, or finish.
    ///
    /// Returns false and changes nothing when `ticket` is stale.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> bool {
        if ticket.generation != self.generation
            || ticket.round_index != self.round_index
            || self.status != GameStatus::Feedback
        {
            debug!(
                target: "session",
                ?ticket, generation = self.generation, round = self.round_index, status = %self.status,
                "Stale advance ticket dropped"
            );
            return false;
        }

        self.feedback = None;
        let next = self.round_index + 1;
        if next >= self.mode.round_limit() || next >= self.pool.len() {
            self.status = GameStatus::Finished;
            self.question = None;
            info!(target: "session", mode = %self.mode, score = self.score, rounds = next, "Session finished");
            return true;
        }

        self.round_index = next;
        self.question = generate_question(next, self.mode, &self.pool, &self.dataset, &mut self.rng);
        self.status = GameStatus::Playing;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(mode: DifficultyMode, seed: u64) -> Session {
        let mut s = Session::new(Dataset::builtin(), Some(seed));
        s.select_mode(mode);
        s
    }

    fn wrong_answer(s: &Session) -> String {
        let q = s.question().unwrap();
        q.options.iter().find(|o| **o != q.correct_answer.name).cloned().unwrap()
    }

    #[test]
    fn score_delta_table() {
        assert_eq!(score_delta(DifficultyMode::Hard, true), 1);
        assert_eq!(score_delta(DifficultyMode::Hard, false), -2);
        assert_eq!(score_delta(DifficultyMode::Classic, false), -1);
        assert_eq!(score_delta(DifficultyMode::Easy, false), 0);
    }

    #[test]
    fn select_mode_resets_and_starts_round_zero() {
        let s = playing(DifficultyMode::Classic, 1);
        assert_eq!(s.status(), GameStatus::Playing);
        assert_eq!(s.score(), 0);
        assert_eq!(s.round_index(), 0);
        assert_eq!(s.generation(), 1);
        assert_eq!(s.question().unwrap().correct_answer.id, s.pool()[0].id);
    }

    #[test]
    fn answer_enters_feedback_and_advance_moves_on() {
        let mut s = playing(DifficultyMode::Classic, 2);
        let name = s.question().unwrap().correct_answer.name.clone();
        let ticket = s.submit_answer(&name).unwrap();
        assert_eq!(s.status(), GameStatus::Feedback);
        assert_eq!(s.score(), 1);
        let fb = s.feedback().unwrap();
        assert!(fb.is_correct && !fb.is_skipped);
        assert_eq!(fb.correct_name, name);

        assert!(s.advance(ticket));
        assert_eq!(s.status(), GameStatus::Playing);
        assert_eq!(s.round_index(), 1);
        assert!(s.feedback().is_none());
        assert_eq!(s.question().unwrap().correct_answer.id, s.pool()[1].id);
    }

    #[test]
    fn actions_outside_playing_are_ignored() {
        let mut s = Session::new(Dataset::builtin(), Some(3));
        assert!(s.submit_answer("Japan").is_none());
        assert!(s.skip().is_none());
        assert_eq!(s.status(), GameStatus::Start);

        s.select_mode(DifficultyMode::Hard);
        let ticket = s.skip().unwrap();
        let score = s.score();
        assert!(s.submit_answer("anything").is_none(), "answers are disabled during feedback");
        assert!(s.skip().is_none());
        assert_eq!(s.score(), score);
        assert!(s.advance(ticket));
    }

    #[test]
    fn ticket_can_only_be_redeemed_once() {
        let mut s = playing(DifficultyMode::Easy, 4);
        let ticket = s.skip().unwrap();
        assert!(s.advance(ticket));
        assert!(!s.advance(ticket));
        assert_eq!(s.round_index(), 1);
    }

    #[test]
    fn ticket_from_previous_session_is_rejected() {
        let mut s = playing(DifficultyMode::Hard, 5);
        let stale = s.skip().unwrap();
        s.select_mode(DifficultyMode::Easy);
        let fresh = s.skip().unwrap();
        assert_eq!(stale.round_index, fresh.round_index);
        assert!(!s.advance(stale));
        assert_eq!(s.status(), GameStatus::Feedback);
        assert!(s.advance(fresh));
    }

    #[test]
    fn hard_mode_scoring_example() {
        let mut s = playing(DifficultyMode::Hard, 6);
        for _ in 0..5 {
            let name = s.question().unwrap().correct_answer.name.clone();
            let t = s.submit_answer(&name).unwrap();
            s.advance(t);
        }
        assert_eq!(s.score(), 5);
        let wrong = wrong_answer(&s);
        let t = s.submit_answer(&wrong).unwrap();
        assert_eq!(s.score(), 3);
        s.advance(t);
        let name = s.question().unwrap().correct_answer.name.clone();
        s.submit_answer(&name);
        assert_eq!(s.score(), 4);
    }

    #[test]
    fn score_can_go_negative_in_classic() {
        let mut s = playing(DifficultyMode::Classic, 7);
        let wrong = wrong_answer(&s);
        s.submit_answer(&wrong);
        assert_eq!(s.score(), -1);
    }

    #[test]
    fn easy_mode_wrong_answer_and_skip_leave_score_unchanged() {
        let mut s = playing(DifficultyMode::Easy, 8);
        let wrong = wrong_answer(&s);
        let t = s.submit_answer(&wrong).unwrap();
        assert_eq!(s.score(), 0);
        assert!(!s.feedback().unwrap().is_correct);
        s.advance(t);
        s.skip();
        assert_eq!(s.score(), 0);
        let fb = s.feedback().unwrap();
        assert!(fb.is_skipped && !fb.is_correct);
    }

    #[test]
    fn finished_session_can_return_to_mode_select() {
        let mut s = playing(DifficultyMode::Easy, 9);
        while s.status() != GameStatus::Finished {
            let t = s.skip().unwrap();
            s.advance(t);
        }
        assert!(s.question().is_none());
        assert!(s.open_mode_select());
        assert_eq!(s.status(), GameStatus::ModeSelect);
        assert!(s.open_mode_select());
        assert_eq!(s.status(), GameStatus::ModeSelect);
        assert!(s.return_home());
        assert_eq!(s.status(), GameStatus::Start);
        assert!(!s.return_home());
    }

    #[test]
    fn mode_select_is_not_reachable_mid_round() {
        let mut s = playing(DifficultyMode::Classic, 10);
        assert!(!s.open_mode_select());
        assert_eq!(s.status(), GameStatus::Playing);
    }

    #[test]
    fn mode_select_after_finish_discards_the_old_session() {
        let mut s = playing(DifficultyMode::Hard, 11);
        while s.status() != GameStatus::Finished {
            let wrong = wrong_answer(&s);
            let t = s.submit_answer(&wrong).unwrap();
            s.advance(t);
        }
        assert!(s.score() < 0);
        let finished_generation = s.generation();

        assert!(s.open_mode_select());
        assert_eq!(s.score(), 0);
        assert_eq!(s.round_index(), 0);
        assert!(s.pool().is_empty());
        assert_eq!(s.round_total(), 0);
        assert!(s.question().is_none() && s.feedback().is_none());
        assert!(s.generation() > finished_generation);
    }
}
