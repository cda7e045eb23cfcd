use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Progression through one run: index into the question list, running
/// tally, and the completion flag.
///
/// Invariants: `current_question` never exceeds the question count,
/// `score` never exceeds `current_question`, and neither ever decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuizState {
    pub current_question: usize,
    pub score: u32,
    pub is_complete: bool,
}

/// One user's pass through a fixed, ordered question sequence.
///
/// Each submitted answer advances the index by exactly one; the run
/// completes on the submission that answers the last question, at which
/// point the outcome carries a one-time completion payload.
#[derive(Clone, Debug)]
pub struct QuizRun {
    questions: Vec<Question>,
    state: QuizState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub state: QuizState,
    pub completion: Option<QuizCompletion>,
}

/// Emitted exactly once, on the submission that completes the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCompletion {
    pub final_score: u32,
    pub question_count: usize,
    /// Id of the question whose submission completed the run; used as
    /// the quiz id on the persisted progress record.
    pub quiz_id: i64,
}

impl QuizRun {
    /// Builds a run over the supplied sequence. An empty sequence has no
    /// run to make; callers surface that as the quiz-unavailable state.
    pub fn new(questions: Vec<Question>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }

        Some(Self {
            questions,
            state: QuizState::default(),
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, or `None` once the run is done.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.is_complete {
            return None;
        }
        self.questions.get(self.state.current_question)
    }

    /// Grades `selected_option` against the current question and advances.
    ///
    /// Exact-equality grading: one point on a match, nothing otherwise.
    /// The index moves forward regardless of correctness. Completion is
    /// detected on this submission when the question just answered was
    /// the last one, not on a later out-of-range access.
    pub fn submit_answer(&mut self, selected_option: u32) -> AppResult<AnswerOutcome> {
        if self.state.is_complete {
            return Err(AppError::ValidationError(
                "Quiz is already complete".to_string(),
            ));
        }

        let question = self
            .questions
            .get(self.state.current_question)
            .ok_or_else(|| {
                AppError::InternalError("Quiz run index out of range".to_string())
            })?;

        let correct = selected_option == question.correct_answer;
        if correct {
            self.state.score += 1;
        }

        let completing = self.state.current_question == self.questions.len() - 1;
        let answered_id = question.id;

        self.state.current_question += 1;
        self.state.is_complete = completing;

        let completion = completing.then(|| QuizCompletion {
            final_score: self.state.score,
            question_count: self.questions.len(),
            quiz_id: answered_id,
        });

        Ok(AnswerOutcome {
            correct,
            state: self.state,
            completion,
        })
    }
}
