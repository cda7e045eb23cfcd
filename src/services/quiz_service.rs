use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Level, ProgressRecord},
        dto::response::{AnswerResponse, CompletionNotification, QuestionView, QuizView},
    },
    repositories::{ProfileRepository, ProgressRepository, QuestionRepository},
    services::quiz_run::{QuizCompletion, QuizRun},
};

/// Drives quiz runs: loads the question catalogue, keeps one active run
/// per account, and persists results when a run completes.
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
    progress: Arc<dyn ProgressRepository>,
    profiles: Arc<dyn ProfileRepository>,
    runs: RwLock<HashMap<String, QuizRun>>,
}

impl QuizService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        progress: Arc<dyn ProgressRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            questions,
            progress,
            profiles,
            runs: RwLock::new(HashMap::new()),
        }
    }

    /// Starts a fresh run for the account, replacing any previous one.
    pub async fn start_run(&self, account_id: &str) -> AppResult<QuizView> {
        let questions = self.questions.list_by_difficulty().await?;

        let run = QuizRun::new(questions).ok_or_else(|| {
            AppError::NotFound("No quiz questions available".to_string())
        })?;

        let view = Self::view_of(&run);
        self.runs.write().await.insert(account_id.to_string(), run);

        Ok(view)
    }

    /// Snapshot of the account's run, for re-renders. Completed runs stay
    /// viewable until a new one is started.
    pub async fn current(&self, account_id: &str) -> AppResult<QuizView> {
        let runs = self.runs.read().await;
        let run = runs
            .get(account_id)
            .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;

        Ok(Self::view_of(run))
    }

    /// Grades one answer. On the submission that completes the run, the
    /// result is persisted best-effort and the response carries the
    /// one-time completion notification either way.
    pub async fn submit_answer(
        &self,
        account_id: &str,
        selected_option: u32,
    ) -> AppResult<AnswerResponse> {
        let mut runs = self.runs.write().await;
        let run = runs
            .get_mut(account_id)
            .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;

        let outcome = run.submit_answer(selected_option)?;
        let question_count = run.question_count();

        let completion = match &outcome.completion {
            Some(completion) => {
                self.persist_completion(account_id, completion).await;
                Some(CompletionNotification {
                    final_score: completion.final_score,
                    question_count: completion.question_count,
                })
            }
            None => None,
        };

        Ok(AnswerResponse {
            correct: outcome.correct,
            score: outcome.state.score,
            current_question: outcome.state.current_question,
            question_count,
            is_complete: outcome.state.is_complete,
            completion,
        })
    }

    /// Best-effort persistence: append the progress record and bump the
    /// profile's cumulative score. Failures are logged and swallowed so
    /// the completion notification still reaches the caller.
    async fn persist_completion(&self, account_id: &str, completion: &QuizCompletion) {
        let record = ProgressRecord::new(account_id, completion.quiz_id, completion.final_score);
        if let Err(err) = self.progress.insert(record).await {
            log::error!("Failed to save progress for account {}: {}", account_id, err);
        }

        match self
            .profiles
            .add_to_total_score(account_id, i64::from(completion.final_score))
            .await
        {
            Ok(profile) => {
                let earned = Level::for_total_score(profile.total_score);
                if earned != profile.current_level {
                    if let Err(err) = self.profiles.set_level(account_id, earned).await {
                        log::error!(
                            "Failed to update level for account {}: {}",
                            account_id,
                            err
                        );
                    }
                }
            }
            Err(err) => {
                log::error!(
                    "Failed to update total score for account {}: {}",
                    account_id,
                    err
                );
            }
        }
    }

    fn view_of(run: &QuizRun) -> QuizView {
        let state = run.state();
        QuizView {
            current_question: state.current_question,
            question_count: run.question_count(),
            score: state.score,
            is_complete: state.is_complete,
            question: run.current_question().map(QuestionView::from),
        }
    }
}
