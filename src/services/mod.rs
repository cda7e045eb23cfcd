pub mod auth_service;
pub mod profile_service;
pub mod quiz_run;
pub mod quiz_service;

pub use auth_service::AuthService;
pub use profile_service::ProfileService;
pub use quiz_run::{AnswerOutcome, QuizCompletion, QuizRun, QuizState};
pub use quiz_service::QuizService;
