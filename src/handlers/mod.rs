pub mod auth_handler;
pub mod leaderboard_handler;
pub mod profile_handler;
pub mod quiz_handler;

pub use auth_handler::{confirm_email, login, logout, refresh_token, register};
pub use leaderboard_handler::get_leaderboard;
pub use profile_handler::{get_profile, health_check, health_check_live, health_check_ready};
pub use quiz_handler::{get_quiz, start_quiz, submit_answer};
