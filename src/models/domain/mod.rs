pub mod account;
pub mod profile;
pub mod progress;
pub mod question;
pub mod refresh_token;

pub use account::Account;
pub use profile::{Level, Profile};
pub use progress::ProgressRecord;
pub use question::{Difficulty, Question};
pub use refresh_token::RefreshToken;
