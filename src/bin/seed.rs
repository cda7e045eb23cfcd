//! Seeds the quiz catalogue with the starter questions.
//!
//! Safe to re-run: does nothing if the collection already has rows.

use kidslearn_server::{
    config::Config,
    db::Database,
    models::domain::{Difficulty, Question},
    repositories::{MongoQuestionRepository, QuestionRepository},
};

fn starter_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "What comes after the number 5?",
            vec!["4".into(), "6".into(), "7".into(), "3".into()],
            1,
            Difficulty::Easy,
        ),
        Question::new(
            2,
            "Which animal says 'meow'?",
            vec!["Dog".into(), "Cat".into(), "Bird".into(), "Fish".into()],
            1,
            Difficulty::Easy,
        ),
        Question::new(
            3,
            "What is 3 + 5?",
            vec!["7".into(), "8".into(), "9".into(), "6".into()],
            1,
            Difficulty::Medium,
        ),
        Question::new(
            4,
            "How many sides does a triangle have?",
            vec!["2".into(), "3".into(), "4".into(), "5".into()],
            1,
            Difficulty::Medium,
        ),
        Question::new(
            5,
            "What is 4 × 6?",
            vec!["22".into(), "24".into(), "26".into(), "28".into()],
            1,
            Difficulty::Hard,
        ),
    ]
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let db = Database::connect(&config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let repository = MongoQuestionRepository::new(&db);
    repository
        .ensure_indexes()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let existing = repository
        .count()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    if existing > 0 {
        log::info!("Quiz catalogue already has {} questions, nothing to do", existing);
        return Ok(());
    }

    let questions = starter_questions();
    let count = questions.len();
    repository
        .insert_many(questions)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("Seeded {} starter questions", count);
    Ok(())
}
