use crate::models::domain::{Account, Difficulty, Profile, Question};


#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn starter_questions_cover_all_difficulties() {
        use crate::models::domain::Difficulty;

        let questions = starter_questions();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().any(|q| q.difficulty == Difficulty::Easy));
        assert!(questions.iter().any(|q| q.difficulty == Difficulty::Medium));
        assert!(questions.iter().any(|q| q.difficulty == Difficulty::Hard));
    }

    #[test]
    fn test_question_indexes_its_options() {
        let question = test_question(7, 2);
        assert_eq!(question.id, 7);
        assert!((question.correct_answer as usize) < question.options.len());
    }
}
