use super::ScoreResult;
use super::text_match::fuzzy_match;

/// Corrige fill-blank / texto libre con la coincidencia laxa de
/// [`fuzzy_match`]. Párrafos nunca pasan por aquí.
pub fn grade_fill_blank(expected: &str, marks: u32, value: &str) -> ScoreResult {
    if fuzzy_match(value, expected) {
        ScoreResult::Correct { marks }
    } else {
        ScoreResult::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_contained_answers_score() {
        assert!(grade_fill_blank("paris", 1, "Paris").is_correct());
        assert!(grade_fill_blank("paris", 1, "Paris is the capital").is_correct());
    }

    #[test]
    fn unrelated_answer_does_not_score() {
        assert!(!grade_fill_blank("paris", 1, "London").is_correct());
    }

    #[test]
    fn awarded_marks_follow_question_weight() {
        match grade_fill_blank("ok", 3, "ok") {
            ScoreResult::Correct { marks } => assert_eq!(marks, 3),
            other => panic!("esperaba Correct, obtuve {other:?}"),
        }
    }
}
