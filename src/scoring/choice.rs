use std::collections::HashSet;

use super::ScoreResult;
use super::text_match::{normalize_answer, parse_option_index, split_selection};
use crate::model::ChoiceOption;

/// Corrige una pregunta de opción múltiple.
///
/// La respuesta puede venir como texto de opción o como índice en base 1
/// (la página de quiz envía índices, la de batalla envía textos). Con
/// varias opciones correctas, las entradas van separadas por `;` y el
/// conjunto enviado debe igualar exactamente al correcto: sin crédito
/// parcial.
pub fn grade_multiple_choice(options: &[ChoiceOption], marks: u32, value: &str) -> ScoreResult {
    let correct: HashSet<String> = options
        .iter()
        .filter(|opt| opt.is_correct)
        .map(|opt| normalize_answer(&opt.text))
        .collect();

    if correct.is_empty() {
        // Pregunta sin opción correcta marcada: nada puede puntuar.
        return ScoreResult::Incorrect;
    }

    let submitted: HashSet<String> = split_selection(value)
        .into_iter()
        .map(|entry| match parse_option_index(&entry, options.len()) {
            Some(idx) => normalize_answer(&options[idx].text),
            None => entry,
        })
        .collect();

    if submitted == correct {
        ScoreResult::Correct { marks }
    } else {
        ScoreResult::Incorrect
    }
}

/// Corrige verdadero/falso: comparación exacta (ignorando mayúsculas)
/// contra "true"/"false".
pub fn grade_true_false(expected: bool, marks: u32, value: &str) -> ScoreResult {
    let received = normalize_answer(value);
    let matches = match received.as_str() {
        "true" => expected,
        "false" => !expected,
        _ => false,
    };

    if matches {
        ScoreResult::Correct { marks }
    } else {
        ScoreResult::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(specs: &[(&str, bool)]) -> Vec<ChoiceOption> {
        specs
            .iter()
            .map(|(text, is_correct)| ChoiceOption {
                text: (*text).to_string(),
                is_correct: *is_correct,
            })
            .collect()
    }

    #[test]
    fn single_correct_option_matches_by_text() {
        let opts = options(&[("París", true), ("Londres", false)]);
        assert!(grade_multiple_choice(&opts, 1, "parís").is_correct());
        assert!(!grade_multiple_choice(&opts, 1, "Londres").is_correct());
    }

    #[test]
    fn option_can_be_selected_by_one_based_index() {
        let opts = options(&[("Roma", false), ("Berlín", true)]);
        assert!(grade_multiple_choice(&opts, 1, "2").is_correct());
        assert!(!grade_multiple_choice(&opts, 1, "1").is_correct());
    }

    #[test]
    fn multi_select_requires_exact_set() {
        let opts = options(&[("A", true), ("B", true), ("C", false)]);
        assert!(grade_multiple_choice(&opts, 2, "A;B").is_correct());
        assert!(grade_multiple_choice(&opts, 2, "b; a").is_correct());
        // Subconjunto o exceso: sin crédito parcial
        assert!(!grade_multiple_choice(&opts, 2, "A").is_correct());
        assert!(!grade_multiple_choice(&opts, 2, "A;B;C").is_correct());
    }

    #[test]
    fn question_without_correct_option_never_scores() {
        let opts = options(&[("A", false), ("B", false)]);
        assert!(!grade_multiple_choice(&opts, 1, "A").is_correct());
    }

    #[test]
    fn true_false_matches_ignoring_case() {
        assert!(grade_true_false(true, 1, "TRUE").is_correct());
        assert!(grade_true_false(false, 1, " false ").is_correct());
        assert!(!grade_true_false(true, 1, "false").is_correct());
        assert!(!grade_true_false(true, 1, "verdad").is_correct());
    }
}
