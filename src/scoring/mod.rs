use crate::model::{Answer, Question, QuestionKind};

pub mod choice;
pub mod text;
pub mod text_match;

pub use choice::{grade_multiple_choice, grade_true_false};
pub use text::grade_fill_blank;

/// Resultado determinista de corregir una respuesta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreResult {
    Correct { marks: u32 },
    Incorrect,
    /// Sin respuesta: entrada ausente, en blanco o centinela de tiempo
    /// agotado. Nunca es un error.
    NoAnswer,
    /// Párrafo: la corrección queda pendiente de revisión externa
    /// (humana o IA); el motor determinista no otorga nota.
    PendingReview,
}

impl ScoreResult {
    pub fn is_correct(&self) -> bool {
        matches!(self, ScoreResult::Correct { .. })
    }

    pub fn marks_awarded(&self) -> u32 {
        match self {
            ScoreResult::Correct { marks } => *marks,
            _ => 0,
        }
    }
}

/// Corrige una respuesta contra su pregunta.
///
/// `answer` ausente, en blanco o auto-enviada por el temporizador
/// puntúa como [`ScoreResult::NoAnswer`]: caso esperado, no fallo. El
/// texto centinela de tiempo agotado jamás se compara contra la clave.
pub fn score_answer(question: &Question, answer: Option<&Answer>) -> ScoreResult {
    let answer = match answer {
        Some(a) => a,
        None => return ScoreResult::NoAnswer,
    };

    if answer.is_auto || answer.value.trim().is_empty() {
        return ScoreResult::NoAnswer;
    }

    match &question.kind {
        QuestionKind::MultipleChoice { options } => {
            grade_multiple_choice(options, question.marks, &answer.value)
        }
        QuestionKind::TrueFalse { answer: expected } => {
            grade_true_false(*expected, question.marks, &answer.value)
        }
        QuestionKind::FillBlank { answer: expected } => {
            grade_fill_blank(expected, question.marks, &answer.value)
        }
        QuestionKind::Paragraph => ScoreResult::PendingReview,
    }
}

/// Mensaje para mostrar al estudiante tras corregir.
pub fn format_score_message(result: &ScoreResult) -> String {
    match result {
        ScoreResult::Correct { marks } => format!("✅ ¡Correcto! (+{marks})"),
        ScoreResult::Incorrect => "❌ Incorrecto.".into(),
        ScoreResult::NoAnswer => "⏰ Sin respuesta.".into(),
        ScoreResult::PendingReview => "📝 Pendiente de revisión.".into(),
    }
}
