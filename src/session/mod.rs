use serde::{Deserialize, Serialize};

use crate::model::{Answer, Battle, Question, QuestionKind, SessionState, Submission};

// Submódulos
pub mod actions;
pub mod queries;

// Presupuesto de tiempo por variante de pregunta (segundos).
// Constante de configuración, no dato por pregunta.
pub const CHOICE_TIME_SECS: u32 = 60;
pub const OPEN_TIME_SECS: u32 = 150;

/// Respuesta centinela registrada al agotarse el temporizador.
pub const TIME_UP_ANSWER: &str = "⏰ Tiempo agotado (sin respuesta)";

pub fn time_budget(question: &Question) -> u32 {
    match question.kind {
        QuestionKind::MultipleChoice { .. } | QuestionKind::TrueFalse { .. } => CHOICE_TIME_SECS,
        QuestionKind::FillBlank { .. } | QuestionKind::Paragraph => OPEN_TIME_SECS,
    }
}

/// Sesión de batalla de un participante: recorrido secuencial de la
/// lista de preguntas bajo presión de tiempo, con una única entrega.
///
/// `NotStarted → InProgress(i) → Submitted → Evaluated`. Una vez
/// registrada la respuesta de una pregunta el cursor avanza; eventos
/// tardíos para ese índice se ignoran (el temporizador y el "siguiente"
/// manual no pueden dispararse dos veces para la misma pregunta).
#[derive(Serialize, Deserialize, Clone)]
pub struct BattleSession {
    pub battle: Battle,
    pub participant_id: String,
    state: SessionState,
    remaining: u32, // cuenta atrás de la pregunta actual
    elapsed: u32,   // tiempo total consumido
    answers: Vec<Answer>,
    finalized: bool,
}

impl BattleSession {
    pub fn new(battle: Battle, participant_id: impl Into<String>) -> Self {
        Self {
            battle,
            participant_id: participant_id.into(),
            state: SessionState::NotStarted,
            remaining: 0,
            elapsed: 0,
            answers: Vec::new(),
            finalized: false,
        }
    }

    /// Arranca la sesión en la primera pregunta. Una batalla sin
    /// preguntas pasa directamente a `Submitted` con entrega vacía.
    pub fn start(&mut self) {
        if self.state != SessionState::NotStarted {
            return;
        }
        if self.battle.questions.is_empty() {
            self.state = SessionState::Submitted;
            return;
        }
        self.state = SessionState::InProgress(0);
        self.remaining = time_budget(&self.battle.questions[0]);
    }
}
