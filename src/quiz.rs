use serde::{Deserialize, Serialize};

use crate::model::{Answer, Question};
use crate::scoring::score_answer;
use crate::user::User;

/// Quiz de curso: un único envío con todas las respuestas, corrección
/// inmediata. Mucho más simple que una batalla: sin temporizador por
/// pregunta ni clasificación.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quiz {
    pub quiz_id: String,
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(default = "default_passing_percentage")]
    pub passing_percentage: f64,
    #[serde(default)]
    pub time_limit: u32, // minutos; 0 = sin límite
}

fn default_passing_percentage() -> f64 {
    50.0
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizOutcome {
    pub quiz_id: String,
    pub score: u32,
    pub correct_count: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub passed: bool,
}

impl Quiz {
    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(|q| q.marks).sum()
    }

    /// Corrige un intento completo. Preguntas sin respuesta puntúan
    /// cero; un quiz sin preguntas (o sin nota posible) da 0% sin
    /// dividir entre cero.
    pub fn attempt(&self, answers: &[Answer]) -> QuizOutcome {
        let mut score = 0;
        let mut correct_count = 0;

        for question in &self.questions {
            let answer = answers.iter().find(|a| a.question_id == question.id);
            let result = score_answer(question, answer);
            score += result.marks_awarded();
            if result.is_correct() {
                correct_count += 1;
            }
        }

        let total_marks = self.total_marks();
        let percentage = if total_marks == 0 {
            0.0
        } else {
            crate::evaluate::round1(f64::from(score) / f64::from(total_marks) * 100.0)
        };

        QuizOutcome {
            quiz_id: self.quiz_id.clone(),
            score,
            correct_count,
            total_questions: self.questions.len() as u32,
            percentage,
            passed: percentage >= self.passing_percentage,
        }
    }
}

/// Vuelca el intento sobre el usuario: historial como blob opaco y XP
/// por los puntos conseguidos. El guardado lo confirma el llamador.
pub fn apply_quiz_outcome(user: &mut User, outcome: &QuizOutcome) {
    let blob = match serde_yaml::to_value(outcome) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("no se pudo serializar el intento de quiz: {err}");
            serde_yaml::Value::Null
        }
    };
    user.record_attempt(&outcome.quiz_id, blob);
    user.apply_result(outcome.score);
}
