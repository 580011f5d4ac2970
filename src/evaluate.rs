use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Answer, Battle, Submission};
use crate::scoring::{ScoreResult, score_answer};

/// Aciertos por etiqueta de tema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagPerformance {
    pub tag: String,
    pub correct: u32,
    pub total: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimelineEntry {
    pub question_id: String,
    pub correct: bool,
    pub time_taken: u32,
}

/// Resultado de evaluar la entrega de un participante. Se persiste uno
/// por par (batalla, participante).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EvaluationResult {
    pub battle_id: String,
    pub participant_id: String,
    pub total_score: u32,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub pending_review_count: u32, // párrafos a la espera de revisión
    pub accuracy: f64,             // porcentaje con un decimal
    pub tag_wise: Vec<TagPerformance>,
    pub timeline: Vec<TimelineEntry>,
    pub completion_time_seconds: u32,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    /// Segunda evaluación para el mismo par (batalla, participante):
    /// se conserva la primera, la repetición se rechaza.
    AlreadyEvaluated {
        battle_id: String,
        participant_id: String,
    },
    /// La entrega referencia otra batalla.
    WrongBattle { expected: String, received: String },
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluateError::AlreadyEvaluated {
                battle_id,
                participant_id,
            } => write!(
                f,
                "el participante {participant_id} ya fue evaluado en la batalla {battle_id}"
            ),
            EvaluateError::WrongBattle { expected, received } => write!(
                f,
                "la entrega es de la batalla {received}, se esperaba {expected}"
            ),
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Redondeo a un decimal para porcentajes de presentación.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Evalúa una entrega completa contra las preguntas de la batalla.
///
/// El orden de la batalla manda: la línea temporal sigue la lista de
/// preguntas, no el orden de llegada de las respuestas. Respuestas
/// duplicadas o con id desconocido son anomalías de integridad: se
/// registran en el log y se ignoran, nunca tumban la evaluación.
pub fn evaluate(battle: &Battle, submission: &Submission) -> EvaluationResult {
    let mut by_question: HashMap<&str, &Answer> = HashMap::new();
    for answer in &submission.answers {
        if battle.question_by_id(&answer.question_id).is_none() {
            log::warn!(
                "batalla {}: respuesta para pregunta desconocida {}",
                battle.battle_id,
                answer.question_id
            );
            continue;
        }
        if by_question.contains_key(answer.question_id.as_str()) {
            // A lo sumo una respuesta por pregunta: gana la primera
            log::warn!(
                "batalla {}: respuesta duplicada para {}",
                battle.battle_id,
                answer.question_id
            );
            continue;
        }
        by_question.insert(answer.question_id.as_str(), answer);
    }

    let mut total_score = 0;
    let mut correct_count = 0;
    let mut pending_review_count = 0;
    let mut tags: Vec<TagPerformance> = Vec::new();
    let mut timeline = Vec::new();

    for question in &battle.questions {
        let answer = by_question.get(question.id.as_str()).copied();
        let result = score_answer(question, answer);

        total_score += result.marks_awarded();
        if result.is_correct() {
            correct_count += 1;
        }
        if result == ScoreResult::PendingReview {
            pending_review_count += 1;
        }

        if let Some(tag) = &question.tag {
            let idx = match tags.iter().position(|t| &t.tag == tag) {
                Some(i) => i,
                None => {
                    tags.push(TagPerformance {
                        tag: tag.clone(),
                        correct: 0,
                        total: 0,
                    });
                    tags.len() - 1
                }
            };
            tags[idx].total += 1;
            if result.is_correct() {
                tags[idx].correct += 1;
            }
        }

        timeline.push(TimelineEntry {
            question_id: question.id.clone(),
            correct: result.is_correct(),
            time_taken: answer.map(|a| a.time_taken).unwrap_or(0),
        });
    }

    let total_questions = battle.questions.len() as u32;
    let accuracy = if total_questions == 0 {
        0.0
    } else {
        round1(f64::from(correct_count) / f64::from(total_questions) * 100.0)
    };

    EvaluationResult {
        battle_id: battle.battle_id.clone(),
        participant_id: submission.participant_id.clone(),
        total_score,
        correct_count,
        incorrect_count: total_questions - correct_count,
        pending_review_count,
        accuracy,
        tag_wise: tags,
        timeline,
        completion_time_seconds: submission.completion_time_seconds,
        submitted_at: Utc::now(),
    }
}

/// Almacén en memoria de resultados evaluados, de solo añadido.
///
/// Clave lógica: (batalla, participante). La política es "gana la
/// primera evaluación": recibir dos veces la misma entrega (reintento
/// tras fallo de red) no corrompe la puntuación. Evaluaciones de
/// participantes distintos son añadidos independientes; la tabla de
/// clasificación se recalcula escaneando, sin contadores compartidos.
pub struct ResultStore {
    results: HashMap<String, Vec<EvaluationResult>>, // battle_id -> resultados
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
        }
    }

    /// Registra una evaluación. Devuelve error si el par ya existe; el
    /// resultado guardado no se toca.
    pub fn record(&mut self, result: EvaluationResult) -> Result<(), EvaluateError> {
        let bucket = self.results.entry(result.battle_id.clone()).or_default();

        if bucket
            .iter()
            .any(|r| r.participant_id == result.participant_id)
        {
            return Err(EvaluateError::AlreadyEvaluated {
                battle_id: result.battle_id,
                participant_id: result.participant_id,
            });
        }

        bucket.push(result);
        Ok(())
    }

    /// Evalúa y registra en un paso, comprobando que la entrega sea de
    /// esta batalla.
    pub fn evaluate_and_record(
        &mut self,
        battle: &Battle,
        submission: &Submission,
    ) -> Result<EvaluationResult, EvaluateError> {
        if submission.battle_id != battle.battle_id {
            return Err(EvaluateError::WrongBattle {
                expected: battle.battle_id.clone(),
                received: submission.battle_id.clone(),
            });
        }

        let result = evaluate(battle, submission);
        self.record(result.clone())?;
        Ok(result)
    }

    pub fn results_for(&self, battle_id: &str) -> &[EvaluationResult] {
        self.results
            .get(battle_id)
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    pub fn result_of(&self, battle_id: &str, participant_id: &str) -> Option<&EvaluationResult> {
        self.results_for(battle_id)
            .iter()
            .find(|r| r.participant_id == participant_id)
    }
}
