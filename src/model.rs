use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Variantes de pregunta soportadas por el motor de corrección.
///
/// El tipo es cerrado: un `kind` desconocido en el banco YAML falla al
/// deserializar, nunca llega al motor como caso mudo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice { options: Vec<ChoiceOption> },
    TrueFalse { answer: bool },
    FillBlank { answer: String },
    Paragraph,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub prompt: String, // Enunciado
    #[serde(default = "default_marks")]
    pub marks: u32,
    #[serde(default)]
    pub explanation: Option<String>, // Se muestra tras corregir
    #[serde(default)]
    pub tag: Option<String>, // Etiqueta para las analíticas
    #[serde(flatten)]
    pub kind: QuestionKind,
}

fn default_marks() -> u32 {
    1
}

impl Question {
    pub fn is_paragraph(&self) -> bool {
        matches!(self.kind, QuestionKind::Paragraph)
    }
}

/// Respuesta enviada para una pregunta concreta.
///
/// `value` vacío significa pregunta saltada o en blanco; `is_auto`
/// marca la respuesta centinela generada al agotarse el temporizador.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Answer {
    pub question_id: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub time_taken: u32, // segundos empleados en la pregunta
    #[serde(default)]
    pub is_auto: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Battle {
    pub battle_id: String,
    pub battle_code: String, // Código corto para unirse
    pub battle_name: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Battle {
    pub fn question_by_id(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(|q| q.marks).sum()
    }

    pub fn display_name_of(&self, participant_id: &str) -> Option<&str> {
        self.participants
            .iter()
            .find(|p| p.id == participant_id)
            .map(|p| p.display_name.as_str())
    }
}

/// Carga final de una sesión: lo único que ve el servidor.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Submission {
    pub battle_id: String,
    pub participant_id: String,
    pub answers: Vec<Answer>,
    pub completion_time_seconds: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress(usize), // Índice de la pregunta actual
    Submitted,
    Evaluated,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::NotStarted
    }
}
