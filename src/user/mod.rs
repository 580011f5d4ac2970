use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Submódulos
pub mod calendar;
pub mod courses;
pub mod dashboard;
pub mod progress;

pub use dashboard::DashboardSummary;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CalendarTask {
    pub task_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>, // fecha límite
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "General".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CompletionLogEntry {
    pub task_id: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EnrolledCourse {
    pub course_id: String,
    pub title: String, // caché para mostrar sin consultar el curso
    pub progress: u8,  // porcentaje 0-100
    pub completed: bool,
    pub last_accessed: DateTime<Utc>,
}

/// Intento de quiz: el resultado completo se guarda como blob opaco,
/// tal cual lo produjo el flujo que corrigió.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizAttempt {
    pub quiz_id: String,
    pub result_data: serde_yaml::Value,
    pub attempt_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssignmentSubmission {
    pub assignment_id: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub grade: Option<u32>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BadgeAward {
    pub badge_id: String,
    pub earned_at: DateTime<Utc>,
}

/// Registro de usuario: identidad + progreso + historial.
///
/// Toda mutación aquí es en memoria; confirmar en almacenamiento es
/// responsabilidad del llamador. XP nunca baja, el nivel solo sube y
/// la racha se reinicia a cero, nunca a negativo (campos sin signo).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,

    // Progreso de aprendizaje
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub weekly_xp: u32, // para el "+250 esta semana"
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub personal_best_streak: u32,
    #[serde(default)]
    pub total_study_time: u32, // minutos

    // Métricas 0-100 calculadas fuera de este núcleo
    #[serde(default)]
    pub mastery_score: u8,
    #[serde(default)]
    pub focus_score: u8,
    #[serde(default)]
    pub accuracy_score: u8,

    // Gamificación
    #[serde(default = "default_rank")]
    pub current_rank: String,
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub badges: Vec<BadgeAward>,

    // Calendario y tareas
    #[serde(default)]
    pub calendar_data: Vec<CalendarTask>,
    #[serde(default)]
    pub completed_tasks: Vec<CompletionLogEntry>,

    // Cursos e historial
    #[serde(default)]
    pub enrolled_courses: Vec<EnrolledCourse>,
    #[serde(default)]
    pub quiz_attempts: Vec<QuizAttempt>,
    #[serde(default)]
    pub assignments: Vec<AssignmentSubmission>,
}

fn default_level() -> u32 {
    1
}

fn default_rank() -> String {
    "Bronze".to_string()
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            xp: 0,
            weekly_xp: 0,
            level: 1,
            streak_days: 0,
            personal_best_streak: 0,
            total_study_time: 0,
            mastery_score: 0,
            focus_score: 0,
            accuracy_score: 0,
            current_rank: default_rank(),
            coins: 0,
            badges: Vec::new(),
            calendar_data: Vec::new(),
            completed_tasks: Vec::new(),
            enrolled_courses: Vec::new(),
            quiz_attempts: Vec::new(),
            assignments: Vec::new(),
        }
    }
}
