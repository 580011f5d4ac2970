// src/data.rs

use crate::model::{Battle, Question};
use crate::quiz::Quiz;

/// Carga el banco de batallas de demostración embebido
pub fn demo_battles() -> Vec<Battle> {
    let file_content = include_str!("data/demo_battles.yaml");
    battles_from_yaml(file_content).expect("No se pudo parsear el banco de batallas YAML")
}

/// Parsea un banco de batallas suministrado por el llamador.
pub fn battles_from_yaml(yaml: &str) -> Result<Vec<Battle>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

pub fn questions_from_yaml(yaml: &str) -> Result<Vec<Question>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

pub fn quizzes_from_yaml(yaml: &str) -> Result<Vec<Quiz>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
