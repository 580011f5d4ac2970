pub mod data;
pub mod evaluate;
pub mod leaderboard;
pub mod model;
pub mod quiz;
pub mod scoring;
pub mod session;
pub mod user;
pub mod view_models;

pub use evaluate::{EvaluateError, EvaluationResult, ResultStore, evaluate};
pub use leaderboard::{BattleAnalysis, build_leaderboard};
pub use model::{Answer, Battle, Participant, Question, QuestionKind, SessionState, Submission};
pub use quiz::{Quiz, QuizOutcome};
pub use scoring::{ScoreResult, score_answer};
pub use session::BattleSession;
pub use user::User;
