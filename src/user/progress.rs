use chrono::Utc;

use super::*;

impl User {
    /// Suma XP y sube de nivel consumiendo el umbral `nivel * 100`.
    ///
    /// El umbral se reevalúa tras cada subida: un premio grande puede
    /// atravesar varios niveles en una sola llamada.
    pub fn add_xp(&mut self, amount: u32) {
        self.xp += amount;
        self.weekly_xp += amount;

        loop {
            let threshold = self.level * 100;
            if self.xp < threshold {
                break;
            }
            self.xp -= threshold;
            self.level += 1;
        }
    }

    /// Punto de entrada de los flujos de corrección: aplica el delta de
    /// XP que el quiz o la batalla haya decidido otorgar.
    pub fn apply_result(&mut self, xp_delta: u32) {
        self.add_xp(xp_delta);
    }

    /// Transición diaria de racha. El planificador externo la invoca a
    /// lo sumo una vez por usuario y día.
    pub fn update_streak(&mut self, active_today: bool) {
        if active_today {
            self.streak_days += 1;
            if self.streak_days > self.personal_best_streak {
                self.personal_best_streak = self.streak_days;
            }
        } else {
            self.streak_days = 0;
        }
    }

    pub fn award_badge(&mut self, badge_id: &str) {
        let already_earned = self.badges.iter().any(|b| b.badge_id == badge_id);
        if !already_earned {
            self.badges.push(BadgeAward {
                badge_id: badge_id.to_string(),
                earned_at: Utc::now(),
            });
        }
    }

    /// Guarda el resultado de un intento de quiz como blob opaco.
    pub fn record_attempt(&mut self, quiz_id: &str, result_data: serde_yaml::Value) {
        self.quiz_attempts.push(QuizAttempt {
            quiz_id: quiz_id.to_string(),
            result_data,
            attempt_date: Utc::now(),
        });
    }

    pub fn record_assignment_submission(&mut self, assignment_id: &str) {
        self.assignments.push(AssignmentSubmission {
            assignment_id: assignment_id.to_string(),
            submitted_at: Utc::now(),
            grade: None,
            feedback: None,
        });
    }

    /// Aplica la nota que la revisión externa (humana o IA) haya
    /// decidido. Si la entrega no existe, no hace nada.
    pub fn apply_assignment_grade(&mut self, assignment_id: &str, grade: u32, feedback: &str) {
        if let Some(submission) = self
            .assignments
            .iter_mut()
            .find(|a| a.assignment_id == assignment_id)
        {
            submission.grade = Some(grade);
            submission.feedback = Some(feedback.to_string());
        }
    }
}
