use serde::{Deserialize, Serialize};

use super::*;

/// Resumen que consume el panel del estudiante. Proyección derivada,
/// nunca se persiste por separado.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DashboardSummary {
    pub id: String,
    pub name: String,
    pub xp: u32,
    pub weekly_xp: u32,
    pub level: u32,
    pub streak: u32,
    pub personal_best_streak: u32,
    pub mastery_score: u8,
    pub focus_score: u8,
    pub accuracy_score: u8,
    pub rank: String,
    pub coins: u32,
    pub badges: usize,
    pub upcoming_tasks: Vec<CalendarTask>,
    pub courses: Vec<CourseSummary>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CourseSummary {
    pub title: String,
    pub progress: u8,
    pub completed: bool,
}

impl User {
    pub fn dashboard_summary(&self) -> DashboardSummary {
        // Próximas tareas: pendientes ordenadas por fecha, máximo 5
        let mut upcoming: Vec<&CalendarTask> = self.pending_tasks();
        upcoming.sort_by_key(|t| t.date);

        DashboardSummary {
            id: self.id.clone(),
            name: self.username.clone(),
            xp: self.xp,
            weekly_xp: self.weekly_xp,
            level: self.level,
            streak: self.streak_days,
            personal_best_streak: self.personal_best_streak,
            mastery_score: self.mastery_score,
            focus_score: self.focus_score,
            accuracy_score: self.accuracy_score,
            rank: self.current_rank.clone(),
            coins: self.coins,
            badges: self.badges.len(),
            upcoming_tasks: upcoming.into_iter().take(5).cloned().collect(),
            courses: self
                .enrolled_courses
                .iter()
                .map(|c| CourseSummary {
                    title: c.title.clone(),
                    progress: c.progress,
                    completed: c.completed,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn summary_caps_upcoming_tasks_at_five_sorted_by_date() {
        let mut user = User::new("u1", "ana");
        for i in 0..7i64 {
            user.add_calendar_task(CalendarTask {
                task_id: format!("t{i}"),
                title: format!("Tarea {i}"),
                description: String::new(),
                // Insertadas en orden inverso de fecha
                date: Utc::now() + Duration::days(7 - i),
                status: TaskStatus::Pending,
                priority: TaskPriority::Medium,
                category: "General".into(),
            });
        }

        let summary = user.dashboard_summary();
        assert_eq!(summary.upcoming_tasks.len(), 5);
        assert_eq!(summary.upcoming_tasks[0].task_id, "t6");
    }

    #[test]
    fn summary_mirrors_progress_fields() {
        let mut user = User::new("u1", "ana");
        user.add_xp(130);
        user.update_streak(true);
        user.award_badge("first-quiz");
        user.enroll_course("c1", "Rust desde cero");

        let summary = user.dashboard_summary();
        assert_eq!(summary.level, 2);
        assert_eq!(summary.xp, 30);
        assert_eq!(summary.weekly_xp, 130);
        assert_eq!(summary.streak, 1);
        assert_eq!(summary.badges, 1);
        assert_eq!(summary.courses.len(), 1);
        assert_eq!(summary.rank, "Bronze");
    }
}
