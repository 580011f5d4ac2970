// src/view_models.rs

use crate::leaderboard::BattleAnalysis;
use crate::user::{CalendarTask, EnrolledCourse, TaskPriority, TaskStatus};

#[derive(Clone, Debug)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub display_name: String,
    pub score: u32,
    pub accuracy: f64,
}

#[derive(Clone, Debug)]
pub struct TaskRow {
    pub title: String,
    pub completed: bool,
    pub priority: TaskPriority,
}

#[derive(Clone, Debug)]
pub struct CourseRow {
    pub title: String,
    pub progress: u8,
    pub completed: bool,
}

impl LeaderboardRow {
    pub fn label(&self) -> String {
        let medal = match self.rank {
            1 => "🥇",
            2 => "🥈",
            3 => "🥉",
            _ => "",
        };
        if medal.is_empty() {
            format!(
                "#{} {} — {} pts ({}%)",
                self.rank, self.display_name, self.score, self.accuracy
            )
        } else {
            format!(
                "{medal} {} — {} pts ({}%)",
                self.display_name, self.score, self.accuracy
            )
        }
    }
}

impl TaskRow {
    pub fn label(&self) -> String {
        if self.completed {
            format!("✅ {}", self.title)
        } else {
            let urgencia = match self.priority {
                TaskPriority::High => "🔴",
                TaskPriority::Medium => "🟡",
                TaskPriority::Low => "🟢",
            };
            format!("{urgencia} {}", self.title)
        }
    }
}

impl CourseRow {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} ✅", self.title)
        } else {
            format!("{} — {}%", self.title, self.progress)
        }
    }
}

pub fn leaderboard_rows(analysis: &BattleAnalysis) -> Vec<LeaderboardRow> {
    analysis
        .leaderboard
        .iter()
        .map(|entry| LeaderboardRow {
            rank: entry.rank,
            display_name: entry.display_name.clone(),
            score: entry.score,
            accuracy: entry.accuracy,
        })
        .collect()
}

pub fn task_row(task: &CalendarTask) -> TaskRow {
    TaskRow {
        title: task.title.clone(),
        completed: task.status == TaskStatus::Completed,
        priority: task.priority,
    }
}

pub fn course_row(course: &EnrolledCourse) -> CourseRow {
    CourseRow {
        title: course.title.clone(),
        progress: course.progress,
        completed: course.completed,
    }
}
