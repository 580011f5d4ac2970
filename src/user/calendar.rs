use chrono::Utc;

use super::*;

impl User {
    pub fn add_calendar_task(&mut self, task: CalendarTask) {
        self.calendar_data.push(task);
    }

    /// Marca la tarea como completada y anota la finalización.
    ///
    /// Un `task_id` desconocido no es un error: la tarea pudo borrarse
    /// en otro dispositivo; la marca simplemente no aplica. El log de
    /// finalizaciones se anota igualmente, como hace la plataforma.
    pub fn record_completion(&mut self, task_id: &str) {
        if let Some(task) = self.calendar_data.iter_mut().find(|t| t.task_id == task_id) {
            task.status = TaskStatus::Completed;
        }
        self.completed_tasks.push(CompletionLogEntry {
            task_id: task_id.to_string(),
            completed_at: Utc::now(),
        });
    }

    pub fn pending_tasks(&self) -> Vec<&CalendarTask> {
        self.calendar_data
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .collect()
    }
}
