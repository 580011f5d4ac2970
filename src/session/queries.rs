use super::*;

impl BattleSession {
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Pregunta bajo el cursor, si la sesión sigue en curso.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress(i) => self.battle.questions.get(i),
            _ => None,
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            SessionState::Submitted | SessionState::Evaluated
        )
    }

    /// Etiqueta de progreso para la barra superior, p. ej. "Q 2/5".
    pub fn progress_label(&self) -> String {
        let total = self.battle.questions.len();
        match self.state {
            SessionState::NotStarted => format!("Q 0/{total}"),
            SessionState::InProgress(i) => format!("Q {}/{total}", i + 1),
            _ => format!("Q {total}/{total}"),
        }
    }

    /// Reloj de la pregunta en formato mm:ss.
    pub fn timer_label(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn battle_with_open_question() -> Battle {
        Battle {
            battle_id: "b1".into(),
            battle_code: "NOVA-02".into(),
            battle_name: "Duelo".into(),
            questions: vec![Question {
                id: "q1".into(),
                prompt: "Explica...".into(),
                marks: 1,
                explanation: None,
                tag: None,
                kind: QuestionKind::FillBlank {
                    answer: "respuesta".into(),
                },
            }],
            participants: vec![],
            created_at: Utc::now(),
            tags: vec![],
        }
    }

    #[test]
    fn open_questions_get_the_long_budget() {
        let mut session = BattleSession::new(battle_with_open_question(), "ana");
        session.start();
        assert_eq!(session.remaining_seconds(), OPEN_TIME_SECS);
        assert_eq!(session.timer_label(), "02:30");
    }

    #[test]
    fn labels_track_the_cursor() {
        let mut session = BattleSession::new(battle_with_open_question(), "ana");
        assert_eq!(session.progress_label(), "Q 0/1");
        session.start();
        assert_eq!(session.progress_label(), "Q 1/1");
        assert!(session.current_question().is_some());

        session.submit_answer("respuesta");
        assert_eq!(session.progress_label(), "Q 1/1");
        assert!(session.current_question().is_none());
        assert!(session.is_finished());
    }
}
