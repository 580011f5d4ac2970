use super::*;

impl BattleSession {
    /// Registra la respuesta de la pregunta actual y avanza.
    ///
    /// Entrada vacía se guarda como respuesta en blanco (saltada); el
    /// motor de corrección la tratará como "sin respuesta". Fuera de
    /// `InProgress` la llamada se ignora.
    pub fn submit_answer(&mut self, value: &str) {
        let index = match self.state {
            SessionState::InProgress(i) => i,
            _ => return,
        };

        let question = &self.battle.questions[index];
        let budget = time_budget(question);
        self.answers.push(Answer {
            question_id: question.id.clone(),
            value: value.trim().to_string(),
            time_taken: budget.saturating_sub(self.remaining),
            is_auto: false,
        });

        self.advance(index);
    }

    /// Avanza el reloj de la pregunta actual. Si la cuenta atrás llega
    /// a cero, registra la respuesta centinela y avanza sola.
    pub fn tick(&mut self, seconds: u32) {
        let index = match self.state {
            SessionState::InProgress(i) => i,
            _ => return,
        };

        let consumed = seconds.min(self.remaining);
        self.remaining -= consumed;
        self.elapsed += consumed;

        if self.remaining == 0 {
            self.time_expired(index);
        }
    }

    // Equivale a responder con el centinela y flag is_auto.
    fn time_expired(&mut self, index: usize) {
        let question = &self.battle.questions[index];
        self.answers.push(Answer {
            question_id: question.id.clone(),
            value: TIME_UP_ANSWER.to_string(),
            time_taken: time_budget(question),
            is_auto: true,
        });

        self.advance(index);
    }

    fn advance(&mut self, from: usize) {
        let next = from + 1;
        if next < self.battle.questions.len() {
            self.state = SessionState::InProgress(next);
            self.remaining = time_budget(&self.battle.questions[next]);
        } else {
            self.state = SessionState::Submitted;
            self.remaining = 0;
        }
    }

    /// Ensambla la entrega final. Disparo único: la primera llamada
    /// tras `Submitted` devuelve la carga; cualquier repetición (por
    /// ejemplo, carrera entre temporizador y "finalizar" manual)
    /// devuelve `None` y no duplica la entrega.
    pub fn take_submission(&mut self) -> Option<Submission> {
        if self.state != SessionState::Submitted || self.finalized {
            return None;
        }
        self.finalized = true;

        Some(Submission {
            battle_id: self.battle.battle_id.clone(),
            participant_id: self.participant_id.clone(),
            answers: self.answers.clone(),
            completion_time_seconds: self.elapsed,
        })
    }

    /// Cierra el ciclo tras la evaluación en servidor. Estado terminal.
    pub fn mark_evaluated(&mut self) {
        if self.state == SessionState::Submitted && self.finalized {
            self.state = SessionState::Evaluated;
        }
    }
}
