use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::evaluate::{EvaluationResult, ResultStore, TagPerformance, round1};
use crate::model::Battle;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeaderboardEntry {
    pub participant_id: String,
    pub display_name: String,
    pub score: u32,
    pub accuracy: f64,
    pub rank: u32, // en base 1
}

/// Análisis completo de una batalla terminada: clasificación más
/// estadísticas agregadas. Vista derivada, se recalcula en cada
/// petición escaneando los resultados persistidos.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleAnalysis {
    pub battle_name: String,
    pub total_players: u32,
    pub highest_score: u32,
    pub lowest_score: u32,
    pub average_score: f64,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub tag_accuracy: Vec<TagPerformance>, // agregada entre participantes
}

// Orden de clasificación: puntuación descendente, desempate por
// entrega más temprana y después por id de participante. Determinista
// para una misma entrada.
fn ranking_order(a: &EvaluationResult, b: &EvaluationResult) -> Ordering {
    b.total_score
        .cmp(&a.total_score)
        .then_with(|| a.submitted_at.cmp(&b.submitted_at))
        .then_with(|| a.participant_id.cmp(&b.participant_id))
}

/// Construye la clasificación de una batalla a partir de todos sus
/// resultados evaluados. Sin resultados devuelve el análisis a cero,
/// nunca un error (no hay división entre cero que valga).
pub fn build_leaderboard(battle: &Battle, store: &ResultStore) -> BattleAnalysis {
    let mut results: Vec<&EvaluationResult> = store.results_for(&battle.battle_id).iter().collect();
    results.sort_by(|a, b| ranking_order(a, b));

    let leaderboard: Vec<LeaderboardEntry> = results
        .iter()
        .enumerate()
        .map(|(i, result)| LeaderboardEntry {
            participant_id: result.participant_id.clone(),
            display_name: battle
                .display_name_of(&result.participant_id)
                .unwrap_or(&result.participant_id)
                .to_string(),
            score: result.total_score,
            accuracy: result.accuracy,
            rank: (i + 1) as u32,
        })
        .collect();

    let scores: Vec<u32> = results.iter().map(|r| r.total_score).collect();
    let (highest_score, lowest_score, average_score) = if scores.is_empty() {
        (0, 0, 0.0)
    } else {
        let sum: u32 = scores.iter().sum();
        (
            *scores.iter().max().unwrap_or(&0),
            *scores.iter().min().unwrap_or(&0),
            round1(f64::from(sum) / scores.len() as f64),
        )
    };

    // Acumulado por etiqueta entre todos los participantes
    let mut tag_accuracy: Vec<TagPerformance> = Vec::new();
    for result in &results {
        for tag in &result.tag_wise {
            match tag_accuracy.iter_mut().find(|t| t.tag == tag.tag) {
                Some(acc) => {
                    acc.correct += tag.correct;
                    acc.total += tag.total;
                }
                None => tag_accuracy.push(tag.clone()),
            }
        }
    }

    BattleAnalysis {
        battle_name: battle.battle_name.clone(),
        total_players: results.len() as u32,
        highest_score,
        lowest_score,
        average_score,
        leaderboard,
        tag_accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::model::Participant;

    fn battle() -> Battle {
        Battle {
            battle_id: "b1".into(),
            battle_code: "NOVA-04".into(),
            battle_name: "Gran final".into(),
            questions: vec![],
            participants: vec![Participant {
                id: "p2".into(),
                display_name: "Bruno".into(),
            }],
            created_at: Utc::now(),
            tags: vec![],
        }
    }

    fn result(participant_id: &str, score: u32, minutes_ago: i64) -> EvaluationResult {
        EvaluationResult {
            battle_id: "b1".into(),
            participant_id: participant_id.to_string(),
            total_score: score,
            correct_count: score,
            incorrect_count: 0,
            pending_review_count: 0,
            accuracy: 100.0,
            tag_wise: vec![TagPerformance {
                tag: "algebra".into(),
                correct: score.min(2),
                total: 2,
            }],
            timeline: vec![],
            completion_time_seconds: 60,
            submitted_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    fn store_with(results: Vec<EvaluationResult>) -> ResultStore {
        let mut store = ResultStore::new();
        for r in results {
            store.record(r).expect("sin duplicados en el fixture");
        }
        store
    }

    #[test]
    fn ranks_by_score_with_earlier_submission_tiebreak() {
        // p2 y p3 empatan a 95; p3 entregó antes
        let store = store_with(vec![
            result("p1", 80, 5),
            result("p2", 95, 3),
            result("p3", 95, 10),
        ]);

        let analysis = build_leaderboard(&battle(), &store);
        let order: Vec<&str> = analysis
            .leaderboard
            .iter()
            .map(|e| e.participant_id.as_str())
            .collect();
        assert_eq!(order, vec!["p3", "p2", "p1"]);
        assert_eq!(analysis.leaderboard[0].rank, 1);
        assert_eq!(analysis.leaderboard[2].rank, 3);

        // Misma entrada, misma salida
        let again = build_leaderboard(&battle(), &store);
        let order_again: Vec<&str> = again
            .leaderboard
            .iter()
            .map(|e| e.participant_id.as_str())
            .collect();
        assert_eq!(order, order_again);
    }

    #[test]
    fn identical_timestamps_fall_back_to_participant_id() {
        let timestamp = Utc::now();
        let mut a = result("zoe", 50, 0);
        let mut b = result("alba", 50, 0);
        a.submitted_at = timestamp;
        b.submitted_at = timestamp;

        let analysis = build_leaderboard(&battle(), &store_with(vec![a, b]));
        assert_eq!(analysis.leaderboard[0].participant_id, "alba");
        assert_eq!(analysis.leaderboard[1].participant_id, "zoe");
    }

    #[test]
    fn aggregate_stats_and_display_names() {
        let store = store_with(vec![
            result("p1", 80, 5),
            result("p2", 95, 3),
            result("p3", 95, 10),
        ]);

        let analysis = build_leaderboard(&battle(), &store);
        assert_eq!(analysis.total_players, 3);
        assert_eq!(analysis.highest_score, 95);
        assert_eq!(analysis.lowest_score, 80);
        assert_eq!(analysis.average_score, 90.0);

        // p2 tiene nombre registrado en la batalla; el resto cae al id
        let bruno = analysis
            .leaderboard
            .iter()
            .find(|e| e.participant_id == "p2")
            .expect("p2 presente");
        assert_eq!(bruno.display_name, "Bruno");

        // Etiquetas agregadas entre los tres participantes
        assert_eq!(
            analysis.tag_accuracy,
            vec![TagPerformance {
                tag: "algebra".into(),
                correct: 6,
                total: 6,
            }]
        );
    }

    #[test]
    fn empty_battle_yields_zeroed_analysis() {
        let analysis = build_leaderboard(&battle(), &ResultStore::new());
        assert_eq!(analysis.total_players, 0);
        assert_eq!(analysis.highest_score, 0);
        assert_eq!(analysis.lowest_score, 0);
        assert_eq!(analysis.average_score, 0.0);
        assert!(analysis.leaderboard.is_empty());
        assert!(analysis.tag_accuracy.is_empty());
    }
}
