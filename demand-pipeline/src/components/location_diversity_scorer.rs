use async_trait::async_trait;
use std::collections::HashMap;

use crate::scorer::Scorer;
use crate::types::{MatrixQuery, MatrixRow};

/// Decay applied for each earlier row from the same location.
const LOCATION_DECAY: f64 = 0.85;

/// Minimum fraction of the original score a row can keep.
const DECAY_FLOOR: f64 = 0.5;

/// Dampens repeated rows from the same warehouse so the top of the
/// digest is not a single location's shortage list. The first row per
/// location keeps its full score; each repeat decays it, down to a
/// floor.
pub struct LocationDiversityScorer;

#[async_trait]
impl Scorer<MatrixQuery, MatrixRow> for LocationDiversityScorer {
    async fn score(
        &self,
        _query: &MatrixQuery,
        candidates: &[MatrixRow],
    ) -> Result<Vec<MatrixRow>, String> {
        let mut seen: HashMap<&str, u32> = HashMap::new();
        Ok(candidates
            .iter()
            .map(|row| {
                let repeats = seen.entry(row.location.as_str()).or_insert(0);
                let factor = LOCATION_DECAY.powi(*repeats as i32).max(DECAY_FLOOR);
                *repeats += 1;

                let mut scored = row.clone();
                scored.priority_score = row.priority_score.map(|s| s * factor);
                scored
            })
            .collect())
    }

    fn update(&self, candidate: &mut MatrixRow, scored: MatrixRow) {
        candidate.priority_score = scored.priority_score;
    }
}
