//! Combined L-R scoring with Right preemption

use std::collections::HashMap;

use crate::config::LrConfig;

use super::candidate::{RankedCandidate, ScoredCandidate};

/// Score surviving candidates, dropping those whose Right span collides
/// with a strong Left starting inside it
pub(crate) fn rank_candidates(
    mut pool: Vec<ScoredCandidate>,
    pref_left: &HashMap<String, f64>,
    pref_right: &HashMap<String, f64>,
    config: &LrConfig,
) -> Vec<RankedCandidate> {
    // (raw Left score, Left score plus preference bonus) per begin offset
    let mut begin_index: HashMap<usize, Vec<(f64, f64)>> = HashMap::new();
    for c in &pool {
        let boost = pref_left.get(&c.base.left).copied().unwrap_or(0.0);
        begin_index
            .entry(c.base.left_begin)
            .or_default()
            .push((c.left_score, c.left_score + boost));
    }

    // Strongest Left first, then the longer pair, earliest begin, longer Left
    pool.sort_by(|a, b| {
        b.left_score
            .total_cmp(&a.left_score)
            .then_with(|| b.base.total_len().cmp(&a.base.total_len()))
            .then_with(|| a.base.left_begin.cmp(&b.base.left_begin))
            .then_with(|| b.base.left_len().cmp(&a.base.left_len()))
    });

    let mut ranked = Vec::with_capacity(pool.len());
    for c in pool {
        if c.base.right_len() > 0 && right_preempted(&c, &begin_index, config) {
            continue;
        }
        let total = base_score(&c)
            + pref_left.get(&c.base.left).copied().unwrap_or(0.0)
            + pref_right.get(&c.base.right).copied().unwrap_or(0.0);
        ranked.push(RankedCandidate {
            scored: c,
            total_score: total,
        });
    }
    ranked
}

/// Doubling a standalone Left rewards complete dictionary words over
/// partial L+R matches
fn base_score(c: &ScoredCandidate) -> f64 {
    if c.base.right.is_empty() {
        c.left_score * 2.0
    } else {
        c.left_score + c.right_score
    }
}

fn right_preempted(
    c: &ScoredCandidate,
    begin_index: &HashMap<usize, Vec<(f64, f64)>>,
    config: &LrConfig,
) -> bool {
    for b in c.base.left_end..c.base.right_end {
        if let Some(entries) = begin_index.get(&b) {
            for &(left_score, boosted) in entries {
                if left_score >= config.ensurable_score_l
                    || boosted - c.right_score > config.ensurable_score_lr_diff
                {
                    return true;
                }
            }
        }
    }
    false
}
