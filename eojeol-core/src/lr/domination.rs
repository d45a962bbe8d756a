//! Left-domination filtering

use crate::config::LrConfig;

use super::candidate::ScoredCandidate;

/// Division-by-zero guard for the score ratio test
const EPS: f64 = 1e-5;

/// Drop candidates whose Left span is subsumed by a longer, sufficiently
/// strong overlapping Left span
///
/// Candidates are examined strongest Left first; a remaining candidate can
/// suppress the current one only if its Left span is a strict superset.
/// O(n²) per word, acceptable for bounded word lengths.
pub(crate) fn filter_dominated(
    mut pool: Vec<ScoredCandidate>,
    config: &LrConfig,
) -> Vec<ScoredCandidate> {
    pool.sort_by(|a, b| {
        b.left_score
            .total_cmp(&a.left_score)
            .then_with(|| a.base.right_end.cmp(&b.base.right_end))
            .then_with(|| a.base.left_begin.cmp(&b.base.left_begin))
            .then_with(|| a.base.left_end.cmp(&b.base.left_end))
    });

    let mut kept = Vec::new();
    while !pool.is_empty() {
        let best = pool.remove(0);
        let (b, e) = (best.base.left_begin, best.base.left_end);
        let s = best.left_score;
        let suppressed = pool.iter().any(|c| {
            let (cb, ce) = (c.base.left_begin, c.base.left_end);
            let strict_superset = cb <= b && ce >= e && (cb < b || ce > e);
            strict_superset
                && (s - c.left_score < config.max_lscore_difference
                    || (c.left_score > config.ensurable_score_l * 0.5
                        && (s + EPS) / (c.left_score + EPS) < config.max_lscore_diffratio))
        });
        if !suppressed {
            kept.push(best);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lr::candidate::Candidate;

    fn scored(left: &str, b: usize, e: usize, score: f64) -> ScoredCandidate {
        ScoredCandidate {
            base: Candidate {
                left: left.to_string(),
                right: String::new(),
                left_begin: b,
                left_end: e,
                right_end: e,
            },
            left_score: score,
            right_score: 0.0,
        }
    }

    #[test]
    fn test_longer_slightly_weaker_suppresses_shorter() {
        // 파스 0.75 over [0,2) vs 파스타 0.7 over [0,3): the gap 0.05 is
        // within the default max_lscore_difference, so the shorter loses
        let pool = vec![scored("파스", 0, 2, 0.75), scored("파스타", 0, 3, 0.7)];
        let kept = filter_dominated(pool, &LrConfig::default());
        let lefts: Vec<&str> = kept.iter().map(|c| c.base.left.as_str()).collect();
        assert_eq!(lefts, vec!["파스타"]);
    }

    #[test]
    fn test_small_difference_threshold_keeps_shorter() {
        let config = LrConfig {
            max_lscore_difference: 0.01,
            ..Default::default()
        };
        let pool = vec![scored("파스", 0, 2, 0.75), scored("파스타", 0, 3, 0.7)];
        let kept = filter_dominated(pool, &config);
        let lefts: Vec<&str> = kept.iter().map(|c| c.base.left.as_str()).collect();
        assert_eq!(lefts, vec!["파스", "파스타"]);
    }

    #[test]
    fn test_non_superset_never_suppresses() {
        // overlapping but not a superset: both survive
        let pool = vec![scored("나다", 1, 3, 0.9), scored("가나", 0, 2, 0.89)];
        let kept = filter_dominated(pool, &LrConfig::default());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_identical_span_is_not_a_suppressor() {
        let pool = vec![scored("가나", 0, 2, 0.9), scored("가나", 0, 2, 0.9)];
        let kept = filter_dominated(pool, &LrConfig::default());
        assert_eq!(kept.len(), 2);
    }
}
