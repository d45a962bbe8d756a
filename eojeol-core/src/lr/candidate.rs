//! Staged L-R candidate records and enumeration

use crate::dictionary::ScoreDict;

/// An (L, R) span pair anchored inside one word
///
/// Offsets are character offsets local to the word; `left_end` doubles as
/// the Right begin. Later pipeline stages wrap candidates in richer
/// records instead of mutating fields computed earlier.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub left: String,
    pub right: String,
    pub left_begin: usize,
    pub left_end: usize,
    pub right_end: usize,
}

impl Candidate {
    pub fn left_len(&self) -> usize {
        self.left_end - self.left_begin
    }

    pub fn right_len(&self) -> usize {
        self.right_end - self.left_end
    }

    pub fn total_len(&self) -> usize {
        self.right_end - self.left_begin
    }
}

/// Candidate with its dictionary scores attached
#[derive(Debug, Clone)]
pub(crate) struct ScoredCandidate {
    pub base: Candidate,
    pub left_score: f64,
    pub right_score: f64,
}

/// Candidate with its combined selection score
#[derive(Debug, Clone)]
pub(crate) struct RankedCandidate {
    pub scored: ScoredCandidate,
    pub total_score: f64,
}

impl RankedCandidate {
    pub fn left_begin(&self) -> usize {
        self.scored.base.left_begin
    }

    pub fn left_end(&self) -> usize {
        self.scored.base.left_end
    }

    pub fn right_end(&self) -> usize {
        self.scored.base.right_end
    }

    pub fn overlaps_span(&self, begin: usize, end: usize) -> bool {
        self.left_begin() < end && begin < self.right_end()
    }
}

/// Enumerate every (L, R) pair whose parts are dictionary keys
///
/// A single-character Left with no Right is rejected; that shape is
/// reserved for gap filling. Output is sorted ascending by end offset.
pub(crate) fn build_candidates(
    chars: &[char],
    dl: &ScoreDict,
    dr: &ScoreDict,
    lmax: usize,
    rmax: usize,
) -> Vec<Candidate> {
    let n = chars.len();
    let mut candidates = Vec::new();
    for b in 0..n {
        for e in b + 1..=n.min(b + lmax) {
            let left: String = chars[b..e].iter().collect();
            if !dl.contains(&left) {
                continue;
            }
            for len_r in 0..=rmax.min(n - e) {
                if e - b == 1 && len_r == 0 {
                    continue;
                }
                let right: String = chars[e..e + len_r].iter().collect();
                if len_r > 0 && !dr.contains(&right) {
                    continue;
                }
                candidates.push(Candidate {
                    left: left.clone(),
                    right,
                    left_begin: b,
                    left_end: e,
                    right_end: e + len_r,
                });
            }
        }
    }
    candidates.sort_by_key(|c| c.right_end);
    candidates
}

/// Attach Left/Right dictionary scores; absent entries score zero
pub(crate) fn annotate_scores(
    candidates: Vec<Candidate>,
    dl: &ScoreDict,
    dr: &ScoreDict,
) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .map(|base| {
            let left_score = dl.get(&base.left).unwrap_or(0.0);
            let right_score = dr.get(&base.right).unwrap_or(0.0);
            ScoredCandidate {
                base,
                left_score,
                right_score,
            }
        })
        .collect()
}
