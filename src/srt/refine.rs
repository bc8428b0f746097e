/*!
 * Timing refinement for parsed SRT entries.
 *
 * Tightens the document pairwise: small gaps between consecutive entries
 * are narrowed so subtitles stay on screen longer, and overlaps are
 * resolved by pulling the earlier entry's end back. Start times are never
 * touched and no entry is ever removed; an overlap that cannot be resolved
 * without crushing the entry below its minimum duration is reported and
 * left alone.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::srt::entry::SrtEntry;

/// Configuration for timing refinement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefineConfig {
    /// Gap left in place of a narrowed gap, in ms.
    #[serde(default = "default_min_gap_ms")]
    pub min_gap_ms: u64,

    /// Gaps at or above this many ms are considered intentional and kept.
    #[serde(default = "default_gap_threshold_ms")]
    pub gap_threshold_ms: u64,

    /// Gap left behind when an overlap is resolved, in ms.
    #[serde(default = "default_overlap_gap_ms")]
    pub overlap_gap_ms: u64,

    /// No adjustment may shrink an entry below this duration, in ms.
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: u64,
}

fn default_min_gap_ms() -> u64 {
    100
}

fn default_gap_threshold_ms() -> u64 {
    500
}

fn default_overlap_gap_ms() -> u64 {
    50
}

fn default_min_duration_ms() -> u64 {
    100
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            min_gap_ms: default_min_gap_ms(),
            gap_threshold_ms: default_gap_threshold_ms(),
            overlap_gap_ms: default_overlap_gap_ms(),
            min_duration_ms: default_min_duration_ms(),
        }
    }
}

/// What happened to one entry's end time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustmentKind {
    /// A small gap to the next entry was narrowed.
    GapNarrowed { gap_ms: u64 },
    /// An overlap was fully resolved, leaving the configured gap.
    OverlapResolved { overlap_ms: u64 },
    /// An overlap was resolved down to a 1ms gap, the most the entry's
    /// minimum duration allowed.
    OverlapNearlyResolved { overlap_ms: u64 },
    /// An overlap could not be resolved at all; the entry is unchanged.
    OverlapUnresolved { overlap_ms: u64 },
}

/// One recorded end-time adjustment (or failed attempt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingAdjustment {
    /// Index the entry carried when the adjustment was made.
    pub index: usize,
    /// End time before, in ms.
    pub before_end_ms: u64,
    /// End time after, in ms. Equals `before_end_ms` for unresolved overlaps.
    pub after_end_ms: u64,
    /// What kind of adjustment this was.
    pub kind: AdjustmentKind,
}

impl std::fmt::Display for TimingAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AdjustmentKind::GapNarrowed { gap_ms } => {
                write!(
                    f,
                    "Entry {}: gap narrowed, end {}ms -> {}ms (gap to next was {}ms)",
                    self.index, self.before_end_ms, self.after_end_ms, gap_ms
                )
            }
            AdjustmentKind::OverlapResolved { overlap_ms } => {
                write!(
                    f,
                    "Entry {}: overlap of {}ms resolved, end {}ms -> {}ms",
                    self.index, overlap_ms, self.before_end_ms, self.after_end_ms
                )
            }
            AdjustmentKind::OverlapNearlyResolved { overlap_ms } => {
                write!(
                    f,
                    "Entry {}: overlap of {}ms resolved to a 1ms gap, end {}ms -> {}ms",
                    self.index, overlap_ms, self.before_end_ms, self.after_end_ms
                )
            }
            AdjustmentKind::OverlapUnresolved { overlap_ms } => {
                write!(
                    f,
                    "Entry {}: overlap of {}ms with the next entry could not be resolved",
                    self.index, overlap_ms
                )
            }
        }
    }
}

/// Result of a refinement pass.
#[derive(Debug, Clone)]
pub struct Refined {
    /// The refined entries, renumbered 1..=n.
    pub entries: Vec<SrtEntry>,
    /// Every adjustment made or attempted, in document order.
    pub changes: Vec<TimingAdjustment>,
}

/// Refines entry timing with the default configuration.
pub fn refine(entries: &[SrtEntry]) -> Refined {
    refine_with_config(entries, &RefineConfig::default())
}

/// Refines entry timing pairwise against each entry's successor.
///
/// A gap strictly between zero and the threshold is narrowed by moving the
/// end to `next start - min_gap_ms`. An overlap pulls the end back to
/// `next start - overlap_gap_ms`, falling back to a 1ms gap, and failing
/// that is recorded as unresolved. Adjustments that would leave less than
/// the minimum duration are not applied. Touching entries (zero gap) and
/// large gaps are left as they are.
pub fn refine_with_config(entries: &[SrtEntry], config: &RefineConfig) -> Refined {
    let mut refined = entries.to_vec();
    let mut changes = Vec::new();

    if refined.is_empty() {
        return Refined {
            entries: refined,
            changes,
        };
    }

    for i in 0..refined.len() - 1 {
        let next_start_ms = refined[i + 1].start_ms;
        let current = &mut refined[i];
        let before_end_ms = current.end_ms;
        let lowest_end_ms = current.start_ms + config.min_duration_ms;

        if next_start_ms > before_end_ms {
            let gap_ms = next_start_ms - before_end_ms;
            if gap_ms < config.gap_threshold_ms {
                let candidate_ms = next_start_ms.saturating_sub(config.min_gap_ms);
                if candidate_ms >= lowest_end_ms {
                    current.end_ms = candidate_ms;
                    changes.push(TimingAdjustment {
                        index: current.index,
                        before_end_ms,
                        after_end_ms: candidate_ms,
                        kind: AdjustmentKind::GapNarrowed { gap_ms },
                    });
                } else {
                    debug!(
                        "not narrowing the {}ms gap after entry {}: entry would drop below {}ms",
                        gap_ms, current.index, config.min_duration_ms
                    );
                }
            }
        } else if next_start_ms < before_end_ms {
            let overlap_ms = before_end_ms - next_start_ms;
            let candidate_ms = next_start_ms.saturating_sub(config.overlap_gap_ms);
            if candidate_ms >= lowest_end_ms {
                current.end_ms = candidate_ms;
                changes.push(TimingAdjustment {
                    index: current.index,
                    before_end_ms,
                    after_end_ms: candidate_ms,
                    kind: AdjustmentKind::OverlapResolved { overlap_ms },
                });
            } else {
                warn!(
                    "cannot fully resolve the {}ms overlap after entry {}, trying a 1ms gap",
                    overlap_ms, current.index
                );
                let touching_ms = next_start_ms.saturating_sub(1);
                if touching_ms >= lowest_end_ms {
                    current.end_ms = touching_ms;
                    changes.push(TimingAdjustment {
                        index: current.index,
                        before_end_ms,
                        after_end_ms: touching_ms,
                        kind: AdjustmentKind::OverlapNearlyResolved { overlap_ms },
                    });
                } else {
                    changes.push(TimingAdjustment {
                        index: current.index,
                        before_end_ms,
                        after_end_ms: before_end_ms,
                        kind: AdjustmentKind::OverlapUnresolved { overlap_ms },
                    });
                }
            }
        }
        // zero gap: entries touch exactly, nothing to do
    }

    for (i, entry) in refined.iter_mut().enumerate() {
        entry.index = i + 1;
    }

    debug!(
        "timing refinement: {} entries, {} adjustment(s)",
        refined.len(),
        changes.len()
    );
    Refined {
        entries: refined,
        changes,
    }
}
