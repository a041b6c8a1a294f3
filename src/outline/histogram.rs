//! Per-page font-size statistics.

use crate::source::Glyph;
use std::collections::HashMap;

/// Occurrence counts per distinct font size on one page.
///
/// Sizes are bucketed to 0.1pt so that floating-point jitter from
/// transform math does not split one visual size into several buckets.
/// Carried as advisory input to classification; the rule cascade does
/// not currently act on it.
#[derive(Debug, Clone, Default)]
pub struct FontSizeHistogram {
    counts: HashMap<i32, usize>,
    sizes_desc: Vec<f32>,
}

/// 0.1pt bucket key.
fn bucket(size: f32) -> i32 {
    (size * 10.0).round() as i32
}

impl FontSizeHistogram {
    /// Count glyph sizes and build the descending distinct-size list.
    pub fn from_glyphs(glyphs: &[Glyph]) -> Self {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for glyph in glyphs {
            *counts.entry(bucket(glyph.size)).or_insert(0) += 1;
        }

        let mut sizes_desc: Vec<f32> = counts.keys().map(|&k| k as f32 / 10.0).collect();
        sizes_desc.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        Self { counts, sizes_desc }
    }

    /// Distinct sizes, largest first.
    pub fn sizes_desc(&self) -> &[f32] {
        &self.sizes_desc
    }

    /// Number of distinct sizes seen on the page.
    pub fn distinct_count(&self) -> usize {
        self.sizes_desc.len()
    }

    /// Occurrences of a given size, after bucketing.
    pub fn count(&self, size: f32) -> usize {
        self.counts.get(&bucket(size)).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
