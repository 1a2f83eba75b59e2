//! Chunk distribution report
//!
//! Groups the final chunk list by source label and renders the busiest
//! sources as a horizontal bar chart. Display only; the persisted artifact
//! is unaffected.

use console::style;
use std::collections::HashMap;

use crate::types::Chunk;

const BAR_WIDTH: usize = 40;
const MAX_LABEL_WIDTH: usize = 48;

/// Count chunks per source label, sorted by count descending with label
/// order as a stable tiebreak.
pub fn chunk_counts(chunks: &[Chunk]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for chunk in chunks {
        *counts.entry(chunk.metadata.display_label()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Render the top `top_sources` labels as a horizontal bar chart.
pub fn render_histogram(chunks: &[Chunk], top_sources: usize) {
    let counts = chunk_counts(chunks);
    if counts.is_empty() {
        println!("No chunks to report.");
        return;
    }

    let shown = &counts[..counts.len().min(top_sources)];
    if shown.is_empty() {
        return;
    }
    let max_count = shown[0].1.max(1);
    let label_width = shown
        .iter()
        .map(|(label, _)| label.chars().count().min(MAX_LABEL_WIDTH))
        .max()
        .unwrap_or(0);

    println!();
    println!(
        "{}",
        style(format!("Chunks per source (top {})", shown.len())).bold()
    );
    for (label, count) in shown {
        let bar_len = (count * BAR_WIDTH).div_ceil(max_count);
        let bar: String = "\u{2588}".repeat(bar_len);
        println!(
            "{:>width$} \u{2502} {} {}",
            truncate_label(label),
            style(bar).green(),
            count,
            width = label_width
        );
    }
    println!();
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_WIDTH {
        return label.to_string();
    }
    let mut truncated: String = label.chars().take(MAX_LABEL_WIDTH - 1).collect();
    truncated.push('\u{2026}');
    truncated
}
