//! SVG donut chart for the spend dashboard.
//!
//! One ring per chart, one segment per owner; the "Others" bucket gets its
//! own color, all named owners share a second one. Legend suppressed.

use contracts::domain::spend::OTHERS_LABEL;
use leptos::prelude::*;

pub const NAMED_OWNER_COLOR: &str = "#0d6efd";
pub const OTHERS_COLOR: &str = "#6c757d";

/// Ring radius chosen so the circumference is exactly 100, letting
/// stroke-dasharray work directly in percent.
const RING_RADIUS: &str = "15.9155";

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: String,
    pub value: f64,
    /// Share of the ring, 0..=100.
    pub percent: f64,
    /// Cumulative share of the preceding segments, 0..=100.
    pub start: f64,
    pub color: &'static str,
}

/// Turn zero-filled (label, amount) pairs into ring segments. Negative
/// amounts are clamped to zero; an all-zero aggregate yields segments with
/// zero extent, which render as an empty ring.
pub fn donut_segments(data: &[(&'static str, f64)]) -> Vec<DonutSegment> {
    let total: f64 = data.iter().map(|(_, value)| value.max(0.0)).sum();
    let mut start = 0.0;
    data.iter()
        .map(|(label, value)| {
            let clamped = value.max(0.0);
            let percent = if total > 0.0 {
                clamped / total * 100.0
            } else {
                0.0
            };
            let segment = DonutSegment {
                label: (*label).to_string(),
                value: *value,
                percent,
                start,
                color: if *label == OTHERS_LABEL {
                    OTHERS_COLOR
                } else {
                    NAMED_OWNER_COLOR
                },
            };
            start += percent;
            segment
        })
        .collect()
}

#[component]
pub fn DonutChart(
    /// Chart heading, e.g. "Monthly Spend"
    title: String,
    /// Zero-filled (owner, amount) pairs in fixed owner order
    #[prop(into)]
    data: Signal<Vec<(&'static str, f64)>>,
) -> impl IntoView {
    view! {
        <div class="donut-chart">
            <h3 class="donut-chart__title">{title}</h3>
            <svg viewBox="0 0 42 42" width="220" height="220" role="img">
                <circle
                    cx="21"
                    cy="21"
                    r=RING_RADIUS
                    fill="none"
                    stroke="#e9ecef"
                    stroke-width="6"
                />
                {move || {
                    donut_segments(&data.get())
                        .into_iter()
                        .filter(|segment| segment.percent > 0.0)
                        .map(|segment| {
                            // dashoffset 25 puts the first segment's start at
                            // 12 o'clock; each next segment shifts by the
                            // cumulative share before it
                            let dasharray =
                                format!("{:.4} {:.4}", segment.percent, 100.0 - segment.percent);
                            let dashoffset = format!("{:.4}", 100.0 - segment.start + 25.0);
                            view! {
                                <circle
                                    cx="21"
                                    cy="21"
                                    r=RING_RADIUS
                                    fill="none"
                                    stroke=segment.color
                                    stroke-width="6"
                                    stroke-dasharray=dasharray
                                    stroke-dashoffset=dashoffset
                                >
                                    <title>{format!("{}: {:.2}", segment.label, segment.value)}</title>
                                </circle>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::spend::{zero_filled, OWNERS};
    use std::collections::HashMap;

    #[test]
    fn segments_cover_the_full_ring() {
        let data = vec![("GS", 50.0), ("BK", 30.0), ("Others", 20.0)];
        let segments = donut_segments(&data);
        let total: f64 = segments.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(segments[0].start, 0.0);
        assert!((segments[1].start - 50.0).abs() < 1e-9);
        assert!((segments[2].start - 80.0).abs() < 1e-9);
    }

    #[test]
    fn sparse_aggregate_still_yields_eight_segments() {
        let sparse: HashMap<String, f64> = [("DS".to_string(), 75.0)].into();
        let segments = donut_segments(&zero_filled(&sparse));
        assert_eq!(segments.len(), OWNERS.len());
        assert!((segments[2].percent - 100.0).abs() < 1e-9);
        assert_eq!(
            segments.iter().filter(|s| s.percent == 0.0).count(),
            OWNERS.len() - 1
        );
    }

    #[test]
    fn all_zero_aggregate_renders_empty_ring() {
        let segments = donut_segments(&zero_filled(&HashMap::new()));
        assert_eq!(segments.len(), 8);
        assert!(segments.iter().all(|s| s.percent == 0.0));
    }

    #[test]
    fn others_gets_its_own_color() {
        let segments = donut_segments(&[("GS", 1.0), ("Others", 1.0)]);
        assert_eq!(segments[0].color, NAMED_OWNER_COLOR);
        assert_eq!(segments[1].color, OTHERS_COLOR);
    }

    #[test]
    fn negative_amounts_are_clamped() {
        let segments = donut_segments(&[("GS", -10.0), ("BK", 10.0)]);
        assert_eq!(segments[0].percent, 0.0);
        assert!((segments[1].percent - 100.0).abs() < 1e-9);
    }
}
