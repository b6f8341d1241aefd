//! Metric cards with decorative progress bars

use crate::types::Metric;
use leptos::prelude::*;

/// Decorative bar width (percent) for the metric at `index`.
///
/// Not clamped: from index 6 on the bar is wider than its track and gets
/// clipped by `overflow: hidden`.
pub fn bar_width(index: usize) -> usize {
    48 + 10 * index
}

/// One card per metric, in payload order.
#[component]
pub fn MetricsGrid(metrics: Vec<Metric>) -> impl IntoView {
    view! {
        <section class="grid metrics">
            {metrics.into_iter().enumerate().map(|(index, metric)| {
                let bar_style = format!("width: {}%", bar_width(index));
                view! {
                    <article class="card metric-card">
                        <h3>{metric.value}</h3>
                        <p>{metric.label}</p>
                        <div class="mini-line" aria-hidden="true">
                            <span style=bar_style></span>
                        </div>
                    </article>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_grows_ten_points_per_index() {
        assert_eq!(bar_width(0), 48);
        assert_eq!(bar_width(1), 58);
        assert_eq!(bar_width(5), 98);
    }

    #[test]
    fn bar_width_is_not_clamped() {
        assert_eq!(bar_width(6), 108);
        assert_eq!(bar_width(10), 148);
    }
}
