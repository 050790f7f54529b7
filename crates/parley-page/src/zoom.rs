use parley_config::ui::UiConfig;

/// Zoom factor applied by "Actual Size"
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Keep factors at two decimals so repeated steps do not drift
pub fn round(factor: f64) -> f64 {
    (factor * 100.0).round() / 100.0
}

/// Next factor when zooming in, `None` once the upper bound is reached
pub fn zoom_in(current: f64, ui: &UiConfig) -> Option<f64> {
    let next = round(current + ui.zoom_step);
    (next < ui.max_zoom).then_some(next)
}

/// Next factor when zooming out, `None` below the lower bound
pub fn zoom_out(current: f64, ui: &UiConfig) -> Option<f64> {
    let next = round(current - ui.zoom_step);
    (next >= ui.min_zoom).then_some(next)
}

/// Saved factors of zero or less come from older or hand-edited settings
pub fn saved_or_default(saved: f64) -> f64 {
    if saved > 0.0 { saved } else { DEFAULT_ZOOM }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_stops_below_max() {
        let ui = UiConfig::default();
        let mut factor = DEFAULT_ZOOM;
        let mut steps = 0;
        while let Some(next) = zoom_in(factor, &ui) {
            factor = next;
            steps += 1;
        }

        assert_eq!(factor, 1.5);
        assert_eq!(steps, 5);
    }

    #[test]
    fn test_zoom_out_stops_at_min() {
        let ui = UiConfig::default();
        assert_eq!(zoom_out(1.0, &ui), Some(0.9));
        assert_eq!(zoom_out(0.9, &ui), Some(0.8));
        assert_eq!(zoom_out(0.8, &ui), None);
    }

    #[test]
    fn test_saved_zero_falls_back() {
        assert_eq!(saved_or_default(0.0), 1.0);
        assert_eq!(saved_or_default(1.2), 1.2);
    }
}
