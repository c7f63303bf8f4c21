//! Polite announcements for live indicators.
//!
//! The header's indicators are live regions: when one changes state the
//! operator is told so in the footer, without stealing focus. The first
//! observation of an indicator only records a baseline.

use std::collections::HashMap;

use super::header_bar::LiveIndicator;

#[derive(Debug, Default)]
pub struct LiveRegion {
    last: HashMap<&'static str, bool>,
    latest: Option<String>,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare indicators against the previous observation.
    ///
    /// Returns one announcement per indicator whose state changed, in the
    /// order given.
    pub fn observe(&mut self, indicators: &[LiveIndicator]) -> Vec<String> {
        let mut announcements = Vec::new();
        for indicator in indicators {
            let previous = self.last.insert(indicator.key, indicator.active);
            if matches!(previous, Some(was) if was != indicator.active) {
                let text = indicator.announcement();
                tracing::info!(announcement = %text, "live region changed");
                announcements.push(text);
            }
        }
        if let Some(last) = announcements.last() {
            self.latest = Some(last.clone());
        }
        announcements
    }

    /// Most recent announcement, shown until replaced.
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConnectionStatus;
    use crate::ui::header_bar::live_indicators;

    #[test]
    fn test_first_observation_is_silent() {
        let mut region = LiveRegion::new();
        let announced = region.observe(&live_indicators(ConnectionStatus::Open, true));
        assert!(announced.is_empty());
        assert_eq!(region.latest(), None);
    }

    #[test]
    fn test_change_is_announced_once() {
        let mut region = LiveRegion::new();
        region.observe(&live_indicators(ConnectionStatus::Connecting, false));

        let announced = region.observe(&live_indicators(ConnectionStatus::Open, false));
        assert_eq!(announced, vec!["Connection active".to_string()]);
        assert_eq!(region.latest(), Some("Connection active"));

        let again = region.observe(&live_indicators(ConnectionStatus::Open, false));
        assert!(again.is_empty());
        assert_eq!(region.latest(), Some("Connection active"));
    }

    #[test]
    fn test_non_open_transitions_are_not_changes() {
        let mut region = LiveRegion::new();
        region.observe(&live_indicators(ConnectionStatus::Connecting, false));
        // Still inactive
        let announced = region.observe(&live_indicators(ConnectionStatus::Closed, false));
        assert!(announced.is_empty());
    }

    #[test]
    fn test_both_indicators_change() {
        let mut region = LiveRegion::new();
        region.observe(&live_indicators(ConnectionStatus::Open, false));

        let announced = region.observe(&live_indicators(ConnectionStatus::Closed, true));
        assert_eq!(
            announced,
            vec![
                "Connection inactive".to_string(),
                "Location permission active".to_string()
            ]
        );
        assert_eq!(region.latest(), Some("Location permission active"));
    }
}
