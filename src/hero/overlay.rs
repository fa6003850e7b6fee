use crate::config;

/// Wheel-driven darkening of the hero on desktop, three stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOverlay {
    enabled: bool,
    stage: u8,
}

const MAX_STAGE: u8 = 2;

impl ScrollOverlay {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, stage: 0 }
    }

    pub fn stage(&self) -> u8 {
        self.stage
    }

    /// Returns whether the overlay needs repainting.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        if delta_y > 0.0 {
            self.stage = (self.stage + 1).min(MAX_STAGE);
        } else if delta_y < 0.0 {
            self.stage = self.stage.saturating_sub(1);
        } else {
            return false;
        }
        true
    }

    /// Returns whether a reset happened.
    pub fn scrolled(&mut self, scroll_y: f64) -> bool {
        if self.enabled && scroll_y <= 0.0 && self.stage != 0 {
            self.stage = 0;
            return true;
        }
        false
    }

    pub fn media_changed(&mut self, matches: bool) {
        self.enabled = matches;
        self.stage = 0;
    }

    pub fn overlay_value(&self) -> f64 {
        match (self.enabled, self.stage) {
            (false, _) | (true, 0) => 0.0,
            (true, 1) => 0.5,
            (true, _) => 1.0,
        }
    }

    pub fn nav_solid(&self) -> bool {
        self.enabled && self.stage >= MAX_STAGE
    }

    pub fn logo_src(&self) -> &'static str {
        if self.nav_solid() {
            config::LOGO_SRC_BLACK
        } else {
            config::LOGO_SRC_WHITE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_moves_through_stages_and_clamps() {
        let mut overlay = ScrollOverlay::new(true);
        assert_eq!(overlay.overlay_value(), 0.0);
        overlay.wheel(30.0);
        assert_eq!(overlay.overlay_value(), 0.5);
        assert!(!overlay.nav_solid());
        overlay.wheel(30.0);
        overlay.wheel(30.0);
        assert_eq!(overlay.stage(), 2);
        assert_eq!(overlay.overlay_value(), 1.0);
        assert!(overlay.nav_solid());
        assert_eq!(overlay.logo_src(), config::LOGO_SRC_BLACK);

        overlay.wheel(-5.0);
        overlay.wheel(-5.0);
        overlay.wheel(-5.0);
        assert_eq!(overlay.stage(), 0);
        assert_eq!(overlay.logo_src(), config::LOGO_SRC_WHITE);
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let mut overlay = ScrollOverlay::new(true);
        assert!(!overlay.wheel(0.0));
        assert_eq!(overlay.stage(), 0);
    }

    #[test]
    fn disabled_overlay_ignores_wheel() {
        let mut overlay = ScrollOverlay::new(false);
        assert!(!overlay.wheel(10.0));
        assert_eq!(overlay.overlay_value(), 0.0);
        assert!(!overlay.nav_solid());
    }

    #[test]
    fn scrolling_to_top_resets() {
        let mut overlay = ScrollOverlay::new(true);
        overlay.wheel(1.0);
        assert!(!overlay.scrolled(120.0));
        assert!(overlay.scrolled(0.0));
        assert_eq!(overlay.stage(), 0);
        assert!(!overlay.scrolled(0.0));
    }

    #[test]
    fn media_change_resets_and_toggles() {
        let mut overlay = ScrollOverlay::new(true);
        overlay.wheel(1.0);
        overlay.wheel(1.0);
        overlay.media_changed(false);
        assert_eq!(overlay.stage(), 0);
        assert!(!overlay.wheel(1.0));
        overlay.media_changed(true);
        assert!(overlay.wheel(1.0));
        assert_eq!(overlay.overlay_value(), 0.5);
    }
}
