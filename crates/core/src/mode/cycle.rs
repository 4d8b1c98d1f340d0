//! Button-driven mode cycling

use super::hat::{HatMode, MODE_COUNT};

/// Rising-edge counter modulo `N`
///
/// The counter advances only on a released-to-pressed transition, so a
/// held button counts once.
#[derive(Debug, Clone, Copy)]
pub struct ButtonEdge {
    previous: bool,
    index: usize,
    modulo: usize,
}

impl ButtonEdge {
    /// Counter starting at 0 that wraps after `modulo - 1`
    ///
    /// A `modulo` of 0 is treated as 1.
    pub fn new(modulo: usize) -> Self {
        Self {
            previous: false,
            index: 0,
            modulo: modulo.max(1),
        }
    }

    /// Feed the current button level
    ///
    /// Returns the new index on a rising edge, `None` otherwise.
    pub fn update(&mut self, pressed: bool) -> Option<usize> {
        let rising = pressed && !self.previous;
        self.previous = pressed;

        if rising {
            self.index = (self.index + 1) % self.modulo;
            Some(self.index)
        } else {
            None
        }
    }

    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Cycles through all modes in selector order
#[derive(Debug, Clone, Copy)]
pub struct ModeCycle {
    modes: [HatMode; MODE_COUNT],
    edge: ButtonEdge,
    base: usize,
}

impl ModeCycle {
    /// Cycle starting at `initial`; other modes use their default response
    pub fn new(initial: HatMode) -> Self {
        Self::with_modes(&[initial], initial)
    }

    /// Cycle starting at `initial`, using the responses in `configured`
    ///
    /// Each configured mode replaces the default at its selector slot;
    /// `initial` is applied last.
    pub fn with_modes(configured: &[HatMode], initial: HatMode) -> Self {
        let mut modes = [
            HatMode::rate(),
            HatMode::tilt(),
            HatMode::heading(),
            HatMode::Noop,
        ];
        for mode in configured.iter().chain(core::iter::once(&initial)) {
            modes[mode.selector() as usize] = *mode;
        }

        Self {
            modes,
            edge: ButtonEdge::new(MODE_COUNT),
            base: initial.selector() as usize,
        }
    }

    /// Current mode
    pub fn current(&self) -> HatMode {
        self.modes[(self.base + self.edge.index()) % MODE_COUNT]
    }

    /// Feed the mode button level; returns the new mode on a press
    pub fn update(&mut self, pressed: bool) -> Option<HatMode> {
        self.edge.update(pressed).map(|_| self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Response;

    fn press(edge: &mut ButtonEdge) -> Option<usize> {
        let index = edge.update(true);
        assert_eq!(edge.update(false), None);
        index
    }

    #[test]
    fn test_edge_counts_rising_only() {
        let mut edge = ButtonEdge::new(4);
        assert_eq!(edge.update(true), Some(1));
        assert_eq!(edge.update(true), None);
        assert_eq!(edge.update(true), None);
        assert_eq!(edge.update(false), None);
        assert_eq!(edge.update(true), Some(2));
    }

    #[test]
    fn test_eleven_states_then_wrap() {
        let mut edge = ButtonEdge::new(11);
        let mut seen = [false; 11];
        seen[edge.index()] = true;

        for expected in 1..=10 {
            assert_eq!(press(&mut edge), Some(expected));
            seen[expected] = true;
        }
        assert!(seen.iter().all(|s| *s));

        // Start state 0 counts as the first of the 11; press 11 wraps
        assert_eq!(press(&mut edge), Some(0));
    }

    #[test]
    fn test_zero_modulo_stays_at_zero() {
        let mut edge = ButtonEdge::new(0);
        assert_eq!(edge.update(true), Some(0));
    }

    #[test]
    fn test_cycle_order_from_heading() {
        let mut cycle = ModeCycle::new(HatMode::heading());
        assert_eq!(cycle.current().name(), "heading");

        let mut names = [""; MODE_COUNT];
        for name in names.iter_mut() {
            *name = cycle.update(true).unwrap().name();
            assert_eq!(cycle.update(false), None);
        }
        assert_eq!(names, ["noop", "rate", "tilt", "heading"]);
    }

    #[test]
    fn test_cycle_keeps_configured_response() {
        let configured = HatMode::Heading(Response::linear(0.9));
        let mut cycle = ModeCycle::new(configured);

        for _ in 0..MODE_COUNT {
            cycle.update(true);
            cycle.update(false);
        }
        assert_eq!(cycle.current(), configured);
    }

    #[test]
    fn test_with_modes_applies_every_response() {
        let rate = HatMode::Rate(Response::sqrt(0.6));
        let mut cycle = ModeCycle::with_modes(&[rate], HatMode::Noop);
        assert_eq!(cycle.current(), HatMode::Noop);

        // Noop -> Rate
        assert_eq!(cycle.update(true), Some(rate));
    }
}
