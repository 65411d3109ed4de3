use std::num::NonZeroU32;

pub const DEFAULT_RADIUS_DAYS: u32 = 14;

pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(7) {
    Some(n) => n,
    None => panic!("default page size should be nonzero"),
};

pub const DEFAULT_EDGE_THRESHOLD: usize = 1;

/// Tunables for the shopping planner's date picker
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PlannerConfig {
    radius_days: u32,
    page_size: NonZeroU32,
    edge_threshold: usize,
}

impl PlannerConfig {
    pub const fn new() -> PlannerConfig {
        PlannerConfig {
            radius_days: DEFAULT_RADIUS_DAYS,
            page_size: DEFAULT_PAGE_SIZE,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }

    /// Set how many days on either side of today the initial window covers
    pub const fn with_radius_days(mut self, days: u32) -> Self {
        self.radius_days = days;
        self
    }

    /// Set how many days each load adds to the window
    pub const fn with_page_size(mut self, days: NonZeroU32) -> Self {
        self.page_size = days;
        self
    }

    /// Set how close (in positions) a visible date must be to an end of the
    /// window before more dates are loaded on that side
    pub const fn with_edge_threshold(mut self, positions: usize) -> Self {
        self.edge_threshold = positions;
        self
    }

    pub const fn radius_days(&self) -> u32 {
        self.radius_days
    }

    pub const fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    pub const fn edge_threshold(&self) -> usize {
        self.edge_threshold
    }
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.radius_days(), 14);
        assert_eq!(config.page_size().get(), 7);
        assert_eq!(config.edge_threshold(), 1);
    }

    #[test]
    fn test_builder() {
        let config = PlannerConfig::new()
            .with_radius_days(3)
            .with_page_size(NonZeroU32::new(30).unwrap())
            .with_edge_threshold(2);
        assert_eq!(config.radius_days(), 3);
        assert_eq!(config.page_size().get(), 30);
        assert_eq!(config.edge_threshold(), 2);
    }
}
