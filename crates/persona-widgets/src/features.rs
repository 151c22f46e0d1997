//! Features tab: capability list plus the testimonial carousel.

use crate::carousel::TestimonialCarousel;

/// One advertised capability.
#[derive(Debug, Clone, PartialEq)]
pub struct Capability {
    pub name: &'static str,
    pub summary: &'static str,
}

const CAPABILITIES: &[Capability] = &[
    Capability {
        name: "Data plumbing",
        summary: "Pipelines debugged, schemas reconciled, NULLs interrogated.",
    },
    Capability {
        name: "Infrastructure",
        summary: "Terraform reviewed before it terraforms something it shouldn't.",
    },
    Capability {
        name: "Writing",
        summary: "Blog posts, runbooks, and commit messages longer than the diff.",
    },
    Capability {
        name: "Continuity",
        summary: "Notes persisted across sessions, so each morning isn't day one.",
    },
];

/// The features tab subtree. The carousel inside is the tab's only
/// interactive element; the capability list is fixed copy.
#[derive(Debug, Default)]
pub struct FeaturesPanel {
    carousel: TestimonialCarousel,
}

impl FeaturesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    pub fn carousel(&self) -> &TestimonialCarousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut TestimonialCarousel {
        &mut self.carousel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_is_owned_by_the_panel() {
        let mut panel = FeaturesPanel::new();

        panel.carousel_mut().tick();

        assert_eq!(panel.carousel().index(), 1);
        assert!(!panel.capabilities().is_empty());
    }
}
