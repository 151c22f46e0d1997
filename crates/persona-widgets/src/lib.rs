//! Demo widget state models.
//!
//! Each widget on the demos page owns only its own transient state: created
//! with a fixed default, mutated by explicit UI events, discarded on unmount.
//! Timers are modeled as explicit `tick`/`advance` calls made by the page
//! event loop, which keeps every transition deterministic and testable.
//!
//! Nothing here touches the network or storage; the site builder only embeds
//! the initial-state snapshots from [`snapshot`].

pub mod carousel;
pub mod chat;
pub mod config;
pub mod features;
pub mod feedback;
pub mod shell;
pub mod snapshot;
pub mod status;

pub use carousel::{Testimonial, TestimonialCarousel};
pub use chat::{ChatDemo, Message, Role};
pub use config::{ConfigPreview, Model, Snapshot};
pub use features::FeaturesPanel;
pub use feedback::{FeedbackForm, FormError, FormState};
pub use shell::{ActiveWidget, DemoShell, Tab};
pub use status::{Health, Service, StatusDashboard};
