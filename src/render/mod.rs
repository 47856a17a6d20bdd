//! Grouping and rendering of a fetched batch.

pub mod escape;
pub mod group;
pub mod html;
pub mod pipeline;
pub mod view;

pub use escape::escape_html;
pub use group::{CategoryGroups, DataContractViolation};
pub use pipeline::{render_email_list, render_stats};
pub use view::{CardView, ListEntry, SectionHeader};
