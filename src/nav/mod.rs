//! Scroll-synchronized navigation for a single guide page.
//!
//! Nothing in here knows about the GUI toolkit: callers feed scroll samples,
//! measured section offsets and frame timestamps, and read back the smoothed
//! progress, the active section and any scroll requests.
//!
//! - `tracker`: raw scroll position to progress ratio + active section.
//! - `progress`/`spring`: smoothed progress bar value.
//! - `navigator`: table of contents, optimistic highlight on click.
//! - `sync`: owns all of the above for one mounted page.

mod navigator;
mod progress;
mod section;
mod smooth_scroll;
mod spring;
mod sync;
mod tracker;

pub use section::SectionDescriptor;
pub use spring::SpringParams;
pub use sync::{NavSettings, ScrollSync};
pub use tracker::ScrollSample;
