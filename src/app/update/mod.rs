mod appearance;
mod core;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    /// Move the content surface to an absolute offset.
    ScrollTo(f32),
    /// Jump back to the top without animation, e.g. after mounting a page.
    ResetScroll,
    /// Read the laid-out section bounds back from the page.
    MeasureSections,
    /// Ask the runtime for the current window size; resizes on the index
    /// screen are not tracked.
    MeasureWindow,
    QuitSafely,
}
