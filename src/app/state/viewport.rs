/// Last known window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(in crate::app) struct WindowState {
    pub(in crate::app) width: f32,
    pub(in crate::app) height: f32,
}

impl WindowState {
    pub(in crate::app) fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        WindowState {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}
