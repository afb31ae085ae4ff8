//! High-level runtime engine settings
//!
//! Selects the view options (coordinate scale, wheel zoom, window size)
//! used when building and running a `Scenario`

#[derive(Debug, Clone)]
pub struct Engine {
    pub scale: f64, // metres per screen pixel
    pub zoom: bool, // true = mouse wheel adjusts the view multiplier
    pub zoom_step: f64, // view multiplier change per wheel event
    pub min_view_scale: Option<f64>, // clamp floor for the multiplier, None = unclamped
    pub window: f64, // window side length, pixels (square)
}
