/// Reference stage width in stage units (pixels).
pub const STAGE_WIDTH: f64 = 800.0;

/// Reference stage height in stage units (pixels).
pub const STAGE_HEIGHT: f64 = 600.0;

/// Scale multiplier applied per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Lowest live scale allowed, as a fraction of the fit scale.
pub const DEFAULT_MIN_ZOOM_RELATIVE: f64 = 0.1;

/// Highest live scale allowed, as a multiple of the fit scale.
pub const DEFAULT_MAX_ZOOM_RELATIVE: f64 = 32.0;

/// Quiet period after the last scroll event before the panning phase ends.
pub const DEFAULT_PAN_QUIESCENCE_MS: u64 = 250;

/// Tolerance for floating-point comparisons of view parameters.
pub const EPSILON: f64 = 1e-9;
