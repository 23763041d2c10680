pub const DEFAULT_TOLERANCE: f64 = 0.10;
