// Canvas and picking tuning constants

// Backing-store pixel density cap; anything above this wastes fill rate
pub const DPR_CAP: f64 = 2.0;

// Pick-sphere radius as a fraction of the plane's larger extent
pub const PICK_RADIUS_FACTOR: f32 = 0.6;
