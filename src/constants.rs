//! Stable application-wide constants.
//!
//! Values here are structural invariants and default fallbacks for
//! env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- World-scale mapping ---

/// Default multiplier converting degree deltas into local distance units.
/// Overridden by `WORLD_SCALE` (must be one of [`SCALE_PRESETS`]).
pub const DEFAULT_WORLD_SCALE: f64 = 100_000.0;

/// User-selectable scale presets. A mapping request may pick any of these;
/// anything else is rejected at the API boundary.
pub const SCALE_PRESETS: [f64; 4] = [100_000.0, 75_000.0, 50_000.0, 10_000.0];
