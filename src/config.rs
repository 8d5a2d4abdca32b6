use crate::constants::*;
use crate::models::ShapePolicy;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// World scale applied when a mapping request does not pick a preset.
    pub default_scale: f64,
    /// Marker shape policy applied when a request does not override it.
    pub shape_policy: ShapePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: 3000,
            default_scale: DEFAULT_WORLD_SCALE,
            shape_policy: ShapePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let default_scale: f64 = env::var("WORLD_SCALE")
            .unwrap_or_else(|_| DEFAULT_WORLD_SCALE.to_string())
            .parse()
            .map_err(|_| "Invalid WORLD_SCALE")?;

        if !SCALE_PRESETS.contains(&default_scale) {
            return Err(format!(
                "WORLD_SCALE must be one of {:?}, got {}",
                SCALE_PRESETS, default_scale
            ));
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            default_scale,
            shape_policy: env::var("MARKER_SHAPE_POLICY")
                .unwrap_or_else(|_| "capsule".to_string())
                .parse()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
