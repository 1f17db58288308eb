use log::{info, warn};
use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND_PATH_ENV, DEFAULT_BACKGROUND_PATH, DEFAULT_SPRITE_PATH, SPRITE_PATH_ENV,
};

/// Image locations, overridable through the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AssetPaths {
    pub(crate) background: String,
    pub(crate) sprite: String,
}

impl AssetPaths {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            background: pick(BACKGROUND_PATH_ENV, DEFAULT_BACKGROUND_PATH),
            sprite: pick(SPRITE_PATH_ENV, DEFAULT_SPRITE_PATH),
        }
    }
}

/// Read-only images loaded once at startup.
pub(crate) struct Assets {
    pub(crate) background: Option<Texture2D>,
    pub(crate) sprite: Option<Texture2D>,
}

impl Assets {
    pub(crate) async fn load(paths: &AssetPaths) -> Self {
        Self {
            background: load_optional(&paths.background, "background").await,
            sprite: load_optional(&paths.sprite, "jumper sprite").await,
        }
    }
}

async fn load_optional(path: &str, what: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Linear);
            info!("loaded {what} from '{path}'");
            Some(texture)
        }
        Err(err) => {
            warn!("could not load {what} '{path}': {err}. Falling back to plain shapes.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let paths = AssetPaths::from_lookup(|_| None);
        assert_eq!(paths.background, DEFAULT_BACKGROUND_PATH);
        assert_eq!(paths.sprite, DEFAULT_SPRITE_PATH);
    }

    #[test]
    fn blank_override_is_ignored() {
        let paths = AssetPaths::from_lookup(|key| match key {
            SPRITE_PATH_ENV => Some("/tmp/jumper.png".to_string()),
            _ => Some("  ".to_string()),
        });
        assert_eq!(paths.background, DEFAULT_BACKGROUND_PATH);
        assert_eq!(paths.sprite, "/tmp/jumper.png");
    }
}
