use std::{io, path::PathBuf};

use bevy::prelude::*;
use car_track_shared::{CAR_IMAGE, TRACK_IMAGE, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

/// Window and asset configuration, inserted as a resource by `AppPlugin`.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct TrackSettings {
    pub title: String,
    /// Logical window size in pixels. The route is laid out for the default size.
    pub width: u32,
    pub height: u32,
    /// Directory the images are read from. Bevy resolves relative paths against its own
    /// asset root, so this is normally absolute.
    pub asset_dir: PathBuf,
    pub track_image: String,
    pub car_image: String,
}

impl TrackSettings {
    /// Default settings reading `track.png` and `car.png` from the process working directory.
    pub fn from_working_dir() -> io::Result<Self> {
        Ok(Self {
            asset_dir: std::env::current_dir()?,
            ..default()
        })
    }

    /// Centre of the window in world space.
    ///
    /// The camera sits here so that world coordinates equal window pixels with the origin
    /// in the bottom-left corner.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) / 2.0
    }
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            asset_dir: PathBuf::from("."),
            track_image: TRACK_IMAGE.to_string(),
            car_image: CAR_IMAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_track_layout() {
        let settings = TrackSettings::default();
        assert_eq!(settings.title, "Animação Carro");
        assert_eq!((settings.width, settings.height), (960, 720));
        assert_eq!(settings.track_image, "track.png");
        assert_eq!(settings.car_image, "car.png");
        assert_eq!(settings.center(), Vec2::new(480.0, 360.0));
    }

    #[test]
    fn working_dir_settings_point_at_the_current_directory() {
        let settings = TrackSettings::from_working_dir().unwrap();
        assert_eq!(settings.asset_dir, std::env::current_dir().unwrap());
        assert!(settings.asset_dir.is_absolute());
    }
}
