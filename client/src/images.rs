//! Loads the two pictures the animation needs and aborts the app if either fails.
//!
//! Loading is asynchronous in Bevy, so a missing or undecodable file surfaces a few frames
//! after startup as `LoadState::Failed`. There is no fallback: the app exits with an error.

use bevy::{asset::LoadState, prelude::*};

use crate::TrackSettings;

/// Handles to the track background and the car sprite.
#[derive(Resource, Debug, Clone)]
pub struct TrackImages {
    pub track: Handle<Image>,
    pub car: Handle<Image>,
}

/// Set once both images are loaded. The watcher stops polling and the car starts moving.
#[derive(Resource, Debug, Default)]
pub(crate) struct ImagesReady(pub(crate) bool);

/// Run condition: both images are loaded.
pub(crate) fn images_ready(ready: Res<ImagesReady>) -> bool {
    ready.0
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<ImagesReady>();
    // PreStartup so the handles exist before anything spawns sprites in Startup.
    app.add_systems(PreStartup, load_images);
    app.add_systems(Update, watch_image_loads);
}

fn load_images(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<TrackSettings>,
) {
    info!(
        "Loading {} and {} from {}",
        settings.track_image,
        settings.car_image,
        settings.asset_dir.display()
    );

    commands.insert_resource(TrackImages {
        track: asset_server.load(settings.track_image.clone()),
        car: asset_server.load(settings.car_image.clone()),
    });
}

fn watch_image_loads(
    asset_server: Res<AssetServer>,
    images: Res<TrackImages>,
    settings: Res<TrackSettings>,
    mut ready: ResMut<ImagesReady>,
    mut exit: MessageWriter<AppExit>,
) {
    if ready.0 {
        return;
    }

    let loads = [
        (&settings.track_image, asset_server.get_load_state(images.track.id())),
        (&settings.car_image, asset_server.get_load_state(images.car.id())),
    ];

    for (path, state) in &loads {
        if let Some(LoadState::Failed(err)) = state {
            error!("Failed to load {path}: {err}");
            exit.write(AppExit::error());
            return;
        }
    }

    if loads
        .iter()
        .all(|(_, state)| matches!(state, Some(LoadState::Loaded)))
    {
        info!("Track images loaded");
        ready.0 = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetPlugin;
    use std::{fs, path::Path, thread, time::Duration};

    /// A 1x1 RGBA PNG.
    const PIXEL_PNG: [u8; 70] = [
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
        0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
        0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
        0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    fn test_app(asset_dir: &Path) -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin {
                file_path: asset_dir.to_string_lossy().into_owned(),
                watch_for_changes_override: Some(false),
                ..default()
            },
            ImagePlugin::default(),
            plugin,
        ));
        app.insert_resource(TrackSettings {
            asset_dir: asset_dir.to_path_buf(),
            ..default()
        });
        app.finish();
        app.cleanup();
        app
    }

    /// Update until `done` holds, giving the IO task pool time to finish loads.
    fn update_until(app: &mut App, done: impl Fn(&mut App) -> bool) -> bool {
        for _ in 0..500 {
            app.update();
            if done(app) {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
        false
    }

    #[test]
    fn missing_car_image_exits_with_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("track.png"), PIXEL_PNG).unwrap();

        let mut app = test_app(dir.path());
        let exited = update_until(&mut app, |app| app.should_exit().is_some());

        assert!(exited);
        assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
        assert!(!app.world().resource::<ImagesReady>().0);
    }

    #[test]
    fn undecodable_track_image_exits_with_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("track.png"), b"not a png").unwrap();
        fs::write(dir.path().join("car.png"), PIXEL_PNG).unwrap();

        let mut app = test_app(dir.path());
        let exited = update_until(&mut app, |app| app.should_exit().is_some());

        assert!(exited);
        assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
    }

    #[test]
    fn both_images_loaded_marks_ready_without_exiting() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("track.png"), PIXEL_PNG).unwrap();
        fs::write(dir.path().join("car.png"), PIXEL_PNG).unwrap();

        let mut app = test_app(dir.path());
        let ready = update_until(&mut app, |app| app.world().resource::<ImagesReady>().0);

        assert!(ready);
        assert!(app.should_exit().is_none());
    }
}
