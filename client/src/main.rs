// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod camera;
mod images;
mod movement;
mod settings;
mod world;

use bevy::{
    asset::AssetPlugin,
    prelude::*,
    window::{PresentMode, WindowResolution},
};

pub use settings::TrackSettings;

fn main() -> AppExit {
    let settings = match TrackSettings::from_working_dir() {
        Ok(settings) => settings,
        Err(err) => {
            // The log subscriber is installed by `DefaultPlugins`, which has not run yet.
            eprintln!("Unable to resolve the working directory for assets: {err}");
            return AppExit::error();
        }
    };

    App::new().add_plugins(AppPlugin { settings }).run()
}

pub struct AppPlugin {
    pub settings: TrackSettings,
}

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        let settings = self.settings.clone();

        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Window {
                        title: settings.title.clone(),
                        resolution: WindowResolution::new(settings.width, settings.height),
                        resizable: false,
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }
                    .into(),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: settings.asset_dir.to_string_lossy().into_owned(),
                    ..default()
                })
                // Smooth sampling for the rotated car sprite.
                .set(ImagePlugin::default_linear()),
        );

        app.insert_resource(ClearColor(Color::WHITE));
        app.insert_resource(settings);

        app.add_plugins((
            images::plugin,
            camera::plugin,
            world::plugin,
            movement::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}
