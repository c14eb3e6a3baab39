use bevy::prelude::*;

use crate::TrackSettings;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
}

/// A 2D camera centred on the window, so world space matches window pixels
/// (origin bottom-left, +Y up).
fn add_camera(mut commands: Commands, settings: Res<TrackSettings>) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(settings.center().extend(0.0)),
    ));
}
