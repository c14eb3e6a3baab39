use bevy::prelude::*;

use crate::{TrackSettings, images::TrackImages};

/// Draw depth of the track background; the car is drawn above it.
pub const TRACK_Z: f32 = 0.0;

#[derive(Component, Debug)]
pub struct Track;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_track);
}

fn spawn_track(mut commands: Commands, images: Res<TrackImages>, settings: Res<TrackSettings>) {
    debug!("Spawning track at {}", settings.center());

    commands.spawn((
        Name::new("Track"),
        Track,
        Sprite::from_image(images.track.clone()),
        Transform::from_translation(settings.center().extend(TRACK_Z)),
    ));
}
