mod transform;

use bevy::prelude::*;
use car_track_shared::MotionController;

use crate::images::{TrackImages, images_ready};
use transform::pose_to_transform;

/// Marker for the car sprite.
#[derive(Component, Debug)]
pub struct Car;

/// The waypoint-following controller driving this entity.
#[derive(Component, Debug, Default)]
pub struct CarMotion(pub MotionController);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_car);
    // Motion starts with the first frame the car can actually be drawn.
    app.add_systems(Update, drive_car.run_if(images_ready));
}

fn spawn_car(mut commands: Commands, images: Res<TrackImages>) {
    let motion = MotionController::default();
    let pose = motion.pose();
    info!(
        "Spawning car at ({}, {}) with {} waypoints",
        pose.position.x,
        pose.position.y,
        motion.route().len()
    );

    commands.spawn((
        Name::new("Car"),
        Car,
        Sprite::from_image(images.car.clone()),
        pose_to_transform(&pose),
        CarMotion(motion),
    ));
}

/// One controller tick per rendered frame, using the unclamped wall-clock delta.
fn drive_car(
    time: Res<Time<Real>>,
    mut cars: Query<(&mut CarMotion, &mut Transform), With<Car>>,
) {
    let dt = time.delta_secs_f64();
    for (mut motion, mut transform) in &mut cars {
        let pose = motion.0.tick(dt);
        *transform = pose_to_transform(&pose);
    }
}
