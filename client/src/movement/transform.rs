use bevy::prelude::*;
use car_track_shared::Pose;

/// Draw depth of the car, above the track background.
pub const CAR_Z: f32 = 1.0;

/// World transform for a controller pose.
///
/// World space equals window pixels (see `camera.rs`), so the position maps straight
/// across. The sprite turns counter-clockwise about its own centre.
pub fn pose_to_transform(pose: &Pose) -> Transform {
    Transform {
        translation: Vec3::new(pose.position.x as f32, pose.position.y as f32, CAR_Z),
        rotation: Quat::from_rotation_z(pose.rotation as f32),
        scale: Vec3::ONE,
    }
}
