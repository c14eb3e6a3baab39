//! Frame-time diagnostics and route gizmos for native dev builds.
//!
//! Compiled only with `dev_native`.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use car_track_shared::START_POSITION;
use iyes_perf_ui::prelude::*;

use crate::movement::{Car, CarMotion};

const ROUTE_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);
const FACING_COLOR: Color = Color::srgb(1.0, 0.8, 0.1);

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(PostUpdate, (draw_route, draw_car_facing));
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn((Name::new("PerfUi"), PerfUiAllEntries::default()));
}

/// Polyline through every waypoint target, starting where the car starts.
fn draw_route(mut gizmos: Gizmos, cars: Query<&CarMotion, With<Car>>) {
    for motion in &cars {
        let start = Vec2::new(START_POSITION.0 as f32, START_POSITION.1 as f32);
        let targets = motion
            .0
            .route()
            .iter()
            .map(|wp| Vec2::new(wp.target.x as f32, wp.target.y as f32));

        gizmos.linestrip_2d(std::iter::once(start).chain(targets), ROUTE_COLOR);
    }
}

fn draw_car_facing(mut gizmos: Gizmos, cars: Query<&Transform, With<Car>>) {
    for transform in &cars {
        let start = transform.translation.truncate();
        // The sprite faces +Y when unrotated.
        let dir = (transform.rotation * Vec3::Y).truncate();
        if !dir.is_finite() || dir.length_squared() <= 1.0e-8 {
            continue;
        }
        gizmos.arrow_2d(start, start + dir.normalize() * 40.0, FACING_COLOR);
    }
}
