use nalgebra::Point2;

use crate::{
    constants::{ACCELERATION, START_POSITION},
    route::Route,
    waypoint::Waypoint,
};

/// What the host draws after a tick: where the car is and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Car centre in window pixels (origin bottom-left, +Y up).
    pub position: Point2<f64>,
    /// Counter-clockwise orientation in radians.
    pub rotation: f64,
}

/// Walks a [`Route`] one frame at a time.
///
/// Behavior of [`MotionController::tick`]
/// - The speed accumulator grows by `ACCELERATION * dt` every tick and is never reset.
/// - Arrival is tested against the position *before* this tick's displacement.
/// - On arrival the waypoint index advances by one, unless already on the terminal leg.
/// - The displacement, `accumulator * direction` of the leg current at the start of the
///   tick, is applied on every tick whether or not the car arrived.
#[derive(Clone, Debug)]
pub struct MotionController {
    route: Route,
    position: Point2<f64>,
    speed_accumulator: f64,
    waypoint_index: usize,
}

impl MotionController {
    pub fn new(route: Route, start: Point2<f64>) -> Self {
        Self {
            route,
            position: start,
            speed_accumulator: 0.0,
            waypoint_index: 0,
        }
    }

    /// Advance the controller by `dt_seconds` of wall-clock time and return the new pose.
    pub fn tick(&mut self, dt_seconds: f64) -> Pose {
        // `f64::max` also maps NaN to zero.
        let dt = dt_seconds.max(0.0);

        self.speed_accumulator += ACCELERATION * dt;

        let leg = *self.current_waypoint();
        let displacement = leg.direction * self.speed_accumulator;

        if leg.has_arrived(&self.position) && !self.is_on_final_leg() {
            self.waypoint_index += 1;
            log::debug!(
                "reached waypoint {} at ({:.1}, {:.1}), heading for waypoint {}",
                self.waypoint_index - 1,
                self.position.x,
                self.position.y,
                self.waypoint_index,
            );
        }

        self.position += displacement;

        self.pose()
    }

    /// Current pose without advancing time.
    #[inline]
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            rotation: self.current_waypoint().rotation,
        }
    }

    #[inline]
    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// Distance-per-second budget accumulated so far.
    #[inline]
    pub fn speed_accumulator(&self) -> f64 {
        self.speed_accumulator
    }

    #[inline]
    pub fn waypoint_index(&self) -> usize {
        self.waypoint_index
    }

    #[inline]
    pub fn current_waypoint(&self) -> &Waypoint {
        // The index never passes `last_index()` and a route is never empty.
        &self.route[self.waypoint_index]
    }

    #[inline]
    pub fn is_on_final_leg(&self) -> bool {
        self.waypoint_index == self.route.last_index()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(
            Route::track(),
            Point2::new(START_POSITION.0, START_POSITION.1),
        )
    }
}
