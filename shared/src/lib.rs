//! Engine-agnostic motion logic for the car track animation.
//!
//! The host (the Bevy client) owns a [`MotionController`], calls
//! [`MotionController::tick`] once per rendered frame with the frame delta, and draws the
//! car at the returned [`Pose`]. Nothing here touches windows, images or the clock.

pub mod constants;
pub mod error;
pub mod motion;
pub mod route;
pub mod waypoint;

pub use constants::{
    ACCELERATION, CAR_IMAGE, START_POSITION, TRACK_IMAGE, WINDOW_HEIGHT, WINDOW_TITLE,
    WINDOW_WIDTH,
};
pub use error::{RouteError, RouteResult};
pub use motion::{MotionController, Pose};
pub use route::Route;
pub use waypoint::{Waypoint, axis_arrived};
