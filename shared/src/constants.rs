/// Where the car sits before the first tick, in window pixels (origin bottom-left, +Y up).
pub const START_POSITION: (f64, f64) = (810.0, 150.0);

/// Growth of the speed accumulator per second of elapsed time.
///
/// The accumulator is never reset, so the car keeps accelerating for the whole run.
pub const ACCELERATION: f64 = 3.0;

/// Logical window size in pixels. The route coordinates are laid out for this size.
pub const WINDOW_WIDTH: u32 = 960;
pub const WINDOW_HEIGHT: u32 = 720;

pub const WINDOW_TITLE: &str = "Animação Carro";

/// Background picture, drawn centred in the window.
pub const TRACK_IMAGE: &str = "track.png";

/// Car sprite, drawn at the controller position.
pub const CAR_IMAGE: &str = "car.png";
