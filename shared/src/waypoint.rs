use nalgebra::{Point2, Vector2};

/// One leg of the route: travel along `direction` until `target` is reached on every
/// axis the direction moves along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    /// Sprite orientation in radians (counter-clockwise) while travelling this leg.
    pub rotation: f64,
    /// Signed axis of travel. Not necessarily unit length.
    pub direction: Vector2<f64>,
    /// Coordinate that ends this leg.
    pub target: Point2<f64>,
}

impl Waypoint {
    pub fn new(rotation: f64, direction: (f64, f64), target: (f64, f64)) -> Self {
        Self {
            rotation,
            direction: Vector2::new(direction.0, direction.1),
            target: Point2::new(target.0, target.1),
        }
    }

    /// Has `position` reached this leg's target?
    ///
    /// Each axis is checked against the sign of its direction component. An axis with a
    /// zero component never blocks arrival, wherever the position sits on it.
    #[inline]
    pub fn has_arrived(&self, position: &Point2<f64>) -> bool {
        axis_arrived(self.direction.x, position.x, self.target.x)
            && axis_arrived(self.direction.y, position.y, self.target.y)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.rotation.is_finite()
            && self.direction.iter().all(|c| c.is_finite())
            && self.target.iter().all(|c| c.is_finite())
    }
}

/// Single-axis arrival rule.
///
/// - `direction > 0`: arrived once `position >= target`
/// - `direction < 0`: arrived once `position <= target`
/// - `direction == 0` (including `-0.0`): always arrived
#[inline]
pub fn axis_arrived(direction: f64, position: f64, target: f64) -> bool {
    if direction > 0.0 {
        position >= target
    } else if direction < 0.0 {
        position <= target
    } else {
        true
    }
}
