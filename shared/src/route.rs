//! Ordered waypoint table the motion controller walks through.
//!
//! A [`Route`] is immutable once built and always holds at least one waypoint, so the
//! controller can index into it without bounds juggling. The last waypoint is terminal:
//! the route is not a loop.

use std::{f64::consts::PI, ops::Index};

use crate::{
    error::{RouteError, RouteResult},
    waypoint::Waypoint,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    /// Build a route from an ordered list of waypoints.
    ///
    /// Fails on an empty list or on any waypoint carrying a NaN/infinite value.
    pub fn new(waypoints: Vec<Waypoint>) -> RouteResult<Self> {
        if waypoints.is_empty() {
            return Err(RouteError::Empty);
        }

        if let Some(index) = waypoints.iter().position(|wp| !wp.is_finite()) {
            return Err(RouteError::NonFinite { index });
        }

        Ok(Self { waypoints })
    }

    /// The ten-leg track laid out for a 960x720 window.
    pub fn track() -> Self {
        Self {
            waypoints: vec![
                Waypoint::new(0.0, (0.0, 1.0), (810.0, 570.0)),
                Waypoint::new(PI * 0.5, (-1.0, 0.0), (570.0, 570.0)),
                Waypoint::new(PI, (0.0, -1.0), (570.0, 370.0)),
                Waypoint::new(PI * 1.25, (1.25, -1.0), (600.0, 350.0)),
                Waypoint::new(PI, (0.0, -1.0), (600.0, 260.0)),
                Waypoint::new(PI * 0.75, (-1.25, -1.0), (570.0, 240.0)),
                Waypoint::new(PI * 0.5, (-1.0, -0.0), (470.0, 240.0)),
                Waypoint::new(0.0, (0.0, 1.0), (470.0, 570.0)),
                Waypoint::new(PI * 0.5, (-1.0, 0.0), (150.0, 570.0)),
                Waypoint::new(PI, (0.0, -1.0), (150.0, 150.0)),
            ],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// A route is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the terminal waypoint.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::track()
    }
}

impl Index<usize> for Route {
    type Output = Waypoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.waypoints[index]
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_is_rejected() {
        assert_eq!(Route::new(Vec::new()), Err(RouteError::Empty));
    }

    #[test]
    fn non_finite_waypoint_is_rejected_with_its_index() {
        let waypoints = vec![
            Waypoint::new(0.0, (0.0, 1.0), (0.0, 10.0)),
            Waypoint::new(0.0, (1.0, 0.0), (f64::NAN, 10.0)),
        ];
        assert_eq!(
            Route::new(waypoints),
            Err(RouteError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn track_is_a_valid_route() {
        let track = Route::track();
        assert_eq!(track.len(), 10);
        assert_eq!(track.last_index(), 9);
        assert_eq!(Route::new(track.iter().copied().collect()), Ok(track));
    }

    #[test]
    fn track_ends_at_the_terminal_leg() {
        let track = Route::track();
        let last = track.get(track.last_index()).copied();
        assert_eq!(
            last,
            Some(Waypoint::new(PI, (0.0, -1.0), (150.0, 150.0)))
        );
        assert!(track.get(10).is_none());
    }

    #[test]
    fn track_legs_head_towards_their_targets() {
        // Each leg's target lies on the travelled side of the previous leg's target.
        let track = Route::track();
        let mut from = nalgebra::Point2::new(810.0, 150.0);
        for wp in &track {
            let delta = wp.target - from;
            assert!(delta.x * wp.direction.x >= 0.0);
            assert!(delta.y * wp.direction.y >= 0.0);
            from = wp.target;
        }
    }
}
