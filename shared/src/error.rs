use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("route has no waypoints")]
    Empty,

    #[error("waypoint {index} has a non-finite rotation, direction or target")]
    NonFinite { index: usize },
}

pub type RouteResult<T> = Result<T, RouteError>;
