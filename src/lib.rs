//! Kinematic 2D character controller: ray-probed collision resolution for a
//! rectangular actor against static scene geometry, plus the Bevy glue that
//! drives it from keyboard input through `avian2d` spatial queries.

pub mod controller;
pub mod error;
pub mod geometry;
pub mod movement;
pub mod query;

pub use controller::{
    ActorState, Bounds, CharacterController2d, ConstantGravity, Contact, ContactLog,
    ContactObserver, ControllerConfig, Extents, FloatyGravity, GravityPolicy,
    SlopeVelocityPolicy, TaperedSlopeVelocity, TickContacts, TickInput, TickReport,
    UnitSlopeVelocity, DEFAULT_GRAVITY, DEFAULT_SLOPE_VELOCITY,
};
pub use error::{ConfigError, ConfigLoadError, ControllerError, QueryError};
pub use query::{
    Platform, PlatformLookup, PlatformTable, RayHit, RayRecord, RecordingQuery, SceneQuery,
    SegmentScene, SurfaceTag,
};
