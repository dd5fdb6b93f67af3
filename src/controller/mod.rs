//! Controller domain: actor state, probes, and the per-tick resolution pipeline.
//!
//! One tick runs the horizontal pass to completion (including the position
//! update) before the vertical pass starts. Both passes only read the scene
//! and only write the actor's own state.

mod bounds;
mod config;
mod contact;
mod horizontal;
mod motor;
mod policy;
mod probe;
mod state;
mod vertical;


pub use bounds::{Bounds, Extents};
pub use config::ControllerConfig;
pub use contact::{Contact, ContactLog, ContactObserver, TickContacts};
pub use motor::{CharacterController2d, TickInput, TickReport};
pub use policy::{
    ConstantGravity, DEFAULT_GRAVITY, DEFAULT_SLOPE_VELOCITY, FloatyGravity, GravityPolicy,
    SlopeVelocityPolicy, TaperedSlopeVelocity, UnitSlopeVelocity,
};
pub use state::ActorState;
