//! The controller facade: owns velocity and state and runs one tick at a time.

use std::fmt;

use bevy::prelude::*;

use super::bounds::Bounds;
use super::config::ControllerConfig;
use super::contact::{ContactObserver, TickContacts};
use super::horizontal::resolve_horizontal;
use super::policy::{DEFAULT_GRAVITY, DEFAULT_SLOPE_VELOCITY, GravityPolicy, SlopeVelocityPolicy};
use super::probe::Probe;
use super::state::ActorState;
use super::vertical::resolve_vertical;
use crate::error::ControllerError;
use crate::query::{PlatformLookup, SceneQuery};

/// Intents for one tick, produced by whatever maps player input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Horizontal velocity the actor is steering toward.
    pub target_velocity_x: f32,
    pub jump_held: bool,
    pub crouch: bool,
    /// Drop through the one-way platform underfoot, starting next tick.
    pub drop_through: bool,
}

impl TickInput {
    pub fn toward(target_velocity_x: f32) -> Self {
        Self {
            target_velocity_x,
            ..default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub contacts: TickContacts,
    /// Total translation applied this tick.
    pub displacement: Vec2,
    pub landed: bool,
    pub left_ground: bool,
}

/// Kinematic controller for one rectangular actor.
#[derive(Component)]
pub struct CharacterController2d {
    config: ControllerConfig,
    state: ActorState,
    gravity: Box<dyn GravityPolicy>,
    slope_velocity: Box<dyn SlopeVelocityPolicy>,
}

impl fmt::Debug for CharacterController2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterController2d")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CharacterController2d {
    /// Validates `config` and spawns an airborne actor at `position`.
    pub fn new(config: ControllerConfig, position: Vec2) -> Result<Self, ControllerError> {
        config.validate()?;
        Ok(Self {
            config,
            state: ActorState::spawn(position),
            gravity: Box::new(DEFAULT_GRAVITY),
            slope_velocity: Box::new(DEFAULT_SLOPE_VELOCITY),
        })
    }

    pub fn with_gravity(mut self, gravity: impl GravityPolicy + 'static) -> Self {
        self.gravity = Box::new(gravity);
        self
    }

    pub fn with_slope_velocity(
        mut self,
        slope_velocity: impl SlopeVelocityPolicy + 'static,
    ) -> Self {
        self.slope_velocity = Box::new(slope_velocity);
        self
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Override the horizontal blend factor, e.g. on low-friction surfaces.
    /// Clamped to `[0, 1]`.
    pub fn set_acceleration(&mut self, acceleration: f32) {
        self.config.acceleration = if acceleration.is_nan() {
            0.0
        } else {
            acceleration.clamp(0.0, 1.0)
        };
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ActorState {
        &mut self.state
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::compute(
            self.state.position,
            &self.config.extents(),
            self.state.crouching,
        )
    }

    /// Jump with the given launch velocity if a jump is left and the actor is standing.
    pub fn try_jump(&mut self, jump_velocity: f32) -> bool {
        if self.state.jumps_remaining == 0 || self.state.crouching {
            return false;
        }
        self.state.velocity.y = jump_velocity;
        self.state.grounded = false;
        self.state.jumps_remaining -= 1;
        debug!("Jump: jumps_remaining={}", self.state.jumps_remaining);
        true
    }

    /// Move the actor for one tick of `dt` seconds.
    ///
    /// Horizontal motion is resolved before vertical motion. The realized
    /// velocity is derived from what the resolvers actually applied. The
    /// observer receives the surface contact then the obstruction contact,
    /// or a single `None` when nothing was touched.
    pub fn step<Q, P, O>(
        &mut self,
        scene: &Q,
        platforms: &P,
        input: &TickInput,
        dt: f32,
        observer: &mut O,
    ) -> Result<TickReport, ControllerError>
    where
        Q: SceneQuery + ?Sized,
        P: PlatformLookup + ?Sized,
        O: ContactObserver + ?Sized,
    {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ControllerError::InvalidTimestep(dt));
        }

        let was_grounded = self.state.grounded;
        let drop_requested = input.drop_through && was_grounded;
        self.state.crouching = input.crouch;

        let velocity = self.state.velocity;
        let vx = if self.config.turn_while_jumping || self.state.grounded {
            velocity.x + (input.target_velocity_x - velocity.x) * self.config.acceleration
        } else {
            velocity.x * self.config.air_friction
        };
        let vy = velocity.y - self.gravity.acceleration(velocity.y, input.jump_held) * dt;
        let desired = Vec2::new(vx, vy) * dt;

        let probe = Probe {
            config: &self.config,
            scene,
            platforms,
            slope_velocity: self.slope_velocity.as_ref(),
        };
        let mut contacts = TickContacts::default();
        let horizontal = resolve_horizontal(
            &probe,
            &mut self.state,
            &mut contacts,
            Vec2::new(desired.x, 0.0),
        )?;
        let vertical = resolve_vertical(
            &probe,
            &mut self.state,
            &mut contacts,
            Vec2::new(0.0, desired.y),
        )?;

        self.state.velocity = Vec2::new(horizontal.x + vertical.delta.x, vertical.delta.y) / dt;

        if drop_requested {
            debug!("Drop-through armed at {:?}", self.state.position);
            self.state.ignore_platform = true;
        }

        let landed = !was_grounded && self.state.grounded;
        let left_ground = was_grounded && !self.state.grounded;
        if landed {
            debug!(
                "Landed at {:?}: jumps_remaining={}",
                self.state.position, self.state.jumps_remaining
            );
        }

        contacts.deliver(observer);
        Ok(TickReport {
            contacts,
            displacement: horizontal + vertical.displacement,
            landed,
            left_ground,
        })
    }
}
