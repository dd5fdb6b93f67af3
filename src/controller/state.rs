//! Mutable per-actor state owned by the controller.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    pub position: Vec2,
    /// Realized velocity of the last tick.
    pub velocity: Vec2,
    pub grounded: bool,
    pub crouching: bool,
    /// One-way platforms that allow it are passed through while set.
    pub ignore_platform: bool,
    /// Jumps left before touching ground again. Never exceeds the jump limit.
    pub jumps_remaining: u32,
    /// Ground slope sampled by the last horizontal pass, if any ground was under the actor.
    pub slope: Option<f32>,
}

impl ActorState {
    pub fn spawn(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            grounded: false,
            crouching: false,
            ignore_platform: false,
            jumps_remaining: 0,
            slope: None,
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Grounded -> airborne. Consumes one jump; returns whether a transition happened.
    pub fn leave_ground(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.grounded = false;
        self.jumps_remaining = self.jumps_remaining.saturating_sub(1);
        true
    }

    /// Marks the actor grounded and refills its jumps.
    pub fn land(&mut self, jump_limit: u32) {
        self.grounded = true;
        self.jumps_remaining = jump_limit;
    }
}
