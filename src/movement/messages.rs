//! Movement domain: messages emitted while driving controllers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::controller::Contact;

/// One contact notification from an actor's tick, in delivery order.
/// `contact` is `None` when the actor touched nothing.
#[derive(Debug, Clone, Copy)]
pub struct ContactMessage {
    pub entity: Entity,
    pub contact: Option<Contact>,
}

impl Message for ContactMessage {}
