//! Contact descriptors and per-tick contact bookkeeping.

use bevy::prelude::*;

use crate::geometry::slope_angle;
use crate::query::{PlatformLookup, RayHit, SurfaceTag};

/// A single probe hit, described for whoever observes the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub body: Entity,
    pub point: Vec2,
    pub normal: Vec2,
    /// Signed slope of the touched surface in degrees.
    pub slope: f32,
    pub surface: SurfaceTag,
}

impl Contact {
    pub fn from_hit<P: PlatformLookup + ?Sized>(hit: &RayHit, platforms: &P) -> Self {
        let surface = platforms
            .platform(hit.body)
            .map(|platform| platform.surface)
            .unwrap_or_default();
        Self {
            body: hit.body,
            point: hit.point,
            normal: hit.normal,
            slope: slope_angle(hit.normal),
            surface,
        }
    }
}

/// Contacts gathered during one tick.
///
/// `surface` holds what the actor moves along (ground under it, the floor or
/// ceiling met by the vertical pass, platforms). `obstruction` holds what
/// blocks it (walls met by the horizontal sweep, slopes too steep to stand on).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickContacts {
    pub surface: Option<Contact>,
    pub obstruction: Option<Contact>,
}

impl TickContacts {
    pub(crate) fn record_surface(&mut self, contact: Contact) {
        self.surface = Some(contact);
    }

    /// Keeps an existing surface contact.
    pub(crate) fn offer_surface(&mut self, contact: Contact) {
        self.surface.get_or_insert(contact);
    }

    pub(crate) fn record_obstruction(&mut self, contact: Contact) {
        self.obstruction = Some(contact);
    }

    pub(crate) fn offer_obstruction(&mut self, contact: Contact) {
        self.obstruction.get_or_insert(contact);
    }

    pub fn is_empty(&self) -> bool {
        self.surface.is_none() && self.obstruction.is_none()
    }

    /// Surface then obstruction; a single `None` when nothing was touched.
    pub fn notifications(&self) -> Vec<Option<Contact>> {
        if self.is_empty() {
            return vec![None];
        }
        [self.surface, self.obstruction]
            .into_iter()
            .flatten()
            .map(Some)
            .collect()
    }

    pub fn deliver<O: ContactObserver + ?Sized>(&self, observer: &mut O) {
        for contact in self.notifications() {
            observer.on_contact(contact.as_ref());
        }
    }
}

/// Receives the contact notifications of each tick.
///
/// `None` means the actor touched nothing, so per-contact side effects can be reset.
pub trait ContactObserver {
    fn on_contact(&mut self, contact: Option<&Contact>);
}

impl<F> ContactObserver for F
where
    F: FnMut(Option<&Contact>),
{
    fn on_contact(&mut self, contact: Option<&Contact>) {
        self(contact)
    }
}

/// Observer that keeps every notification in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactLog(pub Vec<Option<Contact>>);

impl ContactObserver for ContactLog {
    fn on_contact(&mut self, contact: Option<&Contact>) {
        self.0.push(contact.copied());
    }
}
