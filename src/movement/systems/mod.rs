//! Movement domain: system modules for driving controllers.

pub(crate) mod camera;
pub(crate) mod input;
pub(crate) mod motion;
pub(crate) mod surfaces;

pub use camera::follow_step;
pub use surfaces::SurfaceEffect;

pub(crate) use camera::follow_camera;
pub(crate) use input::read_input;
pub(crate) use motion::{drive_controllers, update_body_sprites, update_facing};
pub(crate) use surfaces::{apply_surface_responses, respawn_players};
