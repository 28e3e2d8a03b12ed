//! Presentation relay
//!
//! The game never rasterizes anything itself. It asks a [`MeshFactory`] for
//! box drawables once at startup and hands `(transform, drawable)` pairs to a
//! [`Renderer`] every frame.

pub mod digits;
pub mod headless;
pub mod scene;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

pub use headless::{BoxRecorder, FrameRecorder, Instance};
pub use scene::Scene;

/// Opaque handle to a mesh owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableHandle(pub u32);

/// Builds drawables; called only while the scene is assembled
pub trait MeshFactory {
    fn make_box(&mut self, center: Vec3, half_extents: Vec3) -> DrawableHandle;
}

/// Receives the frame's draw submissions
pub trait Renderer {
    fn submit(&mut self, transform: Mat4, drawable: DrawableHandle);
}
