//! Headless collaborators
//!
//! `BoxRecorder` hands out sequential handles and remembers what was asked
//! for; `FrameRecorder` stores each submission as a GPU-ready instance record.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use super::{DrawableHandle, MeshFactory, Renderer};

/// One draw submission laid out for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
    pub drawable: u32,
    pub _pad: [u32; 3],
}

impl Instance {
    pub fn new(transform: Mat4, drawable: DrawableHandle) -> Self {
        Self {
            model: transform.to_cols_array_2d(),
            drawable: drawable.0,
            _pad: [0; 3],
        }
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    pub fn handle(&self) -> DrawableHandle {
        DrawableHandle(self.drawable)
    }
}

/// Box requests in creation order; handle N is the Nth box
#[derive(Debug, Default)]
pub struct BoxRecorder {
    pub boxes: Vec<(Vec3, Vec3)>,
}

impl BoxRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center and half extents behind a handle
    pub fn get(&self, handle: DrawableHandle) -> Option<(Vec3, Vec3)> {
        self.boxes.get(handle.0 as usize).copied()
    }
}

impl MeshFactory for BoxRecorder {
    fn make_box(&mut self, center: Vec3, half_extents: Vec3) -> DrawableHandle {
        let handle = DrawableHandle(self.boxes.len() as u32);
        self.boxes.push((center, half_extents));
        handle
    }
}

/// Submissions of the current frame
#[derive(Debug, Default)]
pub struct FrameRecorder {
    instances: Vec<Instance>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's submissions
    pub fn begin_frame(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Raw bytes for an instance buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn count_of(&self, handle: DrawableHandle) -> usize {
        self.instances.iter().filter(|i| i.drawable == handle.0).count()
    }

    pub fn transform_of(&self, handle: DrawableHandle) -> Option<Mat4> {
        self.instances
            .iter()
            .find(|i| i.drawable == handle.0)
            .map(Instance::transform)
    }
}

impl Renderer for FrameRecorder {
    fn submit(&mut self, transform: Mat4, drawable: DrawableHandle) {
        self.instances.push(Instance::new(transform, drawable));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<Instance>(), 80);
    }

    #[test]
    fn test_box_recorder_handles() {
        let mut meshes = BoxRecorder::new();
        let a = meshes.make_box(Vec3::ZERO, Vec3::ONE);
        let b = meshes.make_box(Vec3::X, Vec3::splat(0.5));
        assert_eq!(a, DrawableHandle(0));
        assert_eq!(b, DrawableHandle(1));
        assert_eq!(meshes.get(b), Some((Vec3::X, Vec3::splat(0.5))));
        assert_eq!(meshes.get(DrawableHandle(9)), None);
    }

    #[test]
    fn test_frame_recorder_bytes() {
        let mut frame = FrameRecorder::new();
        let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        frame.submit(t, DrawableHandle(4));
        frame.submit(Mat4::IDENTITY, DrawableHandle(4));

        assert_eq!(frame.count_of(DrawableHandle(4)), 2);
        assert_eq!(frame.transform_of(DrawableHandle(4)), Some(t));
        assert_eq!(frame.as_bytes().len(), 160);

        frame.begin_frame();
        assert!(frame.instances().is_empty());
    }
}
