use crate::constants::{PARTICLE_HALF_SPAN, ROTATION_RATE_X, ROTATION_RATE_Y};
use glam::Mat4;
use rand::Rng;

/// One background particle. `#[repr(C)]` + `Pod` so the whole field uploads
/// to the GPU with a single `cast_slice`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Rigid rotation applied to the whole particle set, derived from elapsed
/// time only. Not stored state; always recomputable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationAngle {
    pub x: f32,
    pub y: f32,
}

/// Fixed-count random point cloud.
///
/// Generated once per mount; positions are never mutated afterwards. Only the
/// aggregate rotation changes per frame. The random source is injected so a
/// fixed seed reproduces the exact field.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(-PARTICLE_HALF_SPAN..PARTICLE_HALF_SPAN),
                y: rng.gen_range(-PARTICLE_HALF_SPAN..PARTICLE_HALF_SPAN),
                z: rng.gen_range(-PARTICLE_HALF_SPAN..PARTICLE_HALF_SPAN),
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Regenerate only when the requested count differs from the current one.
    /// Returns `true` if a new field was produced.
    pub fn regenerate_if_count_changed<R: Rng>(&mut self, count: usize, rng: &mut R) -> bool {
        if count == self.particles.len() {
            return false;
        }
        *self = Self::generate(count, rng);
        true
    }
}

/// Pure function of elapsed seconds since mount. Skipped frames cost nothing:
/// the next tick recomputes from absolute elapsed time, so no drift
/// accumulates and no catch-up is needed.
#[inline]
pub fn rotation_angle(elapsed_sec: f64) -> RotationAngle {
    RotationAngle {
        x: (elapsed_sec * ROTATION_RATE_X) as f32,
        y: (elapsed_sec * ROTATION_RATE_Y) as f32,
    }
}

/// Model matrix for the rotated field.
#[inline]
pub fn rotation_matrix(angle: RotationAngle) -> Mat4 {
    Mat4::from_rotation_y(angle.y) * Mat4::from_rotation_x(angle.x)
}
