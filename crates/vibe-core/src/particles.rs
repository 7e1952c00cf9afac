use crate::constants::{PARTICLE_MIN_INTENSITY, PARTICLE_WRAP};
use rand::prelude::*;

/// Per-instance data consumed by the particle pipeline.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub phase: f32,
}

/// CPU-side drifting particle field.
///
/// Positions advance by per-particle velocity scaled by the speed
/// parameter and wrap at the field extent. The sinusoidal per-particle
/// shimmer is applied in the vertex shader from `phase`, so the field
/// itself only integrates the slow drift.
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
    velocities: Vec<[f32; 2]>,
    sizes: Vec<f32>,
    phases: Vec<f32>,
}

impl ParticleField {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);
        let mut phases = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push([
                (rng.gen::<f32>() - 0.5) * 4.0,
                (rng.gen::<f32>() - 0.5) * 4.0,
                rng.gen::<f32>() * 0.5,
            ]);
            velocities.push([
                (rng.gen::<f32>() - 0.5) * 0.01,
                (rng.gen::<f32>() - 0.5) * 0.01,
            ]);
            sizes.push(rng.gen::<f32>() * 3.0 + 1.0);
            phases.push(rng.gen::<f32>() * std::f32::consts::TAU);
        }
        Self {
            positions,
            velocities,
            sizes,
            phases,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Advance drift, wrapping at the field extent. Near-zero
    /// intensity freezes the field since nothing would be visible.
    pub fn step(&mut self, speed: f32, intensity: f32) {
        if intensity <= PARTICLE_MIN_INTENSITY {
            return;
        }
        let wrap = PARTICLE_WRAP;
        for (pos, vel) in self.positions.iter_mut().zip(&self.velocities) {
            pos[0] += vel[0] * speed;
            pos[1] += vel[1] * speed;
            if pos[0] > wrap {
                pos[0] = -wrap;
            }
            if pos[0] < -wrap {
                pos[0] = wrap;
            }
            if pos[1] > wrap {
                pos[1] = -wrap;
            }
            if pos[1] < -wrap {
                pos[1] = wrap;
            }
        }
    }

    /// Rebuild the instance buffer contents in place.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.reserve(self.positions.len());
        for i in 0..self.positions.len() {
            out.push(ParticleInstance {
                pos: self.positions[i],
                size: self.sizes[i],
                phase: self.phases[i],
            });
        }
    }
}
