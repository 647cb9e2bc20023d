use crate::error::{PdynError, PdynResult};
use crate::vector::VecExt;
use crate::{Real, V3};

/// Stable index of a particle in a `ParticleGroup`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pos: V3,
	vel: V3,
	accel: V3,
	force: V3, // cleared by every integration
	imass: Real, // 0 is immovable
	damping: Real,
}

impl Default for Particle {
	fn default() -> Self {
		Self::new(V3::zeros())
	}
}

impl Particle {
	pub fn new(pos: V3) -> Self {
		Self {
			pos,
			vel: V3::zeros(),
			accel: V3::zeros(),
			force: V3::zeros(),
			imass: 1.0,
			damping: 1.0,
		}
	}

	pub fn with_vel(mut self, vel: V3) -> Self {
		self.vel = vel;
		self
	}

	pub fn with_accel(mut self, accel: V3) -> Self {
		self.accel = accel;
		self
	}

	pub fn with_mass(mut self, mass: Real) -> PdynResult<Self> {
		self.set_mass(mass)?;
		Ok(self)
	}

	pub fn with_damping(mut self, damping: Real) -> PdynResult<Self> {
		self.set_damping(damping)?;
		Ok(self)
	}

	pub fn immovable(mut self) -> Self {
		self.imass = 0.;
		self
	}

	pub fn integrate(&mut self, dt: Real) {
		if self.imass <= 0. || dt <= 0. {
			return;
		}
		// position uses the velocity from before this step
		self.pos.add_scaled(&self.vel, dt);
		let mut accel = self.accel;
		accel.add_scaled(&self.force, self.imass);
		self.vel.add_scaled(&accel, dt);
		self.vel *= self.damping.powf(dt);
		self.clear_accumulator();
	}

	pub fn add_force(&mut self, f: V3) {
		self.force += f;
	}

	pub fn clear_accumulator(&mut self) {
		self.force = V3::zeros();
	}

	/// Recycle this particle as a fresh one at `pos`, keeping mass and damping.
	pub fn reset(&mut self, pos: V3) {
		self.pos = pos;
		self.vel = V3::zeros();
		self.accel = V3::zeros();
		self.force = V3::zeros();
	}

	pub fn get_pos(&self) -> V3 {
		self.pos
	}

	pub fn set_pos(&mut self, pos: V3) {
		self.pos = pos;
	}

	pub fn add_pos(&mut self, dp: V3) {
		self.pos += dp;
	}

	pub fn get_vel(&self) -> V3 {
		self.vel
	}

	pub fn set_vel(&mut self, vel: V3) {
		self.vel = vel;
	}

	pub fn add_vel(&mut self, dv: V3) {
		self.vel += dv;
	}

	pub fn get_accel(&self) -> V3 {
		self.accel
	}

	pub fn set_accel(&mut self, accel: V3) {
		self.accel = accel;
	}

	pub fn get_force(&self) -> V3 {
		self.force
	}

	pub fn get_imass(&self) -> Real {
		self.imass
	}

	pub fn set_imass(&mut self, imass: Real) -> PdynResult<()> {
		if !(imass >= 0. && imass.is_finite()) {
			return Err(PdynError::InvalidInverseMass(imass));
		}
		self.imass = imass;
		Ok(())
	}

	/// Infinite for an immovable particle.
	pub fn get_mass(&self) -> Real {
		if self.imass == 0. {
			Real::INFINITY
		} else {
			1. / self.imass
		}
	}

	pub fn set_mass(&mut self, mass: Real) -> PdynResult<()> {
		if !(mass > 0. && mass.is_finite()) {
			return Err(PdynError::InvalidMass(mass));
		}
		self.imass = 1. / mass;
		Ok(())
	}

	pub fn has_finite_mass(&self) -> bool {
		self.imass > 0.
	}

	pub fn get_damping(&self) -> Real {
		self.damping
	}

	pub fn set_damping(&mut self, damping: Real) -> PdynResult<()> {
		if !(damping > 0. && damping <= 1.) {
			return Err(PdynError::InvalidDamping(damping));
		}
		self.damping = damping;
		Ok(())
	}
}
