use crate::particle::Particle;
use crate::vector::{up, GRAVITY_MAG};
use crate::{Real, V3};

/// Buoyancy of a liquid plane at `liquid_height`, world y is up.
#[derive(Clone, Debug, PartialEq)]
pub struct Buoyancy {
	// depth at which the full force is reached
	pub max_depth: Real,
	pub volume: Real,
	pub liquid_height: Real,
	pub liquid_density: Real,
}

impl Buoyancy {
	pub fn new(max_depth: Real, volume: Real, liquid_height: Real) -> Self {
		Self {
			max_depth,
			volume,
			liquid_height,
			liquid_density: 1000.0,
		}
	}

	pub fn with_density(mut self, liquid_density: Real) -> Self {
		self.liquid_density = liquid_density;
		self
	}

	pub fn full_force(&self) -> Real {
		self.liquid_density * self.volume * GRAVITY_MAG
	}

	pub fn force(&self, p: &Particle) -> Option<V3> {
		let y = p.get_pos()[1];
		let top = self.liquid_height + self.max_depth;
		if y >= top {
			return None;
		}
		if y <= self.liquid_height - self.max_depth || self.max_depth <= 0. {
			return Some(up() * self.full_force());
		}
		let submerged = (top - y) / (2. * self.max_depth);
		Some(up() * (self.full_force() * submerged))
	}
}
