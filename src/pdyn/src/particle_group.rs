use std::collections::HashMap;

use crate::error::{PdynError, PdynResult};
use crate::particle::{PId, Particle};
use crate::Real;
use protocol::pr_model::PrParticle;

/// Arena owning every particle of a world. Ids are never reused.
#[derive(Clone, Debug, Default)]
pub struct ParticleGroup {
	data: Vec<Particle>,
}

impl ParticleGroup {
	pub fn add(&mut self, p: Particle) -> PId {
		self.data.push(p);
		PId(self.data.len() - 1)
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn contains(&self, id: PId) -> bool {
		id.0 < self.data.len()
	}

	pub fn check(&self, id: PId) -> PdynResult<()> {
		if self.contains(id) {
			Ok(())
		} else {
			Err(PdynError::UnknownParticle(id.0))
		}
	}

	pub fn get(&self, id: PId) -> Option<&Particle> {
		self.data.get(id.0)
	}

	pub fn get_mut(&mut self, id: PId) -> Option<&mut Particle> {
		self.data.get_mut(id.0)
	}

	pub fn iter(&self) -> impl Iterator<Item = (PId, &Particle)> {
		self.data.iter().enumerate().map(|(i, p)| (PId(i), p))
	}

	#[cfg(feature = "parallel")]
	pub fn integrate(&mut self, dt: Real) {
		use rayon::prelude::*;
		self.data.par_iter_mut().for_each(|p| p.integrate(dt));
	}

	#[cfg(not(feature = "parallel"))]
	pub fn integrate(&mut self, dt: Real) {
		self.data.iter_mut().for_each(|p| p.integrate(dt));
	}

	pub fn clear_accumulators(&mut self) {
		for p in self.data.iter_mut() {
			p.clear_accumulator();
		}
	}

	pub fn pr_particles(&self) -> HashMap<usize, PrParticle> {
		self.iter()
			.map(|(id, p)| {
				let pos = p.get_pos();
				(id.0, PrParticle { pos: [pos[0], pos[1], pos[2]] })
			})
			.collect()
	}
}

impl std::ops::Index<PId> for ParticleGroup {
	type Output = Particle;
	fn index(&self, id: PId) -> &Self::Output {
		&self.data[id.0]
	}
}

impl std::ops::IndexMut<PId> for ParticleGroup {
	fn index_mut(&mut self, id: PId) -> &mut Self::Output {
		&mut self.data[id.0]
	}
}
