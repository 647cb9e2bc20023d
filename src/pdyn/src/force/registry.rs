use crate::force::ForceGenerator;
use crate::particle::PId;
use crate::particle_group::ParticleGroup;
use crate::Real;

/// Associations of particles with the generators acting on them.
#[derive(Clone, Debug, Default)]
pub struct ForceRegistry {
	entries: Vec<(PId, ForceGenerator)>,
}

impl ForceRegistry {
	/// Returns false when the same pair is already registered.
	pub fn add(&mut self, id: PId, gen: ForceGenerator) -> bool {
		if self.entries.iter().any(|(i, g)| *i == id && *g == gen) {
			tracing::debug!("duplicate force generator on particle {}", id.0);
			return false;
		}
		self.entries.push((id, gen));
		true
	}

	pub fn remove(&mut self, id: PId, gen: &ForceGenerator) -> bool {
		let len = self.entries.len();
		self.entries.retain(|(i, g)| !(*i == id && g == gen));
		self.entries.len() != len
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &(PId, ForceGenerator)> {
		self.entries.iter()
	}

	pub fn update_forces(&self, particles: &mut ParticleGroup, dt: Real) {
		for (id, gen) in self.entries.iter() {
			let f = match gen.force(*id, particles, dt) {
				Some(f) => f,
				None => continue,
			};
			if let Some(p) = particles.get_mut(*id) {
				p.add_force(f);
			}
		}
	}
}
