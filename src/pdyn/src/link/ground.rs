use crate::contact::Contact;
use crate::error::PdynResult;
use crate::link::ContactGenerator;
use crate::particle::PId;
use crate::particle_group::ParticleGroup;
use crate::vector::up;
use crate::Real;
use protocol::pr_model::PrLink;

/// The y = 0 plane, for a set of particles.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundContacts {
	pub particles: Vec<PId>,
	pub restitution: Real,
}

impl GroundContacts {
	pub fn new(particles: Vec<PId>) -> Self {
		Self {
			particles,
			restitution: 0.2,
		}
	}

	pub fn with_restitution(mut self, restitution: Real) -> Self {
		self.restitution = restitution;
		self
	}
}

impl ContactGenerator for GroundContacts {
	fn add_contact(&self, particles: &ParticleGroup, out: &mut [Contact]) -> usize {
		let mut count = 0;
		for id in self.particles.iter() {
			if count >= out.len() {
				break;
			}
			let y = particles[*id].get_pos()[1];
			if y < 0. {
				out[count] = Contact::single(*id, up(), -y, self.restitution);
				count += 1;
			}
		}
		count
	}

	fn check(&self, particles: &ParticleGroup) -> PdynResult<()> {
		self.particles.iter().try_for_each(|id| particles.check(*id))
	}

	fn render(&self, _id: usize) -> Option<PrLink> {
		None
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::particle::Particle;
	use crate::V3;

	#[test]
	fn test_only_below_ground() {
		let mut pg = ParticleGroup::default();
		let ids: Vec<PId> = [1., -0.5, 0., -2.]
			.iter()
			.map(|y| pg.add(Particle::new(V3::new(0., *y, 0.))))
			.collect();
		let ground = GroundContacts::new(ids.clone());
		let mut out = vec![Contact::default(); 8];
		assert_eq!(ground.add_contact(&pg, &mut out), 2);
		assert_eq!(out[0].p1, ids[1]);
		assert_eq!(out[0].penetration, 0.5);
		assert_eq!(out[0].restitution, 0.2);
		assert_eq!(out[1].p1, ids[3]);
		assert_eq!(out[1].normal, up());
	}

	#[test]
	fn test_budget() {
		let mut pg = ParticleGroup::default();
		let ids: Vec<PId> = (0..5)
			.map(|_| pg.add(Particle::new(V3::new(0., -1., 0.))))
			.collect();
		let ground = GroundContacts::new(ids).with_restitution(0.);
		let mut out = vec![Contact::default(); 3];
		assert_eq!(ground.add_contact(&pg, &mut out), 3);
		assert_eq!(out[2].p1, PId(2));
		assert_eq!(ground.add_contact(&pg, &mut out[..0]), 0);
	}
}
