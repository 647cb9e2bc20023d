use crate::contact::Contact;
use crate::error::{PdynError, PdynResult};
use crate::link::{link_normal, pr_link, ContactGenerator};
use crate::particle::PId;
use crate::particle_group::ParticleGroup;
use crate::{Real, V3};
use protocol::pr_model::PrLink;

/// Two particles that can be no further apart than `max_length`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cable {
	pub ps: [PId; 2],
	pub max_length: Real,
	pub restitution: Real,
}

impl Cable {
	pub fn new(
		p1: PId,
		p2: PId,
		max_length: Real,
		restitution: Real,
	) -> PdynResult<Self> {
		if p1 == p2 {
			return Err(PdynError::DegenerateLink(p1.0));
		}
		Ok(Self {
			ps: [p1, p2],
			max_length,
			restitution,
		})
	}

	pub fn current_length(&self, particles: &ParticleGroup) -> Real {
		(particles[self.ps[0]].get_pos() - particles[self.ps[1]].get_pos()).norm()
	}
}

impl ContactGenerator for Cable {
	fn add_contact(&self, particles: &ParticleGroup, out: &mut [Contact]) -> usize {
		if out.is_empty() {
			return 0;
		}
		let len = self.current_length(particles);
		if len < self.max_length {
			return 0;
		}
		let normal = match link_normal(
			particles[self.ps[0]].get_pos(),
			particles[self.ps[1]].get_pos(),
		) {
			Some(normal) => normal,
			None => return 0,
		};
		out[0] = Contact::pair(
			self.ps[0],
			self.ps[1],
			normal,
			len - self.max_length,
			self.restitution,
		);
		1
	}

	fn check(&self, particles: &ParticleGroup) -> PdynResult<()> {
		particles.check(self.ps[0])?;
		particles.check(self.ps[1])
	}

	fn render(&self, id: usize) -> Option<PrLink> {
		Some(pr_link(id, &self.ps, None))
	}
}

/// A particle tied to a fixed world point by a cable.
#[derive(Clone, Debug, PartialEq)]
pub struct CableConstraint {
	pub p: PId,
	pub anchor: V3,
	pub max_length: Real,
	pub restitution: Real,
}

impl CableConstraint {
	pub fn new(p: PId, anchor: V3, max_length: Real, restitution: Real) -> Self {
		Self {
			p,
			anchor,
			max_length,
			restitution,
		}
	}

	pub fn current_length(&self, particles: &ParticleGroup) -> Real {
		(particles[self.p].get_pos() - self.anchor).norm()
	}
}

impl ContactGenerator for CableConstraint {
	fn add_contact(&self, particles: &ParticleGroup, out: &mut [Contact]) -> usize {
		if out.is_empty() {
			return 0;
		}
		let len = self.current_length(particles);
		if len < self.max_length {
			return 0;
		}
		let normal = match link_normal(particles[self.p].get_pos(), self.anchor) {
			Some(normal) => normal,
			None => return 0,
		};
		out[0] = Contact::single(
			self.p,
			normal,
			len - self.max_length,
			self.restitution,
		);
		1
	}

	fn check(&self, particles: &ParticleGroup) -> PdynResult<()> {
		particles.check(self.p)
	}

	fn render(&self, id: usize) -> Option<PrLink> {
		Some(pr_link(id, &[self.p], Some(self.anchor)))
	}
}
