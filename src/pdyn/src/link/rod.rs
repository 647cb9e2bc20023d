use crate::contact::Contact;
use crate::error::{PdynError, PdynResult};
use crate::link::{link_normal, pr_link, ContactGenerator};
use crate::particle::PId;
use crate::particle_group::ParticleGroup;
use crate::{Real, V3};
use protocol::pr_model::PrLink;

/// Contact that keeps a rigid link at `length`, pushing out when squeezed
/// and pulling in when stretched.
fn rod_contact(
	p1: PId,
	p2: Option<PId>,
	normal: V3,
	len: Real,
	length: Real,
) -> Contact {
	let (normal, penetration) = if len > length {
		(normal, len - length)
	} else {
		(-normal, length - len)
	};
	// rods do not bounce
	Contact {
		p2,
		..Contact::single(p1, normal, penetration, 0.)
	}
}

/// Two particles held at a fixed distance.
///
/// With the default `tolerance` of zero any deviation, however small,
/// produces a contact every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Rod {
	pub ps: [PId; 2],
	pub length: Real,
	pub tolerance: Real,
}

impl Rod {
	pub fn new(p1: PId, p2: PId, length: Real) -> PdynResult<Self> {
		if p1 == p2 {
			return Err(PdynError::DegenerateLink(p1.0));
		}
		Ok(Self {
			ps: [p1, p2],
			length,
			tolerance: 0.,
		})
	}

	pub fn with_tolerance(mut self, tolerance: Real) -> Self {
		self.tolerance = tolerance;
		self
	}

	pub fn current_length(&self, particles: &ParticleGroup) -> Real {
		(particles[self.ps[0]].get_pos() - particles[self.ps[1]].get_pos()).norm()
	}
}

impl ContactGenerator for Rod {
	fn add_contact(&self, particles: &ParticleGroup, out: &mut [Contact]) -> usize {
		if out.is_empty() {
			return 0;
		}
		let len = self.current_length(particles);
		if (len - self.length).abs() <= self.tolerance {
			return 0;
		}
		let normal = match link_normal(
			particles[self.ps[0]].get_pos(),
			particles[self.ps[1]].get_pos(),
		) {
			Some(normal) => normal,
			None => return 0,
		};
		out[0] = rod_contact(self.ps[0], Some(self.ps[1]), normal, len, self.length);
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

/// A particle held at a fixed distance from a world point.
#[derive(Clone, Debug, PartialEq)]
pub struct RodConstraint {
	pub p: PId,
	pub anchor: V3,
	pub length: Real,
	pub tolerance: Real,
}

impl RodConstraint {
	pub fn new(p: PId, anchor: V3, length: Real) -> Self {
		Self {
			p,
			anchor,
			length,
			tolerance: 0.,
		}
	}

	pub fn with_tolerance(mut self, tolerance: Real) -> Self {
		self.tolerance = tolerance;
		self
	}

	pub fn current_length(&self, particles: &ParticleGroup) -> Real {
		(particles[self.p].get_pos() - self.anchor).norm()
	}
}

impl ContactGenerator for RodConstraint {
	fn add_contact(&self, particles: &ParticleGroup, out: &mut [Contact]) -> usize {
		if out.is_empty() {
			return 0;
		}
		let len = self.current_length(particles);
		if (len - self.length).abs() <= self.tolerance {
			return 0;
		}
		let normal = match link_normal(particles[self.p].get_pos(), self.anchor) {
			Some(normal) => normal,
			None => return 0,
		};
		out[0] = rod_contact(self.p, None, normal, len, self.length);
		1
	}

	fn check(&self, particles: &ParticleGroup) -> PdynResult<()> {
		particles.check(self.p)
	}

	fn render(&self, id: usize) -> Option<PrLink> {
		Some(pr_link(id, &[self.p], Some(self.anchor)))
	}
}
