pub mod cable;
pub mod ground;
pub mod rod;

use crate::contact::Contact;
use crate::error::PdynResult;
use crate::particle::PId;
use crate::particle_group::ParticleGroup;
use crate::vector::VecExt;
use crate::V3;
use protocol::pr_model::PrLink;

pub use cable::{Cable, CableConstraint};
pub use ground::GroundContacts;
pub use rod::{Rod, RodConstraint};

pub trait ContactGenerator {
	/// Write contacts for the current state into `out`, return how many.
	/// Never writes more than `out.len()`.
	fn add_contact(&self, particles: &ParticleGroup, out: &mut [Contact]) -> usize;

	/// Every referenced particle exists.
	fn check(&self, particles: &ParticleGroup) -> PdynResult<()>;

	fn render(&self, id: usize) -> Option<PrLink>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactSource {
	Cable(Cable),
	Rod(Rod),
	CableConstraint(CableConstraint),
	RodConstraint(RodConstraint),
	Ground(GroundContacts),
}

impl ContactGenerator for ContactSource {
	fn add_contact(&self, particles: &ParticleGroup, out: &mut [Contact]) -> usize {
		match self {
			Self::Cable(c) => c.add_contact(particles, out),
			Self::Rod(c) => c.add_contact(particles, out),
			Self::CableConstraint(c) => c.add_contact(particles, out),
			Self::RodConstraint(c) => c.add_contact(particles, out),
			Self::Ground(c) => c.add_contact(particles, out),
		}
	}

	fn check(&self, particles: &ParticleGroup) -> PdynResult<()> {
		match self {
			Self::Cable(c) => c.check(particles),
			Self::Rod(c) => c.check(particles),
			Self::CableConstraint(c) => c.check(particles),
			Self::RodConstraint(c) => c.check(particles),
			Self::Ground(c) => c.check(particles),
		}
	}

	fn render(&self, id: usize) -> Option<PrLink> {
		match self {
			Self::Cable(c) => c.render(id),
			Self::Rod(c) => c.render(id),
			Self::CableConstraint(c) => c.render(id),
			Self::RodConstraint(c) => c.render(id),
			Self::Ground(c) => c.render(id),
		}
	}
}

macro_rules! impl_from_source {
	($($ty:ident),*) => {
		$(impl From<$ty> for ContactSource {
			fn from(c: $ty) -> Self {
				Self::$ty(c)
			}
		})*
	};
}
impl_from_source!(Cable, Rod, CableConstraint, RodConstraint);

impl From<GroundContacts> for ContactSource {
	fn from(c: GroundContacts) -> Self {
		Self::Ground(c)
	}
}

/// Unit vector from `from` to `to`, `None` when the points coincide.
fn link_normal(from: V3, to: V3) -> Option<V3> {
	let normal = (to - from).unit();
	if normal == V3::zeros() {
		tracing::warn!("link endpoints coincide, no contact generated");
		return None;
	}
	Some(normal)
}

fn pr_link(id: usize, ps: &[PId], anchor: Option<V3>) -> PrLink {
	PrLink {
		id,
		particles: ps.iter().map(|p| p.0).collect(),
		anchor: anchor.map(|a| [a[0], a[1], a[2]]),
	}
}
