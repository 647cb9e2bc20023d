use crate::contact::Contact;
use crate::particle_group::ParticleGroup;
use crate::Real;

/// Iterative solver: resolve the worst contact first, then correct the
/// penetration of every contact that shares a moved particle.
#[derive(Clone, Debug)]
pub struct ContactResolver {
	iterations: usize,
	iterations_used: usize,
}

impl ContactResolver {
	pub fn new(iterations: usize) -> Self {
		Self {
			iterations,
			iterations_used: 0,
		}
	}

	pub fn set_iterations(&mut self, iterations: usize) {
		self.iterations = iterations;
	}

	pub fn get_iterations(&self) -> usize {
		self.iterations
	}

	pub fn iterations_used(&self) -> usize {
		self.iterations_used
	}

	fn worst_contact(
		contacts: &[Contact],
		particles: &ParticleGroup,
	) -> Option<usize> {
		let mut worst: Option<(usize, Real)> = None;
		for (idx, contact) in contacts.iter().enumerate() {
			let sep = contact.separating_velocity(particles);
			if !(sep < 0. || contact.penetration > 0.) {
				continue;
			}
			let better = match worst {
				None => true,
				Some((widx, wsep)) => {
					sep < wsep
						|| sep == wsep
							&& contact.penetration > contacts[widx].penetration
				}
			};
			if better {
				worst = Some((idx, sep));
			}
		}
		worst.map(|(idx, _)| idx)
	}

	pub fn resolve_contacts(
		&mut self,
		contacts: &mut [Contact],
		particles: &mut ParticleGroup,
		dt: Real,
	) {
		self.iterations_used = 0;
		while self.iterations_used < self.iterations {
			let idx = match Self::worst_contact(contacts, particles) {
				Some(idx) => idx,
				None => break,
			};
			contacts[idx].resolve(particles, dt);

			let resolved = &contacts[idx];
			let moved = [
				(Some(resolved.p1), resolved.movement[0]),
				(resolved.p2, resolved.movement[1]),
			];
			for contact in contacts.iter_mut() {
				for (who, movement) in moved.iter() {
					let who = match who {
						Some(who) => *who,
						None => continue,
					};
					if contact.p1 == who {
						contact.penetration -= movement.dot(&contact.normal);
					}
					if contact.p2 == Some(who) {
						contact.penetration += movement.dot(&contact.normal);
					}
				}
			}
			self.iterations_used += 1;
		}
		tracing::trace!(
			"resolved {} contacts in {}/{} iterations",
			contacts.len(),
			self.iterations_used,
			self.iterations,
		);
	}
}
