use crate::contact::Contact;
use crate::error::PdynResult;
use crate::force::{ForceGenerator, ForceRegistry};
use crate::link::{ContactGenerator, ContactSource};
use crate::particle::{PId, Particle};
use crate::particle_group::ParticleGroup;
use crate::resolver::ContactResolver;
use crate::Real;
use protocol::pr_model::PrModel;

pub struct PWorld {
	max_contacts: usize,
	// iterations follow the contact count when built with 0
	auto_iterations: bool,
	ticks: u64,
	last_contacts: usize,

	pg: ParticleGroup,
	registry: ForceRegistry,
	sources: Vec<ContactSource>,
	resolver: ContactResolver,
	contacts: Vec<Contact>,
}

impl PWorld {
	pub fn new(max_contacts: usize, iterations: usize) -> Self {
		Self {
			max_contacts,
			auto_iterations: iterations == 0,
			ticks: 0,
			last_contacts: 0,

			pg: ParticleGroup::default(),
			registry: ForceRegistry::default(),
			sources: Vec::new(),
			resolver: ContactResolver::new(iterations),
			contacts: vec![Contact::default(); max_contacts],
		}
	}

	pub fn add_particle(&mut self, p: Particle) -> PId {
		self.pg.add(p)
	}

	pub fn particle(&self, id: PId) -> Option<&Particle> {
		self.pg.get(id)
	}

	pub fn particle_mut(&mut self, id: PId) -> Option<&mut Particle> {
		self.pg.get_mut(id)
	}

	pub fn particles(&self) -> &ParticleGroup {
		&self.pg
	}

	pub fn registry(&self) -> &ForceRegistry {
		&self.registry
	}

	pub fn resolver(&self) -> &ContactResolver {
		&self.resolver
	}

	pub fn contact_sources(&self) -> &[ContactSource] {
		&self.sources
	}

	pub fn max_contacts(&self) -> usize {
		self.max_contacts
	}

	pub fn ticks(&self) -> u64 {
		self.ticks
	}

	/// Contacts generated by the last tick, after resolution.
	pub fn contacts(&self) -> &[Contact] {
		&self.contacts[..self.last_contacts]
	}

	pub fn last_contact_count(&self) -> usize {
		self.last_contacts
	}

	/// Returns `Ok(false)` if the same pair was already registered.
	pub fn add_force_generator(
		&mut self,
		id: PId,
		gen: ForceGenerator,
	) -> PdynResult<bool> {
		gen.check(id, &self.pg)?;
		Ok(self.registry.add(id, gen))
	}

	pub fn remove_force_generator(&mut self, id: PId, gen: &ForceGenerator) -> bool {
		self.registry.remove(id, gen)
	}

	/// Sources are asked for contacts in the order they were added; once
	/// the budget is used up the rest get nothing for that tick.
	pub fn add_contact_generator(
		&mut self,
		source: impl Into<ContactSource>,
	) -> PdynResult<()> {
		let source = source.into();
		source.check(&self.pg)?;
		self.sources.push(source);
		Ok(())
	}

	/// Clear every accumulated force, call once before the first tick.
	pub fn start(&mut self) {
		self.pg.clear_accumulators();
	}

	pub fn integrate(&mut self, dt: Real) {
		self.pg.integrate(dt);
	}

	pub fn generate_contacts(&mut self) -> usize {
		let mut used = 0;
		for (idx, source) in self.sources.iter().enumerate() {
			if used >= self.max_contacts {
				tracing::debug!(
					"contact budget {} used up, {} sources skipped",
					self.max_contacts,
					self.sources.len() - idx,
				);
				break;
			}
			used += source.add_contact(&self.pg, &mut self.contacts[used..]);
		}
		used
	}

	pub fn run(&mut self, dt: Real) {
		if dt <= 0. {
			return;
		}
		self.registry.update_forces(&mut self.pg, dt);
		self.integrate(dt);
		let used = self.generate_contacts();
		self.last_contacts = used;
		if used != 0 {
			if self.auto_iterations {
				self.resolver.set_iterations(used * 2);
			}
			self.resolver.resolve_contacts(
				&mut self.contacts[..used],
				&mut self.pg,
				dt,
			);
		}
		self.ticks += 1;
		tracing::trace!(
			"tick {}: {} contacts, {} iterations",
			self.ticks,
			used,
			self.resolver.iterations_used(),
		);
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			particles: self.pg.pr_particles(),
			links: self
				.sources
				.iter()
				.enumerate()
				.filter_map(|(id, s)| s.render(id))
				.collect(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::error::PdynError;
	use crate::link::{Cable, GroundContacts, Rod};
	use crate::vector::gravity;
	use crate::V3;

	#[test]
	fn test_registration_checks() {
		let mut world = PWorld::new(4, 0);
		let a = world.add_particle(Particle::default());
		assert_eq!(
			world.add_force_generator(PId(3), ForceGenerator::gravity(gravity())),
			Err(PdynError::UnknownParticle(3))
		);
		assert_eq!(
			world.add_force_generator(a, ForceGenerator::gravity(gravity())),
			Ok(true)
		);
		assert_eq!(
			world.add_force_generator(a, ForceGenerator::gravity(gravity())),
			Ok(false)
		);
		let ground = GroundContacts::new(vec![a, PId(1)]);
		assert_eq!(
			world.add_contact_generator(ground),
			Err(PdynError::UnknownParticle(1))
		);
		assert!(world.contact_sources().is_empty());
	}

	#[test]
	fn test_budget_starves_later_sources() {
		let mut world = PWorld::new(2, 0);
		let ids: Vec<PId> = (0..3)
			.map(|i| world.add_particle(Particle::new(V3::new(i as f32, -1., 0.))))
			.collect();
		world
			.add_contact_generator(GroundContacts::new(ids.clone()))
			.unwrap();
		let cable = Cable::new(ids[0], ids[2], 1., 0.).unwrap();
		world.add_contact_generator(cable).unwrap();
		assert_eq!(world.generate_contacts(), 2);
	}

	#[test]
	fn test_zero_dt_is_noop() {
		let mut world = PWorld::new(4, 0);
		let a = world.add_particle(Particle::new(V3::new(0., 1., 0.)));
		world
			.add_force_generator(a, ForceGenerator::gravity(gravity()))
			.unwrap();
		world.run(0.);
		assert_eq!(world.ticks(), 0);
		assert_eq!(world.particle(a).unwrap().get_force(), V3::zeros());
	}

	#[test]
	fn test_auto_iterations() {
		let mut world = PWorld::new(8, 0);
		let a = world.add_particle(Particle::new(V3::new(0., 0., 0.)));
		let b = world.add_particle(Particle::new(V3::new(2.3, 0., 0.)));
		world.add_contact_generator(Rod::new(a, b, 2.).unwrap()).unwrap();
		world.run(0.01);
		assert_eq!(world.last_contact_count(), 1);
		assert_eq!(world.resolver().get_iterations(), 2);
		assert!(world.resolver().iterations_used() <= 2);
		let model = world.pr_model();
		assert_eq!(model.particles.len(), 2);
		assert_eq!(model.links.len(), 1);
		assert_eq!(model.links[0].particles, vec![0, 1]);
	}

	#[test]
	fn test_start_clears_forces() {
		let mut world = PWorld::new(1, 1);
		let a = world.add_particle(Particle::default());
		world.particle_mut(a).unwrap().add_force(V3::new(1., 0., 0.));
		world.start();
		assert_eq!(world.particle(a).unwrap().get_force(), V3::zeros());
	}
}
