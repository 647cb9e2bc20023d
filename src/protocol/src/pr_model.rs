// pr_model: Physical model for rendering

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f32; 3],
}

// a drawable link, one or two particles, optionally fixed to a world anchor
#[derive(Clone, Debug, PartialEq)]
pub struct PrLink {
	pub id: usize,
	pub particles: Vec<usize>,
	pub anchor: Option<[f32; 3]>,
}

#[derive(Clone, Debug, Default)]
pub struct PrModel {
	pub particles: HashMap<usize, PrParticle>,
	pub links: Vec<PrLink>,
}

impl PrModel {
	/// Line segments for every drawable link, skipping links whose particles
	/// are missing from the snapshot or that do not have exactly two ends.
	pub fn segments(&self) -> Vec<[[f32; 3]; 2]> {
		let mut result = Vec::with_capacity(self.links.len());
		'link: for link in self.links.iter() {
			let mut ends: Vec<[f32; 3]> = Vec::with_capacity(2);
			for id in link.particles.iter() {
				match self.particles.get(id) {
					Some(p) => ends.push(p.pos),
					None => continue 'link,
				}
			}
			ends.extend(link.anchor);
			if ends.len() == 2 {
				result.push([ends[0], ends[1]]);
			}
		}
		result
	}
}
