use crate::particle::Particle;
use crate::vector::VecExt;
use crate::{Real, V3};

/// Hooke's law toward `anchor`, pushes when compressed.
pub fn spring_force(pos: V3, anchor: V3, k: Real, rest_length: Real) -> Option<V3> {
	let d = pos - anchor;
	let len = d.norm();
	if len == 0. {
		return None;
	}
	Some(d.unit() * (-k * (len - rest_length)))
}

/// Pull-only spring, no force until stretched past the rest length.
pub fn bungee_force(pos: V3, anchor: V3, k: Real, rest_length: Real) -> Option<V3> {
	let d = pos - anchor;
	let len = d.norm();
	if len <= rest_length {
		return None;
	}
	Some(d.unit() * (-k * (len - rest_length)))
}

/// Closed form damped oscillator around `anchor`, advanced by `dt` and
/// returned as the force that reaches the same spot in one step.
/// Critically and over damped springs are not modelled.
pub fn fake_spring_force(
	p: &Particle,
	anchor: V3,
	k: Real,
	damping: Real,
	dt: Real,
) -> Option<V3> {
	if !p.has_finite_mass() || dt <= 0. {
		return None;
	}
	let gamma = 0.5 * (4. * k - damping * damping).sqrt();
	// NaN fails this too
	if !(gamma > 0.) {
		return None;
	}
	let pos = p.get_pos() - anchor;
	let vel = p.get_vel();
	let c = pos * (damping / (2. * gamma)) + vel * (1. / gamma);
	let target = (pos * (gamma * dt).cos() + c * (gamma * dt).sin())
		* (-0.5 * dt * damping).exp();
	let accel = (target - pos) * (1. / (dt * dt)) - vel * (1. / dt);
	Some(accel * p.get_mass())
}
