use thiserror::Error;

use crate::Real;

#[derive(Debug, Error, PartialEq)]
pub enum PdynError {
	#[error("mass must be positive and finite, got {0}")]
	InvalidMass(Real),

	#[error("inverse mass must be non-negative and finite, got {0}")]
	InvalidInverseMass(Real),

	#[error("damping must be in (0, 1], got {0}")]
	InvalidDamping(Real),

	#[error("particle {0} is not in the world")]
	UnknownParticle(usize),

	#[error("link connects particle {0} to itself")]
	DegenerateLink(usize),

	#[error("cannot build a basis from parallel vectors")]
	DegenerateBasis,
}

pub type PdynResult<T> = Result<T, PdynError>;
