//! Generative provider seam

mod provider;

pub use provider::GenerativeProvider;

#[cfg(test)]
pub use provider::mock;
