// Adapters layer: concrete implementations for external collaborators.
// Today that is the HTTP-backed lunar oracle only.

pub mod kasi;

pub use kasi::KasiLunarClient;
