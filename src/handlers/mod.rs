// handlers/mod.rs - Two-tier handler architecture
//
// Public (no auth) → Protected (bearer token checked by `middleware::require_admin`)
//
// Reads of portfolio content and the credential endpoints are public; every
// write plus bulk export/import sits behind the gate.
pub mod public;
pub mod protected;
