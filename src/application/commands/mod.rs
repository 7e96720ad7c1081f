// src/application/commands/mod.rs
//
// Command Handling
//
// ARCHITECTURE:
// - Intents are thin, serializable requests from the presentation layer
// - The session routes each intent to the controller that owns it
// - Commands NEVER contain business logic

pub mod intents;
pub mod session;

pub use intents::UserIntent;
pub use session::{Screen, Session};
