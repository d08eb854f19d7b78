// In-memory counseling sessions: state objects, the shortlist, and the store.

pub mod handlers;
pub mod models;
pub mod shortlist;
pub mod store;

pub use models::{ChatRole, ChatTurn, Session};
pub use shortlist::Shortlist;
pub use store::SessionStore;
