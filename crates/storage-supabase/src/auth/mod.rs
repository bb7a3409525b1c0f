mod model;
mod provider;

pub use model::{SessionResponse, UserResponse};
pub use provider::SupabaseAuthProvider;
