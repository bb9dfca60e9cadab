pub mod color;
pub mod networking;

// Re-exports for convenience
pub use color::{brand_primary, brand_secondary, from_hex_str};
pub use keel_types::Rgba;
pub use networking::{
    HttpSession, Manager, NetworkError, NetworkResult, NetworkSession, Request, SessionError,
    SessionReply,
};
