//! Authentication route handlers
//!
//! - `POST /api/auth/register`
//! - `POST /api/auth/login`
//! - `GET  /api/auth/me` (bearer credential required)

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;
