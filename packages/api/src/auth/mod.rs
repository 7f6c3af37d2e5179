//! Single shared admin login: signed token codec, session cookie and the route guard.

mod guard;
mod session;
mod token;

pub use guard::{is_public_path, require_session};
pub use session::{removal_cookie, session_cookie, session_token, AdminSession, SESSION_COOKIE};
pub use token::{
    InvalidToken, SessionClaims, SessionCodec, SigningError, ADMIN_SUBJECT, SESSION_LIFETIME_DAYS,
};
