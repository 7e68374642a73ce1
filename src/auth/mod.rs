mod jwt;
pub use jwt::{UserClaims, generate_token, issue_session_token, process_token};
mod error;
pub use error::{CryptError, CryptResult};
