//! Admin session contracts: login DTOs, token claim decoding and the admin
//! role gate.

mod dto;
mod token;

pub use dto::{LoginRequest, LoginResponse, Session, UserInfo};
pub use token::{
    authorize_login, decode_claims, is_admin_role, AuthError, TokenClaims, TokenError,
    ACCESS_DENIED_MESSAGE,
};
