pub mod factory;
pub mod jwt;
pub mod validator;

pub use factory::build_token_validator;
pub use jwt::{AccessTokenClaims, JwtValidator, JwtValidatorError};
pub use validator::TokenValidator;
