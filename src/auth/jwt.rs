use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{CryptError, CryptResult};

/// Session claims. A session is always bound to one tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub tenant: String,
    pub exp: i64,
}

impl UserClaims {
    pub fn new(user_id: Uuid, tenant_id: Uuid, ttl: Duration) -> Self {
        Self {
            sub: user_id.to_string(),
            tenant: tenant_id.to_string(),
            exp: (chrono::Utc::now() + ttl).timestamp(),
        }
    }

    pub fn user_id(&self) -> CryptResult<Uuid> {
        self.sub
            .parse()
            .map_err(|_| CryptError::MalformedClaim { claim: "sub" })
    }

    pub fn tenant_id(&self) -> CryptResult<Uuid> {
        self.tenant
            .parse()
            .map_err(|_| CryptError::MalformedClaim { claim: "tenant" })
    }
}

pub fn generate_token<K: AsRef<[u8]>>(
    claims: UserClaims,
    key: K,
) -> jsonwebtoken::errors::Result<String> {
    let header = Header::default();
    let key = EncodingKey::from_secret(key.as_ref());

    let token = jsonwebtoken::encode(&header, &claims, &key)?;
    Ok(token)
}

pub fn process_token<K: AsRef<[u8]>>(
    token: &str,
    key: K,
) -> jsonwebtoken::errors::Result<TokenData<UserClaims>> {
    let validation = Validation::default();
    let key = DecodingKey::from_secret(key.as_ref());

    let claims = jsonwebtoken::decode::<UserClaims>(token, &key, &validation)?;
    Ok(claims)
}

/// Issues a day-long session token for `user_id` acting within `tenant_id`.
pub fn issue_session_token<K: AsRef<[u8]>>(
    user_id: Uuid,
    tenant_id: Uuid,
    key: K,
) -> CryptResult<String> {
    let claims = UserClaims::new(user_id, tenant_id, Duration::days(1));
    Ok(generate_token(claims, key)?)
}
