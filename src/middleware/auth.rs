//! Middleware de autenticación JWT
//!
//! Maneja la generación y verificación de tokens JWT y la inyección
//! de la compañía autenticada en las requests protegidas.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::EnvironmentConfig, repositories::CompanyRepository, state::AppState,
    utils::errors::AppError,
};

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // company_id
    pub exp: usize,
    pub iat: usize,
}

/// Compañía autenticada que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedCompany {
    pub company_id: Uuid,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    // Decodificar y validar JWT
    let token_data = decode::<Claims>(
        auth_header,
        &DecodingKey::from_secret(state.config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    let company_id = Uuid::parse_str(&token_data.claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de compañía inválido".to_string()))?;

    // Verificar que la compañía existe y sigue activa
    let repository = CompanyRepository::new(state.pool.clone());
    let company = repository
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Compañía no encontrada".to_string()))?;

    if company.status != "active" {
        return Err(AppError::Unauthorized(
            "La cuenta está desactivada".to_string(),
        ));
    }

    request.extensions_mut().insert(AuthenticatedCompany {
        company_id: company.id,
    });

    Ok(next.run(request).await)
}

/// Función para generar JWT token
pub fn generate_jwt_token(
    company_id: Uuid,
    config: &EnvironmentConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.jwt_expiration as i64);

    let claims = Claims {
        sub: company_id.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando JWT: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_decode_token() {
        let config = EnvironmentConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            ..Default::default()
        };
        let company_id = Uuid::new_v4();

        let token = generate_jwt_token(company_id, &config).unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(config.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, company_id.to_string());
        assert!(decoded.claims.exp > decoded.claims.iat);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let config = EnvironmentConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            ..Default::default()
        };
        let token = generate_jwt_token(Uuid::new_v4(), &config).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"otro-secreto"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
