use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{CompanyResponse, LoginRequest, LoginResponse, RegisterCompanyRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::generate_jwt_token;
use crate::repositories::CompanyRepository;
use crate::utils::errors::AppError;
use crate::utils::validation;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct CompanyController {
    repository: CompanyRepository,
    config: EnvironmentConfig,
}

impl CompanyController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
            config,
        }
    }

    pub async fn register(
        &self,
        request: RegisterCompanyRequest,
    ) -> Result<ApiResponse<CompanyResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El nombre de la compañía es requerido".to_string(),
            ));
        }
        if request.address.trim().is_empty() {
            return Err(AppError::ValidationError(
                "La dirección es requerida".to_string(),
            ));
        }
        if request.contact_person.trim().is_empty() {
            return Err(AppError::ValidationError(
                "La persona de contacto es requerida".to_string(),
            ));
        }
        validation::validate_email(&request.contact_email).map_err(|_| {
            AppError::ValidationError("El formato del email no es válido".to_string())
        })?;
        if request.password.len() < 8 {
            return Err(AppError::ValidationError(
                "La contraseña debe tener al menos 8 caracteres".to_string(),
            ));
        }
        if let Some(phone) = &request.contact_phone {
            validation::validate_phone(phone).map_err(|_| {
                AppError::ValidationError("El formato del teléfono no es válido".to_string())
            })?;
        }

        // Verificar que el email no esté registrado
        if self.repository.email_exists(&request.contact_email).await? {
            return Err(AppError::Conflict(
                "El email ya está registrado".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let company = self
            .repository
            .create(
                request.name,
                request.address,
                request.contact_person,
                request.contact_email,
                request.contact_phone,
                password_hash,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CompanyResponse::from(company),
            "Compañía registrada exitosamente".to_string(),
        ))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::ValidationError(
                "Email y contraseña son requeridos".to_string(),
            ));
        }

        let company = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = bcrypt::verify(&request.password, &company.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        if company.status != "active" {
            return Err(AppError::Forbidden("La cuenta está desactivada".to_string()));
        }

        let token = generate_jwt_token(company.id, &self.config)?;

        Ok(ApiResponse::success(LoginResponse {
            token,
            company: CompanyResponse::from(company),
        }))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<CompanyResponse>, AppError> {
        let company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Compañía no encontrada".to_string()))?;

        Ok(ApiResponse::success(CompanyResponse::from(company)))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<CompanyResponse>>, AppError> {
        let companies = self.repository.list().await?;
        let response = companies.into_iter().map(CompanyResponse::from).collect();
        Ok(ApiResponse::success(response))
    }
}
