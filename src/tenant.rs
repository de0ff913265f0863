use crate::errors::ServiceError;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Header carrying the authenticated organization's identifier. Session and
/// token handling live in front of this service; by the time a request gets
/// here its tenant has been established and is passed explicitly.
pub const ORGANIZATION_HEADER: &str = "x-organization-id";

/// Tenant context extracted from every request. All repository lookups take
/// this id as an explicit filter; there is no ambient tenant state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext {
    pub organization_id: Uuid,
}

impl TenantContext {
    pub fn new(organization_id: Uuid) -> Self {
        Self { organization_id }
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ORGANIZATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                ServiceError::Unauthorized("missing organization context".to_string())
            })?;

        let organization_id = Uuid::parse_str(raw).map_err(|_| {
            ServiceError::Unauthorized("invalid organization context".to_string())
        })?;

        Ok(TenantContext::new(organization_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<TenantContext, ServiceError> {
        let (mut parts, _) = request.into_parts();
        TenantContext::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn extracts_organization_id() {
        let org_id = Uuid::new_v4();
        let request = Request::builder()
            .header(ORGANIZATION_HEADER, org_id.to_string())
            .body(())
            .unwrap();

        let ctx = extract(request).await.unwrap();
        assert_eq!(ctx.organization_id, org_id);
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();
        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn malformed_header_is_unauthorized() {
        let request = Request::builder()
            .header(ORGANIZATION_HEADER, "not-a-uuid")
            .body(())
            .unwrap();

        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }
}
