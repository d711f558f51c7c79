//! OpenAPI schema registration for the mobile client.
//!
//! Routing lives in the host application, so only `components(schemas(...))`
//! are registered here; the host contributes its own `paths(...)`.

use utoipa::OpenApi;

use crate::domain::medical::{gender::Gender, seizure_frequency::SeizureFrequency};
use crate::dto::requests::medical::medical_form_request::MedicalFormRequest;

#[derive(OpenApi)]
#[openapi(components(schemas(MedicalFormRequest, Gender, SeizureFrequency)))]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.unwrap().schemas;
        assert!(schemas.contains_key("MedicalFormRequest"));
        assert!(schemas.contains_key("Gender"));
        assert!(schemas.contains_key("SeizureFrequency"));
    }
}
