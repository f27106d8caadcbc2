// OpenAPI document for the public API

use utoipa::OpenApi;

use crate::api::{self, ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        api::events::list_events,
        api::events::create_event,
        api::events::update_event,
        api::events::delete_event,
    ),
    components(
        schemas(
            api::events::Event,
            api::events::CreateEventRequest,
            api::events::UpdateEventRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "events", description = "Calendar event endpoints")
    ),
    info(
        title = "Eventcal API",
        description = "CRUD API for user-scoped calendar events",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_event_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/events"));
        assert!(paths.iter().any(|p| p.as_str() == "/events/{id}"));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_openapi_version_tracks_package() {
        assert_eq!(ApiDoc::openapi().info.version, env!("CARGO_PKG_VERSION"));
    }
}
