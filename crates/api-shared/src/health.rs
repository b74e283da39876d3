use crate::HealthRes;

/// Plain-text body served by the root liveness route.
pub const LIVENESS_MESSAGE: &str = "Recipe Book API running";

/// Liveness checks shared by every API surface.
///
/// The service holds no state; a response means the process is up and serving requests. It
/// does not probe the store.
pub struct HealthService;

impl HealthService {
    /// Text returned by `GET /`.
    pub fn liveness() -> &'static str {
        LIVENESS_MESSAGE
    }

    /// Structured health response for `GET /health`.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Recipe Book API is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_health_reports_ok() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert!(!res.message.is_empty());
    }

    #[test]
    fn test_liveness_text() {
        assert_eq!(HealthService::liveness(), "Recipe Book API running");
    }
}
