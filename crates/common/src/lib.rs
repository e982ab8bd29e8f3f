//! Shared runtime helpers for the bike market workspace: logging setup,
//! startup environment checks and small response types.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn detail_serializes_as_object() {
        let d = types::Detail::new("Not configured");
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v, serde_json::json!({"detail": "Not configured"}));
    }
}
