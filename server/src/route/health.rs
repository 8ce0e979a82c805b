use crate::handler::AppModule;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use time::OffsetDateTime;

const NAME: &str = "E-Library API System";
const DESCRIPTION: &str = "API for managing an online library system";

pub trait HealthRouter {
    fn route_health(self) -> Self;
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    os: &'static str,
    family: &'static str,
    arch: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    system: SystemInfo,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
    status: &'static str,
}

impl HealthResponse {
    fn now() -> Self {
        Self {
            name: NAME,
            version: env!("CARGO_PKG_VERSION"),
            description: DESCRIPTION,
            system: SystemInfo {
                os: std::env::consts::OS,
                family: std::env::consts::FAMILY,
                arch: std::env::consts::ARCH,
            },
            timestamp: OffsetDateTime::now_utc(),
            status: "operational",
        }
    }
}

impl HealthRouter for Router<AppModule> {
    fn route_health(self) -> Self {
        self.route("/", get(|| async { Json(HealthResponse::now()) }))
    }
}
