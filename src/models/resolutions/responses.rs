use super::entities::Resolution;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/resolution.ts")]
pub struct ResolutionResponse {
    pub resolution: Resolution,
}
