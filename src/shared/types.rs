use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape for every non-2xx response: `{ "error": string }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
