use serde_derive::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How often the patient reports seizures, as coarse intake-form buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeizureFrequency {
    MultiplePerDay,
    Daily,
    Weekly,
    Monthly,
    Rarely,
}
