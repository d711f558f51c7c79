use chrono::NaiveDate;
use utoipa::ToSchema;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::medical::{gender::Gender, seizure_frequency::SeizureFrequency};

/// Seizure intake form as posted by the mobile client. Intentionally carries
/// no `Debug` impl; free-text and identifier fields are wiped on drop.
#[derive(serde_derive::Deserialize, Zeroize, ZeroizeOnDrop, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalFormRequest {
    // patient identity
    pub full_name: String,
    #[zeroize(skip)]
    pub birth_date: NaiveDate,
    #[zeroize(skip)]
    pub gender: Gender,
    pub cin_number: Option<i64>,
    // the client sends these two ids in snake_case, unlike the rest of the form
    #[serde(rename = "governorate_id")]
    pub governorate_id: i32,
    #[serde(rename = "city_id")]
    pub city_id: i32,
    pub address: String,
    pub phone_number: String,

    // seizure history
    #[zeroize(skip)]
    pub first_seizure_date: Option<NaiveDate>,
    #[zeroize(skip)]
    pub last_seizure_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_first_seizure: bool,
    #[zeroize(skip)]
    pub seizure_frequency: Option<SeizureFrequency>,
    pub seizure_duration: Option<i32>,
    pub total_seizures: Option<i32>,

    // seizure characteristics
    #[serde(default)]
    pub has_aura: bool,
    pub aura_description: Option<String>,
    pub seizure_type: Option<String>,

    // ictal signs, unchecked boxes may be omitted by the client
    #[serde(default)]
    pub loss_of_consciousness: bool,
    #[serde(default)]
    pub progressive_fall: bool,
    #[serde(default)]
    pub jerking_movements: bool,
    #[serde(default)]
    pub eye_deviation: bool,
    #[serde(default)]
    pub incontinence: bool,
    #[serde(default)]
    pub tongue_biting: bool,
    pub tongue_biting_location: Option<String>,
    #[serde(default)]
    pub body_stiffening: bool,
    #[serde(default)]
    pub sudden_fall: bool,
    #[serde(default)]
    pub clonic_jerks: bool,
    #[serde(default)]
    pub automatisms: bool,
    #[serde(default)]
    pub activity_stop: bool,
    #[serde(default)]
    pub sensitive_disorders: bool,
    #[serde(default)]
    pub sensory_disorders: bool,
    #[serde(default)]
    pub lateral_tongue_biting: bool,

    pub other_information: Option<String>,
}
