use std::error::Error;
use std::fmt;
use tracing::info;

use crate::profile::{ActivityLevel, BodyProfile, Goal, UserProfile};
use crate::store::{ProfileStore, StoreError};

#[derive(Debug)]
pub enum FlowError {
    /// Editing needs an existing profile.
    NoProfile,
    Store(StoreError),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::NoProfile => write!(f, "No profile saved yet; run onboarding first"),
            FlowError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl Error for FlowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FlowError::Store(err) => Some(err),
            FlowError::NoProfile => None,
        }
    }
}

impl From<StoreError> for FlowError {
    fn from(err: StoreError) -> Self {
        FlowError::Store(err)
    }
}

/// Fields the profile screen lets a user change. `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileUpdate {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub goal: Option<Goal>,
    pub activity_level: Option<ActivityLevel>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ProfileUpdate::default()
    }

    pub fn apply(&self, body: &BodyProfile) -> BodyProfile {
        BodyProfile {
            weight_kg: self.weight_kg.unwrap_or(body.weight_kg),
            height_cm: self.height_cm.unwrap_or(body.height_cm),
            goal: self.goal.unwrap_or(body.goal),
            activity_level: self.activity_level.unwrap_or(body.activity_level),
            ..*body
        }
    }
}

/// Creates a fresh profile, computes its targets once and saves it.
pub async fn onboard<S: ProfileStore + ?Sized>(
    store: &S,
    name: &str,
    body: BodyProfile,
) -> Result<UserProfile, FlowError> {
    let profile = UserProfile::new(name, body);
    store.save_profile(&profile).await?;
    info!(name, "onboarding complete");
    Ok(profile)
}

/// Loads the saved profile, applies `update`, recomputes targets and saves it back.
pub async fn edit_profile<S: ProfileStore + ?Sized>(
    store: &S,
    update: ProfileUpdate,
) -> Result<UserProfile, FlowError> {
    let mut profile = store.load_profile().await?.ok_or(FlowError::NoProfile)?;
    let body = update.apply(profile.body());
    profile.set_body(body);
    store.save_profile(&profile).await?;
    Ok(profile)
}
