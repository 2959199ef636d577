//! Generic CRUD resource description.
//!
//! Every admin entity edited through a list + form screen implements
//! [`Resource`]; the frontend's generic API helpers and list view model are
//! parameterised by it instead of repeating the same fetch/save/delete code
//! per screen.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::common::{RecordId, ValidationError};

pub trait Resource: Clone + Serialize + DeserializeOwned + 'static {
    /// Collection path under the API base, e.g. `/brands`.
    const ENDPOINT: &'static str;
    /// Singular human label used in messages.
    const LABEL: &'static str;

    fn id(&self) -> Option<&RecordId>;

    fn display_name(&self) -> String;

    /// Local checks run before any request is issued.
    fn validate(&self) -> Result<(), ValidationError>;

    fn is_new(&self) -> bool {
        self.id().is_none()
    }

    fn item_path(id: &RecordId) -> String {
        format!("{}/{}", Self::ENDPOINT, id)
    }
}

/// Remove a row locally after a successful DELETE.
pub fn remove_by_id<T: Resource>(items: &mut Vec<T>, id: &RecordId) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != Some(id));
    items.len() != before
}
