//! CRUD over any [`Resource`].

use contracts::domain::common::RecordId;
use contracts::shared::resource::Resource;
use serde::de::DeserializeOwned;

use super::http;

/// Lists come back either as a bare array or wrapped in an envelope.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "items", alias = "data")]
        data: Vec<T>,
    },
}

impl<T> ListBody<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) => items,
            ListBody::Wrapped { data } => data,
        }
    }
}

/// GET a collection from any path, whichever shape it comes in.
pub async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let body: ListBody<T> = http::get_json(path).await?;
    Ok(body.into_vec())
}

pub async fn fetch_all<T: Resource>() -> Result<Vec<T>, String> {
    fetch_list(T::ENDPOINT).await
}

pub async fn fetch_one<T: Resource>(id: &RecordId) -> Result<T, String> {
    http::get_json(&T::item_path(id)).await
}

/// POST the record; the server's copy (with its new id) is returned.
pub async fn create<T: Resource>(item: &T) -> Result<T, String> {
    item.validate().map_err(|e| e.to_string())?;
    http::post_json(T::ENDPOINT, item).await
}

pub async fn update<T: Resource>(id: &RecordId, item: &T) -> Result<T, String> {
    item.validate().map_err(|e| e.to_string())?;
    http::put_json::<T, MaybeBody<T>>(&T::item_path(id), item)
        .await
        .map(|body| body.0.unwrap_or_else(|| item.clone()))
}

/// Create or update depending on whether the record has an id.
pub async fn save<T: Resource>(item: &T) -> Result<T, String> {
    match item.id() {
        Some(id) => update(id, item).await,
        None => create(item).await,
    }
}

pub async fn remove<T: Resource>(id: &RecordId) -> Result<(), String> {
    http::delete(&T::item_path(id)).await
}

/// Some update endpoints answer `204`/`{}` instead of the record.
struct MaybeBody<T>(Option<T>);

impl<'de, T: DeserializeOwned> serde::Deserialize<'de> for MaybeBody<T> {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(d)?;
        Ok(MaybeBody(serde_json::from_value(value).ok()))
    }
}
