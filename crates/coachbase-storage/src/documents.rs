use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

const JSON: &str = "application/json";

/// Load a JSON document from S3. `Ok(None)` when the key does not exist.
pub async fn load_document<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match objects::get_object(client, bucket, key).await {
        Ok(body) => Ok(Some(serde_json::from_slice(&body)?)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON document to S3.
pub async fn save_document<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    objects::put_object(client, bucket, key, body, JSON).await
}
