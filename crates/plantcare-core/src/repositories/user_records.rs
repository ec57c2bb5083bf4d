//! Typed access to the single user record

use plantcare_shared::constants::USER_RECORD_KEY;

use crate::domain::UserRecord;
use crate::error::StorageError;
use crate::repositories::RecordStore;

pub async fn read_user_record<S>(store: &S) -> Result<Option<UserRecord>, StorageError>
where
    S: RecordStore + ?Sized,
{
    let Some(raw) = store.get(USER_RECORD_KEY).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt(e.to_string()))
}

/// Overwrites any record already stored.
pub async fn write_user_record<S>(store: &S, record: &UserRecord) -> Result<(), StorageError>
where
    S: RecordStore + ?Sized,
{
    let raw = serde_json::to_string(record).map_err(|e| StorageError::Corrupt(e.to_string()))?;
    store.set(USER_RECORD_KEY, &raw).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockRecordStore;

    #[tokio::test]
    async fn test_read_missing_record() {
        let mut store = MockRecordStore::new();
        store
            .expect_get()
            .withf(|key| key == USER_RECORD_KEY)
            .times(1)
            .returning(|_| Ok(None));

        assert!(read_user_record(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_corrupt_record() {
        let mut store = MockRecordStore::new();
        store
            .expect_get()
            .returning(|_| Ok(Some("{not json".to_string())));

        let err = read_user_record(&store).await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[tokio::test]
    async fn test_write_uses_fixed_key() {
        let record = UserRecord::new(
            "A".to_string(),
            "a@b.com".to_string(),
            "123456789".to_string(),
            "secret1".to_string(),
        );
        let mut store = MockRecordStore::new();
        store
            .expect_set()
            .withf(|key, value| key == "user" && value.contains(r#""fullName":"A""#))
            .times(1)
            .returning(|_, _| Ok(()));

        write_user_record(&store, &record).await.unwrap();
    }
}
