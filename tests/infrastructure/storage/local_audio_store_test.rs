use bytes::Bytes;

use podforge::application::ports::{AudioStore, AudioStoreError};
use podforge::infrastructure::storage::LocalAudioStore;

fn create_test_store() -> (tempfile::TempDir, LocalAudioStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf(), "/audio".to_string()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_audio_bytes_when_storing_then_file_lands_in_directory() {
    let (dir, store) = create_test_store();

    let url = store
        .put("episode.mp3", Bytes::from_static(b"mp3-bytes"))
        .await
        .unwrap();

    assert_eq!(url, "/audio/episode.mp3");
    let on_disk = std::fs::read(dir.path().join("episode.mp3")).unwrap();
    assert_eq!(on_disk, b"mp3-bytes");
}

#[tokio::test]
async fn given_stored_file_when_head_then_returns_size() {
    let (_dir, store) = create_test_store();

    store
        .put("episode.mp3", Bytes::from_static(b"hello world"))
        .await
        .unwrap();

    let size = store.head("episode.mp3").await.unwrap();
    assert_eq!(size, 11);
}

#[tokio::test]
async fn given_missing_file_when_head_then_returns_not_found() {
    let (_dir, store) = create_test_store();

    let result = store.head("missing.mp3").await;
    assert!(matches!(result, Err(AudioStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_existing_file_when_storing_again_then_content_is_replaced() {
    let (dir, store) = create_test_store();

    store
        .put("episode.mp3", Bytes::from_static(b"first"))
        .await
        .unwrap();
    store
        .put("episode.mp3", Bytes::from_static(b"second"))
        .await
        .unwrap();

    let on_disk = std::fs::read(dir.path().join("episode.mp3")).unwrap();
    assert_eq!(on_disk, b"second");
}

#[tokio::test]
async fn given_trailing_slash_base_path_when_storing_then_url_has_single_slash() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf(), "/audio/".to_string()).unwrap();

    let url = store
        .put("episode.mp3", Bytes::from_static(b"data"))
        .await
        .unwrap();

    assert_eq!(url, "/audio/episode.mp3");
}

#[tokio::test]
async fn given_missing_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("audio").join("out");

    let store = LocalAudioStore::new(nested.clone(), "/audio".to_string()).unwrap();
    store
        .put("episode.mp3", Bytes::from_static(b"data"))
        .await
        .unwrap();

    assert!(nested.join("episode.mp3").exists());
}
