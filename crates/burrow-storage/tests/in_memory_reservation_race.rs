use std::sync::Arc;

use burrow_core::{ShortCode, UrlRecord, ValidityDays};
use burrow_storage::{InMemoryRepository, Repository, StorageError};
use jiff::Timestamp;

const CONTENDERS: usize = 64;

fn record(code: &ShortCode, url: String) -> UrlRecord {
    UrlRecord::new(code.clone(), url, Timestamp::now(), ValidityDays::default())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn only_one_reservation_wins() {
    let repo = Arc::new(InMemoryRepository::new());
    let code = ShortCode::new("race").unwrap();
    let barrier = Arc::new(tokio::sync::Barrier::new(CONTENDERS));

    let handles: Vec<_> = (0..CONTENDERS)
        .map(|i| {
            let repo = Arc::clone(&repo);
            let barrier = Arc::clone(&barrier);
            let code = code.clone();
            tokio::spawn(async move {
                barrier.wait().await;
                let url = format!("https://contender{}.example.com", i);
                repo.reserve(&code, record(&code, url.clone()))
                    .await
                    .map(|()| url)
            })
        })
        .collect();

    let mut winners = Vec::new();
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(url) => winners.push(url),
            Err(StorageError::AlreadyExists(c)) => {
                assert_eq!(c, "race");
                conflicts += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(conflicts, CONTENDERS - 1);

    let stored = repo.lookup(&code).await.unwrap();
    assert_eq!(stored.original_url, winners[0]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_see_whole_record_or_nothing() {
    let repo = Arc::new(InMemoryRepository::new());
    let code = ShortCode::new("observed").unwrap();
    let expected = record(&code, "https://example.com/observed".to_string());

    let reader = {
        let repo = Arc::clone(&repo);
        let code = code.clone();
        let expected = expected.clone();
        tokio::spawn(async move {
            for _ in 0..1_000 {
                match repo.lookup(&code).await {
                    Ok(found) => assert_eq!(found, expected),
                    Err(err) => assert!(matches!(err, StorageError::NotFound(_))),
                }
                tokio::task::yield_now().await;
            }
        })
    };

    repo.reserve(&code, expected.clone()).await.unwrap();
    reader.await.unwrap();

    assert_eq!(repo.lookup(&code).await.unwrap(), expected);
}
