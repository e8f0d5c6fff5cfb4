use std::sync::Arc;

use burrow_shortener::{
    CreateParams, RequestedValidity, Shortener, ShortenerError, ShortenerService,
};
use burrow_storage::InMemoryRepository;

fn params(url: &str, code: &str) -> CreateParams {
    CreateParams {
        original_url: url.to_string(),
        short_code: code.to_string(),
        validity: RequestedValidity::Absent,
    }
}

fn shared_service() -> Arc<dyn Shortener> {
    Arc::new(ShortenerService::new(
        InMemoryRepository::new(),
        "https://bur.row",
    ))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn two_simultaneous_creates_yield_one_winner() {
    let service = shared_service();

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.create(params("https://one.example.com", "race")).await })
    };
    let second = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.create(params("https://two.example.com", "race")).await })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let successes: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(ShortenerError::AlreadyExists(_))))
        .count();

    assert_eq!(successes.len(), 1);
    assert_eq!(conflicts, 1);
    assert_eq!(successes[0].short_url, "https://bur.row/race");

    let resolved = service.resolve("race").await.unwrap();
    assert!(resolved == "https://one.example.com" || resolved == "https://two.example.com");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_codes_created_concurrently_all_resolve() {
    let service = shared_service();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let url = format!("https://example.com/{i}");
                service.create(params(&url, &format!("code_{i}"))).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for i in 0..50 {
        let url = service.resolve(&format!("code_{i}")).await.unwrap();
        assert_eq!(url, format!("https://example.com/{i}"));
    }
}
