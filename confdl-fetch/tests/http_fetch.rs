// Integration tests for the HTTP source against a mock dataset server.
use chrono::NaiveDateTime;
use confdl_core::{CategoryTable, FixedClock, TrackedConference, select_upcoming_with};
use confdl_fetch::{ConferenceFetcher, FetchError, HttpSource};
use mockito::Server;

const NEURIPS: &str = r#"
- title: NeurIPS
  description: Conference on Neural Information Processing Systems
  rank:
    ccf: A
  confs:
    - year: 2026
      link: https://neurips.cc/Conferences/2026
      place: San Diego, USA
      date: December 6-12, 2026
      timezone: UTC-8
      timeline:
        - deadline: '2026-01-15 23:59:59'
    - year: 2027
      timezone: AoE
      timeline:
        - deadline: TBA
"#;

const NDSS: &str = r#"
title: NDSS
description: Network and Distributed System Security Symposium
rank:
  ccf: A
confs:
  - year: 2026
    timezone: AoE
    timeline:
      - abstract_deadline: '2026-01-03'
        deadline: '2026-01-10'
        comment: Fall cycle
"#;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[tokio::test]
async fn test_pipeline_against_mock_dataset() {
    let mut server = Server::new_async().await;

    let m_nips = server
        .mock("GET", "/AI/nips.yml")
        .with_status(200)
        .with_body(NEURIPS)
        .create_async()
        .await;
    let m_ndss = server
        .mock("GET", "/SC/ndss.yml")
        .with_status(200)
        .with_body(NDSS)
        .create_async()
        .await;
    let m_missing = server
        .mock("GET", "/SC/ccs.yml")
        .with_status(404)
        .create_async()
        .await;
    let m_broken = server
        .mock("GET", "/DB/icdm.yml")
        .with_status(500)
        .create_async()
        .await;

    let fetcher = ConferenceFetcher::new(HttpSource::new(server.url(), "yml"));
    let tracked = vec![
        TrackedConference::new("AI", "nips"),
        TrackedConference::new("SC", "ccs"),
        TrackedConference::new("SC", "ndss"),
        TrackedConference::new("DB", "icdm"),
    ];

    let collected = fetcher.collect(&tracked, &CategoryTable::default()).await;
    // The TBA-only 2027 cycle never makes it out of aggregation
    assert_eq!(collected.len(), 2);

    let clock = FixedClock(ts("2026-01-01 00:00:00"));
    let upcoming = select_upcoming_with(collected, &clock);
    assert_eq!(upcoming.len(), 2);

    // NDSS: abstract 2026-01-03 23:59:59 AoE -> 2026-01-04 20:59:59 KST
    let ndss = &upcoming[0];
    assert_eq!(ndss.name, "NDSS");
    assert_eq!(ndss.category, "Security");
    assert_eq!(ndss.min_days_left, Some(3));
    assert_eq!(ndss.timelines.len(), 2);
    assert_eq!(ndss.timelines[0].deadline_reference, ts("2026-01-04 20:59:59"));
    assert_eq!(ndss.timelines[1].comment, "Fall cycle");

    let nips = &upcoming[1];
    assert_eq!(nips.name, "NeurIPS");
    assert_eq!(nips.year, "2026");
    assert_eq!(nips.timelines.len(), 1);
    assert_eq!(nips.timelines[0].deadline_reference, ts("2026-01-16 16:59:59"));
    assert_eq!(nips.timelines[0].days_left, Some(15));
    assert_eq!(nips.min_days_left, Some(15));

    m_nips.assert_async().await;
    m_ndss.assert_async().await;
    m_missing.assert_async().await;
    m_broken.assert_async().await;
}

#[tokio::test]
async fn test_non_200_status_is_reported() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/AI/cvpr.yml")
        .with_status(404)
        .create_async()
        .await;

    let fetcher = ConferenceFetcher::new(HttpSource::new(server.url(), "yml"));
    let cvpr = TrackedConference::new("AI", "cvpr");

    let err = fetcher.try_fetch(&cvpr).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert!(fetcher.fetch(&cvpr).await.is_none());
}

#[tokio::test]
async fn test_unreachable_host_yields_nothing() {
    // Nothing listens on port 9 (discard) locally; the connection is refused.
    let fetcher = ConferenceFetcher::new(HttpSource::new("http://127.0.0.1:9", "yml"));
    let tracked = vec![TrackedConference::new("AI", "cvpr")];

    let err = fetcher.try_fetch(&tracked[0]).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert!(fetcher.collect(&tracked, &CategoryTable::default()).await.is_empty());
}

#[tokio::test]
async fn test_repeated_loads_are_identical() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/SC/ndss.yml")
        .with_status(200)
        .with_body(NDSS)
        .expect(2)
        .create_async()
        .await;

    let fetcher = ConferenceFetcher::new(HttpSource::new(server.url(), "yml"));
    let tracked = vec![TrackedConference::new("SC", "ndss")];
    let clock = FixedClock(ts("2026-01-01 00:00:00"));

    let first = select_upcoming_with(fetcher.collect(&tracked, &CategoryTable::default()).await, &clock);
    let second = select_upcoming_with(fetcher.collect(&tracked, &CategoryTable::default()).await, &clock);
    assert_eq!(first, second);
}
