use std::collections::HashSet;
use std::sync::Arc;

use media_transcriber::application::ports::JobRepository;
use media_transcriber::application::services::{JobQueryError, JobQueryService};
use media_transcriber::domain::{Job, JobId, JobStatus, TranscriptionRequest};
use media_transcriber::infrastructure::persistence::InMemoryJobRepository;

async fn seeded() -> (Arc<InMemoryJobRepository>, Job, Job) {
    let repository = Arc::new(InMemoryJobRepository::new());
    let queued = Job::new(TranscriptionRequest::new("https://a.example/1", "en", false));
    let processing = Job::new(TranscriptionRequest::new("https://a.example/2", "en", true));
    repository.create(&queued).await.unwrap();
    repository.create(&processing).await.unwrap();
    let processing = repository
        .mutate(processing.id, Box::new(|job| job.start_processing()))
        .await
        .unwrap();
    (repository, queued, processing)
}

#[tokio::test]
async fn given_unknown_id_when_getting_then_reports_not_found() {
    let (repository, _, _) = seeded().await;
    let queries = JobQueryService::new(repository);

    let id = JobId::new();
    let result = queries.get_by_id(id).await;

    assert!(matches!(result, Err(JobQueryError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn given_known_id_when_getting_then_returns_current_state() {
    let (repository, _, processing) = seeded().await;
    let queries = JobQueryService::new(repository);

    let job = queries.get_by_id(processing.id).await.unwrap();

    assert_eq!(job.status, JobStatus::Processing);
    assert!(job.request.translate);
}

#[tokio::test]
async fn given_jobs_in_several_states_when_listing_then_all_and_filtered_views_agree() {
    let (repository, queued, processing) = seeded().await;
    let queries = JobQueryService::new(repository);

    let all = queries.list_all().await.unwrap();
    let only_queued = queries.list_by_status(JobStatus::Queued).await.unwrap();
    let completed = queries.list_by_status(JobStatus::Completed).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(
        all.iter().map(|job| job.id).collect::<HashSet<_>>(),
        HashSet::from([queued.id, processing.id])
    );
    assert_eq!(only_queued.len(), 1);
    assert_eq!(only_queued[0].id, queued.id);
    assert!(completed.is_empty());
}
