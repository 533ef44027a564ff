use std::sync::Arc;

use fitmarket_marketplace::domain::types::{Role, VideoSource};
use fitmarket_marketplace::domain::validation::ValidationError;
use fitmarket_marketplace::error::MarketplaceError;
use fitmarket_marketplace::usecase::nutrition::{
    PublishNutritionPlanInput, PublishNutritionPlanUseCase,
};
use fitmarket_marketplace::usecase::workout::{PublishWorkoutInput, PublishWorkoutUseCase};

use crate::helpers::{MockNutritionRepo, MockStorage, MockWorkoutRepo, pdf, session, video};

fn workout_input(title: &str) -> PublishWorkoutInput {
    PublishWorkoutInput {
        title: Some(title.to_owned()),
        description: Some("Full body, 45 minutes".to_owned()),
        ..Default::default()
    }
}

// ── PublishWorkoutUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_insert_one_row_pointing_at_uploaded_video() {
    let trainer = session(Role::Trainer);
    let storage = MockStorage::default();
    let uploaded = Arc::clone(&storage.uploaded);
    let repo = MockWorkoutRepo::empty();
    let rows = repo.rows_handle();
    let usecase = PublishWorkoutUseCase {
        repo,
        storage,
        bucket: "videos".into(),
    };

    let workout = usecase
        .execute(
            &trainer,
            PublishWorkoutInput {
                video: Some(video(1024)),
                ..workout_input("Leg day")
            },
        )
        .await
        .unwrap();

    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], workout);
    assert_eq!(rows[0].author_id, trainer.user_id());

    let uploaded = uploaded.lock().unwrap();
    assert_eq!(uploaded.len(), 1);
    let object = uploaded[0].strip_prefix("videos/").unwrap();
    assert!(object.starts_with(&format!("workout-{}-", trainer.user_id())));
    assert_eq!(rows[0].video_url, format!("https://store.test/videos/{object}"));
    assert_eq!(VideoSource::of(&rows[0].video_url), VideoSource::Upload);
}

#[tokio::test]
async fn should_store_youtube_link_without_uploading() {
    let storage = MockStorage::default();
    let uploaded = Arc::clone(&storage.uploaded);
    let repo = MockWorkoutRepo::empty();
    let rows = repo.rows_handle();
    let usecase = PublishWorkoutUseCase {
        repo,
        storage,
        bucket: "videos".into(),
    };

    usecase
        .execute(
            &session(Role::Trainer),
            PublishWorkoutInput {
                video_url: Some(" https://www.youtube.com/watch?v=dQw4w9WgXcQ ".into()),
                ..workout_input("Mobility")
            },
        )
        .await
        .unwrap();

    let rows = rows.lock().unwrap();
    assert_eq!(rows[0].video_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(VideoSource::of(&rows[0].video_url), VideoSource::Youtube);
    assert!(uploaded.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_remove_uploaded_video_exactly_once_when_insert_fails() {
    let storage = MockStorage::default();
    let uploaded = Arc::clone(&storage.uploaded);
    let removed = Arc::clone(&storage.removed);
    let usecase = PublishWorkoutUseCase {
        repo: MockWorkoutRepo::failing(),
        storage,
        bucket: "videos".into(),
    };

    let result = usecase
        .execute(
            &session(Role::Trainer),
            PublishWorkoutInput {
                video: Some(video(2048)),
                ..workout_input("Push day")
            },
        )
        .await;

    assert!(
        matches!(result, Err(MarketplaceError::Store(_))),
        "expected Store, got {result:?}"
    );
    assert_eq!(*removed.lock().unwrap(), *uploaded.lock().unwrap());
    assert_eq!(removed.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_surface_insert_error_even_when_cleanup_fails() {
    let storage = MockStorage::failing_remove();
    let removed = Arc::clone(&storage.removed);
    let usecase = PublishWorkoutUseCase {
        repo: MockWorkoutRepo::failing(),
        storage,
        bucket: "videos".into(),
    };

    let err = usecase
        .execute(
            &session(Role::Trainer),
            PublishWorkoutInput {
                video: Some(video(16)),
                ..workout_input("Pull day")
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "STORE_ERROR");
    assert!(err.to_string().contains("insert workout_content"));
    assert_eq!(removed.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_not_insert_when_upload_fails() {
    let repo = MockWorkoutRepo::empty();
    let rows = repo.rows_handle();
    let usecase = PublishWorkoutUseCase {
        repo,
        storage: MockStorage::failing_upload(),
        bucket: "videos".into(),
    };

    let err = usecase
        .execute(
            &session(Role::Trainer),
            PublishWorkoutInput {
                video: Some(video(16)),
                ..workout_input("Core")
            },
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Bucket not found"));
    assert!(rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_accept_100_char_title_and_reject_101_before_upload() {
    let storage = MockStorage::default();
    let uploaded = Arc::clone(&storage.uploaded);
    let usecase = PublishWorkoutUseCase {
        repo: MockWorkoutRepo::empty(),
        storage,
        bucket: "videos".into(),
    };
    let trainer = session(Role::Trainer);

    let too_long = usecase
        .execute(
            &trainer,
            PublishWorkoutInput {
                video: Some(video(16)),
                ..workout_input(&"t".repeat(101))
            },
        )
        .await;
    assert!(
        matches!(
            too_long,
            Err(MarketplaceError::Validation(ValidationError::TooLong {
                field: "title",
                max: 100
            }))
        ),
        "expected TooLong, got {too_long:?}"
    );
    assert!(uploaded.lock().unwrap().is_empty());

    usecase
        .execute(
            &trainer,
            PublishWorkoutInput {
                video: Some(video(16)),
                ..workout_input(&"t".repeat(100))
            },
        )
        .await
        .unwrap();
    assert_eq!(uploaded.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_both_link_and_file() {
    let usecase = PublishWorkoutUseCase {
        repo: MockWorkoutRepo::empty(),
        storage: MockStorage::default(),
        bucket: "videos".into(),
    };

    let result = usecase
        .execute(
            &session(Role::Trainer),
            PublishWorkoutInput {
                video_url: Some("https://youtu.be/abc".into()),
                video: Some(video(16)),
                ..workout_input("Both")
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(MarketplaceError::Validation(ValidationError::AmbiguousVideo))
    ));
}

#[tokio::test]
async fn should_reject_missing_video() {
    let usecase = PublishWorkoutUseCase {
        repo: MockWorkoutRepo::empty(),
        storage: MockStorage::default(),
        bucket: "videos".into(),
    };

    let err = usecase
        .execute(&session(Role::Trainer), workout_input("No video"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "video is required");
}

#[tokio::test]
async fn should_restrict_workouts_to_trainers() {
    for role in [Role::Client, Role::Nutritionist] {
        let storage = MockStorage::default();
        let uploaded = Arc::clone(&storage.uploaded);
        let repo = MockWorkoutRepo::empty();
        let rows = repo.rows_handle();
        let usecase = PublishWorkoutUseCase {
            repo,
            storage,
            bucket: "videos".into(),
        };

        let result = usecase
            .execute(
                &session(role),
                PublishWorkoutInput {
                    video: Some(video(16)),
                    ..workout_input("Sneaky")
                },
            )
            .await;

        assert!(
            matches!(result, Err(MarketplaceError::RestrictedAccess)),
            "{role}: expected RestrictedAccess, got {result:?}"
        );
        assert!(uploaded.lock().unwrap().is_empty());
        assert!(rows.lock().unwrap().is_empty());
    }
}

// ── PublishNutritionPlanUseCase ──────────────────────────────────────────────

#[tokio::test]
async fn should_publish_plan_with_uploaded_document() {
    let nutritionist = session(Role::Nutritionist);
    let storage = MockStorage::default();
    let uploaded = Arc::clone(&storage.uploaded);
    let repo = MockNutritionRepo::empty();
    let rows = repo.rows_handle();
    let usecase = PublishNutritionPlanUseCase {
        repo,
        storage,
        bucket: "documents".into(),
    };

    let plan = usecase
        .execute(
            &nutritionist,
            PublishNutritionPlanInput {
                title: Some("Cutting plan".into()),
                description: Some("12 weeks".into()),
                document: Some(pdf()),
            },
        )
        .await
        .unwrap();

    assert_eq!(rows.lock().unwrap().as_slice(), [plan.clone()]);
    let uploaded = uploaded.lock().unwrap();
    assert_eq!(uploaded.len(), 1);
    assert!(uploaded[0].starts_with(&format!("documents/plan-{}-", nutritionist.user_id())));
    assert!(uploaded[0].ends_with(".pdf"));
    assert_eq!(plan.document_url, format!("https://store.test/{}", uploaded[0]));
}

#[tokio::test]
async fn should_reject_non_pdf_document() {
    let usecase = PublishNutritionPlanUseCase {
        repo: MockNutritionRepo::empty(),
        storage: MockStorage::default(),
        bucket: "documents".into(),
    };

    let result = usecase
        .execute(
            &session(Role::Nutritionist),
            PublishNutritionPlanInput {
                title: Some("Bulk".into()),
                description: Some("Eat".into()),
                document: Some(video(16)),
            },
        )
        .await;

    assert!(
        matches!(
            result,
            Err(MarketplaceError::Validation(ValidationError::WrongType {
                field: "document",
                ..
            }))
        ),
        "expected WrongType, got {result:?}"
    );
}

#[tokio::test]
async fn should_remove_uploaded_document_when_plan_insert_fails() {
    let storage = MockStorage::default();
    let removed = Arc::clone(&storage.removed);
    let usecase = PublishNutritionPlanUseCase {
        repo: MockNutritionRepo::failing(),
        storage,
        bucket: "documents".into(),
    };

    let result = usecase
        .execute(
            &session(Role::Nutritionist),
            PublishNutritionPlanInput {
                title: Some("Keto".into()),
                description: Some("Low carb".into()),
                document: Some(pdf()),
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(removed.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_restrict_plans_to_nutritionists() {
    let usecase = PublishNutritionPlanUseCase {
        repo: MockNutritionRepo::empty(),
        storage: MockStorage::default(),
        bucket: "documents".into(),
    };

    let result = usecase
        .execute(
            &session(Role::Trainer),
            PublishNutritionPlanInput {
                title: Some("Plan".into()),
                description: Some("Plan".into()),
                document: Some(pdf()),
            },
        )
        .await;

    assert!(matches!(result, Err(MarketplaceError::RestrictedAccess)));
}
