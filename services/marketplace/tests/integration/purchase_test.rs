use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;
use fitmarket_marketplace::domain::types::{ContentKind, ContentRef, PLAN_NOT_FOUND, Role};
use fitmarket_marketplace::error::MarketplaceError;
use fitmarket_marketplace::usecase::dashboard::{Dashboard, DashboardUseCase};
use fitmarket_marketplace::usecase::purchase::{
    CreatePurchaseUseCase, ListCatalogUseCase, ListPurchasesUseCase,
};

use crate::helpers::{
    MockNutritionRepo, MockPurchaseRepo, MockResolver, MockWorkoutRepo, nutrition_plan, purchase,
    session, workout,
};

// ── ListCatalogUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_price_catalog_by_kind() {
    let author = Uuid::now_v7();
    let usecase = ListCatalogUseCase {
        workouts: MockWorkoutRepo::new(vec![workout(author, "HIIT", 1)]),
        nutrition: MockNutritionRepo::new(vec![nutrition_plan(author, "Vegan", 1)]),
    };
    let client = session(Role::Client);

    let workouts = usecase
        .execute(&client, ContentKind::Workout, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].price_cents, 2999);
    assert_eq!(workouts[0].content.kind(), ContentKind::Workout);

    let plans = usecase
        .execute(&client, ContentKind::Nutrition, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(plans[0].price_cents, 2499);
    assert_eq!(plans[0].title, "Vegan");
}

#[tokio::test]
async fn should_keep_catalog_from_professionals() {
    let usecase = ListCatalogUseCase {
        workouts: MockWorkoutRepo::empty(),
        nutrition: MockNutritionRepo::empty(),
    };

    let result = usecase
        .execute(
            &session(Role::Trainer),
            ContentKind::Workout,
            PageRequest::default(),
        )
        .await;

    assert!(matches!(result, Err(MarketplaceError::RestrictedAccess)));
}

// ── CreatePurchaseUseCase ────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn should_record_purchase_of_existing_content_after_payment_delay() {
    let client = session(Role::Client);
    let content = ContentRef::Nutrition(Uuid::now_v7());
    let repo = MockPurchaseRepo::empty();
    let stored = repo.purchases_handle();
    let usecase = CreatePurchaseUseCase {
        purchases: repo,
        resolver: MockResolver::default().with(content, "Vegan"),
        payment_delay: Duration::from_secs(2),
    };

    let started = tokio::time::Instant::now();
    let purchase = usecase.execute(&client, content).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(2));
    assert_eq!(purchase.buyer_id, client.user_id());
    assert_eq!(purchase.content.kind(), ContentKind::Nutrition);
    assert_eq!(purchase.content.id(), content.id());
    assert_eq!(stored.lock().unwrap().as_slice(), [purchase]);
}

#[tokio::test]
async fn should_reject_purchase_of_missing_content() {
    let repo = MockPurchaseRepo::empty();
    let stored = repo.purchases_handle();
    let usecase = CreatePurchaseUseCase {
        purchases: repo,
        resolver: MockResolver::default(),
        payment_delay: Duration::ZERO,
    };

    let result = usecase
        .execute(
            &session(Role::Client),
            ContentRef::Workout(Uuid::now_v7()),
        )
        .await;

    assert!(
        matches!(result, Err(MarketplaceError::ContentNotFound)),
        "expected ContentNotFound, got {result:?}"
    );
    assert!(stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_accept_repeat_purchases() {
    let content = ContentRef::Workout(Uuid::now_v7());
    let repo = MockPurchaseRepo::empty();
    let stored = repo.purchases_handle();
    let usecase = CreatePurchaseUseCase {
        purchases: repo,
        resolver: MockResolver::default().with(content, "HIIT"),
        payment_delay: Duration::ZERO,
    };
    let client = session(Role::Client);

    usecase.execute(&client, content).await.unwrap();
    usecase.execute(&client, content).await.unwrap();

    assert_eq!(stored.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_restrict_purchases_to_clients() {
    let content = ContentRef::Workout(Uuid::now_v7());
    let resolver = MockResolver::default().with(content, "HIIT");
    let lookups = Arc::clone(&resolver.lookups);
    let usecase = CreatePurchaseUseCase {
        purchases: MockPurchaseRepo::empty(),
        resolver,
        payment_delay: Duration::ZERO,
    };

    let result = usecase
        .execute(&session(Role::Nutritionist), content)
        .await;

    assert!(matches!(result, Err(MarketplaceError::RestrictedAccess)));
    assert_eq!(*lookups.lock().unwrap(), 0);
}

// ── ListPurchasesUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_show_plan_not_found_for_deleted_content() {
    let client = session(Role::Client);
    let kept = ContentRef::Workout(Uuid::now_v7());
    let deleted = ContentRef::Nutrition(Uuid::now_v7());
    let resolver = MockResolver::default().with(kept, "HIIT");
    let lookups = Arc::clone(&resolver.lookups);
    let usecase = ListPurchasesUseCase {
        purchases: MockPurchaseRepo::new(vec![
            purchase(client.user_id(), kept, 3),
            purchase(client.user_id(), deleted, 1),
            purchase(Uuid::now_v7(), kept, 0),
        ]),
        resolver,
    };

    let details = usecase.execute(&client).await.unwrap();

    assert_eq!(details.len(), 2);
    assert_eq!(details[0].purchase.content, deleted);
    assert!(details[0].content.is_none());
    assert_eq!(details[0].title(), PLAN_NOT_FOUND);
    assert_eq!(details[1].title(), "HIIT");
    assert_eq!(*lookups.lock().unwrap(), 2);
}

// ── DashboardUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_build_client_dashboard_newest_first() {
    let client = session(Role::Client);
    let older = ContentRef::Workout(Uuid::now_v7());
    let newer = ContentRef::Nutrition(Uuid::now_v7());
    let usecase = DashboardUseCase {
        purchases: MockPurchaseRepo::new(vec![
            purchase(client.user_id(), older, 5),
            purchase(client.user_id(), newer, 1),
        ]),
        resolver: MockResolver::default().with(older, "HIIT"),
        workouts: MockWorkoutRepo::empty(),
        nutrition: MockNutritionRepo::empty(),
    };

    let dashboard = usecase.execute(&client, Utc::now()).await.unwrap();

    let Dashboard::Client {
        purchases,
        total_purchases,
    } = dashboard
    else {
        panic!("expected client dashboard");
    };
    assert_eq!(total_purchases, 2);
    assert_eq!(purchases[0].purchase.content, newer);
    assert_eq!(purchases[0].title(), PLAN_NOT_FOUND);
    assert_eq!(purchases[1].title(), "HIIT");
}

#[tokio::test]
async fn should_count_recent_uploads_for_trainer() {
    let trainer = session(Role::Trainer);
    let usecase = DashboardUseCase {
        purchases: MockPurchaseRepo::empty(),
        resolver: MockResolver::default(),
        workouts: MockWorkoutRepo::new(vec![
            workout(trainer.user_id(), "Old", 30),
            workout(trainer.user_id(), "Fresh", 2),
            workout(Uuid::now_v7(), "Someone else", 1),
        ]),
        nutrition: MockNutritionRepo::empty(),
    };

    let dashboard = usecase.execute(&trainer, Utc::now()).await.unwrap();

    let Dashboard::Professional { uploads, stats } = dashboard else {
        panic!("expected professional dashboard");
    };
    let titles: Vec<_> = uploads.iter().map(|u| u.title.as_str()).collect();
    assert_eq!(titles, ["Fresh", "Old"]);
    assert_eq!(stats.total_uploads, 2);
    assert_eq!(stats.recent_activity, 1);
    assert!(uploads.iter().all(|u| u.kind == ContentKind::Workout));
}

#[tokio::test]
async fn should_list_plans_for_nutritionist_dashboard() {
    let nutritionist = session(Role::Nutritionist);
    let usecase = DashboardUseCase {
        purchases: MockPurchaseRepo::empty(),
        resolver: MockResolver::default(),
        workouts: MockWorkoutRepo::new(vec![workout(nutritionist.user_id(), "Not mine", 1)]),
        nutrition: MockNutritionRepo::new(vec![nutrition_plan(nutritionist.user_id(), "Keto", 1)]),
    };

    let dashboard = usecase.execute(&nutritionist, Utc::now()).await.unwrap();

    let Dashboard::Professional { uploads, .. } = dashboard else {
        panic!("expected professional dashboard");
    };
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].kind, ContentKind::Nutrition);
}
