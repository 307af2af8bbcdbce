use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use dm_app::usecases::tutorial::{
    AppState, PlatformEvent, TutorialAdvancement, TutorialController, TutorialLifecycleController,
    TutorialTargetRegistry, TutorialTimings,
};
use dm_core::ports::{ElementMeasurePort, InMemoryTutorialPrefs};
use dm_core::tutorial::{Rect, TutorialState, TutorialStep};

struct LaidOut(Rect);

#[async_trait]
impl ElementMeasurePort for LaidOut {
    async fn measure(&self) -> Option<Rect> {
        Some(self.0)
    }
}

fn button() -> Rect {
    Rect::new(24.0, 320.0, 180.0, 44.0)
}

#[tokio::test(start_paused = true)]
async fn platform_events_pause_resume_and_respotlight() {
    let controller = Arc::new(TutorialController::new(Arc::new(InMemoryTutorialPrefs::default())));
    let advance = TutorialAdvancement::new(Arc::clone(&controller));
    let lifecycle = Arc::new(TutorialLifecycleController::new(Arc::clone(&controller)));
    let targets = Arc::new(TutorialTargetRegistry::new(
        controller.subscribe(),
        TutorialTimings::default(),
        None,
    ));
    let targets_task = Arc::clone(&targets).spawn();
    targets
        .register(TutorialStep::AddTaskButton, Arc::new(LaidOut(button())))
        .await;

    let (tx, rx) = mpsc::channel(8);
    let pump = Arc::clone(&lifecycle).spawn(rx);
    tx.send(PlatformEvent::Navigated("/plan".into())).await.unwrap();

    controller.auto_start().await;
    advance.continue_overlay().await;
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(targets.measurement(TutorialStep::AddTaskButton).await, Some(button()));

    tx.send(PlatformEvent::AppState(AppState::Background)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(
        controller.snapshot().await.state,
        TutorialState::Paused(TutorialStep::AddTaskButton)
    );
    assert!(targets.measurement(TutorialStep::AddTaskButton).await.is_none());

    tx.send(PlatformEvent::AppState(AppState::Active)).await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(
        controller.snapshot().await.current_step(),
        Some(TutorialStep::AddTaskButton)
    );
    assert_eq!(targets.measurement(TutorialStep::AddTaskButton).await, Some(button()));

    drop(tx);
    pump.await.unwrap();
    drop(lifecycle);
    drop(advance);
    targets_task.abort();
}

#[tokio::test]
async fn navigation_away_mid_flow_and_back_resumes_same_step() {
    let controller = Arc::new(TutorialController::new(Arc::new(InMemoryTutorialPrefs::default())));
    let advance = TutorialAdvancement::new(Arc::clone(&controller));
    let lifecycle = TutorialLifecycleController::new(Arc::clone(&controller));
    lifecycle.on_route_change("/plan").await;
    controller.start_tutorial().await;
    advance.continue_overlay().await;
    lifecycle.on_route_change("/plan/add-task").await;
    advance.advance_from_add_task_button().await;

    let away = lifecycle.on_route_change("/settings").await;
    assert_eq!(away.paused_step(), Some(TutorialStep::TitleInput));

    // Input handlers stay guarded while paused.
    let ignored = advance.advance_from_title_input().await;
    assert_eq!(ignored.state, TutorialState::Paused(TutorialStep::TitleInput));

    let back = lifecycle.on_route_change("/plan/add-task").await;
    assert_eq!(back.current_step(), Some(TutorialStep::TitleInput));
    let next = advance.advance_from_title_input().await;
    assert_eq!(next.current_step(), Some(TutorialStep::CategorySelector));
}
