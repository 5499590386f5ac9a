//! Command-line walkthrough of the taskpad flows.
//!
//! Drives a store through the add, toggle, edit, and deferred delete
//! flows, printing the page after each step.

use std::sync::Arc;
use std::time::Duration;
use taskpad::{AppAction, AppEnvironment, AppReducer, AppState, TaskId};
use taskpad_core::environment::{SystemClock, UuidGenerator};
use taskpad_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskpad=debug,taskpad_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Taskpad ===\n");

    // Create environment and store
    let env = AppEnvironment::new(Arc::new(SystemClock), Arc::new(UuidGenerator));
    let store = Store::new(AppState::new(), AppReducer::new(), env);

    println!("Adding tasks...");
    for text in ["Buy milk", "Write documentation", "Water the plants"] {
        let _ = store
            .send(AppAction::AddTask {
                text: text.to_string(),
            })
            .await;
    }

    let state = store.state(std::clone::Clone::clone).await;
    println!("\nTasks added: {}", state.tasks.total_count());
    for task in &state.tasks {
        let status = if task.completed { "✓" } else { " " };
        println!("  [{}] {}", status, task.title);
    }

    let ids: Vec<TaskId> = store
        .state(|s| s.tasks.iter().map(|t| t.id.clone()).collect())
        .await;
    let [first, second, third] = ids.as_slice() else {
        eprintln!("expected exactly three tasks");
        return;
    };

    // Complete one task
    println!("\nCompleting 'Buy milk'...");
    let _ = store
        .send(AppAction::ToggleComplete { id: first.clone() })
        .await;

    // Rename one task through an edit session
    println!("Renaming 'Write documentation'...");
    let _ = store
        .send(AppAction::BeginEdit { id: second.clone() })
        .await;
    let _ = store
        .send(AppAction::UpdateDraft {
            text: "Write the release notes".to_string(),
        })
        .await;
    let _ = store.send(AppAction::CommitEdit).await;

    let state = store.state(std::clone::Clone::clone).await;
    println!("\nCurrent status:");
    for task in &state.tasks {
        let status = if task.completed { "✓" } else { " " };
        println!("  [{}] {}", status, task.title);
    }
    println!(
        "Completed: {}/{}",
        state.tasks.completed_count(),
        state.tasks.total_count()
    );

    // Deferred delete, as a removal animation would schedule it
    println!("\nScheduling 'Water the plants' for deletion in 500ms...");
    let mut handle = store
        .send(AppAction::ScheduleDelete {
            id: third.clone(),
            after: Duration::from_millis(500),
        })
        .await;
    handle.wait().await;
    println!("Deferred delete fired.");

    let state = store.state(std::clone::Clone::clone).await;
    println!("\nFinal tasks: {}", state.tasks.total_count());
    for task in &state.tasks {
        let status = if task.completed { "✓" } else { " " };
        println!("  [{}] {}", status, task.title);
    }
    println!(
        "Completed: {}/{}",
        state.tasks.completed_count(),
        state.tasks.total_count()
    );

    println!("\n=== Demo Complete ===");
}
