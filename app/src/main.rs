//! Interactive command-line client for the Taskwire todo backend.
//!
//! Reads commands from stdin, drives the todo and theme stores, and
//! prints notifications from a task subscribed to the action broadcast.
//!
//! ## Usage
//!
//! Point the client at a backend (defaults to `http://localhost:3001`):
//! ```bash
//! export TASKWIRE_API_URL="http://localhost:3001"
//! cargo run --bin taskwire
//! ```
//!
//! Type `help` at the prompt for the command list.

use std::io::{self, Write};
use std::time::Duration;
use taskwire_api::TodoId;
use taskwire_app::{
    FileThemeStorage, LoadPhase, ProductionTodoEnvironment, ThemeAction, ThemeEnvironment,
    ThemeReducer, ThemeState, TodoAppAction, TodoAppReducer, TodoAppState,
};
use taskwire_core::environment::{Clock, SystemClock};
use taskwire_runtime::Store;

/// How long `quit` waits for in-flight effects before giving up
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

type TodoStore = Store<
    TodoAppState,
    TodoAppAction,
    ProductionTodoEnvironment,
    TodoAppReducer<ProductionTodoEnvironment>,
>;

type ThemeStore = Store<
    ThemeState,
    ThemeAction,
    ThemeEnvironment<FileThemeStorage>,
    ThemeReducer<FileThemeStorage>,
>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("📝 My Todo List");
    println!("Stay organized and get things done\n");
    println!("Type 'help' for commands.\n");

    let todo_store = Store::new(
        TodoAppState::new(),
        TodoAppReducer::new(),
        ProductionTodoEnvironment::from_env(),
    );
    let theme_store = Store::new(
        ThemeState::default(),
        ThemeReducer::new(),
        ThemeEnvironment::new(FileThemeStorage::from_env()),
    );

    // Print a notification for every response an effect feeds back.
    let mut action_rx = todo_store.subscribe_actions();
    tokio::spawn(async move {
        let clock = SystemClock;
        while let Ok(action) = action_rx.recv().await {
            if let Some(line) = notification(&action) {
                println!("[{}] {line}", clock.now().format("%H:%M:%S"));
            }
        }
    });

    // Restore the theme and fetch the collection before the first prompt.
    settle(&theme_store, ThemeAction::Load).await?;
    settle(&todo_store, TodoAppAction::Load).await?;
    render(&todo_store).await;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // stdin closed
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        if !dispatch(&todo_store, &theme_store, command, rest).await? {
            break;
        }
    }

    println!("Goodbye!");
    if let Err(e) = todo_store.shutdown(SHUTDOWN_TIMEOUT).await {
        tracing::warn!(error = %e, "todo store did not shut down cleanly");
    }
    if let Err(e) = theme_store.shutdown(SHUTDOWN_TIMEOUT).await {
        tracing::warn!(error = %e, "theme store did not shut down cleanly");
    }

    Ok(())
}

/// Run one shell command. Returns `false` when the session should end.
async fn dispatch(
    todo_store: &TodoStore,
    theme_store: &ThemeStore,
    command: &str,
    rest: &str,
) -> anyhow::Result<bool> {
    match command {
        "list" => render(todo_store).await,
        "refresh" => {
            settle(todo_store, TodoAppAction::Load).await?;
            render(todo_store).await;
        }
        "add" => {
            add(todo_store, rest).await?;
            render(todo_store).await;
        }
        "edit" => {
            edit(todo_store, rest).await?;
            render(todo_store).await;
        }
        "del" => {
            if let Some(id) = parse_id(rest) {
                settle(todo_store, TodoAppAction::DeleteRequested { id }).await?;
                render(todo_store).await;
            } else {
                println!("Usage: del <id>");
            }
        }
        "toggle" => {
            toggle(todo_store, rest).await?;
            render(todo_store).await;
        }
        "theme" => {
            settle(theme_store, ThemeAction::Toggled).await?;
            let theme = theme_store.state(|s| s.theme).await;
            println!("Theme: {theme}");
        }
        "stats" => {
            let (active, completed, total) = todo_store
                .state(|s| (s.active_count(), s.completed_count(), s.total()))
                .await;
            println!("{active} active • {completed} completed • {total} total");
        }
        "dismiss" => {
            settle(todo_store, TodoAppAction::ErrorDismissed).await?;
        }
        "help" => print_help(),
        "quit" | "exit" => return Ok(false),
        _ => println!("Unknown command '{command}'. Type 'help' for commands."),
    }

    Ok(true)
}

/// Send an action and wait for its effects to finish.
async fn settle<S, A, E, R>(store: &Store<S, A, E, R>, action: A) -> anyhow::Result<()>
where
    R: taskwire_core::reducer::Reducer<State = S, Action = A, Environment = E>
        + Clone
        + Send
        + Sync
        + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + Clone + 'static,
{
    let mut handle = store.send(action).await?;
    handle.wait().await;
    Ok(())
}

/// Drive the composer: set drafts, submit, and surface the flash.
async fn add(store: &TodoStore, rest: &str) -> anyhow::Result<()> {
    let (title, description) = match rest.split_once(" -- ") {
        Some((title, description)) => (title.trim(), Some(description.trim())),
        None => (rest, None),
    };

    settle(
        store,
        TodoAppAction::ComposerTitleChanged {
            title: title.to_string(),
        },
    )
    .await?;
    if let Some(description) = description {
        settle(store, TodoAppAction::ComposerDescriptionToggled).await?;
        settle(
            store,
            TodoAppAction::ComposerDescriptionChanged {
                description: description.to_string(),
            },
        )
        .await?;
    }

    // The flash is readable right after the send; waiting first would
    // race the 400ms clear.
    let mut handle = store.send(TodoAppAction::ComposerSubmitted).await?;
    if let Some(message) = store.state(|s| s.composer.flash_error.clone()).await {
        println!("⚠ {message}");
    }
    handle.wait().await;

    Ok(())
}

/// Drive the editor: seed the draft, apply changes, and save.
async fn edit(store: &TodoStore, rest: &str) -> anyhow::Result<()> {
    let Some((id_token, fields)) = rest.split_once(char::is_whitespace) else {
        println!("Usage: edit <id> <title> [-- <description>]");
        return Ok(());
    };
    let Some(id) = parse_id(id_token) else {
        println!("Usage: edit <id> <title> [-- <description>]");
        return Ok(());
    };

    let (title, description) = match fields.split_once(" -- ") {
        Some((title, description)) => (title.trim(), Some(description.trim())),
        None => (fields.trim(), None),
    };

    settle(store, TodoAppAction::EditStarted { id }).await?;
    if !title.is_empty() {
        settle(
            store,
            TodoAppAction::EditTitleChanged {
                id,
                title: title.to_string(),
            },
        )
        .await?;
    }
    if let Some(description) = description {
        settle(
            store,
            TodoAppAction::EditDescriptionChanged {
                id,
                description: description.to_string(),
            },
        )
        .await?;
    }
    settle(store, TodoAppAction::EditSaved { id }).await?;

    Ok(())
}

/// Flip an entry to the opposite of its current completion.
async fn toggle(store: &TodoStore, rest: &str) -> anyhow::Result<()> {
    let Some(id) = parse_id(rest) else {
        println!("Usage: toggle <id>");
        return Ok(());
    };
    let Some(completed) = store.state(|s| s.get(id).map(|t| t.completed)).await else {
        println!("No todo #{id}");
        return Ok(());
    };

    settle(
        store,
        TodoAppAction::ToggleRequested {
            id,
            completed: !completed,
        },
    )
    .await
}

/// Render the list, the banner, and the stats line.
async fn render(store: &TodoStore) {
    let state = store.state(std::clone::Clone::clone).await;

    println!();
    if let Some(banner) = &state.banner_error {
        println!("⚠ {banner}  ('dismiss' to clear)");
    }

    match state.phase {
        LoadPhase::Idle | LoadPhase::Loading => println!("Loading todos..."),
        LoadPhase::Failed => println!("Unable to load todos."),
        LoadPhase::Ready if state.todos.is_empty() => {
            println!("No todos yet! Add your first task above.");
        }
        LoadPhase::Ready => {
            for todo in &state.todos {
                let checkbox = if todo.completed { "[x]" } else { "[ ]" };
                println!("  {checkbox} #{} {}", todo.id, todo.title);
                if !todo.description.is_empty() {
                    println!("        {}", todo.description);
                }
            }
            println!(
                "\n{} active • {} completed • {} total",
                state.active_count(),
                state.completed_count(),
                state.total()
            );
        }
    }
    println!();
}

/// Notification line for a response action, if it deserves one.
fn notification(action: &TodoAppAction) -> Option<String> {
    if !action.is_response() {
        return None;
    }

    let line = match action {
        TodoAppAction::TodosLoaded { todos } => format!("✓ Loaded {} todos", todos.len()),
        TodoAppAction::LoadFailed { error } => format!("✗ Load failed: {error}"),
        TodoAppAction::TodoAdded { todo } => {
            format!("✓ Added \"{}\" (#{})", todo.title, todo.id)
        }
        TodoAppAction::AddFailed { error } => format!("✗ Add failed: {error}"),
        TodoAppAction::TodoUpdated { todo } => format!("✓ Updated #{}", todo.id),
        TodoAppAction::UpdateFailed { id, error } => {
            format!("✗ Update of #{id} failed: {error}")
        }
        TodoAppAction::TodoDeleted { id } => format!("✓ Deleted #{id}"),
        TodoAppAction::DeleteFailed { id, error } => {
            format!("✗ Delete of #{id} failed: {error}")
        }
        TodoAppAction::TodoToggled { todo } => {
            let status = if todo.completed { "done" } else { "open" };
            format!("✓ \"{}\" is now {status}", todo.title)
        }
        TodoAppAction::ToggleFailed { id, error, .. } => {
            format!("✗ Toggle of #{id} failed: {error} (reverted)")
        }
        _ => return None,
    };

    Some(line)
}

/// Parse `3` or `#3` into an id.
fn parse_id(token: &str) -> Option<TodoId> {
    token
        .trim_start_matches('#')
        .parse::<i64>()
        .ok()
        .map(TodoId::new)
}

fn print_help() {
    println!("Commands:");
    println!("  list                              Show the todo list");
    println!("  add <title> [-- <description>]    Add a todo");
    println!("  edit <id> <title> [-- <descr>]    Rewrite a todo");
    println!("  toggle <id>                       Flip completion");
    println!("  del <id>                          Delete a todo");
    println!("  refresh                           Re-fetch from the server");
    println!("  stats                             Show counts");
    println!("  dismiss                           Clear the error banner");
    println!("  theme                             Switch light/dark");
    println!("  help                              Show this help");
    println!("  quit                              Exit");
}
