//! Command Surface
//!
//! Thin glue between the host's command palette and the services layer:
//! three user-invocable actions, each bound to a default key combination
//! and visible in the palette.
//!
//! | Command                | Binding   | Effect                                       |
//! |------------------------|-----------|----------------------------------------------|
//! | Insert video timestamp | mod+alt+t | Inserts ` [[hh:mm:ss]] ` at the edit cursor  |
//! | Enter video notes      | mod+alt+v | Opens the block in the side panel, enlarges  |
//! | Exit video notes       | mod+alt+x | Reverts the video to inline layout           |
//!
//! Handlers catch host failures where the contract says "logged only"
//! (text insertion, side-panel open); the registration wrapper logs any
//! residual error as a last resort.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::host::{
    CommandDescriptor, CommandHandler, CommandRegistry, EditorHost, MessageLevel,
};
use crate::render::RenderLayer;
use crate::services::{read_playback, CommandError, NotesMode, VideoResolver};

/// Registered name of the timestamp insertion command.
pub const CMD_INSERT_TIMESTAMP: &str = "insert-video-timestamp";
/// Registered name of the notes-mode enter command.
pub const CMD_ENTER_VIDEO_NOTES: &str = "enter-video-notes";
/// Registered name of the notes-mode exit command.
pub const CMD_EXIT_VIDEO_NOTES: &str = "exit-video-notes";

/// The three video note-taking commands over a host editor.
pub struct VideoNotesCommands<H, R> {
    host: Arc<H>,
    resolver: VideoResolver<H, R>,
    notes_mode: NotesMode<H, R>,
}

impl<H, R> VideoNotesCommands<H, R>
where
    H: EditorHost + 'static,
    R: RenderLayer + 'static,
{
    /// Wire the command surface to a host editor and its render layer
    pub fn new(host: Arc<H>, render: Arc<R>) -> Self {
        let resolver = VideoResolver::new(Arc::clone(&host), render);
        let notes_mode = NotesMode::new(resolver.clone());

        Self {
            host,
            resolver,
            notes_mode,
        }
    }

    /// Insert a ` [[hh:mm:ss]] ` reference for the current video's
    /// playback position at the edit cursor.
    ///
    /// Skips insertion (with a toast) when no video resolves or the video
    /// sits at position zero; a zero reading is indistinguishable from a
    /// failed resolution, so neither pollutes the document.
    pub async fn insert_timestamp(&self) -> Result<(), CommandError> {
        let video = self.resolver.resolve().await;
        let reading = read_playback(video.as_ref());

        let Some(token) = reading.timestamp_token() else {
            tracing::debug!(?reading, "timestamp insertion skipped");
            self.host
                .show_message(MessageLevel::Warning, "No video timestamp to insert")
                .await;
            return Ok(());
        };

        if let Err(err) = self.host.insert_at_cursor(&token).await {
            // Insertion failure is logged only, never propagated.
            tracing::warn!(error = %err, "timestamp insertion failed");
        }
        Ok(())
    }

    /// Open the current block in the side panel and enlarge its video.
    pub async fn enter_video_notes(&self) -> Result<(), CommandError> {
        match self.host.current_block().await? {
            Some(block) => {
                if let Err(err) = self.host.open_in_side_panel(&block.id).await {
                    // Fire-and-forget UI action.
                    tracing::warn!(error = %err, "side panel open failed");
                }
            }
            None => tracing::warn!("enter video notes: no active block"),
        }

        if !self.notes_mode.enter().await {
            self.host
                .show_message(MessageLevel::Warning, "No video found for notes mode")
                .await;
        }
        Ok(())
    }

    /// Revert the current video to its inline layout.
    pub async fn exit_video_notes(&self) -> Result<(), CommandError> {
        if !self.notes_mode.exit().await {
            self.host
                .show_message(MessageLevel::Warning, "No video to revert")
                .await;
        }
        Ok(())
    }

    /// Register all three commands with the host palette.
    pub fn register(self: Arc<Self>, registry: &dyn CommandRegistry) {
        registry.register_command(
            CMD_INSERT_TIMESTAMP,
            CommandDescriptor::new(
                "Insert video timestamp",
                "Insert the current video playback position at the cursor",
            )
            .with_keybinding("mod+alt+t"),
            attach(Arc::clone(&self), |commands| async move {
                commands.insert_timestamp().await
            }),
        );

        registry.register_command(
            CMD_ENTER_VIDEO_NOTES,
            CommandDescriptor::new(
                "Enter video notes",
                "Open the current block in the side panel and enlarge its video",
            )
            .with_keybinding("mod+alt+v"),
            attach(Arc::clone(&self), |commands| async move {
                commands.enter_video_notes().await
            }),
        );

        registry.register_command(
            CMD_EXIT_VIDEO_NOTES,
            CommandDescriptor::new("Exit video notes", "Revert the video to its inline layout")
                .with_keybinding("mod+alt+x"),
            attach(Arc::clone(&self), |commands| async move {
                commands.exit_video_notes().await
            }),
        );
    }
}

/// Wrap a command method as a registry handler, logging residual errors.
fn attach<C, F, Fut>(commands: Arc<C>, run: F) -> CommandHandler
where
    C: Send + Sync + 'static,
    F: Fn(Arc<C>) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<(), CommandError>> + Send + 'static,
{
    Arc::new(move || {
        let fut = run(Arc::clone(&commands));
        let wrapped: crate::host::CommandFuture = Box::pin(async move {
            if let Err(err) = fut.await {
                tracing::error!(error = %err, "command failed");
            }
        });
        wrapped
    })
}

/// One-time logging bootstrap for the embedding host process.
///
/// Safe to call repeatedly; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Ready-hook body: the host calls this once initialization finishes.
///
/// Sets up logging and runs the whole command-registration sequence.
pub fn on_ready<H, R>(host: Arc<H>, render: Arc<R>, registry: &dyn CommandRegistry)
where
    H: EditorHost + 'static,
    R: RenderLayer + 'static,
{
    init_logging();
    let commands = Arc::new(VideoNotesCommands::new(host, render));
    commands.register(registry);
}
