use async_trait::async_trait;
use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use todo_core::{Confirm, DeletePrompt};
use tokio::sync::oneshot;

/// Answers delete prompts with a native message dialog
pub struct DialogConfirm<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> DialogConfirm<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[async_trait]
impl<R: Runtime> Confirm for DialogConfirm<R> {
    async fn confirm(&self, prompt: &DeletePrompt) -> bool {
        let (tx, rx) = oneshot::channel();

        self.app
            .dialog()
            .message(format!("{}\n\n{}", prompt.message, prompt.item_text))
            .title(prompt.title)
            .kind(MessageDialogKind::Warning)
            .buttons(MessageDialogButtons::OkCancelCustom(
                prompt.confirm_label.to_string(),
                prompt.cancel_label.to_string(),
            ))
            .show(move |confirmed| {
                let _ = tx.send(confirmed);
            });

        // Dialog closed without an answer counts as cancel
        rx.await.unwrap_or(false)
    }
}
