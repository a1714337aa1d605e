//! Shared List Manager
//!
//! Command handlers reach the manager through one async mutex. Anything that
//! waits on the user must run with that lock released.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::ItemId;
use super::confirm::Confirm;
use super::list_manager::ListManager;

/// Manager shared between handlers; `None` until the store has loaded
pub type SharedLists = Arc<Mutex<Option<ListManager>>>;

/// Delete `id` after `confirm` agrees, releasing the lock while the user answers.
///
/// Returns `None` when the lists are not loaded, otherwise whether the item
/// was removed. An item deleted elsewhere while the prompt was open is
/// reported as not removed.
pub async fn delete_confirmed<C: Confirm + ?Sized>(
    lists: &Mutex<Option<ListManager>>,
    id: &ItemId,
    confirm: &C,
) -> Option<bool> {
    let prompt = {
        let guard = lists.lock().await;
        match guard.as_ref()?.delete_prompt(id) {
            Some(prompt) => prompt,
            None => return Some(false),
        }
    };

    if !confirm.confirm(&prompt).await {
        log::debug!("Delete of {} cancelled", id);
        return Some(false);
    }

    let mut guard = lists.lock().await;
    Some(guard.as_mut()?.remove(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::repository::MemoryStore;
    use crate::service::DeletePrompt;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::oneshot;

    /// Reports when the prompt opens, then waits for an answer
    struct PendingConfirm {
        opened: std::sync::Mutex<Option<oneshot::Sender<()>>>,
        answer: std::sync::Mutex<Option<oneshot::Receiver<bool>>>,
    }

    #[async_trait]
    impl Confirm for PendingConfirm {
        async fn confirm(&self, _prompt: &DeletePrompt) -> bool {
            let opened = self.opened.lock().unwrap().take();
            if let Some(opened) = opened {
                let _ = opened.send(());
            }
            let answer = self.answer.lock().unwrap().take();
            match answer {
                Some(answer) => answer.await.unwrap_or(false),
                None => false,
            }
        }
    }

    async fn loaded_lists() -> (SharedLists, ItemId) {
        let mut manager = ListManager::load(Arc::new(MemoryStore::new())).await;
        let id = manager.add("Tokyo", Category::Travel).unwrap();
        (Arc::new(Mutex::new(Some(manager))), id)
    }

    #[tokio::test]
    async fn test_lock_is_free_while_confirmation_pending() {
        let (lists, id) = loaded_lists().await;
        let (opened_tx, opened_rx) = oneshot::channel();
        let (answer_tx, answer_rx) = oneshot::channel();
        let confirm = Arc::new(PendingConfirm {
            opened: std::sync::Mutex::new(Some(opened_tx)),
            answer: std::sync::Mutex::new(Some(answer_rx)),
        });

        let task = {
            let lists = lists.clone();
            let id = id.clone();
            let confirm = confirm.clone();
            tokio::spawn(async move { delete_confirmed(&lists, &id, confirm.as_ref()).await })
        };

        opened_rx.await.expect("prompt opened");
        {
            let guard = tokio::time::timeout(Duration::from_millis(500), lists.lock())
                .await
                .expect("lock available while prompt is open");
            let manager = guard.as_ref().unwrap();
            assert_eq!(manager.view(Category::Travel).items.len(), 1);
        }

        answer_tx.send(true).unwrap();
        assert_eq!(task.await.unwrap(), Some(true));

        let guard = lists.lock().await;
        assert!(guard.as_ref().unwrap().get(&id).is_none());
    }

    #[tokio::test]
    async fn test_item_removed_while_prompt_open() {
        let (lists, id) = loaded_lists().await;
        let (opened_tx, opened_rx) = oneshot::channel();
        let (answer_tx, answer_rx) = oneshot::channel();
        let confirm = Arc::new(PendingConfirm {
            opened: std::sync::Mutex::new(Some(opened_tx)),
            answer: std::sync::Mutex::new(Some(answer_rx)),
        });

        let task = {
            let lists = lists.clone();
            let id = id.clone();
            let confirm = confirm.clone();
            tokio::spawn(async move { delete_confirmed(&lists, &id, confirm.as_ref()).await })
        };

        opened_rx.await.unwrap();
        assert!(lists.lock().await.as_mut().unwrap().remove(&id));
        answer_tx.send(true).unwrap();

        assert_eq!(task.await.unwrap(), Some(false));
    }

    #[tokio::test]
    async fn test_not_loaded_and_unknown_id() {
        let empty: SharedLists = Arc::new(Mutex::new(None));
        let (_, never_answered) = oneshot::channel::<bool>();
        let confirm = PendingConfirm {
            opened: std::sync::Mutex::new(None),
            answer: std::sync::Mutex::new(Some(never_answered)),
        };
        assert_eq!(delete_confirmed(&empty, &ItemId::from("x"), &confirm).await, None);

        let (lists, _) = loaded_lists().await;
        assert_eq!(delete_confirmed(&lists, &ItemId::from("missing"), &confirm).await, Some(false));
    }
}
