//! Shared access to a session and the deferred error reset.

use super::{Notice, Session, SessionSnapshot};
use crate::input::Input;
use crate::ui::{Surface, button_labels};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// A cloneable handle to one calculator session and the surface showing it.
///
/// Inputs are applied one at a time under the lock. When an input puts the
/// session into the error state, a background task clears it after the
/// session's reset delay. That task is never cancelled.
#[derive(Clone)]
pub struct SessionHandle {
    session: Arc<Mutex<Session>>,
    surface: Arc<dyn Surface>,
}

impl SessionHandle {
    pub fn new(session: Session, surface: Arc<dyn Surface>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            surface,
        }
    }

    /// Apply one input, update the surface and schedule a reset if needed.
    pub async fn dispatch(&self, input: Input) {
        let (snapshot, notice, reset) = {
            let mut session = self.session.lock().await;
            let notice = session.apply(input);
            (session.snapshot(), notice, session.take_scheduled_reset())
        };

        if let Some(Notice::Relabel { second }) = notice {
            self.surface.relabel(&button_labels(second));
        }
        self.surface.render(&snapshot);

        if let Some(delay) = reset {
            self.schedule_reset(delay);
        }
    }

    pub async fn dispatch_all(&self, inputs: impl IntoIterator<Item = Input>) {
        for input in inputs {
            self.dispatch(input).await;
        }
    }

    /// Render the current state without changing it.
    pub async fn render(&self) {
        let snapshot = self.snapshot().await;
        self.surface.render(&snapshot);
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    fn schedule_reset(&self, delay: Duration) {
        debug!(?delay, "scheduling error reset");
        let handle = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let snapshot = {
                let mut session = handle.session.lock().await;
                session.auto_reset();
                session.snapshot()
            };
            handle.surface.render(&snapshot);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{FunctionKey, parse_line};
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingSurface {
        frames: StdMutex<Vec<SessionSnapshot>>,
        labels: StdMutex<Vec<Vec<(FunctionKey, &'static str)>>>,
    }

    impl Surface for RecordingSurface {
        fn render(&self, snapshot: &SessionSnapshot) {
            self.frames.lock().unwrap().push(snapshot.clone());
        }

        fn relabel(&self, labels: &[(FunctionKey, &'static str)]) {
            self.labels.lock().unwrap().push(labels.to_vec());
        }
    }

    fn handle() -> (SessionHandle, Arc<RecordingSurface>) {
        let surface = Arc::new(RecordingSurface::default());
        let handle = SessionHandle::new(Session::default(), surface.clone());
        (handle, surface)
    }

    async fn type_keys(handle: &SessionHandle, line: &str) {
        handle.dispatch_all(parse_line(line).unwrap()).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_every_input() {
        let (handle, surface) = handle();
        type_keys(&handle, "2+3=").await;

        let frames = surface.frames.lock().unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[3].raw_input, "5");
        assert_eq!(frames[3].expression, "2+3 = 5");
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_resets_after_delay() {
        let (handle, surface) = handle();
        type_keys(&handle, "(2+3 =").await;
        assert!(handle.snapshot().await.error);

        tokio::time::sleep(Duration::from_millis(1400)).await;
        let snapshot = handle.snapshot().await;
        assert!(snapshot.error);
        assert_eq!(snapshot.raw_input, "Error");

        tokio::time::sleep(Duration::from_millis(200)).await;
        let snapshot = handle.snapshot().await;
        assert!(!snapshot.error);
        assert_eq!(snapshot.raw_input, "0");
        assert_eq!(snapshot.expression, "");

        // The reset was pushed to the surface too.
        let last = surface.frames.lock().unwrap().last().cloned().unwrap();
        assert_eq!(last.raw_input, "0");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_timer_is_not_cancelled_by_clear() {
        let (handle, _surface) = handle();
        type_keys(&handle, "2+ =").await;
        handle.dispatch(Input::ClearAll).await;
        type_keys(&handle, "7").await;
        assert_eq!(handle.snapshot().await.raw_input, "7");

        tokio::time::sleep(Duration::from_millis(1600)).await;
        let snapshot = handle.snapshot().await;
        assert_eq!(snapshot.raw_input, "0");
        assert_eq!(snapshot.expression, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_toggle_relabels() {
        let (handle, surface) = handle();
        handle
            .dispatch(Input::Function(FunctionKey::Second))
            .await;
        handle
            .dispatch(Input::Function(FunctionKey::Second))
            .await;

        let labels = surface.labels.lock().unwrap();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].contains(&(FunctionKey::Sin, "sin⁻¹")));
        assert!(labels[1].contains(&(FunctionKey::Sin, "sin")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_one_session() {
        let (handle, _surface) = handle();
        let observer = handle.clone();
        type_keys(&handle, "9 sqrt").await;
        let snapshot = observer.snapshot().await;
        assert_eq!(snapshot.raw_input, "3");
        assert_eq!(snapshot.expression, "√(9) = 3");
    }
}
