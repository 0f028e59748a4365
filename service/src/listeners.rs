use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError, Weak,
    atomic::{AtomicU64, Ordering},
};

use flume::{Receiver, Sender};

type Subscribers<E> = Mutex<Vec<(u64, Sender<E>)>>;

/// Fan-out of page events to whoever subscribed.
///
/// Each subscriber holds a [`Subscription`]; dropping it deregisters the listener,
/// so nothing keeps receiving events after its component is gone.
#[derive(Debug)]
pub struct ListenerRegistry<E> {
    subscribers: Arc<Subscribers<E>>,
    next_id: AtomicU64,
}

impl<E> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(0),
        }
    }
}

impl<E: Clone> ListenerRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription<E> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = flume::unbounded();
        lock(&self.subscribers).push((id, sender));
        tracing::trace!(id, "Listener subscribed");

        Subscription {
            id,
            receiver,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Delivers the event to every live subscriber and returns how many got it.
    pub fn emit(&self, event: E) -> usize {
        let mut subscribers = lock(&self.subscribers);
        subscribers.retain(|(_, sender)| sender.send(event.clone()).is_ok());
        subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }
}

/// Registration handle returned by [`ListenerRegistry::subscribe`].
#[derive(Debug)]
pub struct Subscription<E> {
    id: u64,
    receiver: Receiver<E>,
    subscribers: Weak<Subscribers<E>>,
}

impl<E> Subscription<E> {
    pub fn try_recv(&self) -> Option<E> {
        self.receiver.try_recv().ok()
    }

    /// Takes every event received since the last call.
    pub fn drain(&self) -> Vec<E> {
        self.receiver.try_iter().collect()
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            lock(&subscribers).retain(|(id, _)| *id != self.id);
            tracing::trace!(id = self.id, "Listener deregistered");
        }
    }
}

fn lock<E>(subscribers: &Subscribers<E>) -> MutexGuard<'_, Vec<(u64, Sender<E>)>> {
    subscribers.lock().unwrap_or_else(PoisonError::into_inner)
}
