use blog_core::{ProfilePatch, UserIdentity};

use tokio::sync::watch;

/// Holds the current user for the running client session.
///
/// Reads are synchronous and every mutation is a single replace, so the last
/// write wins.
pub trait ClientStateStore: Send + Sync {
    fn get(&self) -> Option<UserIdentity>;

    fn set(&self, identity: UserIdentity);

    fn clear(&self);

    /// Merge `patch` into the current user. No-op when nobody is signed in.
    fn patch(&self, patch: &ProfilePatch);

    /// Merge `patch` only if `uid` is the current user, checked in the same
    /// mutation. Returns whether the patch was applied.
    fn patch_for(&self, uid: &str, patch: &ProfilePatch) -> bool;
}

/// Watch-channel backed state; `subscribe()` feeds reactive UI bindings
pub struct InMemoryClientState {
    sender: watch::Sender<Option<UserIdentity>>,
}

impl InMemoryClientState {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<UserIdentity>> {
        self.sender.subscribe()
    }
}

impl Default for InMemoryClientState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStateStore for InMemoryClientState {
    fn get(&self) -> Option<UserIdentity> {
        self.sender.borrow().clone()
    }

    fn set(&self, identity: UserIdentity) {
        self.sender.send_replace(Some(identity));
    }

    fn clear(&self) {
        self.sender.send_replace(None);
    }

    fn patch(&self, patch: &ProfilePatch) {
        self.sender.send_if_modified(|current| match current {
            Some(identity) if !patch.is_empty() => {
                identity.apply(patch);
                true
            }
            _ => false,
        });
    }

    fn patch_for(&self, uid: &str, patch: &ProfilePatch) -> bool {
        self.sender.send_if_modified(|current| match current {
            Some(identity) if identity.uid == uid && !patch.is_empty() => {
                identity.apply(patch);
                true
            }
            _ => false,
        })
    }
}
