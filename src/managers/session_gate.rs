//! Session gate for the protected bookmark view.
//!
//! Queries the current session exactly once on view activation. A missing
//! session is definitive: the caller redirects to the sign-in view and
//! performs no further initialization (no snapshot fetch, no subscription,
//! no retry). Navigation itself is the presentation layer's side effect; the
//! gate only decides.

use crate::store::client::RemoteStore;

/// Outcome of the session check on view activation.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// A session exists; proceed with this owner's snapshot and subscription.
    Proceed { owner_id: String },
    /// No session; send the caller back to the sign-in view.
    RedirectToLogin,
}

/// Resolves the current session into a gate decision.
///
/// A store error while asking is treated the same as an absent session:
/// the contract allows no retry path, so the only safe answer is a redirect.
pub fn resolve_session(store: &dyn RemoteStore) -> GateDecision {
    match store.get_session() {
        Ok(Some(session)) => GateDecision::Proceed {
            owner_id: session.user.id,
        },
        Ok(None) | Err(_) => GateDecision::RedirectToLogin,
    }
}
