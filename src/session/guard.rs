// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! Route guard state machine.
//!
//! A [`RouteGuard`] sits between the router and a protected view. On every
//! navigation (and whenever the token or required roles change) the host
//! calls [`RouteGuard::evaluate`], which re-reads the token, decodes it, and
//! maps the verdict to what the host should render:
//!
//! - `Unauthenticated` redirects straight to `/login`, no alert
//! - `Authorized` passes the protected view through
//! - `Forbidden` shows a destructive-styled notice for a 3-second window;
//!   once the window has elapsed, the *next* evaluation redirects to `/`
//!
//! The forbidden flow is deliberately two-step (notice disappears, then a
//! re-evaluation redirects) to match the dashboard's observed timing. It is
//! a UX quirk carried over intact, not a load-bearing contract.
//!
//! The dismissal timer is a spawned task tied to a `CancellationToken`; it is
//! cancelled whenever the guard leaves the forbidden verdict and when the
//! guard is dropped, so a stale callback can never fire after teardown.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::claims::decode_identity;
use super::policy::{evaluate, Verdict};
use super::roles::Role;
use super::store::SessionProvider;

/// How long the forbidden notice stays visible before auto-dismissal.
pub const ALERT_WINDOW: Duration = Duration::from_secs(3);

/// Fixed navigation targets the guard can redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Sign-in page, for visitors with no usable identity
    Login,
    /// Dashboard home, after a forbidden notice has run its course
    Home,
}

impl Redirect {
    /// Path string handed to the host's routing facility.
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Home => "/",
        }
    }
}

impl std::fmt::Display for Redirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Lifecycle states of the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Constructed, not yet evaluated
    Idle,
    /// Mid-evaluation (transient)
    Evaluating,
    /// Forbidden notice on screen, dismissal timer running
    ShowingAlert,
    /// Protected view rendered, stable until inputs change
    PassThrough,
    /// Navigation has taken over
    Redirecting(Redirect),
}

/// What the host should render after an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected view unmodified.
    PassThrough,
    /// Render the forbidden notice; await [`RouteGuard::alert_dismissed`],
    /// then evaluate again.
    ShowAlert,
    /// Navigate to the given target.
    Redirect(Redirect),
}

/// Cancellable auto-dismiss timer for the forbidden notice.
///
/// Expiry is published over a watch channel so a dismissal that happens
/// before the host starts waiting is still observed. Dropping the timer
/// cancels the task; the flag is then never written again.
struct AlertTimer {
    cancel: CancellationToken,
    expired: watch::Receiver<bool>,
}

impl AlertTimer {
    fn start(window: Duration) -> Self {
        let cancel = CancellationToken::new();
        let (tx, expired) = watch::channel(false);

        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(window) => {
                    let _ = tx.send(true);
                }
                _ = task_cancel.cancelled() => {}
            }
        });

        Self { cancel, expired }
    }

    fn expired(&self) -> bool {
        *self.expired.borrow()
    }

    /// Wait until the notice window has elapsed.
    async fn dismissed(&self) {
        let mut expired = self.expired.clone();
        // Err means the timer was cancelled; nothing left to wait for.
        let _ = expired.wait_for(|expired| *expired).await;
    }
}

impl Drop for AlertTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Session guard for one protected view.
///
/// The session provider is injected, so the guard's decision is a pure
/// function of (token, required roles) in tests. An empty required-role set
/// means any authenticated identity is sufficient.
pub struct RouteGuard<S: SessionProvider> {
    session: S,
    required_roles: Vec<Role>,
    state: GuardState,
    alert: Option<AlertTimer>,
}

impl<S: SessionProvider> RouteGuard<S> {
    /// Create a guard for a view requiring one of the given roles.
    pub fn new(session: S, required_roles: impl Into<Vec<Role>>) -> Self {
        Self {
            session,
            required_roles: required_roles.into(),
            state: GuardState::Idle,
            alert: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Roles accepted by the guarded view.
    pub fn required_roles(&self) -> &[Role] {
        &self.required_roles
    }

    /// Re-read the token, re-evaluate the policy, and return what to render.
    ///
    /// Call on mount and again whenever the token or the route changes, and
    /// once more after [`alert_dismissed`](Self::alert_dismissed) resolves.
    pub fn evaluate(&mut self) -> GuardOutcome {
        self.transition(GuardState::Evaluating);

        let token = self.session.read();
        let identity = token.as_deref().and_then(|token| match decode_identity(token) {
            Ok(identity) => Some(identity),
            Err(e) => {
                debug!(error = %e, "persisted token failed decode, treating as signed out");
                None
            }
        });

        let verdict = evaluate(identity.as_ref(), &self.required_roles);

        let outcome = match verdict {
            Verdict::Unauthenticated => {
                self.alert = None;
                GuardOutcome::Redirect(Redirect::Login)
            }
            Verdict::Authorized => {
                self.alert = None;
                GuardOutcome::PassThrough
            }
            Verdict::Forbidden => match &self.alert {
                // Window already elapsed: the notice has disappeared, this
                // evaluation falls through to the home redirect.
                Some(timer) if timer.expired() => GuardOutcome::Redirect(Redirect::Home),
                // Window still open: keep the existing timer running.
                Some(_) => GuardOutcome::ShowAlert,
                None => {
                    self.alert = Some(AlertTimer::start(ALERT_WINDOW));
                    GuardOutcome::ShowAlert
                }
            },
        };

        let next = match outcome {
            GuardOutcome::PassThrough => GuardState::PassThrough,
            GuardOutcome::ShowAlert => GuardState::ShowingAlert,
            GuardOutcome::Redirect(target) => GuardState::Redirecting(target),
        };
        self.transition(next);

        outcome
    }

    /// Wait for the forbidden notice's window to elapse.
    ///
    /// Resolves immediately when no alert is showing.
    pub async fn alert_dismissed(&self) {
        if let Some(timer) = &self.alert {
            timer.dismissed().await;
        }
    }

    fn transition(&mut self, next: GuardState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "guard transition");
            self.state = next;
        }
    }
}
