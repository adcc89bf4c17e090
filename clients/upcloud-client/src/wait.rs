// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! State waiters
//!
//! Managed resources reconcile asynchronously; a waiter re-reads the
//! resource's details every poll interval until it reports the target
//! state. The loop ends on the target state, on a state the resource
//! cannot recover from, on the deadline, or on cancellation of the
//! caller's token. At least one read is made unless the token is already
//! cancelled, so a zero timeout still reports a resource that is already
//! in the target state.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use upcloud_api::types::{
    FileStorageOperationalState, GatewayOperationalState, KubernetesClusterState,
    KubernetesNodeGroupState, LoadBalancerOperationalState, ManagedDatabaseState,
    ManagedObjectStorageOperationalState, NetworkPeeringState, ServerState, StorageState,
};

use crate::Client;
use crate::error::{Result, WaitError};

/// Observable state of a resource
pub trait WaitState: Copy + PartialEq + Serialize {
    /// The resource will not leave this state on its own
    fn is_failure(self) -> bool {
        false
    }
}

impl WaitState for ServerState {
    fn is_failure(self) -> bool {
        self == ServerState::Error
    }
}

impl WaitState for StorageState {
    fn is_failure(self) -> bool {
        self == StorageState::Error
    }
}

impl WaitState for ManagedDatabaseState {}

impl WaitState for ManagedObjectStorageOperationalState {
    fn is_failure(self) -> bool {
        self == ManagedObjectStorageOperationalState::Error
    }
}

impl WaitState for KubernetesClusterState {
    fn is_failure(self) -> bool {
        self == KubernetesClusterState::Failed
    }
}

impl WaitState for KubernetesNodeGroupState {
    fn is_failure(self) -> bool {
        self == KubernetesNodeGroupState::Failed
    }
}

impl WaitState for FileStorageOperationalState {
    fn is_failure(self) -> bool {
        FileStorageOperationalState::is_failure(self)
    }
}

impl WaitState for LoadBalancerOperationalState {}

impl WaitState for GatewayOperationalState {}

impl WaitState for NetworkPeeringState {
    fn is_failure(self) -> bool {
        self == NetworkPeeringState::Error
    }
}

/// Wire name of a state, as used in error messages and logs
pub(crate) fn state_name<S: Serialize>(state: &S) -> String {
    match serde_json::to_value(state) {
        Ok(serde_json::Value::String(name)) => name,
        _ => "unknown".to_string(),
    }
}

/// What is being waited for
pub(crate) struct Target<'a, S> {
    pub resource: &'static str,
    pub id: &'a str,
    pub state: S,
    pub timeout: Duration,
}

impl Client {
    /// Poll `read` until `state_of` reports the target state
    pub(crate) async fn wait_for<T, S, F, Fut>(
        &self,
        target: Target<'_, S>,
        cancel: &CancellationToken,
        mut read: F,
        state_of: impl Fn(&T) -> S,
    ) -> Result<T>
    where
        S: WaitState,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let deadline = Instant::now() + target.timeout;
        let wanted = state_name(&target.state);

        loop {
            let current = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled(&target, &wanted)),
                current = read() => current?,
            };

            let state = state_of(&current);
            let observed = state_name(&state);
            debug!(
                resource = target.resource,
                id = target.id,
                state = %observed,
                target = %wanted,
                "observed resource state"
            );

            if state == target.state {
                return Ok(current);
            }
            if state.is_failure() {
                return Err(WaitError::Failed {
                    resource: target.resource,
                    id: target.id.to_string(),
                    target: wanted,
                    state: observed,
                }
                .into());
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(WaitError::TimedOut {
                    resource: target.resource,
                    id: target.id.to_string(),
                    target: wanted,
                    last: observed,
                    timeout: target.timeout,
                }
                .into());
            }

            let pause = self.poll_interval.min(deadline - now);
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled(&target, &wanted)),
                _ = sleep(pause) => {}
            }
        }
    }
}

fn cancelled<S>(target: &Target<'_, S>, wanted: &str) -> crate::Error {
    WaitError::Cancelled {
        resource: target.resource,
        id: target.id.to_string(),
        target: wanted.to_string(),
    }
    .into()
}
