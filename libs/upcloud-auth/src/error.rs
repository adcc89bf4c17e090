// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for upcloud-auth

use thiserror::Error;

/// Errors that can occur while resolving credentials
#[derive(Error, Debug)]
pub enum AuthError {
    /// No source produced a username/password pair or a token
    #[error(
        "credentials not found, these must be set in configuration, via environment \
         variables or in the system keyring ({service})"
    )]
    CredentialsNotFound { service: String },

    /// The platform secret store could not be queried
    #[error("keyring error: {0}")]
    Keyring(String),

    /// A credential environment variable is set but unusable
    #[error("invalid value in environment variable {name}: {reason}")]
    InvalidEnvironment { name: String, reason: String },
}
