// ABOUTME: HTTP middleware for request correlation
// ABOUTME: Request id generation and propagation for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

/// Request id middleware
pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
