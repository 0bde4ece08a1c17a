// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CI event payloads.
//!
//! Only the handful of fields the checks read are modelled; everything else
//! in the payload is ignored.

mod payload;

pub use payload::{
    load_event, parse_event, CommitRecord, PullRequestEvent, PullRequestRecord, PushEvent,
};
