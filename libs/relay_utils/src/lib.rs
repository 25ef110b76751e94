// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
#![allow(clippy::uninlined_format_args)]
pub mod callable;
pub mod diagnostics;
pub mod error;
pub mod value;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
