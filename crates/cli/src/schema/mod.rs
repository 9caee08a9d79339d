// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Types for JSON output.
//!
//! Each command's `-o json` output serializes one of these types, and
//! `sq schema <command>` prints its JSON Schema via schemars.

pub mod compile;
pub mod fields;
