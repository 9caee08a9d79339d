// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sq-core: compiler for human-typed search queries
//!
//! Turns a search box string such as
//!
//! ```text
//! name:bob -status=archived age>=30 created:jan_2024 active:none
//! ```
//!
//! into a typed [`Predicate`] over a [`Schema`] of searchable fields. The
//! crate performs no I/O and never executes predicates; storage adapters
//! translate the predicate tree into their own filter language.

pub mod chunk;
pub mod clock;
pub mod coerce;
pub mod date;
pub mod error;
pub mod predicate;
pub mod render;
pub mod resolve;
pub mod schema;
pub mod search;
pub mod token;
pub mod value;

pub use chunk::{parse_chunk, ChunkParser, Operator, OperatorTable, RawChunk};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{resolve_date, DateRange, Granularity, Join};
pub use error::{Error, Result};
pub use predicate::{Leaf, Predicate, QueryOp};
pub use resolve::{resolve, ResolvedChunk};
pub use schema::{FieldType, Modifier, Schema, SearchField};
pub use search::{compile, CompiledSearch, RenderedFilter, Search, SearchMeta};
pub use token::{tokenize, Tokens};
pub use value::{Number, TypedValue, Value};
