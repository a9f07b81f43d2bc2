// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use hiveproto_wire_format::{ColumnDescriptor, PrimitiveKind, TableSchema};
use tracing_subscriber::EnvFilter;

/// Routes decoder logs to the test harness. Set `RUST_LOG=trace` to see them.
pub fn init_logging() {
	let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}

pub fn schema(columns: &[(&str, PrimitiveKind)]) -> TableSchema {
	columns
		.iter()
		.enumerate()
		.map(|(index, (name, kind))| ColumnDescriptor::primitive(*name, *kind, index as i32 + 1))
		.collect()
}
