// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
	Success,
	SuccessWithInfo,
	StillExecuting,
	Error,
	InvalidHandle,
	/// A status code this crate does not know; treated as a failure.
	Unknown(i32),
}

impl StatusCode {
	pub fn from_code(code: i32) -> Self {
		match code {
			0 => StatusCode::Success,
			1 => StatusCode::SuccessWithInfo,
			2 => StatusCode::StillExecuting,
			3 => StatusCode::Error,
			4 => StatusCode::InvalidHandle,
			other => StatusCode::Unknown(other),
		}
	}

	pub fn code(&self) -> i32 {
		match self {
			StatusCode::Success => 0,
			StatusCode::SuccessWithInfo => 1,
			StatusCode::StillExecuting => 2,
			StatusCode::Error => 3,
			StatusCode::InvalidHandle => 4,
			StatusCode::Unknown(code) => *code,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, StatusCode::Success | StatusCode::SuccessWithInfo | StatusCode::StillExecuting)
	}
}

impl Display for StatusCode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			StatusCode::Success => f.write_str("SUCCESS_STATUS"),
			StatusCode::SuccessWithInfo => f.write_str("SUCCESS_WITH_INFO_STATUS"),
			StatusCode::StillExecuting => f.write_str("STILL_EXECUTING_STATUS"),
			StatusCode::Error => f.write_str("ERROR_STATUS"),
			StatusCode::InvalidHandle => f.write_str("INVALID_HANDLE_STATUS"),
			StatusCode::Unknown(code) => write!(f, "UNKNOWN_STATUS({})", code),
		}
	}
}

/// Outcome record attached to every service response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
	pub status_code: StatusCode,
	#[serde(default)]
	pub info_messages: Option<Vec<String>>,
	#[serde(default)]
	pub sql_state: Option<String>,
	#[serde(default)]
	pub error_code: Option<i32>,
	#[serde(default)]
	pub error_message: Option<String>,
}

impl Status {
	pub fn success() -> Self {
		Self::new(StatusCode::Success)
	}

	pub fn new(status_code: StatusCode) -> Self {
		Self {
			status_code,
			info_messages: None,
			sql_state: None,
			error_code: None,
			error_message: None,
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			error_message: Some(message.into()),
			..Self::new(StatusCode::Error)
		}
	}

	pub fn with_sql_state(mut self, sql_state: impl Into<String>) -> Self {
		self.sql_state = Some(sql_state.into());
		self
	}

	pub fn with_error_code(mut self, error_code: i32) -> Self {
		self.error_code = Some(error_code);
		self
	}

	pub fn is_success(&self) -> bool {
		self.status_code.is_success()
	}

	/// Returns the status itself as an error unless it reports success.
	pub fn check(&self) -> Result<()> {
		if self.is_success() {
			Ok(())
		} else {
			Err(Error::Status(self.clone()))
		}
	}
}

impl Display for Status {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.status_code)?;
		match (&self.sql_state, self.error_code) {
			(Some(state), Some(code)) => write!(f, " (SQLSTATE {}, code {})", state, code)?,
			(Some(state), None) => write!(f, " (SQLSTATE {})", state)?,
			(None, Some(code)) => write!(f, " (code {})", code)?,
			(None, None) => {}
		}
		if let Some(message) = &self.error_message {
			write!(f, ": {}", message)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_success_codes() {
		assert!(StatusCode::from_code(0).is_success());
		assert!(StatusCode::from_code(1).is_success());
		assert!(StatusCode::from_code(2).is_success());
		assert!(!StatusCode::from_code(3).is_success());
		assert!(!StatusCode::from_code(4).is_success());
		assert!(!StatusCode::from_code(17).is_success());
	}

	#[test]
	fn test_check_surfaces_status_verbatim() {
		let status = Status::error("Table not found: t").with_sql_state("42S02").with_error_code(10001);
		assert_eq!(status.check(), Err(Error::Status(status.clone())));
		assert_eq!(
			status.to_string(),
			"ERROR_STATUS (SQLSTATE 42S02, code 10001): Table not found: t"
		);
	}

	#[test]
	fn test_check_success() {
		assert_eq!(Status::success().check(), Ok(()));
		assert_eq!(Status::new(StatusCode::SuccessWithInfo).check(), Ok(()));
	}
}
