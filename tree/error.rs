use thiserror::Error;

/// The errors that growing a tree can surface to the caller. Failing to find a split and recoverable numeric overflow are not errors. They are reported through the returned gain and split count.
#[derive(Debug, Error, PartialEq)]
pub enum PartitionError {
	#[error("out of memory while growing the tree")]
	OutOfMemory,
	#[error("unexpected internal failure: {0}")]
	UnexpectedInternal(String),
	#[error("the update cannot hold {requested} values, its limit is {limit}")]
	UpdateCapacity { requested: usize, limit: usize },
}

impl PartitionError {
	pub(crate) fn unexpected(message: &str) -> PartitionError {
		PartitionError::UnexpectedInternal(message.to_owned())
	}
}

impl From<std::collections::TryReserveError> for PartitionError {
	fn from(error: std::collections::TryReserveError) -> Self {
		log::warn!("failed to reserve memory for tree growth: {}", error);
		PartitionError::OutOfMemory
	}
}

pub type Result<T, E = PartitionError> = std::result::Result<T, E>;
