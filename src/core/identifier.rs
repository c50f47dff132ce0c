use crate::core::{Identifier, IdentifierSource};
use crate::utils::error::{GenError, Result};
use std::cell::Cell;
use uuid::Builder;

/// Random (v4) identifiers backed by the OS entropy source.
#[derive(Debug, Clone, Default)]
pub struct RandomIdentifiers;

impl RandomIdentifiers {
    pub fn new() -> Self {
        Self
    }
}

impl IdentifierSource for RandomIdentifiers {
    fn generate(&self) -> Result<Identifier> {
        let mut bytes = [0u8; 16];
        getrandom::getrandom(&mut bytes).map_err(|e| GenError::PlatformUnavailable {
            reason: e.to_string(),
        })?;

        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        let mut buffer = uuid::Uuid::encode_buffer();
        let hyphenated = uuid.hyphenated().encode_upper(&mut buffer);
        Identifier::parse(&format!("{{{}}}", hyphenated))
    }
}

/// Deterministic identifiers counting up from 1. Used for reproducible output.
#[derive(Debug, Default)]
pub struct SequentialIdentifiers {
    next: Cell<u128>,
}

impl SequentialIdentifiers {
    pub fn new() -> Self {
        Self { next: Cell::new(1) }
    }
}

impl IdentifierSource for SequentialIdentifiers {
    fn generate(&self) -> Result<Identifier> {
        let value = self.next.get().max(1);
        self.next.set(value + 1);

        let uuid = uuid::Uuid::from_u128(value);
        let mut buffer = uuid::Uuid::encode_buffer();
        Identifier::parse(&format!("{{{}}}", uuid.hyphenated().encode_upper(&mut buffer)))
    }
}
