use std::fmt;

use thiserror::Error;

use crate::{device::DeviceKind, laboratory::LaboratoryId};

/// The entity whose capacity was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Culprit {
    /// A device rejected the operation.
    Device(DeviceKind),
    /// A laboratory rejected the operation.
    Laboratory(LaboratoryId),
    /// A laboratory rejected the operation because of one of its devices.
    Both(DeviceKind, LaboratoryId),
    /// No container is large enough for the quantity.
    Container,
}

impl fmt::Display for Culprit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(kind) => write!(f, "{kind}"),
            Self::Laboratory(id) => write!(f, "{id}"),
            Self::Both(kind, id) => write!(f, "{kind} in {id}"),
            Self::Container => f.write_str("container"),
        }
    }
}

/// The single error raised by the engine.
///
/// Malformed names, temperatures and quantities never raise: they degrade to
/// documented defaults. Only capacity violations surface as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{culprit}: {message}")]
pub struct CapacityError {
    pub culprit: Culprit,
    pub message: String,
}

impl CapacityError {
    pub(crate) fn device(kind: DeviceKind, message: impl Into<String>) -> Self {
        Self {
            culprit: Culprit::Device(kind),
            message: message.into(),
        }
    }

    pub(crate) fn laboratory(id: LaboratoryId, message: impl Into<String>) -> Self {
        Self {
            culprit: Culprit::Laboratory(id),
            message: message.into(),
        }
    }

    pub(crate) fn both(kind: DeviceKind, id: LaboratoryId, message: impl Into<String>) -> Self {
        Self {
            culprit: Culprit::Both(kind, id),
            message: message.into(),
        }
    }

    pub(crate) fn container(message: impl Into<String>) -> Self {
        Self {
            culprit: Culprit::Container,
            message: message.into(),
        }
    }
}
