//! Bedrock Runtime operation enum.

use std::fmt;

/// All supported Bedrock Runtime operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedrockRuntimeOperation {
    /// Send a conversation in the model-agnostic message format.
    Converse,
    /// Send a raw, model-specific request body.
    InvokeModel,
}

impl BedrockRuntimeOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[Self::Converse, Self::InvokeModel];

    /// Returns the AWS operation name string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Converse => "Converse",
            Self::InvokeModel => "InvokeModel",
        }
    }

    /// Parse an operation name string.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Last path segment after `/model/{modelId}/`.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Converse => "converse",
            Self::InvokeModel => "invoke",
        }
    }
}

impl fmt::Display for BedrockRuntimeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_roundtrip_operation_names() {
        for op in BedrockRuntimeOperation::ALL {
            assert_eq!(BedrockRuntimeOperation::from_name(op.as_str()), Some(*op));
        }
        assert_eq!(BedrockRuntimeOperation::from_name("ApplyGuardrail"), None);
        assert_eq!(BedrockRuntimeOperation::InvokeModel.action(), "invoke");
    }
}
