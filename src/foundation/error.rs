/// Convenience result type used across cardgen.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by the generation pipeline.
///
/// Asset and font failures are real errors here, never a placeholder image:
/// a member whose assets cannot be resolved fails as a unit instead of
/// feeding an unusable layer into the compositor.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Roster file unreadable or not a valid member sequence.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Asset file does not exist at its resolved path.
    #[error("asset not found: '{0}'")]
    AssetNotFound(String),

    /// Asset file exists but its bytes are not decodable PNG.
    #[error("asset decode error: '{path}': {message}")]
    AssetDecode {
        /// Path of the offending asset file.
        path: String,
        /// Decoder failure detail.
        message: String,
    },

    /// Font file unreadable or not parsable as TrueType.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// Output directory or file could not be created.
    #[error("output create error: '{path}': {message}")]
    OutputCreate {
        /// Path that failed to be created.
        path: String,
        /// Filesystem failure detail.
        message: String,
    },

    /// Composed card could not be encoded into the output file.
    #[error("output encode error: '{path}': {message}")]
    OutputEncode {
        /// Path of the partially written output file.
        path: String,
        /// Encoder failure detail.
        message: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::ConfigParse`] value.
    pub fn config_parse(msg: impl Into<String>) -> Self {
        Self::ConfigParse(msg.into())
    }

    /// Build a [`CardError::AssetNotFound`] value.
    pub fn asset_not_found(path: impl Into<String>) -> Self {
        Self::AssetNotFound(path.into())
    }

    /// Build a [`CardError::AssetDecode`] value.
    pub fn asset_decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssetDecode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Build a [`CardError::FontLoad`] value.
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`CardError::OutputCreate`] value.
    pub fn output_create(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutputCreate {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Build a [`CardError::OutputEncode`] value.
    pub fn output_encode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutputEncode {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
