//! Error types for the cruise-frame crate.

/// Error type for all fallible operations in the cruise-frame crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FrameError {
    /// Returned when the frame contains no stands.
    #[error("frame contains no stands")]
    EmptyFrame,

    /// Returned when two stands share the same id.
    #[error("duplicate stand id: {id}")]
    DuplicateStandId {
        /// The duplicated id.
        id: u32,
    },

    /// Returned when a stand's acreage is non-finite or not positive.
    #[error("stand {id}: acres must be finite and positive, got {acres}")]
    InvalidAcres {
        /// Id of the offending stand.
        id: u32,
        /// The invalid acreage.
        acres: f64,
    },

    /// Returned when a stand's age is non-finite or negative.
    #[error("stand {id}: age must be finite and non-negative, got {age}")]
    InvalidAge {
        /// Id of the offending stand.
        id: u32,
        /// The invalid age.
        age: f64,
    },

    /// Returned when a stand's mean volume is non-finite or negative.
    #[error("stand {id}: mean volume must be finite and non-negative, got {mean_volume}")]
    InvalidVolume {
        /// Id of the offending stand.
        id: u32,
        /// The invalid mean volume.
        mean_volume: f64,
    },

    /// Returned when a stand's coefficient of variation is non-finite or negative.
    #[error("stand {id}: cv must be finite and non-negative, got {cv}")]
    InvalidCv {
        /// Id of the offending stand.
        id: u32,
        /// The invalid coefficient of variation.
        cv: f64,
    },

    /// Returned when every stand has zero sampling weight.
    #[error("all stands have zero sampling weight")]
    ZeroTotalWeight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_frame() {
        let e = FrameError::EmptyFrame;
        assert_eq!(e.to_string(), "frame contains no stands");
    }

    #[test]
    fn error_duplicate_id() {
        let e = FrameError::DuplicateStandId { id: 7 };
        assert_eq!(e.to_string(), "duplicate stand id: 7");
    }

    #[test]
    fn error_invalid_acres() {
        let e = FrameError::InvalidAcres { id: 3, acres: -1.5 };
        assert_eq!(
            e.to_string(),
            "stand 3: acres must be finite and positive, got -1.5"
        );
    }

    #[test]
    fn error_invalid_age() {
        let e = FrameError::InvalidAge { id: 3, age: -2.0 };
        assert_eq!(
            e.to_string(),
            "stand 3: age must be finite and non-negative, got -2"
        );
    }

    #[test]
    fn error_invalid_volume() {
        let e = FrameError::InvalidVolume {
            id: 1,
            mean_volume: f64::NAN,
        };
        assert_eq!(
            e.to_string(),
            "stand 1: mean volume must be finite and non-negative, got NaN"
        );
    }

    #[test]
    fn error_invalid_cv() {
        let e = FrameError::InvalidCv { id: 2, cv: -0.1 };
        assert_eq!(
            e.to_string(),
            "stand 2: cv must be finite and non-negative, got -0.1"
        );
    }

    #[test]
    fn error_zero_total_weight() {
        let e = FrameError::ZeroTotalWeight;
        assert_eq!(e.to_string(), "all stands have zero sampling weight");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<FrameError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<FrameError>();
    }
}
