//! Dispatcher configuration
//!
//! Host applications load these from their own config files; every field has
//! a default, so an empty object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::params::FaultPolicy;

/// Which of the two view-data field sets to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewDataProfile {
    /// The eight view-data fields.
    #[default]
    Standard,
    /// The eight view-data fields plus `nestedIdxToStream`.
    WithNestedStream,
}

/// Options for building a view-data schema.
///
/// ```
/// use datanft_validator::params::{DispatchOptions, FaultPolicy, ViewDataProfile};
///
/// let options: DispatchOptions = serde_json::from_str(
///     r#"{"faultPolicy": "preserve", "viewDataProfile": "with_nested_stream"}"#,
/// ).unwrap();
/// assert_eq!(options.fault_policy, FaultPolicy::Preserve);
/// assert_eq!(options.view_data_profile, ViewDataProfile::WithNestedStream);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DispatchOptions {
    pub fault_policy: FaultPolicy,
    pub view_data_profile: ViewDataProfile,
}
