use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A stored entity with a store-assigned id.
///
/// Collections and list views are generic over this trait so the user and
/// role slices share one implementation.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    type Id: Copy
        + Eq
        + Hash
        + Ord
        + Debug
        + Display
        + From<u64>
        + Into<u64>
        + Send
        + Sync;

    /// Singular noun used in log lines and error messages ("user", "role").
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    /// Display name, used for avatars and log fields.
    fn name(&self) -> &str;
}
