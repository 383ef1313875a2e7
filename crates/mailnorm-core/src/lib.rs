pub mod address;
pub mod domain;
pub mod error;
pub mod outcome;
pub mod split;
pub mod user;

pub use address::{domain_to_unicode, normalize_address, same_mailbox, Normalizer, NULL_ADDRESS};
pub use domain::normalize_domain;
pub use error::NormalizeError;
pub use outcome::Normalized;
pub use split::{AddressSplitter, SeparatorSplitter, SplitPolicy, DEFAULT_SEPARATOR};
pub use user::normalize_user;
