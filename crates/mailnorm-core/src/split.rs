pub const DEFAULT_SEPARATOR: char = '@';

/// Divides an address into its local part and domain.
///
/// Implementations must not keep state between calls; the normalizers share
/// one splitter across threads.
pub trait AddressSplitter: Send + Sync {
    fn split<'a>(&self, address: &'a str) -> (&'a str, &'a str);
}

/// Which separator occurrence divides an address that contains several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitPolicy {
    #[default]
    First,
    Last,
}

impl SplitPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "first" => Some(SplitPolicy::First),
            "last" => Some(SplitPolicy::Last),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SplitPolicy::First => "first",
            SplitPolicy::Last => "last",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorSplitter {
    separator: char,
    policy: SplitPolicy,
}

impl SeparatorSplitter {
    pub fn new(separator: char, policy: SplitPolicy) -> Self {
        Self { separator, policy }
    }

    pub fn with_policy(policy: SplitPolicy) -> Self {
        Self::new(DEFAULT_SEPARATOR, policy)
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn policy(&self) -> SplitPolicy {
        self.policy
    }
}

impl Default for SeparatorSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR, SplitPolicy::First)
    }
}

impl AddressSplitter for SeparatorSplitter {
    /// An address without the separator is all local part: `(address, "")`.
    fn split<'a>(&self, address: &'a str) -> (&'a str, &'a str) {
        let found = match self.policy {
            SplitPolicy::First => address.split_once(self.separator),
            SplitPolicy::Last => address.rsplit_once(self.separator),
        };
        found.unwrap_or((address, ""))
    }
}
