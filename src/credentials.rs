//! Credential handles
//!
//! A [`Credentials`] value is an opaque, shared handle to whatever resolves signing
//! credentials for outbound calls. Configuration records only carry the handle
//! around; resolving credentials is the job of the request pipeline.

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// A source of credentials that a [`Credentials`] handle may wrap.
pub trait CredentialsProvider: fmt::Debug + Send + Sync {
    /// Short, stable name of the provider (used in diagnostics).
    fn provider_name(&self) -> &str;
}

/// Reads credentials from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvProvider;

impl CredentialsProvider for EnvProvider {
    fn provider_name(&self) -> &str {
        "EnvProvider"
    }
}

/// Reads credentials from a shared credentials file.
///
/// Empty `filename` and `profile` select the provider's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedCredentialsProvider {
    pub filename: String,
    pub profile: String,
}

impl CredentialsProvider for SharedCredentialsProvider {
    fn provider_name(&self) -> &str {
        "SharedCredentialsProvider"
    }
}

/// Fetches role credentials from the instance metadata service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ec2RoleProvider {
    /// Credentials are treated as expired this long before their real expiry.
    pub expiry_window: Duration,
}

impl Default for Ec2RoleProvider {
    fn default() -> Self {
        Self {
            expiry_window: DEFAULT_EXPIRY_WINDOW,
        }
    }
}

impl CredentialsProvider for Ec2RoleProvider {
    fn provider_name(&self) -> &str {
        "EC2RoleProvider"
    }
}

pub const DEFAULT_EXPIRY_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Ordered list of providers; the first one able to supply credentials wins.
#[derive(Debug)]
pub struct ChainProvider {
    providers: Vec<Box<dyn CredentialsProvider>>,
}

impl ChainProvider {
    pub fn new(providers: Vec<Box<dyn CredentialsProvider>>) -> Self {
        Self { providers }
    }

    pub fn providers(&self) -> &[Box<dyn CredentialsProvider>] {
        &self.providers
    }
}

impl CredentialsProvider for ChainProvider {
    fn provider_name(&self) -> &str {
        "ChainProvider"
    }
}

/// Shared credential handle.
///
/// Cloning shares the underlying provider. Two handles are equal only when they
/// point at the same provider instance.
#[derive(Clone)]
pub struct Credentials {
    provider: Arc<dyn CredentialsProvider>,
}

impl Credentials {
    pub fn new<P: CredentialsProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Credentials backed by a provider chain.
    pub fn chain(providers: Vec<Box<dyn CredentialsProvider>>) -> Self {
        Self::new(ChainProvider::new(providers))
    }

    pub fn provider(&self) -> &dyn CredentialsProvider {
        self.provider.as_ref()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Whether both handles share the same provider.
    pub fn same_provider(&self, other: &Credentials) -> bool {
        Arc::ptr_eq(&self.provider, &other.provider)
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.same_provider(other)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("provider", &self.provider_name())
            .finish()
    }
}

/// The process-wide default chain: environment, shared credentials file, then
/// instance role.
pub fn default_chain_credentials() -> &'static Credentials {
    static DEFAULT_CHAIN: OnceLock<Credentials> = OnceLock::new();
    DEFAULT_CHAIN.get_or_init(|| {
        Credentials::chain(vec![
            Box::new(EnvProvider),
            Box::new(SharedCredentialsProvider::default()),
            Box::new(Ec2RoleProvider::default()),
        ])
    })
}
