//! Hostname resolution for URL validation.
//!
//! [`HostResolver`] is the seam the application layer depends on;
//! [`SystemResolver`] asks the operating system resolver; the shortening
//! service bounds each lookup with the configured DNS timeout.

mod resolver;

pub use resolver::{HostResolver, ResolveError, SystemResolver};

#[cfg(test)]
pub use resolver::MockHostResolver;
