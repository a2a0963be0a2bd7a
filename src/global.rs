//! Process-wide suffix list.
//!
//! A write-once handle: install a list once at startup, then read it from
//! anywhere. The installed list is never replaced.

use once_cell::sync::OnceCell;

use crate::error::{PslError, Result};
use crate::list::PublicSuffixList;
use crate::types::Options;

static GLOBAL_LIST: OnceCell<PublicSuffixList> = OnceCell::new();

/// Install the process-wide list. Fails if one is already installed.
pub fn install(list: PublicSuffixList) -> Result<()> {
    GLOBAL_LIST
        .set(list)
        .map_err(|_| PslError::AlreadyInitialized)?;
    tracing::debug!("global suffix list installed");
    Ok(())
}

/// The process-wide list
pub fn get() -> Result<&'static PublicSuffixList> {
    GLOBAL_LIST.get().ok_or(PslError::NotInitialized)
}

/// Public suffix of `domain` using the process-wide list
pub fn public_suffix(domain: &str, options: &Options) -> Result<Option<String>> {
    Ok(get()?.public_suffix(domain, options))
}

/// Registrable domain of `domain` using the process-wide list
pub fn registrable_domain(domain: &str, options: &Options) -> Result<Option<String>> {
    Ok(get()?.registrable_domain(domain, options))
}
