//! Endpoint resolution.
//!
//! Maps a human-facing portal URL like
//! `https://public.powerdms.com/MassStatePolice/tree/147101` to the
//! site's JSON document API without touching the network.

use url::Url;

use crate::error::{ExportError, Result};

const PORTAL_DOMAIN: &str = "powerdms.com";

/// A resolved portal site: its identifier and document API endpoint.
///
/// # Example
///
/// ```
/// use powerdms_export::SiteEndpoint;
///
/// let endpoint =
///     SiteEndpoint::resolve("https://public.powerdms.com/MassStatePolice/tree/147101").unwrap();
/// assert_eq!(endpoint.site_id, "MassStatePolice");
/// assert_eq!(
///     endpoint.api_url.as_str(),
///     "https://public.powerdms.com/MassStatePolice/documents"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEndpoint {
    /// Organization segment of the portal URL, used to name outputs.
    pub site_id: String,
    /// JSON API endpoint serving the site's document tree.
    pub api_url: Url,
}

impl SiteEndpoint {
    /// Resolve a public portal URL to its document API endpoint.
    ///
    /// The host must be `powerdms.com` or a subdomain of it, and the path
    /// must carry the organization segment. The document endpoint is
    /// per-site, so any trailing tree identifier is not needed to reach it.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidUrl`] when the URL does not have the
    /// expected portal shape. No network call is made.
    pub fn resolve(input: &str) -> Result<Self> {
        let parsed = Url::parse(input)
            .map_err(|e| ExportError::InvalidUrl(format!("{input}: {e}")))?;

        let host = parsed
            .host_str()
            .ok_or_else(|| ExportError::InvalidUrl(format!("{input}: missing host")))?;

        if host != PORTAL_DOMAIN && !host.ends_with(&format!(".{PORTAL_DOMAIN}")) {
            return Err(ExportError::InvalidUrl(format!(
                "{input}: host '{host}' is not a {PORTAL_DOMAIN} portal"
            )));
        }

        let site_id = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .find(|segment| !segment.is_empty())
            .ok_or_else(|| {
                ExportError::InvalidUrl(format!("{input}: missing organization path segment"))
            })?
            .to_string();

        let api_url = Url::parse(&format!("https://{host}/{site_id}/documents"))
            .map_err(|e| ExportError::InvalidUrl(format!("{input}: {e}")))?;

        Ok(Self { site_id, api_url })
    }
}
