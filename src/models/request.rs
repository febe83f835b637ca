//! Check requests and domain-name validation.

use serde::Serialize;

use super::Protocol;
use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
use crate::error_handling::RequestError;

/// Input to a single check: which domain, which protocol, and for DKIM which selector.
///
/// Built once per invocation through [`CheckRequest::new`], which normalizes the
/// domain and enforces the DKIM selector requirement. The fields cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRequest {
    domain: String,
    protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    selector: Option<String>,
}

impl CheckRequest {
    /// Validates and builds a request.
    ///
    /// A selector passed for SPF or DMARC is dropped. For DKIM it is required
    /// and must itself be a valid sequence of DNS labels.
    ///
    /// # Errors
    ///
    /// Returns a `RequestError` if the domain is not a valid DNS name or the
    /// DKIM selector is missing or invalid.
    pub fn new(
        domain: &str,
        protocol: Protocol,
        selector: Option<&str>,
    ) -> Result<Self, RequestError> {
        let domain = normalize_domain(domain)?;

        let selector = match protocol {
            Protocol::Dkim => {
                let raw = selector
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or(RequestError::MissingSelector)?;
                Some(validate_labels(&raw.to_ascii_lowercase())?)
            }
            Protocol::Spf | Protocol::Dmarc => None,
        };

        Ok(Self {
            domain,
            protocol,
            selector,
        })
    }

    /// SPF request for `domain`.
    pub fn spf(domain: &str) -> Result<Self, RequestError> {
        Self::new(domain, Protocol::Spf, None)
    }

    /// DKIM request for `domain` under `selector`.
    pub fn dkim(domain: &str, selector: &str) -> Result<Self, RequestError> {
        Self::new(domain, Protocol::Dkim, Some(selector))
    }

    /// DMARC request for `domain`.
    pub fn dmarc(domain: &str) -> Result<Self, RequestError> {
        Self::new(domain, Protocol::Dmarc, None)
    }

    /// Normalized domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Protocol being checked.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// DKIM selector (always `None` for SPF and DMARC).
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// DNS name whose TXT records this check reads.
    pub fn query_name(&self) -> String {
        self.protocol
            .query_name(&self.domain, self.selector.as_deref())
    }
}

/// Normalizes a domain name for lookup.
///
/// Trims whitespace, lowercases, and strips a single trailing dot, then checks
/// the RFC 1035 length limits and the character set (letters, digits, `-`,
/// and `_` for service labels such as `_dmarc`).
///
/// # Errors
///
/// Returns a `RequestError` describing the first problem found.
pub fn normalize_domain(domain: &str) -> Result<String, RequestError> {
    let trimmed = domain.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(RequestError::EmptyDomain);
    }
    if trimmed.len() > MAX_DOMAIN_LENGTH {
        return Err(RequestError::DomainTooLong(trimmed.len()));
    }
    validate_labels(&trimmed.to_ascii_lowercase())
}

fn validate_labels(name: &str) -> Result<String, RequestError> {
    for label in name.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
            return Err(RequestError::InvalidLabel {
                name: name.to_string(),
                label: label.to_string(),
            });
        }
        if let Some(ch) = label
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(RequestError::InvalidCharacter {
                name: name.to_string(),
                ch,
            });
        }
    }
    Ok(name.to_string())
}
