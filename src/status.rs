//! HTTP status codes and the reason-phrase table.
use std::{fmt, num::NonZeroU16, str::FromStr};

use crate::registry::registry;

/// HTTP [Status Code][rfc], validated to lie within `100..=599`.
///
/// Validity is range membership only: a `StatusCode` may be well formed yet
/// absent from the registered table, in which case [`reason`](Self::reason)
/// returns `None`.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl StatusCode {
    /// Lowest valid status code.
    pub const MIN: u16 = 100;

    /// Highest valid status code.
    pub const MAX: u16 = 599;

    /// Create [`StatusCode`] from `u16`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStatusCode`] when the value lies outside `100..=599`.
    pub const fn from_u16(code: u16) -> Result<StatusCode, InvalidStatusCode> {
        if code < Self::MIN || code > Self::MAX {
            return Err(InvalidStatusCode { _priv: () });
        }
        match NonZeroU16::new(code) {
            Some(code) => Ok(Self(code)),
            // values below `MIN` are already rejected
            None => Err(InvalidStatusCode { _priv: () }),
        }
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0.get()
    }

    /// Returns `true` when the code is present in the registered table.
    #[inline]
    pub const fn is_registered(&self) -> bool {
        self.reason().is_some()
    }

    /// Returns `true` for informational codes, `100..=199`.
    #[inline]
    pub const fn is_informational(&self) -> bool {
        self.0.get() < 200
    }

    /// Returns `true` for successful codes, `200..=299`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        200 <= self.0.get() && self.0.get() < 300
    }

    /// Returns `true` for redirection codes, `300..=399`.
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        300 <= self.0.get() && self.0.get() < 400
    }

    /// Returns `true` for client error codes, `400..=499`.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        400 <= self.0.get() && self.0.get() < 500
    }

    /// Returns `true` for server error codes, `500..=599`.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.0.get() >= 500
    }
}

macro_rules! status_table {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $konst:ident $phrase:literal $(=> $variant:ident)?;
        )*
    ) => {
        impl StatusCode {
            /// Returns the canonical reason phrase, e.g: `"Not Found"`, or
            /// `None` when the code is not registered.
            pub const fn reason(&self) -> Option<&'static str> {
                match self.0.get() {
                    $(
                        $int => Some($phrase),
                    )*
                    _ => None,
                }
            }

            /// Registered status codes, ordered by code value.
            pub const REGISTERED: &'static [StatusCode] = &[
                $(
                    StatusCode::$konst,
                )*
            ];
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $konst: Self = Self(NonZeroU16::new($int).unwrap());
            )*
        }
    };
}

registry!(status_table);

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(phrase) => write!(f, "{} {}", self.0, phrase),
            None => fmt::Display::fmt(&self.0, f),
        }
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StatusCode").field(&self.0.get()).finish()
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = InvalidStatusCode;

    #[inline]
    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_u16(code)
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(status: StatusCode) -> u16 {
        status.as_u16()
    }
}

impl FromStr for StatusCode {
    type Err = InvalidStatusCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u16>() {
            Ok(code) => Self::from_u16(code),
            Err(_) => Err(InvalidStatusCode { _priv: () }),
        }
    }
}

// ===== Error =====

/// An error when a status code lies outside the valid `100..=599` range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidStatusCode {
    _priv: (),
}

impl std::error::Error for InvalidStatusCode { }

impl fmt::Display for InvalidStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("status code must be an integer between 100 and 599")
    }
}

// ===== Serde =====

#[cfg(feature = "serde")]
impl serde::Serialize for StatusCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StatusCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        StatusCode::from_u16(code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_range() {
        for code in StatusCode::MIN..=StatusCode::MAX {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(status.as_u16(), code);
        }
    }

    #[test]
    fn out_of_range() {
        for code in [0, 1, 99, 600, 601, 1000, u16::MAX] {
            assert!(StatusCode::from_u16(code).is_err());
        }
    }

    #[test]
    fn parse() {
        assert_eq!("404".parse::<StatusCode>().unwrap(), StatusCode::NOT_FOUND);
        assert_eq!("100".parse::<StatusCode>().unwrap(), StatusCode::CONTINUE);

        assert!("".parse::<StatusCode>().is_err());
        assert!("abc".parse::<StatusCode>().is_err());
        assert!("-200".parse::<StatusCode>().is_err());
        assert!("4.04".parse::<StatusCode>().is_err());
        assert!("99".parse::<StatusCode>().is_err());
        assert!("600".parse::<StatusCode>().is_err());
    }

    #[test]
    fn reason_lookup() {
        assert_eq!(StatusCode::OK.reason(), Some("OK"));
        assert_eq!(StatusCode::NOT_FOUND.reason(), Some("Not Found"));
        assert_eq!(StatusCode::IM_A_TEAPOT.reason(), Some("I'm a teapot"));
        assert_eq!(StatusCode::MULTI_STATUS.reason(), Some("Multi-status"));
        assert_eq!(StatusCode::GATEWAY_TIMEOUT.reason(), Some("Gateway Time-out"));

        assert_eq!(StatusCode::from_u16(209).unwrap().reason(), None);
        assert_eq!(StatusCode::from_u16(599).unwrap().reason(), None);
    }

    #[test]
    fn bands() {
        assert!(StatusCode::CONTINUE.is_informational());
        assert!(StatusCode::OK.is_success());
        assert!(StatusCode::FOUND.is_redirection());
        assert!(StatusCode::NOT_FOUND.is_client_error());
        assert!(StatusCode::BAD_GATEWAY.is_server_error());

        assert!(!StatusCode::NOT_FOUND.is_server_error());
        assert!(!StatusCode::BAD_GATEWAY.is_client_error());
        assert!(!StatusCode::OK.is_informational());
    }

    #[test]
    fn registered_table_is_ordered() {
        let mut prev = 0;

        for status in StatusCode::REGISTERED {
            assert!(status.as_u16() > prev);
            assert!(status.is_registered());
            prev = status.as_u16();
        }
    }

    #[test]
    fn display() {
        assert_eq!(StatusCode::NOT_FOUND.to_string(), "404 Not Found");
        assert_eq!(StatusCode::OK.to_string(), "200 OK");
        assert_eq!(StatusCode::from_u16(209).unwrap().to_string(), "209");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&StatusCode::NOT_FOUND).unwrap();
        assert_eq!(json, "404");

        let status: StatusCode = serde_json::from_str("418").unwrap();
        assert_eq!(status, StatusCode::IM_A_TEAPOT);

        assert!(serde_json::from_str::<StatusCode>("99").is_err());
        assert!(serde_json::from_str::<StatusCode>("\"404\"").is_err());
    }
}
