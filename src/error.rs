//! Error types for status validation and resolution.
use std::fmt;

use thiserror::Error;

use crate::registry::registry;
use crate::status::{InvalidStatusCode, StatusCode};

/// Classification band of an [`HttpError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Client errors, `400..=499`.
    Client,
    /// Server errors, `500..=599`.
    Server,
}

macro_rules! error_table {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $konst:ident $phrase:literal $(=> $variant:ident)?;
        )*
    ) => {
        /// A typed error status, one variant per registered error code.
        ///
        /// Each specific variant carries a fixed code and text matching the
        /// reason-phrase table entry for its code. The [`Client`](Self::Client)
        /// and [`Server`](Self::Server) variants are band-generic fallbacks
        /// for raising an in-band code that has no dedicated variant.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum HttpError {
            /// Generic `4xx` client error.
            Client,
            /// Generic `5xx` server error.
            Server,
            $(
                $(
                    #[doc = concat!("The `", stringify!($int), " ", $phrase, "` error.")]
                    $variant,
                )?
            )*
        }

        impl HttpError {
            /// Every specific variant, ordered by status code.
            pub const VARIANTS: &'static [HttpError] = &[
                $(
                    $(
                        HttpError::$variant,
                    )?
                )*
            ];

            /// Resolve the dedicated variant for a status code, if any.
            pub const fn from_status(status: StatusCode) -> Option<HttpError> {
                match status.as_u16() {
                    $(
                        $(
                            $int => Some(HttpError::$variant),
                        )?
                    )*
                    _ => None,
                }
            }

            /// Returns the fixed error text, e.g: `"404 Not Found"`.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    Self::Client => "Client Error 4xx",
                    Self::Server => "Server Error 5xx",
                    $(
                        $(
                            Self::$variant => concat!(stringify!($int), " ", $phrase),
                        )?
                    )*
                }
            }

            /// Returns the fixed status code, or `None` for the band-generic
            /// [`Client`](Self::Client) and [`Server`](Self::Server) variants.
            pub const fn status(&self) -> Option<StatusCode> {
                match self {
                    Self::Client | Self::Server => None,
                    $(
                        $(
                            Self::$variant => Some(StatusCode::$konst),
                        )?
                    )*
                }
            }

            /// Returns whether this is a client or a server error.
            pub const fn category(&self) -> Category {
                match self {
                    Self::Client => Category::Client,
                    Self::Server => Category::Server,
                    $(
                        $(
                            Self::$variant => if $int < 500 {
                                Category::Client
                            } else {
                                Category::Server
                            },
                        )?
                    )*
                }
            }
        }
    };
}

registry!(error_table);

impl std::error::Error for HttpError { }

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== StatusError =====

/// An error returned by the registry operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StatusError {
    /// Input lies outside the valid `100..=599` range.
    #[error(transparent)]
    Invalid(#[from] InvalidStatusCode),
    /// Code is well formed but not registered.
    #[error("unknown http status code: `{0}`")]
    Unknown(u16),
    /// A registered error status.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn specific_variants() {
        let err = HttpError::NotFound;
        assert_eq!(err.as_str(), "404 Not Found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.category(), Category::Client);

        let err = HttpError::InternalServerError;
        assert_eq!(err.as_str(), "500 Internal Server Error");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.category(), Category::Server);

        let err = HttpError::ImATeapot;
        assert_eq!(err.as_str(), "418 I'm a teapot");
        assert_eq!(err.status(), Some(StatusCode::IM_A_TEAPOT));
        assert_eq!(err.category(), Category::Client);
    }

    #[test]
    fn generic_fallbacks() {
        assert_eq!(HttpError::Client.as_str(), "Client Error 4xx");
        assert_eq!(HttpError::Client.status(), None);
        assert_eq!(HttpError::Client.category(), Category::Client);

        assert_eq!(HttpError::Server.as_str(), "Server Error 5xx");
        assert_eq!(HttpError::Server.status(), None);
        assert_eq!(HttpError::Server.category(), Category::Server);
    }

    #[test]
    fn from_status() {
        assert_eq!(
            HttpError::from_status(StatusCode::NOT_FOUND),
            Some(HttpError::NotFound)
        );
        assert_eq!(
            HttpError::from_status(StatusCode::NETWORK_AUTHENTICATION_REQUIRED),
            Some(HttpError::NetworkAuthenticationRequired)
        );

        assert_eq!(HttpError::from_status(StatusCode::OK), None);
        assert_eq!(HttpError::from_status(StatusCode::TEMPORARY_REDIRECT), None);
        assert_eq!(HttpError::from_status(StatusCode::from_u16(499).unwrap()), None);
    }

    #[test]
    fn table_round_trip() {
        for err in HttpError::VARIANTS {
            let status = err.status().unwrap();
            let phrase = status.reason().unwrap();

            assert_eq!(err.as_str(), format!("{} {}", status.as_u16(), phrase));
            assert_eq!(HttpError::from_status(status), Some(*err));

            let category = if status.is_client_error() {
                Category::Client
            } else {
                Category::Server
            };
            assert_eq!(err.category(), category);
        }
    }

    #[test]
    fn error_display() {
        assert_eq!(
            StatusError::Unknown(209).to_string(),
            "unknown http status code: `209`"
        );
        assert_eq!(StatusError::from(HttpError::Gone).to_string(), "410 Gone");
        assert_eq!(
            StatusError::from(HttpError::ImATeapot).to_string(),
            "418 I'm a teapot"
        );
    }
}
