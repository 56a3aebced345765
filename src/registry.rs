//! Status registry: code validation, reason-phrase lookup, and typed error
//! resolution.
use crate::error::{HttpError, StatusError};
use crate::log::{debug, warning};
use crate::status::StatusCode;

/// Registered status codes with their canonical reason phrase and, for error
/// statuses, the [`HttpError`] variant resolved by [`raise_for`].
///
/// Written once and consumed by both the [`StatusCode`] and [`HttpError`]
/// tables, so a variant's embedded code and phrase always match the phrase
/// table entry for its code.
macro_rules! registry {
    ($apply:ident) => {
        $apply! {
            /// `100`. The initial part of the request has been received, continue.
            100 CONTINUE "Continue";
            /// `101`. The server is switching to the protocol named in the `Upgrade` header.
            101 SWITCHING_PROTOCOLS "Switching Protocols";
            /// `102`. The server has accepted the request but not yet completed it.
            102 PROCESSING "Processing";
            /// `200`. The request succeeded.
            200 OK "OK";
            /// `201`. The request succeeded, and a new resource was created as a result.
            201 CREATED "Created";
            /// `202`. The request has been accepted for processing, but not completed.
            202 ACCEPTED "Accepted";
            /// `203`. The returned metadata is collected from a transforming proxy.
            203 NON_AUTHORITATIVE_INFORMATION "Non-Authoritative Information";
            /// `204`. There is no content to send for this request.
            204 NO_CONTENT "No Content";
            /// `205`. Tells the client to reset the document view.
            205 RESET_CONTENT "Reset Content";
            /// `206`. The response carries only part of the resource, per the `Range` header.
            206 PARTIAL_CONTENT "Partial Content";
            /// `207`. The response body conveys multiple independent statuses (WebDAV).
            207 MULTI_STATUS "Multi-status";
            /// `208`. Members of a binding were already enumerated earlier (WebDAV).
            208 ALREADY_REPORTED "Already Reported";
            /// `300`. The request has more than one possible response.
            300 MULTIPLE_CHOICES "Multiple Choices";
            /// `301`. The URI of the requested resource has been changed permanently.
            301 MOVED_PERMANENTLY "Moved Permanently";
            /// `302`. The URI of the requested resource has been changed temporarily.
            302 FOUND "Found";
            /// `303`. The resource should be fetched at another URI with a GET request.
            303 SEE_OTHER "See Other";
            /// `304`. The response has not been modified, the cached version is still valid.
            304 NOT_MODIFIED "Not Modified";
            /// `305`. The resource must be accessed through the named proxy. Deprecated.
            305 USE_PROXY "Use Proxy";
            /// `306`. No longer used, reserved.
            306 SWITCH_PROXY "Switch Proxy";
            /// `307`. The resource moved temporarily, repeat the request with the same method.
            307 TEMPORARY_REDIRECT "Temporary Redirect";
            /// `400`. The server cannot process the request due to a client error.
            400 BAD_REQUEST "Bad Request" => BadRequest;
            /// `401`. The request lacks valid authentication credentials.
            401 UNAUTHORIZED "Unauthorized" => Unauthorized;
            /// `402`. Reserved for future use.
            402 PAYMENT_REQUIRED "Payment Required" => PaymentRequired;
            /// `403`. The client does not have access rights to the content.
            403 FORBIDDEN "Forbidden" => Forbidden;
            /// `404`. The server cannot find the requested resource.
            404 NOT_FOUND "Not Found" => NotFound;
            /// `405`. The request method is not supported by the target resource.
            405 METHOD_NOT_ALLOWED "Method Not Allowed" => MethodNotAllowed;
            /// `406`. Content negotiation found no acceptable representation.
            406 NOT_ACCEPTABLE "Not Acceptable" => NotAcceptable;
            /// `407`. Authentication with the proxy is required first.
            407 PROXY_AUTHENTICATION_REQUIRED "Proxy Authentication Required" => ProxyAuthenticationRequired;
            /// `408`. The server timed out waiting for the request.
            408 REQUEST_TIMEOUT "Request Time-out" => RequestTimeout;
            /// `409`. The request conflicts with the current state of the resource.
            409 CONFLICT "Conflict" => Conflict;
            /// `410`. The requested content has been permanently deleted.
            410 GONE "Gone" => Gone;
            /// `411`. The server requires a `Content-Length` header.
            411 LENGTH_REQUIRED "Length Required" => LengthRequired;
            /// `412`. Preconditions in the request headers are not met.
            412 PRECONDITION_FAILED "Precondition Failed" => PreconditionFailed;
            /// `413`. The request body is larger than the server is willing to process.
            413 REQUEST_ENTITY_TOO_LARGE "Request Entity Too Large" => RequestEntityTooLarge;
            /// `414`. The request URI is longer than the server is willing to interpret.
            414 REQUEST_URI_TOO_LONG "Request-URI Too Large" => RequestUriTooLong;
            /// `415`. The media format of the request is not supported.
            415 UNSUPPORTED_MEDIA_TYPE "Unsupported Media Type" => UnsupportedMediaType;
            /// `416`. The `Range` header cannot be satisfied by the target resource.
            416 REQUESTED_RANGE_NOT_SATISFIABLE "Requested range not satisfiable" => RequestedRangeNotSatisfiable;
            /// `417`. The expectation in the `Expect` header cannot be met.
            417 EXPECTATION_FAILED "Expectation Failed" => ExpectationFailed;
            /// `418`. The server refuses the attempt to brew coffee with a teapot.
            418 IM_A_TEAPOT "I'm a teapot" => ImATeapot;
            /// `422`. The request was well formed but semantically erroneous (WebDAV).
            422 UNPROCESSABLE_ENTITY "Unprocessable Entity" => UnprocessableEntity;
            /// `423`. The resource is locked (WebDAV).
            423 LOCKED "Locked" => Locked;
            /// `424`. The request failed because a prior request failed (WebDAV).
            424 FAILED_DEPENDENCY "Failed Dependency" => FailedDependency;
            /// `425`. The collection ordering required by the request is not met.
            425 UNORDERED_COLLECTION "Unordered Collection" => UnorderedCollection;
            /// `426`. The server refuses to serve the request over the current protocol.
            426 UPGRADE_REQUIRED "Upgrade Required" => UpgradeRequired;
            /// `428`. The origin server requires the request to be conditional.
            428 PRECONDITION_REQUIRED "Precondition Required" => PreconditionRequired;
            /// `429`. The client has sent too many requests in a given amount of time.
            429 TOO_MANY_REQUESTS "Too Many Requests" => TooManyRequests;
            /// `431`. The request header fields are too large.
            431 REQUEST_HEADER_FIELDS_TOO_LARGE "Request Header Fields Too Large" => RequestHeaderFieldsTooLarge;
            /// `451`. The resource cannot legally be provided.
            451 UNAVAILABLE_FOR_LEGAL_REASONS "Unavailable For Legal Reasons" => UnavailableForLegalReasons;
            /// `500`. The server encountered a situation it does not know how to handle.
            500 INTERNAL_SERVER_ERROR "Internal Server Error" => InternalServerError;
            /// `501`. The request method is not supported by the server.
            501 NOT_IMPLEMENTED "Not Implemented" => NotImplemented;
            /// `502`. The server, acting as a gateway, got an invalid response.
            502 BAD_GATEWAY "Bad Gateway" => BadGateway;
            /// `503`. The server is not ready to handle the request.
            503 SERVICE_UNAVAILABLE "Service Unavailable" => ServiceUnavailable;
            /// `504`. The server, acting as a gateway, got no response in time.
            504 GATEWAY_TIMEOUT "Gateway Time-out" => GatewayTimeout;
            /// `505`. The HTTP version used in the request is not supported.
            505 HTTP_VERSION_NOT_SUPPORTED "HTTP Version not supported" => HttpVersionNotSupported;
            /// `506`. Content negotiation ended in a circular reference.
            506 VARIANT_ALSO_NEGOTIATES "Variant Also Negotiates" => VariantAlsoNegotiates;
            /// `507`. The server cannot store the representation (WebDAV).
            507 INSUFFICIENT_STORAGE "Insufficient Storage" => InsufficientStorage;
            /// `508`. The server detected an infinite loop while processing (WebDAV).
            508 LOOP_DETECTED "Loop Detected" => LoopDetected;
            /// `511`. The client needs to authenticate to gain network access.
            511 NETWORK_AUTHENTICATION_REQUIRED "Network Authentication Required" => NetworkAuthenticationRequired;
        }
    };
}

pub(crate) use registry;

/// Validate a candidate status code against the `100..=599` range.
///
/// Range membership is the only requirement, the code does not have to be
/// registered.
///
/// # Errors
///
/// Returns [`StatusError::Invalid`] when the value lies outside the range.
pub fn validate(code: u16) -> Result<StatusCode, StatusError> {
    Ok(StatusCode::from_u16(code)?)
}

/// Resolve a status code to its canonical reason phrase, e.g: `"Not Found"`.
///
/// # Errors
///
/// Returns [`StatusError::Invalid`] when the value lies outside `100..=599`,
/// or [`StatusError::Unknown`] when it is in range but not registered.
pub fn reason_phrase(code: u16) -> Result<&'static str, StatusError> {
    match validate(code)?.reason() {
        Some(phrase) => Ok(phrase),
        None => {
            debug!("no reason phrase registered for status {code}");
            Err(StatusError::Unknown(code))
        }
    }
}

/// Resolve a status code to its typed error, failing with that error.
///
/// Registered `4xx`/`5xx` codes fail with [`StatusError::Http`] carrying the
/// matching [`HttpError`] variant. Registered non-error codes return `Ok(())`.
///
/// # Errors
///
/// Returns [`StatusError::Invalid`] when the value lies outside `100..=599`,
/// [`StatusError::Unknown`] when it is in range but not registered, and
/// [`StatusError::Http`] for registered error codes.
pub fn raise_for(code: u16) -> Result<(), StatusError> {
    let status = validate(code)?;

    if !status.is_registered() {
        warning!("cannot raise for unregistered status {code}");
        return Err(StatusError::Unknown(code));
    }

    match HttpError::from_status(status) {
        Some(err) => {
            debug!("raising `{err}` for status {code}");
            Err(err.into())
        }
        None => Ok(()),
    }
}
