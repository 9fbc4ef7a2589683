//! HTTP status codes, their reason phrases, and their response classes.
//!
//! The heart of this module is a registry of status codes: every code carries its
//! standardised reason phrase (`404` → “Not Found”) and an identifier‐safe registry
//! name (`not_found`). The registry is compiled in, immutable, and safe to read from
//! any number of threads.
//!
//! On top of the registry sits [`Status`], a small value object pairing a code with
//! a reason phrase. A `Status` can classify itself ([`Status::class`]), render
//! itself (`404 (Not Found)`), and, for error‐classified codes, produce an
//! [`HttpError`] for the caller to propagate.
//!
//! IANA maintain the [Hypertext Transfer Protocol (HTTP) Status Code
//! Registry](http://www.iana.org/assignments/http-status-codes/http-status-codes.xhtml)
//! which is the source for the registered entries here; the table also carries a
//! handful of widely deployed extension codes (nginx’s 444 and 499, Twitter’s 420,
//! the 598/599 proxy timeouts) and the code 0 sentinel for an unreachable peer.

use std::borrow::Cow;
use std::fmt;

use crate::error::{HttpError, NotAnError};

/// The reason phrase reported for codes that are not in the registry.
pub const UNASSIGNED: &str = "Unassigned";

/// One registered status code: the code, its registry name, and its reason phrase.
///
/// The registry name is identifier‐safe and unique across the table; it is the
/// lowercase form of the corresponding constant on [`Status`] (`not_found` for
/// [`Status::NOT_FOUND`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusEntry {
    /// The numeric status code.
    pub code: u16,
    /// The identifier‐safe registry name.
    pub name: &'static str,
    /// The standardised reason phrase.
    pub text: &'static str,
}

macro_rules! status_table {
    ($(
        $code:tt $konst:ident $name:tt $text:tt #[$doc:meta];
    )*) => {
        static REGISTERED_STATUSES: phf::Map<u16, StatusEntry> = phf::phf_map! {
            $($code => StatusEntry { code: $code, name: $name, text: $text },)*
        };

        /// Every registered status, in table order.
        ///
        /// Lookup by code should go through [`registered`] or [`reason_phrase`];
        /// this slice exists for callers that want to walk the whole registry.
        pub static STATUS_TABLE: &[StatusEntry] = &[
            $(StatusEntry { code: $code, name: $name, text: $text },)*
        ];

        impl Status {
            $(
                #[$doc]
                pub const $konst: Status = Status {
                    code: $code,
                    text: Cow::Borrowed($text),
                };
            )*
        }
    }
}

// The RFC references follow the IANA registry. Codes marked as extensions are not
// registered but are common enough in the wild to deserve canonical phrases.
status_table! {
    // code  constant                          registry name                            reason phrase
    0u16    UNREACHABLE                        "unreachable"                            "Unreachable"                            #[doc = "`0 Unreachable`: the peer could not be reached at all. A sentinel, not an HTTP status code; classified as an error."];
    100u16  CONTINUE                           "continue"                               "Continue"                               #[doc = "`100 Continue`, defined in [RFC 7231, section 6.2.1](https://tools.ietf.org/html/rfc7231#section-6.2.1)."];
    101u16  SWITCHING_PROTOCOLS                "switching_protocols"                    "Switching Protocols"                    #[doc = "`101 Switching Protocols`, defined in [RFC 7231, section 6.2.2](https://tools.ietf.org/html/rfc7231#section-6.2.2)."];
    102u16  PROCESSING                         "processing"                             "Processing"                             #[doc = "`102 Processing`, defined in [RFC 2518](https://tools.ietf.org/html/rfc2518)."];
    200u16  OK                                 "ok"                                     "OK"                                     #[doc = "`200 OK`, defined in [RFC 7231, section 6.3.1](https://tools.ietf.org/html/rfc7231#section-6.3.1)."];
    201u16  CREATED                            "created"                                "Created"                                #[doc = "`201 Created`, defined in [RFC 7231, section 6.3.2](https://tools.ietf.org/html/rfc7231#section-6.3.2)."];
    202u16  ACCEPTED                           "accepted"                               "Accepted"                               #[doc = "`202 Accepted`, defined in [RFC 7231, section 6.3.3](https://tools.ietf.org/html/rfc7231#section-6.3.3)."];
    203u16  NON_AUTHORITATIVE_INFORMATION      "non_authoritative_information"          "Non-Authoritative Information"          #[doc = "`203 Non-Authoritative Information`, defined in [RFC 7231, section 6.3.4](https://tools.ietf.org/html/rfc7231#section-6.3.4)."];
    204u16  NO_CONTENT                         "no_content"                             "No Content"                             #[doc = "`204 No Content`, defined in [RFC 7231, section 6.3.5](https://tools.ietf.org/html/rfc7231#section-6.3.5)."];
    205u16  RESET_CONTENT                      "reset_content"                          "Reset Content"                          #[doc = "`205 Reset Content`, defined in [RFC 7231, section 6.3.6](https://tools.ietf.org/html/rfc7231#section-6.3.6)."];
    206u16  PARTIAL_CONTENT                    "partial_content"                        "Partial Content"                        #[doc = "`206 Partial Content`, defined in [RFC 7233, section 4.1](https://tools.ietf.org/html/rfc7233#section-4.1)."];
    207u16  MULTI_STATUS                       "multi_status"                           "Multi-Status"                           #[doc = "`207 Multi-Status`, defined in [RFC 4918](https://tools.ietf.org/html/rfc4918)."];
    208u16  ALREADY_REPORTED                   "already_reported"                       "Already Reported"                       #[doc = "`208 Already Reported`, defined in [RFC 5842](https://tools.ietf.org/html/rfc5842)."];
    226u16  IM_USED                            "im_used"                                "IM Used"                                #[doc = "`226 IM Used`, defined in [RFC 3229](https://tools.ietf.org/html/rfc3229)."];
    300u16  MULTIPLE_CHOICES                   "multiple_choices"                       "Multiple Choices"                       #[doc = "`300 Multiple Choices`, defined in [RFC 7231, section 6.4.1](https://tools.ietf.org/html/rfc7231#section-6.4.1)."];
    301u16  MOVED_PERMANENTLY                  "moved_permanently"                      "Moved Permanently"                      #[doc = "`301 Moved Permanently`, defined in [RFC 7231, section 6.4.2](https://tools.ietf.org/html/rfc7231#section-6.4.2)."];
    302u16  FOUND                              "found"                                  "Found"                                  #[doc = "`302 Found`, defined in [RFC 7231, section 6.4.3](https://tools.ietf.org/html/rfc7231#section-6.4.3)."];
    303u16  SEE_OTHER                          "see_other"                              "See Other"                              #[doc = "`303 See Other`, defined in [RFC 7231, section 6.4.4](https://tools.ietf.org/html/rfc7231#section-6.4.4)."];
    304u16  NOT_MODIFIED                       "not_modified"                           "Not Modified"                           #[doc = "`304 Not Modified`, defined in [RFC 7232, section 4.1](https://tools.ietf.org/html/rfc7232#section-4.1)."];
    305u16  USE_PROXY                          "use_proxy"                              "Use Proxy"                              #[doc = "`305 Use Proxy`, defined in [RFC 7231, section 6.4.5](https://tools.ietf.org/html/rfc7231#section-6.4.5); deprecated."];
    306u16  UNUSED                             "unused"                                 "Unused"                                 #[doc = "`306 Unused`; reserved by [RFC 7231, section 6.4.6](https://tools.ietf.org/html/rfc7231#section-6.4.6), no longer used."];
    307u16  TEMPORARY_REDIRECT                 "temporary_redirect"                     "Temporary Redirect"                     #[doc = "`307 Temporary Redirect`, defined in [RFC 7231, section 6.4.7](https://tools.ietf.org/html/rfc7231#section-6.4.7)."];
    308u16  PERMANENT_REDIRECT                 "permanent_redirect"                     "Permanent Redirect"                     #[doc = "`308 Permanent Redirect`, defined in [RFC 7538](https://tools.ietf.org/html/rfc7538)."];
    400u16  BAD_REQUEST                        "bad_request"                            "Bad Request"                            #[doc = "`400 Bad Request`, defined in [RFC 7231, section 6.5.1](https://tools.ietf.org/html/rfc7231#section-6.5.1)."];
    401u16  UNAUTHORIZED                       "unauthorized"                           "Unauthorized"                           #[doc = "`401 Unauthorized`, defined in [RFC 7235, section 3.1](https://tools.ietf.org/html/rfc7235#section-3.1)."];
    402u16  PAYMENT_REQUIRED                   "payment_required"                       "Payment Required"                       #[doc = "`402 Payment Required`, defined in [RFC 7231, section 6.5.2](https://tools.ietf.org/html/rfc7231#section-6.5.2)."];
    403u16  FORBIDDEN                          "forbidden"                              "Forbidden"                              #[doc = "`403 Forbidden`, defined in [RFC 7231, section 6.5.3](https://tools.ietf.org/html/rfc7231#section-6.5.3)."];
    404u16  NOT_FOUND                          "not_found"                              "Not Found"                              #[doc = "`404 Not Found`, defined in [RFC 7231, section 6.5.4](https://tools.ietf.org/html/rfc7231#section-6.5.4)."];
    405u16  METHOD_NOT_ALLOWED                 "method_not_allowed"                     "Method Not Allowed"                     #[doc = "`405 Method Not Allowed`, defined in [RFC 7231, section 6.5.5](https://tools.ietf.org/html/rfc7231#section-6.5.5)."];
    406u16  NOT_ACCEPTABLE                     "not_acceptable"                         "Not Acceptable"                         #[doc = "`406 Not Acceptable`, defined in [RFC 7231, section 6.5.6](https://tools.ietf.org/html/rfc7231#section-6.5.6)."];
    407u16  PROXY_AUTHENTICATION_REQUIRED      "proxy_authentication_required"          "Proxy Authentication Required"          #[doc = "`407 Proxy Authentication Required`, defined in [RFC 7235, section 3.2](https://tools.ietf.org/html/rfc7235#section-3.2)."];
    408u16  REQUEST_TIMEOUT                    "request_timeout"                        "Request Timeout"                        #[doc = "`408 Request Timeout`, defined in [RFC 7231, section 6.5.7](https://tools.ietf.org/html/rfc7231#section-6.5.7)."];
    409u16  CONFLICT                           "conflict"                               "Conflict"                               #[doc = "`409 Conflict`, defined in [RFC 7231, section 6.5.8](https://tools.ietf.org/html/rfc7231#section-6.5.8)."];
    410u16  GONE                               "gone"                                   "Gone"                                   #[doc = "`410 Gone`, defined in [RFC 7231, section 6.5.9](https://tools.ietf.org/html/rfc7231#section-6.5.9)."];
    411u16  LENGTH_REQUIRED                    "length_required"                        "Length Required"                        #[doc = "`411 Length Required`, defined in [RFC 7231, section 6.5.10](https://tools.ietf.org/html/rfc7231#section-6.5.10)."];
    412u16  PRECONDITION_FAILED                "precondition_failed"                    "Precondition Failed"                    #[doc = "`412 Precondition Failed`, defined in [RFC 7232, section 4.2](https://tools.ietf.org/html/rfc7232#section-4.2)."];
    413u16  PAYLOAD_TOO_LARGE                  "payload_too_large"                      "Payload Too Large"                      #[doc = "`413 Payload Too Large`, defined in [RFC 7231, section 6.5.11](https://tools.ietf.org/html/rfc7231#section-6.5.11)."];
    414u16  URI_TOO_LONG                       "uri_too_long"                           "URI Too Long"                           #[doc = "`414 URI Too Long`, defined in [RFC 7231, section 6.5.12](https://tools.ietf.org/html/rfc7231#section-6.5.12)."];
    415u16  UNSUPPORTED_MEDIA_TYPE             "unsupported_media_type"                 "Unsupported Media Type"                 #[doc = "`415 Unsupported Media Type`, defined in [RFC 7231, section 6.5.13](https://tools.ietf.org/html/rfc7231#section-6.5.13)."];
    416u16  RANGE_NOT_SATISFIABLE              "range_not_satisfiable"                  "Range Not Satisfiable"                  #[doc = "`416 Range Not Satisfiable`, defined in [RFC 7233, section 4.4](https://tools.ietf.org/html/rfc7233#section-4.4)."];
    417u16  EXPECTATION_FAILED                 "expectation_failed"                     "Expectation Failed"                     #[doc = "`417 Expectation Failed`, defined in [RFC 7231, section 6.5.14](https://tools.ietf.org/html/rfc7231#section-6.5.14)."];
    418u16  IM_A_TEAPOT                        "im_a_teapot"                            "I'm a teapot"                           #[doc = "`418 I'm a teapot`; curiously not registered by IANA, but [RFC 2324](https://tools.ietf.org/html/rfc2324)."];
    420u16  ENHANCE_YOUR_CALM                  "enhance_your_calm"                      "Enhance Your Calm"                      #[doc = "`420 Enhance Your Calm`, a Twitter extension; returned when a client is rate limited."];
    421u16  MISDIRECTED_REQUEST                "misdirected_request"                    "Misdirected Request"                    #[doc = "`421 Misdirected Request`, defined in [RFC 7540, section 9.1.2](https://tools.ietf.org/html/rfc7540#section-9.1.2)."];
    422u16  UNPROCESSABLE_ENTITY               "unprocessable_entity"                   "Unprocessable Entity"                   #[doc = "`422 Unprocessable Entity`, defined in [RFC 4918](https://tools.ietf.org/html/rfc4918)."];
    423u16  LOCKED                             "locked"                                 "Locked"                                 #[doc = "`423 Locked`, defined in [RFC 4918](https://tools.ietf.org/html/rfc4918)."];
    424u16  FAILED_DEPENDENCY                  "failed_dependency"                      "Failed Dependency"                      #[doc = "`424 Failed Dependency`, defined in [RFC 4918](https://tools.ietf.org/html/rfc4918)."];
    425u16  UNORDERED_COLLECTION               "unordered_collection"                   "Unordered Collection"                   #[doc = "`425 Unordered Collection`, from the WebDAV ordered collections draft ([RFC 3648](https://tools.ietf.org/html/rfc3648) era); never registered."];
    426u16  UPGRADE_REQUIRED                   "upgrade_required"                       "Upgrade Required"                       #[doc = "`426 Upgrade Required`, defined in [RFC 7231, section 6.5.15](https://tools.ietf.org/html/rfc7231#section-6.5.15)."];
    428u16  PRECONDITION_REQUIRED              "precondition_required"                  "Precondition Required"                  #[doc = "`428 Precondition Required`, defined in [RFC 6585](https://tools.ietf.org/html/rfc6585)."];
    429u16  TOO_MANY_REQUESTS                  "too_many_requests"                      "Too Many Requests"                      #[doc = "`429 Too Many Requests`, defined in [RFC 6585](https://tools.ietf.org/html/rfc6585)."];
    431u16  REQUEST_HEADER_FIELDS_TOO_LARGE    "request_header_fields_too_large"        "Request Header Fields Too Large"        #[doc = "`431 Request Header Fields Too Large`, defined in [RFC 6585](https://tools.ietf.org/html/rfc6585)."];
    444u16  NO_RESPONSE                        "no_response"                            "No Response"                            #[doc = "`444 No Response`, an nginx extension: the server returned no information and closed the connection."];
    449u16  RETRY_WITH                         "retry_with"                             "Retry With"                             #[doc = "`449 Retry With`, a Microsoft IIS extension: the request should be retried after performing the appropriate action."];
    450u16  BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS "blocked_by_windows_parental_controls" "Blocked By Windows Parental Controls"   #[doc = "`450 Blocked By Windows Parental Controls`, a Microsoft extension."];
    451u16  UNAVAILABLE_FOR_LEGAL_REASONS      "unavailable_for_legal_reasons"          "Unavailable For Legal Reasons"          #[doc = "`451 Unavailable For Legal Reasons`, defined in [RFC 7725](https://tools.ietf.org/html/rfc7725)."];
    499u16  CLIENT_CLOSED_REQUEST              "client_closed_request"                  "Client Closed Request"                  #[doc = "`499 Client Closed Request`, an nginx extension: the client closed the connection before the server answered."];
    500u16  INTERNAL_SERVER_ERROR              "internal_server_error"                  "Internal Server Error"                  #[doc = "`500 Internal Server Error`, defined in [RFC 7231, section 6.6.1](https://tools.ietf.org/html/rfc7231#section-6.6.1)."];
    501u16  NOT_IMPLEMENTED                    "not_implemented"                        "Not Implemented"                        #[doc = "`501 Not Implemented`, defined in [RFC 7231, section 6.6.2](https://tools.ietf.org/html/rfc7231#section-6.6.2)."];
    502u16  BAD_GATEWAY                        "bad_gateway"                            "Bad Gateway"                            #[doc = "`502 Bad Gateway`, defined in [RFC 7231, section 6.6.3](https://tools.ietf.org/html/rfc7231#section-6.6.3)."];
    503u16  SERVICE_UNAVAILABLE                "service_unavailable"                    "Service Unavailable"                    #[doc = "`503 Service Unavailable`, defined in [RFC 7231, section 6.6.4](https://tools.ietf.org/html/rfc7231#section-6.6.4)."];
    504u16  GATEWAY_TIMEOUT                    "gateway_timeout"                        "Gateway Timeout"                        #[doc = "`504 Gateway Timeout`, defined in [RFC 7231, section 6.6.5](https://tools.ietf.org/html/rfc7231#section-6.6.5)."];
    505u16  HTTP_VERSION_NOT_SUPPORTED         "http_version_not_supported"             "HTTP Version Not Supported"             #[doc = "`505 HTTP Version Not Supported`, defined in [RFC 7231, section 6.6.6](https://tools.ietf.org/html/rfc7231#section-6.6.6)."];
    506u16  VARIANT_ALSO_NEGOTIATES            "variant_also_negotiates"                "Variant Also Negotiates"                #[doc = "`506 Variant Also Negotiates`, defined in [RFC 2295](https://tools.ietf.org/html/rfc2295)."];
    507u16  INSUFFICIENT_STORAGE               "insufficient_storage"                   "Insufficient Storage"                   #[doc = "`507 Insufficient Storage`, defined in [RFC 4918](https://tools.ietf.org/html/rfc4918)."];
    508u16  LOOP_DETECTED                      "loop_detected"                          "Loop Detected"                          #[doc = "`508 Loop Detected`, defined in [RFC 5842](https://tools.ietf.org/html/rfc5842)."];
    509u16  BANDWIDTH_LIMIT_EXCEEDED           "bandwidth_limit_exceeded"               "Bandwidth Limit Exceeded"               #[doc = "`509 Bandwidth Limit Exceeded`, an Apache/cPanel extension; never registered."];
    510u16  NOT_EXTENDED                       "not_extended"                           "Not Extended"                           #[doc = "`510 Not Extended`, defined in [RFC 2774](https://tools.ietf.org/html/rfc2774)."];
    511u16  NETWORK_AUTHENTICATION_REQUIRED    "network_authentication_required"        "Network Authentication Required"        #[doc = "`511 Network Authentication Required`, defined in [RFC 6585](https://tools.ietf.org/html/rfc6585)."];
    598u16  NETWORK_READ_TIMEOUT_ERROR         "network_read_timeout_error"             "Network Read Timeout Error"             #[doc = "`598 Network Read Timeout Error`, an informal convention used by some proxies to signal a read timeout behind them."];
    599u16  NETWORK_CONNECT_TIMEOUT_ERROR      "network_connect_timeout_error"          "Network Connect Timeout Error"          #[doc = "`599 Network Connect Timeout Error`, an informal convention used by some proxies to signal a connect timeout behind them."];
}

/// Look up a registered status entry by its code.
///
/// ```rust
/// # use httpstatus::status::registered;
/// assert_eq!(registered(404).map(|entry| entry.text), Some("Not Found"));
/// assert_eq!(registered(430), None);
/// ```
#[inline]
pub fn registered(code: u16) -> Option<&'static StatusEntry> {
    REGISTERED_STATUSES.get(&code)
}

/// Get the standardised reason phrase for a status code.
///
/// The reason phrase is defined as being exclusively for human readers. You should
/// avoid deriving any meaning from it at all costs.
///
/// This is total: codes with no registered phrase get [`UNASSIGNED`].
///
/// ```rust
/// # use httpstatus::status::reason_phrase;
/// assert_eq!(reason_phrase(404), "Not Found");
/// assert_eq!(reason_phrase(430), "Unassigned");
/// ```
#[inline]
pub fn reason_phrase(code: u16) -> &'static str {
    match registered(code) {
        Some(entry) => entry.text,
        None => UNASSIGNED,
    }
}

/// Determine the response class of a status code, based on its first digit.
///
/// Shorthand for [`ResponseClass::of`].
#[inline]
pub fn response_class(code: u16) -> ResponseClass {
    ResponseClass::of(code)
}

/// The class of an HTTP status code.
///
/// [RFC 7231, section 6 (Response Status Codes)](https://tools.ietf.org/html/rfc7231#section-6):
///
/// > The first digit of the status-code defines the class of response.
/// > The last two digits do not have any categorization role.
///
/// Because this crate accepts any `u16` as a code, there is a sixth class,
/// [`Unknown`](ResponseClass::Unknown), for codes outside 100–599. Note in
/// particular that the code 0 unreachable sentinel is `Unknown` here while still
/// counting as an error for [`Status::is_error`]; classification and error‐ness
/// answer different questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResponseClass {
    /// 1xx (Informational): The request was received, continuing process
    Informational,

    /// 2xx (Successful): The request was successfully received, understood, and accepted
    Successful,

    /// 3xx (Redirection): Further action needs to be taken in order to complete the request
    Redirection,

    /// 4xx (Client Error): The request contains bad syntax or cannot be fulfilled
    ClientError,

    /// 5xx (Server Error): The server failed to fulfill an apparently valid request
    ServerError,

    /// Anything outside 100–599, which no HTTP peer should ever send
    Unknown,
}

impl ResponseClass {
    /// Classify a status code by its first digit.
    ///
    /// ```rust
    /// # use httpstatus::status::ResponseClass;
    /// assert_eq!(ResponseClass::of(150), ResponseClass::Informational);
    /// assert_eq!(ResponseClass::of(404), ResponseClass::ClientError);
    /// assert_eq!(ResponseClass::of(600), ResponseClass::Unknown);
    /// ```
    pub fn of(code: u16) -> ResponseClass {
        if code < 100 || code > 599 {
            ResponseClass::Unknown
        } else if code < 200 {
            ResponseClass::Informational
        } else if code < 300 {
            ResponseClass::Successful
        } else if code < 400 {
            ResponseClass::Redirection
        } else if code < 500 {
            ResponseClass::ClientError
        } else {
            ResponseClass::ServerError
        }
    }

    /// The conventional English name of the class.
    pub fn as_str(&self) -> &'static str {
        match *self {
            ResponseClass::Informational => "Informational",
            ResponseClass::Successful => "Successful",
            ResponseClass::Redirection => "Redirection",
            ResponseClass::ClientError => "Client Error",
            ResponseClass::ServerError => "Server Error",
            ResponseClass::Unknown => "Unknown Class",
        }
    }
}

/// Formats the class as its conventional English name, e.g. `Client Error`.
impl fmt::Display for ResponseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP status: a code paired with its reason phrase.
///
/// The usual ways to get one are [`Status::new`] (phrase resolved through the
/// registry) and the registry constants ([`Status::NOT_FOUND`] and friends). An
/// explicit phrase can be supplied with [`Status::with_text`]. However obtained,
/// a `Status` is immutable; two statuses built from the same code are equal.
///
/// ```rust
/// use httpstatus::Status;
///
/// let status = Status::new(404);
/// assert_eq!(status, Status::NOT_FOUND);
/// assert_eq!(status.to_string(), "404 (Not Found)");
/// ```
///
/// Unknown codes are not an error; they degrade to the unassigned phrase:
///
/// ```rust
/// # use httpstatus::Status;
/// assert_eq!(Status::new(430).text(), "Unassigned");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Status {
    code: u16,
    text: Cow<'static, str>,
}

impl Status {
    /// Create a `Status` from a code, resolving the reason phrase through the
    /// registry.
    ///
    /// This never fails: a code that is not in the registry gets the
    /// [`UNASSIGNED`] phrase.
    pub fn new(code: u16) -> Status {
        Status {
            code,
            text: Cow::Borrowed(reason_phrase(code)),
        }
    }

    /// Create a `Status` with an explicit reason phrase in place of the
    /// registered one.
    ///
    /// The class is still derived from the code alone:
    ///
    /// ```rust
    /// # use httpstatus::{status::ResponseClass, Status};
    /// let status = Status::with_text(404, "No Such User");
    /// assert_eq!(status.text(), "No Such User");
    /// assert_eq!(status.class(), ResponseClass::ClientError);
    /// ```
    pub fn with_text(code: u16, text: impl Into<Cow<'static, str>>) -> Status {
        Status {
            code,
            text: text.into(),
        }
    }

    /// The numeric status code.
    #[inline]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The reason phrase.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The registry name for this status's code (`"not_found"` for 404), or
    /// `None` if the code is not registered.
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        registered(self.code).map(|entry| entry.name)
    }

    /// The response class of this status's code.
    ///
    /// Always derived from the code by the first-digit rule, whether or not the
    /// code is registered.
    #[inline]
    pub fn class(&self) -> ResponseClass {
        ResponseClass::of(self.code)
    }

    /// Whether this status indicates an error.
    ///
    /// True for code 0 (the unreachable sentinel) and for codes in 400–500
    /// inclusive. The upper bound deliberately takes in 500 even though its
    /// response class is [`ServerError`](ResponseClass::ServerError);
    /// classification and error‐ness answer different questions.
    ///
    /// ```rust
    /// # use httpstatus::Status;
    /// assert!(Status::new(404).is_error());
    /// assert!(Status::new(500).is_error());
    /// assert!(Status::UNREACHABLE.is_error());
    /// assert!(!Status::new(501).is_error());
    /// assert!(!Status::new(200).is_error());
    /// ```
    pub fn is_error(&self) -> bool {
        self.code == 0 || (self.code >= 400 && self.code <= 500)
    }

    /// Construct an [`HttpError`] from this status, with the response class name
    /// as the message body.
    ///
    /// ```rust
    /// # use httpstatus::Status;
    /// let err = Status::new(404).error().unwrap();
    /// assert_eq!(err.code(), 404);
    /// assert_eq!(err.to_string(), "404 (Not Found) Client Error");
    /// ```
    ///
    /// A status that is not error‐classified refuses:
    ///
    /// ```rust
    /// # use httpstatus::Status;
    /// assert!(Status::new(200).error().is_err());
    /// ```
    pub fn error(&self) -> Result<HttpError, NotAnError> {
        self.error_with(self.class())
    }

    /// Construct an [`HttpError`] from this status with an explicit message body.
    ///
    /// Anything that implements [`fmt::Display`] will do: a string, the output of
    /// `format!`, or another error (whose message is then used).
    ///
    /// ```rust
    /// # use httpstatus::Status;
    /// let err = Status::new(404).error_with(format!("no row for id {}", 17)).unwrap();
    /// assert_eq!(err.to_string(), "404 (Not Found) no row for id 17");
    /// ```
    pub fn error_with<M: fmt::Display>(&self, message: M) -> Result<HttpError, NotAnError> {
        if self.is_error() {
            Ok(HttpError::new(self.code, format!("{} {}", self, message)))
        } else {
            Err(NotAnError::new(self.code))
        }
    }
}

/// Formats the status as the code followed by the parenthesised reason phrase.
///
/// ```rust
/// # use httpstatus::Status;
/// assert_eq!(format!("{}", Status::IM_A_TEAPOT), "418 (I'm a teapot)");
/// assert_eq!(format!("{}", Status::new(430)), "430 (Unassigned)");
/// ```
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_phrases_match_the_table() {
        for entry in STATUS_TABLE {
            assert_eq!(reason_phrase(entry.code), entry.text);
        }
    }

    #[test]
    fn map_and_table_agree() {
        assert_eq!(REGISTERED_STATUSES.len(), STATUS_TABLE.len());
        for entry in STATUS_TABLE {
            assert_eq!(REGISTERED_STATUSES.get(&entry.code), Some(entry));
        }
    }

    #[test]
    fn codes_and_names_are_unique() {
        for (i, a) in STATUS_TABLE.iter().enumerate() {
            for b in &STATUS_TABLE[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate code {}", a.code);
                assert_ne!(a.name, b.name, "duplicate name {}", a.name);
            }
        }
    }

    #[test]
    fn table_is_in_code_order() {
        for pair in STATUS_TABLE.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }

    #[test]
    fn unregistered_codes_get_the_sentinel() {
        for code in [1, 99, 103, 227, 430, 600, 9999] {
            assert_eq!(reason_phrase(code), UNASSIGNED);
            assert_eq!(Status::new(code).text(), UNASSIGNED);
        }
    }

    #[test]
    fn classes_follow_the_first_digit() {
        for entry in STATUS_TABLE {
            let expected = match entry.code {
                0 => ResponseClass::Unknown,
                100..=199 => ResponseClass::Informational,
                200..=299 => ResponseClass::Successful,
                300..=399 => ResponseClass::Redirection,
                400..=499 => ResponseClass::ClientError,
                500..=599 => ResponseClass::ServerError,
                _ => unreachable!("code {} outside the table's ranges", entry.code),
            };
            assert_eq!(response_class(entry.code), expected);
        }
    }

    #[test]
    fn class_boundaries() {
        assert_eq!(response_class(50), ResponseClass::Unknown);
        assert_eq!(response_class(99), ResponseClass::Unknown);
        assert_eq!(response_class(100), ResponseClass::Informational);
        assert_eq!(response_class(150), ResponseClass::Informational);
        assert_eq!(response_class(199), ResponseClass::Informational);
        assert_eq!(response_class(200), ResponseClass::Successful);
        assert_eq!(response_class(399), ResponseClass::Redirection);
        assert_eq!(response_class(404), ResponseClass::ClientError);
        assert_eq!(response_class(500), ResponseClass::ServerError);
        assert_eq!(response_class(599), ResponseClass::ServerError);
        assert_eq!(response_class(600), ResponseClass::Unknown);
    }

    #[test]
    fn class_names() {
        assert_eq!(ResponseClass::Informational.to_string(), "Informational");
        assert_eq!(ResponseClass::Successful.to_string(), "Successful");
        assert_eq!(ResponseClass::Redirection.to_string(), "Redirection");
        assert_eq!(ResponseClass::ClientError.to_string(), "Client Error");
        assert_eq!(ResponseClass::ServerError.to_string(), "Server Error");
        assert_eq!(ResponseClass::Unknown.to_string(), "Unknown Class");
    }

    #[test]
    fn display_is_code_and_parenthesised_phrase() {
        assert_eq!(Status::new(404).to_string(), "404 (Not Found)");
        assert_eq!(Status::new(200).to_string(), "200 (OK)");
        assert_eq!(Status::new(430).to_string(), "430 (Unassigned)");
        assert_eq!(
            Status::with_text(404, "No Such User").to_string(),
            "404 (No Such User)"
        );
    }

    #[test]
    fn construction_is_idempotent() {
        for entry in STATUS_TABLE {
            assert_eq!(Status::new(entry.code), Status::new(entry.code));
        }
        assert_eq!(Status::new(430), Status::new(430));
    }

    #[test]
    fn registry_constants_match_plain_construction() {
        assert_eq!(Status::UNREACHABLE, Status::new(0));
        assert_eq!(Status::OK, Status::new(200));
        assert_eq!(Status::NOT_FOUND, Status::new(404));
        assert_eq!(Status::IM_A_TEAPOT, Status::new(418));
        assert_eq!(Status::NETWORK_CONNECT_TIMEOUT_ERROR, Status::new(599));
    }

    #[test]
    fn names_resolve_for_registered_codes_only() {
        assert_eq!(Status::new(404).name(), Some("not_found"));
        assert_eq!(Status::new(0).name(), Some("unreachable"));
        assert_eq!(Status::new(430).name(), None);
    }

    #[test]
    fn error_policy_covers_zero_and_the_inclusive_bound() {
        assert!(Status::new(0).is_error());
        assert!(Status::new(400).is_error());
        assert!(Status::new(499).is_error());
        assert!(Status::new(500).is_error());
        assert!(!Status::new(399).is_error());
        assert!(!Status::new(501).is_error());
        assert!(!Status::new(200).is_error());
    }

    #[test]
    fn error_defaults_to_the_class_name() {
        let err = Status::new(404).error().unwrap();
        assert_eq!(err.code(), 404);
        assert_eq!(err.to_string(), "404 (Not Found) Client Error");
        assert!(err.to_string().ends_with("Client Error"));

        let err = Status::new(500).error().unwrap();
        assert_eq!(err.to_string(), "500 (Internal Server Error) Server Error");

        // The sentinel is an error but has no known class.
        let err = Status::UNREACHABLE.error().unwrap();
        assert_eq!(err.code(), 0);
        assert_eq!(err.to_string(), "0 (Unreachable) Unknown Class");
    }

    #[test]
    fn error_refuses_non_error_statuses() {
        let refused = Status::new(200).error().unwrap_err();
        assert_eq!(refused.code(), 200);
        assert_eq!(
            refused.to_string(),
            "a status code of 200 does not represent an error"
        );
        assert!(Status::new(301).error_with("nope").is_err());
        assert!(Status::new(501).error().is_err());
    }

    #[test]
    fn error_with_takes_anything_displayable() {
        let err = Status::new(404)
            .error_with(format!("no row for id {}", 17))
            .unwrap();
        assert_eq!(err.to_string(), "404 (Not Found) no row for id 17");

        // Another error works too; its message becomes the body.
        let cause = Status::new(503).error().unwrap_err();
        let err = Status::new(400).error_with(&cause).unwrap();
        assert_eq!(
            err.to_string(),
            "400 (Bad Request) a status code of 503 does not represent an error"
        );
    }

    #[test]
    fn custom_text_keeps_the_derived_class() {
        let status = Status::with_text(404, "Custom");
        assert_eq!(status.text(), "Custom");
        assert_eq!(status.class(), ResponseClass::ClientError);
        assert_eq!(status.code(), 404);
    }
}
