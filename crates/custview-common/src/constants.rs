//! System-wide constants.

/// Environment variable holding the base URL of the customer API.
pub const API_ENDPOINT_VAR: &str = "API_ENDPOINT";

/// Name of the environment file consulted when the process env lacks a value.
pub const ENV_FILE: &str = ".env";

/// Path prefix of the customer read page. The identifier follows it.
pub const READ_ROUTE_PREFIX: &str = "/customers/read/";

/// Route pattern of the customer read page, as shown in route listings.
pub const READ_ROUTE_PATTERN: &str = "/customers/read/{id}";

/// Path of the customer list, the usual view before a read page.
pub const LIST_ROUTE: &str = "/customers";

/// Collection path on the customer API.
pub const CUSTOMERS_RESOURCE: &str = "customers";

/// Query parameter carrying the customer identifier.
pub const CUSTOMER_ID_PARAM: &str = "customer_id";

/// Label of the back navigation control.
pub const BACK_LABEL: &str = "戻る";

/// Label of the retry control shown after a failed fetch.
pub const RETRY_LABEL: &str = "再試行";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application name used in CLI output and logs.
pub const APP_NAME: &str = "custview";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "cvw";
