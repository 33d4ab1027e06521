/// Default host of the Stockfighter API
pub const DEFAULT_HOST: &str = "https://api.stockfighter.io";
/// Default port of the Stockfighter API
pub const DEFAULT_PORT: u16 = 443;
/// Fixed sub-path under which every order book endpoint lives
pub const API_BASE_PATH: &str = "ob/api";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Header carrying the static API key on authorized endpoints
pub const AUTHORIZATION_HEADER: &str = "X-Starfighter-Authorization";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("stockfighter-client/", env!("CARGO_PKG_VERSION"));
/// Price sent with orders that do not carry a limit price (market orders)
pub const DEFAULT_ORDER_PRICE: u64 = 0;
