/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP transport seam and its reqwest implementation
pub mod http;
/// Request models for API calls
pub mod requests;
/// Success/failure discrimination of API answers
pub mod response;
/// Response models from API calls
pub mod responses;
/// Exchange timestamp codec
pub mod timestamp;
