//! Handler for the power-of-two check tool.

use crate::dispatch::error::DispatchError;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::math::is_power_of_two;

use super::required_number;

pub(crate) const TOOL: &str = "is-power-of-two";

/// Stateless handler: checks the request's numeric `value` and renders the
/// boolean result.
pub(crate) fn handle_is_power_of_two(
    request: &ToolRequest,
) -> Result<ToolResponse, DispatchError> {
    let number = required_number(request)?;
    Ok(ToolResponse::text(is_power_of_two(number).to_string()))
}
